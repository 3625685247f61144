//! 配置向导状态

use crate::config::{self, LaunchConfig};
use crate::error::Result;
use crate::form::{Device, EnumOption, FieldName, FormEvent, LaunchForm};
use crate::tui::labels::field_label;
use crate::tui::state::input::InputState;
use crate::tui::state::selection::{Selectable, SelectionState};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::{info, warn};

/// 配置向导步骤
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    /// 选择已保存配置
    ConfigSelect,
    /// 配置表单
    #[default]
    Form,
    /// 配置摘要
    Summary,
    /// 输入配置名称
    ConfigName,
}

impl WizardStep {
    /// 获取标题
    pub fn title(&self) -> String {
        match self {
            WizardStep::ConfigSelect => rust_i18n::t!("available_configurations").to_string(),
            WizardStep::Form => rust_i18n::t!("configuration_form").to_string(),
            WizardStep::Summary => rust_i18n::t!("configuration_summary").to_string(),
            WizardStep::ConfigName => rust_i18n::t!("enter_config_name").to_string(),
        }
    }
}

/// 表单行
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRow {
    /// 字段行
    Field(FieldName),
    /// “查看摘要”行
    Review,
}

/// 配置向导状态
#[derive(Debug)]
pub struct WizardState {
    /// 当前步骤
    pub step: WizardStep,
    /// 表单控制器
    pub form: LaunchForm,
    /// 当前行索引
    pub selected_row: usize,
    /// 设备行内光标
    pub device_cursor: usize,
    /// 配置目录
    pub config_dir: PathBuf,
    /// 已保存配置列表
    pub saved_configs: Vec<PathBuf>,
    /// 配置列表选择状态
    pub config_list: SelectionState,
    /// 配置名称输入
    pub config_name: InputState,
    /// 加载来源
    pub loaded_from: Option<PathBuf>,
    /// 错误信息
    pub error_message: Option<String>,
    /// 等待确认覆盖已有配置
    pub overwrite_pending: bool,
    /// 最近一次表单变更
    last_change: Rc<RefCell<Option<FormEvent>>>,
}

impl WizardState {
    /// 创建向导状态（表单为默认值）
    pub fn new(config_dir: PathBuf) -> Self {
        let last_change = Rc::new(RefCell::new(None));
        let mut form = LaunchForm::new();
        let sink = Rc::clone(&last_change);
        form.subscribe(move |event: &FormEvent| {
            *sink.borrow_mut() = Some(*event);
        });

        Self {
            step: WizardStep::Form,
            form,
            selected_row: 0,
            device_cursor: 0,
            config_dir,
            saved_configs: Vec::new(),
            config_list: SelectionState::with_count(0),
            config_name: InputState::default(),
            loaded_from: None,
            error_message: None,
            overwrite_pending: false,
            last_change,
        }
    }

    /// 最近一次表单变更
    pub fn last_change(&self) -> Option<FormEvent> {
        *self.last_change.borrow()
    }

    /// 进入配置选择步骤
    pub fn open_config_select(&mut self) {
        self.refresh_configs();
        self.step = WizardStep::ConfigSelect;
    }

    /// 刷新配置列表
    pub fn refresh_configs(&mut self) {
        self.saved_configs = config::list_saved_configs(&self.config_dir);
        self.config_list.set_count(self.saved_configs.len());
    }

    /// 当前选中的配置文件
    pub fn selected_config_path(&self) -> Option<&Path> {
        self.config_list
            .selected()
            .and_then(|i| self.saved_configs.get(i))
            .map(PathBuf::as_path)
    }

    /// 加载选中的配置并进入表单
    pub fn load_selected_config(&mut self) -> bool {
        let Some(path) = self.selected_config_path().map(Path::to_path_buf) else {
            return false;
        };

        match LaunchConfig::load_from_file(&path) {
            Ok(selection) => {
                self.form.load_config(&selection);
                let name = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().to_string())
                    .unwrap_or_default();
                self.config_name = InputState::with_value(&name);
                info!(path = %path.display(), "Opened saved selection");
                self.loaded_from = Some(path);
                self.error_message = None;
                self.selected_row = 0;
                self.device_cursor = self
                    .form
                    .devices()
                    .first()
                    .map(EnumOption::to_index)
                    .unwrap_or(0);
                self.step = WizardStep::Form;
                true
            }
            Err(e) => {
                warn!(error = %e, "Failed to open saved selection");
                self.error_message = Some(e.to_string());
                false
            }
        }
    }

    /// 全部表单行
    pub fn rows(&self) -> Vec<FormRow> {
        FieldName::all()
            .iter()
            .copied()
            .map(FormRow::Field)
            .chain(std::iter::once(FormRow::Review))
            .collect()
    }

    /// 当前行
    pub fn selected_row(&self) -> FormRow {
        self.rows()
            .get(self.selected_row)
            .copied()
            .unwrap_or(FormRow::Review)
    }

    /// 下一行
    pub fn next_row(&mut self) {
        let count = self.rows().len();
        self.selected_row = (self.selected_row + 1) % count;
    }

    /// 上一行
    pub fn prev_row(&mut self) {
        let count = self.rows().len();
        self.selected_row = if self.selected_row == 0 {
            count - 1
        } else {
            self.selected_row - 1
        };
    }

    /// 设备光标所指设备
    pub fn cursor_device(&self) -> Device {
        Device::from_index(self.device_cursor)
    }

    /// 当前行切换到下一个选项（设备行移动光标）
    pub fn option_next(&mut self) {
        self.step_option(true);
    }

    /// 当前行切换到上一个选项（设备行移动光标）
    pub fn option_prev(&mut self) {
        self.step_option(false);
    }

    fn step_option(&mut self, forward: bool) {
        let FormRow::Field(field) = self.selected_row() else {
            return;
        };

        if field.is_multi_select() {
            let count = Device::variants().len();
            self.device_cursor = if forward {
                (self.device_cursor + 1) % count
            } else if self.device_cursor == 0 {
                count - 1
            } else {
                self.device_cursor - 1
            };
            return;
        }

        let result = if forward {
            self.form.select_next_option(field)
        } else {
            self.form.select_prev_option(field)
        };
        if let Err(e) = result {
            self.error_message = Some(e.to_string());
        } else {
            self.error_message = None;
        }
    }

    /// 切换设备光标所指设备
    pub fn toggle_cursor_device(&mut self) {
        if self.selected_row() == FormRow::Field(FieldName::Devices) {
            self.form.toggle_device(self.cursor_device());
            self.error_message = None;
        }
    }

    /// 进入摘要，表单不完整时给出缺失字段
    pub fn enter_summary(&mut self) -> bool {
        let missing = self.form.missing_fields();
        if missing.is_empty() {
            self.error_message = None;
            self.step = WizardStep::Summary;
            return true;
        }

        let labels: Vec<String> = missing.iter().map(|f| field_label(*f).to_string()).collect();
        self.error_message = Some(format!(
            "{} {}",
            rust_i18n::t!("missing_fields_error"),
            labels.join(", ")
        ));
        false
    }

    /// 返回表单
    pub fn back_to_form(&mut self) {
        self.step = WizardStep::Form;
        self.error_message = None;
    }

    /// 进入命名步骤
    pub fn enter_naming(&mut self) {
        self.step = WizardStep::ConfigName;
        self.error_message = None;
        self.overwrite_pending = false;
    }

    /// 保存目标已存在且不是当前打开的配置
    pub fn save_target_conflicts(&self) -> bool {
        let name = self.config_name.value();
        if config::validate_config_name(&name).is_err() {
            return false;
        }
        let path = config::config_path(&self.config_dir, &name);
        path.exists() && self.loaded_from.as_deref() != Some(path.as_path())
    }

    /// 校验名称并保存当前选择
    pub fn save(&mut self) -> Result<(PathBuf, LaunchConfig)> {
        let name = self.config_name.value();
        config::validate_config_name(&name)?;

        let selection = self.form.build_config()?;
        let path = config::config_path(&self.config_dir, &name);
        selection.save_to_file(&path)?;
        self.overwrite_pending = false;

        Ok((path, selection))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormStatus;
    use tempfile::tempdir;

    fn row_index(wizard: &WizardState, row: FormRow) -> usize {
        wizard.rows().iter().position(|r| *r == row).unwrap()
    }

    #[test]
    fn test_rows_end_with_review() {
        let wizard = WizardState::new(PathBuf::from("unused"));
        let rows = wizard.rows();
        assert_eq!(rows.len(), FieldName::all().len() + 1);
        assert_eq!(rows.last(), Some(&FormRow::Review));
    }

    #[test]
    fn test_row_navigation_wraps() {
        let mut wizard = WizardState::new(PathBuf::from("unused"));
        wizard.prev_row();
        assert_eq!(wizard.selected_row(), FormRow::Review);
        wizard.next_row();
        assert_eq!(wizard.selected_row(), FormRow::Field(FieldName::OpenVinoInstalled));
    }

    #[test]
    fn test_device_row_moves_cursor_and_toggles() {
        let mut wizard = WizardState::new(PathBuf::from("unused"));
        wizard.selected_row = row_index(&wizard, FormRow::Field(FieldName::Devices));

        wizard.option_next();
        assert_eq!(wizard.cursor_device(), Device::Gpu);
        wizard.toggle_cursor_device();
        assert_eq!(wizard.form.devices(), &[Device::Cpu, Device::Gpu]);

        wizard.option_prev();
        wizard.option_prev();
        assert_eq!(wizard.cursor_device(), Device::Hddl);
    }

    #[test]
    fn test_option_row_cycles_form_value() {
        let mut wizard = WizardState::new(PathBuf::from("unused"));
        wizard.selected_row = row_index(&wizard, FormRow::Field(FieldName::HttpProxy));

        wizard.option_next();
        assert!(wizard.form.http_proxy_control().is_checked());
        assert_eq!(
            wizard.last_change(),
            Some(FormEvent {
                field: Some(FieldName::HttpProxy),
                status: FormStatus::Valid
            })
        );
    }

    #[test]
    fn test_incomplete_form_blocks_summary() {
        let mut wizard = WizardState::new(PathBuf::from("unused"));
        wizard.selected_row = row_index(&wizard, FormRow::Field(FieldName::Devices));
        wizard.toggle_cursor_device();

        assert!(!wizard.enter_summary());
        assert_eq!(wizard.step, WizardStep::Form);
        assert!(wizard.error_message.is_some());

        wizard.toggle_cursor_device();
        assert!(wizard.enter_summary());
        assert_eq!(wizard.step, WizardStep::Summary);
    }

    #[test]
    fn test_save_then_open() {
        let dir = tempdir().unwrap();
        let mut wizard = WizardState::new(dir.path().to_path_buf());
        wizard.form.toggle_device(Device::Ncs2);
        wizard.config_name = InputState::with_value("bench");

        let (path, saved) = wizard.save().unwrap();
        assert_eq!(path, dir.path().join("bench.toml"));
        assert_eq!(saved.devices, vec![Device::Cpu, Device::Ncs2]);

        let mut reopened = WizardState::new(dir.path().to_path_buf());
        reopened.open_config_select();
        assert_eq!(reopened.step, WizardStep::ConfigSelect);
        assert!(reopened.load_selected_config());
        assert_eq!(reopened.form.devices(), &[Device::Cpu, Device::Ncs2]);
        assert_eq!(reopened.config_name.value(), "bench");
        assert_eq!(reopened.step, WizardStep::Form);
    }

    #[test]
    fn test_open_moves_cursor_to_first_device() {
        let dir = tempdir().unwrap();
        let selection = LaunchConfig {
            devices: vec![Device::Hddl, Device::Gpu],
            ..LaunchConfig::default()
        };
        selection
            .save_to_file(config::config_path(dir.path(), "edge"))
            .unwrap();

        let mut wizard = WizardState::new(dir.path().to_path_buf());
        wizard.open_config_select();
        assert!(wizard.load_selected_config());
        assert_eq!(wizard.cursor_device(), Device::Hddl);
    }

    #[test]
    fn test_existing_name_conflicts_unless_opened() {
        let dir = tempdir().unwrap();
        LaunchConfig::default()
            .save_to_file(config::config_path(dir.path(), "lab"))
            .unwrap();

        let mut wizard = WizardState::new(dir.path().to_path_buf());
        wizard.config_name = InputState::with_value("lab");
        assert!(wizard.save_target_conflicts());
        wizard.config_name = InputState::with_value("other");
        assert!(!wizard.save_target_conflicts());

        let mut reopened = WizardState::new(dir.path().to_path_buf());
        reopened.open_config_select();
        assert!(reopened.load_selected_config());
        assert!(!reopened.save_target_conflicts());
    }

    #[test]
    fn test_save_rejects_bad_name() {
        let dir = tempdir().unwrap();
        let mut wizard = WizardState::new(dir.path().to_path_buf());
        wizard.config_name = InputState::with_value("../escape");
        assert!(wizard.save().is_err());
        assert!(config::list_saved_configs(dir.path()).is_empty());
    }

    #[test]
    fn test_open_with_no_configs() {
        let dir = tempdir().unwrap();
        let mut wizard = WizardState::new(dir.path().to_path_buf());
        wizard.open_config_select();
        assert!(!wizard.load_selected_config());
    }
}
