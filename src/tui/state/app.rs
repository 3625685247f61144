//! 应用状态

use crate::config::{LaunchConfig, default_config_dir};
use crate::tui::state::{MenuItem, MenuState, Screen, WizardState};
use ratatui::widgets::ListState;
use std::path::PathBuf;

/// TUI 运行结果
#[derive(Debug, Clone)]
pub struct TuiResult {
    /// 保存的启动配置
    pub config: LaunchConfig,
    /// 保存路径
    pub config_path: PathBuf,
}

/// 应用状态（包含 UI 状态）
#[derive(Debug)]
pub struct AppState {
    /// 当前屏幕
    pub current_screen: Screen,
    /// 退出确认前的屏幕
    pub previous_screen: Screen,
    /// 菜单状态
    pub menu_state: MenuState,
    /// 配置向导状态
    pub wizard: WizardState,
    /// 是否退出
    pub should_exit: bool,
    /// TUI 运行结果
    pub result: Option<TuiResult>,
    /// 表单列表状态
    pub select_state: ListState,
}

impl AppState {
    /// 使用指定配置目录创建
    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self {
            current_screen: Screen::MainMenu,
            previous_screen: Screen::MainMenu,
            menu_state: MenuState::with_count(MenuItem::count()),
            wizard: WizardState::new(config_dir),
            should_exit: false,
            result: None,
            select_state: {
                let mut state = ListState::default();
                state.select(Some(0));
                state
            },
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_config_dir(default_config_dir())
    }
}

/// 重置到主菜单
pub fn reset_to_main_menu(state: &mut AppState) {
    let config_dir = state.wizard.config_dir.clone();
    state.current_screen = Screen::MainMenu;
    state.previous_screen = Screen::MainMenu;
    state.menu_state = MenuState::with_count(MenuItem::count());
    state.wizard = WizardState::new(config_dir);
    state.should_exit = false;
    state.select_state.select(Some(0));
}
