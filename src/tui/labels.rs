//! 本地化标签映射
//!
//! 将字段、选项与状态映射为稳定的翻译键，避免依赖 Debug 输出。

use crate::form::{Device, FieldName, FormStatus, Launcher, OptionValue, RadioOption};
use rust_i18n::t;
use std::borrow::Cow;

/// 字段标签的翻译键
fn field_key(field: FieldName) -> &'static str {
    match field {
        FieldName::OpenVinoInstalled => "field_openvino_installed",
        FieldName::DockerInstalled => "field_docker_installed",
        FieldName::MachineOs => "field_machine_os",
        FieldName::Devices => "field_devices",
        FieldName::WbLauncher => "field_start_with",
        FieldName::HttpProxy => "field_http_proxy",
        FieldName::HttpsProxy => "field_https_proxy",
        FieldName::NoProxy => "field_no_proxy",
    }
}

/// 字段标签（缺少翻译时使用描述符标签）
pub fn field_label(field: FieldName) -> Cow<'static, str> {
    let key = field_key(field);
    let label = t!(key);
    if label == key {
        Cow::Borrowed(field.descriptor().label)
    } else {
        Cow::Owned(label.into_owned())
    }
}

/// 选项标签（操作系统与设备名不翻译）
pub fn option_label(option: &RadioOption) -> Cow<'static, str> {
    match option.value {
        OptionValue::Bool(value) => bool_label(value),
        OptionValue::Text("pip") => launcher_label(Launcher::Pip),
        OptionValue::Text("docker") => launcher_label(Launcher::Docker),
        OptionValue::Text(_) => Cow::Borrowed(option.label),
    }
}

/// 启动方式标签
pub fn launcher_label(launcher: Launcher) -> Cow<'static, str> {
    match launcher {
        Launcher::Pip => t!("launcher_pip"),
        Launcher::Docker => t!("launcher_docker"),
    }
}

/// 布尔值标签
pub fn bool_label(value: bool) -> Cow<'static, str> {
    if value {
        t!("option_yes")
    } else {
        t!("option_no")
    }
}

/// 表单状态标签
pub fn status_label(status: FormStatus) -> Cow<'static, str> {
    match status {
        FormStatus::Valid => t!("form_status_valid"),
        FormStatus::Incomplete => t!("form_status_incomplete"),
    }
}

/// 设备列表（按选择顺序）
pub fn devices_label(devices: &[Device]) -> String {
    if devices.is_empty() {
        return t!("devices_none").to_string();
    }
    devices
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
