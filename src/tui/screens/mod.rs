//! 屏幕渲染

pub mod config_wizard;
pub mod exit;
pub mod main_menu;
