//! Ratatui 终端 UI 模块
//!
//! 提供基于 ratatui 的启动配置向导。

pub mod app;
pub mod components;
pub mod display;
pub mod event;
pub mod labels;
pub mod screens;
pub mod state;
pub mod theme;
pub mod ui;

pub use app::{Flow, TuiApp, handle_event};
pub use display::{display_summary, should_run_interactive};
pub use event::{EventPoll, TuiEvent};
pub use state::{
    AppState, FormRow, InputState, MenuItem, MenuState, Screen, SelectionState, TuiResult,
    WizardState, WizardStep, reset_to_main_menu,
};
pub use theme::{Theme, theme};
pub use ui::render;
