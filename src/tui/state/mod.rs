//! TUI 状态模块

pub mod app;
pub mod input;
pub mod menu;
pub mod selection;
pub mod wizard;

pub use app::{AppState, TuiResult, reset_to_main_menu};
pub use input::InputState;
pub use menu::{MenuItem, MenuState, Screen};
pub use selection::{Selectable, SelectionState};
pub use wizard::{FormRow, WizardState, WizardStep};
