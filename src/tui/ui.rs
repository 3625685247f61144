//! UI渲染模块
//!
//! 按当前屏幕分发渲染。

use crate::tui::screens::{config_wizard, exit, main_menu};
use crate::tui::state::{AppState, Screen};
use crate::tui::theme::theme;
use ratatui::{DefaultTerminal, Frame, layout::Rect, widgets::Block};

/// 渲染整个应用
pub fn render(terminal: &mut DefaultTerminal, state: &mut AppState) -> std::io::Result<()> {
    terminal.draw(|frame| draw(frame, frame.area(), state))?;
    Ok(())
}

/// 主渲染函数
pub fn draw(frame: &mut Frame, area: Rect, state: &mut AppState) {
    frame.render_widget(Block::new().style(theme().normal()), area);

    match state.current_screen {
        Screen::MainMenu => main_menu::draw(frame, area, state),
        Screen::Wizard => config_wizard::draw(frame, area, state),
        Screen::Exit => exit::draw(frame, area),
    }
}
