//! Common UI components module
//!
//! Reusable layout pieces shared by the screens.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthChar;

use super::theme::{config, theme};

/// Header, body and footer areas
pub fn three_panel_layout(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(2),
    ])
    .areas(area)
}

/// Render a centered title block, with an optional right-aligned badge
pub fn render_title_block(title: &str, badge: Option<Span<'static>>, frame: &mut Frame, area: Rect) {
    let title_line = Line::from(format!(" {} ", title))
        .centered()
        .style(theme().title());

    let mut block = Block::bordered()
        .title(title_line)
        .border_type(BorderType::Rounded)
        .border_style(theme().border())
        .style(theme().normal());

    if let Some(badge) = badge {
        block = block.title(Line::from(vec![Span::raw(" "), badge, Span::raw(" ")]).right_aligned());
    }

    frame.render_widget(block, area);
}

/// Render bottom hint text
pub fn render_hint(hint: &str, frame: &mut Frame, area: Rect) {
    let hint_widget = Paragraph::new(hint)
        .style(theme().hint())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(hint_widget, area);
}

/// Radio or checkbox mark for an option
pub fn option_mark(multi_select: bool, selected: bool) -> &'static str {
    match (multi_select, selected) {
        (true, true) => config::CHECK_ON,
        (true, false) => config::CHECK_OFF,
        (false, true) => config::RADIO_ON,
        (false, false) => config::RADIO_OFF,
    }
}

/// Wrap text by display width
pub fn wrap_lines(value: &str, max_width: usize) -> Vec<Line<'static>> {
    if max_width == 0 {
        return vec![Line::from(String::new())];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for ch in value.chars() {
        if ch == '\n' {
            lines.push(Line::from(std::mem::take(&mut current)));
            current_width = 0;
            continue;
        }

        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + ch_width > max_width && !current.is_empty() {
            lines.push(Line::from(std::mem::take(&mut current)));
            current_width = 0;
        }

        current.push(ch);
        current_width += ch_width;
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(Line::from(current));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_by_display_width() {
        let lines = wrap_lines("CPU, GPU, NCS2", 5);
        assert_eq!(lines.len(), 3);

        let wide = wrap_lines("设备设备", 4);
        assert_eq!(wide.len(), 2);
    }

    #[test]
    fn test_wrap_empty() {
        assert_eq!(wrap_lines("", 10).len(), 1);
        assert_eq!(wrap_lines("abc", 0).len(), 1);
    }

    #[test]
    fn test_option_marks() {
        assert_eq!(option_mark(true, true), "[x]");
        assert_eq!(option_mark(false, false), "( )");
    }
}
