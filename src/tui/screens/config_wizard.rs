//! 配置向导渲染

use crate::config::LaunchConfig;
use crate::form::{ControlStatus, Device, EnumOption, FieldName, FormStatus, LaunchForm};
use crate::tui::components::{
    option_mark, render_hint, render_title_block, three_panel_layout, wrap_lines,
};
use crate::tui::labels::{
    bool_label, devices_label, field_label, launcher_label, option_label, status_label,
};
use crate::tui::state::{AppState, FormRow, WizardState, WizardStep};
use crate::tui::theme::{config, theme};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Cell, List, ListItem, Paragraph, Row, Table},
};
use rust_i18n::t;
use std::borrow::Cow;
use unicode_width::UnicodeWidthStr;

/// 渲染配置向导
pub fn draw(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let [header, body, footer] = three_panel_layout(area);

    let status = state.wizard.form.status();
    let badge_style = match status {
        FormStatus::Valid => theme().success(),
        FormStatus::Incomplete => theme().error(),
    };
    let badge = Span::styled(status_label(status).into_owned(), badge_style);
    render_title_block(&state.wizard.step.title(), Some(badge), frame, header);

    let [content, message] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(body);

    match state.wizard.step {
        WizardStep::ConfigSelect => draw_config_select(frame, content, state),
        WizardStep::Form => draw_form(frame, content, state),
        WizardStep::Summary => draw_summary(frame, content, &state.wizard.form),
        WizardStep::ConfigName => draw_config_name(frame, content, &state.wizard),
    }

    draw_message_line(frame, message, &state.wizard);

    let hint_text = match state.wizard.step {
        WizardStep::ConfigSelect => t!("select_config_hint"),
        WizardStep::Form => form_hint(&state.wizard),
        WizardStep::Summary => t!("summary_hint"),
        WizardStep::ConfigName => t!("config_name_hint"),
    };
    render_hint(&hint_text, frame, footer);
}

fn form_hint(wizard: &WizardState) -> Cow<'static, str> {
    match wizard.selected_row() {
        FormRow::Review => t!("form_review_hint"),
        FormRow::Field(field) if field.is_multi_select() => t!("form_devices_hint"),
        FormRow::Field(_) => t!("form_option_hint"),
    }
}

fn draw_message_line(frame: &mut Frame, area: Rect, wizard: &WizardState) {
    let line = if let Some(error) = &wizard.error_message {
        Line::from(format!("{} {}", config::INVALID_MARK, error)).style(theme().error())
    } else if let Some(event) = wizard.last_change() {
        Line::from(vec![
            Span::styled(t!("last_change").into_owned(), theme().hint()),
            Span::raw(" "),
            Span::styled(
                match event.field {
                    Some(field) => field_label(field).into_owned(),
                    None => t!("all_fields").into_owned(),
                },
                theme().accent(),
            ),
            Span::raw(" → "),
            Span::styled(status_label(event.status).into_owned(), theme().hint()),
        ])
    } else {
        Line::default()
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_config_select(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let wizard = &mut state.wizard;
    let content_width = list_content_width(area);

    let items: Vec<ListItem> = if wizard.saved_configs.is_empty() {
        let message = t!("no_configs_found");
        vec![ListItem::new(wrap_lines(message.as_ref(), content_width)).style(theme().hint())]
    } else {
        wizard
            .saved_configs
            .iter()
            .map(|path| {
                let name = path
                    .file_stem()
                    .map(|os| os.to_string_lossy().to_string())
                    .unwrap_or_else(|| path.display().to_string());
                ListItem::new(wrap_lines(&name, content_width)).style(theme().normal())
            })
            .collect()
    };

    let title = format!(
        "{} ({})",
        t!("available_configurations"),
        wizard.config_dir.display()
    );
    let list = List::new(items)
        .block(
            Block::bordered()
                .title(title)
                .border_type(BorderType::Rounded),
        )
        .highlight_style(theme().selected())
        .highlight_symbol(config::HIGHLIGHT_SYMBOL);

    frame.render_stateful_widget(list, area, &mut wizard.config_list.list_state);
}

fn draw_form(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let wizard = &state.wizard;
    let rows = wizard.rows();
    let selected_idx = wizard.selected_row.min(rows.len().saturating_sub(1));
    let label_width = FieldName::all()
        .iter()
        .map(|f| field_label(*f).width())
        .max()
        .unwrap_or(0);

    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let is_selected = idx == selected_idx;
            match row {
                FormRow::Field(field) => {
                    form_field_item(*field, wizard, is_selected, label_width)
                }
                FormRow::Review => {
                    let content = format!("→ {}", t!("go_to_summary"));
                    let style = if is_selected {
                        theme().selected().add_modifier(Modifier::BOLD)
                    } else {
                        theme().normal()
                    };
                    ListItem::new(content).style(style)
                }
            }
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::bordered()
                .title(t!("form_fields"))
                .border_type(BorderType::Rounded),
        )
        .highlight_symbol(config::HIGHLIGHT_SYMBOL);

    state.select_state.select(Some(selected_idx));
    frame.render_stateful_widget(list, area, &mut state.select_state);
}

fn form_field_item(
    field: FieldName,
    wizard: &WizardState,
    is_selected: bool,
    label_width: usize,
) -> ListItem<'static> {
    let form = &wizard.form;
    let descriptor = field.descriptor();

    let (mark, mark_style) = match form.control_status(field) {
        ControlStatus::Valid => (config::VALID_MARK, theme().success()),
        ControlStatus::Invalid => (config::INVALID_MARK, theme().error()),
    };
    let label = field_label(field);
    let padding = " ".repeat(label_width.saturating_sub(label.width()));
    let label_style = if descriptor.disabled {
        theme().disabled()
    } else if is_selected {
        theme().title()
    } else {
        theme().normal()
    };

    let mut spans = vec![
        Span::styled(format!("{} ", mark), mark_style),
        Span::styled(format!("{}{}  ", label, padding), label_style),
    ];

    for (i, option) in descriptor.options.iter().enumerate() {
        let chosen = if field.is_multi_select() {
            Device::from_option(option.value).is_some_and(|d| form.is_device_selected(d))
        } else {
            form.is_selected(field, option.value)
        };
        let under_cursor = is_selected && field.is_multi_select() && i == wizard.device_cursor;

        let mut style = if descriptor.disabled {
            theme().disabled()
        } else if chosen {
            theme().accent().add_modifier(Modifier::BOLD)
        } else {
            theme().normal()
        };
        if under_cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }

        spans.push(Span::styled(
            format!(
                "{} {}",
                option_mark(field.is_multi_select(), chosen),
                option_label(option)
            ),
            style,
        ));
        spans.push(Span::raw("  "));
    }

    let row_style = if is_selected {
        Style::new().bg(theme().bg).add_modifier(Modifier::BOLD)
    } else {
        theme().normal()
    };
    ListItem::new(Line::from(spans)).style(row_style)
}

fn draw_summary(frame: &mut Frame, area: Rect, form: &LaunchForm) {
    let selection = match form.build_config() {
        Ok(selection) => selection,
        Err(e) => {
            let text = Paragraph::new(e.to_string())
                .style(theme().error())
                .block(Block::bordered().border_type(BorderType::Rounded));
            frame.render_widget(text, area);
            return;
        }
    };

    let value_width = summary_value_width(area);
    let rows: Vec<Row> = summary_rows(&selection)
        .into_iter()
        .map(|(field, value)| {
            Row::new(vec![
                Cell::from(field_label(field).into_owned()),
                Cell::from(wrap_lines(&value, value_width)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(config::SUMMARY_LABEL_WIDTH),
            Constraint::Fill(1),
        ],
    )
    .block(
        Block::bordered()
            .title(t!("configuration_summary"))
            .border_type(BorderType::Rounded),
    )
    .column_spacing(2)
    .style(theme().normal());

    frame.render_widget(table, area);
}

/// 摘要表格内容（字段顺序）
pub fn summary_rows(selection: &LaunchConfig) -> Vec<(FieldName, String)> {
    vec![
        (
            FieldName::OpenVinoInstalled,
            bool_label(selection.openvino_installed).into_owned(),
        ),
        (
            FieldName::DockerInstalled,
            bool_label(selection.docker_installed).into_owned(),
        ),
        (FieldName::MachineOs, selection.machine_os.to_string()),
        (FieldName::Devices, devices_label(&selection.devices)),
        (
            FieldName::WbLauncher,
            launcher_label(selection.start_with).into_owned(),
        ),
        (FieldName::HttpProxy, bool_label(selection.http_proxy).into_owned()),
        (FieldName::HttpsProxy, bool_label(selection.https_proxy).into_owned()),
        (FieldName::NoProxy, bool_label(selection.no_proxy).into_owned()),
    ]
}

fn draw_config_name(frame: &mut Frame, area: Rect, wizard: &WizardState) {
    let [input_area, info_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(1)]).areas(area);

    let input = Paragraph::new(wizard.config_name.value())
        .style(theme().normal())
        .block(
            Block::bordered()
                .title(t!("config_name_label"))
                .border_type(BorderType::Rounded)
                .border_style(theme().border()),
        );
    frame.render_widget(input, input_area);

    frame.set_cursor_position(name_cursor(input_area, wizard.config_name.visual_cursor()));

    let name = wizard.config_name.value();
    let target = crate::config::config_path(&wizard.config_dir, &name);
    let mut lines = vec![
        Line::from(t!("config_save_target")).style(theme().hint()),
        Line::from(target.display().to_string()).style(theme().accent()),
    ];
    if wizard.overwrite_pending {
        lines.push(Line::default());
        lines.push(
            Line::from(format!("'{}' {}", name.trim(), t!("config_exists_overwrite")))
                .style(theme().warning()),
        );
    }
    frame.render_widget(Paragraph::new(lines), info_area);
}

/// 输入框内光标位置（不超出边框）
fn name_cursor(input_area: Rect, visual_cursor: usize) -> Position {
    let offset = u16::try_from(visual_cursor).unwrap_or(u16::MAX);
    let cursor_x = input_area.x.saturating_add(1).saturating_add(offset);
    let max_x = input_area
        .x
        .saturating_add(input_area.width.saturating_sub(2));
    Position::new(cursor_x.min(max_x), input_area.y.saturating_add(1))
}

fn list_content_width(area: Rect) -> usize {
    let inner_width = area.width.saturating_sub(2) as usize;
    let highlight_width = UnicodeWidthStr::width(config::HIGHLIGHT_SYMBOL);
    inner_width.saturating_sub(highlight_width).max(1)
}

fn summary_value_width(area: Rect) -> usize {
    let inner_width = area.width.saturating_sub(2) as usize;
    let column_spacing = 2usize;
    inner_width
        .saturating_sub(config::SUMMARY_LABEL_WIDTH as usize + column_spacing)
        .max(1)
}
