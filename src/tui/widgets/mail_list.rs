//! Mail list widget: virtual-scrolling table of the mailbox view.

use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Row, Table};
use ratatui::Frame;

use super::{panel, truncate_str};
use crate::model::mail::LabelFilter;
use crate::tui::app::{App, PanelFocus};

/// Render the message list table with virtual scrolling.
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let state = app.controller.state();
    let title = match state.label {
        LabelFilter::All => format!(" {} ", state.folder),
        label => format!(" {label} (all folders) "),
    };
    let block = panel(&title, app.focus == PanelFocus::List, &app.theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 {
        return;
    }

    // Header row takes 1 line, rest is data
    let viewport_height = (inner.height as usize).saturating_sub(1);
    app.list_viewport_height = viewport_height;
    app.ensure_selected_visible();

    let theme = &app.theme;
    let flag_w = 2u16;
    let date_w = 17u16;
    let label_w = 10u16;
    let att_w = 2u16;
    let from_w = 22u16.min(inner.width / 4);
    let fixed = flag_w + date_w + from_w + label_w + att_w + 5;
    let subject_w = inner.width.saturating_sub(fixed);

    let constraints = [
        Constraint::Length(flag_w),
        Constraint::Length(date_w),
        Constraint::Length(from_w),
        Constraint::Min(subject_w),
        Constraint::Length(label_w),
        Constraint::Length(att_w),
    ];

    let header =
        Row::new(vec!["", "Date", "From", "Subject", "Label", ""]).style(theme.list_header);

    let messages = app.controller.visible_messages();
    let selected_id = app.controller.state().selected_message;
    let start = app.list_scroll_offset;
    let end = (start + viewport_height).min(messages.len());

    let rows: Vec<Row> = (start..end)
        .map(|vis_idx| {
            let m = messages[vis_idx];
            let flag = if m.starred {
                "*"
            } else if !m.read {
                "\u{2022}"
            } else {
                " "
            };
            let date = m.timestamp.format(&app.date_format).to_string();
            let from = truncate_str(m.from.short_name(), from_w as usize);
            let subject = if m.subject.is_empty() {
                "(no subject)".to_string()
            } else {
                truncate_str(&m.subject, subject_w as usize)
            };
            let label = m.label.map(|l| l.name()).unwrap_or("");
            let att = if m.attachments.is_empty() { " " } else { "@" };

            let under_cursor = vis_idx == app.list_selected && app.focus == PanelFocus::List;
            let style = if under_cursor || Some(m.id) == selected_id {
                theme.list_selected
            } else if !m.read {
                theme.list_unread
            } else {
                theme.list_normal
            };

            Row::new(vec![
                flag.to_string(),
                date,
                from,
                subject,
                label.to_string(),
                att.to_string(),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(rows, constraints)
        .header(header)
        .column_spacing(1);

    frame.render_widget(table, inner);
}
