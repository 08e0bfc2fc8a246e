//! Mail view widget: the message open in the reading view.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use super::panel;
use crate::tui::app::{App, PanelFocus};

/// Render the message view panel.
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = panel(" Message ", app.focus == PanelFocus::Detail, &app.theme);
    let inner = block.inner(area);
    app.detail_view_height = inner.height as usize;
    frame.render_widget(block, area);

    let theme = &app.theme;
    let Some(message) = app.controller.selected_message() else {
        let empty =
            Paragraph::new(" Press Enter to open a message, c to compose.").style(theme.dim);
        frame.render_widget(empty, inner);
        return;
    };

    let header = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{label:<9}"), theme.detail_label),
            Span::styled(value, theme.detail_value),
        ])
    };

    let mut lines: Vec<Line> = vec![
        header(
            "Date:",
            message
                .timestamp
                .format("%a, %d %b %Y %H:%M:%S %z")
                .to_string(),
        ),
        header("From:", message.from.display()),
        header("To:", message.to.join(", ")),
    ];
    if !message.cc.is_empty() {
        lines.push(header("Cc:", message.cc.join(", ")));
    }
    if !message.bcc.is_empty() {
        lines.push(header("Bcc:", message.bcc.join(", ")));
    }
    lines.push(header("Subject:", message.subject.clone()));

    let mut tags = vec![message.folder.name().to_string()];
    if let Some(label) = message.label {
        tags.push(label.name().to_string());
    }
    let mut tag_spans = vec![
        Span::styled(format!("{:<9}", "Folder:"), theme.detail_label),
        Span::styled(tags.join(" \u{00b7} "), theme.detail_value),
    ];
    if message.starred {
        tag_spans.push(Span::styled("  \u{2605} starred", theme.star));
    }
    lines.push(Line::from(tag_spans));

    for att in &message.attachments {
        lines.push(Line::from(Span::styled(
            format!(
                "  @ {} ({}, {})",
                att.filename,
                att.content_type,
                humansize::format_size(att.size, humansize::BINARY)
            ),
            theme.attachment,
        )));
    }

    lines.push(Line::from(Span::styled(
        "\u{2500}".repeat(inner.width as usize),
        theme.border,
    )));
    for line in message.body.lines() {
        lines.push(Line::from(Span::styled(line.to_string(), theme.body)));
    }

    let scroll = app.detail_scroll_offset.min(u16::MAX as usize) as u16;
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, inner);
}
