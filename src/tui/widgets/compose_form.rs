//! Compose form: one line per address/subject field plus a multi-line body.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use super::panel;
use crate::compose::ComposeField;
use crate::tui::app::{App, PanelFocus};

/// Render the draft being edited.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let focused = app.focus == PanelFocus::Compose;
    let title = format!(" New message from {} ", app.controller.sender().display());
    let block = panel(&title, focused, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 3 {
        return;
    }

    let header_fields = [
        ComposeField::To,
        ComposeField::Cc,
        ComposeField::Bcc,
        ComposeField::Subject,
    ];
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_fields.len() as u16),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let draft = app.controller.draft();
    let lines: Vec<Line> = header_fields
        .iter()
        .map(|&field| {
            let active = focused && app.compose_field == field;
            let label_style = if active {
                theme.prompt
            } else {
                theme.detail_label
            };
            let mut spans = vec![
                Span::styled(format!("{:<9}", format!("{}:", field.name())), label_style),
                Span::styled(draft.field(field).to_string(), theme.detail_value),
            ];
            if active {
                spans.push(Span::styled("_", theme.prompt));
            }
            Line::from(spans)
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), chunks[0]);

    let body_active = focused && app.compose_field == ComposeField::Body;
    let body_block = Block::default()
        .borders(Borders::TOP)
        .border_style(if body_active { theme.border_focused } else { theme.border })
        .title(" Body ");
    let mut body = draft.body.clone();
    if body_active {
        body.push('_');
    }
    frame.render_widget(
        Paragraph::new(body)
            .style(theme.body)
            .block(body_block)
            .wrap(Wrap { trim: false }),
        chunks[1],
    );

    frame.render_widget(
        Paragraph::new(" Tab next field | Ctrl+S send | Esc discard").style(theme.dim),
        chunks[2],
    );
}
