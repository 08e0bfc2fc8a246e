//! Bottom status bar showing transient messages or context-sensitive keyboard hints.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::app::{App, PanelFocus};
use crate::view::Section;

/// Version string shown at the right edge of the status bar.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Render the status bar at the bottom with context-sensitive hints and version.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let version_text = format!("v{VERSION} ");
    let version_width = version_text.len() as u16;

    // Split: hints (flexible) | version (fixed)
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(version_width)])
        .split(area);

    let content = if let Some((msg, _)) = &app.status_message {
        Line::from(Span::styled(format!(" {msg}"), theme.status_bar))
    } else {
        let mut spans = Vec::new();
        for (i, (key, desc)) in build_hints(app).iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" ", theme.status_bar));
            }
            spans.push(Span::styled(format!(" {key}"), theme.prompt));
            spans.push(Span::styled(format!(":{desc}"), theme.status_bar));
        }
        Line::from(spans)
    };

    frame.render_widget(Paragraph::new(content).style(theme.status_bar), chunks[0]);

    let version = Paragraph::new(Line::from(Span::styled(version_text, theme.border)))
        .alignment(Alignment::Right)
        .style(theme.status_bar);
    frame.render_widget(version, chunks[1]);
}

/// Hint pairs (key, description) for the focused panel and section.
fn build_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = Vec::new();

    match app.focus {
        PanelFocus::Compose => {
            hints.push(("Tab", "field"));
            hints.push(("Ctrl+S", "send"));
            hints.push(("Esc", "discard"));
            return hints;
        }
        PanelFocus::Sidebar => {
            hints.push(("j/k", "nav"));
            hints.push(("Enter", "select"));
            hints.push(("Esc", "back"));
        }
        PanelFocus::List => {
            hints.push(("j/k", "nav"));
            match app.section() {
                Section::Mailbox => {
                    hints.push(("Enter", "open"));
                    hints.push(("s", "star"));
                    hints.push(("u", "read"));
                    hints.push(("d", "trash"));
                }
                Section::Users => hints.push(("Enter", "profile")),
                Section::Overview | Section::Explore => {}
            }
        }
        PanelFocus::Detail => {
            hints.push(("j/k", "scroll"));
            if app.section() == Section::Mailbox {
                hints.push(("s", "star"));
                hints.push(("d", "trash"));
            }
            hints.push(("Esc", "back"));
        }
    }

    hints.push(("1-4", "section"));
    hints.push(("c", "compose"));
    hints.push(("Tab", "panel"));
    hints.push(("?", "help"));
    hints.push(("q", "quit"));
    hints
}
