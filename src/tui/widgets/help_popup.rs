//! Help popup showing keyboard shortcuts in multi-column layout.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::tui::app::App;
use crate::tui::theme::Theme;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A single shortcut entry.
struct Shortcut {
    key: &'static str,
    desc: &'static str,
}

const NAVIGATION: &[Shortcut] = &[
    Shortcut { key: "j / k", desc: "Next / previous" },
    Shortcut { key: "g / G", desc: "First / last" },
    Shortcut { key: "PgDn/Up", desc: "Page scroll" },
    Shortcut { key: "Enter", desc: "Open / apply filter" },
    Shortcut { key: "Tab", desc: "Cycle panel" },
    Shortcut { key: "Esc", desc: "Back / close" },
];

const MAILBOX: &[Shortcut] = &[
    Shortcut { key: "c", desc: "Compose message" },
    Shortcut { key: "s", desc: "Toggle star" },
    Shortcut { key: "u", desc: "Toggle read" },
    Shortcut { key: "d", desc: "Move to trash" },
];

const COMPOSE: &[Shortcut] = &[
    Shortcut { key: "Tab", desc: "Next field" },
    Shortcut { key: "Ctrl-S", desc: "Send" },
    Shortcut { key: "Esc", desc: "Discard draft" },
];

const GENERAL: &[Shortcut] = &[
    Shortcut { key: "1-4", desc: "Switch section" },
    Shortcut { key: "L", desc: "Toggle sidebar" },
    Shortcut { key: "?", desc: "This help" },
    Shortcut { key: "q", desc: "Quit" },
    Shortcut { key: "Ctrl-C", desc: "Force quit" },
];

/// Render the help popup centered on screen with multi-column shortcuts.
pub fn render(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let screen = frame.area();

    let popup_width = (screen.width * 78 / 100).min(screen.width.saturating_sub(4));
    let inner_width = popup_width.saturating_sub(2) as usize; // borders

    let cols = if inner_width >= 90 {
        3
    } else if inner_width >= 56 {
        2
    } else {
        1
    };
    let col_width = inner_width / cols;
    let sep_width = inner_width.saturating_sub(2);

    let lines = build_lines(cols, col_width, sep_width, theme);

    let content_height = lines.len() as u16 + 1;
    let popup_height = (content_height + 2).min(screen.height.saturating_sub(2));

    let area = centered_rect_exact(popup_width, popup_height, screen);

    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.popup_title)
        .title(" Help ")
        .style(theme.popup);

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(lines), inner);
}

fn build_lines(
    cols: usize,
    col_width: usize,
    sep_width: usize,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = vec![
        Line::from(vec![
            Span::styled("  campusdash", theme.popup_title),
            Span::styled(format!("  v{VERSION}"), theme.dim),
        ]),
        Line::from(Span::styled(
            "  Users, mailbox and explore feed of the campus network",
            theme.dim,
        )),
        Line::from(""),
    ];

    let groups = [
        ("Navigation", NAVIGATION),
        ("Mailbox", MAILBOX),
        ("Compose", COMPOSE),
        ("General", GENERAL),
    ];
    for (title, shortcuts) in groups {
        add_section_header(&mut lines, title, theme, sep_width);
        add_shortcuts_columns(&mut lines, shortcuts, cols, col_width, theme);
        lines.push(Line::from(""));
    }

    lines
}

/// Add a section header with a trailing separator line.
fn add_section_header(lines: &mut Vec<Line<'static>>, title: &str, theme: &Theme, width: usize) {
    let title_len = title.len() + 4;
    let remaining = width.saturating_sub(title_len);
    let sep = "\u{2500}".repeat(remaining);
    lines.push(Line::from(vec![
        Span::styled(format!("  {title} "), theme.section_title),
        Span::styled(sep, theme.dim),
    ]));
}

/// Lay out shortcuts in N columns per row.
fn add_shortcuts_columns(
    lines: &mut Vec<Line<'static>>,
    shortcuts: &[Shortcut],
    cols: usize,
    col_width: usize,
    theme: &Theme,
) {
    let key_w: usize = 8;

    for row in shortcuts.chunks(cols) {
        let mut spans: Vec<Span<'static>> = vec![Span::raw("  ")];
        for s in row {
            let padded_key = format!("{:>width$}", s.key, width = key_w);
            let desc_avail = col_width.saturating_sub(key_w + 3);
            let desc = if s.desc.len() > desc_avail {
                format!("{}.", &s.desc[..desc_avail.saturating_sub(1)])
            } else {
                s.desc.to_string()
            };
            let padding = col_width.saturating_sub(key_w + 1 + desc.len()).max(1);

            spans.push(Span::styled(padded_key, theme.prompt));
            spans.push(Span::styled(format!(" {desc}"), theme.popup));
            spans.push(Span::raw(" ".repeat(padding)));
        }
        lines.push(Line::from(spans));
    }
}

/// Calculate a centered rectangle with exact dimensions, clamped to screen.
fn centered_rect_exact(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_clamps_to_screen() {
        let screen = Rect::new(0, 0, 40, 10);
        assert_eq!(centered_rect_exact(20, 4, screen), Rect::new(10, 3, 20, 4));
        assert_eq!(centered_rect_exact(80, 40, screen), screen);
    }
}
