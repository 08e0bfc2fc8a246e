//! Top header bar showing section tabs and the operator identity.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::model::mail::Folder;
use crate::tui::app::App;
use crate::view::Section;

/// Render the top header bar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let active = app.section();

    let mut spans = vec![Span::styled(" campusdash ", theme.header_tab_active)];
    for (i, section) in Section::ALL.iter().enumerate() {
        let style = if *section == active {
            theme.header_tab_active
        } else {
            theme.header_bar
        };
        spans.push(Span::styled(format!("| {} {} ", i + 1, section.name()), style));
    }

    let unread = app.controller.mailbox_counts().unread_in(Folder::Inbox);
    if unread > 0 {
        spans.push(Span::styled(format!("| {unread} unread "), theme.header_bar));
    }

    // Right-aligned operator and help hint
    let right_text = format!(" {} [?] Help ", app.controller.sender().address);
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let width = area.width as usize;
    if width > left_len + right_text.len() {
        let padding = width - left_len - right_text.len();
        spans.push(Span::styled(" ".repeat(padding), theme.header_bar));
    }
    spans.push(Span::styled(right_text, theme.header_bar));

    let bar = Paragraph::new(Line::from(spans)).style(theme.header_bar);
    frame.render_widget(bar, area);
}
