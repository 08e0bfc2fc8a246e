//! Detail panel for the user under the list cursor.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use super::panel;
use crate::filter::UserCategory;
use crate::tui::app::{App, PanelFocus};

pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = panel(" Profile ", app.focus == PanelFocus::Detail, &app.theme);
    let inner = block.inner(area);
    app.detail_view_height = inner.height as usize;
    frame.render_widget(block, area);

    let theme = &app.theme;
    let users = app.controller.visible_users();
    let Some(user) = users.get(app.list_selected) else {
        frame.render_widget(
            Paragraph::new(" No users in this category.").style(theme.dim),
            inner,
        );
        return;
    };

    let field = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{label:<10}"), theme.detail_label),
            Span::styled(value, theme.detail_value),
        ])
    };

    // Every category the user falls in; they overlap.
    let categories: Vec<&str> = UserCategory::ALL
        .into_iter()
        .filter(|c| *c != UserCategory::All && c.matches(user))
        .map(UserCategory::name)
        .collect();

    let mut lines = vec![
        Line::from(Span::styled(user.name.clone(), theme.section_title)),
        Line::from(""),
        field("Role:", user.role.clone()),
        field("Status:", user.status.clone()),
        field("Email:", user.emails.join(", ")),
        Line::from(vec![
            Span::styled(format!("{:<10}", "Badges:"), theme.detail_label),
            Span::styled(user.badges.join(", "), theme.badge),
        ]),
        field("Matches:", categories.join(", ")),
        Line::from(""),
    ];
    for line in user.bio.lines() {
        lines.push(Line::from(Span::styled(line.to_string(), theme.body)));
    }

    let scroll = app.detail_scroll_offset.min(u16::MAX as usize) as u16;
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        inner,
    );
}
