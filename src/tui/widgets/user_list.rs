//! User directory table for the active category.

use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Row, Table};
use ratatui::Frame;

use super::{panel, truncate_str};
use crate::tui::app::{App, PanelFocus};

/// Render the user table with virtual scrolling.
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let title = format!(" Users: {} ", app.controller.state().category);
    let block = panel(&title, app.focus == PanelFocus::List, &app.theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 {
        return;
    }

    let viewport_height = (inner.height as usize).saturating_sub(1);
    app.list_viewport_height = viewport_height;
    app.ensure_selected_visible();

    let theme = &app.theme;
    let name_w = 24u16.min(inner.width / 3);
    let status_w = 10u16;
    let badges_w = 26u16.min(inner.width / 4);
    let role_w = inner.width.saturating_sub(name_w + status_w + badges_w + 3);

    let constraints = [
        Constraint::Length(name_w),
        Constraint::Min(role_w),
        Constraint::Length(status_w),
        Constraint::Length(badges_w),
    ];
    let header = Row::new(vec!["Name", "Role", "Status", "Badges"]).style(theme.list_header);

    let users = app.controller.visible_users();
    let start = app.list_scroll_offset;
    let end = (start + viewport_height).min(users.len());

    let rows: Vec<Row> = (start..end)
        .map(|i| {
            let u = users[i];
            let style = if i == app.list_selected {
                theme.list_selected
            } else {
                theme.list_normal
            };
            Row::new(vec![
                truncate_str(&u.name, name_w as usize),
                truncate_str(&u.role, role_w as usize),
                truncate_str(&u.status, status_w as usize),
                truncate_str(&u.badges.join(", "), badges_w as usize),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(rows, constraints)
        .header(header)
        .column_spacing(1);
    frame.render_widget(table, inner);
}
