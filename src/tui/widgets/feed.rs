//! Explore feed: posts newest first, optionally narrowed to one tag.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use super::panel;
use crate::tui::app::{App, PanelFocus};

pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let title = match &app.controller.state().tag {
        Some(tag) => format!(" Explore: #{tag} "),
        None => " Explore ".to_string(),
    };
    let block = panel(&title, app.focus == PanelFocus::List, &app.theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // One post per scroll step.
    app.list_viewport_height = 1;
    app.ensure_selected_visible();

    let theme = &app.theme;
    let posts = app.controller.visible_posts();
    if posts.is_empty() {
        frame.render_widget(Paragraph::new(" No posts.").style(theme.dim), inner);
        return;
    }

    let mut lines = Vec::new();
    for (i, post) in posts.iter().enumerate().skip(app.list_scroll_offset) {
        let author = app.controller.user_name(post.author).unwrap_or("unknown");
        let head_style = if i == app.list_selected {
            theme.list_selected
        } else {
            theme.section_title
        };
        lines.push(Line::from(vec![
            Span::styled(author.to_string(), head_style),
            Span::styled(
                format!("  {}", post.timestamp.format(&app.date_format)),
                theme.dim,
            ),
            Span::styled(format!("  \u{2665} {}", post.likes), theme.star),
        ]));
        for line in post.body.lines() {
            lines.push(Line::from(Span::styled(line.to_string(), theme.body)));
        }
        if !post.tags.is_empty() {
            let tags: Vec<String> = post.tags.iter().map(|t| format!("#{t}")).collect();
            lines.push(Line::from(Span::styled(tags.join(" "), theme.badge)));
        }
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
