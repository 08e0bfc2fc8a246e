//! Overview section: headline counts for users, mail and posts.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::panel;
use crate::model::mail::{Folder, Label, LabelFilter};
use crate::tui::app::{App, PanelFocus};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let row = |label: String, value: usize| {
        Line::from(vec![
            Span::styled(format!(" {label:<16}"), theme.detail_label),
            Span::styled(value.to_string(), theme.detail_value),
        ])
    };
    let focused = app.focus == PanelFocus::List;

    let users: Vec<Line> = app
        .controller
        .category_counts()
        .into_iter()
        .map(|(category, n)| row(category.name().to_string(), n))
        .collect();
    let block = panel(" Users ", focused, theme);
    frame.render_widget(Paragraph::new(users).block(block), columns[0]);

    let counts = app.controller.mailbox_counts();
    let mut mail: Vec<Line> = Folder::ALL
        .into_iter()
        .map(|f| {
            Line::from(vec![
                Span::styled(format!(" {:<16}", f.name()), theme.detail_label),
                Span::styled(
                    format!("{} ({} unread)", counts.total_in(f), counts.unread_in(f)),
                    theme.detail_value,
                ),
            ])
        })
        .collect();
    mail.push(Line::from(""));
    mail.push(row("Starred".to_string(), counts.starred));
    for label in Label::ALL {
        let n = counts.for_label(LabelFilter::Label(label)).unwrap_or(0);
        mail.push(row(label.name().to_string(), n));
    }
    frame.render_widget(
        Paragraph::new(mail).block(panel(" Mailbox ", false, theme)),
        columns[1],
    );

    let mut feed = vec![row("Posts".to_string(), app.controller.posts().len()), Line::from("")];
    feed.push(Line::from(Span::styled(" Top tags", theme.section_title)));
    let mut tags = app.controller.tag_counts();
    tags.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    for (tag, n) in tags.into_iter().take(8) {
        feed.push(row(format!("#{tag}"), n));
    }
    frame.render_widget(
        Paragraph::new(feed).block(panel(" Explore ", false, theme)),
        columns[2],
    );
}
