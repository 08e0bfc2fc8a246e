//! Sidebar widget: the filter choices of the active section.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::panel;
use crate::filter::MailboxCounts;
use crate::model::mail::LabelFilter;
use crate::tui::app::{App, PanelFocus, SidebarEntry};
use crate::view::Section;

/// Render the sidebar panel.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let is_focused = app.focus == PanelFocus::Sidebar;

    let title = match app.section() {
        Section::Users => " Categories ",
        Section::Mailbox => " Folders ",
        Section::Explore => " Topics ",
        Section::Overview => " ",
    };
    let block = panel(title, is_focused, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 1 || inner.width < 4 {
        return;
    }

    let max_width = inner.width as usize;
    let mailbox = MailboxCounts::tally(app.controller.messages());
    let categories = app.controller.category_counts();
    let tags = app.controller.tag_counts();

    let mut lines: Vec<Line> = Vec::new();
    for (i, entry) in app.sidebar_entries().iter().enumerate() {
        let (label, count) = match entry {
            SidebarEntry::Category(c) => (
                c.name().to_string(),
                categories
                    .iter()
                    .find(|(cat, _)| cat == c)
                    .map(|(_, n)| *n)
                    .unwrap_or(0),
            ),
            SidebarEntry::Folder(f) => (f.name().to_string(), mailbox.unread_in(*f)),
            SidebarEntry::Label(l) => (l.name().to_string(), mailbox.for_label(*l).unwrap_or(0)),
            SidebarEntry::Tag(None) => ("All posts".to_string(), app.controller.posts().len()),
            SidebarEntry::Tag(Some(t)) => (
                format!("#{t}"),
                tags.iter()
                    .find(|(tag, _)| tag == t)
                    .map(|(_, n)| *n)
                    .unwrap_or(0),
            ),
        };

        // Separator between folders and labels
        if matches!(entry, SidebarEntry::Label(LabelFilter::Starred)) && inner.height > 12 {
            lines.push(Line::from(Span::styled(
                "\u{2500}".repeat(max_width.min(40)),
                theme.border,
            )));
        }

        let is_selected = app.sidebar_selected == i;
        let is_active = app.is_active_entry(entry);
        let style = if is_selected && is_focused {
            theme.sidebar_selected
        } else if is_active {
            theme.sidebar_selected.remove_modifier(Modifier::BOLD)
        } else {
            theme.sidebar
        };
        lines.push(Line::from(Span::styled(
            format_entry(&label, count, max_width),
            style,
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Format a sidebar entry as "Label Name  (123)" truncated to fit.
/// A zero count is left out.
fn format_entry(label: &str, count: usize, max_width: usize) -> String {
    let count_str = if count > 0 {
        format!(" ({count})")
    } else {
        String::new()
    };
    let avail = max_width.saturating_sub(count_str.len() + 1);
    let label_len = label.chars().count();
    if label_len <= avail {
        format!(" {label}{}{count_str}", " ".repeat(avail - label_len))
    } else if avail > 3 {
        let cut: String = label.chars().take(avail - 3).collect();
        format!(" {cut}...{count_str}")
    } else {
        format!(" {label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_entry_pads() {
        assert_eq!(format_entry("Inbox", 3, 14), " Inbox     (3)");
    }

    #[test]
    fn test_format_entry_zero_count() {
        assert_eq!(format_entry("Spam", 0, 8), " Spam   ");
    }

    #[test]
    fn test_format_entry_truncates() {
        assert_eq!(format_entry("Administrator", 12, 12), " Adm... (12)");
    }
}
