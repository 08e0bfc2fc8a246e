//! TUI widgets for rendering different UI panels.

pub mod compose_form;
pub mod feed;
pub mod header_bar;
pub mod help_popup;
pub mod mail_list;
pub mod mail_view;
pub mod overview;
pub mod sidebar;
pub mod status_bar;
pub mod user_list;
pub mod user_view;

use ratatui::style::Style;
use ratatui::widgets::{Block, Borders};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::theme::Theme;

/// Bordered panel block, bold border when focused.
pub(crate) fn panel<'a>(title: &'a str, focused: bool, theme: &Theme) -> Block<'a> {
    let border_style: Style = if focused {
        theme.border_focused
    } else {
        theme.border
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title)
}

/// Truncate a string to fit within `max_width` columns, adding "..." if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    let width = UnicodeWidthStr::width(s);
    if width <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        s.chars().take(max_width).collect()
    } else {
        let mut result = String::new();
        let mut current_width = 0;
        for ch in s.chars() {
            let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
            if current_width + ch_width + 3 > max_width {
                break;
            }
            result.push(ch);
            current_width += ch_width;
        }
        result.push_str("...");
        result
    }
}
