//! Main render function that dispatches to widgets.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

use super::app::App;
use super::widgets;
use crate::view::Section;

/// Render the entire TUI frame.
pub fn render(frame: &mut Frame, app: &mut App) {
    let size = frame.area();

    // Vertical layout: header (1) + content (flex) + status (1)
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header bar
            Constraint::Min(5),    // content
            Constraint::Length(1), // status bar
        ])
        .split(size);

    widgets::header_bar::render(frame, app, vertical[0]);

    // Content area with optional sidebar
    let content_area = if app.sidebar_visible() {
        let h_split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(24), Constraint::Min(30)])
            .split(vertical[1]);
        widgets::sidebar::render(frame, app, h_split[0]);
        h_split[1]
    } else {
        vertical[1]
    };

    match app.section() {
        Section::Overview => widgets::overview::render(frame, app, content_area),
        Section::Users => {
            let [list, detail] = split_list_detail(content_area);
            widgets::user_list::render(frame, app, list);
            widgets::user_view::render(frame, app, detail);
        }
        Section::Mailbox => {
            let [list, detail] = split_list_detail(content_area);
            widgets::mail_list::render(frame, app, list);
            // Compose and the reading view never show together.
            if app.controller.state().composing {
                widgets::compose_form::render(frame, app, detail);
            } else {
                widgets::mail_view::render(frame, app, detail);
            }
        }
        Section::Explore => widgets::feed::render(frame, app, content_area),
    }

    widgets::status_bar::render(frame, app, vertical[2]);

    // Popups (rendered on top of everything)
    if app.show_help {
        widgets::help_popup::render(frame, app);
    }
}

/// List on top, detail below.
fn split_list_detail(area: Rect) -> [Rect; 2] {
    let split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);
    [split[0], split[1]]
}
