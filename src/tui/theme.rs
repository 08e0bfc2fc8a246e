//! Color theme definitions for the TUI.

use ratatui::style::{Color, Modifier, Style};

/// A complete color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub header_bar: Style,
    pub header_tab_active: Style,
    pub status_bar: Style,
    pub list_selected: Style,
    pub list_unread: Style,
    pub list_header: Style,
    pub list_normal: Style,
    pub sidebar: Style,
    pub sidebar_selected: Style,
    pub detail_label: Style,
    pub detail_value: Style,
    pub body: Style,
    pub badge: Style,
    pub star: Style,
    pub attachment: Style,
    pub border: Style,
    pub border_focused: Style,
    pub popup: Style,
    pub popup_title: Style,
    pub prompt: Style,
    pub dim: Style,
    pub section_title: Style,
}

impl Theme {
    /// Dark theme (default).
    pub fn dark() -> Self {
        Self {
            header_bar: Style::default()
                .fg(Color::Rgb(200, 200, 220))
                .bg(Color::Rgb(30, 30, 46)),
            header_tab_active: Style::default()
                .fg(Color::Cyan)
                .bg(Color::Rgb(30, 30, 46))
                .add_modifier(Modifier::BOLD),
            status_bar: Style::default()
                .fg(Color::Rgb(150, 150, 170))
                .bg(Color::Rgb(30, 30, 46)),
            list_selected: Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(60, 60, 100)),
            list_unread: Style::default()
                .fg(Color::Rgb(235, 235, 245))
                .add_modifier(Modifier::BOLD),
            list_header: Style::default()
                .fg(Color::Rgb(180, 180, 200))
                .bg(Color::Rgb(40, 40, 60))
                .add_modifier(Modifier::BOLD),
            list_normal: Style::default().fg(Color::Rgb(200, 200, 220)),
            sidebar: Style::default().fg(Color::Rgb(180, 180, 200)),
            sidebar_selected: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            detail_label: Style::default()
                .fg(Color::Rgb(130, 170, 255))
                .add_modifier(Modifier::BOLD),
            detail_value: Style::default().fg(Color::Rgb(220, 220, 230)),
            body: Style::default().fg(Color::Rgb(220, 220, 230)),
            badge: Style::default().fg(Color::Magenta),
            star: Style::default().fg(Color::Yellow),
            attachment: Style::default().fg(Color::Green),
            border: Style::default().fg(Color::Rgb(80, 80, 100)),
            border_focused: Style::default()
                .fg(Color::Rgb(130, 170, 255))
                .add_modifier(Modifier::BOLD),
            popup: Style::default()
                .fg(Color::Rgb(220, 220, 230))
                .bg(Color::Rgb(20, 20, 35)),
            popup_title: Style::default()
                .fg(Color::Rgb(130, 170, 255))
                .add_modifier(Modifier::BOLD),
            prompt: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::Rgb(120, 120, 140)),
            section_title: Style::default()
                .fg(Color::Rgb(130, 170, 255))
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        }
    }

    /// Light theme for bright terminals.
    pub fn light() -> Self {
        Self {
            header_bar: Style::default()
                .fg(Color::Rgb(30, 30, 40))
                .bg(Color::Rgb(220, 222, 235)),
            header_tab_active: Style::default()
                .fg(Color::Blue)
                .bg(Color::Rgb(220, 222, 235))
                .add_modifier(Modifier::BOLD),
            status_bar: Style::default()
                .fg(Color::Rgb(70, 70, 90))
                .bg(Color::Rgb(220, 222, 235)),
            list_selected: Style::default()
                .fg(Color::Black)
                .bg(Color::Rgb(180, 200, 250)),
            list_unread: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            list_header: Style::default()
                .fg(Color::Rgb(40, 40, 60))
                .bg(Color::Rgb(205, 208, 225))
                .add_modifier(Modifier::BOLD),
            list_normal: Style::default().fg(Color::Rgb(40, 40, 60)),
            sidebar: Style::default().fg(Color::Rgb(50, 50, 70)),
            sidebar_selected: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            detail_label: Style::default()
                .fg(Color::Rgb(30, 70, 170))
                .add_modifier(Modifier::BOLD),
            detail_value: Style::default().fg(Color::Rgb(30, 30, 40)),
            body: Style::default().fg(Color::Rgb(30, 30, 40)),
            badge: Style::default().fg(Color::Rgb(140, 30, 140)),
            star: Style::default().fg(Color::Rgb(190, 120, 0)),
            attachment: Style::default().fg(Color::Rgb(0, 120, 0)),
            border: Style::default().fg(Color::Rgb(160, 160, 180)),
            border_focused: Style::default()
                .fg(Color::Rgb(30, 70, 170))
                .add_modifier(Modifier::BOLD),
            popup: Style::default()
                .fg(Color::Rgb(30, 30, 40))
                .bg(Color::Rgb(240, 240, 248)),
            popup_title: Style::default()
                .fg(Color::Rgb(30, 70, 170))
                .add_modifier(Modifier::BOLD),
            prompt: Style::default()
                .fg(Color::Rgb(170, 90, 0))
                .add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::Rgb(120, 120, 140)),
            section_title: Style::default()
                .fg(Color::Rgb(30, 70, 170))
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        }
    }

    /// Theme by config name; anything but "light" is dark.
    pub fn by_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("light") {
            Self::light()
        } else {
            Self::dark()
        }
    }
}
