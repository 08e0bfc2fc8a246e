//! Keyboard and input event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, PanelFocus};
use crate::compose::ComposeField;
use crate::view::Section;

/// Process a key event and update the application state.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> anyhow::Result<()> {
    // ── Compose form (captures all keys) ──────────────────
    if app.focus == PanelFocus::Compose && app.controller.state().composing {
        return handle_compose_keys(app, key);
    }

    // ── Popup handling (captures all keys) ────────────────
    if app.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
            app.show_help = false;
        }
        return Ok(());
    }

    // ── Always-available shortcuts ────────────────────────
    match (key.modifiers, key.code) {
        // Ctrl+C always quits, from any panel
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            app.should_quit = true;
            return Ok(());
        }
        (_, KeyCode::Char('?')) => {
            app.show_help = true;
            return Ok(());
        }
        (_, KeyCode::Tab) => {
            app.focus = next_focus(app, true);
            return Ok(());
        }
        (_, KeyCode::BackTab) => {
            app.focus = next_focus(app, false);
            return Ok(());
        }
        // Section shortcuts
        (_, KeyCode::Char(c @ '1'..='4')) => {
            let idx = (c as usize) - ('1' as usize);
            app.switch_section(Section::ALL[idx]);
            return Ok(());
        }
        (_, KeyCode::Char('c')) => {
            app.start_compose();
            return Ok(());
        }
        (_, KeyCode::Char('L')) => {
            app.show_sidebar = !app.show_sidebar;
            if !app.sidebar_visible() && app.focus == PanelFocus::Sidebar {
                app.focus = PanelFocus::List;
            }
            return Ok(());
        }
        (_, KeyCode::Char('q')) => {
            app.should_quit = true;
            return Ok(());
        }
        _ => {}
    }

    // ── Panel-specific shortcuts ──────────────────────────
    match app.focus {
        PanelFocus::Sidebar => handle_sidebar_keys(app, key),
        PanelFocus::List => handle_list_keys(app, key),
        PanelFocus::Detail => handle_detail_keys(app, key),
        // Compose focus without compose mode (form was closed elsewhere).
        PanelFocus::Compose => {
            app.focus = PanelFocus::List;
            Ok(())
        }
    }
}

/// Cycle focus to the next (or previous) panel.
fn next_focus(app: &App, forward: bool) -> PanelFocus {
    let mut order = Vec::with_capacity(3);
    if app.sidebar_visible() {
        order.push(PanelFocus::Sidebar);
    }
    order.push(PanelFocus::List);
    if matches!(app.section(), Section::Users | Section::Mailbox) {
        order.push(PanelFocus::Detail);
    }

    let pos = order.iter().position(|f| *f == app.focus).unwrap_or(0);
    let len = order.len();
    let next = if forward {
        (pos + 1) % len
    } else {
        (pos + len - 1) % len
    };
    order[next]
}

/// Key handling when the sidebar has focus.
fn handle_sidebar_keys(app: &mut App, key: KeyEvent) -> anyhow::Result<()> {
    let total = app.sidebar_entries().len();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.sidebar_selected + 1 < total {
                app.sidebar_selected += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.sidebar_selected = app.sidebar_selected.saturating_sub(1);
        }
        KeyCode::Char('g') | KeyCode::Home => app.sidebar_selected = 0,
        KeyCode::Char('G') | KeyCode::End => app.sidebar_selected = total.saturating_sub(1),
        KeyCode::Enter => {
            app.activate_sidebar_entry();
            app.focus = PanelFocus::List;
        }
        KeyCode::Esc => app.focus = PanelFocus::List,
        _ => {}
    }
    Ok(())
}

/// Key handling when the list panel has focus.
fn handle_list_keys(app: &mut App, key: KeyEvent) -> anyhow::Result<()> {
    match key.code {
        // ── Navigation ───────────────────────────────────────
        KeyCode::Char('j') | KeyCode::Down => app.move_list_cursor(app.list_selected + 1),
        KeyCode::Char('k') | KeyCode::Up => {
            app.move_list_cursor(app.list_selected.saturating_sub(1));
        }
        KeyCode::Char('g') | KeyCode::Home => app.move_list_cursor(0),
        KeyCode::Char('G') | KeyCode::End => {
            app.move_list_cursor(app.list_len().saturating_sub(1));
        }
        KeyCode::PageDown => {
            let page = app.list_viewport_height.max(1);
            app.move_list_cursor(app.list_selected + page);
        }
        KeyCode::PageUp => {
            let page = app.list_viewport_height.max(1);
            app.move_list_cursor(app.list_selected.saturating_sub(page));
        }

        // ── Actions ──────────────────────────────────────────
        KeyCode::Enter => match app.section() {
            Section::Mailbox => {
                if app.open_selected_message() {
                    app.focus = PanelFocus::Detail;
                }
            }
            Section::Users => app.focus = PanelFocus::Detail,
            _ => {}
        },
        KeyCode::Char('s') if app.section() == Section::Mailbox => {
            if let Some(id) = app.message_under_cursor() {
                app.controller.toggle_starred(id);
                app.clamp_list_cursor();
            }
        }
        KeyCode::Char('u') if app.section() == Section::Mailbox => {
            if let Some(id) = app.message_under_cursor() {
                app.controller.toggle_read(id);
            }
        }
        KeyCode::Char('d') | KeyCode::Delete if app.section() == Section::Mailbox => {
            if let Some(id) = app.message_under_cursor() {
                app.controller.move_to_trash(id);
                app.clamp_list_cursor();
                app.set_status("Moved to Trash");
            }
        }
        KeyCode::Esc => {
            app.controller.clear_selection();
        }
        _ => {}
    }
    Ok(())
}

/// Key handling when the detail panel has focus.
fn handle_detail_keys(app: &mut App, key: KeyEvent) -> anyhow::Result<()> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.detail_scroll_offset += 1,
        KeyCode::Char('k') | KeyCode::Up => {
            app.detail_scroll_offset = app.detail_scroll_offset.saturating_sub(1);
        }
        KeyCode::PageDown => app.detail_scroll_offset += app.detail_view_height.max(1),
        KeyCode::PageUp => {
            let page = app.detail_view_height.max(1);
            app.detail_scroll_offset = app.detail_scroll_offset.saturating_sub(page);
        }
        KeyCode::Char('g') | KeyCode::Home => app.detail_scroll_offset = 0,
        KeyCode::Char('s') => {
            if let Some(id) = app.controller.state().selected_message {
                app.controller.toggle_starred(id);
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(id) = app.controller.state().selected_message {
                app.controller.move_to_trash(id);
                app.clamp_list_cursor();
                app.set_status("Moved to Trash");
                if app.controller.state().selected_message.is_none() {
                    app.focus = PanelFocus::List;
                }
            }
        }
        KeyCode::Esc => {
            app.controller.clear_selection();
            app.focus = PanelFocus::List;
        }
        _ => {}
    }
    Ok(())
}

/// Key handling inside the compose form.
fn handle_compose_keys(app: &mut App, key: KeyEvent) -> anyhow::Result<()> {
    let field = app.compose_field;
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => app.should_quit = true,
        (KeyModifiers::CONTROL, KeyCode::Char('s')) => app.send_draft(),
        (_, KeyCode::Esc) => {
            app.controller.cancel_compose();
            app.focus = PanelFocus::List;
            app.set_status("Draft discarded");
        }
        (_, KeyCode::Tab) => app.compose_field = field.next(),
        (_, KeyCode::BackTab) => app.compose_field = field.prev(),
        (_, KeyCode::Enter) => {
            if field == ComposeField::Body {
                app.controller.draft_mut().body.push('\n');
            } else {
                app.compose_field = field.next();
            }
        }
        (_, KeyCode::Backspace) => {
            app.controller.draft_mut().field_mut(field).pop();
        }
        (_, KeyCode::Char(c)) => {
            app.controller.draft_mut().field_mut(field).push(c);
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::address::Mailbox;
    use crate::store::memory::MemoryStore;
    use crate::store::seed::SeedData;
    use crate::tui::theme::Theme;
    use crate::view::Controller;

    fn app() -> App {
        let store = MemoryStore::from_seed(SeedData::builtin().unwrap());
        let controller = Controller::new(store, Mailbox::new("Ops", "ops@mak.ac.ug"), 4);
        App::new(
            controller,
            Theme::dark(),
            "%Y-%m-%d".to_string(),
            true,
            Section::Overview,
        )
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_number_keys_switch_section() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.section(), Section::Mailbox);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.section(), Section::Users);
    }

    #[test]
    fn test_compose_and_send_with_keys() {
        let mut app = app();
        let before = app.controller.messages().len();
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.focus, PanelFocus::Compose);
        assert_eq!(app.section(), Section::Mailbox);

        // 'q' is text while composing
        type_text(&mut app, "root@mak.ac.ug");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "quota");
        assert!(!app.should_quit);
        assert_eq!(app.controller.draft().subject, "quota");

        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL),
        )
        .unwrap();

        assert_eq!(app.controller.messages().len(), before + 2);
        assert!(!app.controller.state().composing);
        assert_eq!(app.focus, PanelFocus::List);
        let (status, _) = app.status_message.as_ref().expect("status set");
        assert!(status.starts_with("Message sent successfully"));
    }

    #[test]
    fn test_escape_discards_draft() {
        let mut app = app();
        press(&mut app, KeyCode::Char('c'));
        type_text(&mut app, "someone@example.org");
        press(&mut app, KeyCode::Esc);
        assert!(app.controller.draft().is_blank());
        assert!(!app.controller.state().composing);
    }

    #[test]
    fn test_enter_opens_message_and_marks_read() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.focus, PanelFocus::Detail);
        let opened = app.controller.selected_message().expect("opened");
        assert!(opened.read);
        press(&mut app, KeyCode::Esc);
        assert!(app.controller.selected_message().is_none());
    }

    #[test]
    fn test_sidebar_applies_category() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        app.focus = PanelFocus::Sidebar;
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.controller.state().category,
            crate::filter::UserCategory::Student
        );
        assert_eq!(app.focus, PanelFocus::List);
    }
}
