//! TUI application state: the controller plus panel focus, cursors and
//! transient status (the "Model" in Elm architecture).

use crate::compose::ComposeField;
use crate::config::{is_valid_date_format, DEFAULT_DATE_FORMAT};
use crate::filter::UserCategory;
use crate::model::mail::{Folder, Label, LabelFilter, MessageId};
use crate::store::memory::MemoryStore;
use crate::tui::theme::Theme;
use crate::view::{Controller, Section};

/// Which panel currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    Sidebar,
    List,
    Detail,
    Compose,
}

/// One selectable row of the sidebar for the active section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarEntry {
    Category(UserCategory),
    Folder(Folder),
    Label(LabelFilter),
    /// Explore tag; `None` is "All posts".
    Tag(Option<String>),
}

/// Complete TUI state.
pub struct App {
    /// View state, snapshots and derived lists.
    pub controller: Controller<MemoryStore>,
    pub theme: Theme,
    /// `strftime` format for list dates, always renderable.
    pub date_format: String,

    // ── Navigation ────────────────────────────
    pub focus: PanelFocus,
    /// Cursor within the sidebar entries.
    pub sidebar_selected: usize,
    /// Cursor within the visible list of the active section.
    pub list_selected: usize,
    pub list_scroll_offset: usize,
    pub detail_scroll_offset: usize,
    /// Focused field of the compose form.
    pub compose_field: ComposeField,

    // ── UI state ──────────────────────────────
    pub show_sidebar: bool,
    pub show_help: bool,

    // ── Lifecycle ─────────────────────────────
    pub should_quit: bool,
    /// Transient status message and the instant it was set.
    pub status_message: Option<(String, std::time::Instant)>,

    /// Cached viewport heights (set during render).
    pub list_viewport_height: usize,
    pub detail_view_height: usize,
}

impl App {
    pub fn new(
        controller: Controller<MemoryStore>,
        theme: Theme,
        date_format: String,
        show_sidebar: bool,
        start_section: Section,
    ) -> Self {
        let date_format = if is_valid_date_format(&date_format) {
            date_format
        } else {
            tracing::warn!(%date_format, "Invalid date format, using default");
            DEFAULT_DATE_FORMAT.to_string()
        };
        let mut app = Self {
            controller,
            theme,
            date_format,
            focus: PanelFocus::List,
            sidebar_selected: 0,
            list_selected: 0,
            list_scroll_offset: 0,
            detail_scroll_offset: 0,
            compose_field: ComposeField::To,
            show_sidebar,
            show_help: false,
            should_quit: false,
            status_message: None,
            list_viewport_height: 20,
            detail_view_height: 20,
        };
        app.switch_section(start_section);
        app
    }

    pub fn section(&self) -> Section {
        self.controller.state().section
    }

    /// Whether the sidebar is drawn for the current section.
    pub fn sidebar_visible(&self) -> bool {
        self.show_sidebar && !self.sidebar_entries().is_empty()
    }

    /// Change section and reset the per-section cursors.
    pub fn switch_section(&mut self, section: Section) {
        self.controller.select_section(section);
        let active = self
            .sidebar_entries()
            .iter()
            .position(|e| self.is_active_entry(e))
            .unwrap_or(0);
        self.sidebar_selected = active;
        self.reset_list_cursor();
        if self.focus == PanelFocus::Compose && !self.controller.state().composing {
            self.focus = PanelFocus::List;
        }
        if self.focus == PanelFocus::Sidebar && !self.sidebar_visible() {
            self.focus = PanelFocus::List;
        }
    }

    /// Sidebar rows for the active section (empty for the overview).
    pub fn sidebar_entries(&self) -> Vec<SidebarEntry> {
        match self.section() {
            Section::Overview => Vec::new(),
            Section::Users => UserCategory::ALL
                .into_iter()
                .map(SidebarEntry::Category)
                .collect(),
            Section::Mailbox => {
                let mut entries: Vec<SidebarEntry> =
                    Folder::ALL.into_iter().map(SidebarEntry::Folder).collect();
                entries.push(SidebarEntry::Label(LabelFilter::Starred));
                entries.extend(
                    Label::ALL
                        .into_iter()
                        .map(|l| SidebarEntry::Label(LabelFilter::Label(l))),
                );
                entries
            }
            Section::Explore => {
                let mut entries = vec![SidebarEntry::Tag(None)];
                entries.extend(
                    self.controller
                        .tag_counts()
                        .into_iter()
                        .map(|(tag, _)| SidebarEntry::Tag(Some(tag))),
                );
                entries
            }
        }
    }

    /// Whether `entry` is the filter currently applied.
    pub fn is_active_entry(&self, entry: &SidebarEntry) -> bool {
        let state = self.controller.state();
        match entry {
            SidebarEntry::Category(c) => state.category == *c,
            SidebarEntry::Folder(f) => state.label == LabelFilter::All && state.folder == *f,
            SidebarEntry::Label(l) => state.label == *l,
            SidebarEntry::Tag(t) => state.tag == *t,
        }
    }

    /// Apply the sidebar entry under the cursor.
    pub fn activate_sidebar_entry(&mut self) {
        let Some(entry) = self.sidebar_entries().into_iter().nth(self.sidebar_selected) else {
            return;
        };
        match entry {
            SidebarEntry::Category(c) => {
                let matched = self.controller.select_category(c).len();
                self.set_status(&format!("{c}: {matched} user(s)"));
            }
            SidebarEntry::Folder(f) => {
                self.controller.select_folder(f);
                if self.focus == PanelFocus::Compose {
                    self.focus = PanelFocus::List;
                }
            }
            SidebarEntry::Label(l) => self.controller.select_label(l),
            SidebarEntry::Tag(t) => self.controller.select_tag(t),
        }
        self.reset_list_cursor();
    }

    /// Number of rows in the list panel of the active section.
    pub fn list_len(&self) -> usize {
        match self.section() {
            Section::Overview => 0,
            Section::Users => self.controller.visible_user_indices().len(),
            Section::Mailbox => self.controller.visible_message_indices().len(),
            Section::Explore => self.controller.visible_posts().len(),
        }
    }

    /// Move the list cursor, clamped to the list.
    pub fn move_list_cursor(&mut self, index: usize) {
        let len = self.list_len();
        if len == 0 {
            self.list_selected = 0;
            return;
        }
        self.list_selected = index.min(len - 1);
        self.detail_scroll_offset = 0;
        self.ensure_selected_visible();
    }

    /// Open the message under the list cursor (mailbox only).
    pub fn open_selected_message(&mut self) -> bool {
        let id = self
            .controller
            .visible_messages()
            .get(self.list_selected)
            .map(|m| m.id);
        match id {
            Some(id) => {
                self.controller.select_message(id);
                self.detail_scroll_offset = 0;
                true
            }
            None => false,
        }
    }

    /// Id of the message under the list cursor.
    pub fn message_under_cursor(&self) -> Option<MessageId> {
        self.controller
            .visible_messages()
            .get(self.list_selected)
            .map(|m| m.id)
    }

    /// Start composing; jumps to the mailbox section first.
    pub fn start_compose(&mut self) {
        if self.section() != Section::Mailbox {
            self.switch_section(Section::Mailbox);
        }
        self.controller.open_compose();
        self.compose_field = ComposeField::To;
        self.focus = PanelFocus::Compose;
    }

    /// Send the draft and report the acknowledgement.
    pub fn send_draft(&mut self) {
        let receipt = self.controller.submit_draft();
        self.focus = PanelFocus::List;
        self.compose_field = ComposeField::To;
        self.clamp_list_cursor();
        if receipt.delivered_internally {
            self.set_status(&format!("{} (delivered to administrator inbox)", receipt.notice));
        } else {
            self.set_status(receipt.notice);
        }
    }

    /// Keep the cursor inside the list after it shrank.
    pub fn clamp_list_cursor(&mut self) {
        let len = self.list_len();
        if self.list_selected >= len {
            self.list_selected = len.saturating_sub(1);
        }
        self.ensure_selected_visible();
    }

    fn reset_list_cursor(&mut self) {
        self.list_selected = 0;
        self.list_scroll_offset = 0;
        self.detail_scroll_offset = 0;
    }

    /// Set a transient status message that auto-clears after a few seconds.
    pub fn set_status(&mut self, msg: &str) {
        self.status_message = Some((msg.to_string(), std::time::Instant::now()));
    }

    /// Called every tick: clears expired status messages.
    pub fn tick(&mut self) {
        if let Some((_, when)) = &self.status_message {
            if when.elapsed().as_secs() >= 5 {
                self.status_message = None;
            }
        }
    }

    /// Ensure the selected row is visible given the current scroll offset.
    pub fn ensure_selected_visible(&mut self) {
        let vp = self.list_viewport_height.max(1);
        if self.list_selected < self.list_scroll_offset {
            self.list_scroll_offset = self.list_selected;
        } else if self.list_selected >= self.list_scroll_offset + vp {
            self.list_scroll_offset = self.list_selected.saturating_sub(vp - 1);
        }
    }
}
