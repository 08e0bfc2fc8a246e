//! The view-state controller (the "Update" half of the dashboard).
//!
//! Holds the record snapshots, the [`ViewState`] and the derived lists, and
//! turns operator intents into store calls and explicit recomputation.
//! Renderers only read from it.

use std::rc::Rc;

use chrono::Utc;
use tracing::{debug, info};

use super::state::{Section, ViewState};
use crate::compose::{self, DraftFields, IdSequence};
use crate::filter::{self, MailboxCounts, UserCategory, UserFilterCache};
use crate::model::address::Mailbox;
use crate::model::mail::{Folder, LabelFilter, MailMessage, MessageId};
use crate::model::post::Post;
use crate::model::user::UserRecord;
use crate::store::{RecordStore, Snapshot};

/// Acknowledgement shown after every send. There is no failure path.
pub const SENT_NOTICE: &str = "Message sent successfully";

/// What a submitted draft produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendReceipt {
    /// Ids of the records appended to the store, sent copy first.
    pub records: Vec<MessageId>,
    /// Whether an inbox copy was delivered to an administrator.
    pub delivered_internally: bool,
    /// Text to show the operator.
    pub notice: &'static str,
}

/// Owns the view state and orchestrates filtering and composing.
pub struct Controller<S: RecordStore> {
    store: S,
    state: ViewState,
    sender: Mailbox,
    ids: IdSequence,

    users: Snapshot<UserRecord>,
    messages: Snapshot<MailMessage>,
    posts: Snapshot<Post>,

    user_cache: UserFilterCache,
    visible_users: Rc<[usize]>,
    visible_messages: Vec<usize>,
    visible_posts: Vec<usize>,
}

impl<S: RecordStore> Controller<S> {
    /// Take ownership of `store` and compute the initial views.
    ///
    /// `sender` is the identity drafts are sent as.
    pub fn new(store: S, sender: Mailbox, cache_capacity: usize) -> Self {
        let users = store.users();
        let messages = store.messages();
        let posts = store.posts();
        let ids = IdSequence::after(&messages);
        let mut controller = Self {
            store,
            state: ViewState::default(),
            sender,
            ids,
            users,
            messages,
            posts,
            user_cache: UserFilterCache::new(cache_capacity),
            visible_users: Rc::from(Vec::new()),
            visible_messages: Vec::new(),
            visible_posts: Vec::new(),
        };
        controller.recompute_users();
        controller.recompute_messages();
        controller.recompute_posts();
        controller
    }

    // ── Accessors ─────────────────────────────

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Direct store access. Changes made through it stay invisible until the
    /// next refresh (selecting the mailbox section, or [`Self::refresh`]).
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn sender(&self) -> &Mailbox {
        &self.sender
    }

    pub fn users(&self) -> &Snapshot<UserRecord> {
        &self.users
    }

    pub fn messages(&self) -> &Snapshot<MailMessage> {
        &self.messages
    }

    pub fn posts(&self) -> &Snapshot<Post> {
        &self.posts
    }

    /// How many user selections the memo actually computed.
    pub fn user_filter_computations(&self) -> u64 {
        self.user_cache.computed()
    }

    // ── Sections ──────────────────────────────

    /// Switch section. Entering the mailbox re-reads messages from the store.
    pub fn select_section(&mut self, section: Section) {
        self.state.section = section;
        if section == Section::Mailbox {
            self.refresh_mailbox();
        }
    }

    /// Re-read the message snapshot and recompute the mailbox view.
    pub fn refresh_mailbox(&mut self) {
        let fresh = self.store.messages();
        if fresh.same_as(&self.messages) {
            return;
        }
        self.messages = fresh;
        self.ids.skip_past(&self.messages);
        if let Some(id) = self.state.selected_message {
            if !self.messages.iter().any(|m| m.id == id) {
                self.state.selected_message = None;
            }
        }
        self.recompute_messages();
    }

    /// Re-read every collection.
    pub fn refresh(&mut self) {
        self.users = self.store.users();
        self.posts = self.store.posts();
        self.recompute_users();
        self.recompute_posts();
        self.refresh_mailbox();
    }

    // ── Users ─────────────────────────────────

    /// Switch user category; the selection is memoized per
    /// `(snapshot, category)` and the shared result is returned.
    pub fn select_category(&mut self, category: UserCategory) -> Rc<[usize]> {
        self.state.category = category;
        self.recompute_users();
        Rc::clone(&self.visible_users)
    }

    /// Indices into [`Self::users`] for the active category.
    pub fn visible_user_indices(&self) -> &Rc<[usize]> {
        &self.visible_users
    }

    pub fn visible_users(&self) -> Vec<&UserRecord> {
        self.visible_users.iter().map(|&i| &self.users[i]).collect()
    }

    pub fn category_counts(&self) -> Vec<(UserCategory, usize)> {
        filter::category_counts(&self.users)
    }

    /// Display name for a user id, if known.
    pub fn user_name(&self, id: u64) -> Option<&str> {
        self.users
            .iter()
            .find(|u| u.id == id)
            .map(|u| u.name.as_str())
    }

    // ── Mailbox ───────────────────────────────

    /// Show a folder: resets the label filter to `All` and drops the selection.
    pub fn select_folder(&mut self, folder: Folder) {
        self.state.folder = folder;
        self.state.label = LabelFilter::All;
        self.state.selected_message = None;
        self.recompute_messages();
    }

    /// Apply a label filter. Only the selection is dropped; the folder stays.
    pub fn select_label(&mut self, label: LabelFilter) {
        self.state.label = label;
        self.state.selected_message = None;
        self.recompute_messages();
    }

    pub fn visible_message_indices(&self) -> &[usize] {
        &self.visible_messages
    }

    pub fn visible_messages(&self) -> Vec<&MailMessage> {
        self.visible_messages
            .iter()
            .map(|&i| &self.messages[i])
            .collect()
    }

    pub fn mailbox_counts(&self) -> MailboxCounts {
        MailboxCounts::tally(&self.messages)
    }

    /// Open a message for reading. Leaves compose mode and marks it read.
    ///
    /// Returns `false` (and changes nothing) for an unknown id.
    pub fn select_message(&mut self, id: MessageId) -> bool {
        let Some(message) = self.messages.iter().find(|m| m.id == id) else {
            return false;
        };
        let unread = !message.read;
        self.state.composing = false;
        self.state.selected_message = Some(id);
        if unread {
            self.store.update_message(id, &mut |m| m.read = true);
            self.refresh_mailbox();
        }
        true
    }

    /// Close the reading view.
    pub fn clear_selection(&mut self) {
        self.state.selected_message = None;
    }

    /// The message open in the reading view.
    pub fn selected_message(&self) -> Option<&MailMessage> {
        let id = self.state.selected_message?;
        self.messages.iter().find(|m| m.id == id)
    }

    /// Flip the starred flag.
    pub fn toggle_starred(&mut self, id: MessageId) -> bool {
        self.mutate_message(id, |m| m.starred = !m.starred)
    }

    /// Flip the read flag.
    pub fn toggle_read(&mut self, id: MessageId) -> bool {
        self.mutate_message(id, |m| m.read = !m.read)
    }

    /// Move a message to the trash folder. Messages are never deleted.
    pub fn move_to_trash(&mut self, id: MessageId) -> bool {
        let moved = self.mutate_message(id, |m| m.folder = Folder::Trash);
        // Label views span folders, so the message stays visible there.
        let left_view = self.state.label == LabelFilter::All && self.state.folder != Folder::Trash;
        if moved && left_view && self.state.selected_message == Some(id) {
            self.state.selected_message = None;
        }
        moved
    }

    fn mutate_message(&mut self, id: MessageId, mut change: impl FnMut(&mut MailMessage)) -> bool {
        let found = self.store.update_message(id, &mut change);
        if found {
            self.refresh_mailbox();
        }
        found
    }

    // ── Compose ───────────────────────────────

    /// Enter compose mode. The reading view closes.
    pub fn open_compose(&mut self) {
        self.state.composing = true;
        self.state.selected_message = None;
    }

    /// Leave compose mode and discard the draft.
    pub fn cancel_compose(&mut self) {
        self.state.composing = false;
        self.state.draft.clear();
    }

    pub fn draft(&self) -> &DraftFields {
        &self.state.draft
    }

    pub fn draft_mut(&mut self) -> &mut DraftFields {
        &mut self.state.draft
    }

    /// Send the current draft.
    ///
    /// Appends the sent copy (and the internal inbox copy, if any) to the
    /// store, clears the draft, leaves compose mode and refreshes the
    /// mailbox. Always succeeds.
    pub fn submit_draft(&mut self) -> SendReceipt {
        let admins = compose::administrator_addresses(&self.users);
        let records = compose::compose(
            &self.state.draft,
            &self.sender,
            &admins,
            &mut self.ids,
            Utc::now(),
        );
        let delivered_internally = records.len() > 1;
        let ids: Vec<MessageId> = records.iter().map(|m| m.id).collect();
        for record in records {
            self.store.send_message(record);
        }
        info!(records = ids.len(), delivered_internally, "Draft sent");

        self.state.draft.clear();
        self.state.composing = false;
        self.refresh_mailbox();

        SendReceipt {
            records: ids,
            delivered_internally,
            notice: SENT_NOTICE,
        }
    }

    // ── Explore ───────────────────────────────

    /// Filter the explore feed by tag (`None` for every post).
    pub fn select_tag(&mut self, tag: Option<String>) {
        self.state.tag = tag;
        self.recompute_posts();
    }

    pub fn visible_posts(&self) -> Vec<&Post> {
        self.visible_posts.iter().map(|&i| &self.posts[i]).collect()
    }

    pub fn tag_counts(&self) -> Vec<(String, usize)> {
        filter::tag_counts(&self.posts)
    }

    // ── Recomputation ─────────────────────────

    fn recompute_users(&mut self) {
        self.visible_users = self.user_cache.select(&self.users, self.state.category);
    }

    fn recompute_messages(&mut self) {
        self.visible_messages =
            filter::select_message_indices(&self.messages, self.state.folder, self.state.label);
        debug!(
            folder = %self.state.folder,
            label = %self.state.label,
            visible = self.visible_messages.len(),
            "Recomputed mailbox view"
        );
    }

    fn recompute_posts(&mut self) {
        self.visible_posts = filter::select_post_indices(&self.posts, self.state.tag.as_deref());
    }
}
