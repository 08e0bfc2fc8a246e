//! In-memory record store backed by `Rc` slices.

use std::rc::Rc;

use tracing::debug;

use super::seed::SeedData;
use super::{RecordStore, Snapshot};
use crate::model::mail::{MailMessage, MessageId};
use crate::model::post::Post;
use crate::model::user::UserRecord;

/// Keeps every collection in memory.
///
/// Mutations rebuild the message slice and bump a store-wide generation
/// counter, so snapshots handed out earlier stay valid and unchanged.
#[derive(Debug)]
pub struct MemoryStore {
    generation: u64,
    users: Snapshot<UserRecord>,
    messages: Snapshot<MailMessage>,
    posts: Snapshot<Post>,
}

impl MemoryStore {
    /// Build a store from explicit collections.
    pub fn new(users: Vec<UserRecord>, messages: Vec<MailMessage>, posts: Vec<Post>) -> Self {
        Self {
            generation: 1,
            users: Snapshot::new(1, Rc::from(users)),
            messages: Snapshot::new(1, Rc::from(messages)),
            posts: Snapshot::new(1, Rc::from(posts)),
        }
    }

    /// Build a store from a decoded seed document.
    pub fn from_seed(seed: SeedData) -> Self {
        debug!(
            users = seed.users.len(),
            messages = seed.messages.len(),
            posts = seed.posts.len(),
            "Seeding record store"
        );
        Self::new(seed.users, seed.messages, seed.posts)
    }

    fn replace_messages(&mut self, messages: Vec<MailMessage>) {
        self.generation += 1;
        self.messages = Snapshot::new(self.generation, Rc::from(messages));
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new(), Vec::new())
    }
}

impl RecordStore for MemoryStore {
    fn users(&self) -> Snapshot<UserRecord> {
        self.users.clone()
    }

    fn messages(&self) -> Snapshot<MailMessage> {
        self.messages.clone()
    }

    fn posts(&self) -> Snapshot<Post> {
        self.posts.clone()
    }

    fn send_message(&mut self, message: MailMessage) {
        debug!(id = %message.id, folder = %message.folder, "Appending message");
        let mut messages = self.messages.to_vec();
        messages.push(message);
        self.replace_messages(messages);
    }

    fn update_message(&mut self, id: MessageId, update: &mut dyn FnMut(&mut MailMessage)) -> bool {
        let mut messages = self.messages.to_vec();
        let Some(message) = messages.iter_mut().find(|m| m.id == id) else {
            return false;
        };
        update(message);
        self.replace_messages(messages);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::address::Mailbox;
    use crate::model::mail::Folder;
    use chrono::Utc;

    fn message(id: u64) -> MailMessage {
        MailMessage {
            id: MessageId(id),
            from: Mailbox::new("", "a@x.com"),
            to: vec!["b@x.com".into()],
            cc: Vec::new(),
            bcc: Vec::new(),
            subject: "hi".into(),
            body: String::new(),
            timestamp: Utc::now(),
            read: false,
            starred: false,
            folder: Folder::Inbox,
            label: None,
            attachments: Vec::new(),
        }
    }

    #[test]
    fn test_send_appends_and_bumps_generation() {
        let mut store = MemoryStore::new(Vec::new(), vec![message(1)], Vec::new());
        let before = store.messages();
        store.send_message(message(2));
        let after = store.messages();
        assert_eq!(before.len(), 1);
        assert_eq!(after.len(), 2);
        assert!(after.generation() > before.generation());
        assert!(!after.same_as(&before));
    }

    #[test]
    fn test_update_in_place() {
        let mut store = MemoryStore::new(Vec::new(), vec![message(1)], Vec::new());
        assert!(store.update_message(MessageId(1), &mut |m| m.starred = true));
        assert!(store.messages()[0].starred);
        assert!(!store.update_message(MessageId(9), &mut |m| m.starred = true));
    }

    #[test]
    fn test_reads_share_data_until_mutation() {
        let store = MemoryStore::new(Vec::new(), vec![message(1)], Vec::new());
        assert!(store.users().same_as(&store.users()));
        assert!(store.messages().same_as(&store.messages()));
    }
}
