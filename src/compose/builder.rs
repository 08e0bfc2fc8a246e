//! Turns a draft into the sent copy and, for administrator recipients, an
//! internally delivered inbox copy.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::draft::DraftFields;
use crate::model::address::{normalize, split_recipients, Mailbox};
use crate::model::mail::{Folder, MailMessage, MessageId};
use crate::model::user::{UserRecord, BADGE_ADMINISTRATOR};

/// Monotonic message-id source for one session.
///
/// Ids only grow. Once `u64::MAX` has been handed out the sequence falls
/// back to the lowest ids not present in the store.
#[derive(Debug, Clone)]
pub struct IdSequence {
    next: Option<u64>,
    /// Ids known to be taken, only tracked once the sequence is exhausted.
    taken: HashSet<u64>,
}

impl IdSequence {
    /// Start handing out ids from `first`.
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: Some(first),
            taken: HashSet::new(),
        }
    }

    /// Continue after the highest id already in `messages`.
    pub fn after(messages: &[MailMessage]) -> Self {
        let mut ids = Self::starting_at(1);
        ids.skip_past(messages);
        ids
    }

    /// Take the next id.
    pub fn next_id(&mut self) -> MessageId {
        if let Some(id) = self.next {
            self.next = id.checked_add(1);
            if self.next.is_none() {
                warn!("Message ids exhausted, reusing free ids");
                self.taken.insert(id);
            }
            return MessageId(id);
        }
        let id = (0..=u64::MAX)
            .find(|candidate| !self.taken.contains(candidate))
            .unwrap_or_default();
        self.taken.insert(id);
        MessageId(id)
    }

    /// Make sure future ids are not already used by `messages`.
    pub fn skip_past(&mut self, messages: &[MailMessage]) {
        match self.next {
            Some(next) => {
                if let Some(max) = messages.iter().map(|m| m.id.0).max() {
                    if max >= next {
                        self.next = max.checked_add(1);
                        if self.next.is_none() {
                            warn!("Message ids exhausted, reusing free ids");
                            self.taken.extend(messages.iter().map(|m| m.id.0));
                        }
                    }
                }
            }
            None => self.taken.extend(messages.iter().map(|m| m.id.0)),
        }
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

/// Build the sent copy of a draft.
///
/// Cc and Bcc entries are trimmed and blanks dropped. To entries are trimmed
/// but blanks are kept, so an empty To field yields one empty recipient.
/// Nothing is validated.
pub fn build_message(
    draft: &DraftFields,
    sender: &Mailbox,
    ids: &mut IdSequence,
    now: DateTime<Utc>,
) -> MailMessage {
    MailMessage {
        id: ids.next_id(),
        from: sender.clone(),
        to: split_recipients(&draft.to, true),
        cc: split_recipients(&draft.cc, false),
        bcc: split_recipients(&draft.bcc, false),
        subject: draft.subject.clone(),
        body: draft.body.clone(),
        timestamp: now,
        read: true,
        starred: false,
        folder: Folder::Sent,
        label: None,
        attachments: Vec::new(),
    }
}

/// Lowercased addresses of every account holding the "Administrator" badge.
pub fn administrator_addresses(users: &[UserRecord]) -> HashSet<String> {
    users
        .iter()
        .filter(|u| u.has_badge(BADGE_ADMINISTRATOR))
        .flat_map(|u| u.emails.iter().map(|e| normalize(e)))
        .collect()
}

/// Whether any To/Cc/Bcc recipient is an administrator address, ignoring case.
///
/// `admin_addresses` must already be normalized (see
/// [`administrator_addresses`]).
pub fn should_deliver_internally(message: &MailMessage, admin_addresses: &HashSet<String>) -> bool {
    message
        .all_recipients()
        .any(|r| admin_addresses.contains(&normalize(r)))
}

/// Every record a send produces, in store order.
///
/// Always the sent copy; when [`should_deliver_internally`] holds, also a
/// separate inbox copy with its own id, `read = false` and identical content.
pub fn compose(
    draft: &DraftFields,
    sender: &Mailbox,
    admin_addresses: &HashSet<String>,
    ids: &mut IdSequence,
    now: DateTime<Utc>,
) -> Vec<MailMessage> {
    let sent = build_message(draft, sender, ids, now);
    if !should_deliver_internally(&sent, admin_addresses) {
        return vec![sent];
    }

    let delivered = MailMessage {
        id: ids.next_id(),
        folder: Folder::Inbox,
        read: false,
        ..sent.clone()
    };
    info!(
        sent = %sent.id,
        delivered = %delivered.id,
        "Delivered internally to administrator inbox"
    );
    vec![sent, delivered]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap()
    }

    fn draft(to: &str, cc: &str, bcc: &str) -> DraftFields {
        DraftFields {
            to: to.into(),
            cc: cc.into(),
            bcc: bcc.into(),
            subject: "Subject".into(),
            body: "Body".into(),
        }
    }

    #[test]
    fn test_recipient_normalization() {
        let mut ids = IdSequence::default();
        let m = build_message(
            &draft("a@x.com, b@x.com", "", "c@x.com,  "),
            &Mailbox::new("Me", "me@x.com"),
            &mut ids,
            now(),
        );
        assert_eq!(m.to, vec!["a@x.com", "b@x.com"]);
        assert!(m.cc.is_empty());
        assert_eq!(m.bcc, vec!["c@x.com"]);
        assert_eq!(m.folder, Folder::Sent);
        assert!(m.read);
        assert!(!m.starred);
    }

    #[test]
    fn test_to_keeps_blank_entries() {
        let mut ids = IdSequence::default();
        let m = build_message(&draft("", "", ""), &Mailbox::default(), &mut ids, now());
        assert_eq!(m.to, vec![""]);
        let m = build_message(&draft("a@x.com,", "", ""), &Mailbox::default(), &mut ids, now());
        assert_eq!(m.to, vec!["a@x.com", ""]);
    }

    #[test]
    fn test_ids_are_monotonic() {
        let mut ids = IdSequence::starting_at(10);
        assert_eq!(ids.next_id(), MessageId(10));
        assert_eq!(ids.next_id(), MessageId(11));
    }

    fn sent_with_id(id: u64) -> MailMessage {
        let mut ids = IdSequence::starting_at(id);
        build_message(&draft("a@x.com", "", ""), &Mailbox::default(), &mut ids, now())
    }

    #[test]
    fn test_after_highest_id_does_not_overflow() {
        let stored = vec![sent_with_id(0), sent_with_id(1), sent_with_id(u64::MAX)];
        let mut ids = IdSequence::after(&stored);
        // Falls back to the lowest free ids instead of wrapping.
        assert_eq!(ids.next_id(), MessageId(2));
        assert_eq!(ids.next_id(), MessageId(3));
    }

    #[test]
    fn test_exhausted_sequence_stays_unique() {
        let mut ids = IdSequence::starting_at(u64::MAX);
        assert_eq!(ids.next_id(), MessageId(u64::MAX));
        ids.skip_past(&[sent_with_id(0)]);
        assert_eq!(ids.next_id(), MessageId(1));
        assert_eq!(ids.next_id(), MessageId(2));
    }

    #[test]
    fn test_skip_past_moves_forward_only() {
        let mut ids = IdSequence::starting_at(20);
        ids.skip_past(&[sent_with_id(5)]);
        assert_eq!(ids.next_id(), MessageId(20));
        ids.skip_past(&[sent_with_id(40)]);
        assert_eq!(ids.next_id(), MessageId(41));
    }

    #[test]
    fn test_should_deliver_case_insensitive() {
        let admins: HashSet<String> = ["root@mak.ac.ug".to_string()].into();
        let mut ids = IdSequence::default();
        let m = build_message(
            &draft("", "", "ROOT@Mak.ac.ug"),
            &Mailbox::default(),
            &mut ids,
            now(),
        );
        assert!(should_deliver_internally(&m, &admins));
        let m = build_message(&draft("x@y.z", "", ""), &Mailbox::default(), &mut ids, now());
        assert!(!should_deliver_internally(&m, &admins));
    }

    #[test]
    fn test_inbox_copy_is_independent() {
        let admins: HashSet<String> = ["root@mak.ac.ug".to_string()].into();
        let mut ids = IdSequence::default();
        let out = compose(
            &draft("root@mak.ac.ug", "", ""),
            &Mailbox::new("Me", "me@x.com"),
            &admins,
            &mut ids,
            now(),
        );
        assert_eq!(out.len(), 2);
        assert_ne!(out[0].id, out[1].id);
        assert_eq!(out[1].folder, Folder::Inbox);
        assert!(!out[1].read);
        assert_eq!(out[0].subject, out[1].subject);
        assert_eq!(out[0].body, out[1].body);
        assert_eq!(out[0].from, out[1].from);
        assert_eq!(out[0].to, out[1].to);
    }
}
