//! Mailbox selection: folder view or cross-folder label view.

use crate::model::mail::{Folder, Label, LabelFilter, MailMessage};

/// Whether `message` is shown for the `(folder, label)` selector.
///
/// A label other than `All` acts as a saved search across every folder and
/// the folder is ignored; only `All` falls back to folder membership.
pub fn message_matches(message: &MailMessage, folder: Folder, label: LabelFilter) -> bool {
    match label {
        LabelFilter::Starred => message.starred,
        LabelFilter::Label(wanted) => message.label == Some(wanted),
        LabelFilter::All => message.folder == folder,
    }
}

/// Positions in `messages` selected by `(folder, label)`, in input order.
pub fn select_message_indices(
    messages: &[MailMessage],
    folder: Folder,
    label: LabelFilter,
) -> Vec<usize> {
    messages
        .iter()
        .enumerate()
        .filter(|(_, m)| message_matches(m, folder, label))
        .map(|(i, _)| i)
        .collect()
}

/// The subsequence of `messages` selected by `(folder, label)`.
pub fn select_messages(
    messages: &[MailMessage],
    folder: Folder,
    label: LabelFilter,
) -> Vec<&MailMessage> {
    messages
        .iter()
        .filter(|m| message_matches(m, folder, label))
        .collect()
}

/// Sidebar counters for the mailbox section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MailboxCounts {
    /// Unread messages per folder, in [`Folder::ALL`] order.
    pub unread: [usize; 6],
    /// Total messages per folder, in [`Folder::ALL`] order.
    pub total: [usize; 6],
    /// Starred messages in any folder.
    pub starred: usize,
    /// Messages per label, in [`Label::ALL`] order.
    pub labels: [usize; 4],
}

impl MailboxCounts {
    /// Tally a message snapshot.
    pub fn tally(messages: &[MailMessage]) -> Self {
        let mut counts = Self::default();
        for m in messages {
            let slot = folder_slot(m.folder);
            counts.total[slot] += 1;
            if !m.read {
                counts.unread[slot] += 1;
            }
            if m.starred {
                counts.starred += 1;
            }
            if let Some(label) = m.label {
                counts.labels[label_slot(label)] += 1;
            }
        }
        counts
    }

    pub fn unread_in(&self, folder: Folder) -> usize {
        self.unread[folder_slot(folder)]
    }

    pub fn total_in(&self, folder: Folder) -> usize {
        self.total[folder_slot(folder)]
    }

    /// Size of the cross-folder view for a label filter (`None` for `All`).
    pub fn for_label(&self, label: LabelFilter) -> Option<usize> {
        match label {
            LabelFilter::All => None,
            LabelFilter::Starred => Some(self.starred),
            LabelFilter::Label(l) => Some(self.labels[label_slot(l)]),
        }
    }
}

fn folder_slot(folder: Folder) -> usize {
    Folder::ALL
        .iter()
        .position(|f| *f == folder)
        .unwrap_or_default()
}

fn label_slot(label: Label) -> usize {
    Label::ALL
        .iter()
        .position(|l| *l == label)
        .unwrap_or_default()
}
