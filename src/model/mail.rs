//! Mailbox message, folder and label types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use super::address::Mailbox;
use super::attachment::Attachment;
use crate::error::DashError;

/// Session-unique message identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct MessageId(pub u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Mailbox location. A message is in exactly one folder at a time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Folder {
    #[default]
    Inbox,
    Sent,
    Draft,
    Starred,
    Spam,
    Trash,
}

impl Folder {
    /// Every folder, in sidebar order.
    pub const ALL: [Folder; 6] = [
        Folder::Inbox,
        Folder::Sent,
        Folder::Draft,
        Folder::Starred,
        Folder::Spam,
        Folder::Trash,
    ];

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Inbox => "Inbox",
            Self::Sent => "Sent",
            Self::Draft => "Draft",
            Self::Starred => "Starred",
            Self::Spam => "Spam",
            Self::Trash => "Trash",
        }
    }
}

impl fmt::Display for Folder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Folder {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DashError::UnknownFolder(s.to_string()))
    }
}

/// Optional tag on a message, orthogonal to its folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Label {
    Social,
    Company,
    Important,
    Private,
}

impl Label {
    /// Every label, in sidebar order.
    pub const ALL: [Label; 4] = [
        Label::Social,
        Label::Company,
        Label::Important,
        Label::Private,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Social => "Social",
            Self::Company => "Company",
            Self::Important => "Important",
            Self::Private => "Private",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The label side of the mailbox selector.
///
/// Anything other than `All` selects across folders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LabelFilter {
    #[default]
    All,
    Starred,
    Label(Label),
}

impl LabelFilter {
    /// `All`, `Starred`, then every concrete label.
    pub fn choices() -> Vec<LabelFilter> {
        let mut out = vec![LabelFilter::All, LabelFilter::Starred];
        out.extend(Label::ALL.into_iter().map(LabelFilter::Label));
        out
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Starred => "Starred",
            Self::Label(label) => label.name(),
        }
    }
}

impl fmt::Display for LabelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LabelFilter {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::choices()
            .into_iter()
            .find(|l| l.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DashError::UnknownLabel(s.to_string()))
    }
}

/// One mailbox message.
///
/// Created by the draft builder or loaded from seed data; afterwards only
/// the `read`/`starred` flags and the folder change.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MailMessage {
    pub id: MessageId,

    /// Sender identity.
    pub from: Mailbox,

    /// Primary recipients, as typed (trimmed, not validated).
    #[serde(default)]
    pub to: Vec<String>,

    #[serde(default)]
    pub cc: Vec<String>,

    #[serde(default)]
    pub bcc: Vec<String>,

    #[serde(default)]
    pub subject: String,

    #[serde(default)]
    pub body: String,

    pub timestamp: DateTime<Utc>,

    #[serde(default)]
    pub read: bool,

    #[serde(default)]
    pub starred: bool,

    pub folder: Folder,

    #[serde(default)]
    pub label: Option<Label>,

    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

impl MailMessage {
    /// Every recipient across To, Cc and Bcc.
    pub fn all_recipients(&self) -> impl Iterator<Item = &str> {
        self.to
            .iter()
            .chain(&self.cc)
            .chain(&self.bcc)
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_from_str() {
        assert_eq!("inbox".parse::<Folder>().unwrap(), Folder::Inbox);
        assert_eq!(" TRASH ".parse::<Folder>().unwrap(), Folder::Trash);
        assert!("archive".parse::<Folder>().is_err());
    }

    #[test]
    fn test_label_filter_from_str() {
        assert_eq!("all".parse::<LabelFilter>().unwrap(), LabelFilter::All);
        assert_eq!(
            "Starred".parse::<LabelFilter>().unwrap(),
            LabelFilter::Starred
        );
        assert_eq!(
            "important".parse::<LabelFilter>().unwrap(),
            LabelFilter::Label(Label::Important)
        );
        assert!("work".parse::<LabelFilter>().is_err());
    }

    #[test]
    fn test_choices_order() {
        let choices = LabelFilter::choices();
        assert_eq!(choices.len(), 6);
        assert_eq!(choices[0], LabelFilter::All);
        assert_eq!(choices[1], LabelFilter::Starred);
    }

    #[test]
    fn test_folder_serde_lowercase() {
        let json = serde_json::to_string(&Folder::Spam).unwrap();
        assert_eq!(json, "\"spam\"");
    }
}
