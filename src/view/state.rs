//! Transient view state.

use std::fmt;
use std::str::FromStr;

use crate::compose::DraftFields;
use crate::error::DashError;
use crate::filter::UserCategory;
use crate::model::mail::{Folder, LabelFilter, MessageId};

/// Top-level dashboard section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Overview,
    Users,
    Mailbox,
    Explore,
}

impl Section {
    /// Every section, in navigation order.
    pub const ALL: [Section; 4] = [
        Section::Overview,
        Section::Users,
        Section::Mailbox,
        Section::Explore,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Users => "Users",
            Self::Mailbox => "Mailbox",
            Self::Explore => "Explore",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Section {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sec| sec.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DashError::UnknownSection(s.to_string()))
    }
}

/// Everything the operator has selected.
///
/// Fields change independently; there are no enforced transitions. The
/// controller keeps compose mode and a selected message mutually exclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub section: Section,
    pub category: UserCategory,
    pub folder: Folder,
    pub label: LabelFilter,
    pub selected_message: Option<MessageId>,
    pub composing: bool,
    pub draft: DraftFields,
    /// Explore-feed tag filter; `None` shows every post.
    pub tag: Option<String>,
}

