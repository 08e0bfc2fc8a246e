//! Explore-feed posts.

use chrono::{DateTime, Utc};

/// A read-only post in the explore/discover feed.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Post {
    pub id: u64,
    /// `UserRecord::id` of the author.
    pub author: u64,
    pub body: String,
    /// Topic tags, without the leading `#`.
    #[serde(default)]
    pub tags: Vec<String>,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub likes: u32,
}

impl Post {
    /// Case-insensitive tag membership.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}
