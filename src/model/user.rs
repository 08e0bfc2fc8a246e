//! User directory records.

/// Badge held by administrator accounts.
pub const BADGE_ADMINISTRATOR: &str = "Administrator";
/// Badge held by super-administrator accounts.
pub const BADGE_SUPER_ADMIN: &str = "Super Admin";
/// Badge held by official (staff/office) accounts.
pub const BADGE_OFFICIAL: &str = "Official";
/// Badge held by corporate partner accounts.
pub const BADGE_CORPORATE: &str = "Corporate";
/// Status of alumni.
pub const STATUS_GRADUATE: &str = "Graduate";

/// A read-only user snapshot from the record store.
///
/// Category membership (student, lecturer, ...) is derived from
/// `badges`, `status` and `role` by the filter engine and is never stored.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UserRecord {
    pub id: u64,
    pub name: String,
    /// Free-form role, e.g. "Senior Lecturer" or "BSc Computer Science".
    #[serde(default)]
    pub role: String,
    /// Free-form status, e.g. "Active" or "Graduate".
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub badges: Vec<String>,
    #[serde(default)]
    pub bio: String,
    /// Contact addresses; the first one is the primary.
    #[serde(default)]
    pub emails: Vec<String>,
}

impl UserRecord {
    /// Whether the badge set contains `badge` (exact match).
    pub fn has_badge(&self, badge: &str) -> bool {
        self.badges.iter().any(|b| b == badge)
    }

    /// Primary contact address, if any.
    pub fn primary_email(&self) -> Option<&str> {
        self.emails.first().map(String::as_str)
    }
}
