//! Sender identities and recipient-list splitting.

/// A sender identity: display name plus bare address.
///
/// # Examples
/// - `"Mary Nakato <mary@mak.ac.ug>"` → `display_name = "Mary Nakato"`,
///   `address = "mary@mak.ac.ug"`
/// - `"root@mak.ac.ug"` → `display_name = ""`, `address = "root@mak.ac.ug"`
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq, Default)]
pub struct Mailbox {
    /// Human-readable display name (may be empty).
    #[serde(default)]
    pub display_name: String,
    /// The bare email address.
    pub address: String,
}

impl Mailbox {
    /// Build a mailbox from its two parts.
    pub fn new(display_name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            address: address.into(),
        }
    }

    /// Parse `"Display Name <address>"`, `"<address>"` or a bare address.
    ///
    /// Nothing is validated; anything that is not in angle-bracket form is
    /// stored verbatim as the address.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if let (Some(start), Some(end)) = (trimmed.rfind('<'), trimmed.rfind('>')) {
            if end > start {
                return Self {
                    display_name: strip_quotes(&trimmed[..start]),
                    address: trimmed[start + 1..end].trim().to_string(),
                };
            }
        }
        Self {
            display_name: String::new(),
            address: trimmed.to_string(),
        }
    }

    /// Format for display: `"Display Name <address>"` or just `"address"`.
    pub fn display(&self) -> String {
        if self.display_name.is_empty() {
            self.address.clone()
        } else {
            format!("{} <{}>", self.display_name, self.address)
        }
    }

    /// The display name, falling back to the address when it is empty.
    pub fn short_name(&self) -> &str {
        if self.display_name.is_empty() {
            &self.address
        } else {
            &self.display_name
        }
    }
}

impl std::fmt::Display for Mailbox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Split a comma-separated recipient field into trimmed entries.
///
/// With `keep_blank` set, empty entries survive (`"a@x, "` gives
/// `["a@x", ""]`); otherwise they are dropped. Entries are not validated.
pub fn split_recipients(raw: &str, keep_blank: bool) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| keep_blank || !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Lowercased form used for case-insensitive address comparison.
pub fn normalize(address: &str) -> String {
    address.trim().to_lowercase()
}

fn strip_quotes(s: &str) -> String {
    let trimmed = s.trim();
    if trimmed.starts_with('"') && trimmed.ends_with('"') && trimmed.len() >= 2 {
        trimmed[1..trimmed.len() - 1].trim().to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_address() {
        let mb = Mailbox::parse("root@mak.ac.ug");
        assert_eq!(mb.address, "root@mak.ac.ug");
        assert_eq!(mb.display_name, "");
    }

    #[test]
    fn test_parse_name_and_address() {
        let mb = Mailbox::parse("\"Nakato, Mary\" <mary@mak.ac.ug>");
        assert_eq!(mb.address, "mary@mak.ac.ug");
        assert_eq!(mb.display_name, "Nakato, Mary");
        assert_eq!(mb.short_name(), "Nakato, Mary");
    }

    #[test]
    fn test_parse_malformed_kept_verbatim() {
        let mb = Mailbox::parse("  not an address ");
        assert_eq!(mb.address, "not an address");
    }

    #[test]
    fn test_split_drops_blanks() {
        assert_eq!(split_recipients("c@x.com,  ", false), vec!["c@x.com"]);
        assert!(split_recipients("", false).is_empty());
    }

    #[test]
    fn test_split_keeps_blanks() {
        assert_eq!(split_recipients("a@x.com, ", true), vec!["a@x.com", ""]);
        assert_eq!(split_recipients("", true), vec![""]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Mailbox::new("", "a@b.c").display(), "a@b.c");
        assert_eq!(Mailbox::new("A", "a@b.c").to_string(), "A <a@b.c>");
    }
}
