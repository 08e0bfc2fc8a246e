//! Attachment metadata.
//!
//! Only descriptive fields are kept; there is no payload.

/// Metadata about a message attachment.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct Attachment {
    /// Filename of the attachment.
    pub filename: String,

    /// MIME content type (e.g. `"application/pdf"`).
    #[serde(default = "default_content_type")]
    pub content_type: String,

    /// Size in bytes.
    #[serde(default)]
    pub size: u64,
}

fn default_content_type() -> String {
    "application/octet-stream".to_string()
}
