//! Seed data: the fixed JSON document the in-memory store starts from.

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::{DashError, Result};
use crate::model::mail::MailMessage;
use crate::model::post::Post;
use crate::model::user::UserRecord;

/// Built-in seed shipped with the binary.
const BUILTIN_SEED: &str = include_str!("../../data/seed.json");

/// Decoded seed document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub users: Vec<UserRecord>,
    pub messages: Vec<MailMessage>,
    pub posts: Vec<Post>,
}

impl SeedData {
    /// Decode a seed document from JSON text. `origin` names it in errors.
    pub fn from_json(json: &str, origin: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|source| DashError::InvalidSeed {
            origin: origin.to_string(),
            source,
        })
    }

    /// The seed compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_SEED, "<builtin>")
    }

    /// Read and decode a seed file.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DashError::SeedNotFound(path.to_path_buf()));
        }
        let json = std::fs::read_to_string(path).map_err(|e| DashError::io(path, e))?;
        let seed = Self::from_json(&json, &path.display().to_string())?;
        info!(path = %path.display(), users = seed.users.len(), "Loaded seed data");
        Ok(seed)
    }

    /// Load from `path` when given, otherwise the built-in seed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_path(p),
            None => Self::builtin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_seed_parses() {
        let seed = SeedData::builtin().expect("builtin seed");
        assert!(!seed.users.is_empty());
        assert!(!seed.messages.is_empty());
        assert!(!seed.posts.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let err = SeedData::from_path(Path::new("/nonexistent/seed.json")).unwrap_err();
        assert!(matches!(err, DashError::SeedNotFound(_)));
    }

    #[test]
    fn test_partial_document_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "users": [ {{ "id": 1, "name": "Ann" }} ] }}"#).unwrap();
        let seed = SeedData::from_path(file.path()).unwrap();
        assert_eq!(seed.users.len(), 1);
        assert!(seed.users[0].badges.is_empty());
        assert!(seed.messages.is_empty());
    }

    #[test]
    fn test_invalid_json() {
        let err = SeedData::from_json("{ nope", "inline").unwrap_err();
        assert!(matches!(err, DashError::InvalidSeed { .. }));
    }
}
