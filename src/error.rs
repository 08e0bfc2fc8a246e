//! Centralized error types for campusdash.

use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the campusdash library.
///
/// The filter, compose and view-state operations are total and never return
/// one of these; errors only come from the edges (seed data, names typed on
/// the command line).
#[derive(Error, Debug)]
pub enum DashError {
    /// I/O error with the associated file path.
    #[error("I/O error reading '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The seed data file does not exist.
    #[error("Seed data file not found: {0}")]
    SeedNotFound(PathBuf),

    /// The seed data could not be decoded.
    #[error("Invalid seed data in '{origin}': {source}")]
    InvalidSeed {
        origin: String,
        source: serde_json::Error,
    },

    /// An unrecognized user category name.
    #[error(
        "Unknown user category '{0}' (expected all, student, lecturer, administrator, corporate)"
    )]
    UnknownCategory(String),

    /// An unrecognized mailbox folder name.
    #[error("Unknown folder '{0}' (expected inbox, sent, draft, starred, spam, trash)")]
    UnknownFolder(String),

    /// An unrecognized label filter name.
    #[error("Unknown label '{0}' (expected all, starred, social, company, important, private)")]
    UnknownLabel(String),

    /// An unrecognized dashboard section name.
    #[error("Unknown section '{0}' (expected overview, users, mailbox, explore)")]
    UnknownSection(String),
}

/// Convenience alias for `Result<T, DashError>`.
pub type Result<T> = std::result::Result<T, DashError>;

impl DashError {
    /// Create an `Io` variant from a path and an `io::Error`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
