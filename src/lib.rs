//! `campusdash`: terminal admin dashboard for a university social network.
//!
//! The library holds the record model, the in-memory record store, the pure
//! filter and compose functions, and the view-state controller that the
//! terminal UI and the CLI subcommands drive.

pub mod compose;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod store;
pub mod tui;
pub mod view;
