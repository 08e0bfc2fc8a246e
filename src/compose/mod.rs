//! Compose/draft builder: free-text draft fields in, mailbox records out.

pub mod builder;
pub mod draft;

pub use builder::{
    administrator_addresses, build_message, compose, should_deliver_internally, IdSequence,
};
pub use draft::{ComposeField, DraftFields};
