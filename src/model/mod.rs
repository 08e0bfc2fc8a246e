//! Core data model: users, mailbox messages, posts.

pub mod address;
pub mod attachment;
pub mod mail;
pub mod post;
pub mod user;
