//! Filter engine: pure selection functions over record snapshots.
//!
//! Every function here is total, preserves input order (except the explore
//! feed, which is sorted newest first) and returns an empty result for empty
//! input.

pub mod memo;
pub mod messages;
pub mod posts;
pub mod users;

pub use memo::UserFilterCache;
pub use messages::{select_message_indices, select_messages, MailboxCounts};
pub use posts::{select_post_indices, select_posts, tag_counts};
pub use users::{category_counts, select_user_indices, select_users, UserCategory};
