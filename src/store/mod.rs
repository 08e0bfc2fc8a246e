//! The record store: read snapshots of users, messages and posts, append
//! sent messages.

pub mod memory;
pub mod seed;

use std::ops::Deref;
use std::rc::Rc;

use crate::model::mail::{MailMessage, MessageId};
use crate::model::post::Post;
use crate::model::user::UserRecord;

/// An immutable view of one collection at a point in time.
///
/// Cloning is cheap (shared `Rc`). The generation number changes on every
/// mutation of the collection, so `(generation, filter)` is a valid memo key.
#[derive(Debug)]
pub struct Snapshot<T> {
    generation: u64,
    records: Rc<[T]>,
}

impl<T> Snapshot<T> {
    pub fn new(generation: u64, records: Rc<[T]>) -> Self {
        Self {
            generation,
            records,
        }
    }

    /// Generation this snapshot was taken at.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether both snapshots are the same underlying data.
    pub fn same_as(&self, other: &Self) -> bool {
        self.generation == other.generation && Rc::ptr_eq(&self.records, &other.records)
    }
}

impl<T> Clone for Snapshot<T> {
    fn clone(&self) -> Self {
        Self {
            generation: self.generation,
            records: Rc::clone(&self.records),
        }
    }
}

impl<T> Deref for Snapshot<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.records
    }
}

/// Read/append surface the dashboard consumes.
///
/// Implementations are assumed infallible: reads always succeed and
/// `send_message` never fails.
pub trait RecordStore {
    /// Current user snapshot.
    fn users(&self) -> Snapshot<UserRecord>;

    /// Current message snapshot.
    fn messages(&self) -> Snapshot<MailMessage>;

    /// Current explore-feed snapshot.
    fn posts(&self) -> Snapshot<Post>;

    /// Append a message.
    fn send_message(&mut self, message: MailMessage);

    /// Apply a flag or folder change to the message with `id` in place.
    ///
    /// Returns `false` when no such message exists.
    fn update_message(&mut self, id: MessageId, update: &mut dyn FnMut(&mut MailMessage)) -> bool;
}
