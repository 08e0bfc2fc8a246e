//! Memoized user-category selection.

use std::num::NonZeroUsize;
use std::rc::Rc;

use lru::LruCache;
use tracing::debug;

use super::users::{select_user_indices, UserCategory};
use crate::model::user::UserRecord;
use crate::store::Snapshot;

/// Default number of `(snapshot, category)` results kept.
pub const DEFAULT_CAPACITY: usize = 16;

/// Caches category selections keyed on `(snapshot generation, category)`.
///
/// A repeated request with an unchanged snapshot and category returns the
/// very same `Rc` (pointer-equal); anything else recomputes. Generations
/// come from a single store, so one cache must not be shared between stores.
#[derive(Debug)]
pub struct UserFilterCache {
    cache: LruCache<(u64, UserCategory), Rc<[usize]>>,
    computed: u64,
}

impl UserFilterCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
            computed: 0,
        }
    }

    /// Indices into `users` matching `category`, computed at most once per
    /// `(generation, category)` while the entry stays cached.
    pub fn select(&mut self, users: &Snapshot<UserRecord>, category: UserCategory) -> Rc<[usize]> {
        let key = (users.generation(), category);
        if let Some(hit) = self.cache.get(&key) {
            return Rc::clone(hit);
        }
        let result: Rc<[usize]> = Rc::from(select_user_indices(users, category));
        self.computed += 1;
        debug!(
            generation = key.0,
            category = %category,
            matched = result.len(),
            "Recomputed user selection"
        );
        self.cache.put(key, Rc::clone(&result));
        result
    }

    /// How many selections were actually computed (cache misses).
    pub fn computed(&self) -> u64 {
        self.computed
    }
}

impl Default for UserFilterCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users(generation: u64) -> Snapshot<UserRecord> {
        let records = vec![UserRecord {
            id: 1,
            name: "Ann".into(),
            role: "Lecturer".into(),
            status: "Active".into(),
            badges: Vec::new(),
            bio: String::new(),
            emails: Vec::new(),
        }];
        Snapshot::new(generation, Rc::from(records))
    }

    #[test]
    fn test_same_key_returns_same_rc() {
        let mut cache = UserFilterCache::default();
        let snap = users(1);
        let a = cache.select(&snap, UserCategory::Lecturer);
        let b = cache.select(&snap, UserCategory::Lecturer);
        assert!(Rc::ptr_eq(&a, &b));
        assert_eq!(cache.computed(), 1);
    }

    #[test]
    fn test_new_generation_recomputes() {
        let mut cache = UserFilterCache::default();
        let a = cache.select(&users(1), UserCategory::All);
        let b = cache.select(&users(2), UserCategory::All);
        assert!(!Rc::ptr_eq(&a, &b));
        assert_eq!(cache.computed(), 2);
    }

    #[test]
    fn test_zero_capacity_still_works() {
        let mut cache = UserFilterCache::new(0);
        let snap = users(1);
        let a = cache.select(&snap, UserCategory::Student);
        let b = cache.select(&snap, UserCategory::Student);
        assert!(Rc::ptr_eq(&a, &b));
    }
}
