//! Identity map - at most one live instance per primary key
//!
//! An explicit cache object owned by the review repository; construct one
//! per application lifetime (or one per test) instead of relying on
//! process-wide state. Not thread-safe (Rc, no locking) - designed for
//! single-threaded use alongside the single database connection.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::model::Review;

/// A review instance shared between callers and the identity map
pub type SharedReview = Rc<RefCell<Review>>;

/// Cache mapping primary keys to live review instances
///
/// Entries are added on first save or first load from a row and removed on
/// delete; nothing else prunes the map.
#[derive(Debug, Clone, Default)]
pub struct IdentityMap {
    reviews: HashMap<i64, SharedReview>,
}

impl IdentityMap {
    /// Create a new empty identity map
    pub fn new() -> Self {
        Self {
            reviews: HashMap::new(),
        }
    }

    /// Get the live instance for a primary key, if one is cached
    pub fn get(&self, id: i64) -> Option<SharedReview> {
        self.reviews.get(&id).cloned()
    }

    /// Register an instance under its primary key
    pub fn insert(&mut self, id: i64, review: SharedReview) {
        self.reviews.insert(id, review);
    }

    /// Remove the entry for a primary key, returning the instance if present
    pub fn remove(&mut self, id: i64) -> Option<SharedReview> {
        self.reviews.remove(&id)
    }

    /// Check whether a primary key is cached
    pub fn contains(&self, id: i64) -> bool {
        self.reviews.contains_key(&id)
    }

    /// Number of cached instances
    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    /// Check whether the map is empty
    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.reviews.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shared(id: i64) -> SharedReview {
        Rc::new(RefCell::new(
            Review::restore(id, 2021, "cached", 1).unwrap(),
        ))
    }

    #[test]
    fn test_get_returns_the_same_instance() {
        let mut map = IdentityMap::new();
        let review = shared(1);

        map.insert(1, Rc::clone(&review));

        let hit = map.get(1).expect("entry should exist");
        assert!(Rc::ptr_eq(&hit, &review));
        assert!(map.get(2).is_none());
    }

    #[test]
    fn test_remove_forgets_the_key() {
        let mut map = IdentityMap::new();
        map.insert(1, shared(1));

        assert!(map.contains(1));
        assert_eq!(map.len(), 1);

        let removed = map.remove(1);
        assert!(removed.is_some());
        assert!(!map.contains(1));
        assert!(map.is_empty());
        assert!(map.remove(1).is_none());
    }

    #[test]
    fn test_clear() {
        let mut map = IdentityMap::new();
        map.insert(1, shared(1));
        map.insert(2, shared(2));

        map.clear();
        assert!(map.is_empty());
    }
}
