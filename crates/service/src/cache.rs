//! Caller-owned cache of fetched lists.
//!
//! Holds one list per key together with the time it was fetched. Nothing is
//! shared globally: whoever owns the cache decides when to refresh, when to
//! patch an item in place after a successful write, and when to drop a list
//! so the next read goes back to the store.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

use labdesk_core::{MasterViewRow, ObjectiveWithPrices};

/// Cache key of the reconciled objective list.
pub const OBJECTIVES_KEY: &str = "objetivos-precios";
/// Cache key of the master work-order view.
pub const MASTER_VIEW_KEY: &str = "vista-maestra";

/// Items with an identity, so an updated copy can replace the cached one.
pub trait Keyed {
    type Id: PartialEq;

    fn key(&self) -> Self::Id;
}

impl Keyed for ObjectiveWithPrices {
    type Id = i64;

    fn key(&self) -> i64 {
        self.id()
    }
}

impl Keyed for MasterViewRow {
    type Id = Option<i64>;

    fn key(&self) -> Option<i64> {
        self.prueba_id
    }
}

#[derive(Debug)]
struct CachedList<T> {
    items: Vec<T>,
    fetched_at: Instant,
}

#[derive(Debug)]
pub struct QueryCache<K, T> {
    lists: HashMap<K, CachedList<T>>,
}

impl<K, T> Default for QueryCache<K, T> {
    fn default() -> Self {
        Self { lists: HashMap::new() }
    }
}

impl<K: Eq + Hash, T: Keyed> QueryCache<K, T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &K) -> Option<&[T]> {
        self.lists.get(key).map(|l| l.items.as_slice())
    }

    /// The cached list, unless it is missing or older than `max_age`.
    pub fn get_fresh(&self, key: &K, max_age: Duration) -> Option<&[T]> {
        if self.is_stale(key, max_age) { None } else { self.get(key) }
    }

    /// Replace the list for `key` with a freshly fetched one.
    pub fn store(&mut self, key: K, items: Vec<T>) {
        self.lists.insert(key, CachedList { items, fetched_at: Instant::now() });
    }

    /// Drop the list so the next read re-fetches. Returns whether one was cached.
    pub fn invalidate(&mut self, key: &K) -> bool {
        self.lists.remove(key).is_some()
    }

    /// Replace the cached item with the same identity as `item`.
    ///
    /// Returns `false` when the list is not cached or holds no such item;
    /// the list is left untouched and the caller should invalidate it.
    pub fn apply_update(&mut self, key: &K, item: T) -> bool {
        let Some(list) = self.lists.get_mut(key) else {
            return false;
        };
        let id = item.key();
        match list.items.iter_mut().find(|existing| existing.key() == id) {
            Some(slot) => {
                *slot = item;
                true
            },
            None => false,
        }
    }

    /// Missing lists are stale.
    pub fn is_stale(&self, key: &K, max_age: Duration) -> bool {
        self.lists.get(key).is_none_or(|l| l.fetched_at.elapsed() >= max_age)
    }
}
