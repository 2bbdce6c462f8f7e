//! Interval tracker for unused vertex keys.
//!
//! The free key set is kept as disjoint, maximal half-open intervals
//! `[a, b)` in a B-tree keyed by the lower bound. A fresh tracker holds
//! the single interval `[0, u64::MAX)`. `pop` claims the smallest free
//! key, `insert` returns a key to the pool (coalescing neighbors so the
//! representation stays maximal), and `remove` marks a key as used by
//! splitting the containing interval. All operations are `O(log n)` in
//! the number of intervals.

use crate::error::CascError;
use std::collections::BTreeMap;

/// Pool of currently unused vertex keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexTracker {
    /// lower bound → upper bound; intervals disjoint, non-adjacent.
    free: BTreeMap<u64, u64>,
}

impl Default for IndexTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexTracker {
    /// A tracker with every key in `[0, u64::MAX)` available.
    pub fn new() -> Self {
        let mut free = BTreeMap::new();
        free.insert(0, u64::MAX);
        IndexTracker { free }
    }

    /// Claims and returns the smallest free key.
    pub fn pop(&mut self) -> Result<u64, CascError> {
        let (&a, &b) = self.free.iter().next().ok_or(CascError::Exhausted)?;
        self.free.remove(&a);
        if a + 1 < b {
            self.free.insert(a + 1, b);
        }
        Ok(a)
    }

    /// True if `key` is currently free.
    pub fn contains(&self, key: u64) -> bool {
        self.free
            .range(..=key)
            .next_back()
            .is_some_and(|(_, &b)| key < b)
    }

    /// Marks `key` as used. No-op if it is already used.
    pub fn remove(&mut self, key: u64) {
        let Some((&a, &b)) = self.free.range(..=key).next_back() else {
            return;
        };
        if key >= b {
            return;
        }
        self.free.remove(&a);
        if a < key {
            self.free.insert(a, key);
        }
        if key + 1 < b {
            self.free.insert(key + 1, b);
        }
    }

    /// Returns `key` to the pool, merging with adjacent free intervals.
    /// No-op if the key is already free.
    pub fn insert(&mut self, key: u64) {
        // u64::MAX is outside the allocatable range
        if key == u64::MAX || self.contains(key) {
            return;
        }
        let mut lo = key;
        let mut hi = key + 1;
        if let Some((&a, &b)) = self.free.range(..key).next_back() {
            if b == key {
                lo = a;
                self.free.remove(&a);
            }
        }
        if let Some((&a, &b)) = self.free.range(hi..).next() {
            if a == hi {
                hi = b;
                self.free.remove(&a);
            }
        }
        self.free.insert(lo, hi);
    }

    /// True if no keys are free.
    pub fn is_empty(&self) -> bool {
        self.free.is_empty()
    }

    /// Number of maximal free intervals (test hook).
    pub fn interval_count(&self) -> usize {
        self.free.len()
    }

    /// The maximal free intervals `[a, b)` in ascending order.
    pub fn intervals(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.free.iter().map(|(&a, &b)| (a, b))
    }
}
