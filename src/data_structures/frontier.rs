use num_traits::Float;
use ordered_float::OrderedFloat;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::hash::Hash;

use crate::{Error, Result};

/// Ordered set of discovered-but-unsettled keys, keyed by tentative priority.
///
/// The minimum is the smallest priority; among equal priorities the key inserted
/// first wins. Every (re)insertion takes a fresh sequence number, so a key whose
/// priority was decreased ranks as if it had just been discovered at that priority.
#[derive(Debug)]
pub struct PriorityFrontier<K, P>
where
    K: Copy + Eq + Hash + Debug,
    P: Float + Debug,
{
    /// (priority, insertion sequence) -> key
    order: BTreeMap<(OrderedFloat<P>, u64), K>,

    /// key -> its entry in `order`
    entries: HashMap<K, (OrderedFloat<P>, u64)>,

    next_sequence: u64,
}

impl<K, P> PriorityFrontier<K, P>
where
    K: Copy + Eq + Hash + Debug,
    P: Float + Debug,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        PriorityFrontier {
            order: BTreeMap::new(),
            entries: HashMap::new(),
            next_sequence: 0,
        }
    }

    /// Returns true if the frontier holds no key
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of keys in the frontier
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the key is in the frontier
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the current priority of a key
    pub fn priority(&self, key: &K) -> Option<P> {
        self.entries.get(key).map(|(p, _)| p.0)
    }

    /// Inserts a key with the given priority.
    ///
    /// A key already present is moved to the new priority, behind every key
    /// already holding that priority.
    pub fn insert(&mut self, key: K, priority: P) {
        self.remove(&key);

        let slot = (OrderedFloat(priority), self.next_sequence);
        self.next_sequence += 1;
        self.order.insert(slot, key);
        self.entries.insert(key, slot);
    }

    /// Removes a key, returning its priority if it was present
    pub fn remove(&mut self, key: &K) -> Option<P> {
        let slot = self.entries.remove(key)?;
        self.order.remove(&slot);
        Some(slot.0 .0)
    }

    /// Lowers the priority of a key: remove, then insert again.
    pub fn decrease_priority(&mut self, key: K, priority: P) {
        debug_assert!(
            self.priority(&key).map_or(true, |old| priority <= old),
            "priority of {:?} raised to {:?}",
            key,
            priority
        );
        self.insert(key, priority);
    }

    /// Returns the minimum key and its priority without removing it
    pub fn peek_min(&self) -> Option<(K, P)> {
        self.order
            .iter()
            .next()
            .map(|(&(priority, _), &key)| (key, priority.0))
    }

    /// Removes and returns the minimum key and its priority.
    ///
    /// Fails with [`Error::EmptyFrontier`] on an empty frontier; callers are
    /// expected to check [`is_empty`](Self::is_empty) first.
    pub fn pop_min(&mut self) -> Result<(K, P)> {
        let ((priority, _), key) = self.order.pop_first().ok_or(Error::EmptyFrontier)?;
        self.entries.remove(&key);
        Ok((key, priority.0))
    }

    /// Clears the frontier
    pub fn clear(&mut self) {
        self.order.clear();
        self.entries.clear();
    }
}

impl<K, P> Default for PriorityFrontier<K, P>
where
    K: Copy + Eq + Hash + Debug,
    P: Float + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
