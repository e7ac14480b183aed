//! The minimal map abstraction the helpers operate through.
//!
//! [`Mapping`] captures the smallest capability set the helper functions
//! need from an associative container: membership test, lookup, insert with
//! displaced-value return, remove, size, and iteration over entries. The
//! trait deliberately promises nothing about iteration order beyond "the
//! container's natural order" — `BTreeMap` iterates in key order, `HashMap`
//! in an unspecified order, and the helpers inherit whichever they are
//! handed.
//!
//! The caller owns the container for its entire lifetime. Nothing in this
//! crate constructs, stores, or drops a map; every operation borrows one.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use map_ops::mapping::Mapping;
//!
//! let mut map = BTreeMap::new();
//! assert_eq!(map.put("one", 1), None);
//! assert_eq!(map.put("one", 10), Some(1));
//! assert!(map.contains_key(&"one"));
//! assert_eq!(Mapping::len(&map), 1);
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// The minimal capability set of an associative container.
///
/// Implementations are provided for [`HashMap`] (with any hasher) and
/// [`BTreeMap`]. Implementing the trait for another container only requires
/// the six operations below; the helpers in [`crate::ops`] and
/// [`crate::format`] then work with it unchanged.
///
/// # Contract
///
/// - `put` displaces and returns any previous value for the key.
/// - `remove` on an absent key is a no-op returning `None`.
/// - `entries` yields every entry exactly once, in the container's natural
///   iteration order; `len` matches the number of entries yielded.
pub trait Mapping {
    /// The key type of the container.
    type Key;
    /// The value type of the container.
    type Value;

    /// Returns `true` if the container holds an entry for `key`.
    fn contains_key(&self, key: &Self::Key) -> bool;

    /// Returns a reference to the value stored under `key`, if any.
    fn get(&self, key: &Self::Key) -> Option<&Self::Value>;

    /// Inserts `value` under `key`, returning the previous value if the key
    /// was already present.
    fn put(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value>;

    /// Removes the entry for `key`, returning its value if it was present.
    fn remove(&mut self, key: &Self::Key) -> Option<Self::Value>;

    /// Returns the number of entries in the container.
    fn len(&self) -> usize;

    /// Returns `true` if the container holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the entries in the container's natural order.
    fn entries(&self) -> impl Iterator<Item = (&Self::Key, &Self::Value)>;
}

impl<K, V, S> Mapping for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;

    fn contains_key(&self, key: &K) -> bool {
        Self::contains_key(self, key)
    }

    fn get(&self, key: &K) -> Option<&V> {
        Self::get(self, key)
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        Self::remove(self, key)
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }
}

impl<K, V> Mapping for BTreeMap<K, V>
where
    K: Ord,
{
    type Key = K;
    type Value = V;

    fn contains_key(&self, key: &K) -> bool {
        Self::contains_key(self, key)
    }

    fn get(&self, key: &K) -> Option<&V> {
        Self::get(self, key)
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        Self::remove(self, key)
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }
}
