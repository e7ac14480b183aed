//! Bulk and conditional operations over a caller-supplied map.
//!
//! Every function here is a single synchronous pass over its input, borrows
//! the map from the caller, and hands the same reference back so calls can
//! be chained. Input sequences are processed strictly in the order given,
//! which is what decides the final value when a key repeats.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use map_ops::pairs;
//! use map_ops::ops::{put_into_map, remove_keys};
//!
//! let mut map = BTreeMap::new();
//! remove_keys(
//!     put_into_map(&mut map, pairs!["a" => 1, "b" => 2, "c" => 3]),
//!     [&"b"],
//! );
//! assert_eq!(map.len(), 2);
//! ```

use std::borrow::Borrow;

use crate::error::Error;
use crate::mapping::Mapping;

// =============================================================================
// Bulk insertion
// =============================================================================

/// Inserts every `(key, value)` pair into `map`, in sequence order.
///
/// A prior value for a key is overwritten, so a key appearing twice in the
/// input ends up holding the later value. Returns the same map reference to
/// allow chaining.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use map_ops::pairs;
/// use map_ops::ops::put_into_map;
///
/// let mut map = BTreeMap::new();
/// put_into_map(&mut map, pairs!["a" => 1, "b" => 2, "a" => 3]);
/// assert_eq!(map.get("a"), Some(&3));
/// assert_eq!(map.len(), 2);
/// ```
pub fn put_into_map<M, I>(map: &mut M, pairs: I) -> &mut M
where
    M: Mapping,
    I: IntoIterator<Item = (M::Key, M::Value)>,
{
    for (key, value) in pairs {
        map.put(key, value);
    }
    map
}

/// Inserts entries from a flat alternating `key1, value1, key2, value2, …`
/// list into `map`.
///
/// This is the interface-parity sibling of [`put_into_map`] for callers that
/// already hold the flat shape. Because a single item type has to stand in
/// for both keys and values, items must convert into both; prefer
/// [`put_into_map`] with typed pairs whenever you control the input shape.
///
/// # Errors
///
/// Returns [`Error::OddItemCount`] when the list length is odd. The check
/// runs before any insertion, so a failing call leaves the map untouched.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use map_ops::ops::put_into_map_flat;
///
/// let mut map: BTreeMap<String, String> = BTreeMap::new();
/// put_into_map_flat(&mut map, ["a", "1", "b", "2"]).unwrap();
/// assert_eq!(map.get("b").map(String::as_str), Some("2"));
///
/// assert!(put_into_map_flat(&mut map, ["dangling"]).is_err());
/// ```
pub fn put_into_map_flat<M, I>(map: &mut M, items: I) -> Result<&mut M, Error>
where
    M: Mapping,
    I: IntoIterator,
    I::Item: Into<M::Key> + Into<M::Value>,
{
    let items: Vec<I::Item> = items.into_iter().collect();
    if items.len() % 2 != 0 {
        return Err(Error::OddItemCount { count: items.len() });
    }

    let mut items = items.into_iter();
    while let (Some(key), Some(value)) = (items.next(), items.next()) {
        map.put(key.into(), value.into());
    }
    Ok(map)
}

/// Builds a `Vec` of `(key, value)` pairs with a literal-like syntax.
///
/// Intended as the input shape for [`put_into_map`]. A trailing comma is
/// accepted.
///
/// # Examples
///
/// ```rust
/// use map_ops::pairs;
///
/// let entries = pairs!["a" => 1, "b" => 2];
/// assert_eq!(entries, vec![("a", 1), ("b", 2)]);
/// ```
#[macro_export]
macro_rules! pairs {
    () => {
        ::std::vec::Vec::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        ::std::vec![$(($key, $value)),+]
    };
}

// =============================================================================
// Bulk removal
// =============================================================================

/// Removes every key in `keys` from `map`, if present.
///
/// Removing an absent key is a silent no-op, so the operation is idempotent
/// and duplicate keys in the input are harmless. Returns the same map
/// reference to allow chaining.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use map_ops::pairs;
/// use map_ops::ops::{put_into_map, remove_keys};
///
/// let mut map = BTreeMap::new();
/// put_into_map(&mut map, pairs!["a" => 1, "b" => 2]);
/// remove_keys(&mut map, [&"b", &"missing"]);
/// assert_eq!(map.len(), 1);
/// ```
pub fn remove_keys<M, I>(map: &mut M, keys: I) -> &mut M
where
    M: Mapping,
    I: IntoIterator,
    I::Item: Borrow<M::Key>,
{
    for key in keys {
        map.remove(key.borrow());
    }
    map
}

// =============================================================================
// Conditional update
// =============================================================================

/// Overwrites the value under `key` only when the key is already present.
///
/// Returns the previous value when the overwrite happened, or `None` when
/// the key was absent and the map was left unmodified.
///
/// The membership check and the write are two sequential calls on the
/// underlying container. With a `&mut` borrow no other same-thread access
/// can interleave, but when a map is shared across threads behind a lock the
/// caller must hold that lock across the whole call; no atomicity is
/// provided here.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use map_ops::ops::put_if_present;
///
/// let mut map = BTreeMap::from([("a", 1)]);
/// assert_eq!(put_if_present(&mut map, "a", 2), Some(1));
/// assert_eq!(put_if_present(&mut map, "z", 9), None);
/// assert_eq!(map, BTreeMap::from([("a", 2)]));
/// ```
pub fn put_if_present<M>(map: &mut M, key: M::Key, value: M::Value) -> Option<M::Value>
where
    M: Mapping,
{
    if map.contains_key(&key) {
        map.put(key, value)
    } else {
        None
    }
}
