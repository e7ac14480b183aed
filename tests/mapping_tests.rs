//! Unit tests for the `Mapping` trait impls on std containers.

use std::collections::{BTreeMap, HashMap};

use map_ops::prelude::*;
use rstest::rstest;

/// Sums all values through the trait surface only.
fn total<M>(map: &M) -> i64
where
    M: Mapping<Value = i64>,
{
    map.entries().map(|(_, value)| *value).sum()
}

// =============================================================================
// HashMap impl
// =============================================================================

#[rstest]
fn test_hashmap_put_returns_displaced_value() {
    let mut map: HashMap<&str, i64> = HashMap::new();

    assert_eq!(Mapping::put(&mut map, "a", 1), None);
    assert_eq!(Mapping::put(&mut map, "a", 2), Some(1));
}

#[rstest]
fn test_hashmap_contains_get_and_remove() {
    let mut map: HashMap<&str, i64> = HashMap::from([("a", 1)]);

    assert!(Mapping::contains_key(&map, &"a"));
    assert_eq!(Mapping::get(&map, &"a"), Some(&1));
    assert_eq!(Mapping::remove(&mut map, &"a"), Some(1));
    assert_eq!(Mapping::remove(&mut map, &"a"), None);
    assert!(!Mapping::contains_key(&map, &"a"));
}

#[rstest]
fn test_hashmap_len_and_is_empty() {
    let mut map: HashMap<&str, i64> = HashMap::new();
    assert!(Mapping::is_empty(&map));

    Mapping::put(&mut map, "a", 1);
    Mapping::put(&mut map, "b", 2);
    assert_eq!(Mapping::len(&map), 2);
    assert!(!Mapping::is_empty(&map));
}

#[rstest]
fn test_hashmap_entries_visit_every_entry_once() {
    let map: HashMap<&str, i64> = HashMap::from([("a", 1), ("b", 2), ("c", 4)]);

    assert_eq!(map.entries().count(), 3);
    assert_eq!(total(&map), 7);
}

// =============================================================================
// BTreeMap impl
// =============================================================================

#[rstest]
fn test_btreemap_entries_iterate_in_key_order() {
    let map: BTreeMap<&str, i64> = BTreeMap::from([("c", 3), ("a", 1), ("b", 2)]);
    let keys: Vec<&str> = map.entries().map(|(key, _)| *key).collect();

    assert_eq!(keys, vec!["a", "b", "c"]);
}

#[rstest]
fn test_btreemap_put_and_remove_roundtrip() {
    let mut map: BTreeMap<String, i64> = BTreeMap::new();

    assert_eq!(Mapping::put(&mut map, "k".to_string(), 5), None);
    assert_eq!(Mapping::get(&map, &"k".to_string()), Some(&5));
    assert_eq!(Mapping::remove(&mut map, &"k".to_string()), Some(5));
    assert!(Mapping::is_empty(&map));
}

#[rstest]
fn test_generic_code_accepts_both_containers() {
    let hash: HashMap<&str, i64> = HashMap::from([("a", 1), ("b", 2)]);
    let tree: BTreeMap<&str, i64> = BTreeMap::from([("a", 1), ("b", 2)]);

    assert_eq!(total(&hash), total(&tree));
}
