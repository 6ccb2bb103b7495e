//! Integration tests for the chained hash containers

use coffer::{ChainMap, ChainSet, ChainTable};
use rand::prelude::*;
use std::collections::HashMap as StdHashMap;

#[test]
fn capacity_doubles_during_seven_key_fill() {
    let mut map = ChainMap::new();
    assert_eq!(map.capacity(), 8);

    for key in 0..6 {
        map.insert(key, key).unwrap();
    }
    // Six entries sit exactly at the 0.75 load of eight buckets.
    assert_eq!(map.capacity(), 8);

    map.insert(6, 6).unwrap();
    assert_eq!(map.capacity(), 16);
    assert_eq!(map.len(), 7);
}

#[test]
fn load_invariant_and_capacity_form() {
    let mut map = ChainMap::new();
    for key in 0..500u32 {
        map.insert(key, key).unwrap();
        assert!(4 * map.len() <= 3 * map.capacity());
        assert_eq!(map.capacity() % 8, 0);
        assert!((map.capacity() / 8).is_power_of_two());
    }
}

#[test]
fn upsert_is_indexer_assignment() {
    let mut map = ChainMap::new();
    map.upsert("key", 1).unwrap();
    map.upsert("key", 2).unwrap();
    assert_eq!(map.get(&"key"), Some(&2));
    assert_eq!(map.len(), 1);
}

#[test]
fn key_uniqueness_over_mixed_operations() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut map = ChainMap::new();
    let mut model: StdHashMap<u8, u32> = StdHashMap::new();

    for _ in 0..5_000 {
        let key = rng.gen::<u8>();
        match rng.gen_range(0..4) {
            0 => {
                let value = rng.gen::<u32>();
                let inserted = map.insert(key, value).unwrap();
                assert_eq!(inserted, !model.contains_key(&key));
                model.entry(key).or_insert(value);
            }
            1 => {
                let value = rng.gen::<u32>();
                map.upsert(key, value).unwrap();
                model.insert(key, value);
            }
            2 => {
                assert_eq!(map.remove(&key), model.remove(&key));
            }
            _ => {
                assert_eq!(map.get(&key), model.get(&key));
            }
        }
        assert_eq!(map.len(), model.len());
    }

    // Iteration yields each key exactly once.
    let mut keys: Vec<u8> = map.keys().copied().collect();
    keys.sort_unstable();
    let mut expected: Vec<u8> = model.keys().copied().collect();
    expected.sort_unstable();
    assert_eq!(keys, expected);
}

#[test]
fn rehash_preserves_entries() {
    let mut map = ChainMap::new();
    for key in 0..200 {
        map.insert(format!("key-{key}"), key).unwrap();
    }
    assert!(map.capacity() >= 256);
    for key in 0..200 {
        assert_eq!(map.get(&format!("key-{key}")), Some(&key));
    }
    assert_eq!(map.iter().count(), 200);
}

#[test]
fn hard_and_soft_lookups() {
    let mut map: ChainMap<&str, i32> = ChainMap::new();
    map.insert("present", 1).unwrap();

    assert!(map.contains_key(&"present"));
    assert!(!map.contains_key(&"absent"));
    assert_eq!(map.get(&"absent"), None);
    assert!(map.try_get(&"absent").is_err());
    assert_eq!(map.get_or_default(&"absent"), 0);
    assert_eq!(map.get_or_default(&"present"), 1);
}

#[test]
fn engine_shared_by_both_facades() {
    // The raw engine drives the same chain behavior the facades see.
    let mut table: ChainTable<i32, &str> = ChainTable::new();
    assert!(table.insert(1, "one").unwrap());
    assert!(!table.insert(1, "uno").unwrap());
    assert!(table.set(&1, "uno"));
    assert_eq!(table.get(&1), Some(&"uno"));
    assert_eq!(table.remove(&1), Some("uno"));
    assert!(table.is_empty());
}

#[test]
fn set_algebra_example() {
    let a = ChainSet::from_elements([1, 2, 3]).unwrap();
    let b = ChainSet::from_elements([2, 3, 4]).unwrap();

    let mut union: Vec<i32> = (&a | &b).to_vec();
    union.sort_unstable();
    assert_eq!(union, vec![1, 2, 3, 4]);

    let mut intersection: Vec<i32> = (&a & &b).to_vec();
    intersection.sort_unstable();
    assert_eq!(intersection, vec![2, 3]);

    let mut symmetric: Vec<i32> = (&a ^ &b).to_vec();
    symmetric.sort_unstable();
    assert_eq!(symmetric, vec![1, 4]);

    let mut difference: Vec<i32> = (&a - &b).to_vec();
    difference.sort_unstable();
    assert_eq!(difference, vec![1]);
}

#[test]
fn set_relations() {
    let small = ChainSet::from_elements([1, 2]).unwrap();
    let big = ChainSet::from_elements([0, 1, 2, 3]).unwrap();
    let disjoint = ChainSet::from_elements([10, 11]).unwrap();

    assert!(small.is_subset(&big));
    assert!(big.is_superset(&small));
    assert!(small.is_proper_subset(&big));
    assert!(big.is_proper_superset(&small));
    assert!(small.overlaps(&big));
    assert!(!small.overlaps(&disjoint));
    assert!(!small.is_subset(&disjoint));
}

#[test]
fn map_and_set_iteration_matches_len() {
    let map = ChainMap::from_entries((0..50).map(|k| (k, k * 3))).unwrap();
    assert_eq!(map.iter().len(), 50);
    assert_eq!(map.values().count(), 50);

    let set = ChainSet::from_elements(0..50).unwrap();
    assert_eq!(set.iter().len(), 50);

    // Restartable iteration.
    assert_eq!(set.iter().count(), set.iter().count());
}

#[test]
fn clear_keeps_capacity_and_reuses() {
    let mut set = ChainSet::from_elements(0..100).unwrap();
    let capacity = set.capacity();
    assert!(capacity > 8);

    set.clear();
    assert!(set.is_empty());
    assert_eq!(set.capacity(), capacity);

    set.insert(1).unwrap();
    assert!(set.contains(&1));
    assert_eq!(set.len(), 1);
}
