//! Benchmarks for the coffer containers against their std counterparts
//!
//! - SortedList vs BTreeSet (ordered insert + lookup)
//! - ChainMap vs std HashMap (insert + lookup)
//! - DynVec vs Vec (append)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::collections::{BTreeSet, HashMap as StdHashMap};

use coffer::{ChainMap, DynVec, SortedList};

const SIZES: &[usize] = &[100, 1_000, 10_000];

fn shuffled_keys(size: usize) -> Vec<u64> {
    // Fixed multiplicative shuffle keeps runs comparable without an RNG dep.
    (0..size as u64).map(|i| i.wrapping_mul(0x9E37_79B9_7F4A_7C15)).collect()
}

fn bench_ordered_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordered_insert");
    for &size in SIZES {
        let keys = shuffled_keys(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("SortedList", size), &keys, |b, keys| {
            b.iter(|| {
                let mut list = SortedList::new();
                for &key in keys {
                    list.insert(key);
                }
                black_box(list.len())
            })
        });

        group.bench_with_input(BenchmarkId::new("BTreeSet", size), &keys, |b, keys| {
            b.iter(|| {
                let mut set = BTreeSet::new();
                for &key in keys {
                    set.insert(key);
                }
                black_box(set.len())
            })
        });
    }
    group.finish();
}

fn bench_ordered_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordered_lookup");
    for &size in SIZES {
        let keys = shuffled_keys(size);
        let list: SortedList<u64> = SortedList::from_elements(keys.iter().copied());
        let set: BTreeSet<u64> = keys.iter().copied().collect();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("SortedList", size), &keys, |b, keys| {
            b.iter(|| {
                let mut hits = 0usize;
                for key in keys {
                    hits += usize::from(list.contains(black_box(key)));
                }
                black_box(hits)
            })
        });

        group.bench_with_input(BenchmarkId::new("BTreeSet", size), &keys, |b, keys| {
            b.iter(|| {
                let mut hits = 0usize;
                for key in keys {
                    hits += usize::from(set.contains(black_box(key)));
                }
                black_box(hits)
            })
        });
    }
    group.finish();
}

fn bench_map_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_insert");
    for &size in SIZES {
        let keys = shuffled_keys(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("ChainMap", size), &keys, |b, keys| {
            b.iter(|| {
                let mut map = ChainMap::new();
                for &key in keys {
                    map.insert(key, key).unwrap();
                }
                black_box(map.len())
            })
        });

        group.bench_with_input(BenchmarkId::new("std::HashMap", size), &keys, |b, keys| {
            b.iter(|| {
                let mut map = StdHashMap::new();
                for &key in keys {
                    map.insert(key, key);
                }
                black_box(map.len())
            })
        });
    }
    group.finish();
}

fn bench_map_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_lookup");
    for &size in SIZES {
        let keys = shuffled_keys(size);
        let mut chain_map = ChainMap::new();
        let mut std_map = StdHashMap::new();
        for &key in &keys {
            chain_map.insert(key, key).unwrap();
            std_map.insert(key, key);
        }
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("ChainMap", size), &keys, |b, keys| {
            b.iter(|| {
                let mut sum = 0u64;
                for key in keys {
                    if let Some(&value) = chain_map.get(black_box(key)) {
                        sum = sum.wrapping_add(value);
                    }
                }
                black_box(sum)
            })
        });

        group.bench_with_input(BenchmarkId::new("std::HashMap", size), &keys, |b, keys| {
            b.iter(|| {
                let mut sum = 0u64;
                for key in keys {
                    if let Some(&value) = std_map.get(black_box(key)) {
                        sum = sum.wrapping_add(value);
                    }
                }
                black_box(sum)
            })
        });
    }
    group.finish();
}

fn bench_vec_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("vec_push");
    for &size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("DynVec", size), &size, |b, &size| {
            b.iter(|| {
                let mut vec = DynVec::new();
                for i in 0..size {
                    vec.push(black_box(i)).unwrap();
                }
                black_box(vec.len())
            })
        });

        group.bench_with_input(BenchmarkId::new("std::Vec", size), &size, |b, &size| {
            b.iter(|| {
                let mut vec = Vec::new();
                for i in 0..size {
                    vec.push(black_box(i));
                }
                black_box(vec.len())
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_ordered_insert,
    bench_ordered_lookup,
    bench_map_insert,
    bench_map_lookup,
    bench_vec_push
);
criterion_main!(benches);
