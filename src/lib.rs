//! # Coffer: In-Memory Container Library
//!
//! This crate provides a small family of general-purpose containers built
//! around two engines: a red-black tree and a chained-bucket hash table.
//!
//! ## Containers
//!
//! - **`SortedList<T, C>`** - Ordered container backed by a red-black tree:
//!   O(log n) insert/remove/contains, ascending iteration, positional access
//! - **`ChainMap<K, V, S>`** / **`ChainSet<T, S>`** - Hash map and set over
//!   one chained-bucket engine with proactive power-of-two growth
//! - **`DynVec<T>`** - Growable array using realloc for in-place expansion
//! - **`ChainList<T>`** - Doubly-linked list with a lazy positional cache
//!
//! The hash engine's bucket array is a `DynVec` and its collision chains are
//! `ChainList`s, so the primitives carry the engine rather than sitting
//! beside it.
//!
//! ## Quick Start
//!
//! ```rust
//! use coffer::{ChainMap, ChainSet, DynVec, SortedList};
//!
//! // Ordered container: always iterates ascending.
//! let mut sorted = SortedList::new();
//! sorted.extend([3, 1, 2]);
//! assert_eq!(sorted.to_vec(), vec![1, 2, 3]);
//!
//! // Hash map: add-only insert, upsert for indexer-style assignment.
//! let mut map = ChainMap::new();
//! map.insert("answer", 42)?;
//! assert_eq!(map.get(&"answer"), Some(&42));
//!
//! // Set algebra via operators.
//! let a = ChainSet::from_elements([1, 2, 3])?;
//! let b = ChainSet::from_elements([2, 3, 4])?;
//! assert_eq!((&a & &b).len(), 2);
//!
//! // Growable array with deque-style ends.
//! let mut vec = DynVec::new();
//! vec.push(1)?;
//! vec.push_front(0)?;
//! assert_eq!(vec.as_slice(), &[0, 1]);
//! # Ok::<(), coffer::CofferError>(())
//! ```
//!
//! ## Design Notes
//!
//! All containers are single-threaded: no locking, no internal
//! synchronization, exclusive access is the caller's responsibility.
//! Comparators and hashers are injected at construction time — `SortedList`
//! takes a [`Compare`] implementation (defaulting to `T: Ord`), the hash
//! containers take a `BuildHasher` (defaulting to `ahash::RandomState`).

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod algorithms;
pub mod containers;
pub mod error;
pub mod hash_map;

pub use containers::{ChainList, ChainListIter, Compare, DynVec, NaturalOrder, SortedList, SortedListIter};
pub use error::{CofferError, Result};
pub use hash_map::{ChainMap, ChainSet, ChainSetIter, ChainTable, ChainTableIter};
