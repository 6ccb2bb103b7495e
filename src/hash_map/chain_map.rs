//! ChainMap: key/value façade over the chained hash table engine

use crate::error::{CofferError, Result};
use crate::hash_map::chain_table::{ChainTable, ChainTableIter};
use ahash::RandomState;
use std::fmt;
use std::hash::{BuildHasher, Hash};

/// Hash map with chained collision resolution
///
/// A thin key/value wrapper over [`ChainTable`](crate::ChainTable). `insert`
/// is add-only (an existing key is left untouched), `set` is replace-only,
/// and [`upsert`](ChainMap::upsert) combines the two — the classic indexer
/// assignment.
///
/// # Examples
///
/// ```rust
/// use coffer::ChainMap;
///
/// let mut map = ChainMap::new();
/// map.insert("one", 1)?;
/// map.upsert("two", 2)?;
/// map.upsert("two", 22)?;
/// assert_eq!(map.get(&"two"), Some(&22));
/// assert_eq!(map.len(), 2);
/// # Ok::<(), coffer::CofferError>(())
/// ```
pub struct ChainMap<K, V, S = RandomState> {
    table: ChainTable<K, V, S>,
}

impl<K, V> ChainMap<K, V, RandomState>
where
    K: Hash + Eq,
{
    /// Create an empty map at the base capacity
    pub fn new() -> Self {
        Self { table: ChainTable::new() }
    }

    /// Create an empty map pre-sized for `capacity` buckets
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self { table: ChainTable::with_capacity(capacity)? })
    }

    /// Create a map holding every `(key, value)` pair of `iter`
    ///
    /// Later duplicates of a key are ignored, matching `insert`.
    pub fn from_entries<I>(iter: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = Self::new();
        map.insert_all(iter)?;
        Ok(map)
    }
}

impl<K, V, S> ChainMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Create an empty map using `hasher` for key hashing
    pub fn with_hasher(hasher: S) -> Self {
        Self { table: ChainTable::with_hasher(hasher) }
    }

    /// Create an empty map with at least `capacity` buckets
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Result<Self> {
        Ok(Self { table: ChainTable::with_capacity_and_hasher(capacity, hasher)? })
    }

    /// Number of stored pairs
    #[inline]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Check if the map is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Current bucket count
    #[inline]
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Store `value` under `key` unless the key already exists
    ///
    /// Returns false (and changes nothing) when the key is present.
    pub fn insert(&mut self, key: K, value: V) -> Result<bool> {
        self.table.insert(key, value)
    }

    /// Insert every pair of `iter`, skipping keys that already exist
    pub fn insert_all<I>(&mut self, iter: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in iter {
            self.table.insert(key, value)?;
        }
        Ok(())
    }

    /// Replace the value under an existing `key`
    ///
    /// Returns false (and changes nothing) when the key is absent.
    pub fn set(&mut self, key: &K, value: V) -> bool {
        self.table.set(key, value)
    }

    /// Store `value` under `key`, replacing any existing value
    ///
    /// The replace-or-add of an indexer assignment: `set`, falling back to
    /// `insert` when the key is new.
    pub fn upsert(&mut self, key: K, value: V) -> Result<()> {
        if self.table.contains_key(&key) {
            self.table.set(&key, value);
        } else {
            self.table.insert(key, value)?;
        }
        Ok(())
    }

    /// Reference to the value stored under `key`; never fails
    pub fn get(&self, key: &K) -> Option<&V> {
        self.table.get(key)
    }

    /// Mutable reference to the value stored under `key`
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.table.get_mut(key)
    }

    /// Reference to the value stored under `key`, failing when absent
    ///
    /// The hard counterpart of [`get`](ChainMap::get): an absent key is a
    /// `KeyNotFound` error.
    pub fn try_get(&self, key: &K) -> Result<&V> {
        self.table.get(key).ok_or_else(CofferError::key_not_found)
    }

    /// Value stored under `key`, or `V::default()` when absent
    pub fn get_or_default(&self, key: &K) -> V
    where
        V: Default + Clone,
    {
        self.table.get(key).cloned().unwrap_or_default()
    }

    /// Check whether `key` is present; never fails
    pub fn contains_key(&self, key: &K) -> bool {
        self.table.contains_key(key)
    }

    /// Remove the pair under `key`, returning its value
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.table.remove(key)
    }

    /// Drop every pair, keeping the bucket array capacity
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Iterate over `(key, value)` pairs in bucket order
    pub fn iter(&self) -> ChainTableIter<'_, K, V> {
        self.table.iter()
    }

    /// Iterate over the keys in bucket order
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.table.iter() }
    }

    /// Iterate over the values in bucket order
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.table.iter() }
    }
}

impl<K, V> Default for ChainMap<K, V, RandomState>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> fmt::Debug for ChainMap<K, V, S>
where
    K: Hash + Eq + fmt::Debug,
    V: fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, S> PartialEq for ChainMap<K, V, S>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K, V, S> Eq for ChainMap<K, V, S>
where
    K: Hash + Eq,
    V: Eq,
    S: BuildHasher,
{
}

impl<'a, K, V, S> IntoIterator for &'a ChainMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Item = (&'a K, &'a V);
    type IntoIter = ChainTableIter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a map's keys
pub struct Keys<'a, K, V> {
    inner: ChainTableIter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

/// Borrowing iterator over a map's values
pub struct Values<'a, K, V> {
    inner: ChainTableIter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}
