//! ChainSet: membership façade over the chained hash table engine
//!
//! Elements are stored as keys with a unit placeholder value. The set
//! algebra is composed from `insert`/`remove`/`contains` over the engine —
//! O(n) passes, no specialized fast paths.

use crate::error::Result;
use crate::hash_map::chain_table::{ChainTable, ChainTableIter};
use ahash::RandomState;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::ops::{BitAnd, BitOr, BitXor, Sub};

/// Hash set with chained collision resolution
///
/// A membership-only wrapper over [`ChainTable`](crate::ChainTable), with
/// in-place set algebra (`union_with`, `intersect_with`, …) and the usual
/// operator forms on references: `|` union, `&` intersection, `-`
/// difference, `^` symmetric difference.
///
/// # Examples
///
/// ```rust
/// use coffer::ChainSet;
///
/// let a = ChainSet::from_elements([1, 2, 3])?;
/// let b = ChainSet::from_elements([2, 3, 4])?;
/// assert_eq!((&a | &b).len(), 4);
/// assert_eq!((&a & &b).len(), 2);
/// assert_eq!((&a ^ &b).len(), 2);
/// # Ok::<(), coffer::CofferError>(())
/// ```
pub struct ChainSet<T, S = RandomState> {
    table: ChainTable<T, (), S>,
}

impl<T> ChainSet<T, RandomState>
where
    T: Hash + Eq,
{
    /// Create an empty set at the base capacity
    pub fn new() -> Self {
        Self { table: ChainTable::new() }
    }

    /// Create an empty set pre-sized for `capacity` buckets
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self { table: ChainTable::with_capacity(capacity)? })
    }

    /// Create a set holding every distinct element of `iter`
    pub fn from_elements<I>(iter: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = Self::new();
        set.union_with(iter)?;
        Ok(set)
    }
}

impl<T, S> ChainSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    /// Create an empty set using `hasher` for element hashing
    pub fn with_hasher(hasher: S) -> Self {
        Self { table: ChainTable::with_hasher(hasher) }
    }

    /// Create an empty set with at least `capacity` buckets
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Result<Self> {
        Ok(Self { table: ChainTable::with_capacity_and_hasher(capacity, hasher)? })
    }

    /// Number of stored elements
    #[inline]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Check if the set is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Current bucket count
    #[inline]
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Add `value` to the set
    ///
    /// Returns false (and changes nothing) when an equal element is present.
    pub fn insert(&mut self, value: T) -> Result<bool> {
        self.table.insert(value, ())
    }

    /// Remove `value` from the set
    ///
    /// Returns false when no equal element is present.
    pub fn remove(&mut self, value: &T) -> bool {
        self.table.remove(value).is_some()
    }

    /// Check whether an equal element is present; never fails
    pub fn contains(&self, value: &T) -> bool {
        self.table.contains_key(value)
    }

    /// Drop every element, keeping the bucket array capacity
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Iterate over the elements in bucket order
    pub fn iter(&self) -> ChainSetIter<'_, T> {
        ChainSetIter { inner: self.table.iter() }
    }

    /// Copy the elements into a `Vec` in bucket order
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    // --- set algebra ------------------------------------------------------

    /// Add every element of `iter` (set union, in place)
    pub fn union_with<I>(&mut self, iter: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        for item in iter {
            self.insert(item)?;
        }
        Ok(())
    }

    /// Remove every element of `iter` (set difference, in place)
    pub fn except_with<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for item in iter {
            self.remove(&item);
        }
    }

    /// Keep only elements that also occur in `iter` (intersection, in place)
    pub fn intersect_with<I>(&mut self, iter: I) -> Result<()>
    where
        T: Clone,
        I: IntoIterator<Item = T>,
    {
        let keep = ChainSet::<T, RandomState>::from_elements(iter)?;
        let drop: Vec<T> = self
            .iter()
            .filter(|value| !keep.contains(value))
            .cloned()
            .collect();
        for value in &drop {
            self.remove(value);
        }
        Ok(())
    }

    /// Toggle membership of every distinct element of `iter` (symmetric
    /// difference, in place)
    ///
    /// Duplicates in the sequence are collapsed first, so each distinct
    /// element flips exactly once.
    pub fn symmetric_except_with<I>(&mut self, iter: I) -> Result<()>
    where
        T: Clone,
        I: IntoIterator<Item = T>,
    {
        let mut seen = ChainSet::<T, RandomState>::new();
        let mut distinct = Vec::new();
        for item in iter {
            if seen.insert(item.clone())? {
                distinct.push(item);
            }
        }
        for item in distinct {
            if self.contains(&item) {
                self.remove(&item);
            } else {
                self.insert(item)?;
            }
        }
        Ok(())
    }

    /// Check whether every element of `self` occurs in `other`
    pub fn is_subset<S2: BuildHasher>(&self, other: &ChainSet<T, S2>) -> bool {
        self.iter().all(|value| other.contains(value))
    }

    /// Check whether every element of `other` occurs in `self`
    pub fn is_superset<S2: BuildHasher>(&self, other: &ChainSet<T, S2>) -> bool {
        other.iter().all(|value| self.contains(value))
    }

    /// Subset with strictly fewer elements
    pub fn is_proper_subset<S2: BuildHasher>(&self, other: &ChainSet<T, S2>) -> bool {
        self.len() < other.len() && self.is_subset(other)
    }

    /// Superset with strictly more elements
    pub fn is_proper_superset<S2: BuildHasher>(&self, other: &ChainSet<T, S2>) -> bool {
        self.len() > other.len() && self.is_superset(other)
    }

    /// Check whether the sets share at least one element
    pub fn overlaps<S2: BuildHasher>(&self, other: &ChainSet<T, S2>) -> bool {
        self.iter().any(|value| other.contains(value))
    }
}

impl<T> Default for ChainSet<T, RandomState>
where
    T: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S> fmt::Debug for ChainSet<T, S>
where
    T: Hash + Eq + fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, S> PartialEq for ChainSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<T, S> Eq for ChainSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
}

impl<'a, T, S> IntoIterator for &'a ChainSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    type Item = &'a T;
    type IntoIter = ChainSetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, S> BitOr for &ChainSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Default,
{
    type Output = ChainSet<T, S>;

    /// Union of two sets
    fn bitor(self, other: Self) -> ChainSet<T, S> {
        let mut result = ChainSet::with_hasher(S::default());
        result.union_with(self.iter().cloned()).expect("allocation failed");
        result.union_with(other.iter().cloned()).expect("allocation failed");
        result
    }
}

impl<T, S> BitAnd for &ChainSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Default,
{
    type Output = ChainSet<T, S>;

    /// Intersection of two sets
    fn bitand(self, other: Self) -> ChainSet<T, S> {
        let mut result = ChainSet::with_hasher(S::default());
        for value in self.iter().filter(|value| other.contains(value)) {
            result.insert(value.clone()).expect("allocation failed");
        }
        result
    }
}

impl<T, S> Sub for &ChainSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Default,
{
    type Output = ChainSet<T, S>;

    /// Difference: elements of `self` not in `other`
    fn sub(self, other: Self) -> ChainSet<T, S> {
        let mut result = ChainSet::with_hasher(S::default());
        for value in self.iter().filter(|value| !other.contains(value)) {
            result.insert(value.clone()).expect("allocation failed");
        }
        result
    }
}

impl<T, S> BitXor for &ChainSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Default,
{
    type Output = ChainSet<T, S>;

    /// Symmetric difference: elements in exactly one of the sets
    fn bitxor(self, other: Self) -> ChainSet<T, S> {
        let mut result = ChainSet::with_hasher(S::default());
        for value in self.iter().filter(|value| !other.contains(value)) {
            result.insert(value.clone()).expect("allocation failed");
        }
        for value in other.iter().filter(|value| !self.contains(value)) {
            result.insert(value.clone()).expect("allocation failed");
        }
        result
    }
}

/// Borrowing iterator over a [`ChainSet`] in bucket order
pub struct ChainSetIter<'a, T> {
    inner: ChainTableIter<'a, T, ()>,
}

impl<'a, T> Iterator for ChainSetIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(value, _)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for ChainSetIter<'_, T> {}
