//! Quicksort over the [`Positional`] seam
//!
//! Hole-filling partition: the pivot value is lifted out of the first slot,
//! and the right and left scans alternately move elements into the current
//! hole until the scans meet; the pivot drops into the final hole. Recursion
//! then handles the two halves.

use crate::algorithms::Positional;
use crate::containers::{Compare, NaturalOrder};
use crate::error::{check_bounds, Result};
use std::cmp::Ordering;

/// Sort the whole list ascending by `T`'s natural ordering
pub fn sort<L, T>(list: &mut L) -> Result<()>
where
    L: Positional<T>,
    T: Ord + Clone,
{
    sort_by(list, NaturalOrder, false)
}

/// Sort the whole list by `comparator`, descending when `reverse` is set
pub fn sort_by<L, T, C>(list: &mut L, comparator: C, reverse: bool) -> Result<()>
where
    L: Positional<T>,
    T: Clone,
    C: Compare<T>,
{
    if list.size() < 2 {
        return Ok(());
    }
    let end = list.size() - 1;
    quicksort(list, 0, end, &comparator, reverse)
}

/// Sort the inclusive range `[begin, end]` by `comparator`
///
/// Both bounds must be valid indexes; a range with `begin >= end` is already
/// sorted and left untouched.
pub fn sort_range_by<L, T, C>(
    list: &mut L,
    begin: usize,
    end: usize,
    comparator: C,
    reverse: bool,
) -> Result<()>
where
    L: Positional<T>,
    T: Clone,
    C: Compare<T>,
{
    check_bounds(begin, list.size())?;
    check_bounds(end, list.size())?;
    if begin >= end {
        return Ok(());
    }
    quicksort(list, begin, end, &comparator, reverse)
}

fn quicksort<L, T, C>(list: &mut L, begin: usize, end: usize, comparator: &C, reverse: bool) -> Result<()>
where
    L: Positional<T>,
    T: Clone,
    C: Compare<T>,
{
    if begin >= end {
        return Ok(());
    }

    let pivot = list.read(begin)?;
    let mut hole = begin;
    let mut i = begin + 1;
    let mut j = end;

    let order = |a: &T, b: &T| {
        let ord = comparator.compare(a, b);
        if reverse { ord.reverse() } else { ord }
    };

    while i <= j {
        // Scan from the right for an element below the pivot.
        while i <= j {
            if order(&pivot, &list.read(j)?) == Ordering::Greater {
                list.write(hole, list.read(j)?)?;
                hole = j;
                j -= 1;
                break;
            }
            j -= 1;
        }
        // Scan from the left for an element above the pivot.
        while i <= j {
            if order(&pivot, &list.read(i)?) == Ordering::Less {
                list.write(hole, list.read(i)?)?;
                hole = i;
                i += 1;
                break;
            }
            i += 1;
        }
    }

    list.write(hole, pivot)?;

    if hole > begin {
        quicksort(list, begin, hole - 1, comparator, reverse)?;
    }
    if hole < end {
        quicksort(list, hole + 1, end, comparator, reverse)?;
    }
    Ok(())
}
