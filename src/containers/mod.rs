//! Container types
//!
//! This module provides the library's general-purpose containers:
//!
//! - **`DynVec<T>`** - Growable array using realloc for in-place expansion
//! - **`ChainList<T>`** - Doubly-linked list with a lazy positional cache
//! - **`SortedList<T, C>`** - Ordered container backed by a red-black tree

mod chain_list;
mod dyn_vec;
mod rb_node;
mod sorted_list;

pub use chain_list::{ChainList, ChainListIter};
pub use dyn_vec::DynVec;
pub use sorted_list::{Compare, NaturalOrder, SortedList, SortedListIter};

use crate::error::{check_bounds, CofferError, Result};

/// Walk the inclusive index range `[begin, end]` by `step`, collecting the
/// element produced by `fetch` at each visited index.
///
/// Shared by every positionally indexable container. `step == 0` yields the
/// single element at `begin`; a positive step requires `begin <= end`; a
/// negative step requires `begin >= end`.
pub(crate) fn slice_by_step<T>(
    len: usize,
    begin: usize,
    end: usize,
    step: isize,
    mut fetch: impl FnMut(usize) -> T,
) -> Result<Vec<T>> {
    check_bounds(begin, len)?;
    check_bounds(end, len)?;

    if step == 0 {
        return Ok(vec![fetch(begin)]);
    }

    let mut out = Vec::new();
    if step > 0 {
        if begin > end {
            return Err(CofferError::invalid_operation(
                "a positive step requires begin <= end",
            ));
        }
        let mut i = begin;
        while i <= end {
            out.push(fetch(i));
            match i.checked_add(step as usize) {
                Some(next) => i = next,
                None => break,
            }
        }
    } else {
        if begin < end {
            return Err(CofferError::invalid_operation(
                "a negative step requires begin >= end",
            ));
        }
        let stride = step.unsigned_abs();
        let mut i = begin;
        loop {
            out.push(fetch(i));
            if i < end + stride {
                break;
            }
            i -= stride;
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_by_step_forward() {
        let data = [10, 20, 30, 40, 50];
        let out = slice_by_step(5, 0, 4, 2, |i| data[i]).unwrap();
        assert_eq!(out, vec![10, 30, 50]);

        let out = slice_by_step(5, 1, 3, 1, |i| data[i]).unwrap();
        assert_eq!(out, vec![20, 30, 40]);
    }

    #[test]
    fn test_slice_by_step_backward() {
        let data = [10, 20, 30, 40, 50];
        let out = slice_by_step(5, 4, 0, -2, |i| data[i]).unwrap();
        assert_eq!(out, vec![50, 30, 10]);

        let out = slice_by_step(5, 2, 2, -1, |i| data[i]).unwrap();
        assert_eq!(out, vec![30]);
    }

    #[test]
    fn test_slice_by_step_zero() {
        let data = [10, 20, 30];
        let out = slice_by_step(3, 1, 2, 0, |i| data[i]).unwrap();
        assert_eq!(out, vec![20]);
    }

    #[test]
    fn test_slice_by_step_errors() {
        let data = [10, 20, 30];
        assert!(slice_by_step(3, 3, 0, 1, |i| data[i]).is_err()); // begin out of range
        assert!(slice_by_step(3, 0, 3, 1, |i| data[i]).is_err()); // end out of range
        assert!(slice_by_step(3, 2, 0, 1, |i| data[i]).is_err()); // step/pair mismatch
        assert!(slice_by_step(3, 0, 2, -1, |i| data[i]).is_err()); // step/pair mismatch
        assert!(slice_by_step(0, 0, 0, 1, |i| data[i]).is_err()); // empty container
    }
}
