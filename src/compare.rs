//! Comparator composition and container-level helpers.
//!
//! Comparators are plain callables `FnMut(&T, &T) -> Ordering`; the sorting
//! and searching routines take them by value, so no dynamic dispatch is
//! involved.

use std::cmp::Ordering;

use crate::data_structures::ArrayList;
use crate::error::OutOfBounds;

/// Comparator delegating to the element type's intrinsic total order.
pub fn natural<T: Ord>() -> impl FnMut(&T, &T) -> Ordering {
    |a, b| a.cmp(b)
}

/// Reverse a comparator: `reversed(c)(a, b) == c(b, a)`.
pub fn reversed<T, F>(mut cmp: F) -> impl FnMut(&T, &T) -> Ordering
where
    F: FnMut(&T, &T) -> Ordering,
{
    move |a, b| cmp(b, a)
}

/// Validated swap: both slots are updated, or on an out-of-range index the
/// container is left unmutated.
pub fn swap<T>(list: &mut ArrayList<T>, i: usize, j: usize) -> Result<(), OutOfBounds> {
    let len = list.len();
    if i >= len {
        return Err(OutOfBounds { index: i, len });
    }
    if j >= len {
        return Err(OutOfBounds { index: j, len });
    }
    list.swap(i, j);
    Ok(())
}

/// Independent copy of the container. Subsequent mutation of either list
/// leaves the other untouched; element-level sharing is up to `T::clone`.
pub fn copy_of<T: Clone>(list: &ArrayList<T>) -> ArrayList<T> {
    let mut copy = ArrayList::with_capacity(list.len());
    for element in list {
        copy.append(element.clone());
    }
    copy
}
