use std::cmp::Ordering;

use crate::data_structures::ArrayList;

/// Insertion sort under the element type's intrinsic order.
pub fn insertion_sort<T: Ord>(list: &mut ArrayList<T>) {
    insertion_sort_by(list, |a, b| a.cmp(b));
}

/// Insertion sort under `cmp`. Stable; O(n) on already-sorted input, O(n²)
/// otherwise; O(1) extra space.
pub fn insertion_sort_by<T, F>(list: &mut ArrayList<T>, mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = list.len();
    for i in 1..n {
        // Shift the key leftward past strictly greater elements.
        let mut j = i;
        while j > 0 && cmp(&list[j - 1], &list[j]) == Ordering::Greater {
            list.swap(j - 1, j);
            j -= 1;
        }
    }
}
