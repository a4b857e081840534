use std::cmp::Ordering;

use crate::data_structures::ArrayList;

/// Selection sort under the element type's intrinsic order.
pub fn selection_sort<T: Ord>(list: &mut ArrayList<T>) {
    selection_sort_by(list, |a, b| a.cmp(b));
}

/// Selection sort under `cmp`. Not stable; O(n²) in all cases, O(1) extra
/// space.
pub fn selection_sort_by<T, F>(list: &mut ArrayList<T>, mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = list.len();
    if n < 2 {
        return;
    }
    for i in 0..n - 1 {
        // Minimum of the unsorted suffix [i, n).
        let mut min_index = i;
        for j in i + 1..n {
            if cmp(&list[j], &list[min_index]) == Ordering::Less {
                min_index = j;
            }
        }
        if min_index != i {
            list.swap(i, min_index);
        }
    }
}
