use std::cmp::Ordering;

use crate::data_structures::ArrayList;

/// Binary search under the element type's intrinsic order.
pub fn binary_search<T: Ord>(list: &ArrayList<T>, target: &T) -> Option<usize> {
    binary_search_by(list, target, |a, b| a.cmp(b))
}

/// Half-interval search over a list already sorted ascending under `cmp`.
/// O(log n). Returns the first comparator-equal index encountered, which for
/// duplicate keys need not be the lowest one. The result is meaningless (but
/// not an error) if the list is not sorted.
pub fn binary_search_by<T, F>(list: &ArrayList<T>, target: &T, mut cmp: F) -> Option<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut low = 0;
    let mut high = list.len();
    while low < high {
        let mid = low + (high - low) / 2;
        match cmp(&list[mid], target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }
    None
}
