use std::cmp::Ordering;

use crate::data_structures::ArrayList;

/// Jump search under the element type's intrinsic order.
pub fn jump_search<T: Ord>(list: &ArrayList<T>, target: &T) -> Option<usize> {
    jump_search_by(list, target, |a, b| a.cmp(b))
}

/// Block search over a list already sorted ascending under `cmp`. O(√n).
///
/// Advances in blocks of `floor(sqrt(n))`, stopping the coarse scan at the
/// first block whose last element is >= target, then scans linearly inside
/// that block. Returns None when the target exceeds every block boundary,
/// including when the list is empty. For duplicate keys the returned position
/// need not be the lowest comparator-equal one.
pub fn jump_search_by<T, F>(list: &ArrayList<T>, target: &T, mut cmp: F) -> Option<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = list.len();
    if n == 0 {
        return None;
    }
    let step = ((n as f64).sqrt().floor() as usize).max(1);

    let mut prev = 0;
    let mut end = step;
    while cmp(&list[end.min(n) - 1], target) == Ordering::Less {
        prev = end;
        end += step;
        if prev >= n {
            return None;
        }
    }

    for i in prev..end.min(n) {
        if cmp(&list[i], target) == Ordering::Equal {
            return Some(i);
        }
    }
    None
}
