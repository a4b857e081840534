use std::cmp::Ordering;

use crate::data_structures::ArrayList;

/// Merge sort under the element type's intrinsic order.
pub fn merge_sort<T: Ord + Clone>(list: &mut ArrayList<T>) {
    merge_sort_by(list, |a, b| a.cmp(b));
}

/// Merge sort under `cmp`. Stable; O(n log n) in all cases with one shared
/// scratch buffer of the input size.
pub fn merge_sort_by<T, F>(list: &mut ArrayList<T>, mut cmp: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let n = list.len();
    if n < 2 {
        return;
    }
    let mut scratch: Vec<T> = list.iter().cloned().collect();
    sort_range(list, &mut scratch, 0, n - 1, &mut cmp);
}

fn sort_range<T, F>(
    list: &mut ArrayList<T>,
    scratch: &mut [T],
    left: usize,
    right: usize,
    cmp: &mut F,
) where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if left >= right {
        return;
    }
    let middle = left + (right - left) / 2;
    sort_range(list, scratch, left, middle, cmp);
    sort_range(list, scratch, middle + 1, right, cmp);
    merge(list, scratch, left, middle, right, cmp);
}

/// Merge the sorted runs `[left, middle]` and `[middle+1, right]`. The full
/// range is copied into scratch first, then interleaved back; both remainder
/// runs are copied verbatim.
fn merge<T, F>(
    list: &mut ArrayList<T>,
    scratch: &mut [T],
    left: usize,
    middle: usize,
    right: usize,
    cmp: &mut F,
) where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    for i in left..=right {
        scratch[i] = list[i].clone();
    }

    let mut i = left;
    let mut j = middle + 1;
    let mut k = left;
    while i <= middle && j <= right {
        // <= keeps the left run's element first, which is what makes the
        // sort stable.
        if cmp(&scratch[i], &scratch[j]) != Ordering::Greater {
            list[k] = scratch[i].clone();
            i += 1;
        } else {
            list[k] = scratch[j].clone();
            j += 1;
        }
        k += 1;
    }

    while i <= middle {
        list[k] = scratch[i].clone();
        i += 1;
        k += 1;
    }
    while j <= right {
        list[k] = scratch[j].clone();
        j += 1;
        k += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::{merge_sort, merge_sort_by};
    use crate::compare::{natural, reversed};
    use crate::data_structures::ArrayList;

    #[test]
    fn sorts_ascending_under_natural_order() {
        let mut list: ArrayList<i32> = [5, 2, 8, 1, 9, 3, 7, 4, 6].into_iter().collect();
        merge_sort(&mut list);
        assert_eq!(
            list.iter().copied().collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5, 6, 7, 8, 9]
        );
    }

    #[test]
    fn sorts_descending_under_reversed_comparator() {
        let mut list: ArrayList<i32> = [1, 2, 3].into_iter().collect();
        merge_sort_by(&mut list, reversed(natural()));
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn right_remainder_run_survives_the_merge() {
        // Left run exhausts first, leaving [8, 9] as the right remainder.
        let mut list: ArrayList<i32> = [1, 2, 8, 9].into_iter().collect();
        merge_sort(&mut list);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 8, 9]);
    }

    #[test]
    fn empty_and_singleton_are_no_ops() {
        let mut empty: ArrayList<i32> = ArrayList::new();
        merge_sort(&mut empty);
        assert!(empty.is_empty());

        let mut one: ArrayList<i32> = [42].into_iter().collect();
        merge_sort(&mut one);
        assert_eq!(one.get(0), Ok(&42));
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let mut list: ArrayList<(i32, usize)> =
            [(2, 0), (1, 1), (2, 2), (1, 3), (2, 4)].into_iter().collect();
        merge_sort_by(&mut list, |a, b| a.0.cmp(&b.0));
        assert_eq!(
            list.iter().copied().collect::<Vec<_>>(),
            vec![(1, 1), (1, 3), (2, 0), (2, 2), (2, 4)]
        );
    }
}
