use std::cmp::Ordering;

use crate::data_structures::ArrayList;

/// Quick sort under the element type's intrinsic order.
pub fn quick_sort<T: Ord>(list: &mut ArrayList<T>) {
    quick_sort_by(list, |a, b| a.cmp(b));
}

/// Quick sort under `cmp`. Not stable; O(n log n) average, O(n²) worst case,
/// O(log n) recursion depth on average.
pub fn quick_sort_by<T, F>(list: &mut ArrayList<T>, mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = list.len();
    if n > 1 {
        sort_range(list, 0, n - 1, &mut cmp);
    }
}

fn sort_range<T, F>(list: &mut ArrayList<T>, low: usize, high: usize, cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if low >= high {
        return;
    }
    let pivot = partition(list, low, high, cmp);
    if pivot > low {
        sort_range(list, low, pivot - 1, cmp);
    }
    if pivot < high {
        sort_range(list, pivot + 1, high, cmp);
    }
}

/// Lomuto partition with the last element of the range as pivot. On return
/// the pivot occupies its final sorted position.
fn partition<T, F>(list: &mut ArrayList<T>, low: usize, high: usize, cmp: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut i = low;
    for j in low..high {
        if cmp(&list[j], &list[high]) != Ordering::Greater {
            list.swap(i, j);
            i += 1;
        }
    }
    list.swap(i, high);
    i
}

#[cfg(test)]
mod tests {
    use super::{quick_sort, quick_sort_by};
    use crate::compare::{natural, reversed};
    use crate::data_structures::ArrayList;

    #[test]
    fn sorts_ascending_under_natural_order() {
        let mut list: ArrayList<i32> = [5, 2, 8, 1, 9, 3, 7, 4, 6].into_iter().collect();
        quick_sort(&mut list);
        assert_eq!(
            list.iter().copied().collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5, 6, 7, 8, 9]
        );
    }

    #[test]
    fn sorts_descending_under_reversed_comparator() {
        let mut list: ArrayList<i32> = [2, 3, 1].into_iter().collect();
        quick_sort_by(&mut list, reversed(natural()));
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn already_sorted_input_stays_sorted() {
        let mut list: ArrayList<i32> = (0..32).collect();
        quick_sort(&mut list);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), (0..32).collect::<Vec<_>>());
    }

    #[test]
    fn empty_and_singleton_are_no_ops() {
        let mut empty: ArrayList<i32> = ArrayList::new();
        quick_sort(&mut empty);
        assert!(empty.is_empty());

        let mut one: ArrayList<i32> = [42].into_iter().collect();
        quick_sort(&mut one);
        assert_eq!(one.get(0), Ok(&42));
    }

    #[test]
    fn all_equal_elements_terminate_without_out_of_range() {
        let mut list: ArrayList<i32> = [7; 16].into_iter().collect();
        quick_sort(&mut list);
        assert_eq!(list.len(), 16);
        assert!(list.iter().all(|&v| v == 7));
    }
}
