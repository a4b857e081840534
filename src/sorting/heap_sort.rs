use std::cmp::Ordering;

use crate::data_structures::ArrayList;

/// Heap sort under the element type's intrinsic order.
pub fn heap_sort<T: Ord>(list: &mut ArrayList<T>) {
    heap_sort_by(list, |a, b| a.cmp(b));
}

/// Heap sort under `cmp`. Not stable; O(n log n) in all cases, O(1) extra
/// space. The list is treated as an implicit binary tree with children at
/// `2i+1` and `2i+2`.
pub fn heap_sort_by<T, F>(list: &mut ArrayList<T>, mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = list.len();

    // Build a max-heap in place.
    for i in (0..n / 2).rev() {
        sift_down(list, n, i, &mut cmp);
    }

    // Swap the root to the tail and re-heapify the shrunken prefix.
    for end in (1..n).rev() {
        list.swap(0, end);
        sift_down(list, end, 0, &mut cmp);
    }
}

fn sift_down<T, F>(list: &mut ArrayList<T>, n: usize, mut i: usize, cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    loop {
        let mut largest = i;
        let l = 2 * i + 1;
        let r = 2 * i + 2;
        if l < n && cmp(&list[l], &list[largest]) == Ordering::Greater {
            largest = l;
        }
        if r < n && cmp(&list[r], &list[largest]) == Ordering::Greater {
            largest = r;
        }
        if largest == i {
            break;
        }
        list.swap(i, largest);
        i = largest;
    }
}
