use crate::data_structures::ArrayList;

/// Index of the first element equal to `target`, or None. O(n).
pub fn linear_search<T: PartialEq>(list: &ArrayList<T>, target: &T) -> Option<usize> {
    (0..list.len()).find(|&i| &list[i] == target)
}

/// Index of the first element satisfying `predicate`, or None. O(n).
pub fn find_index<T, P>(list: &ArrayList<T>, mut predicate: P) -> Option<usize>
where
    P: FnMut(&T) -> bool,
{
    (0..list.len()).find(|&i| predicate(&list[i]))
}
