use crate::data_structures::ArrayList;

/// Every element whose numeric key lies within `tolerance` of `target`, in
/// encounter order. The result may be empty; the input is never mutated. O(n).
pub fn find_within<T, K>(
    list: &ArrayList<T>,
    target: f64,
    tolerance: f64,
    mut key: K,
) -> ArrayList<T>
where
    T: Clone,
    K: FnMut(&T) -> f64,
{
    let mut matches = ArrayList::new();
    for element in list {
        if (key(element) - target).abs() <= tolerance {
            matches.append(element.clone());
        }
    }
    matches
}
