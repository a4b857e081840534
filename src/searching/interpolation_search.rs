use crate::data_structures::ArrayList;

/// Interpolation search over a list sorted ascending by a numeric key.
///
/// Probes proportionally between the range's low and high keys instead of at
/// the midpoint, narrowing the range like binary search. O(log log n)
/// expected on uniformly distributed keys, O(n) worst case on skewed ones.
/// Key equality is exact; no tolerance is applied. Returns None once the
/// window empties or the target leaves `[key(low), key(high)]`.
pub fn interpolation_search_by_key<T, K>(
    list: &ArrayList<T>,
    target: f64,
    mut key: K,
) -> Option<usize>
where
    K: FnMut(&T) -> f64,
{
    if list.is_empty() {
        return None;
    }
    let mut low = 0;
    let mut high = list.len() - 1;

    while low <= high && target >= key(&list[low]) && target <= key(&list[high]) {
        let low_key = key(&list[low]);
        let high_key = key(&list[high]);

        if low == high {
            return (low_key == target).then_some(low);
        }

        // Probe proportionally to the target's position between the keys.
        // The cast saturates, and the clamp guards float rounding at the top
        // of the range.
        let fraction = (high - low) as f64 / (high_key - low_key);
        let pos = (low + (fraction * (target - low_key)) as usize).min(high);

        let probe = key(&list[pos]);
        if probe == target {
            return Some(pos);
        }
        if probe < target {
            low = pos + 1;
        } else {
            if pos == 0 {
                return None;
            }
            high = pos - 1;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::interpolation_search_by_key;
    use crate::data_structures::ArrayList;

    fn uniform_keys() -> ArrayList<f64> {
        (0..20).map(|i| (i * 5) as f64).collect() // 0.0, 5.0, ... 95.0
    }

    #[test]
    fn finds_present_target_on_uniform_keys() {
        let list = uniform_keys();
        assert_eq!(interpolation_search_by_key(&list, 45.0, |v| *v), Some(9));
        assert_eq!(interpolation_search_by_key(&list, 0.0, |v| *v), Some(0));
        assert_eq!(interpolation_search_by_key(&list, 95.0, |v| *v), Some(19));
    }

    #[test]
    fn absent_target_inside_the_range_yields_none() {
        let list = uniform_keys();
        assert_eq!(interpolation_search_by_key(&list, 42.0, |v| *v), None);
    }

    #[test]
    fn target_outside_the_key_range_yields_none() {
        let list = uniform_keys();
        assert_eq!(interpolation_search_by_key(&list, -1.0, |v| *v), None);
        assert_eq!(interpolation_search_by_key(&list, 100.0, |v| *v), None);
    }

    #[test]
    fn empty_list_yields_none() {
        let list: ArrayList<f64> = ArrayList::new();
        assert_eq!(interpolation_search_by_key(&list, 1.0, |v| *v), None);
    }

    #[test]
    fn all_equal_keys_terminate() {
        let list: ArrayList<f64> = [7.0; 8].into_iter().collect();
        let found = interpolation_search_by_key(&list, 7.0, |v| *v).expect("key is present");
        assert_eq!(list.get(found), Ok(&7.0));
        assert_eq!(interpolation_search_by_key(&list, 8.0, |v| *v), None);
    }

    #[test]
    fn skewed_keys_still_resolve() {
        let list: ArrayList<f64> = [1.0, 2.0, 3.0, 4.0, 1000.0].into_iter().collect();
        assert_eq!(interpolation_search_by_key(&list, 4.0, |v| *v), Some(3));
        assert_eq!(interpolation_search_by_key(&list, 999.0, |v| *v), None);
    }
}
