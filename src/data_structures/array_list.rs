//! ArrayList — growable, index-addressed sequence container.
//!
//! Variables:
//!   data : Vec<T>  — backing storage; data.len() == logical size N
//!   C    : usize   — capacity = data.capacity(),  C >= N always
//!
//! Equations:
//!   append(x):       data[N] = x,  N' = N+1              O(1) amortised
//!   insert_at(i,x):  shift [i, N) right, data[i] = x     O(N-i),  0 <= i <= N
//!   replace(i,x):    old = data[i], data[i] = x          O(1),    0 <= i < N
//!   remove_at(i):    shift (i, N) left,  N' = N-1        O(N-i),  0 <= i < N
//!   grow:            C' = max(2C, needed)
//!
//! Indices keep their meaning across growth; live elements occupy [0, N).

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::error::OutOfBounds;

const DEFAULT_CAPACITY: usize = 10;

pub struct ArrayList<T> {
    data: Vec<T>,
}

impl<T> ArrayList<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Empty list with room for `capacity` elements before the first grow.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { data: Vec::with_capacity(capacity) }
    }

    /// Append to the end, growing the backing store when full.
    pub fn append(&mut self, element: T) {
        self.ensure_capacity(self.data.len() + 1);
        self.data.push(element);
    }

    /// Insert at `index`, shifting `[index, len)` one slot right.
    /// Valid for `0 <= index <= len`.
    pub fn insert_at(&mut self, index: usize, element: T) -> Result<(), OutOfBounds> {
        if index > self.data.len() {
            return Err(OutOfBounds { index, len: self.data.len() });
        }
        self.ensure_capacity(self.data.len() + 1);
        self.data.insert(index, element);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<&T, OutOfBounds> {
        let len = self.data.len();
        self.data.get(index).ok_or(OutOfBounds { index, len })
    }

    /// Store `element` at `index`, returning the prior value.
    pub fn replace(&mut self, index: usize, element: T) -> Result<T, OutOfBounds> {
        let len = self.data.len();
        match self.data.get_mut(index) {
            Some(slot) => Ok(std::mem::replace(slot, element)),
            None => Err(OutOfBounds { index, len }),
        }
    }

    /// Remove the element at `index`, shifting `[index+1, len)` one slot left.
    /// Ownership of the removed element moves to the caller.
    pub fn remove_at(&mut self, index: usize) -> Result<T, OutOfBounds> {
        if index >= self.data.len() {
            return Err(OutOfBounds { index, len: self.data.len() });
        }
        Ok(self.data.remove(index))
    }

    /// Exchange the elements at `i` and `j`.
    ///
    /// Panics on an out-of-range index, mirroring `Vec::swap`; see
    /// `compare::swap` for the fallible variant.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.data.swap(i, j);
    }

    /// Drop all elements. Capacity is unchanged; idempotent on an empty list.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    fn ensure_capacity(&mut self, min: usize) {
        if min > self.data.capacity() {
            // Double, or jump straight to the required size when doubling
            // would not reach it.
            let grown = (self.data.capacity() * 2).max(min);
            self.data.reserve_exact(grown - self.data.len());
        }
    }
}

impl<T: PartialEq> ArrayList<T> {
    /// Index of the first element equal to `element`, or None.
    pub fn index_of(&self, element: &T) -> Option<usize> {
        self.data.iter().position(|e| e == element)
    }

    pub fn contains(&self, element: &T) -> bool {
        self.index_of(element).is_some()
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        Self { data: self.data.clone() }
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

/// Panics on an out-of-range index, mirroring `Vec`. Use `get` for the
/// fallible variant.
impl<T> Index<usize> for ArrayList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for ArrayList<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { data: iter.into_iter().collect() }
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

// Serialized as a plain sequence of elements.
impl<T: Serialize> Serialize for ArrayList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.data.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ArrayList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self { data: Vec::deserialize(deserializer)? })
    }
}

#[cfg(test)]
mod tests {
    use super::ArrayList;
    use crate::error::OutOfBounds;

    #[test]
    fn append_then_get_round_trips() {
        let mut list = ArrayList::new();
        list.append("one");
        assert_eq!(list.get(0), Ok(&"one"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn replace_returns_prior_value() {
        let mut list: ArrayList<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(list.replace(1, 22), Ok(2));
        assert_eq!(list.get(1), Ok(&22));
    }

    #[test]
    fn insert_at_shifts_right() {
        let mut list: ArrayList<i32> = [1, 3].into_iter().collect();
        list.insert_at(1, 2).expect("index in range");
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        list.insert_at(3, 4).expect("append position is valid");
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn remove_at_shifts_left_and_preserves_order() {
        let mut list: ArrayList<i32> = [1, 2, 3, 4].into_iter().collect();
        assert_eq!(list.remove_at(1), Ok(2));
        assert_eq!(list.len(), 3);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 3, 4]);
    }

    #[test]
    fn out_of_range_indices_are_rejected_before_mutation() {
        let mut list: ArrayList<i32> = [1].into_iter().collect();
        assert_eq!(list.get(1), Err(OutOfBounds { index: 1, len: 1 }));
        assert_eq!(list.replace(1, 9), Err(OutOfBounds { index: 1, len: 1 }));
        assert_eq!(list.remove_at(7), Err(OutOfBounds { index: 7, len: 1 }));
        assert_eq!(list.insert_at(2, 9), Err(OutOfBounds { index: 2, len: 1 }));
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn grows_past_default_capacity() {
        let mut list = ArrayList::new();
        for i in 0..15 {
            list.append(i);
        }
        assert_eq!(list.len(), 15);
        assert_eq!(list.get(14), Ok(&14));
        assert!(list.capacity() >= 15);
    }

    #[test]
    fn capacity_hint_is_respected() {
        let list: ArrayList<u8> = ArrayList::with_capacity(32);
        assert!(list.capacity() >= 32);
        assert!(list.is_empty());
    }

    #[test]
    fn clear_keeps_capacity_and_is_idempotent() {
        let mut list: ArrayList<i32> = (0..20).collect();
        let cap = list.capacity();
        list.clear();
        assert_eq!(list.len(), 0);
        assert_eq!(list.capacity(), cap);
        list.clear();
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn index_of_returns_first_match() {
        let list: ArrayList<i32> = [7, 3, 7].into_iter().collect();
        assert_eq!(list.index_of(&7), Some(0));
        assert_eq!(list.index_of(&4), None);
        assert!(list.contains(&3));
        assert!(!list.contains(&4));
    }

    #[test]
    fn swap_exchanges_both_slots() {
        let mut list: ArrayList<i32> = [1, 2, 3].into_iter().collect();
        list.swap(0, 2);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
    }
}
