//! # Bookshelf
//!
//! Generic collections and comparator-driven algorithms, organised around a
//! retail-inventory scenario.
//!
//! ## Modules
//!
//! - `data_structures` – Core containers (ArrayList, LinkedQueue, LinkedStack)
//! - `compare` – Comparator composition and container-level helpers
//! - `sorting` – Ordering algorithms (insertion, selection, quick, merge, heap)
//! - `searching` – Lookup algorithms (linear, binary, jump, interpolation, range)
//! - `inventory` – Book/order records and catalog queries built on the core
//! - `error` – Index and empty-structure error types
//!
//! ---
//!
//! ## Usage Example
//!
//! ```rust
//! use bookshelf::data_structures::ArrayList;
//! use bookshelf::sorting::quick_sort::quick_sort;
//! use bookshelf::searching::binary_search::binary_search;
//!
//! let mut list: ArrayList<i32> = [3, 1, 2].into_iter().collect();
//! quick_sort(&mut list);
//! assert_eq!(binary_search(&list, &2), Some(1));
//! ```
//!
//! ---
//!
//! Sorting and searching routines reach the container only through its public
//! index operations, never through its internals.

pub mod compare;
pub mod data_structures;
pub mod error;
pub mod inventory;
pub mod searching;
pub mod sorting;
