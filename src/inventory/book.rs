//! Book record and its comparator family.
//!
//! Books carry no intrinsic order; every ordering used by the catalog is an
//! explicit comparator passed to the sorting and searching routines. Price
//! comparators use `f64::total_cmp`, so they are total over all float values.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub price: f64,
    pub quantity_in_stock: u32,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        price: f64,
        quantity_in_stock: u32,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            price,
            quantity_in_stock,
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} by {} (ISBN {}), ${:.2}, {} in stock",
            self.title, self.author, self.isbn, self.price, self.quantity_in_stock
        )
    }
}

/// Title order for catalog listings: titles starting with a digit sort after
/// alphabetic ones, otherwise case-insensitive alphabetical.
pub fn by_title(a: &Book, b: &Book) -> Ordering {
    let a_digit = starts_with_digit(&a.title);
    let b_digit = starts_with_digit(&b.title);
    match (a_digit, b_digit) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        _ => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
    }
}

fn starts_with_digit(title: &str) -> bool {
    title.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// Case-insensitive author order.
pub fn by_author(a: &Book, b: &Book) -> Ordering {
    a.author.to_lowercase().cmp(&b.author.to_lowercase())
}

/// Price, low to high.
pub fn by_price_asc(a: &Book, b: &Book) -> Ordering {
    a.price.total_cmp(&b.price)
}

/// Price, high to low.
pub fn by_price_desc(a: &Book, b: &Book) -> Ordering {
    b.price.total_cmp(&a.price)
}

/// Stock quantity, low to high.
pub fn by_quantity(a: &Book, b: &Book) -> Ordering {
    a.quantity_in_stock.cmp(&b.quantity_in_stock)
}

/// Stock quantity, high to low.
pub fn by_quantity_desc(a: &Book, b: &Book) -> Ordering {
    b.quantity_in_stock.cmp(&a.quantity_in_stock)
}

pub fn by_isbn(a: &Book, b: &Book) -> Ordering {
    a.isbn.cmp(&b.isbn)
}
