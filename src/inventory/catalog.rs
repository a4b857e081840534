//! Catalog queries composed from the core searching routines.
//!
//! Multi-match queries return a fresh list of clones in encounter order;
//! single-match queries return the index into the source list.

use crate::data_structures::ArrayList;
use crate::inventory::{Book, Order};
use crate::searching::interpolation_search::interpolation_search_by_key;
use crate::searching::linear_search::find_index;
use crate::searching::range_search::find_within;

/// Index of the book with exactly this ISBN.
pub fn find_by_isbn(books: &ArrayList<Book>, isbn: &str) -> Option<usize> {
    find_index(books, |book| book.isbn == isbn)
}

/// All books whose author contains `author`, case-insensitively.
pub fn find_by_author(books: &ArrayList<Book>, author: &str) -> ArrayList<Book> {
    let needle = author.to_lowercase();
    collect_matching(books, |book| book.author.to_lowercase().contains(&needle))
}

/// All books whose title contains `title`, case-insensitively.
pub fn find_by_title(books: &ArrayList<Book>, title: &str) -> ArrayList<Book> {
    let needle = title.to_lowercase();
    collect_matching(books, |book| book.title.to_lowercase().contains(&needle))
}

/// Interpolation search by price over a list sorted ascending by price.
/// Exact price equality, per the core routine.
pub fn interpolation_search_by_price(books: &ArrayList<Book>, target_price: f64) -> Option<usize> {
    interpolation_search_by_key(books, target_price, |book| book.price)
}

/// All books priced within `tolerance` of `target_price`, encounter order.
pub fn find_by_price_range(
    books: &ArrayList<Book>,
    target_price: f64,
    tolerance: f64,
) -> ArrayList<Book> {
    find_within(books, target_price, tolerance, |book| book.price)
}

/// Index of the order with this id.
pub fn find_order_by_id(orders: &ArrayList<Order>, id: u32) -> Option<usize> {
    find_index(orders, |order| order.id == id)
}

/// All orders whose customer name contains `name`, case-insensitively.
pub fn find_orders_by_customer(orders: &ArrayList<Order>, name: &str) -> ArrayList<Order> {
    let needle = name.to_lowercase();
    collect_matching(orders, |order| order.customer_name.to_lowercase().contains(&needle))
}

fn collect_matching<T: Clone, P: FnMut(&T) -> bool>(
    list: &ArrayList<T>,
    mut predicate: P,
) -> ArrayList<T> {
    let mut matches = ArrayList::new();
    for element in list {
        if predicate(element) {
            matches.append(element.clone());
        }
    }
    matches
}
