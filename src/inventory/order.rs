//! Customer order record.
//!
//! Order ids are supplied by the caller at construction; the library keeps no
//! global counter or other static mutable state.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data_structures::ArrayList;
use crate::inventory::Book;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Processed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub book: Book,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u32,
    pub customer_name: String,
    pub shipping_address: String,
    pub lines: ArrayList<OrderLine>,
    pub status: OrderStatus,
}

impl Order {
    pub fn new(
        id: u32,
        customer_name: impl Into<String>,
        shipping_address: impl Into<String>,
    ) -> Self {
        Self {
            id,
            customer_name: customer_name.into(),
            shipping_address: shipping_address.into(),
            lines: ArrayList::new(),
            status: OrderStatus::Pending,
        }
    }

    pub fn add_book(&mut self, book: Book, quantity: u32) {
        self.lines.append(OrderLine { book, quantity });
    }

    pub fn total_price(&self) -> f64 {
        self.lines
            .iter()
            .map(|line| line.book.price * f64::from(line.quantity))
            .sum()
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Order #{} for {} ({:?}), ship to {}",
            self.id, self.customer_name, self.status, self.shipping_address
        )?;
        for line in &self.lines {
            writeln!(
                f,
                "  {} x{} @ ${:.2}",
                line.book.title,
                line.quantity,
                line.book.price
            )?;
        }
        write!(f, "Total: ${:.2}", self.total_price())
    }
}

/// Case-insensitive customer name order.
pub fn by_customer_name(a: &Order, b: &Order) -> Ordering {
    a.customer_name.to_lowercase().cmp(&b.customer_name.to_lowercase())
}

pub fn by_id(a: &Order, b: &Order) -> Ordering {
    a.id.cmp(&b.id)
}
