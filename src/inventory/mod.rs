pub mod book;
pub mod catalog;
pub mod order;

pub use book::Book;
pub use order::{Order, OrderLine, OrderStatus};
