pub mod array_list;
pub mod queue;
pub mod stack;

pub use array_list::ArrayList;
pub use queue::LinkedQueue;
pub use stack::LinkedStack;
