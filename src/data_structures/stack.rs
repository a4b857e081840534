//! LinkedStack — LIFO chain of singly-linked owned nodes.
//!
//! Variables:
//!   top : Option<Box<Node<T>>>  — most recently pushed node; owns the chain
//!   len : usize                 — cached chain length
//!
//! Equations:
//!   push(x): node(x).next = top,  top = node(x),  len += 1   O(1)
//!   pop():   x = top.data,  top = top.next,  len -= 1        O(1)
//!
//!   Invariant: top == None  iff  len == 0

use crate::error::EmptyStructure;

struct Node<T> {
    data: T,
    next: Option<Box<Node<T>>>,
}

pub struct LinkedStack<T> {
    top: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> LinkedStack<T> {
    pub fn new() -> Self {
        Self { top: None, len: 0 }
    }

    pub fn push(&mut self, item: T) {
        let node = Box::new(Node { data: item, next: self.top.take() });
        self.top = Some(node);
        self.len += 1;
    }

    /// Remove and return the top element.
    pub fn pop(&mut self) -> Result<T, EmptyStructure> {
        let node = self.top.take().ok_or(EmptyStructure("stack"))?;
        self.top = node.next;
        self.len -= 1;
        Ok(node.data)
    }

    /// Top element without removing it.
    pub fn peek(&self) -> Result<&T, EmptyStructure> {
        self.top.as_deref().map(|n| &n.data).ok_or(EmptyStructure("stack"))
    }

    /// Release the whole chain. Idempotent.
    pub fn clear(&mut self) {
        let mut cur = self.top.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedStack<T> {
    fn drop(&mut self) {
        self.clear();
    }
}
