//! LinkedQueue — FIFO chain of singly-linked owned nodes.
//!
//! Variables:
//!   front : Option<Box<Node<T>>>  — next node to dequeue; owns the chain
//!   rear  : *mut Node<T>          — last enqueued node; non-owning cursor
//!   len   : usize                 — cached chain length
//!
//! Equations:
//!   enqueue(x): rear.next = node(x),  rear = node(x),  len += 1   O(1)
//!   dequeue():  x = front.data,  front = front.next,  len -= 1    O(1)
//!               front == None  =>  rear = null
//!
//!   Invariant: front == None  iff  len == 0  iff  rear == null
//!
//! Each node exclusively owns its successor, so dropping `front` releases the
//! whole chain; teardown is iterative to keep long chains off the call stack.

use std::ptr;

use crate::error::EmptyStructure;

struct Node<T> {
    data: T,
    next: Option<Box<Node<T>>>,
}

pub struct LinkedQueue<T> {
    front: Option<Box<Node<T>>>,
    rear: *mut Node<T>,
    len: usize,
}

impl<T> LinkedQueue<T> {
    pub fn new() -> Self {
        Self { front: None, rear: ptr::null_mut(), len: 0 }
    }

    /// Link a new node after the current rear, or make it both front and rear
    /// when the queue is empty.
    pub fn enqueue(&mut self, item: T) {
        let mut node = Box::new(Node { data: item, next: None });
        let raw: *mut Node<T> = &mut *node;
        if self.rear.is_null() {
            self.front = Some(node);
        } else {
            // SAFETY: rear points at the last node of the chain owned by
            // `front`. Boxed nodes never move on the heap, and `&mut self`
            // guarantees unique access.
            unsafe { (*self.rear).next = Some(node) };
        }
        self.rear = raw;
        self.len += 1;
    }

    /// Remove and return the front element.
    pub fn dequeue(&mut self) -> Result<T, EmptyStructure> {
        let node = self.front.take().ok_or(EmptyStructure("queue"))?;
        self.front = node.next;
        if self.front.is_none() {
            // Last node just left the chain; rear would dangle otherwise.
            self.rear = ptr::null_mut();
        }
        self.len -= 1;
        Ok(node.data)
    }

    /// Front element without removing it.
    pub fn peek(&self) -> Result<&T, EmptyStructure> {
        self.front.as_deref().map(|n| &n.data).ok_or(EmptyStructure("queue"))
    }

    /// Release the whole chain. Idempotent.
    pub fn clear(&mut self) {
        let mut cur = self.front.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
        self.rear = ptr::null_mut();
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.front.is_none()
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedQueue<T> {
    fn drop(&mut self) {
        self.clear();
    }
}
