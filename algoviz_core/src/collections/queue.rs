//! Queue: FIFO chain of owned nodes.
//!
//! Variables:
//!   head : first node, dequeued next
//!   tail : last node, the append point
//!   len  : current occupancy
//!
//! Equations:
//!   enqueue(x): tail.next = x,  tail = x,  len += 1       O(1)
//!   dequeue():  x = head,  head = head.next,  len -= 1    O(1)
//!   len == 0  iff  head == tail == None

use std::fmt;

use super::chain::{Chain, Iter};
use crate::error::{AlgovizError, AlgovizResult};

pub struct Queue<T> {
    chain: Chain<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            chain: Chain::new(),
        }
    }

    /// Append at the tail
    pub fn enqueue(&mut self, value: T) {
        self.chain.push_back(value);
    }

    /// Remove from the head
    pub fn dequeue(&mut self) -> AlgovizResult<T> {
        self.chain
            .pop_front()
            .ok_or_else(|| AlgovizError::empty("queue", "dequeue"))
    }

    pub fn peek(&self) -> AlgovizResult<&T> {
        self.chain
            .front()
            .ok_or_else(|| AlgovizError::empty("queue", "peek"))
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn clear(&mut self) {
        self.chain.clear();
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.chain.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
