//! Stack: LIFO chain of owned nodes.
//!
//! Variables:
//!   head : top of the stack
//!   N    : current number of elements
//!
//! Equations:
//!   push(x): x.next = head,  head = x,     N' = N + 1   O(1)
//!   pop():   head = head.next,             N' = N - 1   O(1)
//!   peek():  &head.value                                O(1)

use std::fmt;

use super::chain::{Chain, Iter};
use crate::error::{AlgovizError, AlgovizResult};

pub struct Stack<T> {
    chain: Chain<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self {
            chain: Chain::new(),
        }
    }

    pub fn push(&mut self, value: T) {
        self.chain.push_front(value);
    }

    pub fn pop(&mut self) -> AlgovizResult<T> {
        self.chain
            .pop_front()
            .ok_or_else(|| AlgovizError::empty("stack", "pop"))
    }

    pub fn peek(&self) -> AlgovizResult<&T> {
        self.chain
            .front()
            .ok_or_else(|| AlgovizError::empty("stack", "peek"))
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

    /// Top to bottom
    pub fn iter(&self) -> Iter<'_, T> {
        self.chain.iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
