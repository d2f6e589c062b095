//! Chain: singly-linked list of heap nodes shared by every collection.
//!
//! Variables:
//!   head : *mut Node<T>   : first node, null when empty
//!   tail : *mut Node<T>   : last node, null when empty
//!   len  : usize          : number of nodes
//!
//! Equations:
//!   push_front(x): x.next = head,  head = x                  O(1)
//!   push_back(x):  tail.next = x,  tail = x                  O(1)
//!   pop_front():   head = head.next                          O(1)
//!   insert_before(x, stop): x before the first e with stop   O(N)
//!   len == 0  iff  head == tail == null
//!
//! Every node is allocated with `Box::into_raw` and owned by the chain as a
//! raw pointer until `pop_front` turns it back into a `Box`. No `Box` or
//! `&mut` to a linked node is ever held, so `head`, `tail` and the `next`
//! fields stay valid aliases of one another.

use std::marker::PhantomData;
use std::ptr;

struct Node<T> {
    value: T,
    next: *mut Node<T>,
}

pub(crate) struct Chain<T> {
    head: *mut Node<T>,
    tail: *mut Node<T>,
    len: usize,
    _owns: PhantomData<Box<Node<T>>>,
}

// SAFETY: the chain uniquely owns its nodes, like `Vec<T>` owns its buffer.
unsafe impl<T: Send> Send for Chain<T> {}
// SAFETY: `&Chain<T>` only hands out `&T`.
unsafe impl<T: Sync> Sync for Chain<T> {}

impl<T> Chain<T> {
    pub(crate) fn new() -> Self {
        Self {
            head: ptr::null_mut(),
            tail: ptr::null_mut(),
            len: 0,
            _owns: PhantomData,
        }
    }

    fn allocate(value: T, next: *mut Node<T>) -> *mut Node<T> {
        Box::into_raw(Box::new(Node { value, next }))
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.head.is_null()
    }

    pub(crate) fn push_front(&mut self, value: T) {
        let node = Self::allocate(value, self.head);
        if self.tail.is_null() {
            self.tail = node;
        }
        self.head = node;
        self.len += 1;
    }

    pub(crate) fn push_back(&mut self, value: T) {
        let node = Self::allocate(value, ptr::null_mut());
        if self.tail.is_null() {
            self.head = node;
        } else {
            // SAFETY: a non-null tail is a live node owned by this chain.
            unsafe { (*self.tail).next = node };
        }
        self.tail = node;
        self.len += 1;
    }

    /// Insert `value` before the first node `stop(existing, &value)` accepts,
    /// or at the back when none does
    pub(crate) fn insert_before<F>(&mut self, value: T, mut stop: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut prev: *mut Node<T> = ptr::null_mut();
        let mut cur = self.head;
        // SAFETY: `cur` walks from `head` through `next` links, all of which
        // are live nodes owned by this chain; only shared borrows are taken.
        unsafe {
            while !cur.is_null() && !stop(&(*cur).value, &value) {
                prev = cur;
                cur = (*cur).next;
            }
        }

        if cur.is_null() {
            self.push_back(value);
        } else if prev.is_null() {
            self.push_front(value);
        } else {
            let node = Self::allocate(value, cur);
            // SAFETY: `prev` is a live node preceding `cur`.
            unsafe { (*prev).next = node };
            self.len += 1;
        }
    }

    pub(crate) fn pop_front(&mut self) -> Option<T> {
        if self.head.is_null() {
            return None;
        }
        // SAFETY: `head` came from `Box::into_raw` and is unlinked here, so
        // ownership returns to this `Box` exactly once.
        let node = unsafe { Box::from_raw(self.head) };
        self.head = node.next;
        if self.head.is_null() {
            self.tail = ptr::null_mut();
        }
        self.len -= 1;
        Some(node.value)
    }

    pub(crate) fn front(&self) -> Option<&T> {
        // SAFETY: a non-null head is a live node owned by this chain.
        unsafe { self.head.as_ref() }.map(|node| &node.value)
    }

    pub(crate) fn back(&self) -> Option<&T> {
        // SAFETY: a non-null tail is a live node owned by this chain.
        unsafe { self.tail.as_ref() }.map(|node| &node.value)
    }

    /// Drop every node iteratively; a recursive drop would grow the stack
    /// once per node
    pub(crate) fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            _chain: PhantomData,
        }
    }
}

impl<T> Drop for Chain<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Borrowing iterator over a collection, head to tail
pub struct Iter<'a, T> {
    next: *const Node<T>,
    _chain: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        // SAFETY: the iterator borrows the chain for 'a, so every node it
        // reaches stays alive and unmodified for that long.
        let node: &'a Node<T> = unsafe { self.next.as_ref() }?;
        self.next = node.next;
        Some(&node.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_push_both_ends() {
        let mut chain = Chain::new();
        chain.push_back(2);
        chain.push_front(1);
        chain.push_back(3);
        assert_eq!(chain.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(chain.front(), Some(&1));
        assert_eq!(chain.back(), Some(&3));
        assert_eq!(chain.len(), 3);
    }

    #[test]
    fn test_tail_survives_draining_front() {
        let mut chain = Chain::new();
        chain.push_back('a');
        chain.push_back('b');
        assert_eq!(chain.pop_front(), Some('a'));
        // the remaining node is both head and tail
        chain.push_back('c');
        assert_eq!(chain.back(), Some(&'c'));
        assert_eq!(chain.pop_front(), Some('b'));
        assert_eq!(chain.pop_front(), Some('c'));
        assert_eq!(chain.pop_front(), None);
        assert!(chain.back().is_none());

        chain.push_back('d');
        assert_eq!(chain.front(), chain.back());
    }

    #[test]
    fn test_insert_before_updates_ends() {
        let mut chain = Chain::new();
        chain.insert_before(5, |existing, new| existing >= new);
        chain.insert_before(1, |existing, new| existing >= new);
        chain.insert_before(9, |existing, new| existing >= new);
        chain.insert_before(3, |existing, new| existing >= new);
        assert_eq!(chain.iter().copied().collect::<Vec<_>>(), vec![1, 3, 5, 9]);
        assert_eq!(chain.back(), Some(&9));

        // appending through the tail after middle inserts
        chain.push_back(10);
        assert_eq!(chain.pop_front(), Some(1));
        chain.push_back(11);
        assert_eq!(
            chain.iter().copied().collect::<Vec<_>>(),
            vec![3, 5, 9, 10, 11]
        );
    }

    #[test]
    fn test_drop_releases_every_value() {
        let tracker = Rc::new(());
        {
            let mut chain = Chain::new();
            for _ in 0..10 {
                chain.push_back(Rc::clone(&tracker));
            }
            chain.pop_front();
            assert_eq!(Rc::strong_count(&tracker), 10);
        }
        assert_eq!(Rc::strong_count(&tracker), 1);
    }
}
