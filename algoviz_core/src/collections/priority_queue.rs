//! PriorityQueue: chain of owned nodes kept sorted by ascending priority.
//!
//! Variables:
//!   head : lowest priority, dequeued next
//!   tail : highest priority, the append point
//!   p(e) : Option<P>, entry priority, None = unbounded
//!
//! Invariant:
//!   p(e_i) <= p(e_{i+1})  for adjacent entries head -> tail
//!
//! Equations:
//!   enqueue(x, p):
//!     p > p(tail) or p = None  ->  append after tail            O(1)
//!     p <= p(head)             ->  insert before head           O(1)
//!     otherwise                ->  insert before the first e
//!                                  with p(e) >= p               O(N)
//!   dequeue(): head = head.next                                 O(1)
//!
//! Ties: a new entry is placed before every existing entry of equal priority,
//! so among equal priorities the most recently enqueued entry is served first.

use std::fmt;

use super::chain::Chain;
use crate::error::{AlgovizError, AlgovizResult};

struct Entry<T, P> {
    value: T,
    priority: Option<P>,
}

/// `a < b` with `None` ordered after every bounded priority
fn precedes<P: PartialOrd>(a: &Option<P>, b: &Option<P>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a < b,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

/// `a <= b` with `None` ordered after every bounded priority
fn precedes_or_ties<P: PartialOrd>(a: &Option<P>, b: &Option<P>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a <= b,
        (_, None) => true,
        (None, Some(_)) => false,
    }
}

pub struct PriorityQueue<T, P = u64> {
    chain: Chain<Entry<T, P>>,
}

impl<T, P: PartialOrd> PriorityQueue<T, P> {
    pub fn new() -> Self {
        Self {
            chain: Chain::new(),
        }
    }

    /// Insert `value`; lower priority is served sooner, `None` is served last.
    pub fn enqueue(&mut self, value: T, priority: Option<P>) {
        let entry = Entry { value, priority };
        let append = entry.priority.is_none()
            || self
                .chain
                .back()
                .map_or(true, |last| precedes(&last.priority, &entry.priority));

        if append {
            self.chain.push_back(entry);
        } else {
            self.chain.insert_before(entry, |existing, new| {
                !precedes(&existing.priority, &new.priority)
            });
        }
    }

    pub fn dequeue(&mut self) -> AlgovizResult<T> {
        self.dequeue_entry().map(|(value, _)| value)
    }

    /// Remove the head together with its priority
    pub fn dequeue_entry(&mut self) -> AlgovizResult<(T, Option<P>)> {
        self.chain
            .pop_front()
            .map(|entry| (entry.value, entry.priority))
            .ok_or_else(|| AlgovizError::empty("priority queue", "dequeue"))
    }

    pub fn peek(&self) -> AlgovizResult<&T> {
        self.chain
            .front()
            .map(|entry| &entry.value)
            .ok_or_else(|| AlgovizError::empty("priority queue", "peek"))
    }

    pub fn peek_priority(&self) -> AlgovizResult<Option<&P>> {
        self.chain
            .front()
            .map(|entry| entry.priority.as_ref())
            .ok_or_else(|| AlgovizError::empty("priority queue", "peek"))
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

    /// Entries head to tail as `(value, priority)`
    pub fn iter(&self) -> impl Iterator<Item = (&T, Option<&P>)> + '_ {
        self.chain
            .iter()
            .map(|entry| (&entry.value, entry.priority.as_ref()))
    }

    /// Whether every adjacent pair satisfies the ordering invariant
    pub fn is_ordered(&self) -> bool {
        let mut entries = self.chain.iter();
        let Some(mut prev) = entries.next() else {
            return true;
        };
        for entry in entries {
            if !precedes_or_ties(&prev.priority, &entry.priority) {
                return false;
            }
            prev = entry;
        }
        true
    }
}

impl<T, P: PartialOrd> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, P: fmt::Debug + PartialOrd> fmt::Debug for PriorityQueue<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
