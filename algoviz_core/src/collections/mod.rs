//! Linked collections driving the search algorithms.
//!
//! All three are built on the same singly-linked `chain` of heap nodes and
//! report misuse on an empty collection as
//! [`AlgovizError::EmptyCollection`](crate::error::AlgovizError::EmptyCollection).
//!
//! - [`Queue`]: FIFO, O(1) enqueue at the tail and dequeue at the head
//! - [`Stack`]: LIFO, O(1) push and pop at the head
//! - [`PriorityQueue`]: ascending by priority, most recent first among ties

mod chain;
pub mod priority_queue;
pub mod queue;
pub mod stack;

pub use chain::Iter;
pub use priority_queue::PriorityQueue;
pub use queue::Queue;
pub use stack::Stack;
