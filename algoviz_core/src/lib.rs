//! # ALGOVIZ Core
//!
//! The core runtime for the ALGOVIZ algorithm visualizer.
//!
//! ALGOVIZ executes classical algorithms one discrete step at a time and hands
//! control back to a host (renderer, input poller) after every step. This crate
//! provides the building blocks the algorithms are written against:
//!
//! - **Collections**: singly-linked FIFO queue, LIFO stack and priority queue
//! - **Control**: the cooperative step protocol and cancellation tokens
//! - **Error**: the shared error taxonomy
//!
//! ## Quick Start
//!
//! ```rust
//! use algoviz_core::{Cancellation, Focus, PriorityQueue, StepBudget, StepControl};
//!
//! let mut frontier = PriorityQueue::new();
//! frontier.enqueue("far", Some(9));
//! frontier.enqueue("near", Some(1));
//! assert_eq!(frontier.dequeue().unwrap(), "near");
//!
//! let mut budget = StepBudget::new(1);
//! budget.step(&frontier, Focus::none());
//! assert!(budget.is_cancelled());
//! ```

pub mod collections;
pub mod control;
pub mod error;

// Re-export commonly used types for easy access
pub use collections::{PriorityQueue, Queue, Stack};
pub use control::{
    CancelToken, Cancellation, Focus, StepBudget, StepControl, Supervised, Unobserved,
};
pub use error::{AlgovizError, AlgovizResult};
