//! Cooperative step protocol
//!
//! Every algorithm calls [`StepControl::step`] after each unit of work
//! (one cell expansion, one comparison or swap) and polls
//! [`Cancellation::is_cancelled`] at its checkpoints. Both calls are plain
//! synchronous callbacks into the host; nothing here is a suspension point.
//!
//! # Cancellation contract
//!
//! An algorithm never emits a step after it has observed cancellation, and it
//! checks for cancellation between any two steps. A host that cancels while
//! handling step *k* therefore sees exactly *k* steps.
//!
//! # Example
//!
//! ```rust
//! use algoviz_core::control::{Cancellation, CancelToken, Focus, StepControl, Supervised, Unobserved};
//!
//! let token = CancelToken::new();
//! let mut host = Unobserved;
//! let mut control = Supervised::new(&mut host, token.clone());
//!
//! control.step(&[3, 1, 2][..], Focus::pair(0, 1));
//! assert!(!control.is_cancelled());
//!
//! token.cancel();
//! assert!(control.is_cancelled());
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Indices the algorithm is working on when it emits a step
///
/// For a grid this is the cell being expanded or marked; for a sequence it is
/// the compared or swapped pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Focus {
    pub primary: Option<usize>,
    pub secondary: Option<usize>,
}

impl Focus {
    pub const fn none() -> Self {
        Self {
            primary: None,
            secondary: None,
        }
    }

    pub const fn at(index: usize) -> Self {
        Self {
            primary: Some(index),
            secondary: None,
        }
    }

    pub const fn pair(primary: usize, secondary: usize) -> Self {
        Self {
            primary: Some(primary),
            secondary: Some(secondary),
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.primary == Some(index) || self.secondary == Some(index)
    }
}

/// Cancellation predicate polled at every checkpoint
pub trait Cancellation {
    /// Once true the run stops at its next checkpoint
    fn is_cancelled(&self) -> bool;
}

/// Host side of the step protocol
///
/// `S` is the structure under mutation (a grid, a slice of magnitudes). It is
/// handed out read-only so the host can render it between steps.
pub trait StepControl<S: ?Sized>: Cancellation {
    /// Called once per unit of algorithmic work
    fn step(&mut self, state: &S, focus: Focus);
}

impl<C: Cancellation + ?Sized> Cancellation for &mut C {
    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}

impl<S: ?Sized, C: StepControl<S> + ?Sized> StepControl<S> for &mut C {
    fn step(&mut self, state: &S, focus: Focus) {
        (**self).step(state, focus)
    }
}

/// Shared cancellation flag owned by a visualizer session
///
/// Cloning shares the flag, so a signal handler or input poller can hold a
/// clone while the algorithm polls the original.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        if !self.flag.swap(true, Ordering::SeqCst) {
            log::debug!("cancellation requested");
        }
    }

    /// Re-arm the token before a new run
    pub fn reset(&self) {
        self.flag.store(false, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

impl Cancellation for CancelToken {
    fn is_cancelled(&self) -> bool {
        CancelToken::is_cancelled(self)
    }
}

/// Runs to completion without observing anything
#[derive(Debug, Clone, Copy, Default)]
pub struct Unobserved;

impl Cancellation for Unobserved {
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<S: ?Sized> StepControl<S> for Unobserved {
    fn step(&mut self, _state: &S, _focus: Focus) {}
}

/// Counts steps and cancels once a budget is spent
#[derive(Debug, Clone, Copy)]
pub struct StepBudget {
    limit: Option<usize>,
    taken: usize,
}

impl StepBudget {
    /// Cancel after `limit` steps
    pub fn new(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            taken: 0,
        }
    }

    /// Never cancel; only count
    pub fn unlimited() -> Self {
        Self {
            limit: None,
            taken: 0,
        }
    }

    pub fn taken(&self) -> usize {
        self.taken
    }
}

impl Cancellation for StepBudget {
    fn is_cancelled(&self) -> bool {
        self.limit.is_some_and(|limit| self.taken >= limit)
    }
}

impl<S: ?Sized> StepControl<S> for StepBudget {
    fn step(&mut self, _state: &S, _focus: Focus) {
        self.taken += 1;
    }
}

/// Host control combined with a session's [`CancelToken`]
///
/// Cancelled as soon as either the host or the token asks for it.
pub struct Supervised<'a, C: ?Sized> {
    host: &'a mut C,
    token: CancelToken,
}

impl<'a, C: ?Sized> Supervised<'a, C> {
    pub fn new(host: &'a mut C, token: CancelToken) -> Self {
        Self { host, token }
    }

    pub fn token(&self) -> &CancelToken {
        &self.token
    }
}

impl<C: Cancellation + ?Sized> Cancellation for Supervised<'_, C> {
    fn is_cancelled(&self) -> bool {
        self.token.is_cancelled() || self.host.is_cancelled()
    }
}

impl<S: ?Sized, C: StepControl<S> + ?Sized> StepControl<S> for Supervised<'_, C> {
    fn step(&mut self, state: &S, focus: Focus) {
        self.host.step(state, focus);
    }
}
