//! In-place Sorting
//!
//! Six comparison sorts over `&mut [T]` that report every comparison or swap
//! to a [`StepControl`] host and stop at the next checkpoint once it asks
//! them to.
//!
//! # Features
//!
//! - **Selection**, **bubble** and **insertion** sort: quadratic, swap based
//! - **Merge** sort: top-down, merges through a scratch buffer
//! - **Quick** sort: Lomuto partition around the last element
//! - **Heap** sort: bottom-up max-heap, then repeated root extraction
//!
//! A cancelled run leaves the slice partially ordered but always a
//! permutation of its input. Stability is not guaranteed.
//!
//! # Example
//!
//! ```rust
//! use algoviz_library::algorithms::sorting::{SortOutcome, SortingAlgorithm};
//! use algoviz_core::{StepBudget, Unobserved};
//!
//! let mut bars = vec![5, 3, 1, 4, 2];
//! let outcome = SortingAlgorithm::Heap.run(&mut bars, &mut Unobserved);
//! assert_eq!(outcome, SortOutcome::Completed);
//! assert_eq!(bars, vec![1, 2, 3, 4, 5]);
//!
//! // Stop after three units of work
//! let mut bars = vec![5, 3, 1, 4, 2];
//! let outcome = SortingAlgorithm::Bubble.run(&mut bars, &mut StepBudget::new(3));
//! assert_eq!(outcome, SortOutcome::Cancelled);
//! ```

mod bubble;
mod heap;
mod insertion;
mod merge;
mod quick;
mod selection;


use std::fmt;
use std::ops::ControlFlow;
use std::str::FromStr;

use algoviz_core::control::{Cancellation, StepControl};
use algoviz_core::error::AlgovizError;
use serde::{Deserialize, Serialize};

pub use bubble::bubble_sort;
pub use heap::heap_sort;
pub use insertion::insertion_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;
pub use selection::selection_sort;

/// How a sorting run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOutcome {
    /// The slice is in non-decreasing order
    Completed,
    /// Host asked to stop; the slice is a permutation of its input
    Cancelled,
}

impl SortOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, SortOutcome::Completed)
    }
}

impl From<ControlFlow<()>> for SortOutcome {
    fn from(flow: ControlFlow<()>) -> Self {
        match flow {
            ControlFlow::Continue(()) => SortOutcome::Completed,
            ControlFlow::Break(()) => SortOutcome::Cancelled,
        }
    }
}

/// Closed set of sorting strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortingAlgorithm {
    #[default]
    Merge,
    Quick,
    Heap,
    Insertion,
    Selection,
    Bubble,
}

impl SortingAlgorithm {
    /// Menu order
    pub const ALL: [SortingAlgorithm; 6] = [
        SortingAlgorithm::Merge,
        SortingAlgorithm::Quick,
        SortingAlgorithm::Heap,
        SortingAlgorithm::Insertion,
        SortingAlgorithm::Selection,
        SortingAlgorithm::Bubble,
    ];

    /// Select by menu number, `1` for merge sort through `6` for bubble sort
    pub fn from_key(key: u8) -> Option<Self> {
        let index = usize::from(key).checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            SortingAlgorithm::Merge => "merge",
            SortingAlgorithm::Quick => "quick",
            SortingAlgorithm::Heap => "heap",
            SortingAlgorithm::Insertion => "insertion",
            SortingAlgorithm::Selection => "selection",
            SortingAlgorithm::Bubble => "bubble",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortingAlgorithm::Merge => "Merge Sort",
            SortingAlgorithm::Quick => "Quick Sort",
            SortingAlgorithm::Heap => "Heap Sort",
            SortingAlgorithm::Insertion => "Insertion Sort",
            SortingAlgorithm::Selection => "Selection Sort",
            SortingAlgorithm::Bubble => "Bubble Sort",
        }
    }

    /// Sort `items` in place with the selected strategy
    pub fn run<T, C>(self, items: &mut [T], control: &mut C) -> SortOutcome
    where
        T: Ord + Clone,
        C: StepControl<[T]> + ?Sized,
    {
        log::debug!("running {} on {} items", self.label(), items.len());
        let outcome = match self {
            SortingAlgorithm::Merge => merge_sort(items, control),
            SortingAlgorithm::Quick => quick_sort(items, control),
            SortingAlgorithm::Heap => heap_sort(items, control),
            SortingAlgorithm::Insertion => insertion_sort(items, control),
            SortingAlgorithm::Selection => selection_sort(items, control),
            SortingAlgorithm::Bubble => bubble_sort(items, control),
        };
        log::debug!("{} finished: {:?}", self.label(), outcome);
        outcome
    }
}

impl fmt::Display for SortingAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortingAlgorithm {
    type Err = AlgovizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        let key = key.strip_suffix("-sort").unwrap_or(&key);
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == key)
            .or_else(|| key.parse::<u8>().ok().and_then(Self::from_key))
            .ok_or_else(|| {
                AlgovizError::invalid_input(format!(
                    "unknown sorting algorithm '{}' (expected merge, quick, heap, insertion, selection or bubble)",
                    s
                ))
            })
    }
}

/// Break out of the run once the host has asked to stop
///
/// Every step is preceded by a checkpoint, so no step follows an observed
/// cancellation.
fn checkpoint<C: Cancellation + ?Sized>(control: &C) -> ControlFlow<()> {
    if control.is_cancelled() {
        ControlFlow::Break(())
    } else {
        ControlFlow::Continue(())
    }
}
