//! ALGOVIZ Visualizer Sessions
//!
//! Thin host-facing wrappers around the pure algorithms in
//! `algoviz_library/algorithms`. A session owns the structure being shown,
//! the selected algorithm and a [`CancelToken`](algoviz_core::CancelToken);
//! the host supplies rendering and input polling through the step protocol.
//!
//! # Sessions
//!
//! - `PathfindingVisualizer` - grid editing, obstacle generation and searches
//! - `SortingVisualizer` - bar shuffling and sorting runs
//!
//! # Usage Examples
//!
//! ```rust
//! use algoviz_library::visualizers::{SortRun, SortingVisualizer};
//! use algoviz_library::SortingAlgorithm;
//! use algoviz_core::{Cancellation, Focus, StepControl};
//! use algoviz_library::visualizers::SortingHost;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! struct Silent;
//! impl Cancellation for Silent {
//!     fn is_cancelled(&self) -> bool { false }
//! }
//! impl StepControl<[u32]> for Silent {
//!     fn step(&mut self, _bars: &[u32], _focus: Focus) {}
//! }
//! impl SortingHost for Silent {}
//!
//! let mut session = SortingVisualizer::new(50);
//! session.pick_algorithm(SortingAlgorithm::Quick);
//! session.shuffle(&mut StdRng::seed_from_u64(3));
//!
//! assert!(matches!(session.start(&mut Silent), SortRun::Finished(_)));
//! assert_eq!(session.start(&mut Silent), SortRun::AlreadySorted);
//! ```

pub mod pathfinding;
pub mod sorting;

pub use pathfinding::{PathfindingHost, PathfindingVisualizer};
pub use sorting::{SortRun, SortingHost, SortingVisualizer};
