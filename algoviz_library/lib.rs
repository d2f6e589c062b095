//! # ALGOVIZ Library
//!
//! Step-by-step algorithms for the ALGOVIZ visualizer.
//!
//! ## Structure
//!
//! ```text
//! algoviz_library/
//! ── algorithms/     # Grid model, pathfinding and sorting
//! ── visualizers/    # Host-facing session wrappers
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use algoviz_library::{Grid, PathfindingAlgorithm, Position, SearchOutcome, Unobserved};
//!
//! let mut grid = Grid::with_endpoints(5, Position::new(0, 0), Position::new(4, 4)).unwrap();
//! grid.compute_neighbors();
//!
//! let outcome = PathfindingAlgorithm::BreadthFirst.run(&mut grid, &mut Unobserved);
//! match outcome {
//!     SearchOutcome::Found(summary) => assert_eq!(summary.length, 8),
//!     other => panic!("unexpected outcome {:?}", other),
//! }
//! ```

pub mod algorithms;
pub mod visualizers;

// Re-export the step protocol so hosts only need one crate
pub use algoviz_core::{
    AlgovizError, AlgovizResult, CancelToken, Cancellation, Focus, StepBudget, StepControl,
    Supervised, Unobserved,
};

pub use algorithms::grid::{Cell, CellStatus, Grid, Position, Role, MAX_GRID_SIZE};
pub use algorithms::pathfinding::{PathSummary, PathfindingAlgorithm, SearchOutcome};
pub use algorithms::sorting::{SortOutcome, SortingAlgorithm};
pub use visualizers::{
    PathfindingHost, PathfindingVisualizer, SortRun, SortingHost, SortingVisualizer,
};
