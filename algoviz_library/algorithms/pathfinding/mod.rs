//! Grid Pathfinding
//!
//! Four searches over a [`Grid`] from its Start cell to its End cell, each
//! expanding one cell per step and painting its progress into the grid.
//!
//! # Features
//!
//! - **Depth-first**: stack fringe, finds some path
//! - **Breadth-first**: queue fringe, shortest path on a uniform grid
//! - **Dijkstra**: priority queue keyed by distance from Start
//! - **A\***: priority queue keyed by distance plus Manhattan estimate
//!
//! Cells move `Walkable -> Frontier -> Visited`; once End is reached the route
//! is traced back through parent links and painted `Path`, Start excluded.
//!
//! Neighbour lists are a snapshot, so call [`Grid::compute_neighbors`] before a
//! run. A grid that has already been searched should be cleaned with
//! [`Grid::reset_search`] first.
//!
//! # Example
//!
//! ```rust
//! use algoviz_library::algorithms::grid::{Grid, Position};
//! use algoviz_library::algorithms::pathfinding::{PathfindingAlgorithm, SearchOutcome};
//! use algoviz_core::StepBudget;
//!
//! let mut grid = Grid::with_endpoints(8, Position::new(0, 0), Position::new(7, 7)).unwrap();
//! grid.compute_neighbors();
//!
//! let mut steps = StepBudget::unlimited();
//! let outcome = PathfindingAlgorithm::AStar.run(&mut grid, &mut steps);
//! assert_eq!(outcome.summary().map(|s| s.length), Some(14));
//! assert!(steps.taken() > 0);
//! ```

mod best_first;
mod uninformed;


use std::fmt;
use std::str::FromStr;

use algoviz_core::control::{Focus, StepControl};
use algoviz_core::error::AlgovizError;
use serde::{Deserialize, Serialize};

use super::grid::{CellStatus, Grid};

pub use best_first::{a_star, dijkstra};
pub use uninformed::{breadth_first, depth_first};

/// Result of a successful search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PathSummary {
    /// Moves from Start to End
    pub length: usize,
    /// Cells expanded before End was reached
    pub expanded: usize,
}

/// How a search run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum SearchOutcome {
    /// End reached and the route painted
    Found(PathSummary),
    /// Every reachable cell expanded without meeting End
    Exhausted,
    /// Host asked to stop; the grid is left mid-search
    Cancelled,
}

impl SearchOutcome {
    pub fn found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    pub fn summary(&self) -> Option<PathSummary> {
        match self {
            SearchOutcome::Found(summary) => Some(*summary),
            _ => None,
        }
    }
}

/// Closed set of search strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PathfindingAlgorithm {
    #[default]
    #[serde(rename = "a-star")]
    AStar,
    #[serde(rename = "dijkstra")]
    Dijkstra,
    #[serde(rename = "bfs")]
    BreadthFirst,
    #[serde(rename = "dfs")]
    DepthFirst,
}

impl PathfindingAlgorithm {
    /// Menu order
    pub const ALL: [PathfindingAlgorithm; 4] = [
        PathfindingAlgorithm::AStar,
        PathfindingAlgorithm::Dijkstra,
        PathfindingAlgorithm::BreadthFirst,
        PathfindingAlgorithm::DepthFirst,
    ];

    /// Select by menu number, `1` for A* through `4` for depth-first
    pub fn from_key(key: u8) -> Option<Self> {
        let index = usize::from(key).checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    /// Short name used in configuration and on the command line
    pub fn name(self) -> &'static str {
        match self {
            PathfindingAlgorithm::AStar => "a-star",
            PathfindingAlgorithm::Dijkstra => "dijkstra",
            PathfindingAlgorithm::BreadthFirst => "bfs",
            PathfindingAlgorithm::DepthFirst => "dfs",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PathfindingAlgorithm::AStar => "A* Search",
            PathfindingAlgorithm::Dijkstra => "Dijkstra's Algorithm",
            PathfindingAlgorithm::BreadthFirst => "Breadth-First Search",
            PathfindingAlgorithm::DepthFirst => "Depth-First Search",
        }
    }

    /// Run the selected search on `grid`
    pub fn run<C>(self, grid: &mut Grid, control: &mut C) -> SearchOutcome
    where
        C: StepControl<Grid> + ?Sized,
    {
        log::debug!(
            "running {} on {}x{} grid from {:?} to {:?}",
            self.label(),
            grid.size(),
            grid.size(),
            grid.start(),
            grid.end()
        );
        let outcome = match self {
            PathfindingAlgorithm::AStar => a_star(grid, control),
            PathfindingAlgorithm::Dijkstra => dijkstra(grid, control),
            PathfindingAlgorithm::BreadthFirst => breadth_first(grid, control),
            PathfindingAlgorithm::DepthFirst => depth_first(grid, control),
        };
        log::debug!("{} finished: {:?}", self.label(), outcome);
        outcome
    }
}

impl fmt::Display for PathfindingAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PathfindingAlgorithm {
    type Err = AlgovizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a-star" | "astar" | "a*" | "1" => Ok(PathfindingAlgorithm::AStar),
            "dijkstra" | "2" => Ok(PathfindingAlgorithm::Dijkstra),
            "bfs" | "breadth-first" | "3" => Ok(PathfindingAlgorithm::BreadthFirst),
            "dfs" | "depth-first" | "4" => Ok(PathfindingAlgorithm::DepthFirst),
            other => Err(AlgovizError::invalid_input(format!(
                "unknown pathfinding algorithm '{}' (expected a-star, dijkstra, bfs or dfs)",
                other
            ))),
        }
    }
}

/// Settle a finished search loop
///
/// `found` is true only when End was dequeued. Anything else is a cancellation
/// if the host asked for one, otherwise the reachable region ran dry.
fn conclude<C>(grid: &mut Grid, control: &mut C, found: bool, expanded: usize) -> SearchOutcome
where
    C: StepControl<Grid> + ?Sized,
{
    if found {
        backtrack(grid, control, expanded)
    } else if control.is_cancelled() {
        SearchOutcome::Cancelled
    } else {
        SearchOutcome::Exhausted
    }
}

/// Paint the route from End's parent back to Start, one step per cell
fn backtrack<C>(grid: &mut Grid, control: &mut C, expanded: usize) -> SearchOutcome
where
    C: StepControl<Grid> + ?Sized,
{
    let start = grid.start_index();
    let mut current = grid.end_index();
    let mut length = 0;

    while let Some(parent) = grid.cell_at(current).parent() {
        length += 1;
        if parent == start {
            break;
        }
        if control.is_cancelled() {
            return SearchOutcome::Cancelled;
        }
        grid.set_status(parent, CellStatus::Path);
        control.step(grid, Focus::at(parent));
        current = parent;
    }

    SearchOutcome::Found(PathSummary { length, expanded })
}
