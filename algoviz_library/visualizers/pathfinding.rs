use algoviz_core::control::{CancelToken, StepControl, Supervised};
use algoviz_core::error::AlgovizResult;
use rand::Rng;

use crate::algorithms::grid::{CellStatus, Grid, Position, Role};
use crate::algorithms::pathfinding::{PathfindingAlgorithm, SearchOutcome};

/// Host of a pathfinding session: renders each step and hears about dead ends
pub trait PathfindingHost: StepControl<Grid> {
    /// A finished, uncancelled search could not reach End
    fn notify_no_path_found(&mut self);
}

/// Pathfinding Visualizer - grid editing and step-by-step searches
///
/// Owns the grid, the selected algorithm and the session's cancellation
/// token. `start` borrows the session for the whole run, so the grid cannot be
/// edited or searched twice while a search is in progress.
///
/// This session is a thin wrapper around the pure algorithms in
/// algoviz_library/algorithms.
#[derive(Debug)]
pub struct PathfindingVisualizer {
    grid: Grid,
    algorithm: PathfindingAlgorithm,
    token: CancelToken,
    // random obstacles are offered once per clear, and not after a run
    obstacles_locked: bool,
    last_outcome: Option<SearchOutcome>,
}

impl PathfindingVisualizer {
    /// Create a session over an empty `size x size` grid with default endpoints
    pub fn new(size: usize) -> AlgovizResult<Self> {
        Ok(Self::from_grid(Grid::new(size)?))
    }

    /// Create a session over an existing grid
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            algorithm: PathfindingAlgorithm::default(),
            token: CancelToken::new(),
            obstacles_locked: false,
            last_outcome: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn algorithm(&self) -> PathfindingAlgorithm {
        self.algorithm
    }

    pub fn pick_algorithm(&mut self, algorithm: PathfindingAlgorithm) {
        log::debug!("pathfinding algorithm set to {}", algorithm.label());
        self.algorithm = algorithm;
    }

    /// Select by menu number; unknown keys leave the selection alone
    pub fn pick_algorithm_key(&mut self, key: u8) -> bool {
        match PathfindingAlgorithm::from_key(key) {
            Some(algorithm) => {
                self.pick_algorithm(algorithm);
                true
            }
            None => false,
        }
    }

    /// Handle shared with signal handlers and input pollers
    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    /// Ask the running search to stop at its next checkpoint
    pub fn stop(&self) {
        self.token.cancel();
    }

    pub fn last_outcome(&self) -> Option<SearchOutcome> {
        self.last_outcome
    }

    pub fn paint(&mut self, position: Position, status: CellStatus) -> AlgovizResult<bool> {
        self.grid.paint(position, status)
    }

    pub fn relocate(&mut self, role: Role, position: Position) -> AlgovizResult<bool> {
        self.grid.relocate(role, position)
    }

    /// Scatter random barriers around the endpoints' clearance zones
    ///
    /// `None` once obstacles were generated or a search ran since the last
    /// [`clear`](Self::clear).
    pub fn generate_obstacles<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        density: f64,
        clearance: usize,
    ) -> Option<usize> {
        if self.obstacles_locked {
            log::debug!("obstacles already generated, clear the grid first");
            return None;
        }
        self.obstacles_locked = true;
        Some(self.grid.generate_obstacles(rng, density, clearance))
    }

    /// Reset every cell and the default endpoints
    pub fn clear(&mut self) {
        self.grid.clear();
        self.obstacles_locked = false;
        self.last_outcome = None;
    }

    /// Run the selected search, painting its progress through `host`
    ///
    /// Earlier search artefacts are erased and neighbour lists rebuilt first.
    /// `host.notify_no_path_found()` is called only when the search exhausts
    /// the reachable cells without being cancelled.
    pub fn start<H>(&mut self, host: &mut H) -> SearchOutcome
    where
        H: PathfindingHost + ?Sized,
    {
        self.token.reset();
        self.obstacles_locked = true;
        self.grid.reset_search();
        self.grid.compute_neighbors();

        let outcome = {
            let mut control = Supervised::new(&mut *host, self.token.clone());
            self.algorithm.run(&mut self.grid, &mut control)
        };

        match outcome {
            SearchOutcome::Found(summary) => log::info!(
                "{} found a path of length {} after expanding {} cells",
                self.algorithm.label(),
                summary.length,
                summary.expanded
            ),
            SearchOutcome::Exhausted => {
                log::info!("{} found no path", self.algorithm.label());
                host.notify_no_path_found();
            }
            SearchOutcome::Cancelled => log::info!("{} cancelled", self.algorithm.label()),
        }

        self.last_outcome = Some(outcome);
        outcome
    }
}
