use algoviz_core::control::{CancelToken, StepControl, Supervised};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::algorithms::sorting::{SortOutcome, SortingAlgorithm};

/// Host of a sorting session
pub trait SortingHost: StepControl<[u32]> {
    /// Called once after a run completes, e.g. for a final sweep over the bars
    fn on_sorted(&mut self, _bars: &[u32]) {}
}

/// What `SortingVisualizer::start` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortRun {
    /// The bars were already sorted by an earlier completed run; shuffle first
    AlreadySorted,
    Finished(SortOutcome),
}

/// Sorting Visualizer - shuffles bars `1..=N` and sorts them step by step
///
/// This session is a thin wrapper around the pure algorithms in
/// algoviz_library/algorithms.
#[derive(Debug)]
pub struct SortingVisualizer {
    bars: Vec<u32>,
    algorithm: SortingAlgorithm,
    token: CancelToken,
    sorted: bool,
}

impl SortingVisualizer {
    /// Create a session holding the bars `1..=len` in order
    pub fn new(len: u32) -> Self {
        Self {
            bars: (1..=len).collect(),
            algorithm: SortingAlgorithm::default(),
            token: CancelToken::new(),
            sorted: false,
        }
    }

    pub fn bars(&self) -> &[u32] {
        &self.bars
    }

    pub fn algorithm(&self) -> SortingAlgorithm {
        self.algorithm
    }

    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    pub fn pick_algorithm(&mut self, algorithm: SortingAlgorithm) {
        log::debug!("sorting algorithm set to {}", algorithm.label());
        self.algorithm = algorithm;
    }

    /// Select by menu number; unknown keys leave the selection alone
    pub fn pick_algorithm_key(&mut self, key: u8) -> bool {
        match SortingAlgorithm::from_key(key) {
            Some(algorithm) => {
                self.pick_algorithm(algorithm);
                true
            }
            None => false,
        }
    }

    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    /// Ask the running sort to stop at its next checkpoint
    pub fn stop(&self) {
        self.token.cancel();
    }

    /// Reset the bars to a random permutation of `1..=N`
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.bars.sort_unstable();
        self.bars.shuffle(rng);
        self.sorted = false;
    }

    /// Sort the bars with the selected algorithm, rendering through `host`
    pub fn start<H>(&mut self, host: &mut H) -> SortRun
    where
        H: SortingHost + ?Sized,
    {
        if self.sorted {
            log::debug!("bars already sorted, shuffle before sorting again");
            return SortRun::AlreadySorted;
        }
        self.token.reset();

        let outcome = {
            let mut control = Supervised::new(&mut *host, self.token.clone());
            self.algorithm.run(self.bars.as_mut_slice(), &mut control)
        };

        match outcome {
            SortOutcome::Completed => {
                log::info!("{} sorted {} bars", self.algorithm.label(), self.bars.len());
                self.sorted = true;
                host.on_sorted(&self.bars);
            }
            SortOutcome::Cancelled => log::info!("{} stopped", self.algorithm.label()),
        }
        SortRun::Finished(outcome)
    }
}
