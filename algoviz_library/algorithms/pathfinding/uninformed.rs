//! Depth-first and breadth-first search
//!
//! Both share one expansion loop and differ only in the fringe: a stack makes
//! the search dive, a queue makes it sweep outwards ring by ring.

use algoviz_core::collections::{Queue, Stack};
use algoviz_core::control::{Focus, StepControl};
use algoviz_core::error::AlgovizResult;

use super::{conclude, SearchOutcome};
use crate::algorithms::grid::{CellStatus, Grid};

/// Discovered cells waiting for expansion
trait Fringe {
    fn admit(&mut self, cell: usize);
    fn take(&mut self) -> AlgovizResult<usize>;
    fn is_empty(&self) -> bool;
}

impl Fringe for Stack<usize> {
    fn admit(&mut self, cell: usize) {
        self.push(cell);
    }

    fn take(&mut self) -> AlgovizResult<usize> {
        self.pop()
    }

    fn is_empty(&self) -> bool {
        Stack::is_empty(self)
    }
}

impl Fringe for Queue<usize> {
    fn admit(&mut self, cell: usize) {
        self.enqueue(cell);
    }

    fn take(&mut self) -> AlgovizResult<usize> {
        self.dequeue()
    }

    fn is_empty(&self) -> bool {
        Queue::is_empty(self)
    }
}

/// Search with a LIFO fringe; the route found is not necessarily shortest
pub fn depth_first<C>(grid: &mut Grid, control: &mut C) -> SearchOutcome
where
    C: StepControl<Grid> + ?Sized,
{
    explore(grid, control, Stack::new())
}

/// Search with a FIFO fringe; the route found is a shortest one
pub fn breadth_first<C>(grid: &mut Grid, control: &mut C) -> SearchOutcome
where
    C: StepControl<Grid> + ?Sized,
{
    explore(grid, control, Queue::new())
}

fn explore<F, C>(grid: &mut Grid, control: &mut C, mut fringe: F) -> SearchOutcome
where
    F: Fringe,
    C: StepControl<Grid> + ?Sized,
{
    let start = grid.start_index();
    let end = grid.end_index();
    let mut expanded = 0;

    grid.mark_discovered(start);
    fringe.admit(start);

    while !fringe.is_empty() && !control.is_cancelled() {
        let Ok(current) = fringe.take() else {
            break;
        };
        if current == end {
            return conclude(grid, control, true, expanded);
        }

        let neighbors = grid.cell_at(current).neighbors().to_vec();
        for neighbor in neighbors {
            if grid.cell_at(neighbor).was_discovered() {
                continue;
            }
            grid.mark_discovered(neighbor);
            grid.set_parent(neighbor, current);
            grid.set_status(neighbor, CellStatus::Frontier);
            fringe.admit(neighbor);
        }

        grid.set_status(current, CellStatus::Visited);
        expanded += 1;
        log::trace!("expanded cell {:?}", grid.position_of(current));
        control.step(grid, Focus::at(current));
    }

    conclude(grid, control, false, expanded)
}
