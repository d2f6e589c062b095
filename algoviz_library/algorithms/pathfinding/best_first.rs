//! Dijkstra and A* search
//!
//! Variables:
//!   g(n) : moves from Start to n along the best route found so far
//!   h(n) : Manhattan distance from n to End, 0 for Dijkstra
//!   f(n) : g(n) + h(n), the fringe priority
//!
//! Every move costs 1. A cell that is still waiting in the fringe is
//! re-enqueued when a shorter route to it turns up; the superseded entry is
//! skipped when it surfaces since its cell is already expanded by then.

use algoviz_core::collections::PriorityQueue;
use algoviz_core::control::{Focus, StepControl};

use super::{conclude, SearchOutcome};
use crate::algorithms::grid::{CellStatus, Grid, Position};

/// Uniform-cost search ordered by distance from Start
pub fn dijkstra<C>(grid: &mut Grid, control: &mut C) -> SearchOutcome
where
    C: StepControl<Grid> + ?Sized,
{
    explore(grid, control, |_| 0)
}

/// Best-first search ordered by distance plus Manhattan estimate to End
pub fn a_star<C>(grid: &mut Grid, control: &mut C) -> SearchOutcome
where
    C: StepControl<Grid> + ?Sized,
{
    let goal = grid.end();
    explore(grid, control, move |position: Position| position.manhattan(goal))
}

fn explore<C, H>(grid: &mut Grid, control: &mut C, heuristic: H) -> SearchOutcome
where
    C: StepControl<Grid> + ?Sized,
    H: Fn(Position) -> usize,
{
    let start = grid.start_index();
    let end = grid.end_index();
    let mut distance = vec![usize::MAX; grid.len()];
    // h is computed once per cell, on first discovery
    let mut estimate: Vec<Option<usize>> = vec![None; grid.len()];
    let mut fringe: PriorityQueue<usize, usize> = PriorityQueue::new();
    let mut expanded = 0;

    distance[start] = 0;
    let h = heuristic(grid.position_of(start));
    estimate[start] = Some(h);
    grid.mark_discovered(start);
    fringe.enqueue(start, Some(h));

    while !fringe.is_empty() && !control.is_cancelled() {
        let Ok(current) = fringe.dequeue() else {
            break;
        };
        if current == end {
            return conclude(grid, control, true, expanded);
        }
        if grid.cell_at(current).is_visited() {
            continue;
        }

        let neighbors = grid.cell_at(current).neighbors().to_vec();
        for neighbor in neighbors {
            if grid.cell_at(neighbor).is_visited() {
                continue;
            }
            let candidate = distance[current] + 1;
            if candidate >= distance[neighbor] {
                continue;
            }
            distance[neighbor] = candidate;
            grid.mark_discovered(neighbor);
            grid.set_parent(neighbor, current);
            grid.set_status(neighbor, CellStatus::Frontier);

            let h = match estimate[neighbor] {
                Some(h) => h,
                None => {
                    let h = heuristic(grid.position_of(neighbor));
                    estimate[neighbor] = Some(h);
                    h
                }
            };
            fringe.enqueue(neighbor, Some(candidate + h));
        }

        grid.set_status(current, CellStatus::Visited);
        expanded += 1;
        log::trace!(
            "expanded cell {:?} at distance {}",
            grid.position_of(current),
            distance[current]
        );
        control.step(grid, Focus::at(current));
    }

    conclude(grid, control, false, expanded)
}
