//! Step-by-step algorithms
//!
//! Every algorithm here mutates its structure in place and reports each unit
//! of work to a [`StepControl`](algoviz_core::StepControl) host, polling it for
//! cancellation at every checkpoint.
//!
//! # Architecture
//!
//! - **No I/O**: Algorithms contain only computation logic
//! - **Cooperative**: One synchronous callback per expansion, comparison or swap
//! - **Cancellable**: A cancelled run returns at its next checkpoint
//!
//! # Available Algorithms
//!
//! ## Grid
//! - **grid**: N x N cell model with barriers, endpoints and neighbour lists
//!
//! ## Pathfinding
//! - **pathfinding**: depth-first, breadth-first, Dijkstra and A* search
//!
//! ## Sorting
//! - **sorting**: selection, bubble, insertion, merge, quick and heap sort

pub mod grid;
pub mod pathfinding;
pub mod sorting;
