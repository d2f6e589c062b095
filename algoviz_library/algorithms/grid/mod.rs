//! Square Grid Model for Pathfinding
//!
//! Fixed `N x N` board of cells with four-directional adjacency and a per-cell
//! status state machine. The grid owns every cell; neighbour lists and parent
//! links are plain indices into that storage.
//!
//! # Features
//!
//! - Exactly one Start and one End cell, relocatable at any time
//! - Barrier painting and random obstacle generation with a clearance zone
//! - Neighbour snapshot in clockwise order (North, East, South, West)
//! - Sticky visited/discovered flags that survive status redraws
//! - Parent links for path reconstruction
//!
//! # Example
//!
//! ```rust
//! use algoviz_library::algorithms::grid::{CellStatus, Grid, Position, Role};
//!
//! let mut grid = Grid::with_endpoints(5, Position::new(0, 0), Position::new(4, 4)).unwrap();
//!
//! // Wall off the middle column except the bottom row
//! for row in 0..4 {
//!     grid.paint(Position::new(row, 2), CellStatus::Barrier).unwrap();
//! }
//!
//! // Move the goal
//! assert!(grid.relocate(Role::End, Position::new(0, 4)).unwrap());
//! grid.compute_neighbors();
//! ```

use algoviz_core::error::{AlgovizError, AlgovizResult};
use rand::Rng;

/// Distance of the default endpoints from the board corners
const DEFAULT_ENDPOINT_OFFSET: usize = 6;

/// Largest accepted board side
pub const MAX_GRID_SIZE: usize = 2048;

/// Row/column coordinates of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// `|Δrow| + |Δcol|`
    pub fn manhattan(self, other: Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl From<[usize; 2]> for Position {
    fn from([row, col]: [usize; 2]) -> Self {
        Self { row, col }
    }
}

/// Exhaustive cell status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellStatus {
    Walkable,
    Barrier,
    Start,
    End,
    /// Discovered, waiting to be expanded
    Frontier,
    /// Expanded
    Visited,
    /// On the reconstructed route
    Path,
}

/// Endpoint roles held by exactly one cell each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Start,
    End,
}

impl Role {
    fn status(self) -> CellStatus {
        match self {
            Role::Start => CellStatus::Start,
            Role::End => CellStatus::End,
        }
    }
}

/// One traversable unit of the grid
#[derive(Debug, Clone)]
pub struct Cell {
    position: Position,
    status: CellStatus,
    neighbors: Vec<usize>,
    parent: Option<usize>,
    was_visited: bool,
    was_discovered: bool,
}

impl Cell {
    fn new(position: Position) -> Self {
        Self {
            position,
            status: CellStatus::Walkable,
            neighbors: Vec::with_capacity(4),
            parent: None,
            was_visited: false,
            was_discovered: false,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn status(&self) -> CellStatus {
        self.status
    }

    /// Non-barrier neighbours at the last `compute_neighbors`, clockwise from north
    pub fn neighbors(&self) -> &[usize] {
        &self.neighbors
    }

    /// Index of the cell this one was discovered from
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    /// Expanded during the current run, whatever its status shows now
    pub fn is_visited(&self) -> bool {
        self.status == CellStatus::Visited || self.was_visited
    }

    /// Awaiting expansion
    pub fn is_frontier(&self) -> bool {
        self.status == CellStatus::Frontier
    }

    /// Reached by the current run (Start included)
    pub fn was_discovered(&self) -> bool {
        self.was_discovered
    }

    pub fn is_barrier(&self) -> bool {
        self.status == CellStatus::Barrier
    }

    pub fn is_walkable(&self) -> bool {
        self.status == CellStatus::Walkable
    }

    pub fn is_endpoint(&self) -> bool {
        matches!(self.status, CellStatus::Start | CellStatus::End)
    }

    /// Apply a status transition
    ///
    /// Frontier only replaces Walkable; Visited sets the sticky flag and only
    /// recolours Walkable or Frontier cells.
    fn set_status(&mut self, status: CellStatus) {
        match status {
            CellStatus::Frontier => {
                if self.status == CellStatus::Walkable {
                    self.status = CellStatus::Frontier;
                }
            }
            CellStatus::Visited => {
                self.was_visited = true;
                if matches!(self.status, CellStatus::Walkable | CellStatus::Frontier) {
                    self.status = CellStatus::Visited;
                }
            }
            other => self.status = other,
        }
    }

    fn clear_search_state(&mut self) {
        self.parent = None;
        self.was_visited = false;
        self.was_discovered = false;
    }

    fn reset(&mut self) {
        self.clear_search_state();
        self.neighbors.clear();
        self.status = CellStatus::Walkable;
    }
}

/// Square board of cells
#[derive(Debug, Clone)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
    start: usize,
    end: usize,
}

impl Grid {
    /// Create a grid with the default endpoints
    ///
    /// Start sits six cells in from the top-left corner and End six cells in
    /// from the bottom-right, pulled inwards on small boards.
    pub fn new(size: usize) -> AlgovizResult<Self> {
        let (start, end) = Self::default_endpoints(size)?;
        Self::with_endpoints(size, start, end)
    }

    /// Create a grid with explicit Start and End
    pub fn with_endpoints(size: usize, start: Position, end: Position) -> AlgovizResult<Self> {
        if size < 2 {
            return Err(AlgovizError::invalid_input(format!(
                "grid needs at least 2 cells per side, got {}",
                size
            )));
        }
        let count = size
            .checked_mul(size)
            .filter(|_| size <= MAX_GRID_SIZE)
            .ok_or_else(|| {
                AlgovizError::invalid_input(format!(
                    "grid side {} exceeds the maximum of {}",
                    size, MAX_GRID_SIZE
                ))
            })?;
        if start == end {
            return Err(AlgovizError::invalid_input(
                "start and end must be different cells",
            ));
        }

        let cells = (0..count)
            .map(|i| Cell::new(Position::new(i / size, i % size)))
            .collect();
        let mut grid = Self {
            size,
            cells,
            start: 0,
            end: 0,
        };
        grid.start = grid.index_of(start)?;
        grid.end = grid.index_of(end)?;
        grid.cells[grid.start].status = CellStatus::Start;
        grid.cells[grid.end].status = CellStatus::End;
        Ok(grid)
    }

    /// Default endpoints for a board of `size`
    pub fn default_endpoints(size: usize) -> AlgovizResult<(Position, Position)> {
        if size < 2 {
            return Err(AlgovizError::invalid_input(format!(
                "grid needs at least 2 cells per side, got {}",
                size
            )));
        }
        let offset = DEFAULT_ENDPOINT_OFFSET.min(size / 4);
        let far = size - 1 - offset;
        Ok((Position::new(offset, offset), Position::new(far, far)))
    }

    /// Cells per side
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell by storage index; panics when out of range like slice indexing
    pub(crate) fn cell_at(&self, index: usize) -> &Cell {
        &self.cells[index]
    }

    pub fn cell(&self, position: Position) -> AlgovizResult<&Cell> {
        let index = self.index_of(position)?;
        Ok(&self.cells[index])
    }

    pub fn index_of(&self, position: Position) -> AlgovizResult<usize> {
        if position.row >= self.size || position.col >= self.size {
            return Err(AlgovizError::OutOfBounds {
                row: position.row,
                col: position.col,
                size: self.size,
            });
        }
        Ok(position.row * self.size + position.col)
    }

    pub fn position_of(&self, index: usize) -> Position {
        Position::new(index / self.size, index % self.size)
    }

    pub fn start(&self) -> Position {
        self.position_of(self.start)
    }

    pub fn end(&self) -> Position {
        self.position_of(self.end)
    }

    pub fn start_index(&self) -> usize {
        self.start
    }

    pub fn end_index(&self) -> usize {
        self.end
    }

    /// Number of cells currently showing `status`
    pub fn count(&self, status: CellStatus) -> usize {
        self.cells.iter().filter(|c| c.status == status).count()
    }

    /// Paint a Barrier or erase one back to Walkable
    ///
    /// Returns `false` without changing anything when the target is Start or
    /// End.
    pub fn paint(&mut self, position: Position, status: CellStatus) -> AlgovizResult<bool> {
        if !matches!(status, CellStatus::Barrier | CellStatus::Walkable) {
            return Err(AlgovizError::invalid_input(format!(
                "only Barrier or Walkable can be painted, got {:?}",
                status
            )));
        }
        let index = self.index_of(position)?;
        if self.cells[index].is_endpoint() {
            return Ok(false);
        }
        self.cells[index].status = status;
        Ok(true)
    }

    /// Move Start or End to `position`
    ///
    /// The previous holder reverts to Walkable. Placing one endpoint on top of
    /// the other is refused and reported as `Ok(false)`.
    pub fn relocate(&mut self, role: Role, position: Position) -> AlgovizResult<bool> {
        let index = self.index_of(position)?;
        let (current, other) = match role {
            Role::Start => (self.start, self.end),
            Role::End => (self.end, self.start),
        };
        if index == other {
            log::debug!(
                "refusing to place {:?} on the other endpoint at ({}, {})",
                role,
                position.row,
                position.col
            );
            return Ok(false);
        }

        self.cells[current].status = CellStatus::Walkable;
        self.cells[index].status = role.status();
        match role {
            Role::Start => self.start = index,
            Role::End => self.end = index,
        }
        Ok(true)
    }

    /// Rebuild every cell's neighbour list from the current barriers
    ///
    /// Searches treat these lists as a static snapshot, so call this after any
    /// barrier change and before a run.
    pub fn compute_neighbors(&mut self) {
        let size = self.size;
        for index in 0..self.cells.len() {
            let Position { row, col } = self.position_of(index);
            let mut neighbors = Vec::with_capacity(4);

            // clockwise: north, east, south, west
            if row > 0 {
                neighbors.push(index - size);
            }
            if col + 1 < size {
                neighbors.push(index + 1);
            }
            if row + 1 < size {
                neighbors.push(index + size);
            }
            if col > 0 {
                neighbors.push(index - 1);
            }
            neighbors.retain(|&n| !self.cells[n].is_barrier());

            self.cells[index].neighbors = neighbors;
        }
    }

    /// Reset every cell and restore the default endpoints
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.reset();
        }
        // size >= 2 is guaranteed by construction
        if let Ok((start, end)) = Self::default_endpoints(self.size) {
            self.start = start.row * self.size + start.col;
            self.end = end.row * self.size + end.col;
        }
        self.cells[self.start].status = CellStatus::Start;
        self.cells[self.end].status = CellStatus::End;
    }

    /// Erase the artefacts of a previous run, keeping barriers and endpoints
    pub fn reset_search(&mut self) {
        for cell in &mut self.cells {
            cell.clear_search_state();
            if matches!(
                cell.status,
                CellStatus::Frontier | CellStatus::Visited | CellStatus::Path
            ) {
                cell.status = CellStatus::Walkable;
            }
        }
    }

    /// Scatter random barriers, then clear a square around both endpoints
    ///
    /// Makes `density * cells` attempts at random cells, turning each Walkable
    /// hit into a Barrier. Every cell within `clearance` rows and columns of
    /// Start or End is then made Walkable again. A path is not guaranteed.
    ///
    /// Returns the number of barriers on the grid afterwards.
    pub fn generate_obstacles<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        density: f64,
        clearance: usize,
    ) -> usize {
        let attempts = (density.clamp(0.0, 1.0) * self.cells.len() as f64).round() as usize;
        for _ in 0..attempts {
            let index = rng.gen_range(0..self.cells.len());
            if self.cells[index].is_walkable() {
                self.cells[index].status = CellStatus::Barrier;
            }
        }

        for anchor in [self.start, self.end] {
            let Position { row, col } = self.position_of(anchor);
            let last = self.size - 1;
            let rows = row.saturating_sub(clearance)..=row.saturating_add(clearance).min(last);
            for r in rows {
                let cols = col.saturating_sub(clearance)..=col.saturating_add(clearance).min(last);
                for c in cols {
                    let cell = &mut self.cells[r * self.size + c];
                    if !cell.is_endpoint() {
                        cell.status = CellStatus::Walkable;
                    }
                }
            }
        }

        let barriers = self.count(CellStatus::Barrier);
        log::debug!(
            "generated obstacles: {} attempts, {} barriers on {}x{} grid",
            attempts,
            barriers,
            self.size,
            self.size
        );
        barriers
    }

    /// Route from Start to End following parent links
    ///
    /// `None` when End has not been reached in the current run.
    pub fn path_positions(&self) -> Option<Vec<Position>> {
        let mut route = vec![self.end()];
        let mut current = self.end;
        while current != self.start {
            current = self.cells[current].parent?;
            route.push(self.position_of(current));
            // parent links form a tree, anything longer is a stale cycle
            if route.len() > self.cells.len() {
                return None;
            }
        }
        route.reverse();
        Some(route)
    }

    /// Number of moves on the reconstructed route
    pub fn path_length(&self) -> Option<usize> {
        self.path_positions().map(|route| route.len() - 1)
    }

    pub(crate) fn set_status(&mut self, index: usize, status: CellStatus) {
        self.cells[index].set_status(status);
    }

    pub(crate) fn set_parent(&mut self, index: usize, parent: usize) {
        self.cells[index].parent = Some(parent);
    }

    pub(crate) fn mark_discovered(&mut self, index: usize) {
        self.cells[index].was_discovered = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn open_grid(size: usize) -> Grid {
        Grid::with_endpoints(size, Position::new(0, 0), Position::new(size - 1, size - 1))
            .unwrap()
    }

    #[test]
    fn test_default_endpoints() {
        let grid = Grid::new(80).unwrap();
        assert_eq!(grid.start(), Position::new(6, 6));
        assert_eq!(grid.end(), Position::new(73, 73));

        let small = Grid::new(3).unwrap();
        assert_eq!(small.start(), Position::new(0, 0));
        assert_eq!(small.end(), Position::new(2, 2));

        // pulled in to a quarter of the side on mid-sized boards
        let mid = Grid::new(12).unwrap();
        assert_eq!(mid.start(), Position::new(3, 3));
        assert_eq!(mid.end(), Position::new(8, 8));
    }

    #[test]
    fn test_invalid_construction() {
        assert!(matches!(Grid::new(1), Err(AlgovizError::InvalidInput(_))));
        assert!(matches!(
            Grid::with_endpoints(4, Position::new(1, 1), Position::new(1, 1)),
            Err(AlgovizError::InvalidInput(_))
        ));
        assert!(matches!(
            Grid::with_endpoints(4, Position::new(0, 0), Position::new(4, 0)),
            Err(AlgovizError::OutOfBounds { row: 4, col: 0, size: 4 })
        ));
    }

    #[test]
    fn test_cell_lookup_out_of_range_is_error() {
        let grid = open_grid(4);
        assert!(grid.cell(Position::new(3, 3)).is_ok());
        assert!(matches!(
            grid.cell(Position::new(0, 4)),
            Err(AlgovizError::OutOfBounds { row: 0, col: 4, size: 4 })
        ));
    }

    #[test]
    fn test_oversized_side_is_rejected() {
        for size in [MAX_GRID_SIZE + 1, usize::MAX / 2, usize::MAX] {
            assert!(matches!(Grid::new(size), Err(AlgovizError::InvalidInput(_))));
            assert!(matches!(
                Grid::with_endpoints(size, Position::new(0, 0), Position::new(1, 1)),
                Err(AlgovizError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_exactly_one_start_and_end() {
        let grid = Grid::new(10).unwrap();
        assert_eq!(grid.count(CellStatus::Start), 1);
        assert_eq!(grid.count(CellStatus::End), 1);
        assert_eq!(grid.count(CellStatus::Walkable), 98);
    }

    #[test]
    fn test_neighbors_clockwise_order() {
        let mut grid = open_grid(3);
        grid.compute_neighbors();

        let center = grid.index_of(Position::new(1, 1)).unwrap();
        let north = grid.index_of(Position::new(0, 1)).unwrap();
        let east = grid.index_of(Position::new(1, 2)).unwrap();
        let south = grid.index_of(Position::new(2, 1)).unwrap();
        let west = grid.index_of(Position::new(1, 0)).unwrap();
        assert_eq!(grid.cell_at(center).neighbors(), &[north, east, south, west]);

        // corner only has two neighbours
        assert_eq!(grid.cell(Position::new(0, 0)).unwrap().neighbors().len(), 2);
    }

    #[test]
    fn test_neighbors_skip_barriers() {
        let mut grid = open_grid(3);
        grid.paint(Position::new(0, 1), CellStatus::Barrier).unwrap();
        grid.paint(Position::new(1, 0), CellStatus::Barrier).unwrap();
        grid.compute_neighbors();

        let center = grid.cell(Position::new(1, 1)).unwrap();
        let east = grid.index_of(Position::new(1, 2)).unwrap();
        let south = grid.index_of(Position::new(2, 1)).unwrap();
        assert_eq!(center.neighbors(), &[east, south]);

        // recomputing after erasing restores the link
        grid.paint(Position::new(0, 1), CellStatus::Walkable).unwrap();
        grid.compute_neighbors();
        assert_eq!(grid.cell(Position::new(1, 1)).unwrap().neighbors().len(), 3);
    }

    #[test]
    fn test_frontier_never_downgrades() {
        let mut grid = open_grid(3);
        let start = grid.start_index();
        let barrier = grid.index_of(Position::new(1, 1)).unwrap();
        grid.paint(Position::new(1, 1), CellStatus::Barrier).unwrap();

        grid.set_status(start, CellStatus::Frontier);
        grid.set_status(barrier, CellStatus::Frontier);
        assert_eq!(grid.cell_at(start).status(), CellStatus::Start);
        assert_eq!(grid.cell_at(barrier).status(), CellStatus::Barrier);

        let plain = grid.index_of(Position::new(0, 1)).unwrap();
        grid.set_status(plain, CellStatus::Visited);
        grid.set_status(plain, CellStatus::Frontier);
        assert_eq!(grid.cell_at(plain).status(), CellStatus::Visited);
    }

    #[test]
    fn test_visited_flag_is_sticky() {
        let mut grid = open_grid(3);
        let start = grid.start_index();
        grid.set_status(start, CellStatus::Visited);
        // Start keeps its colour but remembers the expansion
        assert_eq!(grid.cell_at(start).status(), CellStatus::Start);
        assert!(grid.cell_at(start).is_visited());

        let cell = grid.index_of(Position::new(0, 1)).unwrap();
        grid.set_status(cell, CellStatus::Frontier);
        grid.set_status(cell, CellStatus::Visited);
        grid.set_status(cell, CellStatus::Path);
        assert_eq!(grid.cell_at(cell).status(), CellStatus::Path);
        assert!(grid.cell_at(cell).is_visited());
    }

    #[test]
    fn test_relocate_start() {
        let mut grid = open_grid(4);
        assert!(grid.relocate(Role::Start, Position::new(2, 1)).unwrap());
        assert_eq!(grid.start(), Position::new(2, 1));
        assert_eq!(
            grid.cell(Position::new(0, 0)).unwrap().status(),
            CellStatus::Walkable
        );
        assert_eq!(grid.count(CellStatus::Start), 1);
    }

    #[test]
    fn test_relocate_onto_other_endpoint_is_refused() {
        let mut grid = open_grid(4);
        let end = grid.end();
        assert!(!grid.relocate(Role::Start, end).unwrap());
        assert_eq!(grid.start(), Position::new(0, 0));
        assert_eq!(grid.count(CellStatus::Start), 1);
        assert_eq!(grid.count(CellStatus::End), 1);

        assert!(grid.relocate(Role::End, Position::new(9, 9)).is_err());
    }

    #[test]
    fn test_relocate_onto_barrier_replaces_it() {
        let mut grid = open_grid(4);
        grid.paint(Position::new(1, 1), CellStatus::Barrier).unwrap();
        assert!(grid.relocate(Role::End, Position::new(1, 1)).unwrap());
        assert_eq!(
            grid.cell(Position::new(1, 1)).unwrap().status(),
            CellStatus::End
        );
        assert_eq!(grid.count(CellStatus::Barrier), 0);
    }

    #[test]
    fn test_paint_skips_endpoints() {
        let mut grid = open_grid(4);
        assert!(!grid.paint(Position::new(0, 0), CellStatus::Barrier).unwrap());
        assert_eq!(grid.count(CellStatus::Start), 1);
        assert!(grid
            .paint(Position::new(1, 1), CellStatus::Visited)
            .is_err());
    }

    #[test]
    fn test_clear_restores_defaults() {
        let mut grid = Grid::new(24).unwrap();
        grid.relocate(Role::Start, Position::new(10, 3)).unwrap();
        grid.paint(Position::new(5, 5), CellStatus::Barrier).unwrap();
        grid.compute_neighbors();

        grid.clear();
        assert_eq!(grid.start(), Position::new(6, 6));
        assert_eq!(grid.end(), Position::new(17, 17));
        assert_eq!(grid.count(CellStatus::Barrier), 0);
        assert_eq!(grid.count(CellStatus::Start), 1);
        assert!(grid.cells().iter().all(|c| c.neighbors().is_empty()));
    }

    #[test]
    fn test_reset_search_keeps_barriers() {
        let mut grid = open_grid(4);
        grid.paint(Position::new(2, 2), CellStatus::Barrier).unwrap();
        let cell = grid.index_of(Position::new(0, 1)).unwrap();
        grid.set_status(cell, CellStatus::Frontier);
        grid.set_parent(cell, grid.start_index());
        grid.set_status(cell, CellStatus::Visited);

        grid.reset_search();
        let cell = grid.cell_at(cell);
        assert_eq!(cell.status(), CellStatus::Walkable);
        assert!(!cell.is_visited());
        assert_eq!(cell.parent(), None);
        assert_eq!(grid.count(CellStatus::Barrier), 1);
    }

    #[test]
    fn test_generate_obstacles_keeps_clearance() {
        let mut grid = Grid::new(40).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let barriers = grid.generate_obstacles(&mut rng, 0.5, 4);
        assert!(barriers > 0);
        assert_eq!(barriers, grid.count(CellStatus::Barrier));

        for anchor in [grid.start(), grid.end()] {
            for cell in grid.cells() {
                let p = cell.position();
                if p.row.abs_diff(anchor.row) <= 4 && p.col.abs_diff(anchor.col) <= 4 {
                    assert!(!cell.is_barrier(), "barrier inside clearance at {:?}", p);
                }
            }
        }
        assert_eq!(grid.count(CellStatus::Start), 1);
        assert_eq!(grid.count(CellStatus::End), 1);
    }

    #[test]
    fn test_zero_density_places_nothing() {
        let mut grid = Grid::new(10).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(grid.generate_obstacles(&mut rng, 0.0, 0), 0);
    }

    #[test]
    fn test_unbounded_clearance_clears_everything() {
        let mut grid = Grid::new(10).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(grid.generate_obstacles(&mut rng, 1.0, usize::MAX), 0);
        assert_eq!(grid.count(CellStatus::Walkable), 98);
    }

    #[test]
    fn test_path_positions_follow_parents() {
        let mut grid = open_grid(3);
        let a = grid.index_of(Position::new(0, 1)).unwrap();
        let b = grid.index_of(Position::new(0, 2)).unwrap();
        let c = grid.index_of(Position::new(1, 2)).unwrap();
        let end = grid.end_index();
        grid.set_parent(a, grid.start_index());
        grid.set_parent(b, a);
        grid.set_parent(c, b);
        grid.set_parent(end, c);

        let route = grid.path_positions().unwrap();
        assert_eq!(route.first(), Some(&Position::new(0, 0)));
        assert_eq!(route.last(), Some(&Position::new(2, 2)));
        assert_eq!(grid.path_length(), Some(4));
    }

    #[test]
    fn test_path_positions_none_when_unreached() {
        let grid = open_grid(3);
        assert_eq!(grid.path_positions(), None);
    }

    #[test]
    fn test_manhattan() {
        assert_eq!(Position::new(0, 0).manhattan(Position::new(4, 4)), 8);
        assert_eq!(Position::new(3, 1).manhattan(Position::new(1, 3)), 4);
    }
}
