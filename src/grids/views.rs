//! Read-only value handles over a grid reference.
//!
//! None of these own state: each is a grid borrow plus an identifier,
//! recreated on demand. Mutation always goes through
//! [`MazeGrid::wall_set`] on the grid itself.

use crate::grids::{CellId, Direction, MazeGrid};

/// A cell handle: grid reference + coordinate.
#[derive(Clone, Copy)]
pub struct Cell<'a> {
    grid: &'a dyn MazeGrid,
    pub id: CellId,
}

impl<'a> Cell<'a> {
    pub fn new(grid: &'a dyn MazeGrid, id: CellId) -> Self {
        Self { grid, id }
    }

    /// All walls of this cell, one per topology direction.
    pub fn walls(&self) -> Vec<Wall<'a>> {
        self.grid
            .directions()
            .iter()
            .map(|&dir| Wall::new(self.grid, self.id, dir))
            .collect()
    }

    pub fn wall(&self, dir: Direction) -> Wall<'a> {
        Wall::new(self.grid, self.id, dir)
    }

    /// Whether this cell owns one of `side`'s boundary walls.
    pub fn is_on_side(&self, side: Direction) -> bool {
        self.grid
            .side_walls(side)
            .iter()
            .any(|&(cell, _)| cell == self.id)
    }

    /// This cell's boundary wall on `side`, if it has one.
    pub fn side_wall(&self, side: Direction) -> Option<Wall<'a>> {
        self.grid
            .side_walls(side)
            .into_iter()
            .find(|&(cell, _)| cell == self.id)
            .map(|(cell, dir)| Wall::new(self.grid, cell, dir))
    }
}

/// A wall handle: the boundary between a cell and its `dir`-neighbor, or
/// between the cell and the grid's exterior.
#[derive(Clone, Copy)]
pub struct Wall<'a> {
    grid: &'a dyn MazeGrid,
    pub cell: CellId,
    pub dir: Direction,
}

impl<'a> Wall<'a> {
    pub fn new(grid: &'a dyn MazeGrid, cell: CellId, dir: Direction) -> Self {
        Self { grid, cell, dir }
    }

    pub fn is_present(&self) -> bool {
        self.grid.wall_get(self.cell, self.dir)
    }

    /// The cell on the far side, if any.
    pub fn neighbor(&self) -> Option<CellId> {
        self.grid.neighbor(self.cell, self.dir)
    }

    /// The same wall seen from the far cell.
    pub fn opposite_side(&self) -> Option<(CellId, Direction)> {
        self.neighbor().map(|cell| (cell, self.dir.opposite()))
    }

    pub fn is_interior(&self) -> bool {
        self.neighbor().is_some()
    }

    pub fn is_exterior(&self) -> bool {
        self.neighbor().is_none()
    }
}

/// A named grid boundary.
#[derive(Clone, Copy)]
pub struct Side<'a> {
    grid: &'a dyn MazeGrid,
    pub id: Direction,
}

impl<'a> Side<'a> {
    pub fn new(grid: &'a dyn MazeGrid, id: Direction) -> Self {
        assert!(
            grid.side_ids().contains(&id),
            "direction {id:?} is not a side of this grid"
        );
        Self { grid, id }
    }

    /// Boundary walls in the topology's stable order.
    pub fn walls(&self) -> Vec<Wall<'a>> {
        self.grid
            .side_walls(self.id)
            .into_iter()
            .map(|(cell, dir)| Wall::new(self.grid, cell, dir))
            .collect()
    }

    /// Owning cells of the boundary walls, in the same order.
    pub fn cells(&self) -> Vec<CellId> {
        self.grid
            .side_walls(self.id)
            .into_iter()
            .map(|(cell, _)| cell)
            .collect()
    }
}
