//! Grid topologies: cells connected by removable walls.
//!
//! A maze is a grid whose cells start fully enclosed; generation algorithms
//! carve passages by removing walls. The [`MazeGrid`] trait is the capability
//! set every topology satisfies; [`rect::RectGrid`] and [`hex::HexGrid`] are
//! the two concrete geometries.

pub mod hex;
pub mod rect;
pub mod views;

/// A cell coordinate: `(x, y)` with `x` advancing along a row.
pub type CellId = (usize, usize);

/// Compass directions across both topologies.
///
/// Rectangular grids use the four cardinal members; hexagonal grids use
/// N/S plus the four diagonals, with E/W appearing only as synthetic side
/// identifiers for boundary selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    /// The fixed involution over the direction set: N<->S, E<->W,
    /// NE<->SW, NW<->SE.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::NorthEast => Direction::SouthWest,
            Direction::NorthWest => Direction::SouthEast,
            Direction::SouthEast => Direction::NorthWest,
            Direction::SouthWest => Direction::NorthEast,
        }
    }
}

impl std::ops::Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Self::Output {
        self.opposite()
    }
}

/// The capability set every grid topology satisfies.
///
/// Implementations own a flat array of per-cell wall bitmasks (bit set =
/// wall present; all bits set at construction = fully enclosed) and are
/// mutated only through [`wall_set`](MazeGrid::wall_set), which keeps the
/// two redundant copies of each interior wall bit in agreement.
///
/// Passing a direction outside [`directions`](MazeGrid::directions) to a
/// wall operation is a programmer error and panics.
pub trait MazeGrid {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// The topology's direction set (walls per cell).
    fn directions(&self) -> &'static [Direction];

    /// Named boundaries usable for entrance/exit selection.
    fn side_ids(&self) -> &'static [Direction];

    /// Adjacent cell in `dir`, or `None` at the grid boundary.
    fn neighbor(&self, cell: CellId, dir: Direction) -> Option<CellId>;

    /// Whether the wall on `cell`'s `dir` side is present.
    fn wall_get(&self, cell: CellId, dir: Direction) -> bool;

    /// Set or clear a wall bit, mirroring onto the neighbor's opposite
    /// bit for interior walls. Boundary walls have no mirror; the
    /// out-of-bounds side is skipped silently.
    fn wall_set(&mut self, cell: CellId, dir: Direction, present: bool);

    /// Boundary walls of `side`, in a stable order.
    fn side_walls(&self, side: Direction) -> Vec<(CellId, Direction)>;

    /// Box-drawing / ASCII-art text representation. Pure.
    fn render(&self) -> String;

    /// All cells in row-major order.
    fn cells(&self) -> Vec<CellId> {
        let mut out = Vec::with_capacity(self.width() * self.height());
        for y in 0..self.height() {
            for x in 0..self.width() {
                out.push((x, y));
            }
        }
        out
    }

    /// Row-major rank of a cell, for flat visited/label storage.
    fn cell_index(&self, cell: CellId) -> usize {
        cell.1 * self.width() + cell.0
    }

    /// Every interior wall exactly once, keyed from its lower row-major
    /// endpoint.
    fn interior_walls(&self) -> Vec<(CellId, Direction)> {
        let mut out = Vec::new();
        for cell in self.cells() {
            for &dir in self.directions() {
                if let Some(other) = self.neighbor(cell, dir) {
                    if self.cell_index(other) > self.cell_index(cell) {
                        out.push((cell, dir));
                    }
                }
            }
        }
        out
    }
}
