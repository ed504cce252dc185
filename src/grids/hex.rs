//! Hexagonal 6-neighbor grid over offset rows.
//!
//! Cells live on staggered rows: odd rows sit half a hex to the right of
//! even rows. A vertical step (N/S) therefore spans two rows, while the
//! four diagonal directions move one row and shift in x depending on the
//! starting row's parity.

use crate::error::MazeError;
use crate::grids::{CellId, Direction, MazeGrid};

const N: u8 = 1;
const S: u8 = 2;
const NE: u8 = 4;
const NW: u8 = 8;
const SE: u8 = 16;
const SW: u8 = 32;

const HEX_DIRECTIONS: [Direction; 6] = [
    Direction::North,
    Direction::South,
    Direction::NorthEast,
    Direction::NorthWest,
    Direction::SouthEast,
    Direction::SouthWest,
];

/// E and W are synthetic: no wall points east or west, but the staggered
/// column boundaries still form selectable sides.
const HEX_SIDES: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::East,
    Direction::West,
];

fn bit(dir: Direction) -> u8 {
    match dir {
        Direction::North => N,
        Direction::South => S,
        Direction::NorthEast => NE,
        Direction::NorthWest => NW,
        Direction::SouthEast => SE,
        Direction::SouthWest => SW,
        other => panic!("direction {other:?} is not valid for a hexagonal grid"),
    }
}

fn delta(dir: Direction, y: usize) -> (isize, isize) {
    let odd = y % 2 == 1;
    match dir {
        Direction::North => (0, -2),
        Direction::South => (0, 2),
        Direction::NorthEast => (if odd { 1 } else { 0 }, -1),
        Direction::NorthWest => (if odd { 0 } else { -1 }, -1),
        Direction::SouthEast => (if odd { 1 } else { 0 }, 1),
        Direction::SouthWest => (if odd { 0 } else { -1 }, 1),
        other => panic!("direction {other:?} is not valid for a hexagonal grid"),
    }
}

/// A `width x height` field of hexagonal cells, each starting with all six
/// walls present. `height` must exceed 1: a single row has no well-defined
/// parity structure.
pub struct HexGrid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl HexGrid {
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        if width == 0 || height <= 1 {
            return Err(MazeError::InvalidDimensions {
                width,
                height,
                reason: "hexagonal grids need width >= 1 and height > 1",
            });
        }
        Ok(Self {
            width,
            height,
            cells: vec![N | S | NE | NW | SE | SW; width * height],
        })
    }

    fn in_bounds(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Canvas column of a cell's left edge: odd rows shift right by half
    /// a hex (three characters).
    fn canvas_col(cell: CellId) -> usize {
        6 * cell.0 + 3 * (cell.1 % 2)
    }
}

impl MazeGrid for HexGrid {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn directions(&self) -> &'static [Direction] {
        &HEX_DIRECTIONS
    }

    fn side_ids(&self) -> &'static [Direction] {
        &HEX_SIDES
    }

    fn neighbor(&self, cell: CellId, dir: Direction) -> Option<CellId> {
        let (dx, dy) = delta(dir, cell.1);
        let nx = cell.0 as isize + dx;
        let ny = cell.1 as isize + dy;
        if self.in_bounds(nx, ny) {
            Some((nx as usize, ny as usize))
        } else {
            None
        }
    }

    fn wall_get(&self, cell: CellId, dir: Direction) -> bool {
        self.cells[self.cell_index(cell)] & bit(dir) != 0
    }

    fn wall_set(&mut self, cell: CellId, dir: Direction, present: bool) {
        let mask = bit(dir);
        let index = self.cell_index(cell);
        if present {
            self.cells[index] |= mask;
        } else {
            self.cells[index] &= !mask;
        }

        if let Some(other) = self.neighbor(cell, dir) {
            let mirror = bit(dir.opposite());
            let index = self.cell_index(other);
            if present {
                self.cells[index] |= mirror;
            } else {
                self.cells[index] &= !mirror;
            }
        }
    }

    fn side_walls(&self, side: Direction) -> Vec<(CellId, Direction)> {
        let mut out = Vec::new();
        match side {
            // the top two rows have no northern neighbor
            Direction::North => {
                for y in 0..2 {
                    for x in 0..self.width {
                        out.push(((x, y), Direction::North));
                    }
                }
            }
            Direction::South => {
                for y in [self.height - 2, self.height - 1] {
                    for x in 0..self.width {
                        out.push(((x, y), Direction::South));
                    }
                }
            }
            // odd rows overhang to the right, so their NE/SE walls face out
            Direction::East => {
                for y in (1..self.height).step_by(2) {
                    out.push(((self.width - 1, y), Direction::NorthEast));
                    out.push(((self.width - 1, y), Direction::SouthEast));
                }
            }
            Direction::West => {
                for y in (0..self.height).step_by(2) {
                    out.push(((0, y), Direction::NorthWest));
                    out.push(((0, y), Direction::SouthWest));
                }
            }
            other => panic!("direction {other:?} is not a hexagonal side"),
        }
        out
    }

    /// Honeycomb ASCII art. Every cell paints its present walls onto a
    /// shared character canvas:
    ///
    /// ```text
    ///  __          cap   (N)
    /// /  \         body  (NW, NE)
    /// \__/         floor (SW, S, SE)
    /// ```
    ///
    /// Shared walls land on the same canvas character from both cells,
    /// which the mirror invariant keeps consistent. The staggered last
    /// row falls out as a trailing half line.
    fn render(&self) -> String {
        let rows = self.height + 2;
        let cols = 6 * self.width + 2;
        let mut canvas = vec![vec![' '; cols]; rows];

        for cell in self.cells() {
            let cx = Self::canvas_col(cell);
            let cy = cell.1;
            if self.wall_get(cell, Direction::North) {
                canvas[cy][cx + 1] = '_';
                canvas[cy][cx + 2] = '_';
            }
            if self.wall_get(cell, Direction::NorthWest) {
                canvas[cy + 1][cx] = '/';
            }
            if self.wall_get(cell, Direction::NorthEast) {
                canvas[cy + 1][cx + 3] = '\\';
            }
            if self.wall_get(cell, Direction::SouthWest) {
                canvas[cy + 2][cx] = '\\';
            }
            if self.wall_get(cell, Direction::South) {
                canvas[cy + 2][cx + 1] = '_';
                canvas[cy + 2][cx + 2] = '_';
            }
            if self.wall_get(cell, Direction::SouthEast) {
                canvas[cy + 2][cx + 3] = '/';
            }
        }

        let mut out = String::new();
        for row in canvas {
            let line: String = row.into_iter().collect();
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out.truncate(out.trim_end().len());
        out
    }
}
