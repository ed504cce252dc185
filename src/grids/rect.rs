//! Rectangular 4-neighbor grid.

use crate::error::MazeError;
use crate::grids::{CellId, Direction, MazeGrid};

const N: u8 = 1;
const S: u8 = 2;
const E: u8 = 4;
const W: u8 = 8;

const RECT_DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::East,
    Direction::West,
];

/// Box-drawing glyph per vertex, indexed by the 4-bit pattern of wall
/// strokes meeting there (N=1, S=2, E=4, W=8).
const WALL_CHARS: [char; 16] = [
    ' ', '╵', '╷', '│', '╶', '╰', '╭', '├', '╴', '╯', '╮', '┤', '─', '┴', '┬', '┼',
];

fn bit(dir: Direction) -> u8 {
    match dir {
        Direction::North => N,
        Direction::South => S,
        Direction::East => E,
        Direction::West => W,
        other => panic!("direction {other:?} is not valid for a rectangular grid"),
    }
}

fn delta(dir: Direction) -> (isize, isize) {
    match dir {
        Direction::North => (0, -1),
        Direction::South => (0, 1),
        Direction::East => (1, 0),
        Direction::West => (-1, 0),
        other => panic!("direction {other:?} is not valid for a rectangular grid"),
    }
}

/// A `width x height` grid of square cells, each starting with all four
/// walls present.
pub struct RectGrid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl RectGrid {
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimensions {
                width,
                height,
                reason: "rectangular grids need at least one cell per axis",
            });
        }
        Ok(Self {
            width,
            height,
            cells: vec![N | S | E | W; width * height],
        })
    }

    fn in_bounds(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Wall bit of the cell at a possibly out-of-bounds coordinate;
    /// out of bounds reads as "no wall".
    fn wall_bit_at(&self, x: isize, y: isize, mask: u8) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        self.cells[y as usize * self.width + x as usize] & mask != 0
    }
}

impl MazeGrid for RectGrid {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn directions(&self) -> &'static [Direction] {
        &RECT_DIRECTIONS
    }

    fn side_ids(&self) -> &'static [Direction] {
        &RECT_DIRECTIONS
    }

    fn neighbor(&self, cell: CellId, dir: Direction) -> Option<CellId> {
        let (dx, dy) = delta(dir);
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
        match side {
            Direction::North | Direction::South => {
                let y = if side == Direction::North {
                    0
                } else {
                    self.height - 1
                };
                (0..self.width).map(|x| ((x, y), side)).collect()
            }
            Direction::East | Direction::West => {
                let x = if side == Direction::West {
                    0
                } else {
                    self.width - 1
                };
                (0..self.height).map(|y| ((x, y), side)).collect()
            }
            other => panic!("direction {other:?} is not a rectangular side"),
        }
    }

    /// One glyph per lattice vertex: each of the four cells meeting at a
    /// vertex contributes the strokes of its two walls that touch it.
    fn render(&self) -> String {
        let mut out = String::new();
        for vy in 0..=self.height as isize {
            for vx in 0..=self.width as isize {
                let (x, y) = (vx - 1, vy - 1);
                let mut strokes = 0u8;

                // up-left cell
                if self.wall_bit_at(x, y, E) {
                    strokes |= N;
                }
                if self.wall_bit_at(x, y, S) {
                    strokes |= W;
                }
                // up-right cell
                if self.wall_bit_at(x + 1, y, W) {
                    strokes |= N;
                }
                if self.wall_bit_at(x + 1, y, S) {
                    strokes |= E;
                }
                // down-left cell
                if self.wall_bit_at(x, y + 1, E) {
                    strokes |= S;
                }
                if self.wall_bit_at(x, y + 1, N) {
                    strokes |= W;
                }
                // down-right cell
                if self.wall_bit_at(x + 1, y + 1, W) {
                    strokes |= S;
                }
                if self.wall_bit_at(x + 1, y + 1, N) {
                    strokes |= E;
                }

                out.push(WALL_CHARS[strokes as usize]);
            }
            out.push('\n');
        }
        out.pop();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_dimensions() {
        assert!(matches!(
            RectGrid::new(0, 3),
            Err(MazeError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            RectGrid::new(3, 0),
            Err(MazeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn starts_fully_enclosed() {
        let grid = RectGrid::new(3, 2).unwrap();
        for cell in grid.cells() {
            for &dir in grid.directions() {
                assert!(grid.wall_get(cell, dir));
            }
        }
    }

    #[test]
    fn wall_set_mirrors_onto_neighbor() {
        let mut grid = RectGrid::new(3, 3).unwrap();
        grid.wall_set((1, 1), Direction::East, false);
        assert!(!grid.wall_get((1, 1), Direction::East));
        assert!(!grid.wall_get((2, 1), Direction::West));

        grid.wall_set((2, 1), Direction::West, true);
        assert!(grid.wall_get((1, 1), Direction::East));
    }

    #[test]
    fn boundary_wall_has_no_mirror() {
        let mut grid = RectGrid::new(2, 2).unwrap();
        // must not panic; there is no cell above row 0
        grid.wall_set((0, 0), Direction::North, false);
        assert!(!grid.wall_get((0, 0), Direction::North));
    }

    #[test]
    #[should_panic(expected = "not valid for a rectangular grid")]
    fn foreign_direction_panics() {
        let grid = RectGrid::new(2, 2).unwrap();
        grid.wall_get((0, 0), Direction::NorthEast);
    }

    #[test]
    fn neighbor_respects_bounds() {
        let grid = RectGrid::new(2, 2).unwrap();
        assert_eq!(grid.neighbor((0, 0), Direction::East), Some((1, 0)));
        assert_eq!(grid.neighbor((0, 0), Direction::South), Some((0, 1)));
        assert_eq!(grid.neighbor((0, 0), Direction::North), None);
        assert_eq!(grid.neighbor((1, 1), Direction::East), None);
    }

    #[test]
    fn side_walls_are_ordered() {
        let grid = RectGrid::new(3, 2).unwrap();
        assert_eq!(
            grid.side_walls(Direction::North),
            vec![
                ((0, 0), Direction::North),
                ((1, 0), Direction::North),
                ((2, 0), Direction::North),
            ]
        );
        assert_eq!(
            grid.side_walls(Direction::West),
            vec![((0, 0), Direction::West), ((0, 1), Direction::West)]
        );
    }

    #[test]
    fn interior_wall_count() {
        // (w-1)*h vertical + w*(h-1) horizontal
        let grid = RectGrid::new(5, 5).unwrap();
        assert_eq!(grid.interior_walls().len(), 40);
        let grid = RectGrid::new(1, 1).unwrap();
        assert!(grid.interior_walls().is_empty());
    }

    #[test]
    fn interior_walls_are_unique() {
        let grid = RectGrid::new(4, 3).unwrap();
        let walls = grid.interior_walls();
        for (i, &(cell, dir)) in walls.iter().enumerate() {
            let other = grid.neighbor(cell, dir).unwrap();
            for &(c2, d2) in &walls[i + 1..] {
                let o2 = grid.neighbor(c2, d2).unwrap();
                assert!(
                    !(cell == c2 && dir == d2) && !(cell == o2 && other == c2),
                    "wall listed twice"
                );
            }
        }
    }

    #[test]
    fn render_fully_walled_single_cell() {
        let grid = RectGrid::new(1, 1).unwrap();
        assert_eq!(grid.render(), "╭╮\n╰╯");
    }

    #[test]
    fn render_single_cell_with_north_south_open() {
        let mut grid = RectGrid::new(1, 1).unwrap();
        grid.wall_set((0, 0), Direction::North, false);
        grid.wall_set((0, 0), Direction::South, false);
        assert_eq!(grid.render(), "╷╷\n╵╵");
    }

    #[test]
    fn render_dimensions() {
        let grid = RectGrid::new(5, 3).unwrap();
        let text = grid.render();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        for line in lines {
            assert_eq!(line.chars().count(), 6);
        }
    }
}
