//! Iterative depth-first backtracking.

use crate::generators::{Generator, Phase};
use crate::grids::views::{Cell, Side};
use crate::grids::{CellId, Direction, MazeGrid};
use log::debug;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

/// Depth-first carver with an explicit stack.
///
/// The entrance is a random wall on the north side. While carving, any
/// visit to an exit-side cell at a greater stack depth than seen before
/// becomes the new exit candidate. Depth here is search-stack depth, not
/// graph distance: the original favors a far-away exit cheaply rather
/// than computing true distances.
pub struct Backtracking {
    grid: Box<dyn MazeGrid>,
    rng: ChaCha8Rng,
    phase: Phase,
    stack: Vec<CellId>,
    visited: Vec<bool>,
    exit_side: Direction,
    exit_wall: Option<(CellId, Direction)>,
    best_depth: usize,
}

impl Backtracking {
    pub fn new(grid: Box<dyn MazeGrid>, rng: ChaCha8Rng) -> Self {
        Self {
            grid,
            rng,
            phase: Phase::Unstarted,
            stack: Vec::new(),
            visited: Vec::new(),
            exit_side: Direction::South,
            exit_wall: None,
            best_depth: 0,
        }
    }
}

impl Generator for Backtracking {
    fn name(&self) -> &'static str {
        "backtracking"
    }

    fn init(&mut self) {
        assert_eq!(self.phase, Phase::Unstarted, "init called twice");
        let entrance_side = Direction::North;
        self.exit_side = entrance_side.opposite();

        let (entrance, provisional_exit) = {
            let grid = self.grid.as_ref();
            let entrance = Side::new(grid, entrance_side)
                .walls()
                .choose(&mut self.rng)
                .map(|w| (w.cell, w.dir))
                .expect("side has no walls");
            let exit = Side::new(grid, self.exit_side)
                .walls()
                .choose(&mut self.rng)
                .map(|w| (w.cell, w.dir))
                .expect("side has no walls");
            (entrance, exit)
        };

        self.grid.wall_set(entrance.0, entrance.1, false);
        debug!("entrance at {:?} toward {:?}", entrance.0, entrance.1);
        self.exit_wall = Some(provisional_exit);
        self.visited = vec![false; self.grid.width() * self.grid.height()];
        self.visited[self.grid.cell_index(entrance.0)] = true;
        self.stack.push(entrance.0);
        self.phase = Phase::Running;
    }

    fn step_generation(&mut self) {
        assert_eq!(self.phase, Phase::Running, "step outside a running generation");
        let &cell = self
            .stack
            .last()
            .expect("step after the frontier was exhausted");

        if self.stack.len() > self.best_depth {
            let candidate = Cell::new(self.grid.as_ref(), cell)
                .side_wall(self.exit_side)
                .map(|w| (w.cell, w.dir));
            if candidate.is_some() {
                self.best_depth = self.stack.len();
                self.exit_wall = candidate;
            }
        }

        let mut dirs: Vec<Direction> = self.grid.directions().to_vec();
        dirs.shuffle(&mut self.rng);
        for dir in dirs {
            if let Some(next) = self.grid.neighbor(cell, dir) {
                let index = self.grid.cell_index(next);
                if !self.visited[index] {
                    self.grid.wall_set(cell, dir, false);
                    self.visited[index] = true;
                    self.stack.push(next);
                    return;
                }
            }
        }
        self.stack.pop();
    }

    fn is_done(&self) -> bool {
        assert_eq!(self.phase, Phase::Running, "is_done outside a running generation");
        self.stack.is_empty()
    }

    fn finish(&mut self) {
        assert_eq!(self.phase, Phase::Running, "finish called twice or before init");
        let (cell, dir) = self.exit_wall.expect("exit wall chosen during init");
        self.grid.wall_set(cell, dir, false);
        debug!("exit at {cell:?} toward {dir:?}");
        self.phase = Phase::Done;
    }

    fn grid(&self) -> &dyn MazeGrid {
        self.grid.as_ref()
    }
}
