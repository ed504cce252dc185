//! Recursive-style depth-first backtracking.
//!
//! Matches the carving distribution of the naive recursive formulation:
//! each cell shuffles its direction order once on entry and resumes that
//! order after returning from a child. The recursion itself is re-expressed
//! as an explicit frame stack, since call depth would otherwise reach the
//! cell count on serpentine paths.

use crate::generators::{Generator, Phase};
use crate::grids::views::Side;
use crate::grids::{CellId, Direction, MazeGrid};
use log::debug;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

struct Frame {
    cell: CellId,
    dirs: Vec<Direction>,
    cursor: usize,
}

/// Backtracking variant with both boundary walls carved up front.
///
/// Entrance and exit are chosen at random before traversal, so there is
/// no longest-path bookkeeping and no meaningful intermediate display;
/// hosts should use [`generate`](Generator::generate) only.
pub struct BacktrackingRecursive {
    grid: Box<dyn MazeGrid>,
    rng: ChaCha8Rng,
    phase: Phase,
    stack: Vec<Frame>,
    visited: Vec<bool>,
}

impl BacktrackingRecursive {
    pub fn new(grid: Box<dyn MazeGrid>, rng: ChaCha8Rng) -> Self {
        Self {
            grid,
            rng,
            phase: Phase::Unstarted,
            stack: Vec::new(),
            visited: Vec::new(),
        }
    }

    fn push_frame(&mut self, cell: CellId) {
        let mut dirs = self.grid.directions().to_vec();
        dirs.shuffle(&mut self.rng);
        self.stack.push(Frame {
            cell,
            dirs,
            cursor: 0,
        });
    }
}

impl Generator for BacktrackingRecursive {
    fn name(&self) -> &'static str {
        "backtracking_recursive"
    }

    fn supports_steps(&self) -> bool {
        false
    }

    fn init(&mut self) {
        assert_eq!(self.phase, Phase::Unstarted, "init called twice");
        let (entrance, exit) = {
            let grid = self.grid.as_ref();
            let entrance = Side::new(grid, Direction::North)
                .walls()
                .choose(&mut self.rng)
                .map(|w| (w.cell, w.dir))
                .expect("side has no walls");
            let exit = Side::new(grid, Direction::South)
                .walls()
                .choose(&mut self.rng)
                .map(|w| (w.cell, w.dir))
                .expect("side has no walls");
            (entrance, exit)
        };

        self.grid.wall_set(entrance.0, entrance.1, false);
        self.grid.wall_set(exit.0, exit.1, false);
        debug!("entrance {:?}, exit {:?}", entrance.0, exit.0);

        self.visited = vec![false; self.grid.width() * self.grid.height()];
        self.visited[self.grid.cell_index(entrance.0)] = true;
        self.push_frame(entrance.0);
        self.phase = Phase::Running;
    }

    /// Either descends into one unvisited neighbor or pops one exhausted
    /// frame, resuming the parent's direction order where it left off.
    fn step_generation(&mut self) {
        assert_eq!(self.phase, Phase::Running, "step outside a running generation");
        loop {
            let next = {
                let frame = self
                    .stack
                    .last_mut()
                    .expect("step after the frontier was exhausted");
                if frame.cursor < frame.dirs.len() {
                    frame.cursor += 1;
                    Some((frame.cell, frame.dirs[frame.cursor - 1]))
                } else {
                    None
                }
            };

            let (cell, dir) = match next {
                Some(pair) => pair,
                None => {
                    self.stack.pop();
                    return;
                }
            };

            if let Some(child) = self.grid.neighbor(cell, dir) {
                let index = self.grid.cell_index(child);
                if !self.visited[index] {
                    self.grid.wall_set(cell, dir, false);
                    self.visited[index] = true;
                    self.push_frame(child);
                    return;
                }
            }
        }
    }

    fn is_done(&self) -> bool {
        assert_eq!(self.phase, Phase::Running, "is_done outside a running generation");
        self.stack.is_empty()
    }

    // entrance and exit were carved in init
    fn finish(&mut self) {
        assert_eq!(self.phase, Phase::Running, "finish called twice or before init");
        self.phase = Phase::Done;
    }

    fn grid(&self) -> &dyn MazeGrid {
        self.grid.as_ref()
    }
}
