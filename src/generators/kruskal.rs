//! Randomized Kruskal spanning-tree carving.

use crate::generators::{Generator, Phase};
use crate::grids::views::Side;
use crate::grids::{CellId, Direction, MazeGrid};
use log::debug;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

/// Carves a uniform spanning structure by visiting every interior wall in
/// random order and removing it whenever its two cells belong to
/// different partitions.
///
/// Partition merging is a linear relabel over all cells, O(n) per merge.
/// Fine at terminal-display sizes; a union-find would be the upgrade if
/// grids ever grow by orders of magnitude.
pub struct Kruskal {
    grid: Box<dyn MazeGrid>,
    rng: ChaCha8Rng,
    phase: Phase,
    /// Shuffled interior walls still to consider, consumed from the back.
    candidates: Vec<(CellId, Direction)>,
    /// Partition label per cell (row-major); cells sharing a label are
    /// already connected.
    labels: Vec<CellId>,
}

impl Kruskal {
    pub fn new(grid: Box<dyn MazeGrid>, rng: ChaCha8Rng) -> Self {
        Self {
            grid,
            rng,
            phase: Phase::Unstarted,
            candidates: Vec::new(),
            labels: Vec::new(),
        }
    }

    /// Interior walls carved so far; the spanning-tree property says this
    /// reaches `cells - 1` exactly.
    pub fn carved_walls(&self) -> usize {
        let grid = self.grid.as_ref();
        grid.interior_walls()
            .into_iter()
            .filter(|&(cell, dir)| !grid.wall_get(cell, dir))
            .count()
    }
}

impl Generator for Kruskal {
    fn name(&self) -> &'static str {
        "kruskal"
    }

    fn init(&mut self) {
        assert_eq!(self.phase, Phase::Unstarted, "init called twice");

        // entrance and exit are independent of the wall pass; carve both
        // now on opposite random sides
        let (entrance, exit) = {
            let grid = self.grid.as_ref();
            let &side = grid
                .side_ids()
                .choose(&mut self.rng)
                .expect("grid has no sides");
            let entrance = Side::new(grid, side)
                .walls()
                .choose(&mut self.rng)
                .map(|w| (w.cell, w.dir))
                .expect("side has no walls");
            let exit = Side::new(grid, side.opposite())
                .walls()
                .choose(&mut self.rng)
                .map(|w| (w.cell, w.dir))
                .expect("side has no walls");
            (entrance, exit)
        };
        self.grid.wall_set(entrance.0, entrance.1, false);
        self.grid.wall_set(exit.0, exit.1, false);
        debug!("entrance {:?}, exit {:?}", entrance.0, exit.0);

        self.candidates = self.grid.interior_walls();
        self.candidates.shuffle(&mut self.rng);
        self.labels = self.grid.cells();
        self.phase = Phase::Running;
    }

    fn step_generation(&mut self) {
        assert_eq!(self.phase, Phase::Running, "step outside a running generation");
        let (cell, dir) = self
            .candidates
            .pop()
            .expect("step after the candidate list was exhausted");
        let other = self
            .grid
            .neighbor(cell, dir)
            .expect("interior wall has a neighbor");

        let from = self.labels[self.grid.cell_index(cell)];
        let into = self.labels[self.grid.cell_index(other)];
        if from == into {
            return;
        }

        self.grid.wall_set(cell, dir, false);
        for label in self.labels.iter_mut() {
            if *label == from {
                *label = into;
            }
        }
    }

    fn is_done(&self) -> bool {
        assert_eq!(self.phase, Phase::Running, "is_done outside a running generation");
        self.candidates.is_empty()
    }

    // nothing left to do: entrance and exit were carved in init
    fn finish(&mut self) {
        assert_eq!(self.phase, Phase::Running, "finish called twice or before init");
        self.phase = Phase::Done;
    }

    fn grid(&self) -> &dyn MazeGrid {
        self.grid.as_ref()
    }
}
