//! Maze generation algorithms behind a common stepwise protocol.
//!
//! A generator owns its grid and its random source exclusively. The
//! protocol is a small state machine: `init` once, `step_generation`
//! until `is_done`, `finish` once. [`Generator::generate`] composes the
//! whole run; [`Steps`] exposes it one snapshot at a time for progressive
//! display.

pub mod backtracking;
pub mod backtracking_recursive;
pub mod kruskal;

use crate::error::MazeError;
use crate::grids::MazeGrid;

/// Protocol phase, used by every algorithm to fail fast on misuse
/// (double init, stepping a finished generator, double finish).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Unstarted,
    Running,
    Done,
}

pub trait Generator {
    /// Registry name of the algorithm.
    fn name(&self) -> &'static str;

    /// Allocate algorithm state and carve the entrance. Callable once.
    fn init(&mut self);

    /// One unit of carving work. Only valid while running.
    fn step_generation(&mut self);

    /// Whether the carving frontier is exhausted. Only valid while
    /// running.
    fn is_done(&self) -> bool;

    /// End-of-run cleanup (typically carving the exit). Callable once.
    fn finish(&mut self);

    /// The live grid. During a run this is the current intermediate
    /// state; no other mutator exists, so observing it between steps is
    /// equivalent to a frozen snapshot.
    fn grid(&self) -> &dyn MazeGrid;

    /// Whether intermediate snapshots are meaningful for this algorithm.
    fn supports_steps(&self) -> bool {
        true
    }

    /// Run to completion and return the finished maze.
    fn generate(&mut self) -> &dyn MazeGrid {
        self.init();
        while !self.is_done() {
            self.step_generation();
        }
        self.finish();
        self.grid()
    }
}

/// A finite, non-restartable sequence of generation snapshots.
///
/// Each [`advance`](Steps::advance) call performs one unit of work and
/// returns the grid's current state; the call that observes an exhausted
/// frontier runs `finish` and yields the completed maze, after which
/// `advance` returns `None`. Dropping it mid-run abandons the maze in a
/// structurally valid but generally unconnected state.
pub struct Steps {
    gen: Box<dyn Generator>,
    started: bool,
    done: bool,
}

impl Steps {
    pub fn new(gen: Box<dyn Generator>) -> Result<Self, MazeError> {
        if !gen.supports_steps() {
            return Err(MazeError::ProgressUnsupported(gen.name().to_string()));
        }
        Ok(Self {
            gen,
            started: false,
            done: false,
        })
    }

    /// Advance one step; `None` once the final snapshot has been yielded.
    pub fn advance(&mut self) -> Option<&dyn MazeGrid> {
        if self.done {
            return None;
        }
        if !self.started {
            self.gen.init();
            self.started = true;
        }
        if self.gen.is_done() {
            self.gen.finish();
            self.done = true;
        } else {
            self.gen.step_generation();
        }
        Some(self.gen.grid())
    }

    pub fn grid(&self) -> &dyn MazeGrid {
        self.gen.grid()
    }
}
