//! Procedural maze carving over rectangular and hexagonal grids.
//!
//! A [`MazeGrid`] starts fully enclosed; a [`Generator`] carves a
//! connected, acyclic passage structure with one entrance and one exit,
//! either in one shot ([`Generator::generate`]) or snapshot by snapshot
//! ([`Steps`]). Algorithms and grid types are looked up by name through
//! [`make_generator`] and [`make_grid`].

pub mod error;
pub mod generators;
pub mod grids;

pub use error::MazeError;
pub use generators::{Generator, Steps};
pub use grids::{CellId, Direction, MazeGrid};

use generators::backtracking::Backtracking;
use generators::backtracking_recursive::BacktrackingRecursive;
use generators::kruskal::Kruskal;
use grids::hex::HexGrid;
use grids::rect::RectGrid;
use rand_chacha::ChaCha8Rng;

/// Registered grid type names, in display order.
pub const GRID_NAMES: &[&str] = &["rect", "hex"];

/// Registered algorithm names, in display order.
pub const ALGORITHM_NAMES: &[&str] = &["backtracking", "backtracking_recursive", "kruskal"];

/// Construct a grid by registry name.
pub fn make_grid(name: &str, width: usize, height: usize) -> Result<Box<dyn MazeGrid>, MazeError> {
    match name {
        "rect" => Ok(Box::new(RectGrid::new(width, height)?)),
        "hex" => Ok(Box::new(HexGrid::new(width, height)?)),
        other => Err(MazeError::UnknownGrid(other.to_string())),
    }
}

/// Construct a generator by registry name over `grid`, drawing all
/// randomness from `rng`.
pub fn make_generator(
    name: &str,
    grid: Box<dyn MazeGrid>,
    rng: ChaCha8Rng,
) -> Result<Box<dyn Generator>, MazeError> {
    match name {
        "backtracking" => Ok(Box::new(Backtracking::new(grid, rng))),
        "backtracking_recursive" => Ok(Box::new(BacktrackingRecursive::new(grid, rng))),
        "kruskal" => Ok(Box::new(Kruskal::new(grid, rng))),
        other => Err(MazeError::UnknownAlgorithm(other.to_string())),
    }
}
