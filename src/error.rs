//! Error types for grid construction and registry lookups.

use std::fmt;

/// Errors surfaced by grid construction and the name registries.
///
/// Programmer errors (invalid direction for a topology, protocol misuse)
/// are assertions, not variants here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// No generation algorithm registered under this name.
    UnknownAlgorithm(String),
    /// No grid type registered under this name.
    UnknownGrid(String),
    /// The requested dimensions cannot form a valid grid.
    InvalidDimensions {
        width: usize,
        height: usize,
        /// What the topology requires of its dimensions.
        reason: &'static str,
    },
    /// The algorithm produces no meaningful intermediate snapshots.
    ProgressUnsupported(String),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownAlgorithm(name) => {
                write!(f, "unknown algorithm {name:?}")
            }
            Self::UnknownGrid(name) => {
                write!(f, "unknown grid type {name:?}")
            }
            Self::InvalidDimensions {
                width,
                height,
                reason,
            } => {
                write!(f, "invalid dimensions {width}x{height}: {reason}")
            }
            Self::ProgressUnsupported(name) => {
                write!(f, "algorithm {name:?} does not support step-by-step generation")
            }
        }
    }
}

impl std::error::Error for MazeError {}
