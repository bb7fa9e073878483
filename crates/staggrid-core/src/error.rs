//! The failure taxonomy shared by the lattice and every search engine.

use std::fmt;

use crate::geom::Coord;

/// Errors raised by lattice mutation and by the search engines.
///
/// None of these is retried internally: an operation either completes or
/// raises exactly one variant, with no partial result alongside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No path exists between start and end under the current wall
    /// configuration. Terminal for the requested run.
    NotConnected,
    /// Bellman-Ford relaxation did not converge after `height * width - 1`
    /// rounds. With the positive weights every exposed mutation path
    /// enforces, this is a defensive invariant check, not a reachable
    /// outcome.
    NegativeCycle,
    /// A coordinate outside `[0, height) x [0, width)` was passed in.
    IndexOutOfRange {
        at: Coord,
        height: i32,
        width: i32,
    },
    /// A bulk weight update whose shape differs from the lattice's.
    DimensionMismatch {
        expected: (i32, i32),
        found: (i32, i32),
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotConnected => write!(f, "no path: the start and end cells are not connected"),
            Self::NegativeCycle => write!(f, "relaxation did not converge: negative cycle"),
            Self::IndexOutOfRange { at, height, width } => {
                write!(f, "coordinate {at} outside {height}x{width} lattice")
            }
            Self::DimensionMismatch { expected, found } => {
                write!(
                    f,
                    "weight array is {}x{}, lattice is {}x{}",
                    found.0, found.1, expected.0, expected.1
                )
            }
        }
    }
}

impl std::error::Error for Error {}
