//! Cell identity: [`Coord`].
//!
//! A lattice cell's identity is its `(row, col)` pair alone; the mutable
//! payload (weight, visitation flag) lives in the [`Lattice`](crate::Lattice)
//! and is only reachable through it.

use std::fmt;
use std::str::FromStr;

/// A 2D lattice coordinate. Row grows down, column grows right.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// Whether the cell sits on an odd column.
    ///
    /// Column parity decides which diagonal neighbors a cell has under the
    /// offset adjacency rule (see [`Lattice::neighbors`](crate::Lattice::neighbors)).
    #[inline]
    pub const fn odd_column(self) -> bool {
        self.col % 2 != 0
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Coord {
    /// Renders as `(row, col)`. This is also the string key used when a
    /// result map is serialized for a hosting layer.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

/// Error parsing a [`Coord`] from its `(row, col)` string form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCoordError {
    input: String,
}

impl fmt::Display for ParseCoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid coordinate \u{201c}{}\u{201d}", self.input)
    }
}

impl std::error::Error for ParseCoordError {}

impl FromStr for Coord {
    type Err = ParseCoordError;

    /// Parse the `Display` form back: `(row, col)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCoordError {
            input: s.to_string(),
        };
        let inner = s
            .trim()
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(err)?;
        let (row, col) = inner.split_once(',').ok_or_else(err)?;
        Ok(Self {
            row: row.trim().parse().map_err(|_| err())?,
            col: col.trim().parse().map_err(|_| err())?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_and_ordering() {
        let a = Coord::new(1, 2);
        let b = Coord::new(1, 2);
        let c = Coord::new(2, 0);
        assert_eq!(a, b);
        assert_ne!(a, c);
        // Row-major ordering.
        assert!(a < c);
        assert!(Coord::new(1, 3) < Coord::new(2, 0));
    }

    #[test]
    fn column_parity() {
        assert!(!Coord::new(5, 0).odd_column());
        assert!(Coord::new(0, 3).odd_column());
    }

    #[test]
    fn display_round_trip() {
        let c = Coord::new(3, 17);
        assert_eq!(c.to_string(), "(3, 17)");
        assert_eq!("(3, 17)".parse::<Coord>().unwrap(), c);
        // Whitespace variations accepted.
        assert_eq!(" (3,17) ".parse::<Coord>().unwrap(), c);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("3, 17".parse::<Coord>().is_err());
        assert!("(3; 17)".parse::<Coord>().is_err());
        assert!("(a, b)".parse::<Coord>().is_err());
        assert!("".parse::<Coord>().is_err());
    }
}
