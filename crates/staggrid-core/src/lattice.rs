//! The weighted lattice: cell storage, offset adjacency, visitation state.
//!
//! A [`Lattice`] is a rectangular array of weighted cells addressed by
//! [`Coord`], with an adjacency rule that approximates a hexagonal grid on
//! staggered rectangular storage: besides its four direct sides, a cell has
//! up to two diagonal neighbors, picked by the parity of its own column.
//! Search engines walk the lattice through [`Lattice::neighbors`] and own
//! the per-run visitation flags; weights never change during a run.

use std::fmt;

use crate::error::Error;
use crate::geom::Coord;

/// A rectangular lattice of weighted cells.
///
/// Cell identity is the [`Coord`]; the weight and the transient visitation
/// flag are payload stored here, row-major. The cell collection never
/// changes size after construction — resizing means building a new
/// `Lattice` and discarding the old one.
#[derive(Debug, Clone)]
pub struct Lattice {
    height: i32,
    width: i32,
    weights: Vec<i32>,
    visited: Vec<bool>,
}

impl Lattice {
    /// Weight sentinel marking an impassable cell.
    ///
    /// Every engine treats a cell of this weight as a wall; it is never
    /// entered and never relaxed.
    pub const WALL: i32 = 10_000;

    /// Create a lattice with every cell at weight 1 and unvisited.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is below 2. Range validation for a
    /// hosting layer (upper bounds and the like) belongs to that layer.
    pub fn new(height: i32, width: i32) -> Self {
        assert!(
            height >= 2 && width >= 2,
            "lattice dimensions must be at least 2x2, got {height}x{width}"
        );
        let len = (height * width) as usize;
        Self {
            height,
            width,
            weights: vec![1; len],
            visited: vec![false; len],
        }
    }

    /// Build a lattice from a 2D weight array, one inner `Vec` per row.
    ///
    /// Fails with [`Error::DimensionMismatch`] when the rows are ragged or
    /// either dimension is below 2 (the `expected` field then carries the
    /// 2x2 minimum).
    pub fn from_weights(rows: Vec<Vec<i32>>) -> Result<Self, Error> {
        let height = rows.len() as i32;
        let width = rows.first().map_or(0, |r| r.len()) as i32;
        if height < 2 || width < 2 {
            return Err(Error::DimensionMismatch {
                expected: (2, 2),
                found: (height, width),
            });
        }
        if let Some(bad) = rows.iter().find(|r| r.len() as i32 != width) {
            return Err(Error::DimensionMismatch {
                expected: (height, width),
                found: (height, bad.len() as i32),
            });
        }
        let weights: Vec<i32> = rows.into_iter().flatten().collect();
        let len = weights.len();
        Ok(Self {
            height,
            width,
            weights,
            visited: vec![false; len],
        })
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether the lattice holds no cells. Construction forbids this; the
    /// method exists for the usual pairing with [`len`](Self::len).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Whether `at` addresses a cell.
    #[inline]
    pub fn contains(&self, at: Coord) -> bool {
        at.row >= 0 && at.row < self.height && at.col >= 0 && at.col < self.width
    }

    /// Bounds check returning the typed failure engines surface to callers.
    pub fn check_bounds(&self, at: Coord) -> Result<(), Error> {
        if self.contains(at) {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                at,
                height: self.height,
                width: self.width,
            })
        }
    }

    /// Row-major iterator over every coordinate.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let (h, w) = (self.height, self.width);
        (0..h).flat_map(move |row| (0..w).map(move |col| Coord::new(row, col)))
    }

    #[inline]
    fn idx(&self, at: Coord) -> Option<usize> {
        if !self.contains(at) {
            return None;
        }
        Some((at.row * self.width + at.col) as usize)
    }

    /// The weight of the cell at `at`, or `None` out of range.
    #[inline]
    pub fn weight(&self, at: Coord) -> Option<i32> {
        self.idx(at).map(|i| self.weights[i])
    }

    /// Whether the cell at `at` is a wall. Out-of-range coordinates are not
    /// walls; they are simply not cells.
    #[inline]
    pub fn is_wall(&self, at: Coord) -> bool {
        self.weight(at) == Some(Self::WALL)
    }

    /// Set one cell's weight. Leaves visitation flags untouched.
    pub fn set_weight(&mut self, at: Coord, weight: i32) -> Result<(), Error> {
        self.check_bounds(at)?;
        let i = (at.row * self.width + at.col) as usize;
        self.weights[i] = weight;
        Ok(())
    }

    /// Replace every weight from a 2D array of the lattice's exact shape.
    ///
    /// The shape is validated up front; on [`Error::DimensionMismatch`] no
    /// weight has been changed.
    pub fn set_weights(&mut self, rows: &[Vec<i32>]) -> Result<(), Error> {
        let found_height = rows.len() as i32;
        if found_height != self.height {
            return Err(Error::DimensionMismatch {
                expected: (self.height, self.width),
                found: (found_height, rows.first().map_or(0, |r| r.len()) as i32),
            });
        }
        if let Some(bad) = rows.iter().find(|r| r.len() as i32 != self.width) {
            return Err(Error::DimensionMismatch {
                expected: (self.height, self.width),
                found: (found_height, bad.len() as i32),
            });
        }
        for (i, w) in rows.iter().flatten().enumerate() {
            self.weights[i] = *w;
        }
        Ok(())
    }

    /// Export the weights as a row-major 2D array.
    pub fn weights(&self) -> Vec<Vec<i32>> {
        self.weights
            .chunks(self.width as usize)
            .map(|row| row.to_vec())
            .collect()
    }

    /// Count of wall cells.
    pub fn wall_count(&self) -> usize {
        self.weights.iter().filter(|&&w| w == Self::WALL).count()
    }

    /// Clear every visitation flag.
    ///
    /// The caller of a search engine owns this reset: run it before normal
    /// invocations, or skip it deliberately to pre-stage a run with partial
    /// visitation for replay and debugging. Engines never reset on their
    /// own and must not read flags left over from an unrelated run.
    pub fn reset_visitation(&mut self) {
        self.visited.fill(false);
    }

    /// Whether the cell at `at` has been visited in the current run.
    #[inline]
    pub fn is_visited(&self, at: Coord) -> bool {
        self.idx(at).is_some_and(|i| self.visited[i])
    }

    /// Flag the cell at `at` as visited. The engine executing a run has
    /// exclusive write access to these flags for its duration.
    #[inline]
    pub fn mark_visited(&mut self, at: Coord) {
        if let Some(i) = self.idx(at) {
            self.visited[i] = true;
        }
    }

    /// The neighbors of `at` under the offset adjacency rule.
    ///
    /// Candidates are the 3x3 block around `at`, minus the center and
    /// anything out of range. Cells sharing a row or column with `at` (the
    /// direct sides) always qualify. A corner cell qualifies only when its
    /// row offset matches the parity of `at`'s own column: odd columns keep
    /// the two `row + 1` corners, even columns the two `row - 1` corners.
    /// Each cell therefore has up to six neighbors, approximating hexagonal
    /// adjacency on rectangular storage. Note the rule reads the queried
    /// cell's parity, so adjacency is not symmetric between columns.
    ///
    /// Wall cells are returned like any other; engines exclude them by
    /// weight. The result is deterministic (row-major candidate order) and
    /// duplicate-free, and the query reads no weight or visitation state.
    pub fn neighbors(&self, at: Coord) -> Vec<Coord> {
        let mut out = Vec::with_capacity(6);
        let corner_row = if at.odd_column() {
            at.row + 1
        } else {
            at.row - 1
        };
        for row in (at.row - 1)..=(at.row + 1) {
            for col in (at.col - 1)..=(at.col + 1) {
                let n = Coord::new(row, col);
                if n == at || !self.contains(n) {
                    continue;
                }
                if row != at.row && col != at.col {
                    if row == corner_row {
                        out.push(n);
                    }
                } else {
                    out.push(n);
                }
            }
        }
        out
    }
}

impl fmt::Display for Lattice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.weights.chunks(self.width as usize) {
            let line: Vec<String> = row.iter().map(i32::to_string).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
