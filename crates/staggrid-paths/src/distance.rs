use staggrid_core::Coord;

/// Manhattan (L1) distance between two cells.
///
/// Used as the A* heuristic estimate toward the end cell.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}
