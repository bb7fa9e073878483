//! Depth-first search.

use std::collections::{HashMap, HashSet};

use staggrid_core::{Coord, Error, Lattice};

use crate::result::SearchResult;

/// Depth-first traversal from `start`, terminating the instant `end` is
/// first visited.
///
/// Every edge the search advances into is recorded in the reachability map,
/// dead ends included; the path map keeps only the branch that reached
/// `end`, assembled while the recursion unwinds. The route is whatever the
/// exploration order found first, with no optimality claim.
///
/// Uses the lattice's visitation flags; the caller owns
/// [`Lattice::reset_visitation`] and normally calls it first.
pub fn dfs(lattice: &mut Lattice, start: Coord, end: Coord) -> Result<SearchResult, Error> {
    lattice.check_bounds(start)?;
    lattice.check_bounds(end)?;
    if start == end {
        return Ok(SearchResult::trivial(start));
    }

    let mut result = SearchResult::default();
    if !descend(lattice, start, end, &mut result.visited, &mut result.path) {
        return Err(Error::NotConnected);
    }
    Ok(result)
}

/// Recursive step: returns whether `end` was reached through `node`.
fn descend(
    lattice: &mut Lattice,
    node: Coord,
    end: Coord,
    visited: &mut HashMap<Coord, HashSet<Coord>>,
    path: &mut HashMap<Coord, Coord>,
) -> bool {
    lattice.mark_visited(node);
    visited.entry(node).or_default();
    if node == end {
        return true;
    }

    for n in lattice.neighbors(node) {
        if lattice.is_visited(n) || lattice.is_wall(n) {
            continue;
        }
        visited.entry(node).or_default().insert(n);
        if descend(lattice, n, end, visited, path) {
            path.insert(node, n);
            return true;
        }
    }
    false
}
