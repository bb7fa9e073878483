//! Unweighted random walk.

use std::collections::{HashMap, HashSet};

use rand::Rng;
use rand::seq::IndexedRandom;

use staggrid_core::{Coord, Error, Lattice};

use crate::result::SearchResult;

/// Random walk from `start` using the thread-local generator.
///
/// See [`random_walk_with_rng`]. This is the only engine whose result is
/// non-deterministic across runs with the same input.
pub fn random_walk(lattice: &Lattice, start: Coord, end: Coord) -> Result<SearchResult, Error> {
    random_walk_with_rng(lattice, start, end, &mut rand::rng())
}

/// Random walk from `start`, advancing to a uniformly chosen non-wall
/// neighbor each step until the chosen neighbor is `end`.
///
/// The walk keeps its own visited set and a "known" frontier of every cell
/// seen as a neighbor so far. When every known-but-unvisited cell is a
/// wall the walk has nowhere left to discover and fails with
/// [`Error::NotConnected`] instead of wandering forever. Revisiting cells
/// is allowed; a later exit from a cell overwrites its path-map successor,
/// so the final path map is the walk with its loops erased.
///
/// No weight guidance, no optimality claim, and no use of the lattice's
/// visitation flags.
pub fn random_walk_with_rng<R: Rng + ?Sized>(
    lattice: &Lattice,
    start: Coord,
    end: Coord,
    rng: &mut R,
) -> Result<SearchResult, Error> {
    lattice.check_bounds(start)?;
    lattice.check_bounds(end)?;
    if start == end {
        return Ok(SearchResult::trivial(start));
    }

    let mut result = SearchResult::default();
    result.visited.insert(start, HashSet::new());
    let mut seen: HashSet<Coord> = HashSet::new();
    let mut known: HashSet<Coord> = HashSet::new();
    let mut current = start;

    loop {
        seen.insert(current);
        let neighbors = lattice.neighbors(current);
        known.extend(neighbors.iter().copied());

        // Dead end: nothing left to discover that is not a wall.
        if known
            .difference(&seen)
            .all(|&c| lattice.is_wall(c))
        {
            return Err(Error::NotConnected);
        }

        let passable: Vec<Coord> = neighbors
            .into_iter()
            .filter(|&n| !lattice.is_wall(n))
            .collect();
        let Some(&next) = passable.choose(rng) else {
            return Err(Error::NotConnected);
        };

        result.visited.entry(current).or_default().insert(next);
        result.path.insert(current, next);
        if next == end {
            return Ok(result);
        }
        current = next;
    }
}
