//! A* search with a Manhattan heuristic.

use std::collections::{BinaryHeap, HashMap};

use staggrid_core::{Coord, Error, Lattice};

use crate::distance::manhattan;
use crate::record::OpenEntry;
use crate::result::SearchResult;

/// A* from `start`, expanding by lowest `f = g + h` where `g` is the
/// accumulated weighted cost and `h` the Manhattan estimate toward `end`.
///
/// The heuristic table is computed once per run for every non-wall cell.
/// Neighbors are flagged visited at the moment they are enqueued, so every
/// cell enters the open list exactly once and is never relaxed afterwards
/// — a simplification that relies on non-negative weights and trades
/// strict optimality for a single pass over each cell. Fails with
/// [`Error::NotConnected`] when the open list empties before `end` is
/// reached.
///
/// Uses the lattice's visitation flags; the caller owns
/// [`Lattice::reset_visitation`] and normally calls it first.
pub fn a_star(lattice: &mut Lattice, start: Coord, end: Coord) -> Result<SearchResult, Error> {
    lattice.check_bounds(start)?;
    lattice.check_bounds(end)?;
    if start == end {
        return Ok(SearchResult::trivial(start));
    }

    let estimate: HashMap<Coord, i32> = lattice
        .coords()
        .filter(|&c| !lattice.is_wall(c))
        .map(|c| (c, manhattan(c, end)))
        .collect();

    let mut result = SearchResult::default();
    let mut g: HashMap<Coord, i32> = HashMap::from([(start, 0)]);
    let mut pred: HashMap<Coord, Coord> = HashMap::new();

    let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
    lattice.mark_visited(start);
    open.push(OpenEntry {
        priority: manhattan(start, end),
        node: start,
    });

    while let Some(cur) = open.pop() {
        if cur.node == end {
            // Rewind the predecessor chain into the successor map.
            let mut node = end;
            while node != start {
                let Some(&p) = pred.get(&node) else {
                    return Err(Error::NotConnected);
                };
                result.path.insert(p, node);
                node = p;
            }
            return Ok(result);
        }

        let Some(&cost) = g.get(&cur.node) else {
            continue;
        };
        result.visited.entry(cur.node).or_default();

        for n in lattice.neighbors(cur.node) {
            if lattice.is_wall(n) || lattice.is_visited(n) {
                continue;
            }
            let Some(w) = lattice.weight(n) else {
                continue;
            };
            let Some(&h) = estimate.get(&n) else {
                continue;
            };
            lattice.mark_visited(n);
            result.visited.entry(cur.node).or_default().insert(n);
            pred.insert(n, cur.node);
            let reach = cost + w;
            g.insert(n, reach);
            open.push(OpenEntry {
                priority: reach + h,
                node: n,
            });
        }
    }

    Err(Error::NotConnected)
}
