//! Breadth-first search.

use std::collections::{HashSet, VecDeque};

use staggrid_core::{Coord, Error, Lattice};

use crate::record::{self, Visit};
use crate::result::SearchResult;

/// Breadth-first traversal from `start`, stopping the instant `end` is
/// dequeued.
///
/// Every edge counts as one hop, so the reconstructed route minimizes hop
/// count; the accumulated weighted cost is still carried along, but only
/// for trace logging. Each cell keeps the predecessor that enqueued it
/// first — there is no relaxation.
///
/// Uses the lattice's visitation flags; the caller owns
/// [`Lattice::reset_visitation`] and normally calls it first.
pub fn bfs(lattice: &mut Lattice, start: Coord, end: Coord) -> Result<SearchResult, Error> {
    lattice.check_bounds(start)?;
    lattice.check_bounds(end)?;
    if start == end {
        return Ok(SearchResult::trivial(start));
    }

    let mut trail: Vec<Visit> = Vec::new();
    let mut queue: VecDeque<Visit> = VecDeque::new();
    let mut enqueued: HashSet<Coord> = HashSet::from([start]);
    queue.push_back(Visit {
        node: start,
        cost: 0,
        parent: start,
    });

    while let Some(v) = queue.pop_front() {
        lattice.mark_visited(v.node);
        log::trace!("bfs: dequeued {} at accumulated cost {}", v.node, v.cost);
        trail.push(v);
        if v.node == end {
            return record::assemble(&trail, start, end);
        }

        for n in lattice.neighbors(v.node) {
            if lattice.is_visited(n) || lattice.is_wall(n) || enqueued.contains(&n) {
                continue;
            }
            let Some(w) = lattice.weight(n) else {
                continue;
            };
            enqueued.insert(n);
            queue.push_back(Visit {
                node: n,
                cost: v.cost + w,
                parent: v.node,
            });
        }
    }

    Err(Error::NotConnected)
}
