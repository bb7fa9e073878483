//! Shared search plumbing: visitation triples, the path reconstructor, and
//! the min-heap entry used by the cost-ordered engines.

use std::cmp::Ordering;
use std::collections::HashMap;

use staggrid_core::{Coord, Error};

use crate::result::SearchResult;

/// One step of a traversal: a cell, the accumulated cost at which the
/// engine reached it, and the cell it was reached from. The start cell is
/// recorded self-parented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Visit {
    pub(crate) node: Coord,
    pub(crate) cost: i32,
    pub(crate) parent: Coord,
}

/// Entry of a `BinaryHeap` used as a min-heap: ordering is reversed so the
/// smallest key pops first, with the coordinate as tiebreaker to keep the
/// ordering total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OpenEntry {
    pub(crate) priority: i32,
    pub(crate) node: Coord,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Turn an ordered visitation record into the public two-map result.
///
/// The reachability map groups every visited cell under its parent, the
/// self-parented start entry excepted. The route is recovered by walking
/// parent links backward from `end`'s triple and reversing the chain into
/// the successor map. Fails with [`Error::NotConnected`] when no triple
/// matches `end`.
pub(crate) fn assemble(trail: &[Visit], start: Coord, end: Coord) -> Result<SearchResult, Error> {
    let mut result = SearchResult::default();

    let mut parents: HashMap<Coord, Coord> = HashMap::with_capacity(trail.len());
    for v in trail {
        parents.entry(v.node).or_insert(v.parent);
        if v.node != v.parent {
            result.visited.entry(v.parent).or_default().insert(v.node);
        }
    }

    if !parents.contains_key(&end) {
        return Err(Error::NotConnected);
    }

    let mut cur = end;
    // Bounded by the record length; a broken parent chain must not hang.
    for _ in 0..trail.len() {
        if cur == start {
            return Ok(result);
        }
        let Some(&parent) = parents.get(&cur) else {
            break;
        };
        result.path.insert(parent, cur);
        cur = parent;
    }
    if cur == start {
        return Ok(result);
    }
    Err(Error::NotConnected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col)
    }

    fn v(node: Coord, cost: i32, parent: Coord) -> Visit {
        Visit { node, cost, parent }
    }

    #[test]
    fn open_entry_pops_smallest_first() {
        let mut heap = std::collections::BinaryHeap::new();
        heap.push(OpenEntry {
            priority: 5,
            node: c(0, 0),
        });
        heap.push(OpenEntry {
            priority: 2,
            node: c(1, 1),
        });
        heap.push(OpenEntry {
            priority: 9,
            node: c(2, 2),
        });
        assert_eq!(heap.pop().unwrap().priority, 2);
        assert_eq!(heap.pop().unwrap().priority, 5);
        assert_eq!(heap.pop().unwrap().priority, 9);
    }

    #[test]
    fn assemble_linear_chain() {
        let trail = [
            v(c(0, 0), 0, c(0, 0)),
            v(c(0, 1), 1, c(0, 0)),
            v(c(0, 2), 2, c(0, 1)),
        ];
        let r = assemble(&trail, c(0, 0), c(0, 2)).unwrap();
        assert_eq!(r.path[&c(0, 0)], c(0, 1));
        assert_eq!(r.path[&c(0, 1)], c(0, 2));
        assert_eq!(r.path_len(), 2);
        // The self-parented start does not show up as its own child.
        assert!(!r.visited.contains_key(&c(0, 2)));
        assert_eq!(r.visited[&c(0, 0)].len(), 1);
    }

    #[test]
    fn assemble_groups_children_under_parent() {
        let trail = [
            v(c(0, 0), 0, c(0, 0)),
            v(c(0, 1), 1, c(0, 0)),
            v(c(1, 0), 1, c(0, 0)),
            v(c(1, 1), 2, c(0, 1)),
        ];
        let r = assemble(&trail, c(0, 0), c(1, 1)).unwrap();
        assert_eq!(r.visited[&c(0, 0)].len(), 2);
        assert_eq!(r.visited[&c(0, 1)].len(), 1);
        // Only the winning branch makes it into the path map.
        assert_eq!(r.path_len(), 2);
        assert!(!r.path.contains_key(&c(1, 0)));
    }

    #[test]
    fn assemble_without_end_is_not_connected() {
        let trail = [v(c(0, 0), 0, c(0, 0)), v(c(0, 1), 1, c(0, 0))];
        let err = assemble(&trail, c(0, 0), c(3, 3)).unwrap_err();
        assert_eq!(err, Error::NotConnected);
    }

    #[test]
    fn assemble_detects_broken_chain() {
        // End recorded, but its ancestry never reaches the start.
        let trail = [v(c(0, 0), 0, c(0, 0)), v(c(5, 5), 1, c(4, 4))];
        let err = assemble(&trail, c(0, 0), c(5, 5)).unwrap_err();
        assert_eq!(err, Error::NotConnected);
    }
}
