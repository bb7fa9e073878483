//! Dijkstra shortest-path search.

use std::collections::{BinaryHeap, HashMap};

use staggrid_core::{Coord, Error, Lattice};

use crate::record::{self, OpenEntry, Visit};
use crate::result::SearchResult;

/// Dijkstra's algorithm from `start`, keyed by accumulated weighted cost.
///
/// A min-heap drives expansion. Relaxing a cell that is already open with a
/// higher cost pushes an improved, re-parented entry; the superseded entry
/// pops later and is discarded against the visitation flag. A finalized
/// (visited) cell is never re-opened, which is sound because weights are
/// non-negative. The whole reachable component is explored before the
/// route is reconstructed, so the reachability map covers everything the
/// search touched.
///
/// Uses the lattice's visitation flags; the caller owns
/// [`Lattice::reset_visitation`] and normally calls it first.
pub fn dijkstra(lattice: &mut Lattice, start: Coord, end: Coord) -> Result<SearchResult, Error> {
    lattice.check_bounds(start)?;
    lattice.check_bounds(end)?;
    if start == end {
        return Ok(SearchResult::trivial(start));
    }

    let mut trail: Vec<Visit> = Vec::new();
    let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
    // Best known cost and parent per open cell.
    let mut best: HashMap<Coord, (i32, Coord)> = HashMap::from([(start, (0, start))]);
    open.push(OpenEntry {
        priority: 0,
        node: start,
    });

    while let Some(cur) = open.pop() {
        if lattice.is_visited(cur.node) {
            // Superseded entry.
            continue;
        }
        lattice.mark_visited(cur.node);
        let Some(&(cost, parent)) = best.get(&cur.node) else {
            continue;
        };
        trail.push(Visit {
            node: cur.node,
            cost,
            parent,
        });

        for n in lattice.neighbors(cur.node) {
            if lattice.is_visited(n) || lattice.is_wall(n) {
                continue;
            }
            let Some(w) = lattice.weight(n) else {
                continue;
            };
            let tentative = cost + w;
            match best.get(&n) {
                Some(&(c, _)) if c <= tentative => {}
                _ => {
                    best.insert(n, (tentative, cur.node));
                    open.push(OpenEntry {
                        priority: tentative,
                        node: n,
                    });
                }
            }
        }
    }

    record::assemble(&trail, start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_cheap_detours_over_heavy_cells() {
        // Row 0 is cheap; the straight line through row 1 is expensive.
        let mut lat = Lattice::from_weights(vec![
            vec![1, 1, 1, 1],
            vec![1, 9, 9, 1],
            vec![1, 9, 1, 1],
        ])
        .unwrap();
        let start = Coord::new(2, 0);
        let end = Coord::new(2, 3);
        let r = dijkstra(&mut lat, start, end).unwrap();
        let cost = r.path_cost(&lat, start);
        // Any route through the 9-cells costs more than the rim route.
        assert!(cost < 9, "route cost {cost} should avoid heavy cells");
        let trail: Vec<Coord> = r.trail_from(start).collect();
        assert_eq!(trail.last(), Some(&end));
    }

    #[test]
    fn matches_bfs_cost_on_uniform_weights() {
        let mut lat = Lattice::new(5, 5);
        let start = Coord::new(0, 0);
        let end = Coord::new(4, 4);
        let r = dijkstra(&mut lat, start, end).unwrap();
        // With unit weights the weighted optimum equals the hop optimum,
        // which is six edges on this lattice.
        assert_eq!(r.path_cost(&lat, start), 6);
        assert_eq!(r.path_len(), 6);
    }

    #[test]
    fn explores_the_whole_component() {
        let mut lat = Lattice::new(4, 4);
        let start = Coord::new(0, 0);
        let r = dijkstra(&mut lat, start, Coord::new(0, 1)).unwrap();
        // Expansion does not stop at the nearby end: every cell is reached.
        let mut reached: std::collections::HashSet<Coord> =
            r.visited.values().flatten().copied().collect();
        reached.insert(start);
        assert_eq!(reached.len(), lat.len());
    }

    #[test]
    fn start_equals_end_short_circuits() {
        let mut lat = Lattice::new(3, 3);
        let r = dijkstra(&mut lat, Coord::new(0, 2), Coord::new(0, 2)).unwrap();
        assert!(r.path.is_empty());
        assert!(r.visited[&Coord::new(0, 2)].is_empty());
    }

    #[test]
    fn out_of_range_endpoints_fail_before_traversal() {
        let mut lat = Lattice::new(3, 3);
        assert!(matches!(
            dijkstra(&mut lat, Coord::new(0, 0), Coord::new(0, 7)),
            Err(Error::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn walled_off_end_is_not_connected() {
        let mut lat = Lattice::new(5, 5);
        for row in 0..5 {
            lat.set_weight(Coord::new(row, 2), Lattice::WALL).unwrap();
        }
        let err = dijkstra(&mut lat, Coord::new(2, 0), Coord::new(2, 4)).unwrap_err();
        assert_eq!(err, Error::NotConnected);
    }

    #[test]
    fn deterministic_across_runs() {
        let weights = vec![
            vec![1, 3, 1, 2, 1],
            vec![2, 1, 4, 1, 3],
            vec![1, 5, 1, 2, 1],
            vec![3, 1, 2, 1, 4],
        ];
        let mut a = Lattice::from_weights(weights.clone()).unwrap();
        let mut b = Lattice::from_weights(weights).unwrap();
        let r1 = dijkstra(&mut a, Coord::new(0, 0), Coord::new(3, 4)).unwrap();
        let r2 = dijkstra(&mut b, Coord::new(0, 0), Coord::new(3, 4)).unwrap();
        assert_eq!(r1.path, r2.path);
        assert_eq!(r1.visited, r2.visited);
    }
}
