//! Bellman-Ford shortest-path search.

use std::collections::HashMap;

use staggrid_core::{Coord, Error, Lattice};

use crate::record::{self, Visit};
use crate::result::SearchResult;

/// Sentinel distance for cells no relaxation pass has reached.
const UNREACHED: i32 = i32::MAX;

/// Bellman-Ford relaxation from `start`.
///
/// Performs up to `height * width - 1` full passes over every edge in
/// row-major order, skipping edges that touch a wall, and stops early once
/// a pass relaxes nothing. One verification pass follows: an edge that
/// still relaxes means the distances never converged and the run fails
/// with [`Error::NegativeCycle`]. Weights on this lattice are positive
/// through every exposed mutation path, so that failure is a convergence
/// guard rather than an expected outcome.
///
/// The reachability map is built from the predecessor edges in the order
/// each cell was first discovered, not re-derived from final distances.
/// Does not read or write the lattice's visitation flags.
pub fn bellman_ford(lattice: &mut Lattice, start: Coord, end: Coord) -> Result<SearchResult, Error> {
    lattice.check_bounds(start)?;
    lattice.check_bounds(end)?;
    if start == end {
        return Ok(SearchResult::trivial(start));
    }

    // Edge list in row-major order, walls excluded on both ends. The cost
    // of an edge is the weight of the cell it enters.
    let cells: Vec<Coord> = lattice.coords().collect();
    let mut edges: Vec<(Coord, Coord, i32)> = Vec::new();
    for &c in &cells {
        if lattice.is_wall(c) {
            continue;
        }
        for n in lattice.neighbors(c) {
            if lattice.is_wall(n) {
                continue;
            }
            let Some(w) = lattice.weight(n) else {
                continue;
            };
            edges.push((c, n, w));
        }
    }

    let mut dist: HashMap<Coord, i32> = cells.iter().map(|&c| (c, UNREACHED)).collect();
    dist.insert(start, 0);
    let mut pred: HashMap<Coord, Coord> = HashMap::new();
    let mut discovered: Vec<Coord> = Vec::new();

    let rounds = lattice.len().saturating_sub(1);
    for _ in 0..rounds {
        let mut relaxed = false;
        for &(from, to, w) in &edges {
            let df = dist[&from];
            if df == UNREACHED {
                continue;
            }
            let candidate = df.saturating_add(w);
            if candidate < dist[&to] {
                dist.insert(to, candidate);
                if pred.insert(to, from).is_none() {
                    discovered.push(to);
                }
                relaxed = true;
            }
        }
        if !relaxed {
            break;
        }
    }

    // Verification: any edge still relaxing means no convergence.
    for &(from, to, w) in &edges {
        let df = dist[&from];
        if df != UNREACHED && df.saturating_add(w) < dist[&to] {
            return Err(Error::NegativeCycle);
        }
    }

    if dist[&end] == UNREACHED {
        return Err(Error::NotConnected);
    }

    let mut trail: Vec<Visit> = Vec::with_capacity(discovered.len() + 1);
    trail.push(Visit {
        node: start,
        cost: 0,
        parent: start,
    });
    for &c in &discovered {
        trail.push(Visit {
            node: c,
            cost: dist[&c],
            parent: pred[&c],
        });
    }
    record::assemble(&trail, start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dijkstra::dijkstra;

    #[test]
    fn agrees_with_dijkstra_on_uniform_weights() {
        let start = Coord::new(0, 0);
        let end = Coord::new(4, 4);
        let mut a = Lattice::new(5, 5);
        let mut b = Lattice::new(5, 5);
        let bf = bellman_ford(&mut a, start, end).unwrap();
        let dj = dijkstra(&mut b, start, end).unwrap();
        assert_eq!(bf.path_cost(&a, start), dj.path_cost(&b, start));
    }

    #[test]
    fn agrees_with_dijkstra_on_varied_weights() {
        let weights = vec![
            vec![1, 8, 1, 1],
            vec![1, 8, 1, 8],
            vec![1, 1, 1, 1],
            vec![8, 8, 1, 1],
        ];
        let start = Coord::new(0, 0);
        let end = Coord::new(3, 3);
        let mut a = Lattice::from_weights(weights.clone()).unwrap();
        let mut b = Lattice::from_weights(weights).unwrap();
        let bf = bellman_ford(&mut a, start, end).unwrap();
        let dj = dijkstra(&mut b, start, end).unwrap();
        assert_eq!(bf.path_cost(&a, start), dj.path_cost(&b, start));
    }

    #[test]
    fn route_ends_at_end() {
        let mut lat = Lattice::new(4, 5);
        let start = Coord::new(3, 0);
        let end = Coord::new(0, 4);
        let r = bellman_ford(&mut lat, start, end).unwrap();
        let trail: Vec<Coord> = r.trail_from(start).collect();
        assert_eq!(trail.first(), Some(&start));
        assert_eq!(trail.last(), Some(&end));
    }

    #[test]
    fn start_equals_end_short_circuits() {
        let mut lat = Lattice::new(3, 3);
        let r = bellman_ford(&mut lat, Coord::new(1, 2), Coord::new(1, 2)).unwrap();
        assert!(r.path.is_empty());
        assert!(r.visited[&Coord::new(1, 2)].is_empty());
    }

    #[test]
    fn out_of_range_endpoints_fail_before_traversal() {
        let mut lat = Lattice::new(3, 3);
        assert!(matches!(
            bellman_ford(&mut lat, Coord::new(9, 9), Coord::new(0, 0)),
            Err(Error::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn walled_off_end_is_not_connected() {
        let mut lat = Lattice::new(5, 5);
        for row in 0..5 {
            lat.set_weight(Coord::new(row, 2), Lattice::WALL).unwrap();
        }
        let err = bellman_ford(&mut lat, Coord::new(4, 0), Coord::new(4, 4)).unwrap_err();
        assert_eq!(err, Error::NotConnected);
    }

    #[test]
    fn deterministic_across_runs() {
        let weights = vec![
            vec![2, 1, 3, 1],
            vec![1, 4, 1, 2],
            vec![3, 1, 2, 1],
        ];
        let mut a = Lattice::from_weights(weights.clone()).unwrap();
        let mut b = Lattice::from_weights(weights).unwrap();
        let r1 = bellman_ford(&mut a, Coord::new(0, 0), Coord::new(2, 3)).unwrap();
        let r2 = bellman_ford(&mut b, Coord::new(0, 0), Coord::new(2, 3)).unwrap();
        assert_eq!(r1.path, r2.path);
        assert_eq!(r1.visited, r2.visited);
    }

    #[test]
    fn wall_start_reaches_nothing() {
        // A walled start emits no edges, so any other end is unreachable.
        let mut lat = Lattice::new(3, 3);
        lat.set_weight(Coord::new(0, 0), Lattice::WALL).unwrap();
        let err = bellman_ford(&mut lat, Coord::new(0, 0), Coord::new(2, 2)).unwrap_err();
        assert_eq!(err, Error::NotConnected);
    }
}
