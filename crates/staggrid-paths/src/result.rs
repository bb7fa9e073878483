//! The uniform result every search engine returns.

use std::collections::{HashMap, HashSet};

use staggrid_core::{Coord, Lattice};

/// Outcome of a successful search run, shared by all six engines.
///
/// Both maps key on cell identity (`row`, `col`). The reachability map
/// records, for each explored cell, the set of cells the search actually
/// advanced into from it — not the full neighbor set. The path map records
/// each cell's single successor on the reconstructed start-to-end route. A
/// consumer replays the first to animate the whole exploration and the
/// second to replay the winning path one edge at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResult {
    /// Explored cell -> cells it advanced the search into.
    pub visited: HashMap<Coord, HashSet<Coord>>,
    /// Cell -> its successor on the start-to-end route.
    pub path: HashMap<Coord, Coord>,
}

impl SearchResult {
    /// The degenerate result for `start == end`: the start cell explored,
    /// nothing expanded, empty route.
    pub(crate) fn trivial(start: Coord) -> Self {
        Self {
            visited: HashMap::from([(start, HashSet::new())]),
            path: HashMap::new(),
        }
    }

    /// Number of edges on the reconstructed route.
    pub fn path_len(&self) -> usize {
        self.path.len()
    }

    /// Walk the route from `start`, yielding each cell in order (including
    /// `start` itself). Stops at the first cell without a successor.
    pub fn trail_from(&self, start: Coord) -> Trail<'_> {
        Trail {
            path: &self.path,
            next: Some(start),
            remaining: self.path.len() + 1,
        }
    }

    /// Total weight of the route from `start`: the sum of the weights of
    /// every cell entered along it (the start cell costs nothing to stand
    /// on).
    pub fn path_cost(&self, lattice: &Lattice, start: Coord) -> i32 {
        self.trail_from(start)
            .skip(1)
            .filter_map(|c| lattice.weight(c))
            .sum()
    }
}

/// Iterator over the cells of the reconstructed route, in travel order.
pub struct Trail<'a> {
    path: &'a HashMap<Coord, Coord>,
    next: Option<Coord>,
    remaining: usize,
}

impl Iterator for Trail<'_> {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let cur = self.next?;
        self.next = self.path.get(&cur).copied();
        Some(cur)
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    //! The wire shape a hosting layer serializes:
    //! `{"visited": {"(r, c)": ["(r, c)", ...]}, "solution": {"(r, c)": "(r, c)"}}`.
    //! JSON object keys must be strings, so coordinates travel in their
    //! `Display` form and come back through `Coord::from_str`.

    use std::collections::{BTreeMap, HashMap};

    use serde::de::Error as _;
    use serde::ser::SerializeStruct;

    use staggrid_core::Coord;

    use super::SearchResult;

    impl serde::Serialize for SearchResult {
        fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            // Ordered maps so repeated serializations are byte-identical.
            let visited: BTreeMap<String, Vec<String>> = self
                .visited
                .iter()
                .map(|(k, vs)| {
                    let mut inner: Vec<Coord> = vs.iter().copied().collect();
                    inner.sort();
                    let inner: Vec<String> = inner.into_iter().map(|c| c.to_string()).collect();
                    (k.to_string(), inner)
                })
                .collect();

            let solution: BTreeMap<String, String> = self
                .path
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();

            let mut s = serializer.serialize_struct("SearchResult", 2)?;
            s.serialize_field("visited", &visited)?;
            s.serialize_field("solution", &solution)?;
            s.end()
        }
    }

    #[derive(serde::Deserialize)]
    struct Wire {
        visited: HashMap<String, Vec<String>>,
        solution: HashMap<String, String>,
    }

    impl<'de> serde::Deserialize<'de> for SearchResult {
        fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let wire = Wire::deserialize(deserializer)?;
            let parse = |s: &str| s.parse::<Coord>().map_err(D::Error::custom);

            let mut result = SearchResult::default();
            for (k, vs) in &wire.visited {
                let entry = result.visited.entry(parse(k)?).or_default();
                for v in vs {
                    entry.insert(parse(v)?);
                }
            }
            for (k, v) in &wire.solution {
                result.path.insert(parse(k)?, parse(v)?);
            }
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SearchResult {
        let mut r = SearchResult::default();
        r.visited.insert(
            Coord::new(0, 0),
            HashSet::from([Coord::new(0, 1), Coord::new(1, 0)]),
        );
        r.visited
            .insert(Coord::new(0, 1), HashSet::from([Coord::new(1, 1)]));
        r.path.insert(Coord::new(0, 0), Coord::new(0, 1));
        r.path.insert(Coord::new(0, 1), Coord::new(1, 1));
        r
    }

    #[test]
    fn trail_follows_successors() {
        let r = sample();
        let trail: Vec<Coord> = r.trail_from(Coord::new(0, 0)).collect();
        assert_eq!(
            trail,
            vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 1)]
        );
        assert_eq!(r.path_len(), 2);
    }

    #[test]
    fn trail_is_cycle_safe() {
        // A corrupt map with a loop must not iterate forever.
        let mut r = SearchResult::default();
        r.path.insert(Coord::new(0, 0), Coord::new(0, 1));
        r.path.insert(Coord::new(0, 1), Coord::new(0, 0));
        assert_eq!(r.trail_from(Coord::new(0, 0)).count(), 3);
    }

    #[test]
    fn path_cost_sums_entered_cells() {
        let lat = Lattice::from_weights(vec![vec![1, 5], vec![2, 3]]).unwrap();
        let r = sample();
        // Entering (0, 1) costs 5, entering (1, 1) costs 3; start is free.
        assert_eq!(r.path_cost(&lat, Coord::new(0, 0)), 8);
    }

    #[test]
    fn trivial_result_has_no_expansion() {
        let r = SearchResult::trivial(Coord::new(2, 2));
        assert!(r.path.is_empty());
        assert_eq!(r.visited.len(), 1);
        assert!(r.visited[&Coord::new(2, 2)].is_empty());
    }
}
