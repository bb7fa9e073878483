//! Uniform dispatch over the six search strategies.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use staggrid_core::{Coord, Error, Lattice};

use crate::astar::a_star;
use crate::bellman::bellman_ford;
use crate::bfs::bfs;
use crate::dfs::dfs;
use crate::dijkstra::dijkstra;
use crate::random_walk::random_walk_with_rng;
use crate::result::SearchResult;

/// The six interchangeable search strategies.
///
/// All of them share one signature and one result contract, so a hosting
/// layer can expose them uniformly and consumers never need to know which
/// one produced a [`SearchResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Dfs,
    Bfs,
    Dijkstra,
    BellmanFord,
    AStar,
    RandomWalk,
}

impl Algorithm {
    /// Every strategy, in a stable order.
    pub const ALL: [Algorithm; 6] = [
        Self::Dfs,
        Self::Bfs,
        Self::Dijkstra,
        Self::BellmanFord,
        Self::AStar,
        Self::RandomWalk,
    ];

    /// The strategy's stable name, as a hosting layer would route it.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dfs => "dfs",
            Self::Bfs => "bfs",
            Self::Dijkstra => "dijkstra",
            Self::BellmanFord => "bellman_ford",
            Self::AStar => "a_star",
            Self::RandomWalk => "random_walk",
        }
    }

    /// Run the strategy between `start` and `end` on a clean slate.
    ///
    /// This is the normal-use entry: it resets the lattice's visitation
    /// flags first, then dispatches. Call the engine functions directly to
    /// pre-stage a run with partial visitation instead. The random walk
    /// draws from the thread-local generator; use
    /// [`run_with_rng`](Self::run_with_rng) for reproducible randomness.
    pub fn run(
        self,
        lattice: &mut Lattice,
        start: Coord,
        end: Coord,
    ) -> Result<SearchResult, Error> {
        self.run_with_rng(lattice, start, end, &mut rand::rng())
    }

    /// Like [`run`](Self::run), with an explicit random generator.
    pub fn run_with_rng<R: Rng + ?Sized>(
        self,
        lattice: &mut Lattice,
        start: Coord,
        end: Coord,
        rng: &mut R,
    ) -> Result<SearchResult, Error> {
        log::debug!("running {} from {start} to {end}", self.name());
        lattice.reset_visitation();
        match self {
            Self::Dfs => dfs(lattice, start, end),
            Self::Bfs => bfs(lattice, start, end),
            Self::Dijkstra => dijkstra(lattice, start, end),
            Self::BellmanFord => bellman_ford(lattice, start, end),
            Self::AStar => a_star(lattice, start, end),
            Self::RandomWalk => random_walk_with_rng(lattice, start, end, rng),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error parsing an [`Algorithm`] from its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError {
    input: String,
}

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown algorithm \u{201c}{}\u{201d}", self.input)
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| ParseAlgorithmError {
                input: s.to_string(),
            })
    }
}
