//! Search algorithms for offset-hex lattices.
//!
//! This crate provides six interchangeable search strategies over a
//! [`staggrid_core::Lattice`], all returning the same two-map
//! [`SearchResult`] (which cells the search explored, and each cell's
//! successor on the reconstructed route):
//!
//! - **Depth-first** ([`dfs`]) — first route found, instant termination
//! - **Breadth-first** ([`bfs`]) — minimum hop count
//! - **Dijkstra** ([`dijkstra`]) — minimum weighted cost
//! - **Bellman-Ford** ([`bellman_ford`]) — minimum weighted cost with a
//!   convergence check
//! - **A\*** ([`a_star`]) — Manhattan-guided single-pass search
//! - **Random walk** ([`random_walk`]) — unguided, non-deterministic
//!
//! [`Algorithm`] dispatches over all six uniformly. Failures come from the
//! shared [`staggrid_core::Error`] taxonomy; engines never mutate weights
//! and the caller owns the visitation reset
//! ([`Lattice::reset_visitation`](staggrid_core::Lattice::reset_visitation)).

mod algorithm;
mod astar;
mod bellman;
mod bfs;
mod dfs;
mod dijkstra;
mod distance;
mod random_walk;
mod record;
mod result;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use astar::a_star;
pub use bellman::bellman_ford;
pub use bfs::bfs;
pub use dfs::dfs;
pub use dijkstra::dijkstra;
pub use distance::manhattan;
pub use random_walk::{random_walk, random_walk_with_rng};
pub use result::{SearchResult, Trail};
