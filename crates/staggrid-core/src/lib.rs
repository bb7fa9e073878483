//! **staggrid-core** — Weighted offset-hex lattice model (core types).
//!
//! This crate provides the foundational types of the *staggrid* workspace:
//! the [`Coord`] cell identity, the [`Lattice`] of weighted cells with its
//! column-parity offset adjacency rule, and the shared [`Error`] taxonomy
//! consumed by the search engines in `staggrid-paths`.

pub mod error;
pub mod geom;
pub mod lattice;

pub use error::Error;
pub use geom::{Coord, ParseCoordError};
pub use lattice::Lattice;
