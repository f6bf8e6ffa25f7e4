//! Square-lattice occupancy surface and conformation records for hpfold.
//!
//! This crate defines the mutable state a placement run owns: the
//! [`Lattice`] (a sparse 2D occupancy grid sized so the walk cannot
//! reach a border) and the [`Conformation`] record engines return (the
//! lattice plus the ordered placement list and the run's backtrack
//! count). A lattice is created fresh per generation call, mutated
//! only by the engine that owns it, and read-only afterwards.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod conformation;
pub mod error;
pub mod lattice;

pub use cell::Cell;
pub use conformation::{Conformation, Placement};
pub use error::LatticeError;
pub use lattice::Lattice;
