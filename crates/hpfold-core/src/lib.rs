//! Core types for the hpfold HP-lattice conformation sampler.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary used throughout the hpfold workspace:
//! residues and validated chains, lattice positions, and the direction
//! model that converts between absolute headings and chain-relative
//! turns.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod position;
pub mod residue;

pub use direction::{relative_step, Orientation, RelativeStep, Turn};
pub use error::ChainError;
pub use position::Position;
pub use residue::{Chain, Residue};
