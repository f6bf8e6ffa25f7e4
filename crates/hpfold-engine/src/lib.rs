//! Self-avoiding-walk placement engines and contact analysis for hpfold.
//!
//! Three policies generate candidate conformations of an HP chain on a
//! square lattice, behind the common [`PlacementEngine`] trait:
//!
//! 1. [`StochasticEngine`] — uniform choice among free neighbours,
//!    stops on the first dead end ("break sampling").
//! 2. [`DirectionalEngine`] — walks a pre-committed chain-relative
//!    turn sequence rigidly, stops on the first collision.
//! 3. [`BacktrackingEngine`] — depth-first search with true
//!    backtracking and a fence heuristic that bounds dead-end
//!    thrashing.
//!
//! [`contact`] measures the non-covalent hydrophobic contacts of a
//! finished conformation, and [`Sampler`] fans independent generation
//! calls out across worker threads.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod backtracking;
pub mod config;
pub mod contact;
pub mod directional;
pub mod engine;
pub mod error;
pub mod sampler;
pub mod stochastic;

pub use backtracking::BacktrackingEngine;
pub use config::{ConfigError, SamplerConfig};
pub use contact::{analyze, classify_steps, ContactPair, ContactSummary};
pub use directional::{DirectionalEngine, TurnSequence};
pub use engine::PlacementEngine;
pub use error::EngineError;
pub use sampler::{SampleOutcome, SampleRecord, Sampler};
pub use stochastic::StochasticEngine;
