//! hpfold: HP-model conformation sampling on a square lattice.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the hpfold sub-crates. For most users, adding `hpfold` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use hpfold::prelude::*;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! // A 12-residue chain, folded by the backtracking engine.
//! let chain = Chain::parse("HHPPHPHPPHHP").unwrap();
//! let engine = BacktrackingEngine::new();
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//!
//! let conformation = engine.generate(&chain, &mut rng).unwrap();
//! assert!(conformation.is_complete(chain.len()));
//! assert!(conformation.is_self_avoiding());
//!
//! // Count the non-covalent hydrophobic contacts.
//! let summary = analyze(&conformation);
//! assert_eq!(summary.residues, 12);
//! assert!(summary.h_ratio().is_some());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`model`] | `hpfold-core` | Residues, chains, positions, the direction model |
//! | [`lattice`] | `hpfold-lattice` | Occupancy lattice, placements, conformations |
//! | [`engine`] | `hpfold-engine` | Placement engines, contact analysis, batch sampling |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Residues, chains, positions, and the direction model
/// (`hpfold-core`).
pub use hpfold_core as model;

/// The occupancy lattice and conformation records (`hpfold-lattice`).
pub use hpfold_lattice as lattice;

/// Placement engines, contact analysis, and batch sampling
/// (`hpfold-engine`).
pub use hpfold_engine as engine;

/// The most commonly used types, re-exported flat.
pub mod prelude {
    pub use hpfold_core::{
        relative_step, Chain, ChainError, Orientation, Position, RelativeStep, Residue, Turn,
    };
    pub use hpfold_engine::{
        analyze, classify_steps, BacktrackingEngine, ConfigError, ContactPair, ContactSummary,
        DirectionalEngine, EngineError, PlacementEngine, SampleOutcome, SampleRecord, Sampler,
        SamplerConfig, StochasticEngine, TurnSequence,
    };
    pub use hpfold_lattice::{Cell, Conformation, Lattice, LatticeError, Placement};
}
