//! The trait all placement policies implement.

use hpfold_core::Chain;
use hpfold_lattice::Conformation;
use rand::RngCore;

use crate::error::EngineError;

/// A self-avoiding-walk construction policy.
///
/// One `generate` call is one independent placement run: the engine
/// creates a fresh lattice sized for the chain, walks it, and returns
/// the finished [`Conformation`]. All randomness flows through the
/// caller's RNG, so a run is a pure function of the RNG state —
/// identical seed, identical conformation. Engines hold no per-run
/// state of their own and may be shared across threads.
pub trait PlacementEngine {
    /// Short engine name, used for labelling samples and diagnostics.
    fn name(&self) -> &str;

    /// Run one placement of `chain`, drawing from `rng`.
    ///
    /// A placement order shorter than the chain is a normal outcome
    /// (the policy hit a dead end it does not route around); inspect
    /// [`Conformation::is_complete`]. Errors are reserved for an
    /// exhausted backtracking search, invalid turn sequences, and
    /// violated lattice invariants.
    fn generate(&self, chain: &Chain, rng: &mut dyn RngCore)
        -> Result<Conformation, EngineError>;
}
