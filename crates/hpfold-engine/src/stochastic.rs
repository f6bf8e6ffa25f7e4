//! Break-sampling placement: uniform neighbour choice, no retries.

use hpfold_core::Chain;
use hpfold_lattice::{Conformation, Lattice, Placement};
use rand::prelude::*;
use rand::RngCore;

use crate::engine::PlacementEngine;
use crate::error::EngineError;

/// The stochastic ("break sampling") placement engine.
///
/// Places residue 0 at the lattice center, then grows the walk one
/// residue at a time by choosing uniformly among the free 4-neighbours
/// of the previous placement. The first dead end terminates the run
/// with a partial placement order; there are no retries within a call.
/// Repeated independent calls are how callers observe the break rate.
#[derive(Clone, Copy, Debug, Default)]
pub struct StochasticEngine;

impl StochasticEngine {
    /// Create the engine.
    pub fn new() -> Self {
        Self
    }
}

impl PlacementEngine for StochasticEngine {
    fn name(&self) -> &str {
        "stochastic"
    }

    fn generate(
        &self,
        chain: &Chain,
        rng: &mut dyn RngCore,
    ) -> Result<Conformation, EngineError> {
        let mut lattice = Lattice::for_chain(chain);
        let mut placements = Vec::with_capacity(chain.len());

        let mut current = lattice.center();
        for &residue in chain.residues() {
            if !placements.is_empty() {
                let candidates = lattice.free_neighbours(current);
                match candidates.choose(rng) {
                    Some(&next) => current = next,
                    // Dead end: the walk walled itself in. Normal early
                    // termination, not an error.
                    None => break,
                }
            }
            lattice.place(current, residue)?;
            placements.push(Placement::new(residue, current));
        }

        Ok(Conformation::new(lattice, placements, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn first_placement_is_the_lattice_center() {
        let chain = Chain::parse("HHPPH").unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let conformation = StochasticEngine::new().generate(&chain, &mut rng).unwrap();
        assert_eq!(
            conformation.placements()[0].position,
            conformation.lattice().center()
        );
    }

    #[test]
    fn order_never_exceeds_the_chain() {
        let chain = Chain::parse("HPHPHPHPHP").unwrap();
        let engine = StochasticEngine::new();
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let conformation = engine.generate(&chain, &mut rng).unwrap();
            let placed = conformation.residues_placed();
            assert!(placed >= 1 && placed <= chain.len());
        }
    }

    #[test]
    fn walks_are_self_avoiding_and_connected() {
        let chain = Chain::parse("HHPHPHPPHPHHPPHP").unwrap();
        let engine = StochasticEngine::new();
        for seed in 0..100 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let conformation = engine.generate(&chain, &mut rng).unwrap();
            assert!(conformation.is_self_avoiding());
            assert!(conformation.is_connected());
        }
    }

    #[test]
    fn placements_match_the_chain_prefix() {
        let chain = Chain::parse("HHPPHPPH").unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let conformation = StochasticEngine::new().generate(&chain, &mut rng).unwrap();
        for (placement, &residue) in conformation.placements().iter().zip(chain.residues()) {
            assert_eq!(placement.residue, residue);
        }
    }

    #[test]
    fn same_seed_reproduces_the_walk() {
        let chain = Chain::parse("HPHPPHHPHP").unwrap();
        let engine = StochasticEngine::new();
        let mut a = ChaCha8Rng::seed_from_u64(77);
        let mut b = ChaCha8Rng::seed_from_u64(77);
        let first = engine.generate(&chain, &mut a).unwrap();
        let second = engine.generate(&chain, &mut b).unwrap();
        assert_eq!(first.placements(), second.placements());
    }
}
