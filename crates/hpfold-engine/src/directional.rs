//! Deterministic-directional placement: a pre-committed turn sequence
//! walked rigidly.

use std::fmt;

use hpfold_core::{Chain, Orientation, RelativeStep, Turn};
use hpfold_lattice::{Conformation, Lattice, Placement};
use rand::prelude::*;
use rand::RngCore;

use crate::engine::PlacementEngine;
use crate::error::EngineError;

/// A chain-relative turn sequence, one step per residue.
///
/// Index 0 is always [`RelativeStep::Start`] and index 1 is fixed to
/// `Straight`; every later step is free. The whole sequence is
/// committed before any placement begins — the walk cannot route
/// around an obstacle it meets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnSequence {
    steps: Vec<RelativeStep>,
}

impl TurnSequence {
    /// Draw a random sequence for a chain of `len` residues.
    ///
    /// Steps at index ≥ 2 are uniform over left/straight/right.
    pub fn random(len: usize, rng: &mut dyn RngCore) -> Self {
        let mut steps = Vec::with_capacity(len);
        if len >= 1 {
            steps.push(RelativeStep::Start);
        }
        if len >= 2 {
            steps.push(RelativeStep::Straight);
        }
        while steps.len() < len {
            let turn = match rng.random_range(0..3) {
                0 => Turn::Left,
                1 => Turn::Straight,
                _ => Turn::Right,
            };
            steps.push(RelativeStep::from(turn));
        }
        Self { steps }
    }

    /// Wrap an externally generated sequence.
    pub fn from_steps(steps: Vec<RelativeStep>) -> Self {
        Self { steps }
    }

    /// Number of steps (one per residue).
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the sequence has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The steps in chain order.
    pub fn steps(&self) -> &[RelativeStep] {
        &self.steps
    }
}

impl fmt::Display for TurnSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for step in &self.steps {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{step}")?;
            first = false;
        }
        Ok(())
    }
}

/// The deterministic-directional placement engine.
///
/// Pre-generates (or is given) a [`TurnSequence`], then walks it with
/// absolute-direction bookkeeping: the initial orientation is `Right`,
/// and each turn rotates the heading before stepping. The first
/// occupied or out-of-bounds target terminates the run with a partial
/// order — rigidity makes this engine strictly more collision-prone
/// than the stochastic one.
#[derive(Clone, Debug, Default)]
pub struct DirectionalEngine {
    sequence: Option<TurnSequence>,
}

impl DirectionalEngine {
    /// Engine that draws a fresh random turn sequence per run.
    pub fn new() -> Self {
        Self { sequence: None }
    }

    /// Engine that replays the given turn sequence on every run.
    pub fn with_sequence(sequence: TurnSequence) -> Self {
        Self {
            sequence: Some(sequence),
        }
    }

    fn walk(
        &self,
        chain: &Chain,
        sequence: &TurnSequence,
    ) -> Result<Conformation, EngineError> {
        if sequence.len() != chain.len() {
            return Err(EngineError::TurnSequenceMismatch {
                expected: chain.len(),
                actual: sequence.len(),
            });
        }

        let mut lattice = Lattice::for_chain(chain);
        let mut placements = Vec::with_capacity(chain.len());
        let mut heading = Orientation::Right;
        let mut current = lattice.center();

        for (index, (&residue, &step)) in
            chain.residues().iter().zip(sequence.steps()).enumerate()
        {
            if index == 0 {
                if step != RelativeStep::Start {
                    return Err(EngineError::MisplacedStart { index: 0 });
                }
            } else {
                let turn = step
                    .as_turn()
                    .ok_or(EngineError::MisplacedStart { index })?;
                heading = heading.apply(turn);
                let target = current.step(heading);
                // The pre-committed path cannot route around anything:
                // the first blocked target ends the run.
                if !lattice.is_free(target) {
                    break;
                }
                current = target;
            }
            lattice.place(current, residue)?;
            placements.push(Placement::new(residue, current));
        }

        Ok(Conformation::new(lattice, placements, 0))
    }
}

impl PlacementEngine for DirectionalEngine {
    fn name(&self) -> &str {
        "directional"
    }

    fn generate(
        &self,
        chain: &Chain,
        rng: &mut dyn RngCore,
    ) -> Result<Conformation, EngineError> {
        match &self.sequence {
            Some(sequence) => self.walk(chain, sequence),
            None => {
                let sequence = TurnSequence::random(chain.len(), rng);
                self.walk(chain, &sequence)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hpfold_core::Position;
    use rand_chacha::ChaCha8Rng;

    fn straight_sequence(len: usize) -> TurnSequence {
        let mut steps = vec![RelativeStep::Start];
        steps.resize(len, RelativeStep::Straight);
        TurnSequence::from_steps(steps)
    }

    // ── TurnSequence ────────────────────────────────────────────

    #[test]
    fn random_sequence_has_fixed_prefix() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for len in 2..20 {
            let sequence = TurnSequence::random(len, &mut rng);
            assert_eq!(sequence.len(), len);
            assert_eq!(sequence.steps()[0], RelativeStep::Start);
            assert_eq!(sequence.steps()[1], RelativeStep::Straight);
            assert!(sequence.steps()[2..]
                .iter()
                .all(|s| *s != RelativeStep::Start));
        }
    }

    // ── Walking ─────────────────────────────────────────────────

    #[test]
    fn all_straight_walks_a_line_east() {
        let chain = Chain::parse("HHPPH").unwrap();
        let engine = DirectionalEngine::with_sequence(straight_sequence(5));
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let conformation = engine.generate(&chain, &mut rng).unwrap();

        assert!(conformation.is_complete(5));
        let center = conformation.lattice().center();
        for (i, placement) in conformation.placements().iter().enumerate() {
            assert_eq!(
                placement.position,
                Position::new(center.row, center.col + i as i32)
            );
        }
        // A straight line trims to a single row.
        assert_eq!(conformation.trimmed().unwrap().shape(), (1, 5));
    }

    #[test]
    fn two_lefts_walk_a_u_shape() {
        let steps = vec![
            RelativeStep::Start,
            RelativeStep::Straight,
            RelativeStep::Left,
            RelativeStep::Left,
        ];
        let chain = Chain::parse("HPHP").unwrap();
        let engine = DirectionalEngine::with_sequence(TurnSequence::from_steps(steps));
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let conformation = engine.generate(&chain, &mut rng).unwrap();
        assert!(conformation.is_self_avoiding());
        assert!(conformation.is_connected());
        assert!(conformation.is_complete(4));
        // The U folds into a 2x2 block.
        assert_eq!(conformation.trimmed().unwrap().shape(), (2, 2));
    }

    #[test]
    fn collision_terminates_early() {
        // start, straight, then three lefts walk the 2x2 loop shut:
        // the fifth target is the start cell, which is occupied.
        let steps = vec![
            RelativeStep::Start,
            RelativeStep::Straight,
            RelativeStep::Left,
            RelativeStep::Left,
            RelativeStep::Left,
        ];
        let chain = Chain::parse("HPHPH").unwrap();
        let engine = DirectionalEngine::with_sequence(TurnSequence::from_steps(steps));
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let conformation = engine.generate(&chain, &mut rng).unwrap();
        assert_eq!(conformation.residues_placed(), 4);
        assert!(!conformation.is_complete(5));
    }

    #[test]
    fn sequence_length_mismatch_is_rejected() {
        let chain = Chain::parse("HHPPH").unwrap();
        let engine = DirectionalEngine::with_sequence(straight_sequence(4));
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        match engine.generate(&chain, &mut rng) {
            Err(EngineError::TurnSequenceMismatch {
                expected: 5,
                actual: 4,
            }) => {}
            other => panic!("expected TurnSequenceMismatch, got {other:?}"),
        }
    }

    #[test]
    fn misplaced_start_is_rejected() {
        let steps = vec![
            RelativeStep::Start,
            RelativeStep::Straight,
            RelativeStep::Start,
            RelativeStep::Left,
            RelativeStep::Left,
        ];
        let chain = Chain::parse("HHPPH").unwrap();
        let engine = DirectionalEngine::with_sequence(TurnSequence::from_steps(steps));
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        match engine.generate(&chain, &mut rng) {
            Err(EngineError::MisplacedStart { index: 2 }) => {}
            other => panic!("expected MisplacedStart, got {other:?}"),
        }
    }

    #[test]
    fn random_walks_hold_the_invariants() {
        let chain = Chain::parse("HPHPPHHPHPPH").unwrap();
        let engine = DirectionalEngine::new();
        for seed in 0..100 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let conformation = engine.generate(&chain, &mut rng).unwrap();
            assert!(conformation.is_self_avoiding());
            assert!(conformation.is_connected());
            assert!(conformation.residues_placed() >= 2);
        }
    }

    #[test]
    fn replayed_sequence_is_deterministic() {
        let chain = Chain::parse("HPHPPHHP").unwrap();
        let mut seed_rng = ChaCha8Rng::seed_from_u64(11);
        let sequence = TurnSequence::random(chain.len(), &mut seed_rng);
        let engine = DirectionalEngine::with_sequence(sequence);
        let mut a = ChaCha8Rng::seed_from_u64(0);
        let mut b = ChaCha8Rng::seed_from_u64(999);
        // The committed sequence ignores the per-run RNG entirely.
        let first = engine.generate(&chain, &mut a).unwrap();
        let second = engine.generate(&chain, &mut b).unwrap();
        assert_eq!(first.placements(), second.placements());
    }
}
