//! The conformation record a placement engine returns.

use hpfold_core::{Position, Residue};

use crate::lattice::Lattice;

/// One residue landed on the lattice, in placement order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// The residue that was placed.
    pub residue: Residue,
    /// Where it landed.
    pub position: Position,
}

impl Placement {
    /// Create a placement record.
    pub fn new(residue: Residue, position: Position) -> Self {
        Self { residue, position }
    }
}

/// The product of one placement run: the full lattice, the ordered
/// placements, and the run's backtrack count.
///
/// The placement order may be shorter than the chain when a
/// non-backtracking engine hit a dead end; that is a normal outcome,
/// not an error — [`is_complete`](Self::is_complete) distinguishes.
/// Once returned, a conformation is immutable.
#[derive(Clone, Debug)]
pub struct Conformation {
    lattice: Lattice,
    placements: Vec<Placement>,
    backtracks: u64,
}

impl Conformation {
    /// Assemble a conformation from a finished run.
    ///
    /// Engines uphold the placement invariants (self-avoidance, chain
    /// connectivity, first placement at the lattice center); the
    /// predicates below let tests verify them.
    pub fn new(lattice: Lattice, placements: Vec<Placement>, backtracks: u64) -> Self {
        Self {
            lattice,
            placements,
            backtracks,
        }
    }

    /// The full (untrimmed) lattice.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// The placements in the order they landed.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Number of residues actually on the lattice.
    pub fn residues_placed(&self) -> usize {
        self.placements.len()
    }

    /// How many times the engine backtracked. Zero for the
    /// non-backtracking engines.
    pub fn backtracks(&self) -> u64 {
        self.backtracks
    }

    /// Whether every residue of a chain of `chain_len` was placed.
    pub fn is_complete(&self, chain_len: usize) -> bool {
        self.placements.len() == chain_len
    }

    /// The lattice cut down to the bounding box of the placed chain.
    ///
    /// `None` when nothing was placed.
    pub fn trimmed(&self) -> Option<Lattice> {
        self.lattice.trimmed()
    }

    /// No two placements share a cell.
    pub fn is_self_avoiding(&self) -> bool {
        for (i, a) in self.placements.iter().enumerate() {
            for b in &self.placements[i + 1..] {
                if a.position == b.position {
                    return false;
                }
            }
        }
        true
    }

    /// Every placement after the first is lattice-adjacent to its
    /// predecessor.
    pub fn is_connected(&self) -> bool {
        self.placements
            .windows(2)
            .all(|w| w[0].position.is_adjacent(w[1].position))
    }
}
