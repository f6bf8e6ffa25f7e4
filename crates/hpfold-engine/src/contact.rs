//! Hydrophobic contact analysis of a finished conformation.
//!
//! An H-bond here is a lattice-adjacency between two H residues that
//! are *not* consecutive in the chain: grid adjacency minus the
//! covalent backbone. The analyzer only reads; conformations are
//! immutable once an engine returns them.

use std::fmt;

use hpfold_core::{relative_step, Orientation, Position, RelativeStep};
use hpfold_lattice::{Conformation, Placement};
use indexmap::IndexSet;

/// An unordered pair of lattice positions with canonical identity.
///
/// The two positions are stored sorted by the row-major total order,
/// so `{a, b}` and `{b, a}` construct the same value and set insertion
/// deduplicates without any hashing tricks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ContactPair {
    lo: Position,
    hi: Position,
}

impl ContactPair {
    /// Canonicalize an unordered pair.
    pub fn new(a: Position, b: Position) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    /// The lesser position (row-major order).
    pub fn lo(&self) -> Position {
        self.lo
    }

    /// The greater position (row-major order).
    pub fn hi(&self) -> Position {
        self.hi
    }
}

impl fmt::Display for ContactPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.lo, self.hi)
    }
}

/// The contact count of one conformation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactSummary {
    /// Non-covalent H–H lattice contacts.
    pub h_bonds: usize,
    /// Residues actually on the lattice (may be fewer than the chain
    /// requested when placement terminated early).
    pub residues: usize,
}

impl ContactSummary {
    /// H-bonds per placed residue.
    ///
    /// `None` when no residue is on the lattice — the ratio is
    /// undefined there and callers must not see a NaN.
    pub fn h_ratio(&self) -> Option<f64> {
        if self.residues == 0 {
            return None;
        }
        Some(self.h_bonds as f64 / self.residues as f64)
    }
}

/// All unordered H–H pairs that are lattice-adjacent on the grid.
///
/// Includes covalent neighbours; [`analyze`] subtracts those.
pub fn grid_h_pairs(conformation: &Conformation) -> IndexSet<ContactPair> {
    let lattice = conformation.lattice();
    let mut pairs = IndexSet::new();
    for placement in conformation.placements() {
        if !placement.residue.is_hydrophobic() {
            continue;
        }
        for neighbour in placement.position.neighbours() {
            let holds_h = lattice
                .get(neighbour)
                .and_then(|cell| cell.residue())
                .is_some_and(|residue| residue.is_hydrophobic());
            if holds_h {
                pairs.insert(ContactPair::new(placement.position, neighbour));
            }
        }
    }
    pairs
}

/// All unordered H–H pairs that are consecutive in the placement
/// order — the covalent backbone bonds.
pub fn sequence_h_pairs(conformation: &Conformation) -> IndexSet<ContactPair> {
    conformation
        .placements()
        .windows(2)
        .filter(|w| w[0].residue.is_hydrophobic() && w[1].residue.is_hydrophobic())
        .map(|w| ContactPair::new(w[0].position, w[1].position))
        .collect()
}

/// Count the non-covalent hydrophobic contacts of a conformation.
///
/// Grid H-pairs minus sequence H-pairs, with the residue count for the
/// ratio guard.
pub fn analyze(conformation: &Conformation) -> ContactSummary {
    let grid = grid_h_pairs(conformation);
    let sequence = sequence_h_pairs(conformation);
    let h_bonds = grid.difference(&sequence).count();
    ContactSummary {
        h_bonds,
        residues: conformation.residues_placed(),
    }
}

/// Retroactively classify a placement order into chain-relative steps.
///
/// One entry per move, so the result is one shorter than the order.
/// The first move has no previous heading and classifies as
/// [`RelativeStep::Start`]. Returns `None` if any consecutive pair is
/// not one lattice step apart, or if a move reverses the previous one
/// — neither occurs in an engine-produced order.
pub fn classify_steps(placements: &[Placement]) -> Option<Vec<RelativeStep>> {
    let mut steps = Vec::with_capacity(placements.len().saturating_sub(1));
    let mut previous: Option<Orientation> = None;
    for pair in placements.windows(2) {
        let (dr, dc) = pair[1].position.delta_from(pair[0].position);
        let heading = Orientation::from_offset(dr, dc)?;
        steps.push(relative_step(previous, heading)?);
        previous = Some(heading);
    }
    Some(steps)
}
