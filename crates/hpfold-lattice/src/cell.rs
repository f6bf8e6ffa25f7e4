//! Lattice cell states.

use std::fmt;

use hpfold_core::Residue;

/// The state of one lattice cell.
///
/// `Fence` marks a cell the backtracking engine recently abandoned: it
/// blocks placement like a residue does, but holds no residue and is
/// cleared in bulk when the search makes real forward progress.
/// Keeping fences in the cell state (rather than a side list) keeps
/// every occupancy query O(1).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Nothing placed here.
    #[default]
    Empty,
    /// A hydrophobic residue.
    H,
    /// A polar residue.
    P,
    /// Temporarily forbidden by the backtracking engine.
    Fence,
}

impl Cell {
    /// Whether a residue may be placed here.
    pub fn is_free(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Whether this cell blocks placement (residue or fence).
    pub fn is_occupied(self) -> bool {
        !self.is_free()
    }

    /// The residue held by this cell, if any.
    pub fn residue(self) -> Option<Residue> {
        match self {
            Cell::H => Some(Residue::H),
            Cell::P => Some(Residue::P),
            Cell::Empty | Cell::Fence => None,
        }
    }

    /// One-character rendering used by the lattice `Display` impl.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::H => 'H',
            Cell::P => 'P',
            Cell::Fence => '#',
        }
    }
}

impl From<Residue> for Cell {
    fn from(residue: Residue) -> Self {
        match residue {
            Residue::H => Cell::H,
            Residue::P => Cell::P,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
