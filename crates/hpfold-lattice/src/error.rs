//! Error types for lattice operations.

use std::error::Error;
use std::fmt;

use hpfold_core::Position;

/// Errors from lattice construction or placement.
///
/// `OutOfBounds` and `Occupied` are defensive invariant violations: a
/// correct engine bounds-checks and occupancy-checks before placing,
/// so observing either from engine code indicates a bug, not a search
/// state. Dead ends are never reported through this type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LatticeError {
    /// A lattice was requested with a zero dimension.
    EmptyLattice,
    /// The target cell lies outside the lattice.
    OutOfBounds {
        /// The offending position.
        position: Position,
        /// Number of rows in the lattice.
        rows: usize,
        /// Number of columns in the lattice.
        cols: usize,
    },
    /// The target cell is already occupied (residue or fence).
    Occupied {
        /// The offending position.
        position: Position,
    },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLattice => write!(f, "lattice must have at least one cell"),
            Self::OutOfBounds {
                position,
                rows,
                cols,
            } => {
                write!(f, "position {position} out of bounds for {rows}x{cols} lattice")
            }
            Self::Occupied { position } => {
                write!(f, "cell {position} is already occupied")
            }
        }
    }
}

impl Error for LatticeError {}
