//! Error types for placement engines.

use std::error::Error;
use std::fmt;

use hpfold_lattice::LatticeError;

/// Errors from a placement engine run.
///
/// Ordinary dead ends are not errors: the stochastic and directional
/// engines report them as a short [`Conformation`], and the
/// backtracking engine retries. Only a fully exhausted search, a bad
/// turn sequence, or a violated lattice invariant surfaces here.
///
/// [`Conformation`]: hpfold_lattice::Conformation
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// The backtracking search un-placed every residue without finding
    /// a self-avoiding walk. Rare, but reportable — never treated as
    /// success.
    SearchExhausted {
        /// Length of the chain that was being placed.
        chain_len: usize,
        /// Backtracks performed before giving up.
        backtracks: u64,
    },
    /// A caller-supplied turn sequence does not match the chain length.
    TurnSequenceMismatch {
        /// Turns expected (one per residue).
        expected: usize,
        /// Turns supplied.
        actual: usize,
    },
    /// A caller-supplied turn sequence has a `Start` step after
    /// index 0.
    MisplacedStart {
        /// Index of the offending step.
        index: usize,
    },
    /// A lattice invariant was violated. Defensive: indicates an
    /// engine bug, not a search state. Never retried.
    Lattice(LatticeError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SearchExhausted {
                chain_len,
                backtracks,
            } => {
                write!(
                    f,
                    "no self-avoiding walk found for chain of length {chain_len} \
                     after {backtracks} backtracks"
                )
            }
            Self::TurnSequenceMismatch { expected, actual } => {
                write!(
                    f,
                    "turn sequence length {actual} does not match chain length {expected}"
                )
            }
            Self::MisplacedStart { index } => {
                write!(f, "turn sequence has a start step at index {index}")
            }
            Self::Lattice(e) => write!(f, "lattice invariant violated: {e}"),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Lattice(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LatticeError> for EngineError {
    fn from(e: LatticeError) -> Self {
        Self::Lattice(e)
    }
}
