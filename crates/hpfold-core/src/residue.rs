//! HP residues and validated chains.

use std::fmt;

use rand::prelude::*;

use crate::error::ChainError;

/// One residue of the simplified HP protein model.
///
/// Every residue is either hydrophobic or polar; the model has no
/// further chemistry. Contacts between non-consecutive `H` residues
/// are the folding-stability proxy measured by the contact analyzer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Residue {
    /// Hydrophobic residue.
    H,
    /// Polar residue.
    P,
}

impl Residue {
    /// Parse a residue from its one-letter symbol.
    pub fn from_symbol(symbol: char) -> Option<Residue> {
        match symbol {
            'H' => Some(Residue::H),
            'P' => Some(Residue::P),
            _ => None,
        }
    }

    /// The one-letter symbol for this residue.
    pub fn symbol(self) -> char {
        match self {
            Residue::H => 'H',
            Residue::P => 'P',
        }
    }

    /// Whether this residue is hydrophobic.
    pub fn is_hydrophobic(self) -> bool {
        matches!(self, Residue::H)
    }
}

impl fmt::Display for Residue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An ordered, validated sequence of HP residues.
///
/// Construction enforces the chain contract: length at least 2, with
/// at least one hydrophobic and one polar residue. Placement engines
/// may rely on these invariants without re-checking.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chain {
    residues: Vec<Residue>,
}

impl Chain {
    /// Build a chain from residues, validating the chain contract.
    pub fn new(residues: Vec<Residue>) -> Result<Self, ChainError> {
        if residues.len() < 2 {
            return Err(ChainError::TooShort {
                len: residues.len(),
            });
        }
        if !residues.iter().any(|r| r.is_hydrophobic()) {
            return Err(ChainError::MissingHydrophobic);
        }
        if residues.iter().all(|r| r.is_hydrophobic()) {
            return Err(ChainError::MissingPolar);
        }
        Ok(Self { residues })
    }

    /// Parse a chain from a string of `H`/`P` symbols, e.g. `"HHPPH"`.
    pub fn parse(s: &str) -> Result<Self, ChainError> {
        let mut residues = Vec::with_capacity(s.len());
        for (index, symbol) in s.chars().enumerate() {
            let residue = Residue::from_symbol(symbol)
                .ok_or(ChainError::InvalidSymbol { symbol, index })?;
            residues.push(residue);
        }
        Self::new(residues)
    }

    /// Draw a random chain of `len` residues, each H or P with equal
    /// probability.
    ///
    /// Degenerate draws (all H or all P) are rejected and redrawn, so
    /// the returned chain always satisfies the chain contract. The
    /// result is a pure function of the RNG state.
    pub fn random(len: usize, rng: &mut dyn RngCore) -> Result<Self, ChainError> {
        if len < 2 {
            return Err(ChainError::TooShort { len });
        }
        loop {
            let residues: Vec<Residue> = (0..len)
                .map(|_| {
                    if rng.random::<bool>() {
                        Residue::H
                    } else {
                        Residue::P
                    }
                })
                .collect();
            if let Ok(chain) = Self::new(residues) {
                return Ok(chain);
            }
        }
    }

    /// Number of residues in the chain.
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    /// Always `false` — construction rejects chains shorter than 2.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The residues in chain order.
    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }

    /// Number of hydrophobic residues.
    pub fn hydrophobic_count(&self) -> usize {
        self.residues.iter().filter(|r| r.is_hydrophobic()).count()
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for residue in &self.residues {
            write!(f, "{residue}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn parse_round_trips_through_display() {
        let chain = Chain::parse("HHPPH").unwrap();
        assert_eq!(chain.len(), 5);
        assert_eq!(chain.to_string(), "HHPPH");
        assert_eq!(chain.hydrophobic_count(), 3);
    }

    #[test]
    fn parse_rejects_invalid_symbol() {
        match Chain::parse("HPX") {
            Err(ChainError::InvalidSymbol { symbol: 'X', index: 2 }) => {}
            other => panic!("expected InvalidSymbol, got {other:?}"),
        }
    }

    #[test]
    fn new_rejects_short_chains() {
        assert!(matches!(
            Chain::new(vec![Residue::H]),
            Err(ChainError::TooShort { len: 1 })
        ));
        assert!(matches!(Chain::parse(""), Err(ChainError::TooShort { len: 0 })));
    }

    #[test]
    fn new_rejects_single_class_chains() {
        assert!(matches!(
            Chain::parse("HHHH"),
            Err(ChainError::MissingPolar)
        ));
        assert!(matches!(
            Chain::parse("PPPP"),
            Err(ChainError::MissingHydrophobic)
        ));
    }

    #[test]
    fn random_chain_satisfies_the_contract() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for len in 2..=32 {
            let chain = Chain::random(len, &mut rng).unwrap();
            assert_eq!(chain.len(), len);
            assert!(chain.hydrophobic_count() >= 1);
            assert!(chain.hydrophobic_count() < len);
        }
    }

    #[test]
    fn random_rejects_length_below_two() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert!(matches!(
            Chain::random(1, &mut rng),
            Err(ChainError::TooShort { len: 1 })
        ));
    }
}
