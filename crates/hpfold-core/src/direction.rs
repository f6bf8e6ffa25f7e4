//! The direction model: absolute headings and chain-relative turns.
//!
//! Placement engines walk the lattice in one of two vocabularies. The
//! stochastic and backtracking engines think in absolute cells; the
//! directional engine thinks in chain-relative turns (left / straight /
//! right of the previous move) and needs the rotation table in
//! [`Orientation::apply`] to convert turns back into absolute moves.
//! [`relative_step`] is the inverse: it retroactively classifies the
//! moves of an already-placed chain.

use std::fmt;

/// Absolute heading on the lattice, implied by the most recent move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Toward decreasing row indices.
    Up,
    /// Toward increasing row indices.
    Down,
    /// Toward decreasing column indices.
    Left,
    /// Toward increasing column indices.
    Right,
}

impl Orientation {
    /// The `(dr, dc)` move vector for one step in this heading.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Orientation::Up => (-1, 0),
            Orientation::Down => (1, 0),
            Orientation::Left => (0, -1),
            Orientation::Right => (0, 1),
        }
    }

    /// The heading after taking `turn` relative to this one.
    ///
    /// The four orientations form a cyclic group under left/right
    /// rotation; `Straight` is the identity. The match is exhaustive
    /// over all 12 orientation × turn cases — no default arm, so a new
    /// variant cannot silently pass through.
    pub fn apply(self, turn: Turn) -> Orientation {
        match (self, turn) {
            (Orientation::Up, Turn::Left) => Orientation::Left,
            (Orientation::Up, Turn::Straight) => Orientation::Up,
            (Orientation::Up, Turn::Right) => Orientation::Right,
            (Orientation::Down, Turn::Left) => Orientation::Right,
            (Orientation::Down, Turn::Straight) => Orientation::Down,
            (Orientation::Down, Turn::Right) => Orientation::Left,
            (Orientation::Left, Turn::Left) => Orientation::Down,
            (Orientation::Left, Turn::Straight) => Orientation::Left,
            (Orientation::Left, Turn::Right) => Orientation::Up,
            (Orientation::Right, Turn::Left) => Orientation::Up,
            (Orientation::Right, Turn::Straight) => Orientation::Right,
            (Orientation::Right, Turn::Right) => Orientation::Down,
        }
    }

    /// The opposite heading.
    pub fn reverse(self) -> Orientation {
        match self {
            Orientation::Up => Orientation::Down,
            Orientation::Down => Orientation::Up,
            Orientation::Left => Orientation::Right,
            Orientation::Right => Orientation::Left,
        }
    }

    /// Recover a heading from a unit move vector.
    ///
    /// Returns `None` for anything that is not a single cardinal step.
    pub fn from_offset(dr: i32, dc: i32) -> Option<Orientation> {
        match (dr, dc) {
            (-1, 0) => Some(Orientation::Up),
            (1, 0) => Some(Orientation::Down),
            (0, -1) => Some(Orientation::Left),
            (0, 1) => Some(Orientation::Right),
            _ => None,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// A chain-relative turn: the next move expressed relative to the
/// heading of the previous one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
    /// Rotate the heading 90° counter-clockwise.
    Left,
    /// Keep the heading unchanged.
    Straight,
    /// Rotate the heading 90° clockwise.
    Right,
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Straight => write!(f, "straight"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// Retroactive classification of one step of a placed chain.
///
/// `Start` marks the first placement, which has no previous move to be
/// relative to. The remaining variants mirror [`Turn`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RelativeStep {
    /// The first placement of the chain.
    Start,
    /// The move turned left relative to the previous heading.
    Left,
    /// The move continued in the previous heading.
    Straight,
    /// The move turned right relative to the previous heading.
    Right,
}

impl RelativeStep {
    /// The turn this step encodes, or `None` for `Start`.
    pub fn as_turn(self) -> Option<Turn> {
        match self {
            RelativeStep::Start => None,
            RelativeStep::Left => Some(Turn::Left),
            RelativeStep::Straight => Some(Turn::Straight),
            RelativeStep::Right => Some(Turn::Right),
        }
    }
}

impl From<Turn> for RelativeStep {
    fn from(turn: Turn) -> Self {
        match turn {
            Turn::Left => RelativeStep::Left,
            Turn::Straight => RelativeStep::Straight,
            Turn::Right => RelativeStep::Right,
        }
    }
}

impl fmt::Display for RelativeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Left => write!(f, "left"),
            Self::Straight => write!(f, "straight"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// Classify the step with heading `next` taken after a step with
/// heading `prev`.
///
/// `prev = None` means there was no previous move, so the step is the
/// chain [`RelativeStep::Start`]. A reversal (`next` opposite to
/// `prev`) is not representable as a turn — a self-avoiding walk never
/// produces one — and yields `None`.
pub fn relative_step(prev: Option<Orientation>, next: Orientation) -> Option<RelativeStep> {
    let Some(prev) = prev else {
        return Some(RelativeStep::Start);
    };
    if next == prev {
        return Some(RelativeStep::Straight);
    }
    if next == prev.apply(Turn::Left) {
        return Some(RelativeStep::Left);
    }
    if next == prev.apply(Turn::Right) {
        return Some(RelativeStep::Right);
    }
    // next == prev.reverse()
    None
}
