//! Lattice positions and adjacency predicates.

use std::fmt;

use crate::direction::Orientation;

/// A `(row, col)` coordinate on the square lattice.
///
/// Rows grow downward and columns grow rightward, matching row-major
/// storage. Coordinates are signed so that off-lattice targets can be
/// computed and then bounds-checked, rather than wrapping silently.
///
/// The derived ordering is row-major (row first, then column) and is
/// used as the total order for canonical contact-pair identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Row index, growing downward.
    pub row: i32,
    /// Column index, growing rightward.
    pub col: i32,
}

impl Position {
    /// Create a position from row and column indices.
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The position offset by `(dr, dc)`.
    pub fn offset(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// The position one cell away in the direction of `heading`.
    pub fn step(self, heading: Orientation) -> Self {
        let (dr, dc) = heading.offset();
        self.offset(dr, dc)
    }

    /// Manhattan (L1) distance to `other`.
    ///
    /// Matches the graph geodesic for a 4-connected grid.
    pub fn manhattan(self, other: Self) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Whether `other` is one of the four lattice-adjacent cells.
    pub fn is_adjacent(self, other: Self) -> bool {
        self.manhattan(other) == 1
    }

    /// The move vector `(dr, dc)` from `from` to `self`.
    pub fn delta_from(self, from: Self) -> (i32, i32) {
        (self.row - from.row, self.col - from.col)
    }

    /// The four lattice-adjacent positions in N/S/W/E order.
    ///
    /// No bounds information is applied here; callers filter against
    /// their lattice.
    pub fn neighbours(self) -> [Self; 4] {
        [
            self.offset(-1, 0),
            self.offset(1, 0),
            self.offset(0, -1),
            self.offset(0, 1),
        ]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
