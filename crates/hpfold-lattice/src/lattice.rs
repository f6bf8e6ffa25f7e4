//! The square occupancy lattice a placement run walks on.

use std::fmt;

use hpfold_core::{Chain, Position, Residue};
use smallvec::SmallVec;

use crate::cell::Cell;
use crate::error::LatticeError;

/// A dense row-major grid of [`Cell`] states.
///
/// A lattice is exclusively owned by one in-progress placement run.
/// [`Lattice::for_chain`] sizes it at twice the chain length per side,
/// so a walk started at the center can never reach a border: the chain
/// length never exceeds the grid radius.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lattice {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Lattice {
    /// Create an empty lattice with the given dimensions.
    ///
    /// Returns `Err(LatticeError::EmptyLattice)` if either dimension
    /// is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self, LatticeError> {
        if rows == 0 || cols == 0 {
            return Err(LatticeError::EmptyLattice);
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        })
    }

    /// Create the lattice for one placement run of `chain`.
    ///
    /// Sized `2 × chain length` in each dimension. Chains are at least
    /// two residues long, so the result is never empty.
    pub fn for_chain(chain: &Chain) -> Self {
        let side = 2 * chain.len();
        Self {
            rows: side,
            cols: side,
            cells: vec![Cell::Empty; side * side],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The `(rows, cols)` shape.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// The center cell, where every walk places its first residue.
    pub fn center(&self) -> Position {
        Position::new((self.rows / 2) as i32, (self.cols / 2) as i32)
    }

    /// Whether `position` lies on the lattice.
    pub fn in_bounds(&self, position: Position) -> bool {
        position.row >= 0
            && position.col >= 0
            && (position.row as usize) < self.rows
            && (position.col as usize) < self.cols
    }

    fn index(&self, position: Position) -> usize {
        position.row as usize * self.cols + position.col as usize
    }

    /// The cell at `position`, or `None` if out of bounds.
    pub fn get(&self, position: Position) -> Option<Cell> {
        if !self.in_bounds(position) {
            return None;
        }
        Some(self.cells[self.index(position)])
    }

    /// Whether `position` is on the lattice and free for placement.
    pub fn is_free(&self, position: Position) -> bool {
        self.get(position).is_some_and(Cell::is_free)
    }

    /// Place `residue` at `position`.
    ///
    /// Out-of-bounds or occupied targets are invariant violations: a
    /// correct engine checks both before placing. Neither is retried.
    pub fn place(&mut self, position: Position, residue: Residue) -> Result<(), LatticeError> {
        if !self.in_bounds(position) {
            return Err(LatticeError::OutOfBounds {
                position,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let index = self.index(position);
        if self.cells[index].is_occupied() {
            return Err(LatticeError::Occupied { position });
        }
        self.cells[index] = Cell::from(residue);
        Ok(())
    }

    /// Remove the residue at `position` and mark the cell as a fence.
    ///
    /// Used by the backtracking engine when it abandons a placement:
    /// the cell stops holding a residue but stays forbidden until the
    /// next [`clear_fences`](Self::clear_fences).
    pub fn fence(&mut self, position: Position) -> Result<(), LatticeError> {
        if !self.in_bounds(position) {
            return Err(LatticeError::OutOfBounds {
                position,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let index = self.index(position);
        self.cells[index] = Cell::Fence;
        Ok(())
    }

    /// Reset every fenced cell to empty. Returns how many were cleared.
    pub fn clear_fences(&mut self) -> usize {
        let mut cleared = 0;
        for cell in &mut self.cells {
            if *cell == Cell::Fence {
                *cell = Cell::Empty;
                cleared += 1;
            }
        }
        cleared
    }

    /// The free 4-neighbours of `position`, in N/S/W/E order.
    ///
    /// Fenced cells are occupied and therefore never returned.
    pub fn free_neighbours(&self, position: Position) -> SmallVec<[Position; 4]> {
        let mut result = SmallVec::new();
        for neighbour in position.neighbours() {
            if self.is_free(neighbour) {
                result.push(neighbour);
            }
        }
        result
    }

    /// Number of cells holding a residue (fences excluded).
    pub fn residue_count(&self) -> usize {
        self.cells.iter().filter(|c| c.residue().is_some()).count()
    }

    /// The tight bounding box `(min, max)` of all residue cells, both
    /// corners inclusive, or `None` if no residue is placed.
    pub fn bounding_box(&self) -> Option<(Position, Position)> {
        let mut bounds: Option<(Position, Position)> = None;
        for row in 0..self.rows {
            for col in 0..self.cols {
                let position = Position::new(row as i32, col as i32);
                if self.cells[self.index(position)].residue().is_none() {
                    continue;
                }
                bounds = Some(match bounds {
                    None => (position, position),
                    Some((min, max)) => (
                        Position::new(min.row.min(position.row), min.col.min(position.col)),
                        Position::new(max.row.max(position.row), max.col.max(position.col)),
                    ),
                });
            }
        }
        bounds
    }

    /// Copy of this lattice with empty border rows and columns removed.
    ///
    /// `None` if no residue is placed (there is nothing to trim to).
    pub fn trimmed(&self) -> Option<Lattice> {
        let (min, max) = self.bounding_box()?;
        let rows = (max.row - min.row + 1) as usize;
        let cols = (max.col - min.col + 1) as usize;
        let mut cells = Vec::with_capacity(rows * cols);
        for row in min.row..=max.row {
            for col in min.col..=max.col {
                cells.push(self.cells[self.index(Position::new(row, col))]);
            }
        }
        Some(Lattice { rows, cols, cells })
    }
}

impl fmt::Display for Lattice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let position = Position::new(row as i32, col as i32);
                write!(f, "{}", self.cells[self.index(position)].symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
