//! Depth-first placement with true backtracking and fence-bounded
//! dead-end retries.

use std::collections::VecDeque;

use hpfold_core::{Chain, Residue};
use hpfold_lattice::{Conformation, Lattice, Placement};
use rand::prelude::*;
use rand::RngCore;

use crate::engine::PlacementEngine;
use crate::error::EngineError;

/// The backtracking placement engine.
///
/// Walks like the stochastic engine — shuffled uniform choice among
/// free 4-neighbours — but a dead end un-places the most recent
/// residue and resumes from its predecessor instead of terminating.
///
/// Naive backtracking can oscillate between the same two dead ends
/// forever. Each abandoned cell is therefore marked as a fence
/// (temporarily forbidden), forcing the search into new territory.
/// Once the walk has placed more residues since the last backtrack
/// than there are accumulated fences — real forward progress — every
/// fence is cleared, so the retry trail cannot permanently seal off a
/// region. The comparison is a tuned heuristic; changing it changes
/// the sampling distribution.
#[derive(Clone, Copy, Debug, Default)]
pub struct BacktrackingEngine;

impl BacktrackingEngine {
    /// Create the engine.
    pub fn new() -> Self {
        Self
    }
}

/// Mutable state of one backtracking search, advanced iteratively.
///
/// An explicit state machine rather than recursion: the search depth
/// is bounded by the chain length, but the total number of steps is
/// not, and long chains must not be able to overflow the call stack.
struct Search {
    lattice: Lattice,
    remaining: VecDeque<Residue>,
    placements: Vec<Placement>,
    backtracks: u64,
    just_backtracked: bool,
    fences: u64,
    placed_since_backtrack: u64,
}

impl PlacementEngine for BacktrackingEngine {
    fn name(&self) -> &str {
        "backtracking"
    }

    fn generate(
        &self,
        chain: &Chain,
        rng: &mut dyn RngCore,
    ) -> Result<Conformation, EngineError> {
        let mut search = Search {
            lattice: Lattice::for_chain(chain),
            remaining: chain.residues().iter().copied().collect(),
            placements: Vec::with_capacity(chain.len()),
            backtracks: 0,
            just_backtracked: false,
            fences: 0,
            placed_since_backtrack: 0,
        };

        // First residue always lands at the center.
        if let Some(residue) = search.remaining.pop_front() {
            let center = search.lattice.center();
            search.lattice.place(center, residue)?;
            search.placements.push(Placement::new(residue, center));
        }

        while let Some(&residue) = search.remaining.front() {
            let Some(last) = search.placements.last().map(|p| p.position) else {
                // Un-placed everything, including the first residue:
                // the search space is exhausted.
                return Err(EngineError::SearchExhausted {
                    chain_len: chain.len(),
                    backtracks: search.backtracks,
                });
            };

            let mut candidates = search.lattice.free_neighbours(last);
            candidates.shuffle(rng);

            if let Some(&target) = candidates.first() {
                // Forward step.
                search.remaining.pop_front();
                search.lattice.place(target, residue)?;
                search.placements.push(Placement::new(residue, target));
                search.placed_since_backtrack += 1;
                search.just_backtracked = false;
            } else {
                // Dead end: un-place the last residue and fence its
                // cell so the retry does not walk straight back in.
                search.backtracks += 1;
                let abandoned = search
                    .placements
                    .pop()
                    .expect("dead end implies at least one placement");
                search.remaining.push_front(abandoned.residue);
                search.lattice.fence(abandoned.position)?;
                search.fences += 1;

                // Enough forward progress since the last backtrack
                // pays off the whole fence trail.
                if !search.just_backtracked
                    && search.placed_since_backtrack > search.fences
                {
                    search.lattice.clear_fences();
                    search.fences = 0;
                }
                search.placed_since_backtrack = 0;
                search.just_backtracked = true;
            }
        }

        // Fences are search scaffolding; the finished conformation
        // holds residues only.
        search.lattice.clear_fences();
        Ok(Conformation::new(
            search.lattice,
            search.placements,
            search.backtracks,
        ))
    }
}
