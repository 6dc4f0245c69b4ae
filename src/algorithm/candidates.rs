//! Per-cell candidate bookkeeping for superposed tiles

use bitvec::prelude::{BitVec, bitvec};

/// Set of tile indices still admissible for one cell
///
/// Backed by a bitvec over `0..tile_count`; candidates are only ever
/// removed, never re-added, so an emptied set stays empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateSet {
    bits: BitVec,
}

impl CandidateSet {
    /// The full set `{0..tile_count-1}`
    pub fn all(tile_count: usize) -> Self {
        Self {
            bits: bitvec![1; tile_count],
        }
    }

    /// Membership test
    pub fn contains(&self, tile: usize) -> bool {
        self.bits.get(tile).as_deref() == Some(&true)
    }

    /// Keep only the candidates accepted by the predicate
    pub fn retain(&mut self, mut keep: impl FnMut(usize) -> bool) {
        let dropped: Vec<usize> = self.bits.iter_ones().filter(|&index| !keep(index)).collect();
        for index in dropped {
            self.bits.set(index, false);
        }
    }

    /// Number of remaining candidates
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// True when every candidate has been filtered away (a contradiction)
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// The candidate at `position` in ascending index order
    pub fn nth(&self, position: usize) -> Option<usize> {
        self.bits.iter_ones().nth(position)
    }

    /// All remaining candidate indices in ascending order
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

/// Resolution state of a single grid cell
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellState {
    /// Committed to exactly one tile index
    Fixed(usize),
    /// Still holding a set of admissible tile indices
    Superposition(CandidateSet),
}

impl CellState {
    /// True once the cell has been committed to a tile
    pub const fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed(_))
    }

    /// Remaining candidate count, `None` for fixed cells
    pub fn candidate_count(&self) -> Option<usize> {
        match self {
            Self::Fixed(_) => None,
            Self::Superposition(set) => Some(set.count()),
        }
    }
}
