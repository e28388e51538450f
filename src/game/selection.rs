//! The player's current pick of up to three table positions.

use smallvec::SmallVec;

use crate::table::Position;

/// Cards needed for a judgement.
pub const SELECTION_SIZE: usize = 3;

/// Insertion-ordered set of up to three positions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    positions: SmallVec<[Position; SELECTION_SIZE]>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a position. Returns `false` (and changes nothing) when the
    /// position is already selected or the selection is full.
    pub fn push(&mut self, position: Position) -> bool {
        if self.is_full() || self.contains(position) {
            return false;
        }
        self.positions.push(position);
        true
    }

    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.positions.contains(&position)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.positions.len() == SELECTION_SIZE
    }

    /// Selected positions in pick order.
    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn clear(&mut self) {
        self.positions.clear();
    }
}
