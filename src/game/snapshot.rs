//! Read-only view of the game for renderers.
//!
//! Serializable so a renderer in another process can take it as JSON.

use serde::{Deserialize, Serialize};

use super::engine::GamePhase;
use crate::cards::Card;
use crate::table::Position;

/// One table position as a renderer sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotView {
    pub position: Position,
    pub column: usize,
    pub row: usize,
    pub card: Option<Card>,
    /// Asset lookup key (`Card::signature`) for the occupant.
    pub signature: Option<String>,
    pub selected: bool,
    /// Part of the revealed hint.
    pub hinted: bool,
}

/// Everything a frame needs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub phase: GamePhase,
    pub slots: Vec<SlotView>,
    pub deck_count: usize,
    pub found_sets: usize,
}

impl TableSnapshot {
    /// View of one position.
    #[must_use]
    pub fn slot(&self, position: Position) -> &SlotView {
        &self.slots[position.index()]
    }

    /// Card at a position.
    #[must_use]
    pub fn card(&self, position: Position) -> Option<Card> {
        self.slot(position).card
    }

    /// Number of occupied positions.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|s| s.card.is_some()).count()
    }
}
