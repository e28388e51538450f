//! Engine error taxonomy.
//!
//! Silent no-ops (selecting past three cards, asking for a hint when none is
//! cached) are not errors and never show up here.

use thiserror::Error;

use crate::cards::Card;
use crate::table::Position;

/// Errors raised by the deck, the table and the game state machine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A draw was attempted with no cards left. Recoverable: the caller
    /// treats it as "no card available".
    #[error("the deck is empty")]
    EmptyDeck,

    /// A card was placed on a position that already holds one.
    #[error("table position {0} is already occupied")]
    SlotOccupied(Position),

    /// A card was returned to a deck that already contains it.
    #[error("card {0} is already in the deck")]
    DuplicateCard(Card),

    /// The no-set redeal loop did not converge.
    #[error("no set on the table after {attempts} deal attempts")]
    DealExhausted { attempts: u32 },

    /// A previous `DealExhausted` left the session in an untrusted state.
    #[error("the session is faulted and must be recreated")]
    SessionFaulted,
}

impl EngineError {
    /// Whether this error poisons the session.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, EngineError::DealExhausted { .. } | EngineError::SessionFaulted)
    }
}

/// Result alias used across the engine.
pub type Result<T> = std::result::Result<T, EngineError>;
