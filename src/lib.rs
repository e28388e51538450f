//! # set-engine
//!
//! Game-logic engine for single-player SET: 81 cards, each with four
//! three-valued attributes, dealt twelve at a time. The player picks three
//! cards; they form a set when every attribute is all-equal or all-distinct.
//!
//! ## Design Principles
//!
//! 1. **One owner**: a `Game` holds the deck, table, selection, hint and
//!    found sets as private fields. All mutation goes through its commands.
//!
//! 2. **Synchronous**: every command runs to completion; nothing sleeps.
//!    Timed messages carry deadlines checked by the render tick.
//!
//! 3. **Deterministic**: deals come from a seeded ChaCha8 stream, so a seed
//!    replays a session exactly.
//!
//! 4. **Renderer-agnostic**: the engine hands out card signatures and table
//!    positions; images, pixels and input devices belong to the host.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors, clock
//! - `cards`: attributes, cards, the deck
//! - `table`: the 12 fixed table positions
//! - `rules`: set judge and possibility search
//! - `game`: the state machine, messages, snapshots
//! - `sim`: headless auto-play

pub mod core;
pub mod cards;
pub mod table;
pub mod rules;
pub mod game;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{Clock, EngineConfig, EngineError, GameRng, GameRngState, ManualClock, Result, SystemClock};

pub use crate::cards::{all_cards, Attribute, Card, Deck, Value, CARD_COUNT};

pub use crate::table::{Position, Table, TABLE_SLOTS};

pub use crate::rules::{
    all_sets, count_sets, find_set, find_set_brute_force, is_valid_set, BruteForce, PairLookup, SetFinder, Triple,
};

pub use crate::game::{Game, GameBuilder, GamePhase, Message, MessageKind, SelectOutcome, TableSnapshot};

pub use crate::sim::{AutoPlayConfig, AutoPlayer, BatchSummary, PlayReport};
