//! The game state machine and what it exposes to a renderer.
//!
//! ## Key Types
//!
//! - `Game` / `GameBuilder`: the session, its commands and queries
//! - `GamePhase`, `SelectOutcome`: lifecycle and command results
//! - `Selection`: up to three picked positions
//! - `Message`, `MessageKind`: transient on-screen messages with deadlines
//! - `TableSnapshot`: serializable frame view

pub mod engine;
pub mod message;
pub mod selection;
pub mod snapshot;

pub use engine::{Game, GameBuilder, GamePhase, SelectOutcome};
pub use message::{Message, MessageBoard, MessageKind};
pub use selection::{Selection, SELECTION_SIZE};
pub use snapshot::{SlotView, TableSnapshot};
