//! Headless simulation of whole games.
//!
//! - `AutoPlayConfig`: move cap, mistake rate, seeds
//! - `AutoPlayer`: plays games through the public command surface
//! - `PlayReport` / `BatchSummary`: per-game and per-batch results

pub mod autoplay;

pub use autoplay::{AutoPlayConfig, AutoPlayer, BatchSummary, PlayReport};
