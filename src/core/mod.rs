//! Core engine types: RNG, configuration, errors, time.
//!
//! Nothing here knows about cards or tables; the game modules build on it.

pub mod rng;
pub mod config;
pub mod error;
pub mod clock;

pub use rng::{GameRng, GameRngState};
pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use clock::{Clock, ManualClock, SystemClock};
