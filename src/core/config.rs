//! Engine configuration.
//!
//! The table shape and deck composition are fixed by the rules of SET;
//! what a host can tune is the seed, the reshuffle bound and message timing.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default bound on consecutive no-set redeals.
pub const DEFAULT_MAX_DEAL_ATTEMPTS: u32 = 50;

/// Default visibility window for transient messages.
pub const DEFAULT_MESSAGE_DURATION: Duration = Duration::from_secs(2);

/// Default delay between GameOver and the restart prompt.
pub const DEFAULT_RESTART_PROMPT_DELAY: Duration = Duration::from_secs(2);

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Seed for the shuffle stream. Same seed produces the same deals.
    pub seed: u64,

    /// How many times a deal may be redone because the table holds no set
    /// before the session is declared broken.
    pub max_deal_attempts: u32,

    /// How long a transient message stays visible after it is issued.
    pub message_duration: Duration,

    /// How long after GameOver the restart prompt appears.
    pub restart_prompt_delay: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_deal_attempts: DEFAULT_MAX_DEAL_ATTEMPTS,
            message_duration: DEFAULT_MESSAGE_DURATION,
            restart_prompt_delay: DEFAULT_RESTART_PROMPT_DELAY,
        }
    }
}

impl EngineConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the redeal bound.
    ///
    /// Panics if `attempts` is zero: at least one deal must be tried.
    #[must_use]
    pub fn with_max_deal_attempts(mut self, attempts: u32) -> Self {
        assert!(attempts > 0, "Must allow at least one deal attempt");
        self.max_deal_attempts = attempts;
        self
    }

    /// Set the message visibility window.
    #[must_use]
    pub fn with_message_duration(mut self, duration: Duration) -> Self {
        self.message_duration = duration;
        self
    }

    /// Set the restart prompt delay.
    #[must_use]
    pub fn with_restart_prompt_delay(mut self, delay: Duration) -> Self {
        self.restart_prompt_delay = delay;
        self
    }
}
