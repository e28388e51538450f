//! Headless auto-play.
//!
//! Drives a `Game` through its public commands only, the way a player
//! would: mostly by following the hint, optionally with deliberate random
//! picks. Useful for soak-testing the state machine and for gathering
//! statistics on how many sets a full game yields.

use serde::{Deserialize, Serialize};

use crate::core::{EngineConfig, GameRng, ManualClock, Result};
use crate::game::{Game, GameBuilder, SelectOutcome, SELECTION_SIZE};
use crate::table::Position;

/// Configuration for auto-play.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AutoPlayConfig {
    /// Maximum judgements per game (guards against a stuck game).
    pub max_moves: usize,

    /// Probability of a random pick instead of following the hint.
    pub mistake_rate: f64,

    /// Seed offset, combined with the game index for unique seeds.
    pub seed_offset: u64,

    /// Engine configuration; its seed is replaced per game.
    pub engine: EngineConfig,
}

impl Default for AutoPlayConfig {
    fn default() -> Self {
        Self {
            max_moves: 500,
            mistake_rate: 0.0,
            seed_offset: 0,
            engine: EngineConfig::default(),
        }
    }
}

impl AutoPlayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_moves(mut self, max: usize) -> Self {
        self.max_moves = max;
        self
    }

    pub fn with_mistake_rate(mut self, rate: f64) -> Self {
        self.mistake_rate = rate;
        self
    }

    pub fn with_seed_offset(mut self, offset: u64) -> Self {
        self.seed_offset = offset;
        self
    }

    pub fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }
}

/// How one auto-played game went.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayReport {
    pub seed: u64,
    pub sets_found: usize,
    /// Random picks that turned out not to be a set.
    pub mistakes: usize,
    /// Judgements made.
    pub moves: usize,
    pub reshuffles: u32,
    /// Cards still on the table at the end.
    pub cards_left: usize,
    /// Whether the game reached GameOver within `max_moves`.
    pub finished: bool,
}

/// Aggregate over a batch of reports.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub games: usize,
    pub finished: usize,
    pub min_sets: usize,
    pub max_sets: usize,
    pub mean_sets: f64,
    pub total_reshuffles: u64,
}

impl BatchSummary {
    /// Summarize reports. `None` for an empty batch.
    #[must_use]
    pub fn from_reports(reports: &[PlayReport]) -> Option<Self> {
        if reports.is_empty() {
            return None;
        }
        let total_sets: usize = reports.iter().map(|r| r.sets_found).sum();
        Some(Self {
            games: reports.len(),
            finished: reports.iter().filter(|r| r.finished).count(),
            min_sets: reports.iter().map(|r| r.sets_found).min().unwrap_or(0),
            max_sets: reports.iter().map(|r| r.sets_found).max().unwrap_or(0),
            mean_sets: total_sets as f64 / reports.len() as f64,
            total_reshuffles: reports.iter().map(|r| u64::from(r.reshuffles)).sum(),
        })
    }
}

/// Plays games through the public command surface.
#[derive(Clone, Debug, Default)]
pub struct AutoPlayer {
    config: AutoPlayConfig,
}

impl AutoPlayer {
    pub fn new(config: AutoPlayConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AutoPlayConfig {
        &self.config
    }

    /// Play an already-started game until it ends or `max_moves` is hit.
    ///
    /// `seed` drives the player's own choices, never the deals.
    pub fn play_game(&self, game: &mut Game, seed: u64) -> Result<PlayReport> {
        let mut rng = GameRng::new(seed).for_context("autoplay");
        let mut report = PlayReport {
            seed,
            sets_found: 0,
            mistakes: 0,
            moves: 0,
            reshuffles: 0,
            cards_left: 0,
            finished: false,
        };

        while report.moves < self.config.max_moves && !game.is_game_over() {
            let picks = if rng.gen_bool(self.config.mistake_rate) {
                random_picks(game, &mut rng)
            } else {
                game.request_hint();
                game.hint_positions().to_vec()
            };
            if picks.len() < SELECTION_SIZE {
                break;
            }

            let mut outcome = SelectOutcome::Ignored;
            for position in picks {
                outcome = game.select_card(position)?;
            }
            match outcome {
                SelectOutcome::SetFound { .. } => report.sets_found += 1,
                SelectOutcome::NotASet => report.mistakes += 1,
                SelectOutcome::Ignored | SelectOutcome::Selected { .. } => break,
            }
            report.moves += 1;
        }

        report.reshuffles = game.reshuffles();
        report.cards_left = game.table().len();
        report.finished = game.is_game_over();
        Ok(report)
    }

    /// Play `count` fresh standard games, seeded `seed_offset + i`.
    ///
    /// Games run on a manual clock; message timing is irrelevant here.
    pub fn play_games(&self, count: usize) -> Result<Vec<PlayReport>> {
        (0..count)
            .map(|i| {
                let seed = self.config.seed_offset.wrapping_add(i as u64);
                let mut game = GameBuilder::new()
                    .config(self.config.engine.clone().with_seed(seed))
                    .clock(ManualClock::new())
                    .start()?;
                self.play_game(&mut game, seed)
            })
            .collect()
    }
}

fn random_picks(game: &Game, rng: &mut GameRng) -> Vec<Position> {
    let mut occupied: Vec<Position> = game.table().occupied().map(|(p, _)| p).collect();
    rng.shuffle(&mut occupied);
    occupied.truncate(SELECTION_SIZE);
    occupied
}
