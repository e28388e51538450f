//! The SET game state machine.
//!
//! ```text
//! NotStarted -> Dealing -> AwaitingSelection <-> Judging -> (Dealing | GameOver)
//!                                                  GameOver -> restart -> Dealing
//! ```
//!
//! `Dealing` and `Judging` only exist while a command runs; callers observe
//! `NotStarted`, `AwaitingSelection`, `GameOver` or `Faulted`.
//!
//! ## Conservation
//!
//! Deck, table and found sets always partition the card universe the
//! session started with (81 cards for a standard game). Cards of a found
//! set are retired and never dealt again.
//!
//! ## Usage
//!
//! ```
//! use set_engine::game::{GameBuilder, GamePhase};
//!
//! let mut game = GameBuilder::new().seed(7).start().unwrap();
//! assert_eq!(game.phase(), GamePhase::AwaitingSelection);
//! assert_eq!(game.table().len(), 12);
//! assert_eq!(game.deck_count(), 69);
//!
//! // A dealt table always holds a set; the hint names one.
//! let hint = game.request_hint().unwrap();
//! for position in game.hint_positions() {
//!     game.select_card(position).unwrap();
//! }
//! assert_eq!(game.found_sets_count(), 1);
//! assert!(game.found_sets().contains(&hint));
//! ```

use std::time::Instant;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, error, info, warn};

use super::message::{Message, MessageBoard, MessageKind};
use super::selection::{Selection, SELECTION_SIZE};
use super::snapshot::{SlotView, TableSnapshot};
use crate::cards::{Card, Deck};
use crate::core::{Clock, EngineConfig, EngineError, GameRng, Result, SystemClock};
use crate::rules::{broken_attributes, find_set, is_valid_set, Triple};
use crate::table::{Position, PositionList, Table};

/// Lifecycle phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Built but not dealt yet.
    NotStarted,
    /// Filling the table (transient).
    Dealing,
    /// Waiting for the player to pick cards.
    AwaitingSelection,
    /// Judging a full selection (transient).
    Judging,
    /// No set left and the deck is empty. Only `restart` leaves this phase.
    GameOver,
    /// A deal failed to converge or an invariant broke. The session must be
    /// recreated; `restart` does not apply.
    Faulted,
}

/// What a `select_card` command did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Empty position, already selected, or not accepting input.
    Ignored,
    /// Added to the selection, which now holds `count` cards.
    Selected { count: usize },
    /// The third card completed a set. `game_over` tells whether that was
    /// the last one.
    SetFound { game_over: bool },
    /// The third card did not complete a set; the selection was cleared.
    NotASet,
}

enum DealOutcome {
    SetOnTable,
    NoSetsLeft,
}

/// Builder for creating a `Game`.
#[derive(Debug, Default)]
pub struct GameBuilder {
    config: EngineConfig,
    clock: Option<Box<dyn Clock>>,
    deck: Option<Deck>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the shuffle seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Use a custom time source (defaults to `SystemClock`).
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Deal the first session from `deck` instead of a full deck.
    ///
    /// The deck is still shuffled. `restart` always uses a full deck.
    pub fn deck(mut self, deck: Deck) -> Self {
        self.deck = Some(deck);
        self
    }

    /// Build a game in `NotStarted`.
    pub fn build(self) -> Game {
        let rng = GameRng::new(self.config.seed).for_context("shuffle");
        let messages = MessageBoard::new(self.config.message_duration);
        Game {
            clock: self.clock.unwrap_or_else(|| Box::new(SystemClock)),
            config: self.config,
            rng,
            phase: GamePhase::NotStarted,
            pending_deck: self.deck,
            deck: Deck::empty(),
            table: Table::new(),
            found: Vec::new(),
            selection: Selection::new(),
            hint: None,
            hint_shown: false,
            messages,
            ended_at: None,
            restart_prompted: false,
            reshuffles: 0,
            universe: 0,
        }
    }

    /// Build and deal.
    pub fn start(self) -> Result<Game> {
        let mut game = self.build();
        game.start()?;
        Ok(game)
    }
}

/// A single-player SET session.
///
/// Owns every piece of mutable game state; all mutation goes through its
/// commands, each of which runs to completion.
#[derive(Debug)]
pub struct Game {
    config: EngineConfig,
    clock: Box<dyn Clock>,
    rng: GameRng,
    phase: GamePhase,
    pending_deck: Option<Deck>,
    deck: Deck,
    table: Table,
    found: Vec<Triple>,
    selection: Selection,
    /// Witness from the last possibility search; `None` once the table changes.
    hint: Option<Triple>,
    hint_shown: bool,
    messages: MessageBoard,
    ended_at: Option<Instant>,
    restart_prompted: bool,
    reshuffles: u32,
    /// Cards in play this session (deck + table + found).
    universe: usize,
}

impl Game {
    /// Build a game with the system clock. Call `start` to deal.
    pub fn new(config: EngineConfig) -> Self {
        GameBuilder::new().config(config).build()
    }

    // === Commands ===

    /// Shuffle a fresh deck and deal the first table.
    ///
    /// No-op unless the game is `NotStarted`.
    pub fn start(&mut self) -> Result<()> {
        self.ensure_healthy()?;
        if self.phase != GamePhase::NotStarted {
            return Ok(());
        }
        let deck = self.pending_deck.take().unwrap_or_else(Deck::full);
        let result = self.begin(deck);
        self.guard(result)
    }

    /// Player picks the card at `position`.
    ///
    /// Picks of empty positions, already-selected cards, or anything outside
    /// `AwaitingSelection` are ignored. The third pick is judged at once.
    pub fn select_card(&mut self, position: Position) -> Result<SelectOutcome> {
        self.ensure_healthy()?;
        if self.phase != GamePhase::AwaitingSelection || self.table.get(position).is_none() {
            return Ok(SelectOutcome::Ignored);
        }
        if !self.selection.push(position) {
            return Ok(SelectOutcome::Ignored);
        }
        if !self.selection.is_full() {
            return Ok(SelectOutcome::Selected {
                count: self.selection.len(),
            });
        }
        let result = self.judge();
        self.guard(result)
    }

    /// Reveal the cached hint, if there is one.
    pub fn request_hint(&mut self) -> Option<Triple> {
        if self.phase != GamePhase::AwaitingSelection {
            return None;
        }
        let hint = self.hint?;
        self.hint_shown = true;
        Some(hint)
    }

    /// Start over from a full deck. Only valid in `GameOver`; returns
    /// `Ok(false)` and does nothing otherwise.
    pub fn restart(&mut self) -> Result<bool> {
        self.ensure_healthy()?;
        if self.phase != GamePhase::GameOver {
            return Ok(false);
        }
        info!(found_sets = self.found.len(), "restarting game");

        self.table.clear();
        self.deck.clear();
        self.found.clear();
        self.selection.clear();
        self.clear_hint();
        self.messages.clear();
        self.ended_at = None;
        self.restart_prompted = false;
        self.reshuffles = 0;

        let result = self.begin(Deck::full());
        self.guard(result)?;
        Ok(true)
    }

    /// Render-tick poll: expire messages and raise the restart prompt once
    /// the game has been over long enough.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        self.messages.expire(now);

        if self.phase != GamePhase::GameOver || self.restart_prompted {
            return;
        }
        if let Some(ended_at) = self.ended_at {
            if now >= ended_at + self.config.restart_prompt_delay {
                self.messages.pin(MessageKind::RestartPrompt, now);
                self.restart_prompted = true;
            }
        }
    }

    // === Queries ===

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn deck_count(&self) -> usize {
        self.deck.len()
    }

    /// Sets found this session, in the order they were found.
    #[must_use]
    pub fn found_sets(&self) -> &[Triple] {
        &self.found
    }

    #[must_use]
    pub fn found_sets_count(&self) -> usize {
        self.found.len()
    }

    /// Cards currently selected, in pick order.
    #[must_use]
    pub fn current_selection(&self) -> Vec<Card> {
        self.selection
            .positions()
            .iter()
            .filter_map(|&p| self.table.get(p))
            .collect()
    }

    #[must_use]
    pub fn selected_positions(&self) -> &[Position] {
        self.selection.positions()
    }

    /// The hint, once revealed by `request_hint`.
    #[must_use]
    pub fn current_hint(&self) -> Option<Triple> {
        self.hint.filter(|_| self.hint_shown)
    }

    /// Positions of the revealed hint's cards.
    #[must_use]
    pub fn hint_positions(&self) -> PositionList {
        self.current_hint()
            .map(|hint| {
                hint.iter()
                    .filter_map(|card| self.table.position_of(card))
                    .collect::<PositionList>()
            })
            .unwrap_or_default()
    }

    /// Message to show now, if any.
    #[must_use]
    pub fn pending_message(&self) -> Option<Message> {
        self.messages.current(self.clock.now()).copied()
    }

    /// No-set redeals this session.
    #[must_use]
    pub fn reshuffles(&self) -> u32 {
        self.reshuffles
    }

    /// Frame view of the table.
    #[must_use]
    pub fn table_snapshot(&self) -> TableSnapshot {
        let hinted = self.hint_positions();
        let slots = Position::all()
            .map(|position| {
                let card = self.table.get(position);
                SlotView {
                    position,
                    column: position.column(),
                    row: position.row(),
                    card,
                    signature: card.map(|c| c.signature()),
                    selected: self.selection.contains(position),
                    hinted: hinted.contains(&position),
                }
            })
            .collect();
        TableSnapshot {
            phase: self.phase,
            slots,
            deck_count: self.deck.len(),
            found_sets: self.found.len(),
        }
    }

    // === Internals ===

    fn ensure_healthy(&self) -> Result<()> {
        if self.phase == GamePhase::Faulted {
            return Err(EngineError::SessionFaulted);
        }
        Ok(())
    }

    /// Any error escaping a command leaves deck/table integrity in doubt.
    fn guard<T>(&mut self, result: Result<T>) -> Result<T> {
        if let Err(err) = &result {
            error!(%err, phase = ?self.phase, "game faulted");
            self.phase = GamePhase::Faulted;
        }
        result
    }

    fn begin(&mut self, mut deck: Deck) -> Result<()> {
        self.phase = GamePhase::Dealing;
        deck.shuffle(&mut self.rng);
        self.universe = deck.len();
        self.deck = deck;
        info!(seed = self.config.seed, cards = self.universe, "starting game");

        match self.deal()? {
            DealOutcome::SetOnTable => {
                self.messages.issue(MessageKind::Start, self.clock.now());
                self.phase = GamePhase::AwaitingSelection;
            }
            DealOutcome::NoSetsLeft => self.enter_game_over(),
        }
        self.check_conservation();
        Ok(())
    }

    fn judge(&mut self) -> Result<SelectOutcome> {
        self.phase = GamePhase::Judging;
        let positions: SmallVec<[Position; SELECTION_SIZE]> =
            SmallVec::from_slice(self.selection.positions());
        self.selection.clear();

        let cards: SmallVec<[Card; SELECTION_SIZE]> =
            positions.iter().filter_map(|&p| self.table.get(p)).collect();
        let &[a, b, c] = cards.as_slice() else {
            // selection only ever holds occupied positions
            self.phase = GamePhase::AwaitingSelection;
            return Ok(SelectOutcome::Ignored);
        };
        let now = self.clock.now();

        if !is_valid_set(&a, &b, &c) {
            debug!(broken = ?broken_attributes(&a, &b, &c), "not a set");
            self.messages.issue(MessageKind::NotASet, now);
            self.phase = GamePhase::AwaitingSelection;
            return Ok(SelectOutcome::NotASet);
        }

        for &position in &positions {
            self.table.remove(position);
        }
        self.found.push([a, b, c]);
        self.clear_hint();
        self.messages.issue(MessageKind::SetFound, now);
        debug!(found_sets = self.found.len(), deck = self.deck.len(), "set found");

        self.phase = GamePhase::Dealing;
        let outcome = match self.deal()? {
            DealOutcome::SetOnTable => {
                self.phase = GamePhase::AwaitingSelection;
                SelectOutcome::SetFound { game_over: false }
            }
            DealOutcome::NoSetsLeft => {
                self.enter_game_over();
                SelectOutcome::SetFound { game_over: true }
            }
        };
        self.check_conservation();
        Ok(outcome)
    }

    /// Fill empty positions, then make sure the table holds a set.
    ///
    /// While the deck has cards, a set-less table is returned to the deck,
    /// reshuffled and redealt, at most `max_deal_attempts` times. With the
    /// deck empty the table is judged as it stands.
    fn deal(&mut self) -> Result<DealOutcome> {
        let max_attempts = self.config.max_deal_attempts;
        for attempt in 1..=max_attempts {
            let placed = self.refill()?;
            let cards = self.table.occupied_cards();

            if let Some(witness) = find_set(&cards) {
                debug!(attempt, placed, deck = self.deck.len(), "table holds a set");
                self.hint = Some(witness);
                return Ok(DealOutcome::SetOnTable);
            }
            if self.deck.is_empty() {
                debug!(table = cards.len(), "deck empty and no set on the table");
                return Ok(DealOutcome::NoSetsLeft);
            }

            warn!(attempt, deck = self.deck.len(), "no set on the table, reshuffling");
            self.messages.issue(MessageKind::Shuffled, self.clock.now());
            self.undeal()?;
            self.deck.shuffle(&mut self.rng);
            self.reshuffles += 1;
        }
        error!(attempts = max_attempts, "deal did not converge");
        Err(EngineError::DealExhausted {
            attempts: max_attempts,
        })
    }

    /// Draw into every empty position until the deck runs out.
    fn refill(&mut self) -> Result<usize> {
        let mut placed = 0;
        for position in self.table.empty_slots() {
            let Ok(card) = self.deck.draw() else {
                break;
            };
            self.table.place(position, card)?;
            placed += 1;
        }
        if placed > 0 {
            self.clear_hint();
        }
        Ok(placed)
    }

    /// Return every table card to the deck.
    fn undeal(&mut self) -> Result<()> {
        for card in self.table.clear() {
            self.deck.return_card(card)?;
        }
        self.clear_hint();
        Ok(())
    }

    fn clear_hint(&mut self) {
        self.hint = None;
        self.hint_shown = false;
    }

    fn enter_game_over(&mut self) {
        let now = self.clock.now();
        self.phase = GamePhase::GameOver;
        self.ended_at = Some(now);
        self.restart_prompted = false;
        self.selection.clear();
        self.clear_hint();
        self.messages.issue(MessageKind::GameOver, now);
        info!(
            found_sets = self.found.len(),
            table = self.table.len(),
            reshuffles = self.reshuffles,
            "game over"
        );
    }

    fn check_conservation(&self) {
        debug_assert_eq!(
            self.deck.len() + self.table.len() + self.found.len() * SELECTION_SIZE,
            self.universe,
            "cards lost or duplicated"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ManualClock;
    use std::time::Duration;

    fn started(seed: u64) -> Game {
        GameBuilder::new().seed(seed).clock(ManualClock::new()).start().unwrap()
    }

    fn invalid_triple(game: &Game) -> [Position; 3] {
        let occupied: Vec<_> = game.table().occupied().collect();
        for i in 0..occupied.len() {
            for j in (i + 1)..occupied.len() {
                for k in (j + 1)..occupied.len() {
                    let (a, b, c) = (occupied[i], occupied[j], occupied[k]);
                    if !is_valid_set(&a.1, &b.1, &c.1) {
                        return [a.0, b.0, c.0];
                    }
                }
            }
        }
        panic!("every triple on the table is a set");
    }

    #[test]
    fn test_new_game_not_started() {
        let game = Game::new(EngineConfig::default());
        assert_eq!(game.phase(), GamePhase::NotStarted);
        assert!(game.table().is_empty());
        assert_eq!(game.deck_count(), 0);
    }

    #[test]
    fn test_start_deals_twelve_with_a_set() {
        let game = started(1);
        assert_eq!(game.phase(), GamePhase::AwaitingSelection);
        assert!(game.table().is_full());
        assert_eq!(game.deck_count(), 69);
        assert!(find_set(&game.table().occupied_cards()).is_some());
        assert_eq!(game.pending_message().map(|m| m.kind()), Some(MessageKind::Start));
    }

    #[test]
    fn test_start_twice_is_noop() {
        let mut game = started(1);
        let before = game.table().clone();
        game.start().unwrap();
        assert_eq!(game.table(), &before);
    }

    #[test]
    fn test_select_empty_position_ignored() {
        let mut game = Game::new(EngineConfig::default());
        let pos = Position::new(0).unwrap();
        assert_eq!(game.select_card(pos).unwrap(), SelectOutcome::Ignored);
    }

    #[test]
    fn test_invalid_selection_clears_only_selection() {
        let mut game = started(3);
        let table_before = game.table().clone();
        let [p1, p2, p3] = invalid_triple(&game);

        assert_eq!(game.select_card(p1).unwrap(), SelectOutcome::Selected { count: 1 });
        assert_eq!(game.select_card(p1).unwrap(), SelectOutcome::Ignored);
        assert_eq!(game.select_card(p2).unwrap(), SelectOutcome::Selected { count: 2 });
        assert_eq!(game.current_selection().len(), 2);
        assert_eq!(game.select_card(p3).unwrap(), SelectOutcome::NotASet);

        assert!(game.selected_positions().is_empty());
        assert_eq!(game.table(), &table_before);
        assert_eq!(game.found_sets_count(), 0);
        assert_eq!(game.pending_message().map(|m| m.kind()), Some(MessageKind::NotASet));
    }

    #[test]
    fn test_hint_survives_invalid_selection() {
        let mut game = started(3);
        let hint = game.request_hint().unwrap();
        for p in invalid_triple(&game) {
            game.select_card(p).unwrap();
        }
        assert_eq!(game.current_hint(), Some(hint));
    }

    #[test]
    fn test_valid_set_refills_and_clears_hint() {
        let mut game = started(5);
        let hint = game.request_hint().unwrap();
        let positions = game.hint_positions();
        assert_eq!(positions.len(), 3);

        let mut last = SelectOutcome::Ignored;
        for p in positions {
            last = game.select_card(p).unwrap();
        }

        assert_eq!(last, SelectOutcome::SetFound { game_over: false });
        assert_eq!(game.found_sets(), &[hint]);
        assert!(game.selected_positions().is_empty());
        assert!(game.current_hint().is_none());
        assert!(game.table().is_full());
        assert_eq!(game.deck_count(), 66);
        for card in hint {
            assert!(game.table().position_of(&card).is_none());
            assert!(!game.deck().contains(&card));
        }
    }

    #[test]
    fn test_hint_unavailable_before_start() {
        let mut game = Game::new(EngineConfig::default());
        assert!(game.request_hint().is_none());
        assert!(game.hint_positions().is_empty());
    }

    #[test]
    fn test_restart_outside_game_over_is_noop() {
        let mut game = started(9);
        assert!(!game.restart().unwrap());
        assert_eq!(game.phase(), GamePhase::AwaitingSelection);
    }

    #[test]
    fn test_messages_expire_on_tick() {
        let clock = ManualClock::new();
        let mut game = GameBuilder::new()
            .config(EngineConfig::new().with_message_duration(Duration::from_secs(2)))
            .clock(clock.clone())
            .start()
            .unwrap();

        assert!(game.pending_message().is_some());
        clock.advance(Duration::from_secs(3));
        assert!(game.pending_message().is_none());
        game.tick();
        assert!(game.pending_message().is_none());
    }

    #[test]
    fn test_snapshot_marks_selection_and_hint() {
        let mut game = started(11);
        game.request_hint().unwrap();
        let first = game.hint_positions()[0];
        game.select_card(first).unwrap();

        let snapshot = game.table_snapshot();
        assert_eq!(snapshot.occupied(), 12);
        assert_eq!(snapshot.deck_count, 69);
        assert!(snapshot.slot(first).selected);
        assert_eq!(snapshot.slots.iter().filter(|s| s.hinted).count(), 3);
        assert_eq!(
            snapshot.slot(first).signature,
            snapshot.card(first).map(|c| c.signature())
        );
    }
}
