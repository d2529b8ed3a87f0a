//! The bus state machine.
//!
//! ## Turn
//!
//! The driver guesses higher or lower than the live card at `current_index`.
//! [`BusState::draw`] takes a card from the bus's own deck and holds it as
//! the pending card; [`BusState::apply`] consumes it with the verdict:
//!
//! 1. The live card is retired to the discard set and the drawn card takes
//!    its slot, so the sequence length never changes.
//! 2. Correct: the cursor moves one step (wrapping to 0). Moving past the
//!    next checkpoint activates it. Wrapping to 0 finishes the bus.
//! 3. Wrong: the driver drinks `current_index + 1 - checkpoint` and the
//!    cursor resets to the active checkpoint.
//!
//! ## Snapshots
//!
//! The sequence is an `im::Vector`, so cloning a `BusState` to render the
//! board before and after a turn is O(1).

use im::Vector;

use super::checkpoint::Checkpoints;
use crate::cards::{Card, Deck};
use crate::core::config::BusConfig;
use crate::core::error::{EngineError, Result};
use crate::rules::Guess;
use crate::view::{BoardView, Focus};

/// Outcome of one bus turn, for the orchestrator to report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BusTurn {
    /// Bus index the guess was made at.
    pub position: usize,
    /// Card that was live at `position` before the turn.
    pub previous: Card,
    /// Card drawn this turn, now at `position`.
    pub drawn: Card,
    pub correct: bool,
    /// Drinks owed this turn (0 when correct).
    pub drinks: u32,
    /// Checkpoint the driver was sent back to on a wrong guess.
    pub reset_to: Option<usize>,
    /// Checkpoint activated by this turn, if any.
    pub checkpoint_reached: Option<usize>,
    /// Cursor after the turn.
    pub current_index: usize,
    pub finished: bool,
}

/// Live state of one bus phase.
#[derive(Clone, Debug)]
pub struct BusState {
    deck: Deck,
    sequence: Vector<Card>,
    current_index: usize,
    max_index: Option<usize>,
    last_index: Option<usize>,
    checkpoints: Checkpoints,
    hidden: bool,
    pending: Option<Card>,
    turns: u32,
    total_drinks: u32,
    finished: bool,
}

impl BusState {
    /// Lay out a bus from `deck`, which the bus owns from now on.
    pub fn new(config: &BusConfig, mut deck: Deck) -> Result<Self> {
        config.validate()?;

        let mut sequence = Vector::new();
        for _ in 0..config.size {
            sequence.push_back(deck.draw()?);
        }

        let checkpoints = Checkpoints::new(config.size, config.checkpoints);
        log::debug!(
            "bus laid out: {} cards, checkpoints {:?}, hidden={}",
            config.size,
            checkpoints.indices(),
            config.hidden
        );

        Ok(Self {
            deck,
            sequence,
            current_index: 0,
            max_index: None,
            last_index: None,
            checkpoints,
            hidden: config.hidden,
            pending: None,
            turns: 0,
            total_drinks: 0,
            finished: false,
        })
    }

    /// Lay out a bus from a fresh full deck seeded with `seed`.
    pub fn seeded(config: &BusConfig, seed: u64) -> Result<Self> {
        Self::new(config, Deck::seeded(seed))
    }

    // === Accessors ===

    #[must_use]
    pub fn size(&self) -> usize {
        self.sequence.len()
    }

    /// The card sequence in bus order.
    #[must_use]
    pub fn sequence(&self) -> &Vector<Card> {
        &self.sequence
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Furthest index reached before the current one; `None` before the first turn.
    #[must_use]
    pub fn max_index(&self) -> Option<usize> {
        self.max_index
    }

    /// Index that received the most recently drawn card.
    #[must_use]
    pub fn last_index(&self) -> Option<usize> {
        self.last_index
    }

    #[must_use]
    pub fn checkpoints(&self) -> &Checkpoints {
        &self.checkpoints
    }

    #[must_use]
    pub fn hidden(&self) -> bool {
        self.hidden
    }

    /// Card drawn for the current turn and not yet applied.
    #[must_use]
    pub fn pending(&self) -> Option<Card> {
        self.pending
    }

    #[must_use]
    pub fn turns(&self) -> u32 {
        self.turns
    }

    #[must_use]
    pub fn total_drinks(&self) -> u32 {
        self.total_drinks
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The live card the driver guesses against.
    #[must_use]
    pub fn current_card(&self) -> Card {
        self.sequence[self.current_index]
    }

    /// True when the live position has never been reached before.
    ///
    /// In hidden mode the live card is still face down in that case, so the
    /// prompt should not name it.
    #[must_use]
    pub fn is_unvisited(&self) -> bool {
        self.max_index.map_or(true, |m| self.current_index > m)
    }

    /// Drinks a wrong guess would cost right now.
    #[must_use]
    pub fn drink_count(&self) -> u32 {
        (self.current_index + 1).saturating_sub(self.checkpoints.active_index()) as u32
    }

    // === Transitions ===

    /// Draw the card for this turn, reshuffling discards back in if the
    /// deck ran dry.
    ///
    /// The card stays pending until [`BusState::apply`]; drawing again
    /// before that returns the same card. On `EmptyDeck` the state is
    /// unchanged.
    pub fn draw(&mut self) -> Result<Card> {
        if self.finished {
            return Err(EngineError::BusFinished);
        }
        if let Some(card) = self.pending {
            return Ok(card);
        }

        if self.deck.is_empty() {
            let moved = self.deck.reshuffle();
            log::warn!("bus deck ran out, reshuffled {moved} discarded cards");
        }
        let card = self.deck.draw()?;
        self.pending = Some(card);
        Ok(card)
    }

    /// Apply one turn with the pending card; `correct` is the verdict on
    /// the driver's guess.
    pub fn apply(&mut self, correct: bool) -> Result<BusTurn> {
        if self.finished {
            return Err(EngineError::BusFinished);
        }
        let drawn = self.pending.ok_or(EngineError::NoPendingDraw)?;

        let position = self.current_index;
        let previous = self.sequence[position];
        self.deck.discard(previous)?;
        self.sequence[position] = drawn;
        self.pending = None;

        let drinks = if correct { 0 } else { self.drink_count() };
        self.total_drinks += drinks;

        self.last_index = Some(position);
        self.max_index = Some(self.max_index.map_or(position, |m| m.max(position)));

        let mut reset_to = None;
        let mut checkpoint_reached = None;
        if correct {
            self.current_index = (position + 1) % self.sequence.len();
            if self.current_index == 0 {
                self.finished = true;
            } else {
                checkpoint_reached = self.checkpoints.pass(position);
            }
        } else {
            let target = self.checkpoints.active_index();
            self.current_index = target;
            reset_to = Some(target);
        }

        self.turns += 1;

        log::debug!(
            "bus turn {}: {previous} -> {drawn} at {position}, correct={correct}, drinks={drinks}, now at {}",
            self.turns,
            self.current_index
        );
        if self.finished {
            log::info!(
                "bus escaped in {} turns with {} drinks",
                self.turns,
                self.total_drinks
            );
        }

        Ok(BusTurn {
            position,
            previous,
            drawn,
            correct,
            drinks,
            reset_to,
            checkpoint_reached,
            current_index: self.current_index,
            finished: self.finished,
        })
    }

    /// Draw, judge `guess` against the live card, and apply the turn.
    pub fn play(&mut self, guess: Guess) -> Result<BusTurn> {
        if self.finished {
            return Err(EngineError::BusFinished);
        }
        let shown = self.current_card();
        let drawn = self.draw()?;
        self.apply(guess.is_correct(&drawn, &shown))
    }

    // === Rendering ===

    /// Row view of the bus, one row per checkpoint section.
    #[must_use]
    pub fn view(&self, focus: Focus) -> BoardView<'_> {
        let target = match focus {
            Focus::All | Focus::Current => Some(self.current_index),
            Focus::LastDrawn => self.last_index,
        };
        BoardView::bus(
            &self.sequence,
            self.checkpoints.indices(),
            target,
            focus == Focus::All,
            self.max_index,
            self.hidden,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bus(size: usize, checkpoints: usize) -> BusState {
        BusState::seeded(&BusConfig::new(size).with_checkpoints(checkpoints), 42).unwrap()
    }

    fn step(bus: &mut BusState, correct: bool) -> BusTurn {
        bus.draw().unwrap();
        bus.apply(correct).unwrap()
    }

    #[test]
    fn test_new_lays_out_sequence() {
        let bus = bus(8, 2);
        assert_eq!(bus.size(), 8);
        assert_eq!(bus.current_index(), 0);
        assert_eq!(bus.max_index(), None);
        assert_eq!(bus.last_index(), None);
        assert_eq!(bus.checkpoints().indices(), &[0, 2, 5]);
        assert_eq!(bus.deck().len(), 44);
        assert!(!bus.is_finished());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        assert!(matches!(
            BusState::seeded(&BusConfig::new(0), 1),
            Err(EngineError::InvalidBusSize { .. })
        ));
        assert!(matches!(
            BusState::seeded(&BusConfig::new(5).with_checkpoints(2), 1),
            Err(EngineError::TooManyCheckpoints { .. })
        ));
    }

    #[test]
    fn test_correct_turn_advances() {
        let mut bus = bus(5, 0);
        let before = bus.current_card();
        let turn = step(&mut bus, true);

        assert_eq!(turn.position, 0);
        assert_eq!(turn.previous, before);
        assert_eq!(turn.drinks, 0);
        assert_eq!(turn.reset_to, None);
        assert_eq!(bus.current_index(), 1);
        assert_eq!(bus.sequence()[0], turn.drawn);
        assert_eq!(bus.last_index(), Some(0));
        assert_eq!(bus.max_index(), Some(0));
        assert_eq!(bus.turns(), 1);
    }

    #[test]
    fn test_wrong_turn_resets_and_charges() {
        let mut bus = bus(5, 0);
        step(&mut bus, true);
        step(&mut bus, true);
        assert_eq!(bus.drink_count(), 3);

        let turn = step(&mut bus, false);
        assert_eq!(turn.drinks, 3);
        assert_eq!(turn.reset_to, Some(0));
        assert_eq!(bus.current_index(), 0);
        assert_eq!(bus.total_drinks(), 3);
        assert_eq!(bus.max_index(), Some(2));
    }

    #[test]
    fn test_checkpoint_limits_reset() {
        let mut bus = bus(6, 1);
        for _ in 0..4 {
            step(&mut bus, true);
        }
        assert_eq!(bus.checkpoints().active_index(), 3);

        let turn = step(&mut bus, false);
        assert_eq!(turn.drinks, 2);
        assert_eq!(turn.reset_to, Some(3));
        assert_eq!(bus.current_index(), 3);
    }

    #[test]
    fn test_finish_after_full_lap() {
        let mut bus = bus(3, 0);
        step(&mut bus, true);
        step(&mut bus, true);
        let turn = step(&mut bus, true);

        assert!(turn.finished);
        assert!(bus.is_finished());
        assert_eq!(bus.current_index(), 0);
        assert_eq!(bus.draw(), Err(EngineError::BusFinished));
        assert_eq!(bus.apply(true), Err(EngineError::BusFinished));
        assert_eq!(bus.play(Guess::Higher), Err(EngineError::BusFinished));
    }

    #[test]
    fn test_apply_needs_a_draw() {
        let mut bus = bus(3, 0);
        assert_eq!(bus.apply(true), Err(EngineError::NoPendingDraw));
        assert_eq!(bus.turns(), 0);

        step(&mut bus, true);
        assert_eq!(bus.pending(), None);
        assert_eq!(bus.apply(true), Err(EngineError::NoPendingDraw));
        assert_eq!(bus.current_index(), 1);
    }

    #[test]
    fn test_second_draw_returns_pending_card() {
        let mut bus = bus(3, 0);
        let first = bus.draw().unwrap();
        let second = bus.draw().unwrap();

        assert_eq!(first, second);
        assert_eq!(bus.pending(), Some(first));
        assert_eq!(bus.deck().len(), 48);

        let turn = bus.apply(true).unwrap();
        assert_eq!(turn.drawn, first);
        assert_eq!(bus.deck().len() + bus.deck().discarded_len() + bus.size(), 52);
    }

    #[test]
    fn test_is_unvisited() {
        let mut bus = bus(4, 0);
        assert!(bus.is_unvisited());
        step(&mut bus, true);
        assert!(bus.is_unvisited());
        step(&mut bus, false);
        assert!(!bus.is_unvisited());
    }

    #[test]
    fn test_card_conservation() {
        let mut bus = bus(20, 6);
        for i in 0..200 {
            step(&mut bus, i % 7 != 3);
            if bus.is_finished() {
                break;
            }
            let deck = bus.deck();
            assert_eq!(deck.len() + deck.discarded_len() + bus.size(), 52);
        }
    }

    #[test]
    fn test_play_judges_against_live_card() {
        let mut bus = bus(10, 0);
        let shown = bus.current_card();
        let turn = bus.play(Guess::Higher).unwrap();
        assert_eq!(turn.previous, shown);
        assert_eq!(turn.correct, turn.drawn.is_higher_than(&shown));
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut bus = bus(5, 0);
        let snapshot = bus.clone();
        step(&mut bus, true);

        assert_eq!(snapshot.current_index(), 0);
        assert_eq!(snapshot.turns(), 0);
        assert_ne!(snapshot.sequence()[0], bus.sequence()[0]);
    }
}
