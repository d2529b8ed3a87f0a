//! Player identification and the hands the engine reads.
//!
//! ## PlayerId
//!
//! Opaque player identifier. The chat platform owns identities; the engine
//! only compares them.
//!
//! ## Roster
//!
//! Ordered set of players with one [`Hand`] each. The engine uses it to find
//! the players with the most cards (bus driver candidates) and to match
//! hand cards against revealed pyramid cards.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::{EngineError, Result};
use crate::cards::{Card, Suit, Value};

/// Player identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Cards held by one player.
///
/// SmallVec: the warm-up rounds deal four cards per player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: SmallVec<[Card; 4]>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards in the order they were received.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove and return every card.
    pub fn remove_all_cards(&mut self) -> Vec<Card> {
        self.cards.drain(..).collect()
    }

    /// Does the hand hold any card of this value?
    #[must_use]
    pub fn has_value(&self, value: Value) -> bool {
        self.cards.iter().any(|c| c.value() == value)
    }

    /// Remove and return every card of this value, keeping the order of the rest.
    pub fn take_value(&mut self, value: Value) -> Vec<Card> {
        let (taken, kept): (SmallVec<[Card; 4]>, SmallVec<[Card; 4]>) =
            self.cards.iter().copied().partition(|c| c.value() == value);
        self.cards = kept;
        taken.into_vec()
    }

    /// Distinct suits in the hand, in first-seen order.
    #[must_use]
    pub fn suits(&self) -> Vec<Suit> {
        let mut suits = Vec::with_capacity(4);
        for card in &self.cards {
            if !suits.contains(&card.suit()) {
                suits.push(card.suit());
            }
        }
        suits
    }
}

/// Players in join order, each with a hand.
///
/// ## Example
///
/// ```
/// use bussen::core::{PlayerId, Roster};
///
/// let mut roster = Roster::new();
/// roster.add_player(PlayerId::new(1));
/// roster.add_player(PlayerId::new(2));
///
/// assert_eq!(roster.len(), 2);
/// assert_eq!(roster.max_card_count(), 0);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Roster {
    order: Vec<PlayerId>,
    hands: FxHashMap<PlayerId, Hand>,
}

impl Roster {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from a list of players with empty hands.
    pub fn from_players(players: impl IntoIterator<Item = PlayerId>) -> Self {
        let mut roster = Self::new();
        for player in players {
            roster.add_player(player);
        }
        roster
    }

    /// Add a player. Returns `false` if they were already present.
    pub fn add_player(&mut self, player: PlayerId) -> bool {
        if self.hands.contains_key(&player) {
            return false;
        }
        self.order.push(player);
        self.hands.insert(player, Hand::new());
        true
    }

    /// Remove a player, returning their hand.
    pub fn remove_player(&mut self, player: PlayerId) -> Option<Hand> {
        let hand = self.hands.remove(&player)?;
        self.order.retain(|p| *p != player);
        Some(hand)
    }

    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        self.hands.contains_key(&player)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Players in join order.
    #[must_use]
    pub fn players(&self) -> &[PlayerId] {
        &self.order
    }

    #[must_use]
    pub fn hand(&self, player: PlayerId) -> Option<&Hand> {
        self.hands.get(&player)
    }

    pub fn hand_mut(&mut self, player: PlayerId) -> Result<&mut Hand> {
        self.hands
            .get_mut(&player)
            .ok_or(EngineError::UnknownPlayer(player))
    }

    /// Give a card to a player.
    pub fn add_card(&mut self, player: PlayerId, card: Card) -> Result<()> {
        self.hand_mut(player)?.add_card(card);
        Ok(())
    }

    /// Number of cards a player holds (0 for unknown players).
    #[must_use]
    pub fn card_count(&self, player: PlayerId) -> usize {
        self.hands.get(&player).map_or(0, Hand::len)
    }

    /// Largest hand size across all players (0 for an empty roster).
    #[must_use]
    pub fn max_card_count(&self) -> usize {
        self.hands.values().map(Hand::len).max().unwrap_or(0)
    }

    /// Players holding exactly `count` cards, in join order.
    #[must_use]
    pub fn players_with_card_count(&self, count: usize) -> Vec<PlayerId> {
        self.order
            .iter()
            .copied()
            .filter(|p| self.card_count(*p) == count)
            .collect()
    }

    /// True when every hand is empty.
    #[must_use]
    pub fn no_one_has_cards(&self) -> bool {
        self.hands.values().all(Hand::is_empty)
    }

    /// Empty every hand, returning all collected cards.
    pub fn clear_all_hands(&mut self) -> Vec<Card> {
        let mut cards = Vec::new();
        for player in &self.order {
            if let Some(hand) = self.hands.get_mut(player) {
                cards.extend(hand.remove_all_cards());
            }
        }
        cards
    }
}
