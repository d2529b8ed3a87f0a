//! Finite card pool with draw-without-replacement and discard/reshuffle.
//!
//! A `Deck` tracks two sets: the cards still available to draw and the cards
//! that have been discarded. Cards handed out by [`Deck::draw`] are "in play"
//! until the holder discards them again, so at any moment
//! `remaining + discarded + in play == size()`.
//!
//! The deck never reshuffles on its own. Callers check [`Deck::is_empty`]
//! and call [`Deck::reshuffle`] themselves; the bus engine wraps that
//! sequence in its own draw.

use super::card::{Card, Suit, Value};
use super::rank::RankTable;
use crate::core::error::{EngineError, Result};
use crate::core::rng::GameRng;

/// A deck of cards with its own random stream.
#[derive(Clone, Debug)]
pub struct Deck {
    remaining: Vec<Card>,
    discarded: Vec<Card>,
    size: usize,
    rng: GameRng,
}

impl Deck {
    /// A full 52-card deck ranked with `ranks`.
    #[must_use]
    pub fn new(ranks: &RankTable, rng: GameRng) -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|suit| Value::ALL.iter().map(move |value| Card::new(*value, *suit, ranks)))
            .collect();
        Self::from_cards(cards, rng)
    }

    /// A full Bussen deck (aces high) seeded with `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(&RankTable::default(), GameRng::new(seed))
    }

    /// A deck holding exactly `cards`.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>, rng: GameRng) -> Self {
        Self {
            size: cards.len(),
            remaining: cards,
            discarded: Vec::new(),
            rng,
        }
    }

    /// Number of cards the deck was generated with.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cards left to draw.
    #[must_use]
    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    /// No cards left to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Cards waiting in the discard set.
    #[must_use]
    pub fn discarded_len(&self) -> usize {
        self.discarded.len()
    }

    /// Cards currently held outside the deck.
    #[must_use]
    pub fn in_play(&self) -> usize {
        self.size - self.remaining.len() - self.discarded.len()
    }

    /// Cards left to draw, in no particular order.
    #[must_use]
    pub fn remaining(&self) -> &[Card] {
        &self.remaining
    }

    /// Remove and return a uniformly random remaining card.
    ///
    /// Fails with `EmptyDeck` when nothing is left; discards are never
    /// pulled back in implicitly.
    pub fn draw(&mut self) -> Result<Card> {
        if self.remaining.is_empty() {
            return Err(EngineError::EmptyDeck);
        }
        let i = self.rng.index(self.remaining.len());
        Ok(self.remaining.swap_remove(i))
    }

    /// Put a card that was drawn from this deck into the discard set.
    ///
    /// Fails with `CardNotInPlay` when nothing is in play or the card is
    /// already back in the remaining or discard set; the deck is unchanged
    /// in that case.
    pub fn discard(&mut self, card: Card) -> Result<()> {
        if self.in_play() == 0 || self.remaining.contains(&card) || self.discarded.contains(&card) {
            return Err(EngineError::CardNotInPlay(card));
        }
        self.discarded.push(card);
        Ok(())
    }

    /// Move every discarded card back into the remaining set.
    ///
    /// Returns how many cards were moved.
    pub fn reshuffle(&mut self) -> usize {
        let moved = self.discarded.len();
        self.remaining.append(&mut self.discarded);
        log::debug!("reshuffled {moved} discarded cards, {} remaining", self.remaining.len());
        moved
    }
}
