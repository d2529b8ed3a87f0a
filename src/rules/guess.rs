//! Higher/lower guesses.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// A higher-or-lower guess about the next card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Guess {
    Higher,
    Lower,
}

impl Guess {
    /// Was the guess right?
    ///
    /// Strict comparison: a drawn card of equal rank satisfies neither
    /// direction.
    ///
    /// ```
    /// use bussen::cards::{Card, RankTable, Suit, Value};
    /// use bussen::rules::Guess;
    ///
    /// let ranks = RankTable::default();
    /// let shown = Card::new(Value::Eight, Suit::Hearts, &ranks);
    /// let drawn = Card::new(Value::Eight, Suit::Clubs, &ranks);
    ///
    /// assert!(!Guess::Higher.is_correct(&drawn, &shown));
    /// assert!(!Guess::Lower.is_correct(&drawn, &shown));
    /// ```
    #[must_use]
    pub fn is_correct(self, drawn: &Card, shown: &Card) -> bool {
        match self {
            Guess::Higher => drawn.is_higher_than(shown),
            Guess::Lower => drawn.is_lower_than(shown),
        }
    }
}

impl std::fmt::Display for Guess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Guess::Higher => f.write_str("higher"),
            Guess::Lower => f.write_str("lower"),
        }
    }
}
