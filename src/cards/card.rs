//! Card values, suits and the immutable `Card` value object.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::rank::RankTable;

/// Card colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Colour {
    Red,
    Black,
}

/// One of the four suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    #[must_use]
    pub const fn colour(self) -> Colour {
        match self {
            Suit::Hearts | Suit::Diamonds => Colour::Red,
            Suit::Clubs | Suit::Spades => Colour::Black,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
            Suit::Spades => "Spades",
        };
        f.write_str(repr)
    }
}

/// Face value, 2 through Ace.
///
/// Values carry no ordering of their own; ranks come from a [`RankTable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Value {
    pub const ALL: [Value; 13] = [
        Value::Two,
        Value::Three,
        Value::Four,
        Value::Five,
        Value::Six,
        Value::Seven,
        Value::Eight,
        Value::Nine,
        Value::Ten,
        Value::Jack,
        Value::Queen,
        Value::King,
        Value::Ace,
    ];

    /// Position in [`Value::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Value::Two => "2",
            Value::Three => "3",
            Value::Four => "4",
            Value::Five => "5",
            Value::Six => "6",
            Value::Seven => "7",
            Value::Eight => "8",
            Value::Nine => "9",
            Value::Ten => "10",
            Value::Jack => "Jack",
            Value::Queen => "Queen",
            Value::King => "King",
            Value::Ace => "Ace",
        };
        f.write_str(repr)
    }
}

/// A playing card.
///
/// Equality and hashing use `(value, suit)`. The rank is looked up once at
/// construction and is the only thing comparisons look at, so two cards of
/// equal rank compare as `Ordering::Equal` without being equal cards. That
/// is why `Card` exposes [`Card::compare_rank`] instead of implementing `Ord`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Card {
    value: Value,
    suit: Suit,
    rank: u8,
}

impl Card {
    /// Create a card, ranking it with `ranks`.
    #[must_use]
    pub fn new(value: Value, suit: Suit, ranks: &RankTable) -> Self {
        Self {
            value,
            suit,
            rank: ranks.rank(value),
        }
    }

    #[must_use]
    pub const fn value(&self) -> Value {
        self.value
    }

    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    #[must_use]
    pub const fn colour(&self) -> Colour {
        self.suit.colour()
    }

    #[must_use]
    pub fn is_red(&self) -> bool {
        self.colour() == Colour::Red
    }

    #[must_use]
    pub fn is_black(&self) -> bool {
        self.colour() == Colour::Black
    }

    /// Total order by rank only; suit never breaks ties.
    #[must_use]
    pub fn compare_rank(&self, other: &Card) -> Ordering {
        self.rank.cmp(&other.rank)
    }

    /// Strictly higher rank.
    #[must_use]
    pub fn is_higher_than(&self, other: &Card) -> bool {
        self.compare_rank(other) == Ordering::Greater
    }

    /// Strictly lower rank.
    #[must_use]
    pub fn is_lower_than(&self, other: &Card) -> bool {
        self.compare_rank(other) == Ordering::Less
    }

    /// Rank strictly between `a` and `b`, in either order.
    ///
    /// ```
    /// use bussen::cards::{Card, RankTable, Suit, Value};
    ///
    /// let ranks = RankTable::default();
    /// let four = Card::new(Value::Four, Suit::Clubs, &ranks);
    /// let nine = Card::new(Value::Nine, Suit::Hearts, &ranks);
    /// let six = Card::new(Value::Six, Suit::Spades, &ranks);
    ///
    /// assert!(six.is_between(&nine, &four));
    /// assert!(!four.is_between(&four, &nine));
    /// ```
    #[must_use]
    pub fn is_between(&self, a: &Card, b: &Card) -> bool {
        let (low, high) = if a.rank <= b.rank { (a, b) } else { (b, a) };
        self.is_higher_than(low) && self.is_lower_than(high)
    }

    /// Does any of `cards` share this card's suit?
    #[must_use]
    pub fn has_same_suit(&self, cards: &[Card]) -> bool {
        cards.iter().any(|c| c.suit == self.suit)
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.suit == other.suit
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
        self.suit.hash(state);
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.value, self.suit)
    }
}
