//! Data-driven rank table.
//!
//! Games differ in how they rank face values (aces high or low). Instead of
//! baking that into the card type, a `RankTable` is passed to [`Card::new`]
//! and [`Deck::new`], which rank every card they create from it.
//!
//! [`Card::new`]: super::Card::new
//! [`Deck::new`]: super::Deck::new

use serde::{Deserialize, Serialize};

use super::card::Value;

/// Rank for each [`Value`], indexed by [`Value::index`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankTable {
    ranks: [u8; 13],
}

impl RankTable {
    /// Build a table from a ranking function.
    pub fn from_fn(rank: impl Fn(Value) -> u8) -> Self {
        let mut ranks = [0; 13];
        for value in Value::ALL {
            ranks[value.index()] = rank(value);
        }
        Self { ranks }
    }

    /// Bussen ranking: 2-10 at face value, Jack 11, Queen 12, King 13, Ace 14.
    #[must_use]
    pub const fn aces_high() -> Self {
        Self {
            ranks: [2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14],
        }
    }

    /// Ace ranked 1, below the 2.
    #[must_use]
    pub const fn aces_low() -> Self {
        Self {
            ranks: [2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 1],
        }
    }

    #[must_use]
    pub const fn rank(&self, value: Value) -> u8 {
        self.ranks[value.index()]
    }
}

impl Default for RankTable {
    fn default() -> Self {
        Self::aces_high()
    }
}
