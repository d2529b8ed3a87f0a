//! Card model: values, suits, rank tables and the deck.
//!
//! ## Key Types
//!
//! - `Card`: Immutable value + suit, ranked by an injected table
//! - `RankTable`: Rank per face value (aces high for Bussen)
//! - `Deck`: Draw-without-replacement pool with a discard set

pub mod card;
pub mod deck;
pub mod rank;

pub use card::{Card, Colour, Suit, Value};
pub use deck::Deck;
pub use rank::RankTable;
