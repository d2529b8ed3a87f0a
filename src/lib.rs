//! # bussen
//!
//! Rules engine for the Bussen drinking-card game.
//!
//! ## Design Principles
//!
//! 1. **Pure state holders**: Engines never talk to the chat platform. The
//!    orchestrator asks for the live card, collects a guess, and feeds the
//!    verdict back through a synchronous transition.
//!
//! 2. **Seeded randomness**: Every deck owns a `GameRng`; a fixed seed and a
//!    fixed sequence of answers replay a phase exactly.
//!
//! 3. **No hidden card creation**: Decks only move cards between the
//!    remaining set, the discard set and play. Nothing is fabricated.
//!
//! ## Phases
//!
//! - Warm-up questions (`rules::questions`): colour, higher/lower, between, suit
//! - Pyramid (`pyramid`): triangular reveal with row-dependent drink weights
//! - Bus (`bus`): checkpointed, self-refilling higher/lower sequence
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration, errors
//! - `cards`: Card model, rank tables, deck
//! - `rules`: Guess evaluation and warm-up questions
//! - `bus`: Bus state machine, checkpoints, driver selection
//! - `pyramid`: Pyramid layout, weights, put-down matching
//! - `view`: Row-structured views for rendering

pub mod core;
pub mod cards;
pub mod rules;
pub mod bus;
pub mod pyramid;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    BusConfig, PyramidConfig,
    EngineError, Result,
    GameRng, GameRngState,
    Hand, PlayerId, Roster,
};

pub use crate::cards::{Card, Colour, Deck, RankTable, Suit, Value};

pub use crate::rules::{Answer, Guess, Question, Verdict};

pub use crate::bus::{BusState, BusTurn, Checkpoints, DriverPool};

pub use crate::pyramid::{max_pyramid_size, triangular, PutDown, PyramidReveal, PyramidState};

pub use crate::view::{BoardView, Focus, RowView, Slot};
