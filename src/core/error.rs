//! Engine error type.
//!
//! Every fallible engine operation returns [`Result`]. Errors are local and
//! synchronous: the engine never retries, it reports to the immediate caller
//! and leaves recovery (re-prompting, ending the phase) to the orchestrator.

use thiserror::Error;

use super::player::PlayerId;
use crate::cards::Card;
use crate::rules::Question;

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors raised by the deck, bus and pyramid engines.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Draw attempted with no remaining cards and nothing to reshuffle.
    #[error("deck is empty and there are no discarded cards to reshuffle")]
    EmptyDeck,

    /// Reveal attempted after the last pyramid card.
    #[error("pyramid has no cards left to reveal")]
    PyramidExhausted,

    /// Driver selection with an empty player pool.
    #[error("no eligible player left to drive the bus")]
    NoEligibleDriver,

    /// Discard of a card that is not currently held outside the deck.
    #[error("{0} is not in play")]
    CardNotInPlay(Card),

    /// Bus transition attempted without drawing a card first.
    #[error("no card has been drawn for this bus turn")]
    NoPendingDraw,

    /// Transition attempted on a bus that has already been escaped.
    #[error("bus is already finished")]
    BusFinished,

    #[error("bus size {size} is outside {min}..={max}")]
    InvalidBusSize { size: usize, min: usize, max: usize },

    #[error("{requested} checkpoints requested but a bus of size {size} allows at most {max}")]
    TooManyCheckpoints {
        requested: usize,
        size: usize,
        max: usize,
    },

    #[error("pyramid size {size} is outside 1..={max} for a deck of {deck_size} cards")]
    InvalidPyramidSize {
        size: usize,
        max: usize,
        deck_size: usize,
    },

    #[error("unknown player: {0}")]
    UnknownPlayer(PlayerId),

    /// A question needs more hand cards than the player holds.
    #[error("{question} needs {needed} hand cards, player holds {held}")]
    MissingHandCards {
        question: Question,
        needed: usize,
        held: usize,
    },

    /// The answer kind does not fit the question (e.g. a colour for a yes/no question).
    #[error("answer does not fit question {question}")]
    AnswerMismatch { question: Question },
}
