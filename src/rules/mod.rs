//! Guess evaluation shared by every phase.
//!
//! The engines never judge a guess inside a transition; the orchestrator
//! (or a convenience wrapper like `BusState::play`) evaluates it here and
//! feeds the boolean result back in.
//!
//! - `Guess`: higher/lower with strict rank comparison
//! - `Question`, `Answer`, `Verdict`: the warm-up rounds

pub mod guess;
pub mod questions;

pub use guess::Guess;
pub use questions::{ask, Answer, Question, Verdict};
