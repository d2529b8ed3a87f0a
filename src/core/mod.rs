//! Core engine types: players, RNG, configuration, errors.
//!
//! These are shared by every phase. The phases themselves live in `bus`
//! and `pyramid`; the card model lives in `cards`.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{BusConfig, PyramidConfig, MAX_BUS_SIZE, MIN_BUS_SIZE};
pub use error::{EngineError, Result};
pub use player::{Hand, PlayerId, Roster};
pub use rng::{GameRng, GameRngState};
