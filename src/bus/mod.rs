//! The bus phase: a checkpointed, self-refilling card sequence.
//!
//! ## Key Types
//!
//! - `BusState`: the sequence, cursor, counters and the transition function
//! - `BusTurn`: per-turn outcome (drinks, reset target, finished flag)
//! - `Checkpoints`: save points the cursor falls back to
//! - `DriverPool`: who drives, and who takes over when they leave

pub mod checkpoint;
pub mod driver;
pub mod state;

pub use checkpoint::Checkpoints;
pub use driver::DriverPool;
pub use state::{BusState, BusTurn};
