//! Phase configuration types.
//!
//! The orchestrator collects these from the players (bus length, checkpoint
//! count, hidden mode, pyramid height and orientation) and hands them to the
//! engines. Each config validates itself against the game's limits:
//! - `BusConfig`: 1-20 cards, up to `size / 3` checkpoints once the bus is
//!   longer than two cards
//! - `PyramidConfig`: at least one row, and no more rows than the deck can fill

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};
use crate::pyramid::max_pyramid_size;

/// Shortest bus the players may choose.
pub const MIN_BUS_SIZE: usize = 1;

/// Longest bus the players may choose.
pub const MAX_BUS_SIZE: usize = 20;

/// Bus phase configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusConfig {
    /// Number of cards in the bus sequence.
    pub size: usize,

    /// Number of checkpoints besides the implicit one at index 0.
    pub checkpoints: usize,

    /// Hide cards the driver has not reached yet.
    pub hidden: bool,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            size: MIN_BUS_SIZE,
            checkpoints: 0,
            hidden: false,
        }
    }
}

impl BusConfig {
    /// Create a config for a bus of `size` cards with no checkpoints.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Set the checkpoint count.
    #[must_use]
    pub fn with_checkpoints(mut self, checkpoints: usize) -> Self {
        self.checkpoints = checkpoints;
        self
    }

    /// Enable or disable hidden mode.
    #[must_use]
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Most checkpoints a bus of `size` cards may have.
    ///
    /// Buses of two cards or fewer get no checkpoints at all.
    ///
    /// ```
    /// use bussen::core::BusConfig;
    ///
    /// assert_eq!(BusConfig::max_checkpoints(2), 0);
    /// assert_eq!(BusConfig::max_checkpoints(3), 1);
    /// assert_eq!(BusConfig::max_checkpoints(20), 6);
    /// ```
    #[must_use]
    pub fn max_checkpoints(size: usize) -> usize {
        if size > 2 {
            size / 3
        } else {
            0
        }
    }

    /// Check size and checkpoint limits.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_BUS_SIZE..=MAX_BUS_SIZE).contains(&self.size) {
            return Err(EngineError::InvalidBusSize {
                size: self.size,
                min: MIN_BUS_SIZE,
                max: MAX_BUS_SIZE,
            });
        }

        let max = Self::max_checkpoints(self.size);
        if self.checkpoints > max {
            return Err(EngineError::TooManyCheckpoints {
                requested: self.checkpoints,
                size: self.size,
                max,
            });
        }

        Ok(())
    }
}

/// Pyramid phase configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PyramidConfig {
    /// Number of rows (the widest row holds `size` cards).
    pub size: usize,

    /// Lay rows out widest-first; this also flips the drink weighting.
    pub reversed: bool,
}

impl Default for PyramidConfig {
    fn default() -> Self {
        Self {
            size: 1,
            reversed: false,
        }
    }
}

impl PyramidConfig {
    /// Create a config for a pyramid of `size` rows.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Set the orientation.
    #[must_use]
    pub fn with_reversed(mut self, reversed: bool) -> Self {
        self.reversed = reversed;
        self
    }

    /// Check that a deck of `deck_size` cards can fill the pyramid.
    pub fn validate(&self, deck_size: usize) -> Result<()> {
        let max = max_pyramid_size(deck_size);
        if self.size == 0 || self.size > max {
            return Err(EngineError::InvalidPyramidSize {
                size: self.size,
                max,
                deck_size,
            });
        }
        Ok(())
    }
}
