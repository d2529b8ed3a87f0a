//! Bus driver selection.
//!
//! The players holding the most cards after the pyramid are the candidates.
//! One is picked uniformly at random and taken out of the pool. If the
//! driver leaves mid-run, the replacement comes from the remaining
//! candidates first and from the whole roster once they run out.

use serde::{Deserialize, Serialize};

use crate::core::error::{EngineError, Result};
use crate::core::player::{PlayerId, Roster};
use crate::core::rng::GameRng;

/// Candidate pool and current driver.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverPool {
    candidates: Vec<PlayerId>,
    max_card_count: usize,
    driver: Option<PlayerId>,
}

impl DriverPool {
    /// Collect the players with the largest hands.
    #[must_use]
    pub fn from_roster(roster: &Roster) -> Self {
        let max_card_count = roster.max_card_count();
        Self {
            candidates: roster.players_with_card_count(max_card_count),
            max_card_count,
            driver: None,
        }
    }

    /// Players still eligible for a preferred pick, in roster order.
    #[must_use]
    pub fn candidates(&self) -> &[PlayerId] {
        &self.candidates
    }

    /// Hand size the candidates were chosen by.
    #[must_use]
    pub fn max_card_count(&self) -> usize {
        self.max_card_count
    }

    #[must_use]
    pub fn driver(&self) -> Option<PlayerId> {
        self.driver
    }

    /// Pick a new driver and make them current.
    ///
    /// Candidates are drawn without replacement; the full roster is the
    /// fallback and may yield anyone still seated.
    pub fn select(&mut self, roster: &Roster, rng: &mut GameRng) -> Result<PlayerId> {
        self.candidates.retain(|p| roster.contains(*p));

        let chosen = if self.candidates.is_empty() {
            let fallback = *rng
                .choose(roster.players())
                .ok_or(EngineError::NoEligibleDriver)?;
            log::warn!("no driver candidates left, picked {fallback} from the whole roster");
            fallback
        } else {
            let i = rng.index(self.candidates.len());
            self.candidates.remove(i)
        };

        log::info!("{chosen} is driving the bus");
        self.driver = Some(chosen);
        Ok(chosen)
    }

    /// Drop a player from the pool.
    pub fn remove(&mut self, player: PlayerId) -> bool {
        let before = self.candidates.len();
        self.candidates.retain(|p| *p != player);
        before != self.candidates.len()
    }

    /// Handle a player leaving the session.
    ///
    /// `roster` must no longer contain `player`. Returns the replacement
    /// when the leaving player was driving, `None` otherwise.
    pub fn on_player_removed(
        &mut self,
        player: PlayerId,
        roster: &Roster,
        rng: &mut GameRng,
    ) -> Result<Option<PlayerId>> {
        self.remove(player);
        if self.driver != Some(player) {
            return Ok(None);
        }

        self.driver = None;
        let replacement = self.select(roster, rng)?;
        log::info!("{player} left the bus, {replacement} takes over");
        Ok(Some(replacement))
    }
}
