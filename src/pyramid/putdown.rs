//! Matching hand cards against a revealed pyramid card.

use serde::{Deserialize, Serialize};

use super::state::PyramidReveal;
use crate::cards::Card;
use crate::core::error::Result;
use crate::core::player::{PlayerId, Roster};

/// Cards a player put down on one reveal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PutDown {
    pub player: PlayerId,
    pub cards: Vec<Card>,
    /// Drinks the player may hand out: weight times cards put down.
    pub drinks: u32,
    /// Cards left in the player's hand afterwards.
    pub cards_left: usize,
}

/// Every player puts down all hand cards matching the revealed value.
///
/// Returns one entry per player in roster order, including players with
/// nothing to put down (empty `cards`, zero drinks).
pub fn put_down(roster: &mut Roster, reveal: &PyramidReveal) -> Result<Vec<PutDown>> {
    let value = reveal.card.value();
    let players = roster.players().to_vec();

    let mut entries = Vec::with_capacity(players.len());
    for player in players {
        let hand = roster.hand_mut(player)?;
        let cards = hand.take_value(value);
        let drinks = reveal.drinks * cards.len() as u32;
        if !cards.is_empty() {
            log::debug!("{player} put down {} cards, gives {drinks} drinks", cards.len());
        }
        entries.push(PutDown {
            player,
            drinks,
            cards_left: hand.len(),
            cards,
        });
    }
    Ok(entries)
}
