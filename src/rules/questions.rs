//! Warm-up questions asked to every player before the pyramid.
//!
//! Each player answers four questions in order, receiving one card per
//! question:
//! 1. `Colour` - red or black?
//! 2. `HigherLower` - higher or lower than your first card?
//! 3. `Between` - is it between your first two cards?
//! 4. `Suit` - do you already hold its suit?
//!
//! The drawn card is judged against the hand as it was *before* the card is
//! added.

use serde::{Deserialize, Serialize};

use super::guess::Guess;
use crate::cards::{Card, Colour, Deck};
use crate::core::error::{EngineError, Result};
use crate::core::player::{PlayerId, Roster};

/// Warm-up question kinds, in the order they are asked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Question {
    Colour,
    HigherLower,
    Between,
    Suit,
}

impl Question {
    pub const ALL: [Question; 4] = [
        Question::Colour,
        Question::HigherLower,
        Question::Between,
        Question::Suit,
    ];

    /// Hand cards the question refers to.
    #[must_use]
    pub const fn hand_cards_needed(self) -> usize {
        match self {
            Question::Colour | Question::Suit => 0,
            Question::HigherLower => 1,
            Question::Between => 2,
        }
    }

    fn check(self, answer: Answer, held: usize) -> Result<()> {
        let fits = matches!(
            (self, answer),
            (Question::Colour, Answer::Colour(_))
                | (Question::HigherLower, Answer::Guess(_))
                | (Question::Between | Question::Suit, Answer::YesNo(_))
        );
        if !fits {
            return Err(EngineError::AnswerMismatch { question: self });
        }

        let needed = self.hand_cards_needed();
        if held < needed {
            return Err(EngineError::MissingHandCards {
                question: self,
                needed,
                held,
            });
        }
        Ok(())
    }

    /// Judge `answer` for a freshly drawn card against the player's hand.
    pub fn evaluate(self, answer: Answer, drawn: &Card, hand: &[Card]) -> Result<bool> {
        self.check(answer, hand.len())?;

        let correct = match (self, answer) {
            (Question::Colour, Answer::Colour(colour)) => drawn.colour() == colour,
            (Question::HigherLower, Answer::Guess(guess)) => guess.is_correct(drawn, &hand[0]),
            (Question::Between, Answer::YesNo(yes)) => drawn.is_between(&hand[0], &hand[1]) == yes,
            (Question::Suit, Answer::YesNo(yes)) => drawn.has_same_suit(hand) == yes,
            _ => return Err(EngineError::AnswerMismatch { question: self }),
        };
        Ok(correct)
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let repr = match self {
            Question::Colour => "colour",
            Question::HigherLower => "higher or lower",
            Question::Between => "between",
            Question::Suit => "suit",
        };
        f.write_str(repr)
    }
}

/// A player's answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Answer {
    Colour(Colour),
    Guess(Guess),
    YesNo(bool),
}

/// Outcome of one warm-up question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub player: PlayerId,
    pub question: Question,
    /// The drawn card, now in the player's hand.
    pub card: Card,
    pub correct: bool,
    /// Drinks at stake: given out when correct, consumed when wrong.
    pub drinks: u32,
}

/// Ask `player` a question: draw, judge, and hand them the card.
///
/// Nothing is drawn if the player is unknown, the answer does not fit the
/// question, or the hand is too small.
pub fn ask(
    question: Question,
    answer: Answer,
    deck: &mut Deck,
    roster: &mut Roster,
    player: PlayerId,
    drinks: u32,
) -> Result<Verdict> {
    let hand = roster.hand_mut(player)?;
    question.check(answer, hand.len())?;

    let card = deck.draw()?;
    let correct = question.evaluate(answer, &card, hand.cards())?;
    hand.add_card(card);

    log::debug!("{player} answered {question}: drew {card}, correct={correct}");

    Ok(Verdict {
        player,
        question,
        card,
        correct,
        drinks,
    })
}
