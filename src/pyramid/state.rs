//! Pyramid layout, drink weights and the reveal cursor.
//!
//! ## Layout
//!
//! `size` rows are dealt top to bottom. Normal pyramids grow 1, 2, ..., size
//! cards per row; reversed pyramids shrink size, size-1, ..., 1.
//!
//! ## Reveal order
//!
//! Cards are revealed from the tail of the dealt order, so a normal pyramid
//! reveals its wide base first and a reversed one its single-card tip first.
//!
//! ## Drink weight
//!
//! Weights are a function of the reveal number `p` (0-based):
//! - normal: bands of size, size-1, ..., 1 reveals weigh 1, 2, ..., size
//! - reversed: bands of 1, 2, ..., size reveals weigh 1, 2, ..., size
//!
//! Either way weight never decreases as the reveal cursor advances.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::triangular;
use crate::cards::{Card, Deck};
use crate::core::config::PyramidConfig;
use crate::core::error::{EngineError, Result};
use crate::view::BoardView;

/// One revealed pyramid card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PyramidReveal {
    pub card: Card,
    /// Drinks handed out per matching hand card.
    pub drinks: u32,
    /// 1-based reveal number.
    pub number: usize,
}

/// Live state of one pyramid phase.
#[derive(Clone, Debug)]
pub struct PyramidState {
    deck: Deck,
    cards: Vector<Card>,
    row_starts: SmallVec<[usize; 16]>,
    size: usize,
    reversed: bool,
    index: usize,
}

impl PyramidState {
    /// Deal a pyramid from `deck`, which the pyramid owns from now on.
    pub fn new(config: &PyramidConfig, mut deck: Deck) -> Result<Self> {
        config.validate(deck.len())?;

        let size = config.size;
        let mut cards = Vector::new();
        let mut row_starts = SmallVec::with_capacity(size);
        for row in 0..size {
            let width = if config.reversed { size - row } else { row + 1 };
            row_starts.push(cards.len());
            for _ in 0..width {
                cards.push_back(deck.draw()?);
            }
        }

        log::debug!(
            "pyramid dealt: {size} rows, {} cards, reversed={}",
            cards.len(),
            config.reversed
        );

        Ok(Self {
            deck,
            cards,
            row_starts,
            size,
            reversed: config.reversed,
            index: 0,
        })
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn reversed(&self) -> bool {
        self.reversed
    }

    /// Cards revealed so far.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Cards in dealt order.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    /// Flattened position of each row's first card.
    #[must_use]
    pub fn row_starts(&self) -> &[usize] {
        &self.row_starts
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.index
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.index >= self.cards.len()
    }

    /// Drink weight of reveal number `p`, `None` past the end.
    ///
    /// ```
    /// use bussen::cards::Deck;
    /// use bussen::core::PyramidConfig;
    /// use bussen::pyramid::PyramidState;
    ///
    /// let pyramid = PyramidState::new(&PyramidConfig::new(4), Deck::seeded(1)).unwrap();
    /// let weights: Vec<_> = (0..10).filter_map(|p| pyramid.drink_weight(p)).collect();
    /// assert_eq!(weights, vec![1, 1, 1, 1, 2, 2, 2, 3, 3, 4]);
    /// ```
    #[must_use]
    pub fn drink_weight(&self, p: usize) -> Option<u32> {
        if p >= triangular(self.size) {
            return None;
        }

        if self.reversed {
            (0..self.size)
                .find(|&i| triangular(i) <= p && p < triangular(i + 1))
                .map(|i| (i + 1) as u32)
        } else {
            let mut band_end = 0;
            for width in (1..=self.size).rev() {
                band_end += width;
                if p < band_end {
                    return Some((self.size - (width - 1)) as u32);
                }
            }
            None
        }
    }

    /// Reveal the next card.
    pub fn advance(&mut self) -> Result<PyramidReveal> {
        if self.is_exhausted() {
            return Err(EngineError::PyramidExhausted);
        }

        let drinks = self.drink_weight(self.index).ok_or(EngineError::PyramidExhausted)?;
        let card = self.cards[self.cards.len() - 1 - self.index];
        self.index += 1;

        log::debug!("pyramid reveal {}: {card} worth {drinks}", self.index);

        Ok(PyramidReveal {
            card,
            drinks,
            number: self.index,
        })
    }

    /// Row view with the most recent reveal in focus.
    #[must_use]
    pub fn view(&self) -> BoardView<'_> {
        let revealed = (self.index > 0).then(|| self.cards.len() - self.index);
        BoardView::pyramid(&self.cards, &self.row_starts, revealed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pyramid(size: usize, reversed: bool) -> PyramidState {
        PyramidState::new(&PyramidConfig::new(size).with_reversed(reversed), Deck::seeded(8)).unwrap()
    }

    #[test]
    fn test_layout_normal() {
        let p = pyramid(4, false);
        assert_eq!(p.cards().len(), 10);
        assert_eq!(p.row_starts(), &[0, 1, 3, 6]);
        assert_eq!(p.deck().len(), 42);
    }

    #[test]
    fn test_layout_reversed() {
        let p = pyramid(4, true);
        assert_eq!(p.row_starts(), &[0, 4, 7, 9]);
    }

    #[test]
    fn test_weights_reversed() {
        let p = pyramid(4, true);
        let weights: Vec<_> = (0..10).map(|i| p.drink_weight(i).unwrap()).collect();
        assert_eq!(weights, vec![1, 2, 2, 3, 3, 3, 4, 4, 4, 4]);
        assert_eq!(p.drink_weight(10), None);
    }

    #[test]
    fn test_advance_pops_from_tail() {
        let mut p = pyramid(3, false);
        let last = p.cards()[5];
        let reveal = p.advance().unwrap();

        assert_eq!(reveal.card, last);
        assert_eq!(reveal.drinks, 1);
        assert_eq!(reveal.number, 1);
        assert_eq!(p.index(), 1);
        assert_eq!(p.remaining(), 5);
    }

    #[test]
    fn test_exhaustion() {
        let mut p = pyramid(3, true);
        for _ in 0..6 {
            p.advance().unwrap();
        }
        assert!(p.is_exhausted());
        assert_eq!(p.advance(), Err(EngineError::PyramidExhausted));
        assert_eq!(p.index(), 6);
    }

    #[test]
    fn test_rejects_oversized() {
        let result = PyramidState::new(&PyramidConfig::new(10), Deck::seeded(1));
        assert!(matches!(result, Err(EngineError::InvalidPyramidSize { max: 9, .. })));
    }

    #[test]
    fn test_view_tracks_reveal() {
        let mut p = pyramid(3, false);
        assert!(p.view().slots().all(|s| s.focused && !s.hidden));

        p.advance().unwrap();
        p.advance().unwrap();
        let hidden: Vec<_> = p.view().slots().map(|s| s.hidden).collect();
        assert_eq!(hidden, vec![true, true, true, true, false, false]);
        let focused: Vec<_> = p.view().slots().map(|s| s.focused).collect();
        assert_eq!(focused, vec![true, true, true, true, true, false]);
    }
}
