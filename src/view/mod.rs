//! Row-structured, read-only views of a phase's card layout.
//!
//! A presentation layer renders the bus or pyramid from a [`BoardView`]
//! without knowing any transition rules: the view says which cards sit in
//! which row, which positions are focused, and which are face down.
//!
//! Views borrow the phase state and compute every flag on demand, so taking
//! one is free and nothing is allocated until rows are walked.
//!
//! ```
//! use bussen::bus::BusState;
//! use bussen::core::BusConfig;
//! use bussen::view::Focus;
//!
//! let bus = BusState::seeded(&BusConfig::new(6).with_checkpoints(1), 7).unwrap();
//! let view = bus.view(Focus::Current);
//!
//! let widths: Vec<_> = view.rows().map(|row| row.len()).collect();
//! assert_eq!(widths, vec![3, 3]);
//! assert_eq!(view.slots().filter(|s| s.focused).count(), 1);
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Which bus position to highlight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Focus {
    /// Highlight every card (overview after setup).
    All,
    /// Highlight the live card the driver is guessing against.
    Current,
    /// Highlight the slot that just received a drawn card.
    LastDrawn,
}

/// One rendered card position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot {
    /// Position in the flattened layout.
    pub position: usize,
    pub card: Card,
    pub focused: bool,
    /// Render face down.
    pub hidden: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Target {
    All,
    Position(usize),
    Nothing,
}

#[derive(Clone, Copy, Debug)]
enum Marking {
    Bus {
        target: Target,
        /// Furthest position ever reached; `None` before the first turn.
        reached: Option<usize>,
        hidden: bool,
    },
    Pyramid {
        /// Flattened position of the card revealed last; `None` before any reveal.
        revealed: Option<usize>,
    },
}

impl Marking {
    fn mark(self, position: usize) -> (bool, bool) {
        match self {
            Marking::Bus { target, reached, hidden } => {
                let focused = match target {
                    Target::All => true,
                    Target::Position(p) => p == position,
                    Target::Nothing => false,
                };
                let face_down = hidden && reached.map_or(true, |r| position > r);
                (focused, face_down)
            }
            // Cards reveal from the tail: everything before the last revealed
            // card is still face down, the revealed card and the unrevealed
            // ones stay in focus, earlier reveals fade out.
            Marking::Pyramid { revealed: None } => (true, false),
            Marking::Pyramid { revealed: Some(r) } => (position <= r, position < r),
        }
    }
}

/// A borrowed view over a card layout split into rows.
#[derive(Clone, Copy, Debug)]
pub struct BoardView<'a> {
    cards: &'a Vector<Card>,
    row_starts: &'a [usize],
    marking: Marking,
}

impl<'a> BoardView<'a> {
    pub(crate) fn bus(
        cards: &'a Vector<Card>,
        row_starts: &'a [usize],
        focus: Option<usize>,
        all_focused: bool,
        reached: Option<usize>,
        hidden: bool,
    ) -> Self {
        let target = match (all_focused, focus) {
            (true, _) => Target::All,
            (false, Some(p)) => Target::Position(p),
            (false, None) => Target::Nothing,
        };
        Self {
            cards,
            row_starts,
            marking: Marking::Bus { target, reached, hidden },
        }
    }

    pub(crate) fn pyramid(cards: &'a Vector<Card>, row_starts: &'a [usize], revealed: Option<usize>) -> Self {
        Self {
            cards,
            row_starts,
            marking: Marking::Pyramid { revealed },
        }
    }

    /// Total number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.row_starts.len()
    }

    /// Rows in layout order.
    pub fn rows(&self) -> impl Iterator<Item = RowView<'a>> + 'a {
        let cards = self.cards;
        let starts = self.row_starts;
        let marking = self.marking;
        starts.iter().enumerate().map(move |(index, &start)| RowView {
            index,
            start,
            end: starts.get(index + 1).copied().unwrap_or(cards.len()),
            cards,
            marking,
        })
    }

    /// Every slot, row by row.
    pub fn slots(&self) -> impl Iterator<Item = Slot> + 'a {
        self.rows().flat_map(|row| row.slots())
    }
}

/// One row of a [`BoardView`].
#[derive(Clone, Copy, Debug)]
pub struct RowView<'a> {
    index: usize,
    start: usize,
    end: usize,
    cards: &'a Vector<Card>,
    marking: Marking,
}

impl<'a> RowView<'a> {
    /// Row number, 0 at the top.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Flattened position of the first card in this row.
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn slots(&self) -> impl Iterator<Item = Slot> + 'a {
        let cards = self.cards;
        let marking = self.marking;
        (self.start..self.end).map(move |position| {
            let (focused, hidden) = marking.mark(position);
            Slot {
                position,
                card: cards[position],
                focused,
                hidden,
            }
        })
    }

    /// In-row offsets of focused cards.
    #[must_use]
    pub fn focused(&self) -> Vec<usize> {
        self.slots()
            .enumerate()
            .filter(|(_, slot)| slot.focused)
            .map(|(offset, _)| offset)
            .collect()
    }

    /// Face-down flag per card in the row.
    #[must_use]
    pub fn hidden(&self) -> Vec<bool> {
        self.slots().map(|slot| slot.hidden).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Deck;

    fn cards(n: usize) -> Vector<Card> {
        let mut deck = Deck::seeded(1);
        (0..n).map(|_| deck.draw().unwrap()).collect()
    }

    #[test]
    fn test_rows_split_at_starts() {
        let cards = cards(7);
        let starts = [0, 2, 5];
        let view = BoardView::bus(&cards, &starts, None, true, None, false);

        let rows: Vec<_> = view.rows().map(|r| (r.start(), r.len())).collect();
        assert_eq!(rows, vec![(0, 2), (2, 3), (5, 2)]);
        assert_eq!(view.slots().count(), 7);
        assert!(view.slots().all(|s| s.focused && !s.hidden));
    }

    #[test]
    fn test_bus_focus_single_position() {
        let cards = cards(6);
        let starts = [0, 3];
        let view = BoardView::bus(&cards, &starts, Some(4), false, Some(4), false);

        let focused: Vec<_> = view.rows().map(|r| r.focused()).collect();
        assert_eq!(focused, vec![vec![], vec![1]]);
    }

    #[test]
    fn test_bus_hidden_past_reached() {
        let cards = cards(5);
        let starts = [0];
        let view = BoardView::bus(&cards, &starts, Some(0), false, Some(1), true);
        let row = view.rows().next().unwrap();
        assert_eq!(row.hidden(), vec![false, false, true, true, true]);

        let fresh = BoardView::bus(&cards, &starts, Some(0), false, None, true);
        assert!(fresh.slots().all(|s| s.hidden));
    }

    #[test]
    fn test_pyramid_marking() {
        let cards = cards(6);
        let starts = [0, 1, 3];
        let view = BoardView::pyramid(&cards, &starts, Some(4));

        let hidden: Vec<_> = view.slots().map(|s| s.hidden).collect();
        let focused: Vec<_> = view.slots().map(|s| s.focused).collect();
        assert_eq!(hidden, vec![true, true, true, true, false, false]);
        assert_eq!(focused, vec![true, true, true, true, true, false]);

        let untouched = BoardView::pyramid(&cards, &starts, None);
        assert!(untouched.slots().all(|s| s.focused && !s.hidden));
    }
}
