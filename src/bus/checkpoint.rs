//! Checkpoint placement and advancement.
//!
//! Checkpoints are save points along the bus. Index 0 is always one; `k`
//! more are spread evenly at `floor(size * i / (k + 1))` for `i = 1..=k`.
//! A wrong guess sends the driver back to the active checkpoint.
//!
//! The active checkpoint only moves forward, one step at a time, and only
//! when the driver correctly guesses *past* the next checkpoint's card.
//! Once passed a checkpoint is never re-triggered, even after resets.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Ordered checkpoint indices plus the active one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoints {
    indices: SmallVec<[usize; 8]>,
    active: usize,
}

impl Checkpoints {
    /// Place `count` checkpoints on a bus of `size` cards.
    ///
    /// ```
    /// use bussen::bus::Checkpoints;
    ///
    /// assert_eq!(Checkpoints::new(6, 1).indices(), &[0, 3]);
    /// assert_eq!(Checkpoints::new(20, 3).indices(), &[0, 5, 10, 15]);
    /// assert_eq!(Checkpoints::new(5, 0).indices(), &[0]);
    /// ```
    #[must_use]
    pub fn new(size: usize, count: usize) -> Self {
        let mut indices: SmallVec<[usize; 8]> = SmallVec::with_capacity(count + 1);
        indices.push(0);
        for i in 1..=count {
            indices.push(size * i / (count + 1));
        }
        indices.dedup();

        Self { indices, active: 0 }
    }

    /// All checkpoint indices, starting with 0.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Position of the active checkpoint in [`Checkpoints::indices`].
    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }

    /// Bus index of the active checkpoint (the reset target).
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.indices[self.active]
    }

    /// Bus index of the next checkpoint still ahead, if any.
    #[must_use]
    pub fn next_index(&self) -> Option<usize> {
        self.indices.get(self.active + 1).copied()
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Record that the card at `index` was guessed correctly.
    ///
    /// Advances by exactly one when `index` is the next checkpoint; returns
    /// the new active checkpoint index in that case.
    pub fn pass(&mut self, index: usize) -> Option<usize> {
        if self.next_index() == Some(index) {
            self.active += 1;
            Some(index)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_evenly_spaced() {
        assert_eq!(Checkpoints::new(9, 2).indices(), &[0, 3, 6]);
        assert_eq!(Checkpoints::new(10, 2).indices(), &[0, 3, 6]);
        assert_eq!(Checkpoints::new(20, 6).indices(), &[0, 2, 5, 8, 11, 14, 17]);
    }

    #[test]
    fn test_placement_dedups() {
        assert_eq!(Checkpoints::new(2, 3).indices(), &[0, 1]);
        assert_eq!(Checkpoints::new(1, 2).indices(), &[0]);
    }

    #[test]
    fn test_pass_advances_one_step() {
        let mut cp = Checkpoints::new(9, 2);
        assert_eq!(cp.active_index(), 0);

        assert_eq!(cp.pass(0), None);
        assert_eq!(cp.pass(6), None);
        assert_eq!(cp.active_index(), 0);

        assert_eq!(cp.pass(3), Some(3));
        assert_eq!(cp.active(), 1);
        assert_eq!(cp.active_index(), 3);
        assert_eq!(cp.next_index(), Some(6));
    }

    #[test]
    fn test_passed_checkpoint_not_retriggered() {
        let mut cp = Checkpoints::new(9, 2);
        cp.pass(3);
        assert_eq!(cp.pass(3), None);
        assert_eq!(cp.active_index(), 3);

        cp.pass(6);
        assert_eq!(cp.active_index(), 6);
        assert_eq!(cp.next_index(), None);
        assert_eq!(cp.pass(8), None);
    }
}
