//! The pyramid phase: a triangular, forward-only reveal.
//!
//! ## Key Types
//!
//! - `PyramidState`: layout, drink weights and the reveal cursor
//! - `PyramidReveal`: a revealed card with its drink weight
//! - `PutDown`: hand cards players discard onto a reveal

pub mod putdown;
pub mod state;

pub use putdown::{put_down, PutDown};
pub use state::{PyramidReveal, PyramidState};

/// Triangular number `n(n+1)/2`: cards in a pyramid of `n` rows.
#[must_use]
pub const fn triangular(n: usize) -> usize {
    n * (n + 1) / 2
}

/// Tallest pyramid a deck of `deck_size` cards can fill.
///
/// ```
/// use bussen::pyramid::max_pyramid_size;
///
/// assert_eq!(max_pyramid_size(52), 9);
/// assert_eq!(max_pyramid_size(55), 10);
/// assert_eq!(max_pyramid_size(0), 0);
/// ```
#[must_use]
pub fn max_pyramid_size(deck_size: usize) -> usize {
    let mut size = 0;
    while triangular(size + 1) <= deck_size {
        size += 1;
    }
    size
}
