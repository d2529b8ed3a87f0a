//! Pyramid phase behaviour tests.

use bussen::cards::Deck;
use bussen::core::{EngineError, PyramidConfig};
use bussen::pyramid::{max_pyramid_size, triangular, PyramidState};
use proptest::prelude::*;

fn pyramid(size: usize, reversed: bool, seed: u64) -> PyramidState {
    PyramidState::new(&PyramidConfig::new(size).with_reversed(reversed), Deck::seeded(seed)).unwrap()
}

#[test]
fn test_weights_size_four() {
    let mut p = pyramid(4, false, 1);
    let weights: Vec<_> = (0..10).map(|_| p.advance().unwrap().drinks).collect();

    // Widest row first, worth 1; apex last, worth 4.
    assert_eq!(&weights[..4], &[1, 1, 1, 1]);
    assert_eq!(weights[9], 4);
}

#[test]
fn test_reveal_walks_dealt_order_backwards() {
    let mut p = pyramid(5, true, 2);
    let dealt: Vec<_> = p.cards().iter().copied().collect();

    let revealed: Vec<_> = std::iter::from_fn(|| p.advance().ok()).map(|r| r.card).collect();
    let reversed: Vec<_> = dealt.into_iter().rev().collect();
    assert_eq!(revealed, reversed);
}

#[test]
fn test_max_size_for_full_deck() {
    let deck = Deck::seeded(0);
    let max = max_pyramid_size(deck.len());
    assert_eq!(max, 9);

    assert!(PyramidState::new(&PyramidConfig::new(max), Deck::seeded(0)).is_ok());
    assert!(matches!(
        PyramidState::new(&PyramidConfig::new(max + 1), Deck::seeded(0)),
        Err(EngineError::InvalidPyramidSize { .. })
    ));
}

#[test]
fn test_rows_match_orientation() {
    let normal = pyramid(5, false, 3);
    let widths: Vec<_> = normal.view().rows().map(|r| r.len()).collect();
    assert_eq!(widths, vec![1, 2, 3, 4, 5]);

    let reversed = pyramid(5, true, 3);
    let widths: Vec<_> = reversed.view().rows().map(|r| r.len()).collect();
    assert_eq!(widths, vec![5, 4, 3, 2, 1]);
}

proptest! {
    #[test]
    fn prop_exhausts_after_triangular_reveals(size in 1usize..=9, reversed in any::<bool>(), seed in any::<u64>()) {
        let mut p = pyramid(size, reversed, seed);
        let total = triangular(size);

        let mut last_weight = 0;
        for n in 1..=total {
            let reveal = p.advance().unwrap();
            prop_assert_eq!(reveal.number, n);
            prop_assert!(reveal.drinks >= last_weight);
            prop_assert!(reveal.drinks >= 1 && reveal.drinks as usize <= size);
            last_weight = reveal.drinks;
        }

        prop_assert!(p.is_exhausted());
        prop_assert_eq!(p.advance(), Err(EngineError::PyramidExhausted));
        prop_assert_eq!(p.index(), total);
    }
}
