//! Property tests for the card predicate and deck universe.

use proptest::prelude::*;
use std::collections::HashSet;

use set_engine::{is_valid_triple, Card, Color, Count, Deck, Fill, GameRng, Shape, DECK_SIZE};

fn card_strategy() -> impl Strategy<Value = Card> {
    (0..3usize, 0..3usize, 0..3usize, 0..3usize).prop_map(|(s, c, n, f)| {
        Card::new(Shape::ALL[s], Color::ALL[c], Count::ALL[n], Fill::ALL[f])
    })
}

proptest! {
    /// The predicate is invariant under any permutation of its arguments.
    #[test]
    fn predicate_is_symmetric(a in card_strategy(), b in card_strategy(), c in card_strategy()) {
        let expected = is_valid_triple(a, b, c);
        prop_assert_eq!(is_valid_triple(a, c, b), expected);
        prop_assert_eq!(is_valid_triple(b, a, c), expected);
        prop_assert_eq!(is_valid_triple(b, c, a), expected);
        prop_assert_eq!(is_valid_triple(c, a, b), expected);
        prop_assert_eq!(is_valid_triple(c, b, a), expected);
    }

    /// For any two distinct cards there is exactly one card in the
    /// universe completing a valid triple.
    #[test]
    fn every_pair_has_exactly_one_completion(a in card_strategy(), b in card_strategy()) {
        prop_assume!(a != b);
        let completions = Deck::full()
            .cards()
            .iter()
            .filter(|&&c| is_valid_triple(a, b, c))
            .count();
        prop_assert_eq!(completions, 1);
    }

    /// Shuffling never loses, duplicates, or invents cards.
    #[test]
    fn shuffle_preserves_the_universe(seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let deck = Deck::full_shuffled(&mut rng);
        let distinct: HashSet<Card> = deck.cards().iter().copied().collect();
        prop_assert_eq!(distinct.len(), DECK_SIZE);
        prop_assert_eq!(deck.remaining(), DECK_SIZE);
    }
}

/// The generated deck covers every attribute combination exactly once.
#[test]
fn deck_universe_is_complete() {
    let deck = Deck::full();
    assert_eq!(deck.remaining(), DECK_SIZE);

    let mut seen = HashSet::new();
    for &card in deck.cards() {
        assert!(seen.insert(card), "duplicate card {card}");
    }

    for shape in Shape::ALL {
        for color in Color::ALL {
            for count in Count::ALL {
                for fill in Fill::ALL {
                    assert!(seen.contains(&Card::new(shape, color, count, fill)));
                }
            }
        }
    }
}

/// Concrete scenario: all-different on every attribute is a valid triple.
#[test]
fn all_different_triple_is_valid() {
    let a = Card::new(Shape::Circle, Color::Red, Count::One, Fill::Solid);
    let b = Card::new(Shape::Square, Color::Green, Count::Two, Fill::Striped);
    let c = Card::new(Shape::Triangle, Color::Blue, Count::Three, Fill::Open);
    assert!(is_valid_triple(a, b, c));
}

/// Concrete scenario: two-same-one-different on shape breaks the triple.
#[test]
fn two_same_one_different_is_invalid() {
    let a = Card::new(Shape::Circle, Color::Red, Count::One, Fill::Solid);
    let b = Card::new(Shape::Circle, Color::Red, Count::Two, Fill::Solid);
    let c = Card::new(Shape::Square, Color::Red, Count::Three, Fill::Solid);
    assert!(!is_valid_triple(a, b, c));
}
