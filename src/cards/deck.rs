//! The 81-card deck.
//!
//! Created once per match, shuffled once, and consumed strictly from the
//! back. The deck is never replenished; together with the board's occupied
//! cells and the cards discarded on claims it always partitions the full
//! 81-card universe (the closure invariant).

use serde::{Deserialize, Serialize};

use super::card::{Card, Color, Count, Fill, Shape};
use crate::core::GameRng;

/// Number of distinct cards: the Cartesian product of four 3-valued domains.
pub const DECK_SIZE: usize = 81;

/// An ordered stack of undrawn cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build the full 81-card universe, unshuffled.
    ///
    /// Exactly one card per attribute combination, in canonical nested
    /// order. Callers normally want [`Deck::full_shuffled`].
    #[must_use]
    pub fn full() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for shape in Shape::ALL {
            for color in Color::ALL {
                for count in Count::ALL {
                    for fill in Fill::ALL {
                        cards.push(Card::new(shape, color, count, fill));
                    }
                }
            }
        }
        Self { cards }
    }

    /// Build the full universe and shuffle it (uniform permutation).
    #[must_use]
    pub fn full_shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Self::full();
        deck.shuffle(rng);
        deck
    }

    /// Shuffle the undrawn cards in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Remove and return the top card.
    ///
    /// `None` means the deck is exhausted, which is a legitimate outcome
    /// (the cell being refilled stays empty), not an error.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Count of undrawn cards.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Whether all cards have been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Exchange the card at `index` with `incoming`, returning the card
    /// that was there.
    ///
    /// Used only by the board repair pass; a 1:1 exchange keeps the
    /// closure invariant intact.
    pub fn swap_at(&mut self, index: usize, incoming: Card) -> Card {
        std::mem::replace(&mut self.cards[index], incoming)
    }

    /// The undrawn cards, top of the deck last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
