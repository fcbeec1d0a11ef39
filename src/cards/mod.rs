//! Cards, the set-validity predicate, and the deck.

mod card;
mod deck;

pub use card::{is_valid_triple, Card, Color, Count, Fill, Shape};
pub use deck::{Deck, DECK_SIZE};
