//! Cards and the set-validity predicate.
//!
//! A card is an immutable 4-tuple of categorical attributes, each drawn
//! from a 3-element domain. Three cards form a valid triple ("set") when
//! every attribute is all-same or all-different across the three cards.
//! [`is_valid_triple`] is the single source of truth for that rule.

use serde::{Deserialize, Serialize};

/// Card shape attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    Circle,
    Square,
    Triangle,
}

impl Shape {
    /// All shape values, in canonical order.
    pub const ALL: [Shape; 3] = [Shape::Circle, Shape::Square, Shape::Triangle];
}

/// Card color attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    /// All color values, in canonical order.
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Blue];
}

/// Card symbol-count attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Count {
    One,
    Two,
    Three,
}

impl Count {
    /// All count values, in canonical order.
    pub const ALL: [Count; 3] = [Count::One, Count::Two, Count::Three];

    /// Number of symbols to render.
    #[must_use]
    pub const fn symbols(self) -> u8 {
        match self {
            Count::One => 1,
            Count::Two => 2,
            Count::Three => 3,
        }
    }
}

/// Card fill-style attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fill {
    Solid,
    Striped,
    Open,
}

impl Fill {
    /// All fill values, in canonical order.
    pub const ALL: [Fill; 3] = [Fill::Solid, Fill::Striped, Fill::Open];
}

/// An immutable card: one value per attribute.
///
/// Equality is structural; the 81 distinct attribute combinations form
/// the full deck universe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub shape: Shape,
    pub color: Color,
    pub count: Count,
    pub fill: Fill,
}

impl Card {
    /// Create a card from its four attribute values.
    #[must_use]
    pub const fn new(shape: Shape, color: Color, count: Count, fill: Fill) -> Self {
        Self {
            shape,
            color,
            count,
            fill,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:?}/{:?}/{}/{:?}",
            self.shape,
            self.color,
            self.count.symbols(),
            self.fill
        )
    }
}

/// One attribute is valid when its three values are all equal or
/// pairwise distinct.
fn attribute_ok<T: PartialEq>(a: T, b: T, c: T) -> bool {
    let all_same = a == b && b == c;
    let all_diff = a != b && a != c && b != c;
    all_same || all_diff
}

/// Check whether three cards form a valid triple.
///
/// Each of the four attributes is checked independently; all four must be
/// all-same or all-different. The predicate is pure and symmetric under
/// any permutation of its arguments.
#[must_use]
pub fn is_valid_triple(a: Card, b: Card, c: Card) -> bool {
    attribute_ok(a.shape, b.shape, c.shape)
        && attribute_ok(a.color, b.color, c.color)
        && attribute_ok(a.count, b.count, c.count)
        && attribute_ok(a.fill, b.fill, c.fill)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(shape: Shape, color: Color, count: Count, fill: Fill) -> Card {
        Card::new(shape, color, count, fill)
    }

    #[test]
    fn test_all_same_is_valid() {
        let c = card(Shape::Circle, Color::Red, Count::One, Fill::Solid);
        assert!(is_valid_triple(c, c, c));
    }

    #[test]
    fn test_all_different_is_valid() {
        let a = card(Shape::Circle, Color::Red, Count::One, Fill::Solid);
        let b = card(Shape::Square, Color::Green, Count::Two, Fill::Striped);
        let c = card(Shape::Triangle, Color::Blue, Count::Three, Fill::Open);
        assert!(is_valid_triple(a, b, c));
    }

    #[test]
    fn test_mixed_same_and_different_is_valid() {
        // Same shape, different everything else
        let a = card(Shape::Circle, Color::Red, Count::One, Fill::Solid);
        let b = card(Shape::Circle, Color::Green, Count::Two, Fill::Striped);
        let c = card(Shape::Circle, Color::Blue, Count::Three, Fill::Open);
        assert!(is_valid_triple(a, b, c));
    }

    #[test]
    fn test_two_same_one_different_is_invalid() {
        // Shape: circle, circle, square - neither all-same nor all-different
        let a = card(Shape::Circle, Color::Red, Count::One, Fill::Solid);
        let b = card(Shape::Circle, Color::Red, Count::Two, Fill::Solid);
        let c = card(Shape::Square, Color::Red, Count::Three, Fill::Solid);
        assert!(!is_valid_triple(a, b, c));
    }

    #[test]
    fn test_predicate_is_symmetric() {
        let a = card(Shape::Circle, Color::Red, Count::One, Fill::Solid);
        let b = card(Shape::Circle, Color::Green, Count::Two, Fill::Striped);
        let c = card(Shape::Circle, Color::Blue, Count::Three, Fill::Open);

        let expected = is_valid_triple(a, b, c);
        assert_eq!(is_valid_triple(a, c, b), expected);
        assert_eq!(is_valid_triple(b, a, c), expected);
        assert_eq!(is_valid_triple(b, c, a), expected);
        assert_eq!(is_valid_triple(c, a, b), expected);
        assert_eq!(is_valid_triple(c, b, a), expected);
    }

    #[test]
    fn test_structural_equality() {
        let a = card(Shape::Circle, Color::Red, Count::One, Fill::Solid);
        let b = card(Shape::Circle, Color::Red, Count::One, Fill::Solid);
        let c = card(Shape::Circle, Color::Red, Count::One, Fill::Open);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_display() {
        let c = card(Shape::Triangle, Color::Blue, Count::Two, Fill::Striped);
        assert_eq!(format!("{c}"), "Triangle/Blue/2/Striped");
    }

    #[test]
    fn test_serde_round_trip() {
        let c = card(Shape::Square, Color::Green, Count::Three, Fill::Open);
        let json = serde_json::to_string(&c).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(c, deserialized);
    }
}
