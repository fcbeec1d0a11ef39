//! Exhaustive triple search.
//!
//! The grid holds at most 12 cards, so there are at most C(12, 3) = 220
//! candidate triples. Plain exhaustive enumeration in row-major order is
//! cheap, short-circuits for the existence check, and keeps debug output
//! reproducible.

use super::grid::{Board, Position};
use crate::cards::is_valid_triple;

/// Whether any valid triple exists among the occupied cells.
#[must_use]
pub fn has_valid_triple(board: &Board) -> bool {
    let occupied = board.occupied_positions();
    for_each_combination(&occupied, |a, b, c| {
        is_valid_triple(
            board.card_at(a).expect("occupied"),
            board.card_at(b).expect("occupied"),
            board.card_at(c).expect("occupied"),
        )
    })
}

/// List every valid triple on the board.
///
/// Each unordered triple appears exactly once, positions sorted row-major
/// within the triple and triples in lexicographic order. Diagnostic only;
/// gameplay uses [`has_valid_triple`].
#[must_use]
pub fn all_valid_triples(board: &Board) -> Vec<[Position; 3]> {
    let occupied = board.occupied_positions();
    let mut triples = Vec::new();
    for i in 0..occupied.len() {
        for j in (i + 1)..occupied.len() {
            for k in (j + 1)..occupied.len() {
                let (a, b, c) = (occupied[i], occupied[j], occupied[k]);
                if is_valid_triple(
                    board.card_at(a).expect("occupied"),
                    board.card_at(b).expect("occupied"),
                    board.card_at(c).expect("occupied"),
                ) {
                    triples.push([a, b, c]);
                }
            }
        }
    }
    triples
}

/// Run `check` over every 3-combination, short-circuiting on the first hit.
fn for_each_combination(
    positions: &[Position],
    mut check: impl FnMut(Position, Position, Position) -> bool,
) -> bool {
    for i in 0..positions.len() {
        for j in (i + 1)..positions.len() {
            for k in (j + 1)..positions.len() {
                if check(positions[i], positions[j], positions[k]) {
                    return true;
                }
            }
        }
    }
    false
}
