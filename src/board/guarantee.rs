//! Randomized board repair.
//!
//! After a deal or a successful claim the board may hold no valid triple.
//! The repair pass blindly exchanges a random occupied cell with a random
//! deck card until a triple appears, the deck runs dry, or the attempt cap
//! is hit. The blind random walk is deliberate: a search for a provably
//! set-creating swap would change which replacement cards players see.
//!
//! With a full deck the walk converges in a handful of swaps; hitting the
//! cap in practice means the board holds too few cards to ever contain a
//! triple.

use serde::{Deserialize, Serialize};

use super::grid::Board;
use super::resolver::has_valid_triple;
use crate::cards::Deck;
use crate::core::GameRng;

/// Safety valve for the random-walk repair.
pub const MAX_REPAIR_ATTEMPTS: u32 = 1000;

/// How a repair pass ended. The cap hit is observable, never swallowed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepairOutcome {
    /// At least one valid triple is on the board. `attempts` is the number
    /// of swaps performed (0 if the board was already solvable).
    Solvable { attempts: u32 },
    /// No triple and no deck cards left to swap in. The caller decides
    /// whether this is game over.
    DeckExhausted { attempts: u32 },
    /// Gave up: the attempt cap was hit, or there were no occupied cells
    /// to swap. The board is left without a valid triple.
    GaveUp { attempts: u32 },
}

impl RepairOutcome {
    /// Whether the board ended up with a valid triple.
    #[must_use]
    pub fn solved(&self) -> bool {
        matches!(self, RepairOutcome::Solvable { .. })
    }

    /// Swaps performed before terminating.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        match *self {
            RepairOutcome::Solvable { attempts }
            | RepairOutcome::DeckExhausted { attempts }
            | RepairOutcome::GaveUp { attempts } => attempts,
        }
    }
}

/// Exchange random board cells with random deck cards until the board
/// holds a valid triple.
///
/// Every swap is a 1:1 exchange (the displaced board card returns to the
/// deck at the same index), so the deck+board closure over the 81-card
/// universe is preserved. Mutates both board and deck.
///
/// Invoked after every deal and every successful claim, never after a
/// failed claim.
pub fn ensure_solvable(
    board: &mut Board,
    deck: &mut Deck,
    rng: &mut GameRng,
    max_attempts: u32,
) -> RepairOutcome {
    let mut attempts = 0;

    loop {
        if has_valid_triple(board) {
            return RepairOutcome::Solvable { attempts };
        }
        if deck.is_empty() {
            return RepairOutcome::DeckExhausted { attempts };
        }
        if attempts >= max_attempts {
            return RepairOutcome::GaveUp { attempts };
        }

        let occupied = board.occupied_positions();
        let Some(&pos) = rng.choose(&occupied) else {
            // Nothing on the board to swap with.
            return RepairOutcome::GaveUp { attempts };
        };

        let deck_idx = rng.gen_range(0..deck.remaining());
        let outgoing = board.card_at(pos).expect("chosen from occupied positions");
        let incoming = deck.swap_at(deck_idx, outgoing);
        board.set(pos, Some(incoming));
        attempts += 1;
    }
}
