//! The playable grid and everything that operates on it: exhaustive
//! triple search, the randomized repair pass, selections, and transient
//! replacement animations.

mod animation;
mod grid;
mod guarantee;
mod resolver;
mod selection;

pub use animation::{FlashFeedback, FlashKind, ReplacementAnimation, ReplacementAnimator};
pub use grid::{Board, ClaimResult, Position};
pub use guarantee::{ensure_solvable, RepairOutcome, MAX_REPAIR_ATTEMPTS};
pub use resolver::{all_valid_triples, has_valid_triple};
pub use selection::Selection;
