//! # set-engine
//!
//! Board/deck combinatorial engine and two-player turn arbiter for the
//! card-matching game Set.
//!
//! ## Design Principles
//!
//! 1. **Single owner per resource**: the board owns its grid exclusively;
//!    the resolver, repair pass, and animator borrow it for one operation
//!    and never retain it.
//!
//! 2. **Solvable by construction**: after every deal and every successful
//!    claim a randomized repair pass restores at least one valid triple
//!    whenever the deck allows it.
//!
//! 3. **No exceptions for game flow**: invalid claims, timeouts, deck
//!    exhaustion, and eliminations are values and state transitions,
//!    never panics.
//!
//! 4. **Tick-driven and deterministic**: one logical update per fixed
//!    time step, all randomness behind a seeded RNG, so every match is
//!    reproducible.
//!
//! ## Modules
//!
//! - `core`: players, RNG, configuration, input events
//! - `cards`: cards, the set-validity predicate, the 81-card deck
//! - `board`: the grid, triple search, randomized repair, selections,
//!   replacement animations
//! - `versus`: competitive two-player declare/select/resolve arbitration
//! - `game`: single-player session controller
//! - `view`: read-only snapshots for the rendering collaborator

pub mod board;
pub mod cards;
pub mod core;
pub mod game;
pub mod versus;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    Direction, GameConfig, GameConfigBuilder, GameRng, GameRngState, InputEvent, PlayerId,
    PlayerPair,
};

pub use crate::cards::{is_valid_triple, Card, Color, Count, Deck, Fill, Shape, DECK_SIZE};

pub use crate::board::{
    all_valid_triples, ensure_solvable, has_valid_triple, Board, ClaimResult, FlashFeedback,
    FlashKind, Position, RepairOutcome, ReplacementAnimation, ReplacementAnimator, Selection,
    MAX_REPAIR_ATTEMPTS,
};

pub use crate::versus::{GameOverSummary, MatchPhase, PlayerStatus, TurnArbiter, WinReason};

pub use crate::game::Session;

pub use crate::view::{session_cells, versus_cells, CellView};
