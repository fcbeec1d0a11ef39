//! Competitive two-player mode: the declare/select/resolve arbiter.

mod arbiter;

pub use arbiter::{GameOverSummary, MatchPhase, PlayerStatus, TurnArbiter, WinReason};
