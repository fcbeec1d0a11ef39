//! Transient per-cell replacement animations and claim flash feedback.
//!
//! When a claim replaces cards, each claimed cell gets a record of the
//! departing card, the arriving card, and a 0..1 progress value. Records
//! live in a sparse map keyed by position and are deleted once progress
//! reaches 1, so memory stays proportional to in-flight animations
//! (typically at most 3).
//!
//! The renderer draws the departing card shrinking out below progress 0.5
//! and the arriving card growing in above it; that split is the renderer's
//! contract. This module only tracks progress.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::grid::Position;
use crate::cards::Card;

/// One in-flight card replacement at a grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReplacementAnimation {
    /// Card that was claimed away, if the cell was occupied.
    pub departing: Option<Card>,
    /// Card the cell ends up holding; `None` when the deck was exhausted.
    pub arriving: Option<Card>,
    /// 0 at creation, advances per tick, record removed at >= 1.
    pub progress: f32,
}

/// Sparse map of in-flight replacement animations.
///
/// Serializes as a list of `(position, animation)` pairs so positions do
/// not need to be map keys in text formats.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(
    from = "Vec<(Position, ReplacementAnimation)>",
    into = "Vec<(Position, ReplacementAnimation)>"
)]
pub struct ReplacementAnimator {
    active: FxHashMap<Position, ReplacementAnimation>,
}

impl From<Vec<(Position, ReplacementAnimation)>> for ReplacementAnimator {
    fn from(entries: Vec<(Position, ReplacementAnimation)>) -> Self {
        Self {
            active: entries.into_iter().collect(),
        }
    }
}

impl From<ReplacementAnimator> for Vec<(Position, ReplacementAnimation)> {
    fn from(animator: ReplacementAnimator) -> Self {
        let mut entries: Vec<_> = animator.active.into_iter().collect();
        entries.sort_by_key(|&(pos, _)| pos);
        entries
    }
}

impl ReplacementAnimator {
    /// Create an animator with nothing in flight.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an animation at `pos`, replacing any record already there.
    pub fn begin(&mut self, pos: Position, departing: Option<Card>, arriving: Option<Card>) {
        self.active.insert(
            pos,
            ReplacementAnimation {
                departing,
                arriving,
                progress: 0.0,
            },
        );
    }

    /// Re-point an in-flight animation at a new arriving card.
    ///
    /// Used after the repair pass, which may swap a just-claimed cell
    /// again; the animation must land on the cell's final content.
    /// No-op if `pos` has no in-flight animation.
    pub fn retarget(&mut self, pos: Position, arriving: Option<Card>) {
        if let Some(anim) = self.active.get_mut(&pos) {
            anim.arriving = arriving;
        }
    }

    /// Advance every animation by `step` and prune completed records.
    pub fn advance(&mut self, step: f32) {
        for anim in self.active.values_mut() {
            anim.progress += step;
        }
        self.active.retain(|_, anim| anim.progress < 1.0);
    }

    /// The animation at `pos`, if one is in flight.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&ReplacementAnimation> {
        self.active.get(&pos)
    }

    /// Number of in-flight animations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Whether nothing is animating.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Drop all in-flight animations.
    pub fn clear(&mut self) {
        self.active.clear();
    }

    /// Iterate over in-flight animations in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &ReplacementAnimation)> {
        self.active.iter().map(|(&pos, anim)| (pos, anim))
    }
}

/// Which way a resolved claim flashed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlashKind {
    /// The triple scored.
    Valid,
    /// The compared cards were not a triple.
    Invalid,
}

/// Short-lived border flash over the positions a claim compared.
///
/// Purely visual: records which cells to highlight and for how many more
/// ticks. Cleared when the timer runs out.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashFeedback {
    /// Positions the claim compared.
    pub positions: SmallVec<[Position; 3]>,
    /// Valid or invalid styling.
    pub kind: FlashKind,
    /// Ticks until the flash disappears.
    pub ticks_left: u32,
}

impl FlashFeedback {
    /// Start a flash over `positions` lasting `ticks`.
    #[must_use]
    pub fn new(positions: &[Position], kind: FlashKind, ticks: u32) -> Self {
        Self {
            positions: SmallVec::from_slice(positions),
            kind,
            ticks_left: ticks,
        }
    }

    /// Count one tick down; returns whether the flash is still visible.
    pub fn tick(&mut self) -> bool {
        self.ticks_left = self.ticks_left.saturating_sub(1);
        self.ticks_left > 0
    }

    /// Whether `pos` is part of this flash.
    #[must_use]
    pub fn covers(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }
}
