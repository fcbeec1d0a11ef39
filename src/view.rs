//! Read-only render snapshots.
//!
//! The rendering collaborator consumes board state as data: per-cell card,
//! cursor and selection ownership, claim flash, and any in-flight
//! replacement animation. Snapshot construction borrows the engine state
//! for the duration of one draw call and never retains it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{FlashKind, Position, ReplacementAnimation};
use crate::cards::Card;
use crate::core::PlayerId;
use crate::game::Session;
use crate::versus::TurnArbiter;

/// Everything the renderer needs to draw one grid cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CellView {
    pub position: Position,
    /// `None` renders as an empty slot.
    pub card: Option<Card>,
    /// Players whose cursor sits on this cell.
    pub cursors: SmallVec<[PlayerId; 2]>,
    /// Players with this cell in their selection.
    pub selected_by: SmallVec<[PlayerId; 2]>,
    /// Valid/invalid border flash, if the cell is part of one.
    pub flash: Option<FlashKind>,
    /// In-flight replacement animation, if any.
    pub animation: Option<ReplacementAnimation>,
}

/// Snapshot a single-player session's grid.
///
/// The lone player is reported as [`PlayerId::ONE`].
#[must_use]
pub fn session_cells(session: &Session) -> Vec<CellView> {
    session
        .board()
        .positions()
        .map(|pos| CellView {
            position: pos,
            card: session.board().card_at(pos),
            cursors: if session.cursor() == pos {
                SmallVec::from_slice(&[PlayerId::ONE])
            } else {
                SmallVec::new()
            },
            selected_by: if session.selection().contains(pos) {
                SmallVec::from_slice(&[PlayerId::ONE])
            } else {
                SmallVec::new()
            },
            flash: session
                .flash()
                .filter(|f| f.covers(pos))
                .map(|f| f.kind),
            animation: session.animations().get(pos).copied(),
        })
        .collect()
}

/// Snapshot a competitive match's grid.
///
/// Both cursors are reported; selections belong to whichever player is
/// (or was) declaring.
#[must_use]
pub fn versus_cells(arbiter: &TurnArbiter) -> Vec<CellView> {
    arbiter
        .board()
        .positions()
        .map(|pos| {
            let mut cursors = SmallVec::new();
            let mut selected_by = SmallVec::new();
            for player in PlayerId::both() {
                let status = arbiter.player(player);
                if status.cursor == pos {
                    cursors.push(player);
                }
                if status.selection.contains(pos) {
                    selected_by.push(player);
                }
            }
            CellView {
                position: pos,
                card: arbiter.board().card_at(pos),
                cursors,
                selected_by,
                flash: arbiter
                    .flash()
                    .filter(|f| f.covers(pos))
                    .map(|f| f.kind),
                animation: arbiter.animations().get(pos).copied(),
            }
        })
        .collect()
}
