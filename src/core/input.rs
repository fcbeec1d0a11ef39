//! Edge-detected input events.
//!
//! The input-polling collaborator owns raw key/button state and edge
//! detection; the engine only ever sees discrete events. Each event is
//! applied synchronously within the tick it arrives in.

use serde::{Deserialize, Serialize};

use crate::board::Position;

/// Cursor movement direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A discrete, already edge-detected input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Move the cursor one cell, wrapping at grid edges.
    MoveCursor(Direction),
    /// Toggle selection of the card under the cursor.
    ToggleSelect,
    /// Toggle selection of the card at an explicit position.
    ToggleSelectAt(Position),
    /// Signal intent to claim a triple (competitive mode only).
    Declare,
    /// Tear down and restart the match.
    RestartMatch,
}
