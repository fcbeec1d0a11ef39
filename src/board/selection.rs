//! A player's in-progress card selection.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::grid::Position;

/// Up to three toggled positions, in selection order.
///
/// Reaching three cards triggers immediate claim resolution upstream, and
/// the selection is cleared regardless of the outcome, so the size never
/// exceeds three.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    positions: SmallVec<[Position; 3]>,
}

impl Selection {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle `pos`: deselect it if present, otherwise add it if there is
    /// room. Returns `true` if the selection changed.
    pub fn toggle(&mut self, pos: Position) -> bool {
        if let Some(idx) = self.positions.iter().position(|&p| p == pos) {
            self.positions.remove(idx);
            return true;
        }
        if self.positions.len() < 3 {
            self.positions.push(pos);
            return true;
        }
        false
    }

    /// Whether `pos` is selected.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }

    /// Number of selected positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Whether the selection holds three cards and is ready to resolve.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.positions.len() == 3
    }

    /// The selected positions, in selection order.
    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Drop all selected positions.
    pub fn clear(&mut self) {
        self.positions.clear();
    }
}
