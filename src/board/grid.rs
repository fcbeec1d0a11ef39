//! The playable card grid.
//!
//! [`Board`] owns a fixed `rows × cols` grid of `Option<Card>` exclusively.
//! It is mutated only through [`Board::deal`], [`Board::claim`], and the
//! repair pass in [`super::guarantee`]; every other component borrows it
//! read-only for the duration of one operation.

use serde::{Deserialize, Serialize};

use super::animation::ReplacementAnimator;
use super::guarantee::{ensure_solvable, RepairOutcome};
use crate::cards::{is_valid_triple, Card, Deck};
use crate::core::{Direction, GameRng};

/// A grid cell coordinate.
///
/// Orders row-major so position lists and triple listings sort canonically.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// Create a position.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// The fixed cursor start position (top-left).
    pub const ORIGIN: Position = Position::new(0, 0);

    /// One step in `dir` on a `rows × cols` grid, wrapping at the edges.
    ///
    /// Arithmetic is widened to `u16` so grids near the `u8` coordinate
    /// limit wrap instead of overflowing.
    #[must_use]
    pub fn step_wrapping(self, dir: Direction, rows: u8, cols: u8) -> Self {
        let (rows, cols) = (u16::from(rows), u16::from(cols));
        let (row, col) = (u16::from(self.row), u16::from(self.col));
        let (row, col) = match dir {
            Direction::Up => ((row + rows - 1) % rows, col),
            Direction::Down => ((row + 1) % rows, col),
            Direction::Left => (row, (col + cols - 1) % cols),
            Direction::Right => (row, (col + 1) % cols),
        };
        Self::new(row as u8, col as u8)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Outcome of a claim attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimResult {
    /// Three distinct occupied cells forming a valid triple. The cells
    /// were refilled from the deck and the repair pass ran.
    Valid { repair: RepairOutcome },
    /// Three cards were compared and do not form a triple. The board is
    /// untouched.
    Invalid,
    /// Precondition violation: wrong position count, a duplicate, an
    /// out-of-bounds position, or an empty cell. Treated as a no-op so an
    /// upstream bug cannot crash the match.
    Rejected,
}

impl ClaimResult {
    /// Whether the claim scored.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, ClaimResult::Valid { .. })
    }
}

/// The playable grid of cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: u8,
    cols: u8,
    cells: Vec<Option<Card>>,
}

impl Board {
    /// Create an empty board.
    ///
    /// ## Panics
    ///
    /// Panics if the grid holds fewer than 3 cells.
    #[must_use]
    pub fn new(rows: u8, cols: u8) -> Self {
        let cell_count = rows as usize * cols as usize;
        assert!(cell_count >= 3, "Grid must hold at least 3 cells");
        Self {
            rows,
            cols,
            cells: vec![None; cell_count],
        }
    }

    /// Grid rows.
    #[must_use]
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Grid columns.
    #[must_use]
    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether `pos` is inside the grid.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    fn index(&self, pos: Position) -> usize {
        pos.row as usize * self.cols as usize + pos.col as usize
    }

    /// The card at `pos`, or `None` for an empty or out-of-bounds cell.
    #[must_use]
    pub fn card_at(&self, pos: Position) -> Option<Card> {
        if !self.contains(pos) {
            return None;
        }
        self.cells[self.index(pos)]
    }

    pub(super) fn set(&mut self, pos: Position, card: Option<Card>) {
        let idx = self.index(pos);
        self.cells[idx] = card;
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Position::new(row, col)))
    }

    /// Positions holding a card, in row-major order.
    #[must_use]
    pub fn occupied_positions(&self) -> Vec<Position> {
        self.positions()
            .filter(|&pos| self.card_at(pos).is_some())
            .collect()
    }

    /// Number of cells holding a card.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// All cards currently on the board.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.cells.iter().filter_map(|c| *c).collect()
    }

    /// Fill every cell in row-major order from the deck, then run the
    /// repair pass once so the dealt board contains a triple if one is
    /// reachable.
    ///
    /// Cells beyond deck exhaustion stay empty.
    pub fn deal(
        &mut self,
        deck: &mut Deck,
        rng: &mut GameRng,
        max_repair_attempts: u32,
    ) -> RepairOutcome {
        for pos in self.positions().collect::<Vec<_>>() {
            let drawn = deck.draw();
            self.set(pos, drawn);
        }
        ensure_solvable(self, deck, rng, max_repair_attempts)
    }

    /// Resolve a claim of three cells.
    ///
    /// On a valid triple: each claimed cell is refilled from the deck
    /// (left empty on exhaustion), one replacement animation is recorded
    /// per claimed position, the repair pass runs, and the animations are
    /// re-targeted so their arriving card matches the cell's final
    /// post-repair content. Cells the repair pass swapped incidentally do
    /// not get animations of their own.
    ///
    /// On an invalid triple the board is untouched. Malformed claims
    /// (wrong count, duplicates, empty cells) are rejected as no-ops.
    pub fn claim(
        &mut self,
        positions: &[Position],
        deck: &mut Deck,
        animations: &mut ReplacementAnimator,
        rng: &mut GameRng,
        max_repair_attempts: u32,
    ) -> ClaimResult {
        let [a, b, c] = match positions {
            &[a, b, c] if a != b && a != c && b != c => [a, b, c],
            _ => return ClaimResult::Rejected,
        };

        let cards = [self.card_at(a), self.card_at(b), self.card_at(c)];
        let (Some(ca), Some(cb), Some(cc)) = (cards[0], cards[1], cards[2]) else {
            return ClaimResult::Rejected;
        };

        if !is_valid_triple(ca, cb, cc) {
            return ClaimResult::Invalid;
        }

        for (&pos, departing) in [a, b, c].iter().zip([ca, cb, cc]) {
            let arriving = deck.draw();
            self.set(pos, arriving);
            animations.begin(pos, Some(departing), arriving);
        }

        let repair = ensure_solvable(self, deck, rng, max_repair_attempts);

        // The repair pass may have swapped a claimed cell again; re-sync so
        // the animation lands on what the cell actually holds now.
        for pos in [a, b, c] {
            animations.retarget(pos, self.card_at(pos));
        }

        ClaimResult::Valid { repair }
    }
}
