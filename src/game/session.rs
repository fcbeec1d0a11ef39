//! Single-player session controller.
//!
//! One cursor, one selection, no lives or timers: find triples until the
//! deck runs out and the board holds no more. Uses the same board, repair
//! pass, and animator as competitive mode.

use crate::board::{
    has_valid_triple, Board, ClaimResult, FlashFeedback, FlashKind, Position,
    ReplacementAnimator, Selection,
};
use crate::cards::Deck;
use crate::core::{Direction, GameConfig, GameRng, InputEvent};

/// A single-player game in progress.
#[derive(Clone, Debug)]
pub struct Session {
    config: GameConfig,
    rng: GameRng,
    board: Board,
    deck: Deck,
    animations: ReplacementAnimator,
    cursor: Position,
    selection: Selection,
    score: u32,
    flash: Option<FlashFeedback>,
    game_over: bool,
}

impl Session {
    /// Start a session: shuffle, deal, and repair the board once.
    #[must_use]
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let mut deck = Deck::full_shuffled(&mut rng);
        let mut board = Board::new(config.rows, config.cols);
        board.deal(&mut deck, &mut rng, config.max_repair_attempts);

        Self {
            config,
            rng,
            board,
            deck,
            animations: ReplacementAnimator::new(),
            cursor: Position::ORIGIN,
            selection: Selection::new(),
            score: 0,
            flash: None,
            game_over: false,
        }
    }

    /// Tear down and re-deal. The RNG stream continues.
    pub fn restart(&mut self) {
        let mut deck = Deck::full_shuffled(&mut self.rng);
        let mut board = Board::new(self.config.rows, self.config.cols);
        board.deal(&mut deck, &mut self.rng, self.config.max_repair_attempts);

        self.board = board;
        self.deck = deck;
        self.animations.clear();
        self.cursor = Position::ORIGIN;
        self.selection.clear();
        self.score = 0;
        self.flash = None;
        self.game_over = false;
    }

    /// Apply one edge-detected input event.
    ///
    /// `Declare` has no meaning in single-player mode and is ignored.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::MoveCursor(dir) => self.move_cursor(dir),
            InputEvent::ToggleSelect => self.toggle_select_at(self.cursor),
            InputEvent::ToggleSelectAt(pos) => self.toggle_select_at(pos),
            InputEvent::Declare => {}
            InputEvent::RestartMatch => self.restart(),
        }
    }

    /// Move the cursor one cell, wrapping at grid edges.
    pub fn move_cursor(&mut self, dir: Direction) {
        if self.game_over {
            return;
        }
        self.cursor = self
            .cursor
            .step_wrapping(dir, self.config.rows, self.config.cols);
    }

    /// Toggle selection of the card at `pos`; a third card resolves the
    /// claim immediately.
    pub fn toggle_select_at(&mut self, pos: Position) {
        if self.game_over || self.board.card_at(pos).is_none() {
            return;
        }

        self.selection.toggle(pos);
        if self.selection.is_full() {
            self.resolve_claim();
        }
    }

    fn resolve_claim(&mut self) {
        let positions: Vec<Position> = self.selection.positions().to_vec();
        self.selection.clear();

        let result = self.board.claim(
            &positions,
            &mut self.deck,
            &mut self.animations,
            &mut self.rng,
            self.config.max_repair_attempts,
        );

        let kind = match result {
            ClaimResult::Valid { .. } => {
                self.score += 1;
                if self.deck.is_empty() && !has_valid_triple(&self.board) {
                    self.game_over = true;
                }
                FlashKind::Valid
            }
            ClaimResult::Invalid | ClaimResult::Rejected => FlashKind::Invalid,
        };
        self.flash = Some(FlashFeedback::new(&positions, kind, self.config.flash_ticks));
    }

    /// Advance one logical time step (animations and flash decay).
    pub fn tick(&mut self) {
        self.animations.advance(self.config.animation_step());
        if let Some(flash) = &mut self.flash {
            if !flash.tick() {
                self.flash = None;
            }
        }
    }

    // === Read access for rendering ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn animations(&self) -> &ReplacementAnimator {
        &self.animations
    }

    #[must_use]
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn flash(&self) -> Option<&FlashFeedback> {
        self.flash.as_ref()
    }

    /// Deck exhausted and no triple remains.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
