//! Match configuration.
//!
//! A [`GameConfig`] fixes the grid shape, the tick-based timer durations,
//! and the repair attempt cap for one match. The engine never hardcodes
//! these; defaults match the canonical 3×4 board at 60 ticks per second.
//!
//! Timers are expressed in ticks, not wall-clock time. The frame-loop
//! driver is expected to call `tick()` at a constant rate.

use serde::{Deserialize, Serialize};

use crate::board::MAX_REPAIR_ATTEMPTS;

/// Configuration for one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Grid rows.
    pub rows: u8,
    /// Grid columns.
    pub cols: u8,
    /// Lives each player starts with in competitive mode.
    pub starting_lives: u8,
    /// Logical updates per second; timer durations below are in these units.
    pub ticks_per_second: u32,
    /// How long a declaring player has to complete a selection.
    pub selection_timeout_ticks: u32,
    /// How long the "declare" banner stays visible after a declaration.
    pub declare_display_ticks: u32,
    /// Duration of a card replacement animation.
    pub animation_ticks: u32,
    /// Duration of the valid/invalid border flash after a claim.
    pub flash_ticks: u32,
    /// Attempt cap for the randomized board repair pass.
    pub max_repair_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 3,
            cols: 4,
            starting_lives: 3,
            ticks_per_second: 60,
            selection_timeout_ticks: 300,
            declare_display_ticks: 45,
            animation_ticks: 20,
            flash_ticks: 30,
            max_repair_attempts: MAX_REPAIR_ATTEMPTS,
        }
    }
}

impl GameConfig {
    /// Start building a config from the defaults.
    #[must_use]
    pub fn builder() -> GameConfigBuilder {
        GameConfigBuilder::new()
    }

    /// Total number of grid cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Per-tick animation progress increment (`1 / animation_ticks`).
    #[must_use]
    pub fn animation_step(&self) -> f32 {
        1.0 / self.animation_ticks as f32
    }
}

/// Builder for [`GameConfig`].
///
/// Validates the grid shape at `build()` time: a board with fewer than
/// three cells can never hold a triple.
#[derive(Clone, Debug)]
pub struct GameConfigBuilder {
    config: GameConfig,
}

impl Default for GameConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
        }
    }

    #[must_use]
    pub fn grid(mut self, rows: u8, cols: u8) -> Self {
        self.config.rows = rows;
        self.config.cols = cols;
        self
    }

    #[must_use]
    pub fn starting_lives(mut self, lives: u8) -> Self {
        self.config.starting_lives = lives;
        self
    }

    #[must_use]
    pub fn ticks_per_second(mut self, tps: u32) -> Self {
        self.config.ticks_per_second = tps;
        self
    }

    #[must_use]
    pub fn selection_timeout_ticks(mut self, ticks: u32) -> Self {
        self.config.selection_timeout_ticks = ticks;
        self
    }

    #[must_use]
    pub fn declare_display_ticks(mut self, ticks: u32) -> Self {
        self.config.declare_display_ticks = ticks;
        self
    }

    #[must_use]
    pub fn animation_ticks(mut self, ticks: u32) -> Self {
        self.config.animation_ticks = ticks;
        self
    }

    #[must_use]
    pub fn flash_ticks(mut self, ticks: u32) -> Self {
        self.config.flash_ticks = ticks;
        self
    }

    #[must_use]
    pub fn max_repair_attempts(mut self, attempts: u32) -> Self {
        self.config.max_repair_attempts = attempts;
        self
    }

    /// Finish building.
    ///
    /// ## Panics
    ///
    /// Panics if the grid holds fewer than 3 cells, the starting life
    /// total is 0, or any timer duration is 0.
    #[must_use]
    pub fn build(self) -> GameConfig {
        let c = &self.config;
        assert!(
            c.cell_count() >= 3,
            "Grid must hold at least 3 cells to contain a triple"
        );
        assert!(c.starting_lives > 0, "Starting lives must be positive");
        assert!(c.ticks_per_second > 0, "Tick rate must be positive");
        assert!(c.selection_timeout_ticks > 0, "Selection timeout must be positive");
        assert!(c.animation_ticks > 0, "Animation duration must be positive");
        self.config
    }
}
