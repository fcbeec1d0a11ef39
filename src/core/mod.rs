//! Core types: players, RNG, configuration, input events.

mod config;
mod input;
mod player;
mod rng;

pub use config::{GameConfig, GameConfigBuilder};
pub use input::{Direction, InputEvent};
pub use player::{PlayerId, PlayerPair};
pub use rng::{GameRng, GameRngState};
