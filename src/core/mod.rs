//! Core types: rules configuration, seats, deterministic RNG.
//!
//! Everything else reads its parameters from `RulesConfig` rather than
//! hardcoding them.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{RulesConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
