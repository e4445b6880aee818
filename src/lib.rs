//! # arboretum
//!
//! Tableau data structure and path-search scoring for Arboretum-style
//! card games.
//!
//! ## Design Principles
//!
//! 1. **Exhaustive Scoring**: The scorer enumerates every monotonic path, so
//!    the result is the true maximum, never a greedy estimate.
//!
//! 2. **Configuration Over Constants**: Card range and palette size come from
//!    `RulesConfig`; nothing hardcodes 1..=8 or six colors.
//!
//! 3. **Deterministic**: Seeded shuffles, ordered storage and fixed visit
//!    order make every deal and every score reproducible.
//!
//! ## Architecture
//!
//! - **Persistent Tableau**: Cards live in an `im::OrdMap`, so snapshots for
//!   scoring are O(1) and iteration is in coordinate order.
//!
//! - **Pluggable Valuation**: The bonus formula sits behind `PathValuation`;
//!   the search only enumerates paths.
//!
//! ## Modules
//!
//! - `core`: Rules configuration, seats, RNG
//! - `cards`: Cards, colors, deck
//! - `tableau`: Coordinates, grid, rendering
//! - `scoring`: Path search and valuation
//! - `session`: Hands, discard piles, initial deal
//! - `error`: Error types

pub mod cards;
pub mod core;
pub mod error;
pub mod scoring;
pub mod session;
pub mod tableau;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState, PlayerId, PlayerMap, RulesConfig};

pub use crate::cards::{Card, ColorId, Deck};

pub use crate::tableau::{Bounds, Coord, Tableau};

pub use crate::scoring::{
    score, ArboretumValuation, PathScore, PathScorer, PathValuation, ScoringContext, SearchStats,
};

pub use crate::session::{GameSetup, Player};

pub use crate::error::{DeckError, SessionError, TableauError};
