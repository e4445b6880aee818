//! Path scoring for tableaus.
//!
//! ## Overview
//!
//! A tableau scores for a color by its best path: a chain of orthogonally
//! adjacent cards with strictly increasing numbers that starts and ends on
//! the same color. The search is exhaustive, so the returned path is always
//! the true maximum.
//!
//! ## Usage
//!
//! ```rust
//! use arboretum::cards::ColorId;
//! use arboretum::scoring::PathScorer;
//! use arboretum::tableau::Tableau;
//!
//! fn report(tableau: &Tableau, color_count: usize) {
//!     let mut scorer = PathScorer::new();
//!     let scores = scorer.score_all(tableau, color_count);
//!     for (color, best) in ColorId::all(color_count).zip(&scores) {
//!         println!("{}: {}", color, best);
//!     }
//!     println!("expanded {} cells", scorer.last_stats().nodes_expanded);
//! }
//! ```
//!
//! ## Custom Valuation
//!
//! The bonus formula lives behind `PathValuation`; swap it with
//! `PathScorer::with_valuation`.

pub mod path;
pub mod search;
pub mod stats;
pub mod valuation;

pub use path::PathScore;
pub use search::{score, PathScorer};
pub use stats::SearchStats;
pub use valuation::{ArboretumValuation, PathValuation, ScoringContext};
