//! Tableau: the sparse grid each player builds.
//!
//! ## Key Types
//!
//! - `Coord`: a cell on the unbounded grid
//! - `Tableau`: coordinate-to-card map with placement rules
//! - `Bounds`: bounding box of occupied cells
//!
//! ## Placement Rules
//!
//! The first card goes at the origin. Every later card must go in an empty
//! cell orthogonally adjacent to a placed card. `available_positions` is the
//! way to discover those cells; `place_checked` enforces them.

pub mod coord;
pub mod grid;
pub mod render;

pub use coord::{Coord, Neighbors};
pub use grid::{Bounds, Tableau};
pub use render::render;
