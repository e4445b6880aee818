//! Cards and the deck.
//!
//! ## Key Types
//!
//! - `ColorId`: palette index (the palette grows with player count)
//! - `Card`: immutable (number, color) value
//! - `Deck`: shuffled draw stack, one card per (color, number)

pub mod card;
pub mod deck;

pub use card::{Card, ColorId};
pub use deck::Deck;
