//! Player bookkeeping around the tableau.
//!
//! Deals a game and tracks each player's hand, discard pile and tableau.
//! Turn order and draw/discard legality are left to the caller.

mod game;
mod player;

pub use game::GameSetup;
pub use player::Player;
