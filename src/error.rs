use crate::cards::Card;
use crate::tableau::Coord;

/// Errors raised when placing cards on a tableau.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableauError {
    #[error("cannot place at {position}: already occupied by {occupant}")]
    OccupiedPosition { position: Coord, occupant: Card },

    #[error("cannot place at {position}: not adjacent to any placed card")]
    IllegalPlacement { position: Coord },
}

/// Errors raised by the deck.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeckError {
    #[error("deck is empty")]
    Empty,
}

/// Errors raised by player bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("no card at hand index {index} (hand holds {hand_size})")]
    NoSuchCard { index: usize, hand_size: usize },

    #[error("tableau error: {0}")]
    Tableau(#[from] TableauError),

    #[error("deck error: {0}")]
    Deck(#[from] DeckError),
}
