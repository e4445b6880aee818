//! A player's cards: hand, discard pile and tableau.

use tracing::debug;

use crate::cards::{Card, ColorId};
use crate::core::config::RulesConfig;
use crate::error::SessionError;
use crate::scoring::{self, PathScore};
use crate::tableau::{Coord, Tableau};

/// One player's cards.
///
/// The discard pile is face up; only its top card is visible to others.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    hand: Vec<Card>,
    /// Bottom first, top last.
    discard: Vec<Card>,
    tableau: Tableau,
}

impl Player {
    /// Create a player with an empty hand and tableau.
    #[must_use]
    pub fn new(config: &RulesConfig) -> Self {
        Self {
            hand: Vec::new(),
            discard: Vec::new(),
            tableau: Tableau::from_config(config),
        }
    }

    /// Cards in hand, in the order received.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Cards in hand ordered by color, then number.
    #[must_use]
    pub fn hand_sorted(&self) -> Vec<Card> {
        let mut hand = self.hand.clone();
        hand.sort_by_key(|card| (card.color, card.number));
        hand
    }

    /// Add drawn cards to the hand.
    pub fn add_to_hand(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand.extend(cards);
    }

    /// The discard pile, bottom first.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard
    }

    /// The visible top of the discard pile.
    #[must_use]
    pub fn top_discard(&self) -> Option<Card> {
        self.discard.last().copied()
    }

    /// Put a card straight onto the discard pile.
    pub fn push_discard(&mut self, card: Card) {
        self.discard.push(card);
    }

    /// Take the top discard, for a player drawing from this pile.
    pub fn take_top_discard(&mut self) -> Option<Card> {
        self.discard.pop()
    }

    /// Move the card at `hand_index` to the discard pile.
    pub fn discard(&mut self, hand_index: usize) -> Result<Card, SessionError> {
        self.check_index(hand_index)?;
        let card = self.hand.remove(hand_index);
        self.discard.push(card);
        Ok(card)
    }

    /// Play the card at `hand_index` onto the tableau at `coord`.
    ///
    /// The placement must be available. On failure the hand is unchanged.
    pub fn play(&mut self, hand_index: usize, coord: Coord) -> Result<Card, SessionError> {
        self.check_index(hand_index)?;
        let card = self.hand[hand_index];
        self.tableau.place_checked(coord, card)?;
        self.hand.remove(hand_index);

        debug!(%card, %coord, hand = self.hand.len(), "played card");
        Ok(card)
    }

    /// The player's tableau.
    #[must_use]
    pub fn tableau(&self) -> &Tableau {
        &self.tableau
    }

    /// Best path for `color` in this player's tableau.
    #[must_use]
    pub fn score(&self, color: ColorId) -> PathScore {
        scoring::score(&self.tableau, color)
    }

    fn check_index(&self, index: usize) -> Result<(), SessionError> {
        if index < self.hand.len() {
            Ok(())
        } else {
            Err(SessionError::NoSuchCard {
                index,
                hand_size: self.hand.len(),
            })
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hand: Vec<String> = self.hand_sorted().iter().map(Card::to_string).collect();
        writeln!(f, "Hand: {}", hand.join(" "))?;
        match self.top_discard() {
            Some(card) => writeln!(f, "Discard: {}", card)?,
            None => writeln!(f, "Discard: X")?,
        }
        write!(f, "Tableau:\n{}", self.tableau)
    }
}
