//! The draw deck.
//!
//! One card per (color, number) pair. The top of the deck is the end of the
//! backing `Vec`, so drawing is a cheap `split_off`.

use tracing::debug;

use super::card::{Card, ColorId};
use crate::core::config::RulesConfig;
use crate::core::rng::GameRng;
use crate::error::DeckError;

/// An ordered stack of cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    /// Bottom first, top last.
    cards: Vec<Card>,
}

impl Deck {
    /// Build an unshuffled deck for `config`.
    ///
    /// ```
    /// use arboretum::cards::Deck;
    /// use arboretum::core::RulesConfig;
    ///
    /// let deck = Deck::new(&RulesConfig::new(2));
    /// assert_eq!(deck.len(), 48);
    /// ```
    #[must_use]
    pub fn new(config: &RulesConfig) -> Self {
        let cards = ColorId::all(config.color_count())
            .flat_map(|color| {
                (config.min_card..=config.max_card).map(move |number| Card::new(number, color))
            })
            .collect();
        Self { cards }
    }

    /// Build a deck from explicit cards, listed bottom to top.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffle in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Draw up to `count` cards from the top, topmost first.
    ///
    /// Fails only when the deck is already empty; a short deck yields
    /// whatever remains.
    pub fn draw(&mut self, count: usize) -> Result<Vec<Card>, DeckError> {
        if self.cards.is_empty() {
            return Err(DeckError::Empty);
        }

        let split = self.cards.len().saturating_sub(count);
        let mut drawn = self.cards.split_off(split);
        drawn.reverse();

        debug!(drawn = drawn.len(), remaining = self.cards.len(), "drew cards");
        Ok(drawn)
    }

    /// Draw a single card.
    pub fn pop(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Return cards to the top; the first card given ends up on top.
    pub fn add(&mut self, cards: impl IntoIterator<Item = Card>) {
        let mut cards: Vec<Card> = cards.into_iter().collect();
        cards.reverse();
        self.cards.extend(cards);
    }
}
