//! Card values.
//!
//! A card is just a number and a color. Two cards with the same pair are
//! interchangeable for scoring, even though a deck holds distinct copies.

use serde::{Deserialize, Serialize};

/// Color identifier: an index into the game's palette.
///
/// Palette size depends on player count (see `RulesConfig::color_count`).
/// How a color is displayed is up to the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ColorId(pub u8);

impl ColorId {
    /// Create a new color ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw palette index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over every color in a palette of `color_count` colors.
    ///
    /// Saturates at the 256 ids a `u8` can name.
    pub fn all(color_count: usize) -> impl Iterator<Item = ColorId> {
        (0..=u8::MAX).take(color_count).map(ColorId)
    }
}

impl std::fmt::Display for ColorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "c{}", self.0)
    }
}

/// An immutable numbered, colored card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Face value, bounded by `min_card..=max_card`.
    pub number: u8,

    /// Palette color.
    pub color: ColorId,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(number: u8, color: ColorId) -> Self {
        Self { number, color }
    }

    /// Check whether this card belongs to `color`.
    #[must_use]
    pub fn is_color(&self, color: ColorId) -> bool {
        self.color == color
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.number, self.color)
    }
}
