//! Rules configuration.
//!
//! `RulesConfig` fixes the parameters everything else derives from:
//! - Player count (which sizes the color palette)
//! - Card number range (`min_card..=max_card`)
//! - Starting hand size
//!
//! The tableau and scorer never hardcode the card range; they read it from here.

use serde::{Deserialize, Serialize};

/// Smallest supported table.
pub const MIN_PLAYERS: usize = 2;

/// Largest supported table (palette of 10 colors).
pub const MAX_PLAYERS: usize = 4;

/// Rules configuration for a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Number of players (2-4).
    pub player_count: usize,

    /// Lowest card number. Paths starting here earn a bonus.
    pub min_card: u8,

    /// Highest card number. Paths ending here earn a bonus.
    pub max_card: u8,

    /// Cards dealt to each player at setup.
    pub hand_size: usize,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            min_card: 1,
            max_card: 8,
            hand_size: 7,
        }
    }
}

impl RulesConfig {
    /// Create a configuration for `player_count` players with default card range.
    pub fn new(player_count: usize) -> Self {
        Self::default().with_player_count(player_count)
    }

    /// Set the player count.
    #[must_use]
    pub fn with_player_count(mut self, player_count: usize) -> Self {
        assert!(
            (MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count),
            "Player count must be 2-4"
        );
        self.player_count = player_count;
        self
    }

    /// Set the card number range.
    #[must_use]
    pub fn with_card_range(mut self, min_card: u8, max_card: u8) -> Self {
        assert!(min_card < max_card, "min_card must be below max_card");
        self.min_card = min_card;
        self.max_card = max_card;
        self
    }

    /// Set the starting hand size.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Palette size: 6 colors for two players, two more per extra player.
    #[must_use]
    pub fn color_count(&self) -> usize {
        6 + 2 * (self.player_count - MIN_PLAYERS)
    }

    /// Cards per color.
    #[must_use]
    pub fn cards_per_color(&self) -> usize {
        (self.max_card - self.min_card) as usize + 1
    }

    /// Total cards in a fresh deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.color_count() * self.cards_per_color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RulesConfig::default();
        assert_eq!(config.player_count, 2);
        assert_eq!(config.min_card, 1);
        assert_eq!(config.max_card, 8);
        assert_eq!(config.hand_size, 7);
    }

    #[test]
    fn test_color_count_scales_with_players() {
        assert_eq!(RulesConfig::new(2).color_count(), 6);
        assert_eq!(RulesConfig::new(3).color_count(), 8);
        assert_eq!(RulesConfig::new(4).color_count(), 10);
    }

    #[test]
    fn test_deck_size() {
        assert_eq!(RulesConfig::new(2).deck_size(), 48);
        assert_eq!(RulesConfig::new(4).deck_size(), 80);

        let short = RulesConfig::new(2).with_card_range(1, 5);
        assert_eq!(short.cards_per_color(), 5);
        assert_eq!(short.deck_size(), 30);
    }

    #[test]
    fn test_builder_pattern() {
        let config = RulesConfig::default()
            .with_player_count(3)
            .with_card_range(0, 9)
            .with_hand_size(5);

        assert_eq!(config.player_count, 3);
        assert_eq!(config.min_card, 0);
        assert_eq!(config.max_card, 9);
        assert_eq!(config.hand_size, 5);
    }

    #[test]
    #[should_panic(expected = "Player count must be 2-4")]
    fn test_too_many_players() {
        RulesConfig::new(5);
    }

    #[test]
    #[should_panic(expected = "min_card must be below max_card")]
    fn test_inverted_card_range() {
        let _ = RulesConfig::default().with_card_range(8, 1);
    }

    #[test]
    fn test_serialization() {
        let config = RulesConfig::new(3);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: RulesConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
