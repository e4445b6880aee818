//! Game setup: deck, deal, starting discards.

use tracing::debug;

use super::player::Player;
use crate::cards::Deck;
use crate::core::{GameRng, GameRngState, PlayerId, PlayerMap, RulesConfig};
use crate::error::SessionError;

/// A freshly dealt table.
///
/// Every player receives `hand_size` cards; every player except the first
/// also starts with one face-up discard. Turn order is left to the caller.
/// The "deck" RNG stream stays with the setup for later reshuffles.
#[derive(Clone, Debug)]
pub struct GameSetup {
    config: RulesConfig,
    rng: GameRng,
    deck: Deck,
    players: PlayerMap<Player>,
}

impl GameSetup {
    /// Shuffle a deck with `seed` and deal.
    ///
    /// Fails if the deck runs out, which only happens with an oversized
    /// `hand_size`.
    pub fn new(config: RulesConfig, seed: u64) -> Result<Self, SessionError> {
        let mut rng = GameRng::new(seed).for_context("deck");
        let mut deck = Deck::new(&config);
        deck.shuffle(&mut rng);

        let mut players = PlayerMap::new(config.player_count, |_| Player::new(&config));

        for seat in PlayerId::all(config.player_count) {
            let hand = deck.draw(config.hand_size)?;
            players[seat].add_to_hand(hand);
        }
        for seat in PlayerId::all(config.player_count).skip(1) {
            let card = deck.pop()?;
            players[seat].push_discard(card);
        }

        debug!(
            players = config.player_count,
            seed,
            remaining = deck.len(),
            "dealt game"
        );

        Ok(Self {
            config,
            rng,
            deck,
            players,
        })
    }

    /// The rules in force.
    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Remaining draw deck.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Remaining draw deck, for drawing.
    pub fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    /// Reshuffle the remaining draw deck with the deck stream.
    pub fn shuffle_deck(&mut self) {
        self.deck.shuffle(&mut self.rng);
        debug!(remaining = self.deck.len(), "reshuffled deck");
    }

    /// Checkpoint of the deck stream; `GameRng::from_state` resumes it.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// All players in seat order.
    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    /// One player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// One player, for playing and discarding.
    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }
}

impl std::fmt::Display for GameSetup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (id, player) in self.players.iter() {
            writeln!(f, "{}", id)?;
            writeln!(f, "{}", player)?;
            writeln!(f, "{}", "-".repeat(30))?;
        }
        Ok(())
    }
}
