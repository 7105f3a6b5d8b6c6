//! Game engine and state management.

use alloc::vec::Vec;

use crate::options::GameOptions;
use crate::player::Player;

mod round;
mod setup;
pub mod state;

pub use state::{Flow, GameOutcome, GameState};

/// A game engine that owns the players and plays rounds until one of them
/// runs out of cards.
///
/// Create one with [`Game::new`] (shuffled) or [`Game::from_deck`] (fixed card
/// order), then call [`Game::play_round`] repeatedly or hand control to
/// [`Game::run`].
#[derive(Debug, Clone)]
pub struct Game {
    /// Players, in play order.
    players: Vec<Player>,
    /// Game options.
    options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Rounds played so far.
    rounds: usize,
    /// Cards dealt at setup; constant for the whole game.
    cards_dealt: usize,
}

impl Game {
    /// Returns the players in play order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player at `index`.
    #[must_use]
    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the number of rounds played.
    #[must_use]
    pub const fn rounds_played(&self) -> usize {
        self.rounds
    }

    /// Returns the number of cards dealt at setup.
    #[must_use]
    pub const fn cards_dealt(&self) -> usize {
        self.cards_dealt
    }

    /// Returns the number of cards currently held by all players.
    ///
    /// Between rounds this always equals [`Game::cards_dealt`].
    #[must_use]
    pub fn cards_in_hands(&self) -> usize {
        self.players.iter().map(Player::len).sum()
    }

    /// Returns the outcome once the game is resolved, `None` while playing.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        (self.state == GameState::Resolved).then(|| self.resolution())
    }

    /// The player holding every dealt card wins; anything else has no winner.
    fn resolution(&self) -> GameOutcome {
        self.players
            .iter()
            .position(|player| player.len() == self.cards_dealt)
            .map_or(GameOutcome::NoWinner, |player| GameOutcome::Winner { player })
    }

    /// Resolves once a hand is empty or one player holds every dealt card.
    fn update_state(&mut self) {
        let resolved = self
            .players
            .iter()
            .any(|player| player.is_empty() || player.len() == self.cards_dealt);
        if resolved {
            self.state = GameState::Resolved;
        }
    }
}
