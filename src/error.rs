//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while setting up a game.
///
/// These are configuration errors: the game cannot start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// No players were given.
    #[error("at least one player is required")]
    NoPlayers,
    /// Two players share a name.
    #[error("player names must be unique")]
    DuplicatePlayerName,
    /// A player name is empty.
    #[error("player names must not be empty")]
    EmptyPlayerName,
    /// More players than cards; someone would be dealt nothing.
    #[error("{players} players cannot share a deck of {cards} cards")]
    TooManyPlayers {
        /// Number of players.
        players: usize,
        /// Number of cards in the deck.
        cards: usize,
    },
    /// The deck does not divide evenly and the remainder policy rejects it.
    #[error("{cards} cards cannot be dealt evenly to {players} players")]
    UnevenDeal {
        /// Number of cards in the deck.
        cards: usize,
        /// Number of players.
        players: usize,
    },
}

/// Errors that can occur while playing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The game has already been resolved.
    #[error("the game is over")]
    GameOver,
    /// No card was played, so nobody can win the round.
    #[error("no resolvable winner for the round")]
    NoResolvableWinner,
}
