//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Every player still holds at least one card.
    Playing,
    /// A player ran out of cards; no more rounds can be played.
    Resolved,
}

/// How a game, or a run of it, ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// One player holds every dealt card.
    Winner {
        /// Index of the winning player.
        player: usize,
    },
    /// A player ran out of cards but nobody holds the whole deck.
    NoWinner,
    /// The driver asked to stop before the game was resolved.
    Stopped {
        /// Rounds played before stopping.
        rounds: usize,
    },
    /// The configured round limit was reached first.
    RoundLimit {
        /// Rounds played.
        rounds: usize,
    },
}

/// Whether [`Game::run`](crate::Game::run) should play another round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Play the next round.
    Continue,
    /// Stop now.
    Stop,
}
