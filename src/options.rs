//! Game configuration options.

/// What to do with cards left over when the deck does not divide evenly
/// between the players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum RemainderPolicy {
    /// Leave the leftover cards out of the game and log a warning.
    #[default]
    Discard,
    /// Hand the leftover cards out one each, in player order.
    RoundRobin,
    /// Refuse to deal.
    Reject,
}

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use drunkard::{GameOptions, RemainderPolicy};
///
/// let options = GameOptions::default()
///     .with_remainder(RemainderPolicy::RoundRobin)
///     .with_max_rounds(Some(500));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameOptions {
    /// Policy for cards that cannot be dealt evenly.
    pub remainder: RemainderPolicy,
    /// Maximum number of rounds [`Game::run`](crate::Game::run) plays before
    /// giving up. `None` plays until the game is resolved.
    pub max_rounds: Option<usize>,
}

impl GameOptions {
    /// Sets the remainder policy.
    ///
    /// # Example
    ///
    /// ```
    /// use drunkard::{GameOptions, RemainderPolicy};
    ///
    /// let options = GameOptions::default().with_remainder(RemainderPolicy::Reject);
    /// assert_eq!(options.remainder, RemainderPolicy::Reject);
    /// ```
    #[must_use]
    pub const fn with_remainder(mut self, remainder: RemainderPolicy) -> Self {
        self.remainder = remainder;
        self
    }

    /// Sets the round limit.
    ///
    /// # Example
    ///
    /// ```
    /// use drunkard::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_rounds(Some(100));
    /// assert_eq!(options.max_rounds, Some(100));
    /// ```
    #[must_use]
    pub const fn with_max_rounds(mut self, max_rounds: Option<usize>) -> Self {
        self.max_rounds = max_rounds;
        self
    }
}
