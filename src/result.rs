//! Round result types.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// A card put into play by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Play {
    /// Index of the player who played the card.
    pub player: usize,
    /// The card played.
    pub card: Card,
}

/// Result of a single round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    /// Round number, starting at 1.
    pub round: usize,
    /// Cards played this round, in player order.
    pub plays: Vec<Play>,
    /// Index of the player who collected the cards.
    pub winner: usize,
}

impl RoundReport {
    /// Returns the winning play.
    #[must_use]
    pub fn winning_play(&self) -> Option<&Play> {
        self.plays.iter().find(|play| play.player == self.winner)
    }
}
