use alloc::vec::Vec;

use crate::error::RoundError;
use crate::result::{Play, RoundReport};

use super::{Flow, Game, GameOutcome, GameState};

/// Picks the player who played the strongest card. On equal ranks the
/// earlier player in play order wins.
fn round_winner(plays: &[Play]) -> Option<usize> {
    plays
        .iter()
        .reduce(|best, play| if play.card.beats(&best.card) { play } else { best })
        .map(|play| play.player)
}

impl Game {
    /// Plays one round.
    ///
    /// Every player puts their front card into play, in player order. The
    /// player who played the highest rank collects all played cards at the
    /// back of their hand, in play order. The game is resolved as soon as a
    /// player's hand is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is already resolved, or if no card could
    /// be played.
    pub fn play_round(&mut self) -> Result<RoundReport, RoundError> {
        if self.state == GameState::Resolved {
            return Err(RoundError::GameOver);
        }

        let plays: Vec<Play> = self
            .players
            .iter_mut()
            .enumerate()
            .filter_map(|(player, hand)| hand.take_top().map(|card| Play { player, card }))
            .collect();

        let winner = round_winner(&plays).ok_or(RoundError::NoResolvableWinner)?;
        self.players[winner].collect(plays.iter().map(|play| play.card));

        self.rounds += 1;
        self.update_state();

        log::debug!(
            "round {}: {} collects {} cards",
            self.rounds,
            self.players[winner].name(),
            plays.len()
        );

        Ok(RoundReport {
            round: self.rounds,
            plays,
            winner,
        })
    }

    /// Plays rounds until the game is resolved.
    ///
    /// `on_round` is called after every round with the updated game and the
    /// round report; returning [`Flow::Stop`] ends the run early. The run also
    /// ends once [`GameOptions::max_rounds`](crate::GameOptions::max_rounds)
    /// rounds have been played.
    ///
    /// # Example
    ///
    /// ```
    /// use drunkard::{Flow, Game, GameOptions, GameOutcome};
    ///
    /// let options = GameOptions::default().with_max_rounds(Some(10_000));
    /// let mut game = Game::new(["Alice", "Bob"], options, 7).unwrap();
    /// let outcome = game.run(|_, _| Flow::Continue).unwrap();
    /// assert!(matches!(
    ///     outcome,
    ///     GameOutcome::Winner { .. } | GameOutcome::RoundLimit { .. }
    /// ));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the game is already resolved or a round cannot be
    /// resolved.
    pub fn run<F>(&mut self, mut on_round: F) -> Result<GameOutcome, RoundError>
    where
        F: FnMut(&Self, &RoundReport) -> Flow,
    {
        if self.state == GameState::Resolved {
            return Err(RoundError::GameOver);
        }

        while self.state == GameState::Playing {
            if self.options.max_rounds.is_some_and(|limit| self.rounds >= limit) {
                log::warn!("round limit reached after {} rounds", self.rounds);
                return Ok(GameOutcome::RoundLimit {
                    rounds: self.rounds,
                });
            }

            let report = self.play_round()?;

            if on_round(&*self, &report) == Flow::Stop && self.state == GameState::Playing {
                log::info!("stopped after {} rounds", self.rounds);
                return Ok(GameOutcome::Stopped {
                    rounds: self.rounds,
                });
            }
        }

        let outcome = self.resolution();
        match outcome {
            GameOutcome::Winner { player } => log::info!(
                "{} wins after {} rounds",
                self.players[player].name(),
                self.rounds
            ),
            _ => log::info!("no winner after {} rounds", self.rounds),
        }

        Ok(outcome)
    }
}
