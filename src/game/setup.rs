use alloc::string::String;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::SetupError;
use crate::options::GameOptions;
use crate::player::Player;

use super::{Game, GameState};

impl Game {
    /// Creates a game: builds the deck, shuffles it with a generator seeded
    /// from `seed`, and deals it to the named players in order.
    ///
    /// The same seed and names always produce the same game.
    ///
    /// # Example
    ///
    /// ```
    /// use drunkard::{Game, GameOptions, DECK_SIZE};
    ///
    /// let game = Game::new(["Alice", "Bob"], GameOptions::default(), 42).unwrap();
    /// assert_eq!(game.cards_in_hands(), DECK_SIZE);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the player list is empty, a name is empty or
    /// repeated, or the deck cannot be dealt under the remainder policy.
    pub fn new<I, S>(names: I, options: GameOptions, seed: u64) -> Result<Self, SetupError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);
        log::info!("shuffled deck with seed {seed}");

        Self::from_deck(names, deck, options)
    }

    /// Creates a game from a deck whose order is already decided.
    ///
    /// # Errors
    ///
    /// Same as [`Game::new`].
    pub fn from_deck<I, S>(names: I, deck: Deck, options: GameOptions) -> Result<Self, SetupError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        validate_names(&names)?;

        let hands = deck.deal(names.len(), options.remainder)?;
        let players: Vec<Player> = names
            .into_iter()
            .zip(hands)
            .map(|(name, hand)| Player::with_cards(name, hand))
            .collect();
        let cards_dealt = players.iter().map(Player::len).sum();

        log::info!("dealt {cards_dealt} cards to {} players", players.len());

        let mut game = Self {
            players,
            options,
            state: GameState::Playing,
            rounds: 0,
            cards_dealt,
        };
        game.update_state();

        Ok(game)
    }
}

fn validate_names(names: &[String]) -> Result<(), SetupError> {
    if names.is_empty() {
        return Err(SetupError::NoPlayers);
    }
    if names.iter().any(String::is_empty) {
        return Err(SetupError::EmptyPlayerName);
    }
    let repeated = names
        .iter()
        .enumerate()
        .any(|(index, name)| names[..index].contains(name));
    if repeated {
        return Err(SetupError::DuplicatePlayerName);
    }
    Ok(())
}
