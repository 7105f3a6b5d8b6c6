//! A Drunkard (War) card game engine with optional `no_std` support.
//!
//! The 36-card deck (6 through Ace in four suits) is shuffled and dealt
//! evenly to the players. Every round each player turns over their top card;
//! the highest rank takes all of them. The game ends when a player runs out of
//! cards, and whoever holds the whole deck wins.
//!
//! # Example
//!
//! ```
//! use drunkard::{Flow, Game, GameOptions};
//!
//! let options = GameOptions::default().with_max_rounds(Some(1_000));
//! let mut game = Game::new(["Alice", "Bob"], options, 42).unwrap();
//! let outcome = game.run(|_, _| Flow::Continue).unwrap();
//! let _ = outcome;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{RoundError, SetupError};
pub use game::{Flow, Game, GameOutcome, GameState};
pub use options::{GameOptions, RemainderPolicy};
pub use player::Player;
pub use result::{Play, RoundReport};
