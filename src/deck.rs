//! Deck building, shuffling, and dealing.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::SetupError;
use crate::options::RemainderPolicy;

/// An ordered pile of cards waiting to be dealt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds the full deck in suit-major, rank-minor order:
    /// Hearts 6 through Ace, then Diamonds, Clubs, and Spades.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a deck with the cards in exactly the given order.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns the cards in deck order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffles the deck in place.
    ///
    /// The permutation is fully determined by `rng`, so a seeded generator
    /// always produces the same order.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deals the deck into `players` hands.
    ///
    /// Each player receives a contiguous block of `len / players` cards, in
    /// deck order: the first block goes to the first player, and so on.
    /// Cards left over after the even split are handled by `remainder`.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no players, more players than cards, or
    /// the deck does not divide evenly and `remainder` is
    /// [`RemainderPolicy::Reject`].
    pub fn deal(
        self,
        players: usize,
        remainder: RemainderPolicy,
    ) -> Result<Vec<Vec<Card>>, SetupError> {
        let cards = self.cards.len();

        if players == 0 {
            return Err(SetupError::NoPlayers);
        }
        if players > cards {
            return Err(SetupError::TooManyPlayers { players, cards });
        }

        let per_player = cards / players;
        let dealt = per_player * players;

        if dealt != cards && remainder == RemainderPolicy::Reject {
            return Err(SetupError::UnevenDeal { cards, players });
        }

        let mut hands: Vec<Vec<Card>> = self.cards[..dealt]
            .chunks_exact(per_player)
            .map(<[Card]>::to_vec)
            .collect();
        let leftover = &self.cards[dealt..];

        match remainder {
            RemainderPolicy::Discard if !leftover.is_empty() => {
                log::warn!(
                    "{} of {cards} cards cannot be dealt evenly to {players} players and are left out",
                    leftover.len()
                );
            }
            RemainderPolicy::RoundRobin => {
                for (hand, &card) in hands.iter_mut().zip(leftover) {
                    hand.push(card);
                }
            }
            _ => {}
        }

        Ok(hands)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
