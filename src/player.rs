//! Players and their hands.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::string::String;

use crate::card::Card;

/// A named player holding a hand of cards.
///
/// The hand is a queue: cards are played from the front and won cards are
/// added to the back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Display name, unique within a game.
    name: String,
    /// Cards in the hand, front first.
    hand: VecDeque<Card>,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: VecDeque::new(),
        }
    }

    /// Creates a player holding `cards`, first card at the front.
    #[must_use]
    pub fn with_cards(name: impl Into<String>, cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            name: name.into(),
            hand: cards.into_iter().collect(),
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cards in the hand, front first.
    #[must_use]
    pub fn cards(&self) -> impl ExactSizeIterator<Item = &Card> {
        self.hand.iter()
    }

    /// Returns the card that will be played next.
    #[must_use]
    pub fn top_card(&self) -> Option<&Card> {
        self.hand.front()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hand.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }

    /// Removes and returns the front card.
    pub(crate) fn take_top(&mut self) -> Option<Card> {
        self.hand.pop_front()
    }

    /// Adds won cards to the back of the hand, preserving their order.
    pub(crate) fn collect(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand.extend(cards);
    }
}
