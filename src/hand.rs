//! Player hands and pair piles.

use alloc::vec::Vec;

use crate::card::{Card, Rank};

/// A player's hand.
///
/// Cards keep their insertion order, which is also the order shown to the
/// player when choosing a card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards in order.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Adds a card to the end of the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Adds several cards to the end of the hand, in order.
    pub fn add_cards<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the card at a zero-based position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Removes and returns the first card of the given rank.
    ///
    /// Leaves the hand untouched when no card matches.
    pub fn take_rank(&mut self, rank: Rank) -> Option<Card> {
        let index = self.cards.iter().position(|card| card.rank == rank)?;
        Some(self.cards.remove(index))
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub(crate) fn cards_mut(&mut self) -> &mut Vec<Card> {
        &mut self.cards
    }
}

/// The cards a player has paired off.
///
/// Cards only ever arrive two at a time and never leave, so the pile always
/// holds an even number of cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairPile {
    cards: Vec<Card>,
}

impl PairPile {
    /// Creates a new empty pile.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a pair to the pile.
    pub fn push_pair(&mut self, first: Card, second: Card) {
        self.cards.push(first);
        self.cards.push(second);
    }

    /// Returns the paired cards in the order they were found.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of pairs, which is also the player's score.
    #[must_use]
    pub fn pairs(&self) -> usize {
        self.cards.len() / 2
    }

    /// Returns the number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
