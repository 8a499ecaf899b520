//! The draw pile and its riffle shuffle.

use alloc::vec::Vec;
use core::fmt;

use rand::Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::{DeckError, DrawError};

/// Number of riffle rounds performed by [`Deck::shuffle`].
pub const SHUFFLE_ROUNDS: u8 = 4;

/// Largest distance the riffle split may move away from the midpoint.
pub const SPLIT_JITTER: usize = 4;

/// Decks this small are always split exactly in half.
const JITTER_THRESHOLD: usize = 10;

/// The undealt cards.
///
/// The last card of the sequence is the top of the deck; draws take from
/// there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates the 52-card deck in suit-major, rank-minor order.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    /// Creates a deck from a prepared sequence, bottom card first.
    ///
    /// # Errors
    ///
    /// Returns an error unless the sequence holds each of the 52 cards
    /// exactly once.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        if cards.len() != DECK_SIZE {
            return Err(DeckError::WrongSize { found: cards.len() });
        }

        let mut seen = [[false; 4]; 13];
        for card in &cards {
            let slot = &mut seen[card.rank.index()][card.suit as usize];
            if *slot {
                return Err(DeckError::DuplicateCard(*card));
            }
            *slot = true;
        }

        Ok(Self { cards })
    }

    /// Shuffles the deck with [`SHUFFLE_ROUNDS`] riffles.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.riffle(rng, SHUFFLE_ROUNDS, SPLIT_JITTER);
    }

    /// Performs `rounds` split-and-interleave shuffles.
    ///
    /// Each round cuts the deck near its midpoint (moved by up to `jitter`
    /// cards when the deck holds more than ten), then merges the two packets
    /// by repeatedly taking the front card of one of them on a coin flip.
    /// Whatever remains of the longer packet goes on the end in order. The
    /// result is always a permutation of the input but is not uniform.
    pub fn riffle<R: Rng + ?Sized>(&mut self, rng: &mut R, rounds: u8, jitter: usize) {
        for _ in 0..rounds {
            self.riffle_once(rng, jitter);
        }
    }

    fn split_point<R: Rng + ?Sized>(&self, rng: &mut R, jitter: usize) -> usize {
        let len = self.cards.len();
        let mid = len / 2;
        if len <= JITTER_THRESHOLD || jitter == 0 {
            return mid;
        }

        let jitter = jitter.min(len);
        let offset = rng.random_range(0..=2 * jitter);
        (mid + offset).saturating_sub(jitter).min(len)
    }

    fn riffle_once<R: Rng + ?Sized>(&mut self, rng: &mut R, jitter: usize) {
        let split = self.split_point(rng, jitter);
        let (left, right) = self.cards.split_at(split);

        let mut merged = Vec::with_capacity(self.cards.len());
        let (mut l, mut r) = (0, 0);
        while l < left.len() && r < right.len() {
            if rng.random_bool(0.5) {
                merged.push(left[l]);
                l += 1;
            } else {
                merged.push(right[r]);
                r += 1;
            }
        }
        merged.extend_from_slice(&left[l..]);
        merged.extend_from_slice(&right[r..]);

        self.cards = merged;
    }

    /// Draws the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if no cards remain.
    pub fn draw_one(&mut self) -> Result<Card, DrawError> {
        self.cards.pop().ok_or(DrawError::EmptyDeck)
    }

    /// Draws the top `n` cards, topmost first.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::NotEnoughCards`] if `n` exceeds the number of
    /// cards left. Callers clamp with `n.min(deck.len())`.
    pub fn draw_many(&mut self, n: usize) -> Result<Vec<Card>, DrawError> {
        let available = self.cards.len();
        if n > available {
            return Err(DrawError::NotEnoughCards {
                requested: n,
                available,
            });
        }

        let mut drawn = self.cards.split_off(available - n);
        drawn.reverse();
        Ok(drawn)
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.cards.len();
        let noun = if count == 1 { "card" } else { "cards" };
        write!(f, "{count} {noun} in the deck.")
    }
}
