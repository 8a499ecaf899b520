//! Error types for deck and game operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when building a deck from prepared cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The sequence does not hold exactly 52 cards.
    #[error("deck must hold 52 cards, found {found}")]
    WrongSize {
        /// Number of cards supplied.
        found: usize,
    },
    /// A card appears more than once.
    #[error("duplicate card in deck: {0}")]
    DuplicateCard(Card),
}

/// Errors that can occur when drawing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
    /// More cards requested than the deck holds.
    #[error("requested {requested} cards but only {available} remain")]
    NotEnoughCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards in the deck.
        available: usize,
    },
}

/// Errors that can occur when choosing a card from a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Input is not a number.
    #[error("selection is not a number")]
    NotANumber,
    /// Selection is outside the hand.
    #[error("selection {choice} is outside a hand of {hand_size} cards")]
    OutOfRange {
        /// The rejected choice, as entered.
        choice: usize,
        /// Number of cards in the hand.
        hand_size: usize,
    },
    /// No more input is available.
    #[error("no selection available")]
    Exhausted,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Not enough cards in the deck for both hands.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur while taking a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// No actor is on turn (before dealing or after the game ended).
    #[error("invalid game state for taking a turn")]
    InvalidState,
    /// The chosen card is not in the active hand.
    #[error(transparent)]
    InvalidSelection(#[from] SelectionError),
    /// A guarded draw failed.
    #[error(transparent)]
    Draw(#[from] DrawError),
}

/// Errors that can occur when reading the final result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// The game has not ended yet.
    #[error("the game is still in progress")]
    InvalidState,
}
