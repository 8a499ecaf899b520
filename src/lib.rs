//! A two-player Go Fish match engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs a match between a human
//! player and a computer opponent: dealing, asking, fishing, pairing,
//! refilling empty hands, passing turns and scoring. Front ends pick cards
//! through a [`Selector`] and render the [`GameEvent`]s each step returns.
//!
//! # Example
//!
//! ```
//! use gofish::{Game, GameOptions, GameState, RandomSelector};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.deal().unwrap();
//!
//! let mut player = RandomSelector;
//! let mut cpu = RandomSelector;
//! let result = game.play_out(&mut player, &mut cpu, |_| {}).unwrap();
//!
//! assert_eq!(game.state(), GameState::GameOver);
//! assert_eq!(result.player_score + result.cpu_score, 26);
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
pub mod event;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod rules;
pub mod select;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{DealError, DeckError, DrawError, ScoreError, SelectionError, TurnError};
pub use event::{GameEvent, TurnReport};
pub use game::{Actor, Game, GameState};
pub use hand::{Hand, PairPile};
pub use options::GameOptions;
pub use result::{MatchResult, Outcome};
pub use rules::{Pair, ask_for_card, find_pairs};
#[cfg(feature = "std")]
pub use select::HumanSelector;
pub use select::{RandomSelector, ScriptedSelector, Selector, parse_selection};
