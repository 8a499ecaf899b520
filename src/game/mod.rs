//! Match engine and state management.

use alloc::vec::Vec;

use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::event::GameEvent;
use crate::hand::{Hand, PairPile};
use crate::options::GameOptions;
use crate::rules::find_pairs;

mod deal;
mod scoring;
pub mod state;
mod turn;

pub use state::{Actor, GameState};

/// One side of the table: the cards held and the pairs made.
#[derive(Debug, Clone, Default)]
struct Seat {
    hand: Hand,
    pairs: PairPile,
}

/// A Go Fish match between a human player and the computer.
///
/// The game owns the deck, both hands, both pair piles and the random
/// source. Every card is in exactly one of those places at any time. Use
/// [`GameOptions`] to configure deal and shuffle sizes.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Undealt cards.
    deck: Deck,
    /// The human player.
    player: Seat,
    /// The computer opponent.
    cpu: Seat,
    /// Random number generator for the shuffle and the computer's choices.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with a freshly shuffled deck.
    ///
    /// The same seed always produces the same deck and, with the same
    /// choices, the same match.
    ///
    /// # Example
    ///
    /// ```
    /// use gofish::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::Dealing);
    /// assert_eq!(game.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::standard();
        deck.riffle(&mut rng, options.shuffle_rounds, options.split_jitter);
        debug!("new game (seed {seed}), deck shuffled");

        Self::assemble(options, deck, rng)
    }

    /// Creates a new game that deals from `deck` exactly as given.
    ///
    /// The seed still drives the computer's choices.
    #[must_use]
    pub fn with_deck(options: GameOptions, seed: u64, deck: Deck) -> Self {
        debug!("new game (seed {seed}) with a prepared deck");
        Self::assemble(options, deck, ChaCha8Rng::seed_from_u64(seed))
    }

    fn assemble(options: GameOptions, deck: Deck, rng: ChaCha8Rng) -> Self {
        Self {
            options,
            state: GameState::Dealing,
            deck,
            player: Seat::default(),
            cpu: Seat::default(),
            rng,
        }
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the actor on turn, if the game is in progress.
    #[must_use]
    pub const fn active(&self) -> Option<Actor> {
        self.state.actor()
    }

    /// Returns the undealt cards.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns an actor's hand.
    #[must_use]
    pub const fn hand(&self, actor: Actor) -> &Hand {
        &self.seat(actor).hand
    }

    /// Returns an actor's pair pile.
    #[must_use]
    pub const fn pairs(&self, actor: Actor) -> &PairPile {
        &self.seat(actor).pairs
    }

    const fn seat(&self, actor: Actor) -> &Seat {
        match actor {
            Actor::Player => &self.player,
            Actor::Cpu => &self.cpu,
        }
    }

    fn seat_mut(&mut self, actor: Actor) -> &mut Seat {
        match actor {
            Actor::Player => &mut self.player,
            Actor::Cpu => &mut self.cpu,
        }
    }

    /// Returns the actor's seat and the opponent's seat.
    fn seats_mut(&mut self, actor: Actor) -> (&mut Seat, &mut Seat) {
        match actor {
            Actor::Player => (&mut self.player, &mut self.cpu),
            Actor::Cpu => (&mut self.cpu, &mut self.player),
        }
    }

    /// Runs the pair finder on an actor's hand and records what it found.
    fn scan_pairs(&mut self, actor: Actor, events: &mut Vec<GameEvent>) {
        let seat = self.seat_mut(actor);
        let pairs = find_pairs(&mut seat.hand, &mut seat.pairs);
        if pairs.is_empty() {
            events.push(GameEvent::NoPairs { actor });
        } else {
            debug!("{actor} paired {} rank(s)", pairs.len());
            events.push(GameEvent::PairsFound { actor, pairs });
        }
    }
}
