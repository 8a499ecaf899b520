//! Narration events emitted by the engine.
//!
//! The engine never prints. Every observable step of a deal or a turn is
//! recorded as a [`GameEvent`] for the front end to render.

use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::game::Actor;
use crate::result::MatchResult;
use crate::rules::Pair;

/// Something that happened at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Opening cards were dealt to a hand.
    Dealt {
        /// Who received the cards.
        actor: Actor,
        /// How many cards.
        count: usize,
    },
    /// A pair scan moved one or more pairs to the actor's pile.
    PairsFound {
        /// Whose hand was scanned.
        actor: Actor,
        /// The pairs, in discovery order.
        pairs: Vec<Pair>,
    },
    /// A pair scan found nothing.
    NoPairs {
        /// Whose hand was scanned.
        actor: Actor,
    },
    /// The actor asked the opponent for a rank.
    Asked {
        /// Who asked.
        actor: Actor,
        /// The rank requested.
        rank: Rank,
    },
    /// The opponent handed over a card.
    Received {
        /// Who received it.
        actor: Actor,
        /// The card.
        card: Card,
    },
    /// The opponent had no card of the rank.
    GoFish {
        /// Who has to fish.
        actor: Actor,
    },
    /// The actor fished from the deck.
    Fished {
        /// Who fished.
        actor: Actor,
        /// The card drawn, or `None` when the deck was already empty.
        card: Option<Card>,
    },
    /// An empty hand was refilled from the deck.
    Replenished {
        /// Whose hand.
        actor: Actor,
        /// Cards drawn.
        count: usize,
    },
    /// The turn moved to the other side.
    TurnPassed {
        /// Who is on turn now.
        to: Actor,
    },
    /// The actor had no cards and nothing to draw, so the turn was skipped.
    Skipped {
        /// Who was skipped.
        actor: Actor,
    },
    /// Deck and both hands are exhausted.
    GameOver(MatchResult),
}

/// Everything that happened during one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    /// Who took the turn.
    pub actor: Actor,
    /// The rank asked for.
    pub rank: Rank,
    /// Whether the opponent handed over a card.
    pub received: bool,
    /// Events in the order they happened.
    pub events: Vec<GameEvent>,
}

impl TurnReport {
    /// Returns the pairs the turn produced for either side.
    pub fn pairs(&self) -> impl Iterator<Item = &Pair> {
        self.events.iter().flat_map(|event| match event {
            GameEvent::PairsFound { pairs, .. } => pairs.as_slice(),
            _ => &[],
        })
    }

    /// Returns the final result if this turn ended the game.
    #[must_use]
    pub fn game_over(&self) -> Option<MatchResult> {
        self.events.iter().find_map(|event| match event {
            GameEvent::GameOver(result) => Some(*result),
            _ => None,
        })
    }
}
