use alloc::vec::Vec;

use log::debug;

use crate::error::DealError;
use crate::event::GameEvent;

use super::{Actor, Game, GameState};

impl Game {
    /// Deals the opening hands.
    ///
    /// Cards go to the player and the computer alternately, player first,
    /// until each holds [`GameOptions::hand_size`](crate::GameOptions)
    /// cards. Both hands are then checked for pairs, player first, and the
    /// player takes the first turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the cards have already been dealt or the deck is
    /// too small for both hands.
    pub fn deal(&mut self) -> Result<Vec<GameEvent>, DealError> {
        if self.state != GameState::Dealing {
            return Err(DealError::InvalidState);
        }

        let hand_size = self.options.hand_size;
        if hand_size.saturating_mul(2) > self.deck.len() {
            return Err(DealError::NotEnoughCards);
        }

        for _ in 0..hand_size {
            for actor in [Actor::Player, Actor::Cpu] {
                let card = self
                    .deck
                    .draw_one()
                    .map_err(|_| DealError::NotEnoughCards)?;
                self.seat_mut(actor).hand.add_card(card);
            }
        }

        let mut events = Vec::new();
        for actor in [Actor::Player, Actor::Cpu] {
            events.push(GameEvent::Dealt {
                actor,
                count: hand_size,
            });
        }
        self.scan_pairs(Actor::Player, &mut events);
        self.scan_pairs(Actor::Cpu, &mut events);

        self.state = GameState::PlayerTurn;
        debug!(
            "dealt {hand_size} cards each, {} left in the deck",
            self.deck.len()
        );

        // Even hand sizes can pair off a whole hand.
        self.settle(&mut events)
            .map_err(|_| DealError::NotEnoughCards)?;

        Ok(events)
    }
}
