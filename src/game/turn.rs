use alloc::vec;
use alloc::vec::Vec;

use log::{debug, trace};

use crate::error::{DrawError, SelectionError, TurnError};
use crate::event::{GameEvent, TurnReport};
use crate::result::MatchResult;
use crate::rules::ask_for_card;
use crate::select::Selector;

use super::{Actor, Game, GameState};

impl Game {
    /// Plays one turn for the actor on turn.
    ///
    /// `index` is a zero-based position in the actor's hand; the rank of that
    /// card is requested from the opponent. A successful ask pairs the card
    /// and keeps the turn. Otherwise the actor fishes one card if the deck
    /// has any, checks for pairs and the turn passes, even when the fished
    /// card matches the rank asked for.
    ///
    /// After either outcome, empty hands are refilled from the deck, an
    /// actor left with nothing to play is skipped, and the game ends once
    /// the deck and both hands are empty.
    ///
    /// # Errors
    ///
    /// Returns an error if no one is on turn or `index` is outside the hand.
    pub fn ask(&mut self, index: usize) -> Result<TurnReport, TurnError> {
        let actor = self.state.actor().ok_or(TurnError::InvalidState)?;

        let hand = &self.seat(actor).hand;
        let rank = hand
            .get(index)
            .map(|card| card.rank)
            .ok_or(SelectionError::OutOfRange {
                choice: index.saturating_add(1),
                hand_size: hand.len(),
            })?;

        trace!("{actor} asks for {rank}");
        let mut events = vec![GameEvent::Asked { actor, rank }];

        let (asker, responder) = self.seats_mut(actor);
        let received = if let Some(card) = ask_for_card(&mut asker.hand, &mut responder.hand, rank)
        {
            events.push(GameEvent::Received { actor, card });
            self.scan_pairs(actor, &mut events);
            true
        } else {
            events.push(GameEvent::GoFish { actor });
            let card = if self.deck.is_empty() {
                None
            } else {
                Some(self.deck.draw_one()?)
            };
            if let Some(card) = card {
                trace!("{actor} fished {card}");
                self.seat_mut(actor).hand.add_card(card);
            }
            events.push(GameEvent::Fished { actor, card });
            self.scan_pairs(actor, &mut events);
            self.pass_turn(actor, &mut events);
            false
        };

        self.settle(&mut events)?;

        Ok(TurnReport {
            actor,
            rank,
            received,
            events,
        })
    }

    /// Lets the active actor's selector choose a card, then plays the turn.
    ///
    /// `player` chooses on the player's turns and `cpu` on the computer's.
    /// Both receive the game's random source.
    ///
    /// # Errors
    ///
    /// Returns an error if no one is on turn or the selector fails.
    pub fn play_turn(
        &mut self,
        player: &mut dyn Selector,
        cpu: &mut dyn Selector,
    ) -> Result<TurnReport, TurnError> {
        let actor = self.state.actor().ok_or(TurnError::InvalidState)?;
        let index = match actor {
            Actor::Player => player.select(self.player.hand.cards(), &mut self.rng)?,
            Actor::Cpu => cpu.select(self.cpu.hand.cards(), &mut self.rng)?,
        };
        self.ask(index)
    }

    /// Plays turns until the game is over and returns the final result.
    ///
    /// `observer` sees every turn report as it happens.
    ///
    /// # Errors
    ///
    /// Returns an error if the cards have not been dealt or a turn fails.
    pub fn play_out<F: FnMut(&TurnReport)>(
        &mut self,
        player: &mut dyn Selector,
        cpu: &mut dyn Selector,
        mut observer: F,
    ) -> Result<MatchResult, TurnError> {
        while self.state.actor().is_some() {
            let report = self.play_turn(player, cpu)?;
            observer(&report);
        }
        self.result().map_err(|_| TurnError::InvalidState)
    }

    fn pass_turn(&mut self, from: Actor, events: &mut Vec<GameEvent>) {
        let to = from.other();
        self.state = to.turn();
        debug!("turn passes from {from} to {to}");
        events.push(GameEvent::TurnPassed { to });
    }

    /// Refills empty hands, skips a stranded actor and detects the end.
    pub(super) fn settle(&mut self, events: &mut Vec<GameEvent>) -> Result<(), DrawError> {
        if self.cpu.hand.is_empty() && !self.deck.is_empty() {
            let count = self.replenish(Actor::Cpu)?;
            events.push(GameEvent::Replenished {
                actor: Actor::Cpu,
                count,
            });
            self.scan_pairs(Actor::Cpu, events);
        }

        // The player's refill is not checked for pairs until their next scan.
        if self.player.hand.is_empty() && !self.deck.is_empty() {
            let count = self.replenish(Actor::Player)?;
            events.push(GameEvent::Replenished {
                actor: Actor::Player,
                count,
            });
        }

        if self.deck.is_empty() && self.player.hand.is_empty() && self.cpu.hand.is_empty() {
            let result = self.standings();
            self.state = GameState::GameOver;
            debug!(
                "game over: player {} pairs, cpu {} pairs",
                result.player_score, result.cpu_score
            );
            events.push(GameEvent::GameOver(result));
            return Ok(());
        }

        if let Some(actor) = self.state.actor() {
            if self.deck.is_empty() && self.seat(actor).hand.is_empty() {
                events.push(GameEvent::Skipped { actor });
                self.pass_turn(actor, events);
            }
        }

        Ok(())
    }

    fn replenish(&mut self, actor: Actor) -> Result<usize, DrawError> {
        let count = self.options.replenish.max(1).min(self.deck.len());
        let cards = self.deck.draw_many(count)?;
        debug!("{actor} ran out of cards and drew {count}");
        self.seat_mut(actor).hand.add_cards(cards);
        Ok(count)
    }
}
