use crate::error::ScoreError;
use crate::result::MatchResult;

use super::{Actor, Game, GameState};

impl Game {
    /// Returns the number of pairs an actor has made.
    #[must_use]
    pub fn score(&self, actor: Actor) -> usize {
        self.seat(actor).pairs.pairs()
    }

    /// Returns the scores as they stand, whether or not the game is over.
    #[must_use]
    pub fn standings(&self) -> MatchResult {
        MatchResult::new(self.score(Actor::Player), self.score(Actor::Cpu))
    }

    /// Returns the final result.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not over.
    pub fn result(&self) -> Result<MatchResult, ScoreError> {
        if self.state != GameState::GameOver {
            return Err(ScoreError::InvalidState);
        }
        Ok(self.standings())
    }
}
