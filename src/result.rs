//! Final match result types.

use core::fmt;

/// Outcome of a finished match, from the human player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The player made more pairs.
    PlayerWins,
    /// The computer made more pairs.
    CpuWins,
    /// Both made the same number of pairs.
    Tie,
}

impl Outcome {
    /// Decides the outcome from both scores.
    #[must_use]
    pub const fn from_scores(player: usize, cpu: usize) -> Self {
        if player > cpu {
            Self::PlayerWins
        } else if cpu > player {
            Self::CpuWins
        } else {
            Self::Tie
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PlayerWins => "You win!",
            Self::CpuWins => "You lose!",
            Self::Tie => "You tied!",
        })
    }
}

/// Scores and outcome of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    /// Pairs made by the player.
    pub player_score: usize,
    /// Pairs made by the computer.
    pub cpu_score: usize,
    /// Who won.
    pub outcome: Outcome,
}

impl MatchResult {
    /// Builds the result for the given scores.
    #[must_use]
    pub const fn new(player_score: usize, cpu_score: usize) -> Self {
        Self {
            player_score,
            cpu_score,
            outcome: Outcome::from_scores(player_score, cpu_score),
        }
    }
}
