//! Game state types.

use core::fmt;

/// One of the two sides of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Actor {
    /// The human player.
    Player,
    /// The computer opponent.
    Cpu,
}

impl Actor {
    /// Returns the opposing side.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Player => Self::Cpu,
            Self::Cpu => Self::Player,
        }
    }

    /// Returns the state in which this actor is on turn.
    #[must_use]
    pub const fn turn(self) -> GameState {
        match self {
            Self::Player => GameState::PlayerTurn,
            Self::Cpu => GameState::CpuTurn,
        }
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Player => "player",
            Self::Cpu => "cpu",
        })
    }
}

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// The deck is ready and no cards have been dealt.
    Dealing,
    /// The human player asks next.
    PlayerTurn,
    /// The computer asks next.
    CpuTurn,
    /// Deck and both hands are empty.
    GameOver,
}

impl GameState {
    /// Returns the actor on turn, if any.
    #[must_use]
    pub const fn actor(self) -> Option<Actor> {
        match self {
            Self::PlayerTurn => Some(Actor::Player),
            Self::CpuTurn => Some(Actor::Cpu),
            Self::Dealing | Self::GameOver => None,
        }
    }
}
