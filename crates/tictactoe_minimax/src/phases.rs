//! Turn-taking state machine.

use super::{Board, Side};
use serde::{Deserialize, Serialize};

/// Phase of a game.
///
/// `PlayerTurn` and `ComputerTurn` accept moves; the other three are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// Waiting for the player's move.
    PlayerTurn,
    /// Waiting for the computer's move.
    ComputerTurn,
    /// The player completed a line.
    PlayerWon,
    /// The computer completed a line.
    ComputerWon,
    /// The board filled up with no line.
    Draw,
}

impl GameState {
    /// Initial state when `first` opens the game.
    pub fn opening(first: Side) -> Self {
        Self::turn_of(first)
    }

    fn turn_of(side: Side) -> Self {
        match side {
            Side::Player => GameState::PlayerTurn,
            Side::Computer => GameState::ComputerTurn,
        }
    }

    fn won_by(side: Side) -> Self {
        match side {
            Side::Player => GameState::PlayerWon,
            Side::Computer => GameState::ComputerWon,
        }
    }

    /// State reached after `mover` has placed a mark on `board`.
    pub fn after_move(board: &Board, mover: Side) -> Self {
        if board.check_win(mover.mark()) {
            Self::won_by(mover)
        } else if board.is_full() {
            GameState::Draw
        } else {
            Self::turn_of(mover.opponent())
        }
    }

    /// True once the game is decided.
    pub fn is_terminal(self) -> bool {
        self.to_move().is_none()
    }

    /// Side to move, or `None` when the game is over.
    pub fn to_move(self) -> Option<Side> {
        match self {
            GameState::PlayerTurn => Some(Side::Player),
            GameState::ComputerTurn => Some(Side::Computer),
            GameState::PlayerWon | GameState::ComputerWon | GameState::Draw => None,
        }
    }

    /// Winning side, if any.
    pub fn winner(self) -> Option<Side> {
        match self {
            GameState::PlayerWon => Some(Side::Player),
            GameState::ComputerWon => Some(Side::Computer),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameState::PlayerTurn => write!(f, "Player to move"),
            GameState::ComputerTurn => write!(f, "Computer to move"),
            GameState::PlayerWon => write!(f, "Player wins"),
            GameState::ComputerWon => write!(f, "Computer wins"),
            GameState::Draw => write!(f, "Draw"),
        }
    }
}
