//! Moves and the errors raised when one cannot be played.

use super::Mark;
use serde::{Deserialize, Serialize};

/// A completed placement: a mark written into a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
    /// The mark placed.
    pub mark: Mark,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> ({}, {})", self.mark, self.row + 1, self.col + 1)
    }
}

/// Reason a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Row or column lies outside the board.
    #[display("Invalid move! Row and column must be within the board range.")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target cell already holds a mark.
    #[display("Invalid move! The cell is already occupied.")]
    Occupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The game has already finished.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
