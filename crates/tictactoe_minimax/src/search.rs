//! Exhaustive minimax search.
//!
//! The computer maximizes and the player minimizes. Every legal continuation
//! is explored, except that a node stops scanning its candidates as soon as
//! one of them reaches the best score attainable for the side to move.

use super::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of a position the computer has won.
pub const WIN_SCORE: i32 = 10;
/// Score of a position the player has won.
pub const LOSS_SCORE: i32 = -10;
/// Score of a full board with no winner.
pub const DRAW_SCORE: i32 = 0;

/// Outcome of evaluating a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchResult {
    /// The position is already decided; there is no move to make.
    Terminal {
        /// Final score of the position.
        score: i32,
    },
    /// The optimal move for the side to move, with its minimax value.
    BestMove {
        /// Zero-based row.
        row: usize,
        /// Zero-based column.
        col: usize,
        /// Minimax value reached by playing this move.
        score: i32,
    },
}

impl SearchResult {
    /// Minimax value of the result.
    pub fn score(&self) -> i32 {
        match *self {
            SearchResult::Terminal { score } | SearchResult::BestMove { score, .. } => score,
        }
    }

    /// Cell to play, if the position was not terminal.
    pub fn cell(&self) -> Option<(usize, usize)> {
        match *self {
            SearchResult::Terminal { .. } => None,
            SearchResult::BestMove { row, col, .. } => Some((row, col)),
        }
    }
}

/// Score of a decided position, or `None` if play continues.
///
/// A player line is checked before a computer line, then a full board.
pub fn terminal_score(board: &Board) -> Option<i32> {
    if board.check_win(Mark::Player) {
        Some(LOSS_SCORE)
    } else if board.check_win(Mark::Computer) {
        Some(WIN_SCORE)
    } else if board.is_full() {
        Some(DRAW_SCORE)
    } else {
        None
    }
}

/// Minimax searcher.
#[derive(Debug, Clone, Default)]
pub struct Minimax {
    nodes: u64,
}

impl Minimax {
    /// Creates a searcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions evaluated by the most recent [`search`](Self::search).
    pub fn nodes_visited(&self) -> u64 {
        self.nodes
    }

    /// Finds the optimal move for the side to move.
    ///
    /// `maximizing` selects the computer; otherwise the player moves. Cells are
    /// tried in row-major order and ties keep the earliest cell. The board is
    /// left exactly as it was passed in.
    #[instrument(skip(self, board), fields(size = board.size()))]
    pub fn search(&mut self, board: &mut Board, maximizing: bool) -> SearchResult {
        self.nodes = 0;
        let result = self.evaluate(board, maximizing);
        debug!(nodes = self.nodes, ?result, "Search complete");
        result
    }

    fn evaluate(&mut self, board: &mut Board, maximizing: bool) -> SearchResult {
        self.nodes += 1;

        if let Some(score) = terminal_score(board) {
            return SearchResult::Terminal { score };
        }

        let (mark, forced) = if maximizing {
            (Mark::Computer, WIN_SCORE)
        } else {
            (Mark::Player, LOSS_SCORE)
        };
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_cell = None;

        let size = board.size();
        for row in 0..size {
            for col in 0..size {
                if board.get(row, col) != Some(Mark::Empty) {
                    continue;
                }

                let score = {
                    let mut trial = board.speculate(row, col, mark);
                    self.evaluate(&mut trial, !maximizing).score()
                };

                if score == forced {
                    return SearchResult::BestMove { row, col, score };
                }

                let improves = if maximizing {
                    score > best_score
                } else {
                    score < best_score
                };
                if improves {
                    best_score = score;
                    best_cell = Some((row, col));
                }
            }
        }

        match best_cell {
            Some((row, col)) => SearchResult::BestMove {
                row,
                col,
                score: best_score,
            },
            // A board that is not full always yields a candidate.
            None => SearchResult::Terminal { score: DRAW_SCORE },
        }
    }
}

/// Runs a fresh [`Minimax`] search on `board`.
pub fn search(board: &mut Board, maximizing: bool) -> SearchResult {
    Minimax::new().search(board, maximizing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::board_from;

    #[test]
    fn test_terminal_scores() {
        assert_eq!(terminal_score(&board_from(["XXX", "OO ", "   "])), Some(LOSS_SCORE));
        assert_eq!(terminal_score(&board_from(["OOO", "XX ", "X  "])), Some(WIN_SCORE));
        assert_eq!(terminal_score(&board_from(["XOX", "XOO", "OXX"])), Some(DRAW_SCORE));
        assert_eq!(terminal_score(&Board::new(3)), None);
    }

    #[test]
    fn test_player_line_checked_first() {
        // Both sides have a line; the player's takes precedence.
        let mut board = board_from(["XXX", "OOO", "   "]);
        assert_eq!(search(&mut board, true), SearchResult::Terminal { score: LOSS_SCORE });
    }

    #[test]
    fn test_full_board_is_terminal_draw() {
        let mut board = board_from(["XOX", "XOO", "OXX"]);
        let result = search(&mut board, true);
        assert_eq!(result, SearchResult::Terminal { score: DRAW_SCORE });
        assert_eq!(result.cell(), None);
    }

    #[test]
    fn test_last_cell_is_taken() {
        let mut board = board_from(["XOX", "XOO", "OX "]);
        let result = search(&mut board, false);
        assert_eq!(result.cell(), Some((2, 2)));
        assert_eq!(result.score(), DRAW_SCORE);
    }

    #[test]
    fn test_minimizing_takes_player_win() {
        let mut board = board_from(["XX ", "OO ", "   "]);
        let result = search(&mut board, false);
        assert_eq!(result, SearchResult::BestMove { row: 0, col: 2, score: LOSS_SCORE });
    }

    #[test]
    fn test_node_count_is_recorded() {
        let mut searcher = Minimax::new();
        let mut board = board_from(["XOX", "XOO", "OX "]);
        searcher.search(&mut board, true);
        // Root plus the single child.
        assert_eq!(searcher.nodes_visited(), 2);
    }

    #[test]
    fn test_empty_board_node_count() {
        let mut searcher = Minimax::new();
        let mut board = Board::new(3);
        searcher.search(&mut board, true);
        assert_eq!(searcher.nodes_visited(), 94_978);
    }
}
