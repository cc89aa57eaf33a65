//! Game engine: a board plus the turn-taking state machine.

use super::search::{Minimax, SearchResult};
use super::{Board, GameConfig, GameState, Move, MoveError, Side};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A single game between the player and the computer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    first_turn: Side,
    state: GameState,
    history: Vec<Move>,
}

impl Game {
    /// Creates a game on an empty `size x size` board with the player to move.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self::with_first_turn(size, Side::Player)
    }

    /// Creates a game where `first` makes the opening move.
    #[instrument]
    pub fn with_first_turn(size: usize, first: Side) -> Self {
        Self {
            board: Board::new(size),
            first_turn: first,
            state: GameState::opening(first),
            history: Vec::new(),
        }
    }

    /// Creates a game from validated settings.
    #[instrument(skip(config))]
    pub fn from_config(config: &GameConfig) -> Self {
        Self::with_first_turn(*config.board_size(), *config.first_turn())
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side that made, or will make, the opening move.
    pub fn first_turn(&self) -> Side {
        self.first_turn
    }

    /// The current phase.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Moves played so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Side to move, or `None` once the game is over.
    pub fn to_move(&self) -> Option<Side> {
        self.state.to_move()
    }

    /// Places the mark of the side to move at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] on a finished game, otherwise the
    /// reason the cell cannot be taken.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn play(&mut self, row: usize, col: usize) -> Result<GameState, MoveError> {
        let side = self.state.to_move().ok_or(MoveError::GameOver)?;
        self.board.check_move(row, col)?;

        let mark = side.mark();
        self.board.place(row, col, mark);
        self.history.push(Move::new(row, col, mark));
        self.state = GameState::after_move(&self.board, side);

        info!(?side, row, col, state = ?self.state, "Move played");
        Ok(self.state)
    }

    /// Optimal move for the side to move.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] on a finished game.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn best_move(&mut self) -> Result<SearchResult, MoveError> {
        let side = self.state.to_move().ok_or(MoveError::GameOver)?;
        let mut searcher = Minimax::new();
        let result = searcher.search(&mut self.board, side.maximizing());
        debug!(?side, ?result, nodes = searcher.nodes_visited(), "Best move found");
        Ok(result)
    }

    /// Searches for and plays the optimal move for the side to move.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] on a finished game.
    #[instrument(skip(self))]
    pub fn play_best_move(&mut self) -> Result<Move, MoveError> {
        let side = self.state.to_move().ok_or(MoveError::GameOver)?;
        let (row, col) = self.best_move()?.cell().ok_or(MoveError::GameOver)?;
        self.play(row, col)?;
        Ok(Move::new(row, col, side.mark()))
    }

    /// Serializable summary of the game so far.
    pub fn record(&self) -> GameRecord {
        GameRecord {
            board_size: self.board.size(),
            first_turn: self.first_turn,
            moves: self.history.clone(),
            outcome: self.state,
        }
    }
}

/// Summary of a game, finished or abandoned: its size, opening side, moves
/// and the state when it was taken.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameRecord {
    /// Side length of the board.
    board_size: usize,
    /// Side that opened the game.
    first_turn: Side,
    /// Moves in the order they were played.
    moves: Vec<Move>,
    /// State when the record was taken.
    outcome: GameState,
}

impl GameRecord {
    /// Replays the recorded moves onto a fresh game.
    ///
    /// # Errors
    ///
    /// Returns a [`ReplayError`] when a recorded move is illegal or carries
    /// the wrong mark, or when the moves do not lead to the recorded outcome.
    #[instrument(skip(self), fields(moves = self.moves.len()))]
    pub fn replay(&self) -> Result<Game, ReplayError> {
        let mut game = Game::with_first_turn(self.board_size, self.first_turn);
        for m in &self.moves {
            let side = game.to_move().ok_or(MoveError::GameOver)?;
            if side.mark() != m.mark {
                return Err(ReplayError::WrongMark { expected: side, mov: *m });
            }
            game.play(m.row, m.col)?;
        }
        if game.state() != self.outcome {
            return Err(ReplayError::OutcomeMismatch {
                recorded: self.outcome,
                replayed: game.state(),
            });
        }
        Ok(game)
    }
}

/// Reason a [`GameRecord`] could not be replayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum ReplayError {
    /// A recorded move was illegal.
    #[display("{_0}")]
    #[from]
    Move(MoveError),

    /// A recorded move carries the wrong side's mark.
    #[display("{mov} was recorded on {expected:?}'s turn")]
    WrongMark {
        /// Side whose turn it was.
        expected: Side,
        /// The offending move.
        mov: Move,
    },

    /// The moves replay to a different state than the one recorded.
    #[display("record says {recorded}, replay reached {replayed}")]
    OutcomeMismatch {
        /// State stored in the record.
        recorded: GameState,
        /// State reached by replaying the moves.
        replayed: GameState,
    },
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReplayError::Move(e) => Some(e),
            _ => None,
        }
    }
}
