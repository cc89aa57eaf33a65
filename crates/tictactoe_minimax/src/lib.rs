//! Tic-tac-toe against an optimal computer opponent.
//!
//! This crate holds the pure game logic: the board, the turn-taking state
//! machine and an exhaustive minimax search that picks the computer's move.
//! It performs no terminal I/O.
//!
//! # Architecture
//!
//! - **Board**: grid of [`Mark`]s with legality and win/draw checks
//! - **Search**: [`Minimax`] over every legal continuation
//! - **Game**: [`Game`] drives [`GameState`] transitions and records history
//! - **Config**: [`GameConfig`] loaded from TOML
//!
//! # Example
//!
//! ```
//! use tictactoe_minimax::{Game, GameState};
//!
//! let mut game = Game::new(3);
//! game.play(1, 1)?;
//! assert_eq!(game.state(), GameState::ComputerTurn);
//!
//! let reply = game.play_best_move()?;
//! assert_eq!((reply.row, reply.col), (0, 0));
//! # Ok::<(), tictactoe_minimax::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod game;
mod phases;
mod search;
mod types;

pub use action::{Move, MoveError};
pub use config::{ConfigError, GameConfig, MIN_BOARD_SIZE};
pub use game::{Game, GameRecord, ReplayError};
pub use phases::GameState;
pub use search::{
    DRAW_SCORE, LOSS_SCORE, Minimax, SearchResult, WIN_SCORE, search, terminal_score,
};
pub use types::{Board, Mark, Side, Speculation, Symbols};
