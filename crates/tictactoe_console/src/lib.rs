//! Console front end for tic-tac-toe against a minimax opponent.
//!
//! - [`cli`]: command-line flags and config resolution
//! - [`console`]: prompts, board rendering and end-of-game messages
//! - [`orchestrator`]: the turn loop and game records

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod console;
pub mod orchestrator;

pub use cli::Cli;
pub use console::Console;
pub use orchestrator::{play_and_record, play_game, save_record};
