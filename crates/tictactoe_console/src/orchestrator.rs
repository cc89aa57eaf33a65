//! Turn-taking loop between the console player and the computer.

use crate::console::Console;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::Path;
use tictactoe_minimax::{Game, GameState, Side};
use tracing::{debug, info, instrument, warn};

/// Plays `game` to completion, reading the player's moves from `console`.
///
/// With `hints` set, the optimal move is shown before each player prompt.
#[instrument(skip_all, fields(size = game.board().size(), hints = hints))]
pub fn play_game<R: BufRead, W: Write>(
    game: &mut Game,
    console: &mut Console<R, W>,
    hints: bool,
) -> Result<GameState> {
    info!("Starting game");
    console.welcome()?;

    while let Some(side) = game.to_move() {
        console.show_board(game.board())?;
        match side {
            Side::Player => {
                if hints {
                    let hint = game.best_move()?;
                    console.show_hint(&hint)?;
                }
                let (row, col) = console.read_move(game.board())?;
                game.play(row, col)?;
            }
            Side::Computer => {
                let mov = game.play_best_move()?;
                debug!(%mov, "Computer moved");
            }
        }
    }

    let outcome = game.state();
    console.show_board(game.board())?;
    console.announce(outcome)?;
    info!(?outcome, moves = game.history().len(), "Game finished");
    Ok(outcome)
}

/// Plays `game` like [`play_game`], then writes its record to `record`.
///
/// The record is written even when the session ends early, so an abandoned
/// game is saved as far as it got.
#[instrument(skip_all, fields(record = record.is_some()))]
pub fn play_and_record<R: BufRead, W: Write>(
    game: &mut Game,
    console: &mut Console<R, W>,
    hints: bool,
    record: Option<&Path>,
) -> Result<GameState> {
    let result = play_game(game, console, hints);
    if let Some(path) = record {
        if let Err(e) = &result {
            warn!(error = %e, "Saving record of unfinished game");
        }
        save_record(game, path)?;
    }
    result
}

/// Writes the game's record to `path` as pretty-printed JSON.
#[instrument(skip(game), fields(path = %path.display()))]
pub fn save_record(game: &Game, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(&game.record())?;
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    info!("Game record saved");
    Ok(())
}
