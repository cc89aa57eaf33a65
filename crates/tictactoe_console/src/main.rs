//! Tic-Tac-Toe - play one game against the computer.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::io;
use tictactoe_console::{Cli, Console, play_and_record};
use tictactoe_minimax::Game;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = cli.game_config()?;
    let mut game = Game::from_config(&config);

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout().lock(), config.symbols());
    let outcome = play_and_record(&mut game, &mut console, cli.hints, cli.record.as_deref())?;
    info!(?outcome, "Exiting");

    Ok(())
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}
