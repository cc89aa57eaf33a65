//! Command-line interface for the console game.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tictactoe_minimax::{GameConfig, Side};
use tracing::{info, instrument, warn};

/// Tic-Tac-Toe against a computer that never loses
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (ignored if missing)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Board side length, overriding the config file.
    /// Sizes above 3 make the exhaustive search impractically slow
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Let the computer make the opening move
    #[arg(long)]
    pub computer_first: bool,

    /// Show the optimal move before each of your turns
    #[arg(long)]
    pub hints: bool,

    /// Write the game as JSON to this path, even if it is abandoned
    #[arg(long)]
    pub record: Option<PathBuf>,
}

impl Cli {
    /// Resolves the game settings from the config file and flag overrides.
    #[instrument(skip(self), fields(config_path = %self.config.display()))]
    pub fn game_config(&self) -> Result<GameConfig> {
        let mut config = if self.config.exists() {
            GameConfig::from_file(&self.config)
                .with_context(|| format!("loading {}", self.config.display()))?
        } else {
            info!(
                "Config file not found at {}, using defaults",
                self.config.display()
            );
            GameConfig::default()
        };

        if let Some(size) = self.size {
            config = config.with_board_size(size);
        }
        if self.computer_first {
            config = config.with_first_turn(Side::Computer);
        }
        config.validate()?;

        if *config.board_size() > 3 {
            warn!(
                board_size = config.board_size(),
                "Exhaustive search on boards larger than 3x3 can take a very long time"
            );
        }
        Ok(config)
    }
}
