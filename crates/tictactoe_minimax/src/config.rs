//! Game configuration loaded from TOML.

use super::{Side, Symbols};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Smallest board on which a line can be completed.
pub const MIN_BOARD_SIZE: usize = 3;

/// Settings for a single game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the board.
    board_size: usize,

    /// Symbol shown for the player's cells.
    player_symbol: char,

    /// Symbol shown for the computer's cells.
    computer_symbol: char,

    /// Side that opens the game.
    first_turn: Side,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: MIN_BOARD_SIZE,
            player_symbol: 'X',
            computer_symbol: 'O',
            first_turn: Side::Player,
        }
    }
}

impl GameConfig {
    /// Loads and validates configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(board_size = config.board_size, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the settings describe a playable game.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < MIN_BOARD_SIZE {
            return Err(ConfigError::new(format!(
                "board_size must be at least {}, got {}",
                MIN_BOARD_SIZE, self.board_size
            )));
        }
        if self.player_symbol.is_whitespace() || self.computer_symbol.is_whitespace() {
            return Err(ConfigError::new("symbols must not be whitespace".to_string()));
        }
        if self.player_symbol == self.computer_symbol {
            return Err(ConfigError::new(format!(
                "player and computer symbols must differ, both are '{}'",
                self.player_symbol
            )));
        }
        Ok(())
    }

    /// Returns a copy with a different board size.
    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    /// Returns a copy with a different opening side.
    pub fn with_first_turn(mut self, first_turn: Side) -> Self {
        self.first_turn = first_turn;
        self
    }

    /// Rendering symbols for this configuration.
    pub fn symbols(&self) -> Symbols {
        Symbols::new(self.player_symbol, self.computer_symbol)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
