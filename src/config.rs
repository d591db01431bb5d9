//! Game configuration: board dimensions, win length and starting player.

use crate::games::gomoku::Player;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for a single game.
///
/// Loaded from TOML; any missing key falls back to the 8x8, five-in-a-row default.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Number of columns.
    #[serde(default = "default_width")]
    width: usize,

    /// Number of rows.
    #[serde(default = "default_height")]
    height: usize,

    /// Stones in a row needed to win.
    #[serde(default = "default_n_in_row")]
    n_in_row: usize,

    /// Player who places the first stone.
    #[serde(default = "default_start_player")]
    start_player: Player,
}

#[instrument]
fn default_width() -> usize {
    8
}

#[instrument]
fn default_height() -> usize {
    8
}

#[instrument]
fn default_n_in_row() -> usize {
    5
}

#[instrument]
fn default_start_player() -> Player {
    Player::Black
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            n_in_row: default_n_in_row(),
            start_player: default_start_player(),
        }
    }
}

impl GameConfig {
    /// Creates a configuration with the given dimensions, Black to start.
    #[instrument]
    pub fn new(width: usize, height: usize, n_in_row: usize) -> Self {
        Self {
            width,
            height,
            n_in_row,
            start_player: default_start_player(),
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            ConfigError::new(format!("Failed to parse config: {}", e))
        })?;

        config.validate()?;
        info!(
            width = config.width,
            height = config.height,
            n_in_row = config.n_in_row,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Checks that a game can start with these settings.
    ///
    /// Dimensions and win length must be positive and
    /// `n_in_row <= min(width, height)`.
    #[instrument(
        skip(self),
        fields(width = self.width, height = self.height, n_in_row = self.n_in_row)
    )]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::new(format!(
                "Board dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.n_in_row == 0 {
            return Err(ConfigError::new("n_in_row must be positive".to_string()));
        }
        if self.width < self.n_in_row || self.height < self.n_in_row {
            return Err(ConfigError::new(format!(
                "Board width and height can not be less than {}",
                self.n_in_row
            )));
        }
        Ok(())
    }
}

/// Configuration error. Fatal: the game cannot start.
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
