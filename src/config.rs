//! Game configuration loaded from TOML.

use crate::games::tictactoe::Mode;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for an interactive game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Mode to start in.
    #[serde(default)]
    mode: Mode,

    /// Pause before the computer moves, in milliseconds.
    #[serde(default = "default_thinking_delay_ms")]
    thinking_delay_ms: u64,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Display name for X.
    #[serde(default = "default_player_x_name")]
    player_x_name: String,

    /// Display name for O.
    #[serde(default = "default_player_o_name")]
    player_o_name: String,
}

fn default_thinking_delay_ms() -> u64 {
    500
}

fn default_log_filter() -> String {
    "warn".to_string()
}

fn default_player_x_name() -> String {
    "Player X".to_string()
}

fn default_player_o_name() -> String {
    "Player O".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            thinking_delay_ms: default_thinking_delay_ms(),
            log_filter: default_log_filter(),
            player_x_name: default_player_x_name(),
            player_o_name: default_player_o_name(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(mode = %config.mode, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Overrides the mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Overrides the thinking delay.
    pub fn with_thinking_delay_ms(mut self, millis: u64) -> Self {
        self.thinking_delay_ms = millis;
        self
    }

    /// The thinking delay as a [`Duration`].
    pub fn thinking_delay(&self) -> Duration {
        Duration::from_millis(self.thinking_delay_ms)
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
