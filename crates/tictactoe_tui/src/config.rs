//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_core::{DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO, TurnEngine};
use tracing::{debug, info, instrument};

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Settings for a local game.
///
/// Every field is optional in the file; missing fields take their defaults.
/// Unknown keys are rejected so a misspelled setting is not silently ignored.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_", into)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Name of the player who moves first (plays X).
    player_one: String,

    /// Name of the player who moves second (plays O).
    player_two: String,

    /// File receiving log output, kept off the terminal.
    log_file: PathBuf,

    /// Log filter used when `RUST_LOG` is unset.
    log_filter: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_one: DEFAULT_PLAYER_ONE.to_string(),
            player_two: DEFAULT_PLAYER_TWO.to_string(),
            log_file: PathBuf::from("tictactoe.log"),
            log_filter: "info".to_string(),
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

        let config = Self::from_toml_str(&content)?;
        info!(
            player_one = %config.player_one,
            player_two = %config.player_two,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads configuration from `path`, falling back to defaults if the file
    /// does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parses and validates configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that both player names are usable.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let one = self.player_one.trim();
        let two = self.player_two.trim();
        if one.is_empty() || two.is_empty() {
            return Err(ConfigError::new("Player names must not be empty".to_string()));
        }
        if one == two {
            return Err(ConfigError::new(format!(
                "Player names must differ, both are '{}'",
                one
            )));
        }
        Ok(())
    }

    /// Builds a fresh engine for the configured players.
    #[instrument(skip(self))]
    pub fn build_engine(&self) -> TurnEngine {
        TurnEngine::new(self.player_one.trim(), self.player_two.trim())
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.player_one(), "Player 1");
        assert_eq!(config.player_two(), "Player 2");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GameConfig::from_toml_str("player_two = \"Bob\"").unwrap();
        assert_eq!(config.player_one(), "Player 1");
        assert_eq!(config.player_two(), "Bob");
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = GameConfig::from_toml_str("player_one = \"Sam\"\nplayer_two = \" Sam \"")
            .unwrap_err();
        assert!(err.message.contains("must differ"));
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(GameConfig::from_toml_str("player_one = \"   \"").is_err());
    }

    #[test]
    fn test_misspelled_key_rejected() {
        let err = GameConfig::from_toml_str("plyer_one = \"Ann\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.message.contains("plyer_one"));
    }

    #[test]
    fn test_malformed_toml() {
        let err = GameConfig::from_toml_str("player_one = ").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.to_string().contains("config.rs"));
    }

    #[test]
    fn test_setters_and_engine() {
        let config = GameConfig::default()
            .with_player_one("Ann")
            .with_log_file("game.log");
        assert_eq!(config.log_file(), &PathBuf::from("game.log"));
        let engine = config.build_engine();
        assert_eq!(engine.active_player().name(), "Ann");
        assert_eq!(engine.players()[1].name(), "Player 2");
    }
}
