//! Session configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use santorini::StrategyKind;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Optional session defaults read from a config file.
///
/// Every field may be omitted; command-line values take precedence.
///
/// ```toml
/// white = "heuristic"
/// blue = "random"
/// undo_redo = true
/// score = false
/// seed = 42
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Strategy for white.
    white: Option<StrategyKind>,
    /// Strategy for blue.
    blue: Option<StrategyKind>,
    /// Keep undo/redo history.
    undo_redo: Option<bool>,
    /// Show score breakdowns.
    score: Option<bool>,
    /// Seed for the computer players.
    seed: Option<u64>,
}

impl SessionConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading session config");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            ConfigError::new(format!("Failed to parse config: {}", e))
        })?;

        info!(?config, "Session config loaded");
        Ok(config)
    }
}

/// Fully resolved settings for one run of the binary.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct Settings {
    /// Strategy for white.
    white: StrategyKind,
    /// Strategy for blue.
    blue: StrategyKind,
    /// Keep undo/redo history.
    undo_redo: bool,
    /// Show score breakdowns.
    score: bool,
    /// Seed for the computer players, entropy when absent.
    seed: Option<u64>,
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
    /// Creates a configuration error tagged with the caller's location.
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
