//! Command-line interface for the santorini binary.

use crate::config::{ConfigError, SessionConfig, Settings};
use clap::{Parser, ValueEnum};
use santorini::StrategyKind;
use std::path::PathBuf;
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Santorini - two-player worker placement game in the terminal
#[derive(Parser, Debug)]
#[command(name = "santorini")]
#[command(about = "Play Santorini between humans and computer players", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Player controlling white (human, heuristic, random)
    #[arg(value_parser = parse_strategy)]
    pub white: Option<StrategyKind>,

    /// Player controlling blue (human, heuristic, random)
    #[arg(value_parser = parse_strategy)]
    pub blue: Option<StrategyKind>,

    /// Offer undo/redo before every round
    pub undo_redo: Option<Toggle>,

    /// Show the active player's score breakdown
    pub score: Option<Toggle>,

    /// Session config file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for the computer players
    #[arg(long)]
    pub seed: Option<u64>,
}

/// An on/off switch as written on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    /// Enabled.
    On,
    /// Disabled.
    Off,
}

impl Toggle {
    /// True for [`Toggle::On`].
    pub fn is_on(self) -> bool {
        self == Toggle::On
    }
}

fn parse_strategy(raw: &str) -> Result<StrategyKind, String> {
    StrategyKind::from_str(raw).map_err(|_| {
        let options: Vec<String> = StrategyKind::iter().map(|k| k.to_string()).collect();
        format!("expected one of: {}", options.join(", "))
    })
}

impl Cli {
    /// Merges arguments over the config file (if any) over defaults.
    #[instrument(skip(self), fields(config = ?self.config))]
    pub fn settings(&self) -> Result<Settings, ConfigError> {
        let file = match &self.config {
            Some(path) => SessionConfig::from_file(path)?,
            None => SessionConfig::default(),
        };
        let undo_redo = self.undo_redo.map(Toggle::is_on).or(*file.undo_redo());
        let score = self.score.map(Toggle::is_on).or(*file.score());
        let settings = Settings::new(
            self.white.or(*file.white()).unwrap_or_default(),
            self.blue.or(*file.blue()).unwrap_or_default(),
            undo_redo.unwrap_or(false),
            score.unwrap_or(false),
            self.seed.or(*file.seed()),
        );
        debug!(?settings, "Resolved session settings");
        Ok(settings)
    }
}
