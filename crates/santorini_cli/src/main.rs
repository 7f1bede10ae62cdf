//! Santorini - terminal front end.
//!
//! Seats two players (human, heuristic or random), optionally offers
//! undo/redo before every round, and loops until nobody wants another game.

#![warn(missing_docs)]

mod cli;
mod config;
mod prompt;
mod render;
mod session;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // The board goes to stdout, so logs go to stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let settings = cli.settings()?;
    info!(?settings, "Starting santorini session");
    session::run(&settings)
}
