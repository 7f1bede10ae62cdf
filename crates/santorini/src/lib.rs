//! Santorini game engine.
//!
//! Two players each control two workers on a 5x5 board. A turn is one move
//! followed by one build next to the moved worker. Standing on a third-level
//! building wins; having no legal move loses.
//!
//! # Architecture
//!
//! - **Board**: building levels plus a worker position index
//! - **Worker**: movement deltas and per-worker legality
//! - **Rules**: round-start Win/Lose/Continue classification
//! - **Strategies**: Human, Random and Heuristic decision-makers
//! - **Engine**: turn state machine with optional undo/redo
//!
//! # Example
//!
//! ```
//! use santorini::{Color, GameEngine, RandomStrategy, seeded_rng};
//!
//! let white = Box::new(RandomStrategy::new(seeded_rng(Some(7), Color::White)));
//! let blue = Box::new(RandomStrategy::new(seeded_rng(Some(7), Color::Blue)));
//! let mut engine = GameEngine::new(white, blue, false);
//! let winner = engine.run_to_completion().expect("automated players never fail");
//! assert_eq!(engine.winner(), Some(winner));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod engine;
mod error;
mod history;
mod rules;
mod state;
mod strategy;
mod types;
mod worker;

pub use board::{Board, BoardView};
pub use engine::{GameEngine, Phase, RoundOutcome};
pub use error::GameError;
pub use history::{Snapshot, SnapshotManager};
pub use rules::{LegalActions, RoundStatus, builds_after_move, round_status, validate_decision};
pub use state::{GameState, PlayerState};
pub use strategy::{
    Decision, Evaluation, HeuristicStrategy, HumanStrategy, MoveInput, RandomStrategy,
    ScoreBreakdown, Strategy, StrategyKind, distance_score, score, seeded_rng,
};
pub use types::{Action, BOARD_SIZE, Cell, Color, Direction, Level, WorkerId};
pub use worker::Worker;
