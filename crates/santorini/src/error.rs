//! Error taxonomy for the game engine.

use crate::types::{Cell, Color, Direction, WorkerId};

/// Error that can occur while validating or running a round.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// A coordinate lies outside the 5x5 grid.
    #[display("Coordinate ({row}, {col}) is off the board")]
    InvalidCoordinate {
        /// Requested row.
        row: i32,
        /// Requested column.
        col: i32,
    },

    /// A worker was asked to move somewhere the rules forbid.
    #[display("Worker {worker} cannot move {direction}")]
    IllegalMove {
        /// Worker that was asked to move.
        worker: WorkerId,
        /// Requested direction.
        direction: Direction,
    },

    /// A worker was asked to build somewhere the rules forbid.
    #[display("Worker {worker} cannot build {direction}")]
    IllegalBuild {
        /// Worker that was asked to build.
        worker: WorkerId,
        /// Requested direction.
        direction: Direction,
    },

    /// A worker was set up on a cell another worker already holds.
    #[display("Worker {worker} cannot be placed on occupied cell {cell}")]
    Occupied {
        /// Worker being placed.
        worker: WorkerId,
        /// Contested cell.
        cell: Cell,
    },

    /// A strategy was handed a position with nothing to choose from.
    #[display("No legal action available for {color}")]
    NoLegalAction {
        /// Color that was asked to decide.
        color: Color,
    },

    /// The game has already been decided; `reset` before playing again.
    #[display("Game is already over, {winner} has won")]
    GameOver {
        /// Winner of the finished game.
        winner: Color,
    },

    /// Undo/redo was requested but the session was started without it.
    #[display("Undo/redo is not enabled for this session")]
    HistoryDisabled,

    /// The human-input collaborator could not supply an answer.
    #[display("Input failed: {message}")]
    Input {
        /// Description of the failure.
        message: String,
    },
}

impl GameError {
    /// True when the error flags a decision outside the legal set.
    pub fn is_illegal_action(&self) -> bool {
        matches!(self, GameError::IllegalMove { .. } | GameError::IllegalBuild { .. })
    }
}

impl std::error::Error for GameError {}
