//! Worker pieces and their movement rules.

use crate::board::Board;
use crate::types::{Action, Cell, Color, Direction, Level, WorkerId};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// A worker piece owned by one player.
///
/// The worker is the source of truth for its own position; every relocation
/// is mirrored into the board's position index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    id: WorkerId,
    color: Color,
    cell: Cell,
}

impl Worker {
    /// Creates a worker on `cell` and registers it with the board.
    #[instrument(skip(board))]
    pub fn spawn(id: WorkerId, color: Color, cell: Cell, board: &mut Board) -> Self {
        board.set_worker_position(id, cell);
        Self { id, color, cell }
    }

    /// Worker identity.
    pub fn id(&self) -> WorkerId {
        self.id
    }

    /// Owning color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Current cell.
    pub fn cell(&self) -> Cell {
        self.cell
    }

    /// Directions in which `action` is currently legal, in compass order.
    ///
    /// After any legal move the build set is non-empty, since the vacated
    /// origin is always buildable.
    pub fn legal_destinations(&self, board: &Board, action: Action) -> Vec<Direction> {
        Direction::iter()
            .filter(|&direction| {
                self.cell
                    .step(direction)
                    .is_some_and(|to| board.is_valid_destination(self.cell, to, action))
            })
            .collect()
    }

    /// Moves one step in `direction` and returns the cell left behind.
    ///
    /// Returns `None` and stays put when the step leaves the board. Height and
    /// occupancy are not re-checked; callers pick from
    /// [`Worker::legal_destinations`].
    #[instrument(skip(self, board), fields(worker = %self.id))]
    pub fn move_to(&mut self, board: &mut Board, direction: Direction) -> Option<Cell> {
        let previous = self.cell;
        let next = previous.step(direction)?;
        self.place_at(board, next);
        debug!(from = %previous, to = %next, "Worker moved");
        Some(previous)
    }

    /// Puts the worker straight onto `cell`, used to undo a tentative move.
    pub fn place_at(&mut self, board: &mut Board, cell: Cell) {
        self.cell = cell;
        board.set_worker_position(self.id, cell);
    }

    /// Builds one level in `direction`.
    ///
    /// The direction must come from [`Worker::legal_destinations`] for
    /// [`Action::Build`]; nothing is re-checked here.
    #[instrument(skip(self, board), fields(worker = %self.id))]
    pub fn build_at(&self, board: &mut Board, direction: Direction) {
        if let Some(target) = self.cell.step(direction) {
            board.apply_build(target);
        }
    }

    /// True when standing on a third-level building.
    pub fn is_on_winning_level(&self, board: &Board) -> bool {
        board.level_at(self.cell) == Level::Third
    }
}
