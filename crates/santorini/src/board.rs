//! Building levels and the worker position index.

use crate::types::{Action, BOARD_SIZE, Cell, Level, WorkerId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{instrument, trace};

/// 5x5 Santorini board.
///
/// The board owns the building levels. Worker positions are a denormalized
/// index kept in sync by [`crate::Worker`] on every move; the workers
/// themselves belong to their players.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Levels in row-major order.
    levels: [[Level; BOARD_SIZE]; BOARD_SIZE],
    /// Where each worker stands.
    workers: BTreeMap<WorkerId, Cell>,
}

impl Board {
    /// Creates a board with no buildings and no workers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the level at `cell`.
    pub fn level_at(&self, cell: Cell) -> Level {
        self.levels[cell.row()][cell.col()]
    }

    /// Overwrites the level at `cell`, for setting up positions.
    pub fn set_level(&mut self, cell: Cell, level: Level) {
        self.levels[cell.row()][cell.col()] = level;
    }

    /// True iff some worker stands on `cell`.
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.workers.values().any(|&c| c == cell)
    }

    /// Returns the worker standing on `cell`, if any.
    pub fn worker_at(&self, cell: Cell) -> Option<WorkerId> {
        self.workers
            .iter()
            .find_map(|(&id, &c)| (c == cell).then_some(id))
    }

    /// Returns where a worker stands.
    pub fn position_of(&self, id: WorkerId) -> Option<Cell> {
        self.workers.get(&id).copied()
    }

    /// Checks whether `to` is a legal target for `action` from `from`.
    ///
    /// Occupied cells and domes are never valid. A move may climb at most one
    /// level; descending any number of levels is allowed.
    #[instrument(level = "trace", skip(self))]
    pub fn is_valid_destination(&self, from: Cell, to: Cell, action: Action) -> bool {
        if self.is_occupied(to) {
            return false;
        }
        let target = self.level_at(to);
        if target.is_dome() {
            return false;
        }
        match action {
            Action::Move => target.height() <= self.level_at(from).height() + 1,
            Action::Build => true,
        }
    }

    /// Raises `cell` by one level, capping a third level with a dome.
    ///
    /// Callers validate first; this performs no checks.
    pub fn apply_build(&mut self, cell: Cell) {
        let level = self.level_at(cell).raised();
        trace!(%cell, %level, "Building");
        self.set_level(cell, level);
    }

    /// Records that `id` now stands on `cell`.
    pub fn set_worker_position(&mut self, id: WorkerId, cell: Cell) {
        self.workers.insert(id, cell);
    }

    /// Removes `id` from the position index.
    pub fn remove_worker_position(&mut self, id: WorkerId) -> Option<Cell> {
        self.workers.remove(&id)
    }

    /// Iterates over `(worker, cell)` pairs in id order.
    pub fn workers(&self) -> impl Iterator<Item = (WorkerId, Cell)> + '_ {
        self.workers.iter().map(|(&id, &cell)| (id, cell))
    }

    /// Produces the renderable state handed to presentation code.
    pub fn view(&self) -> BoardView {
        BoardView {
            levels: self.levels.map(|row| row.map(Level::height)),
            workers: self.workers.clone(),
        }
    }
}

/// Snapshot of what a renderer needs: heights and worker positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    /// Heights 0-3, with 4 marking a dome.
    pub levels: [[u8; BOARD_SIZE]; BOARD_SIZE],
    /// Where each worker stands.
    pub workers: BTreeMap<WorkerId, Cell>,
}

impl BoardView {
    /// Worker standing on `(row, col)`, if any.
    pub fn worker_at(&self, row: usize, col: usize) -> Option<WorkerId> {
        self.workers
            .iter()
            .find(|&(_, cell)| cell.row() == row && cell.col() == col)
            .map(|(&id, _)| id)
    }
}
