//! Snapshot-based undo/redo.

use crate::state::GameState;
use tracing::{debug, instrument};

/// Frozen copy of the full game state at one point in time.
///
/// Holds its own deep copy; later changes to live state never reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    state: GameState,
}

impl Snapshot {
    /// Captures `state`.
    pub fn capture(state: &GameState) -> Self {
        Self {
            state: state.clone(),
        }
    }

    /// Read access to the captured state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Consumes the snapshot, yielding the state to restore.
    pub fn into_state(self) -> GameState {
        self.state
    }
}

/// Undo and redo stacks for one game session.
#[derive(Debug, Clone, Default)]
pub struct SnapshotManager {
    undo: Vec<Snapshot>,
    redo: Vec<Snapshot>,
}

impl SnapshotManager {
    /// Creates empty stacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a commit point. Forward progress discards redo history.
    #[instrument(skip_all, fields(undo_depth = self.undo.len()))]
    pub fn commit(&mut self, snapshot: Snapshot) {
        self.undo.push(snapshot);
        self.redo.clear();
    }

    /// Steps back: stores `current` for redo and returns the last commit.
    ///
    /// Returns `None` and changes nothing when there is nothing to undo.
    #[instrument(skip_all)]
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        Self::swap(&mut self.redo, &mut self.undo, current)
    }

    /// Steps forward: stores `current` for undo and returns the last undone state.
    ///
    /// Returns `None` and changes nothing when there is nothing to redo.
    #[instrument(skip_all)]
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        Self::swap(&mut self.undo, &mut self.redo, current)
    }

    fn swap(
        push: &mut Vec<Snapshot>,
        pop: &mut Vec<Snapshot>,
        current: Snapshot,
    ) -> Option<Snapshot> {
        let restored = pop.pop()?;
        push.push(current);
        debug!(turn = restored.state().turn(), "Restoring snapshot");
        Some(restored)
    }

    /// Number of states that can be undone.
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    /// Number of states that can be redone.
    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// Drops both stacks.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}
