//! Round-start classification and legal action enumeration.

use crate::error::GameError;
use crate::state::GameState;
use crate::strategy::Decision;
use crate::types::{Action, Color, Direction, WorkerId};
use serde::Serialize;
use tracing::{debug, instrument};

/// The `(worker, move direction)` pairs available to the active player.
///
/// Only built by [`round_status`], so it is never empty when handed to a
/// strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegalActions {
    moves: Vec<(WorkerId, Direction)>,
}

impl LegalActions {
    pub(crate) fn new(moves: Vec<(WorkerId, Direction)>) -> Self {
        Self { moves }
    }

    /// All pairs, grouped by worker in compass order.
    pub fn moves(&self) -> &[(WorkerId, Direction)] {
        &self.moves
    }

    /// Number of legal pairs.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// True when no move is available.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// True if `worker` may move in `direction`.
    pub fn contains(&self, worker: WorkerId, direction: Direction) -> bool {
        self.moves.contains(&(worker, direction))
    }

    /// Workers with at least one legal move.
    pub fn workers(&self) -> Vec<WorkerId> {
        let mut ids: Vec<WorkerId> = self.moves.iter().map(|&(id, _)| id).collect();
        ids.dedup();
        ids
    }

    /// Legal move directions for one worker.
    pub fn directions_for(&self, worker: WorkerId) -> Vec<Direction> {
        self.moves
            .iter()
            .filter(|&&(id, _)| id == worker)
            .map(|&(_, direction)| direction)
            .collect()
    }
}

/// Result of the round-start check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundStatus {
    /// A worker of the active player already stands on level 3.
    Win,
    /// Neither worker can move.
    Lose,
    /// Play continues with these actions.
    Continue(LegalActions),
}

/// Classifies the start of `color`'s round.
#[instrument(skip(state))]
pub fn round_status(state: &GameState, color: Color) -> RoundStatus {
    let board = state.board();
    let workers = state.player(color).workers();

    if workers.iter().any(|w| w.is_on_winning_level(board)) {
        debug!(%color, "Worker on level 3");
        return RoundStatus::Win;
    }

    let moves: Vec<(WorkerId, Direction)> = workers
        .iter()
        .flat_map(|w| {
            w.legal_destinations(board, Action::Move)
                .into_iter()
                .map(move |direction| (w.id(), direction))
        })
        .collect();

    if moves.is_empty() {
        debug!(%color, "No legal moves");
        RoundStatus::Lose
    } else {
        debug!(%color, count = moves.len(), "Legal moves enumerated");
        RoundStatus::Continue(LegalActions::new(moves))
    }
}

/// Build directions `worker` would have after moving in `direction`.
///
/// Works on a scratch copy, so live state is untouched.
pub fn builds_after_move(
    state: &GameState,
    worker: WorkerId,
    direction: Direction,
) -> Vec<Direction> {
    let mut scratch = state.clone();
    match scratch.move_worker(worker, direction) {
        Ok(_) => scratch.legal_destinations(worker, Action::Build),
        Err(_) => Vec::new(),
    }
}

/// Checks a decision against the legal set and the post-move build set.
///
/// Runs before anything is applied, so a rejected decision leaves no trace.
pub fn validate_decision(
    state: &GameState,
    legal: &LegalActions,
    decision: &Decision,
) -> Result<(), GameError> {
    if !legal.contains(decision.worker, decision.movement) {
        return Err(GameError::IllegalMove {
            worker: decision.worker,
            direction: decision.movement,
        });
    }
    let builds = builds_after_move(state, decision.worker, decision.movement);
    if !builds.contains(&decision.build) {
        return Err(GameError::IllegalBuild {
            worker: decision.worker,
            direction: decision.build,
        });
    }
    Ok(())
}
