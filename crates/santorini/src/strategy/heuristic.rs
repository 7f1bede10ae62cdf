//! One-ply greedy player.
//!
//! Each candidate move is tried on a scratch copy of the state, scored, and
//! reverted. The best-scoring moves form the tie set; one is drawn uniformly.
//! The build that follows is random, the score does not look at builds.

use super::{Decision, Strategy, StrategyKind};
use crate::error::GameError;
use crate::rules::{LegalActions, builds_after_move};
use crate::state::GameState;
use crate::types::{Cell, Color, Direction, WorkerId};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

const HEIGHT_WEIGHT: i32 = 3;
const CENTER_WEIGHT: i32 = 2;
const DISTANCE_WEIGHT: i32 = 1;
const DISTANCE_OFFSET: i32 = 8;

/// The three components of a position score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Sum of the levels the player's workers stand on.
    pub height: i32,
    /// 2 per worker on the center cell, 1 per worker in the ring around it.
    pub center: i32,
    /// `8` minus the summed closest distances to the opponent's workers.
    pub distance: i32,
}

impl ScoreBreakdown {
    /// Weighted total: `3 * height + 2 * center + distance`.
    pub fn total(&self) -> i32 {
        HEIGHT_WEIGHT * self.height + CENTER_WEIGHT * self.center + DISTANCE_WEIGHT * self.distance
    }
}

impl std::fmt::Display for ScoreBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.height, self.center, self.distance)
    }
}

/// Scores the position from `color`'s point of view.
pub fn score(state: &GameState, color: Color) -> ScoreBreakdown {
    let board = state.board();
    let own = worker_cells(state, color);
    let opponents = worker_cells(state, color.opponent());

    let height: i32 = own
        .iter()
        .map(|&c| i32::from(board.level_at(c).height()))
        .sum();
    let center: i32 = own
        .iter()
        .map(|&c| match c.chebyshev(Cell::CENTER) {
            0 => 2,
            1 => 1,
            _ => 0,
        })
        .sum();

    ScoreBreakdown {
        height,
        center,
        distance: distance_score(&own, &opponents),
    }
}

fn worker_cells(state: &GameState, color: Color) -> [Cell; 2] {
    state.player(color).workers().each_ref().map(|w| w.cell())
}

/// `8 - sum over opponents of the Chebyshev distance to the nearest own worker`.
pub fn distance_score(own: &[Cell], opponents: &[Cell]) -> i32 {
    let nearest = |theirs: Cell| own.iter().map(|&ours| ours.chebyshev(theirs)).min();
    let summed: i32 = opponents
        .iter()
        .filter_map(|&theirs| nearest(theirs))
        .map(i32::from)
        .sum();
    DISTANCE_OFFSET - summed
}

/// Every candidate's score plus the maximal tie set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Score of each legal `(worker, direction)` pair, in enumeration order.
    pub scores: Vec<((WorkerId, Direction), i32)>,
    /// Highest score seen.
    pub best_score: i32,
    /// All pairs reaching `best_score`.
    pub best_moves: Vec<(WorkerId, Direction)>,
}

/// Greedy player maximizing [`score`] after its move.
#[derive(Debug)]
pub struct HeuristicStrategy {
    rng: StdRng,
}

impl HeuristicStrategy {
    /// Creates a heuristic player breaking ties with `rng`.
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }

    /// Scores every legal move by trying it on a scratch copy and reverting.
    #[instrument(skip(state, legal), fields(options = legal.len()))]
    pub fn evaluate(
        state: &GameState,
        color: Color,
        legal: &LegalActions,
    ) -> Result<Evaluation, GameError> {
        let mut scratch = state.clone();
        let mut scores = Vec::with_capacity(legal.len());
        let mut best_score = i32::MIN;
        let mut best_moves = Vec::new();

        for &(worker, direction) in legal.moves() {
            let origin = scratch.move_worker(worker, direction)?;
            let total = score(&scratch, color).total();
            scratch.place_worker(worker, origin);
            trace!(%worker, %direction, total, "Scored candidate");

            if total > best_score {
                best_score = total;
                best_moves.clear();
            }
            if total == best_score {
                best_moves.push((worker, direction));
            }
            scores.push(((worker, direction), total));
        }

        Ok(Evaluation {
            scores,
            best_score,
            best_moves,
        })
    }
}

impl Strategy for HeuristicStrategy {
    #[instrument(skip(self, state, legal))]
    fn decide(
        &mut self,
        state: &GameState,
        color: Color,
        legal: &LegalActions,
    ) -> Result<Decision, GameError> {
        let nothing = GameError::NoLegalAction { color };
        let evaluation = Self::evaluate(state, color, legal)?;
        let best = evaluation.best_moves.choose(&mut self.rng);
        let &(worker, movement) = best.ok_or(nothing.clone())?;
        let builds = builds_after_move(state, worker, movement);
        let build = *builds.choose(&mut self.rng).ok_or(nothing)?;
        debug!(
            %worker,
            %movement,
            %build,
            score = evaluation.best_score,
            ties = evaluation.best_moves.len(),
            "Heuristic choice"
        );
        Ok(Decision::new(worker, movement, build))
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Heuristic
    }
}
