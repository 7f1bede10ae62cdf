//! Interactive player driven by an external input source.

use super::{Decision, Strategy, StrategyKind};
use crate::error::GameError;
use crate::rules::{LegalActions, builds_after_move};
use crate::state::GameState;
use crate::types::{Color, Direction, WorkerId};
use tracing::{info, instrument, warn};

/// Source of human answers: a terminal, a test script, a UI.
///
/// Each query carries the legal set. Implementations may return anything;
/// [`HumanStrategy`] re-asks until the answer is inside the set.
pub trait MoveInput: std::fmt::Debug {
    /// Picks a worker to move.
    fn choose_worker(&mut self, color: Color, legal: &[WorkerId]) -> Result<WorkerId, GameError>;

    /// Picks a move direction for `worker`.
    fn choose_move(
        &mut self,
        worker: WorkerId,
        legal: &[Direction],
    ) -> Result<Direction, GameError>;

    /// Picks a build direction for `worker` from its new cell.
    fn choose_build(
        &mut self,
        worker: WorkerId,
        legal: &[Direction],
    ) -> Result<Direction, GameError>;
}

/// Human player asking a [`MoveInput`] for each part of the turn.
#[derive(Debug)]
pub struct HumanStrategy<I> {
    input: I,
}

impl<I: MoveInput> HumanStrategy<I> {
    /// Creates a human player reading from `input`.
    pub fn new(input: I) -> Self {
        Self { input }
    }

    /// The underlying input source.
    pub fn input(&self) -> &I {
        &self.input
    }
}

/// Repeats `ask` until it yields a member of `legal`.
fn ask_until_legal<T, F>(legal: &[T], what: &str, mut ask: F) -> Result<T, GameError>
where
    T: Copy + PartialEq + std::fmt::Display,
    F: FnMut(&[T]) -> Result<T, GameError>,
{
    loop {
        let answer = ask(legal)?;
        if legal.contains(&answer) {
            return Ok(answer);
        }
        warn!(%answer, what, "Answer outside the legal set, asking again");
    }
}

impl<I: MoveInput> Strategy for HumanStrategy<I> {
    #[instrument(skip(self, state, legal))]
    fn decide(
        &mut self,
        state: &GameState,
        color: Color,
        legal: &LegalActions,
    ) -> Result<Decision, GameError> {
        if legal.is_empty() {
            return Err(GameError::NoLegalAction { color });
        }
        let input = &mut self.input;

        let workers = legal.workers();
        let worker = ask_until_legal(&workers, "worker", |ids| input.choose_worker(color, ids))?;
        let moves = legal.directions_for(worker);
        let movement = ask_until_legal(&moves, "move", |dirs| input.choose_move(worker, dirs))?;
        let builds = builds_after_move(state, worker, movement);
        let build = ask_until_legal(&builds, "build", |dirs| input.choose_build(worker, dirs))?;

        info!(%worker, %movement, %build, "Human choice");
        Ok(Decision::new(worker, movement, build))
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Human
    }
}
