//! Uniformly random player.

use super::{Decision, Strategy, StrategyKind};
use crate::error::GameError;
use crate::rules::{LegalActions, builds_after_move};
use crate::state::GameState;
use crate::types::Color;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Picks a legal move, then a legal build, each uniformly at random.
#[derive(Debug)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    /// Creates a random player drawing from `rng`.
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl Strategy for RandomStrategy {
    #[instrument(skip(self, state, legal), fields(options = legal.len()))]
    fn decide(
        &mut self,
        state: &GameState,
        color: Color,
        legal: &LegalActions,
    ) -> Result<Decision, GameError> {
        let nothing = GameError::NoLegalAction { color };
        let &(worker, movement) = legal.moves().choose(&mut self.rng).ok_or(nothing.clone())?;
        let builds = builds_after_move(state, worker, movement);
        let build = *builds.choose(&mut self.rng).ok_or(nothing)?;
        debug!(%worker, %movement, %build, "Random choice");
        Ok(Decision::new(worker, movement, build))
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Random
    }
}
