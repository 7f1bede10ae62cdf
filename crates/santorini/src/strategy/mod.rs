//! Decision-makers behind the two seats.
//!
//! Every strategy answers the same question: given the legal
//! `(worker, direction)` pairs for this round, which worker moves where, and
//! where does it build afterwards. The engine validates the answer before
//! applying it, so strategies only read state.

mod heuristic;
mod human;
mod random;

pub use heuristic::{Evaluation, HeuristicStrategy, ScoreBreakdown, distance_score, score};
pub use human::{HumanStrategy, MoveInput};
pub use random::RandomStrategy;

use crate::error::GameError;
use crate::rules::LegalActions;
use crate::state::GameState;
use crate::types::{Color, Direction, WorkerId};
use derive_new::new;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Which kind of decision-maker occupies a seat.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
    EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Interactive player answering prompts.
    #[default]
    Human,
    /// Uniformly random legal play.
    Random,
    /// One-ply greedy scoring.
    Heuristic,
}

/// A complete turn: move one worker, then build next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Decision {
    /// Worker that moves and builds.
    pub worker: WorkerId,
    /// Direction of the move.
    pub movement: Direction,
    /// Direction of the build, relative to the worker's new cell.
    pub build: Direction,
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{}", self.worker, self.movement, self.build)
    }
}

/// Trait for anything that can choose a turn.
pub trait Strategy: std::fmt::Debug {
    /// Chooses a decision for `color` from a non-empty legal set.
    ///
    /// The state is read-only; the engine applies the returned decision.
    fn decide(
        &mut self,
        state: &GameState,
        color: Color,
        legal: &LegalActions,
    ) -> Result<Decision, GameError>;

    /// Which kind of strategy this is.
    fn kind(&self) -> StrategyKind;
}

/// RNG for an automated seat.
///
/// With a session seed the two colors get distinct but reproducible streams.
pub fn seeded_rng(seed: Option<u64>, color: Color) -> StdRng {
    match seed {
        Some(seed) => {
            let offset = color.index() as u64;
            StdRng::seed_from_u64(seed.wrapping_add(offset))
        }
        None => StdRng::from_entropy(),
    }
}
