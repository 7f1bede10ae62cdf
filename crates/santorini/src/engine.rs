//! Turn state machine driving two strategies over one game state.

use crate::board::BoardView;
use crate::error::GameError;
use crate::history::{Snapshot, SnapshotManager};
use crate::rules::{LegalActions, RoundStatus, round_status, validate_decision};
use crate::state::GameState;
use crate::strategy::{Decision, Strategy, StrategyKind};
use crate::types::Color;
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};

/// Where the engine is in its round cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Ready for the next round.
    AwaitingRound,
    /// A strategy is deciding.
    RoundInProgress,
    /// The game is decided.
    GameOver(Color),
}

/// What a single call to [`GameEngine::play_round`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// The active player moved and built.
    Continued(Decision),
    /// The round-start check ended the game.
    Finished {
        /// Winning color.
        winner: Color,
    },
}

/// Owns the game state and both strategies, and plays rounds.
///
/// Undo/redo is opt-in per session; without it no snapshots are kept.
#[derive(Debug)]
pub struct GameEngine {
    state: GameState,
    strategies: [Box<dyn Strategy>; 2],
    phase: Phase,
    history: Option<SnapshotManager>,
}

impl GameEngine {
    /// Creates an engine at the initial position.
    #[instrument(skip(white, blue), fields(white = %white.kind(), blue = %blue.kind()))]
    pub fn new(white: Box<dyn Strategy>, blue: Box<dyn Strategy>, undo_redo: bool) -> Self {
        Self::with_state(white, blue, undo_redo, GameState::new())
    }

    /// Creates an engine starting from an arbitrary position.
    pub fn with_state(
        white: Box<dyn Strategy>,
        blue: Box<dyn Strategy>,
        undo_redo: bool,
        state: GameState,
    ) -> Self {
        info!(undo_redo, turn = state.turn(), "Creating game engine");
        Self {
            state,
            strategies: [white, blue],
            phase: Phase::AwaitingRound,
            history: undo_redo.then(SnapshotManager::new),
        }
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Turn counter.
    pub fn turn(&self) -> u32 {
        self.state.turn()
    }

    /// Color to play next.
    pub fn active_color(&self) -> Color {
        self.state.active_color()
    }

    /// Winner, once the game is over.
    pub fn winner(&self) -> Option<Color> {
        match self.phase {
            Phase::GameOver(winner) => Some(winner),
            _ => None,
        }
    }

    /// True once a winner is known.
    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Kind of strategy seated at `color`.
    pub fn strategy_kind(&self, color: Color) -> StrategyKind {
        self.strategies[color.index()].kind()
    }

    /// Renderable board for presentation code.
    pub fn view(&self) -> BoardView {
        self.state.view()
    }

    /// Plays one round for the active player.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] if the game is already decided.
    /// - [`GameError::IllegalMove`] / [`GameError::IllegalBuild`] if the
    ///   strategy answered outside the legal set; nothing is applied.
    /// - Whatever the strategy itself reports, e.g. [`GameError::Input`].
    #[instrument(skip(self), fields(turn = self.state.turn()))]
    pub fn play_round(&mut self) -> Result<RoundOutcome, GameError> {
        if let Phase::GameOver(winner) = self.phase {
            warn!(%winner, "Round requested after game over");
            return Err(GameError::GameOver { winner });
        }

        let color = self.state.active_color();
        self.phase = Phase::RoundInProgress;

        match round_status(&self.state, color) {
            RoundStatus::Win => Ok(self.finish(color)),
            RoundStatus::Lose => Ok(self.finish(color.opponent())),
            RoundStatus::Continue(legal) => {
                let result = self.take_turn(color, &legal);
                self.phase = Phase::AwaitingRound;
                result.map(RoundOutcome::Continued)
            }
        }
    }

    fn take_turn(&mut self, color: Color, legal: &LegalActions) -> Result<Decision, GameError> {
        let strategy = &mut self.strategies[color.index()];
        let decision = strategy.decide(&self.state, color, legal)?;

        if let Err(e) = validate_decision(&self.state, legal, &decision) {
            error!(
                %color,
                %decision,
                error = %e,
                kind = %strategy.kind(),
                "Strategy chose an illegal action"
            );
            return Err(e);
        }

        self.state.move_worker(decision.worker, decision.movement)?;
        self.state.build_with(decision.worker, decision.build)?;
        self.state.advance_turn();
        info!(%color, %decision, "Round played");
        Ok(decision)
    }

    fn finish(&mut self, winner: Color) -> RoundOutcome {
        info!(%winner, turn = self.state.turn(), "Game over");
        self.phase = Phase::GameOver(winner);
        RoundOutcome::Finished { winner }
    }

    /// Plays rounds until someone wins.
    pub fn run_to_completion(&mut self) -> Result<Color, GameError> {
        loop {
            if let RoundOutcome::Finished { winner } = self.play_round()? {
                return Ok(winner);
            }
        }
    }

    /// True when the session keeps undo/redo history.
    pub fn history_enabled(&self) -> bool {
        self.history.is_some()
    }

    /// Marks the current state as a commit point before moving on.
    pub fn commit(&mut self) -> Result<(), GameError> {
        let history = self.history.as_mut().ok_or(GameError::HistoryDisabled)?;
        history.commit(Snapshot::capture(&self.state));
        Ok(())
    }

    /// Restores the previous commit point. `Ok(false)` when there is none.
    pub fn undo(&mut self) -> Result<bool, GameError> {
        let history = self.history.as_mut().ok_or(GameError::HistoryDisabled)?;
        let restored = history.undo(Snapshot::capture(&self.state));
        Ok(self.restore(restored))
    }

    /// Re-applies the most recently undone state. `Ok(false)` when there is none.
    pub fn redo(&mut self) -> Result<bool, GameError> {
        let history = self.history.as_mut().ok_or(GameError::HistoryDisabled)?;
        let restored = history.redo(Snapshot::capture(&self.state));
        Ok(self.restore(restored))
    }

    fn restore(&mut self, snapshot: Option<Snapshot>) -> bool {
        match snapshot {
            Some(snapshot) => {
                self.state = snapshot.into_state();
                self.phase = Phase::AwaitingRound;
                true
            }
            None => false,
        }
    }

    /// Number of commit points available to undo; zero without history.
    pub fn undo_depth(&self) -> usize {
        self.history.as_ref().map_or(0, SnapshotManager::undo_depth)
    }

    /// Number of undone states available to redo; zero without history.
    pub fn redo_depth(&self) -> usize {
        self.history.as_ref().map_or(0, SnapshotManager::redo_depth)
    }

    /// Starts a fresh game with the same strategies.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        self.state = GameState::new();
        self.phase = Phase::AwaitingRound;
        if let Some(history) = self.history.as_mut() {
            history.clear();
        }
    }
}
