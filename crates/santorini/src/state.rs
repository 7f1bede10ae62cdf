//! Aggregate game state: board, both players' workers and the turn counter.

use crate::board::{Board, BoardView};
use crate::error::GameError;
use crate::types::{Action, Cell, Color, Direction, WorkerId};
use crate::worker::Worker;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::instrument;

/// The cloneable half of a player: color and the two workers it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    color: Color,
    workers: [Worker; 2],
}

impl PlayerState {
    /// Places both workers of `color` on their starting cells.
    pub fn new(color: Color, board: &mut Board) -> Self {
        let [first, second] = color.worker_ids();
        let [first_cell, second_cell] = color.starting_cells();
        Self {
            color,
            workers: [
                Worker::spawn(first, color, first_cell, board),
                Worker::spawn(second, color, second_cell, board),
            ],
        }
    }

    /// Player color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Both workers.
    pub fn workers(&self) -> &[Worker; 2] {
        &self.workers
    }

    /// Looks up an owned worker.
    pub fn worker(&self, id: WorkerId) -> Option<&Worker> {
        self.workers.iter().find(|w| w.id() == id)
    }

    fn worker_mut(&mut self, id: WorkerId) -> Option<&mut Worker> {
        self.workers.iter_mut().find(|w| w.id() == id)
    }
}

impl std::fmt::Display for PlayerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [first, second] = &self.workers;
        write!(f, "{} ({}{})", self.color, first.id(), second.id())
    }
}

/// Everything a snapshot has to capture.
///
/// All fields are owned values, so `clone` yields a fully independent copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    players: [PlayerState; 2],
    turn: u32,
}

impl GameState {
    /// Initial position: empty board, workers on their starting cells, turn 0.
    #[instrument]
    pub fn new() -> Self {
        let mut board = Board::new();
        let players = [
            PlayerState::new(Color::White, &mut board),
            PlayerState::new(Color::Blue, &mut board),
        ];
        Self {
            board,
            players,
            turn: 0,
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for setting up positions.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// State of one player.
    pub fn player(&self, color: Color) -> &PlayerState {
        &self.players[color.index()]
    }

    /// Turn counter; even turns belong to white.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Color whose turn it is.
    pub fn active_color(&self) -> Color {
        Color::for_turn(self.turn)
    }

    pub(crate) fn advance_turn(&mut self) {
        self.turn += 1;
    }

    /// Looks up any worker on the board.
    pub fn worker(&self, id: WorkerId) -> Option<&Worker> {
        self.player(id.color()).worker(id)
    }

    /// Current cell of a worker.
    pub fn position_of(&self, id: WorkerId) -> Option<Cell> {
        self.worker(id).map(Worker::cell)
    }

    /// Legal directions for `action` from a worker's current cell.
    pub fn legal_destinations(&self, id: WorkerId, action: Action) -> Vec<Direction> {
        self.worker(id)
            .map(|w| w.legal_destinations(&self.board, action))
            .unwrap_or_default()
    }

    /// Places the workers named in `positions` on the given cells, starting
    /// from the initial position. Workers not named keep their start cell.
    ///
    /// # Errors
    ///
    /// [`GameError::Occupied`] if two workers would end up on one cell.
    #[instrument]
    pub fn with_positions(positions: &[(WorkerId, Cell)]) -> Result<Self, GameError> {
        let mut state = Self::new();
        let mut target: BTreeMap<WorkerId, Cell> = state.board.workers().collect();
        target.extend(positions.iter().copied());

        for &(worker, cell) in positions {
            let mut others = target.iter().filter(|&(&other, _)| other != worker);
            if others.any(|(_, &at)| at == cell) {
                return Err(GameError::Occupied { worker, cell });
            }
        }
        for (id, cell) in target {
            state.place_worker(id, cell);
        }
        Ok(state)
    }

    /// Moves a worker without checking the rules, returning the cell it left.
    ///
    /// # Errors
    ///
    /// [`GameError::IllegalMove`] if the worker is unknown or the step leaves
    /// the board; nothing changes in that case.
    pub fn move_worker(&mut self, id: WorkerId, direction: Direction) -> Result<Cell, GameError> {
        let Self { board, players, .. } = self;
        players[id.color().index()]
            .worker_mut(id)
            .and_then(|worker| worker.move_to(board, direction))
            .ok_or(GameError::IllegalMove {
                worker: id,
                direction,
            })
    }

    /// Puts a worker back onto `cell`, reverting a tentative move.
    pub(crate) fn place_worker(&mut self, id: WorkerId, cell: Cell) {
        let Self { board, players, .. } = self;
        if let Some(worker) = players[id.color().index()].worker_mut(id) {
            worker.place_at(board, cell);
        }
    }

    /// Builds next to a worker without validation.
    pub fn build_with(&mut self, id: WorkerId, direction: Direction) -> Result<(), GameError> {
        let Self { board, players, .. } = self;
        let worker = players[id.color().index()]
            .worker(id)
            .ok_or(GameError::IllegalBuild {
                worker: id,
                direction,
            })?;
        worker.build_at(board, direction);
        Ok(())
    }

    /// Renderable board state.
    pub fn view(&self) -> BoardView {
        self.board.view()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_positions() {
        let state = GameState::new();
        let at = |r, c| Cell::new(r, c).unwrap();
        assert_eq!(state.position_of(WorkerId::A), Some(at(3, 1)));
        assert_eq!(state.position_of(WorkerId::B), Some(at(1, 3)));
        assert_eq!(state.position_of(WorkerId::Y), Some(at(1, 1)));
        assert_eq!(state.position_of(WorkerId::Z), Some(at(3, 3)));
        assert_eq!(state.board().workers().count(), 4);
        assert_eq!(state.turn(), 0);
        assert_eq!(state.active_color(), Color::White);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut live = GameState::new();
        let copy = live.clone();
        live.move_worker(WorkerId::A, Direction::N).unwrap();
        live.build_with(WorkerId::A, Direction::S).unwrap();
        live.advance_turn();
        assert_eq!(copy, GameState::new());
        assert_ne!(copy, live);
    }

    #[test]
    fn test_player_display() {
        let state = GameState::new();
        assert_eq!(state.player(Color::White).to_string(), "white (AB)");
        assert_eq!(state.player(Color::Blue).to_string(), "blue (YZ)");
    }

    #[test]
    fn test_with_positions_rejects_occupied_cell() {
        let at = |r, c| Cell::new(r, c).unwrap();
        // Y starts on (1,1).
        let result = GameState::with_positions(&[(WorkerId::A, at(1, 1))]);
        assert_eq!(
            result,
            Err(GameError::Occupied {
                worker: WorkerId::A,
                cell: at(1, 1),
            })
        );

        let stacked = [(WorkerId::A, at(0, 0)), (WorkerId::Z, at(0, 0))];
        let result = GameState::with_positions(&stacked);
        assert!(matches!(result, Err(GameError::Occupied { .. })));
    }

    #[test]
    fn test_with_positions_allows_vacated_cells() {
        let at = |r, c| Cell::new(r, c).unwrap();
        let positions = [(WorkerId::A, at(1, 1)), (WorkerId::Y, at(0, 4))];
        let state = GameState::with_positions(&positions).unwrap();
        assert_eq!(state.position_of(WorkerId::A), Some(at(1, 1)));
        assert_eq!(state.position_of(WorkerId::Y), Some(at(0, 4)));
        assert_eq!(state.board().worker_at(at(1, 1)), Some(WorkerId::A));
        assert_eq!(state.board().worker_at(at(3, 1)), None);
        assert_eq!(state.board().workers().count(), 4);
    }

    #[test]
    fn test_move_off_board_is_rejected() {
        let at = |r, c| Cell::new(r, c).unwrap();
        let positions = [(WorkerId::A, at(0, 0))];
        let mut state = GameState::with_positions(&positions).unwrap();
        let before = state.clone();
        assert_eq!(
            state.move_worker(WorkerId::A, Direction::N),
            Err(GameError::IllegalMove {
                worker: WorkerId::A,
                direction: Direction::N,
            })
        );
        assert_eq!(state, before);
        assert_eq!(state.position_of(WorkerId::A), Some(at(0, 0)));
    }
}
