//! Tests for board legality and round-start classification.

use santorini::{
    Action, Cell, Color, Direction, GameEngine, GameError, GameState, Level, RandomStrategy,
    RoundOutcome, RoundStatus, WorkerId, builds_after_move, round_status, seeded_rng,
};
use strum::IntoEnumIterator;

fn cell(row: i32, col: i32) -> Cell {
    Cell::new(row, col).expect("test coordinates are on the board")
}

fn random_engine(seed: u64) -> GameEngine {
    GameEngine::new(
        Box::new(RandomStrategy::new(seeded_rng(Some(seed), Color::White))),
        Box::new(RandomStrategy::new(seeded_rng(Some(seed), Color::Blue))),
        false,
    )
}

/// Checks every worker's move rules against a direct reading of the board.
fn assert_move_rules_hold(state: &GameState) {
    let board = state.board();
    for id in WorkerId::ALL {
        let from = state.position_of(id).expect("all workers are placed");
        let legal = state.legal_destinations(id, Action::Move);
        for direction in Direction::iter() {
            let Some(to) = from.step(direction) else {
                assert!(!legal.contains(&direction), "{id} may not leave the board");
                continue;
            };
            let (here, there) = (board.level_at(from), board.level_at(to));
            let climb_ok = there.height() <= here.height() + 1;
            let expected = !board.is_occupied(to) && !there.is_dome() && climb_ok;
            let allowed = legal.contains(&direction);
            assert_eq!(allowed, expected, "{id} moving {direction} from {from}");
        }
    }
}

#[test]
fn test_move_rules_hold_across_random_games() {
    for seed in 0..20 {
        let mut engine = random_engine(seed);
        loop {
            assert_move_rules_hold(engine.state());
            let outcome = engine.play_round().expect("random play is legal");
            if let RoundOutcome::Finished { .. } = outcome {
                break;
            }
        }
    }
}

#[test]
fn test_every_legal_move_leaves_a_build() {
    for seed in 0..20 {
        let mut engine = random_engine(seed);
        while !engine.is_over() {
            let color = engine.active_color();
            if let RoundStatus::Continue(legal) = round_status(engine.state(), color) {
                for &(worker, direction) in legal.moves() {
                    let builds = builds_after_move(engine.state(), worker, direction);
                    let context = format!("{worker} moving {direction}");
                    assert!(!builds.is_empty(), "{context} must leave a build");
                }
            }
            engine.play_round().expect("random play is legal");
        }
    }
}

#[test]
fn test_move_north_then_build_north() {
    // Clear (1,1) so A can build there.
    let positions = [(WorkerId::Y, cell(0, 4))];
    let mut state = GameState::with_positions(&positions).expect("free cells");

    let origin = state.move_worker(WorkerId::A, Direction::N).expect("A exists");
    assert_eq!(origin, cell(3, 1));
    let builds = state.legal_destinations(WorkerId::A, Action::Build);
    assert!(builds.contains(&Direction::N));
    state.build_with(WorkerId::A, Direction::N).expect("A exists");

    assert_eq!(state.board().level_at(cell(1, 1)), Level::First);
    assert_eq!(state.position_of(WorkerId::A), Some(cell(2, 1)));
    assert_eq!(state.board().position_of(WorkerId::A), Some(cell(2, 1)));
}

#[test]
fn test_worker_on_third_level_wins_before_moving() {
    let mut state = GameState::new();
    state.board_mut().set_level(cell(3, 1), Level::Third);
    assert_eq!(round_status(&state, Color::White), RoundStatus::Win);

    let mut engine = GameEngine::with_state(
        Box::new(RandomStrategy::new(seeded_rng(Some(1), Color::White))),
        Box::new(RandomStrategy::new(seeded_rng(Some(1), Color::Blue))),
        false,
        state.clone(),
    );
    assert_eq!(
        engine.play_round().expect("round runs"),
        RoundOutcome::Finished {
            winner: Color::White,
        }
    );
    // No move was attempted.
    assert_eq!(engine.state(), &state);
}

#[test]
fn test_boxed_in_player_loses() {
    let positions = [
        (WorkerId::A, cell(0, 0)),
        (WorkerId::B, cell(4, 4)),
        (WorkerId::Y, cell(1, 0)),
        (WorkerId::Z, cell(2, 2)),
    ];
    let mut state = GameState::with_positions(&positions).expect("free cells");
    let board = state.board_mut();
    // A: one neighbour is a worker, one a dome, one too tall.
    board.set_level(cell(0, 1), Level::Dome);
    board.set_level(cell(1, 1), Level::Second);
    // B: all three neighbours capped.
    for c in [cell(3, 4), cell(4, 3), cell(3, 3)] {
        board.set_level(c, Level::Dome);
    }

    assert_eq!(round_status(&state, Color::White), RoundStatus::Lose);
    let blue = round_status(&state, Color::Blue);
    assert!(matches!(blue, RoundStatus::Continue(_)));

    let mut engine = GameEngine::with_state(
        Box::new(RandomStrategy::new(seeded_rng(Some(1), Color::White))),
        Box::new(RandomStrategy::new(seeded_rng(Some(1), Color::Blue))),
        false,
        state,
    );
    assert_eq!(
        engine.play_round().expect("round runs"),
        RoundOutcome::Finished {
            winner: Color::Blue,
        }
    );
    assert_eq!(engine.winner(), Some(Color::Blue));
}

#[test]
fn test_climbing_one_level_is_allowed() {
    let mut state = GameState::new();
    state.board_mut().set_level(cell(2, 1), Level::First);
    state.board_mut().set_level(cell(2, 2), Level::Second);
    let moves = state.legal_destinations(WorkerId::A, Action::Move);
    assert!(moves.contains(&Direction::N));
    assert!(!moves.contains(&Direction::NE));
}

#[test]
fn test_setup_onto_occupied_cell_is_rejected() {
    // Y starts on (1,1).
    let positions = [(WorkerId::A, cell(1, 1))];
    assert_eq!(
        GameState::with_positions(&positions),
        Err(GameError::Occupied {
            worker: WorkerId::A,
            cell: cell(1, 1),
        })
    );

    // Moving Y away first frees the cell.
    let positions = [(WorkerId::Y, cell(0, 0)), (WorkerId::A, cell(1, 1))];
    let state = GameState::with_positions(&positions).expect("free cells");
    assert_eq!(state.board().worker_at(cell(1, 1)), Some(WorkerId::A));
    assert_move_rules_hold(&state);
}
