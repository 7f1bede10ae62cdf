//! Tests for snapshot undo/redo through the engine.

use santorini::{Color, GameEngine, GameError, GameState, Phase, RandomStrategy, seeded_rng};

fn engine(seed: u64, undo_redo: bool) -> GameEngine {
    GameEngine::new(
        Box::new(RandomStrategy::new(seeded_rng(Some(seed), Color::White))),
        Box::new(RandomStrategy::new(seeded_rng(Some(seed), Color::Blue))),
        undo_redo,
    )
}

/// Commits, then plays one round, the way an interactive session advances.
fn step(engine: &mut GameEngine) {
    engine.commit().expect("history enabled");
    engine.play_round().expect("random play is legal");
}

#[test]
fn test_undo_then_redo_restores_exact_state() {
    let mut engine = engine(9, true);
    step(&mut engine);
    step(&mut engine);
    let after_two = engine.state().clone();

    assert!(engine.undo().expect("history enabled"));
    assert_eq!(engine.turn(), 1);
    assert_ne!(engine.state(), &after_two);

    assert!(engine.redo().expect("history enabled"));
    assert_eq!(engine.state(), &after_two);
    assert_eq!(engine.redo_depth(), 0);
}

#[test]
fn test_commit_discards_redo() {
    let mut engine = engine(4, true);
    step(&mut engine);
    assert!(engine.undo().expect("history enabled"));
    assert_eq!(engine.redo_depth(), 1);

    engine.commit().expect("history enabled");
    assert_eq!(engine.redo_depth(), 0);
    assert!(!engine.redo().expect("history enabled"));
}

#[test]
fn test_undo_to_start_and_back() {
    let mut engine = engine(21, true);
    let mut states = vec![engine.state().clone()];
    for _ in 0..4 {
        step(&mut engine);
        states.push(engine.state().clone());
    }

    for expected in states.iter().rev().skip(1) {
        assert!(engine.undo().expect("history enabled"));
        assert_eq!(engine.state(), expected);
    }
    assert_eq!(engine.state(), &GameState::new());
    assert!(!engine.undo().expect("history enabled"));
    assert_eq!(engine.state(), &GameState::new());

    for expected in states.iter().skip(1) {
        assert!(engine.redo().expect("history enabled"));
        assert_eq!(engine.state(), expected);
    }
    assert!(!engine.redo().expect("history enabled"));
}

#[test]
fn test_undo_reopens_finished_game() {
    let mut engine = engine(13, true);
    while !engine.is_over() {
        step(&mut engine);
    }
    let final_state = engine.state().clone();

    assert!(engine.undo().expect("history enabled"));
    assert_eq!(engine.phase(), Phase::AwaitingRound);
    assert!(!engine.is_over());
    // The terminal round only classified the position, so the state is unchanged.
    assert_eq!(engine.state(), &final_state);
}

#[test]
fn test_history_disabled_rejects_requests() {
    let mut engine = engine(1, false);
    assert!(!engine.history_enabled());
    assert!(matches!(engine.commit(), Err(GameError::HistoryDisabled)));
    assert!(matches!(engine.undo(), Err(GameError::HistoryDisabled)));
    assert!(matches!(engine.redo(), Err(GameError::HistoryDisabled)));

    engine.play_round().expect("random play is legal");
    assert_eq!(engine.turn(), 1);
    assert_eq!(engine.undo_depth(), 0);
}
