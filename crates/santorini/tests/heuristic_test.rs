//! Tests for heuristic scoring and move selection.

use santorini::{
    Cell, Color, Direction, GameEngine, GameState, HeuristicStrategy, Level, RandomStrategy,
    RoundStatus, Strategy, WorkerId, distance_score, round_status, score, seeded_rng,
};

fn cell(row: i32, col: i32) -> Cell {
    Cell::new(row, col).expect("test coordinates are on the board")
}

#[test]
fn test_distance_score_far_corner() {
    let own = [cell(0, 0), cell(0, 1)];
    let opponents = [cell(4, 4), cell(4, 3)];
    // Both opponents sit four Chebyshev steps from the nearest own worker.
    assert_eq!(distance_score(&own, &opponents), 8 - (4 + 4));
}

#[test]
fn test_distance_uses_chebyshev_and_nearest_worker() {
    let own = [cell(0, 0), cell(3, 3)];
    let opponents = [cell(4, 4), cell(2, 0)];
    // (4,4) is one diagonal step from (3,3); (2,0) is two from (0,0).
    assert_eq!(distance_score(&own, &opponents), 8 - (1 + 2));
}

#[test]
fn test_opening_score_components() {
    let state = GameState::new();
    let white = score(&state, Color::White);
    assert_eq!(white.height, 0);
    // (3,1) and (1,3) are both in the ring around the center.
    assert_eq!(white.center, 2);
    // Y (1,1) and Z (3,3) are each two steps from the nearest white worker.
    assert_eq!(white.distance, 8 - (2 + 2));
    assert_eq!(white.total(), 2 * 2 + 4);
    assert_eq!(white.to_string(), "(0, 2, 4)");
}

#[test]
fn test_center_cell_scores_two() {
    let positions = [(WorkerId::A, cell(2, 2)), (WorkerId::B, cell(0, 0))];
    let mut state = GameState::with_positions(&positions).expect("free cells");
    state.board_mut().set_level(cell(2, 2), Level::Second);
    let white = score(&state, Color::White);
    assert_eq!(white.center, 2);
    assert_eq!(white.height, 2);
}

#[test]
fn test_heuristic_ties_on_raised_center() {
    let mut state = GameState::new();
    state.board_mut().set_level(cell(2, 2), Level::First);
    let RoundStatus::Continue(legal) = round_status(&state, Color::White) else {
        panic!("Opening position must continue");
    };
    let evaluation = HeuristicStrategy::evaluate(&state, Color::White, &legal)
        .expect("legal moves evaluate");
    // Either white worker can climb onto the center: 3*1 + 2*3 + 6.
    assert_eq!(evaluation.best_score, 15);
    assert_eq!(
        evaluation.best_moves,
        vec![(WorkerId::A, Direction::NE), (WorkerId::B, Direction::SW)]
    );
    // Evaluation leaves the live state alone.
    assert_eq!(state.position_of(WorkerId::A), Some(cell(3, 1)));
    assert_eq!(state.position_of(WorkerId::B), Some(cell(1, 3)));
}

#[test]
fn test_heuristic_choice_is_maximal_and_ties_are_complete() {
    for seed in 0..10 {
        let mut engine = GameEngine::new(
            Box::new(HeuristicStrategy::new(seeded_rng(Some(seed), Color::White))),
            Box::new(RandomStrategy::new(seeded_rng(Some(seed), Color::Blue))),
            false,
        );
        let mut chooser = HeuristicStrategy::new(seeded_rng(Some(seed + 100), Color::White));

        while !engine.is_over() {
            let color = engine.active_color();
            if color == Color::White
                && let RoundStatus::Continue(legal) = round_status(engine.state(), color)
            {
                let evaluation = HeuristicStrategy::evaluate(engine.state(), color, &legal)
                    .expect("legal moves evaluate");
                let max = evaluation
                    .scores
                    .iter()
                    .map(|&(_, s)| s)
                    .max()
                    .expect("legal set is non-empty");
                assert_eq!(evaluation.best_score, max);

                let expected: Vec<_> = evaluation
                    .scores
                    .iter()
                    .filter(|&&(_, s)| s == max)
                    .map(|&(pair, _)| pair)
                    .collect();
                assert_eq!(evaluation.best_moves, expected);

                let decision = chooser
                    .decide(engine.state(), color, &legal)
                    .expect("heuristic decides");
                assert!(expected.contains(&(decision.worker, decision.movement)));
            }
            engine.play_round().expect("automated play is legal");
        }
    }
}
