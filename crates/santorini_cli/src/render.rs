//! Plain-text rendering of the board and turn banner.

use santorini::{BOARD_SIZE, BoardView, GameState, ScoreBreakdown};

const ROW_RULE: &str = "+--+--+--+--+--+";

/// Draws the board as a grid of level digits and worker letters.
///
/// ```text
/// +--+--+--+--+--+
/// |0 |0 |0 |0 |0 |
/// +--+--+--+--+--+
/// |0 |0Y|0 |0B|0 |
/// ```
pub fn board(view: &BoardView) -> String {
    let mut out = String::new();
    for row in 0..BOARD_SIZE {
        out.push_str(ROW_RULE);
        out.push('\n');
        for col in 0..BOARD_SIZE {
            let worker = view.worker_at(row, col).map_or(' ', |id| id.as_char());
            out.push_str(&format!("|{}{}", view.levels[row][col], worker));
        }
        out.push_str("|\n");
    }
    out.push_str(ROW_RULE);
    out
}

/// `Turn: N, white (AB)`, numbered from 1, with an optional score suffix.
pub fn turn_line(state: &GameState, score: Option<ScoreBreakdown>) -> String {
    let player = state.player(state.active_color());
    let mut line = format!("Turn: {}, {}", state.turn() + 1, player);
    if let Some(score) = score {
        line.push_str(&format!(", {}", score));
    }
    line
}
