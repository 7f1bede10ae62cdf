//! Game session loop: render, offer undo/redo, play, repeat.

use crate::config::Settings;
use crate::prompt::{self, HistoryChoice, TerminalInput};
use crate::render;
use anyhow::Result;
use santorini::{
    Color, GameEngine, HeuristicStrategy, HumanStrategy, RandomStrategy, RoundOutcome, Strategy,
    StrategyKind, score, seeded_rng,
};
use std::io::Write;
use tracing::{info, instrument};

/// Builds the strategy seated at `color`.
pub fn make_strategy(kind: StrategyKind, color: Color, seed: Option<u64>) -> Box<dyn Strategy> {
    match kind {
        StrategyKind::Human => Box::new(HumanStrategy::new(TerminalInput::new())),
        StrategyKind::Random => Box::new(RandomStrategy::new(seeded_rng(seed, color))),
        StrategyKind::Heuristic => Box::new(HeuristicStrategy::new(seeded_rng(seed, color))),
    }
}

/// Plays games until the user declines another.
#[instrument(skip(settings), fields(white = %settings.white(), blue = %settings.blue()))]
pub fn run(settings: &Settings) -> Result<()> {
    let seed = *settings.seed();
    let mut engine = GameEngine::new(
        make_strategy(*settings.white(), Color::White, seed),
        make_strategy(*settings.blue(), Color::Blue, seed),
        *settings.undo_redo(),
    );
    let show_score = *settings.score();
    let mut stdout = std::io::stdout();

    loop {
        let winner = play_game(&mut engine, show_score, &mut stdout, prompt::history_choice)?;
        info!(%winner, "Game finished");
        if !prompt::play_again()? {
            return Ok(());
        }
        engine.reset();
    }
}

/// Plays one game to the end, writing the transcript to `out`.
///
/// `choose` is consulted before each round when the engine keeps history.
pub fn play_game<W, F>(
    engine: &mut GameEngine,
    show_score: bool,
    out: &mut W,
    mut choose: F,
) -> Result<Color>
where
    W: Write,
    F: FnMut() -> Result<HistoryChoice>,
{
    loop {
        writeln!(out, "{}", render::board(&engine.view()))?;
        let state = engine.state();
        let breakdown = show_score.then(|| score(state, state.active_color()));
        writeln!(out, "{}", render::turn_line(state, breakdown))?;

        if engine.history_enabled() {
            match choose()? {
                HistoryChoice::Undo => {
                    if !engine.undo()? {
                        writeln!(out, "Nothing to undo")?;
                    }
                    continue;
                }
                HistoryChoice::Redo => {
                    if !engine.redo()? {
                        writeln!(out, "Nothing to redo")?;
                    }
                    continue;
                }
                HistoryChoice::Next => engine.commit()?,
            }
        }

        match engine.play_round()? {
            RoundOutcome::Continued(decision) => writeln!(out, "{}", decision)?,
            RoundOutcome::Finished { winner } => {
                writeln!(out, "{} has won", winner)?;
                return Ok(winner);
            }
        }
    }
}
