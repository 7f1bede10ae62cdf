//! Terminal prompts for human players and session control.

use anyhow::Result;
use dialoguer::{Confirm, Input};
use santorini::{Color, Direction, GameError, MoveInput, WorkerId};
use std::str::FromStr;
use strum::{Display, EnumString};
use tracing::{debug, instrument};

/// What to do before the next round when undo/redo is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum HistoryChoice {
    /// Step back to the previous commit point.
    Undo,
    /// Re-apply the last undone round.
    Redo,
    /// Commit and play the round.
    Next,
}

/// Reads worker and direction choices from the terminal.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    /// Creates a terminal input source.
    pub fn new() -> Self {
        Self
    }
}

fn check_worker(raw: &str, color: Color, legal: &[WorkerId]) -> Result<WorkerId, String> {
    let mut chars = raw.trim().chars();
    let id = match (chars.next(), chars.next()) {
        (Some(letter), None) => WorkerId::from_char(letter),
        _ => None,
    }
    .ok_or_else(|| "Not a valid worker".to_string())?;

    if id.color() != color {
        return Err("That is not your worker".to_string());
    }
    if !legal.contains(&id) {
        return Err(format!("Worker {} cannot move", id));
    }
    Ok(id)
}

fn check_direction(raw: &str, verb: &str, legal: &[Direction]) -> Result<Direction, String> {
    let direction = Direction::from_str(raw.trim())
        .map_err(|_| "Not a valid direction".to_string())?;
    if legal.contains(&direction) {
        Ok(direction)
    } else {
        Err(format!("Cannot {} {}", verb, direction))
    }
}

fn ask<T>(prompt: &str, check: impl Fn(&str) -> Result<T, String>) -> Result<T, GameError> {
    let raw: String = Input::new()
        .with_prompt(prompt)
        .validate_with(|raw: &String| check(raw).map(|_| ()))
        .interact_text()
        .map_err(|e| GameError::Input {
            message: e.to_string(),
        })?;
    check(&raw).map_err(|message| GameError::Input { message })
}

impl MoveInput for TerminalInput {
    #[instrument(skip(self))]
    fn choose_worker(&mut self, color: Color, legal: &[WorkerId]) -> Result<WorkerId, GameError> {
        ask("Select a worker to move", |raw| check_worker(raw, color, legal))
    }

    #[instrument(skip(self))]
    fn choose_move(
        &mut self,
        worker: WorkerId,
        legal: &[Direction],
    ) -> Result<Direction, GameError> {
        ask("Select a direction to move (n, ne, e, se, s, sw, w, nw)", |raw| {
            check_direction(raw, "move", legal)
        })
    }

    #[instrument(skip(self))]
    fn choose_build(
        &mut self,
        worker: WorkerId,
        legal: &[Direction],
    ) -> Result<Direction, GameError> {
        ask("Select a direction to build (n, ne, e, se, s, sw, w, nw)", |raw| {
            check_direction(raw, "build", legal)
        })
    }
}

/// Asks `undo, redo, or next` until one of the three is typed.
pub fn history_choice() -> Result<HistoryChoice> {
    let raw: String = Input::new()
        .with_prompt("undo, redo, or next")
        .validate_with(|raw: &String| {
            HistoryChoice::from_str(raw.trim())
                .map(|_| ())
                .map_err(|_| "Type undo, redo, or next")
        })
        .interact_text()?;
    let choice = HistoryChoice::from_str(raw.trim())?;
    debug!(%choice, "History choice");
    Ok(choice)
}

/// Asks whether to start another game.
pub fn play_again() -> Result<bool> {
    let again = Confirm::new()
        .with_prompt("Play again?")
        .default(false)
        .interact()?;
    Ok(again)
}
