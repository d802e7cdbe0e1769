//! Formatting utilities for terminal output

use crate::core::{Cell, Feedback};
use crate::engine::{GameState, GameStatus};

/// Format a scored row as emoji string; unscored cells render as ⬛
#[must_use]
pub fn row_to_emoji(row: &[Cell]) -> String {
    row.iter()
        .map(|cell| cell.feedback().map_or('⬛', Feedback::emoji))
        .collect()
}

/// Spoiler-free summary of a finished game, e.g. "3/6" followed by one
/// emoji line per submitted row
#[must_use]
pub fn share_text(state: &GameState) -> String {
    let height = state.grid().height();
    let used = state.guesses_used();
    let tally = if state.status() == GameStatus::Won {
        format!("{used}/{height}")
    } else {
        format!("X/{height}")
    };

    let rows: Vec<String> = state
        .grid()
        .rows()
        .take(used)
        .map(row_to_emoji)
        .collect();

    format!("{tally}\n\n{}", rows.join("\n"))
}

/// Message shown once a game has ended
#[must_use]
pub fn end_message(state: &GameState) -> Option<String> {
    match state.status() {
        GameStatus::Playing => None,
        GameStatus::Won => Some("YOU GOT IT!".to_string()),
        GameStatus::Lost => state
            .revealed_secret()
            .map(|secret| format!("Sorry, it was \"{secret}\"")),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
