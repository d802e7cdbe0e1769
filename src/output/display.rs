//! Display functions for game state and command results

use super::formatters::{create_progress_bar, end_message, share_text};
use crate::commands::{ScoreResult, SimulationResult};
use crate::core::{Cell, Feedback, KeyStatus, Keyboard, LAYOUT};
use crate::engine::GameState;
use colored::{ColoredString, Colorize};

fn colored_letter(letter: &str, feedback: Option<Feedback>) -> ColoredString {
    let text = format!(" {} ", letter.to_uppercase());
    match feedback {
        Some(Feedback::Correct) => text.black().on_green().bold(),
        Some(Feedback::Shifted) => text.black().on_yellow().bold(),
        Some(Feedback::Absent) => text.white().on_bright_black(),
        None => text.bold(),
    }
}

/// Render one grid row with background colours per cell
#[must_use]
pub fn colored_row(row: &[Cell]) -> String {
    row.iter()
        .map(|cell| {
            let letter = cell.value().map_or_else(|| "_".to_string(), String::from);
            colored_letter(&letter, cell.feedback()).to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Print every row of the board
pub fn print_grid(state: &GameState) {
    println!();
    for row in state.grid().rows() {
        println!("  {}", colored_row(row));
    }
    println!();
}

fn key_feedback(status: Option<KeyStatus>) -> Option<Feedback> {
    status.map(|status| match status {
        KeyStatus::Correct => Feedback::Correct,
        KeyStatus::Shifted => Feedback::Shifted,
        KeyStatus::Absent => Feedback::Absent,
    })
}

/// Print the keyboard with each key coloured by its best-known status
pub fn print_keyboard(keyboard: &Keyboard) {
    for (indent, row) in LAYOUT.iter().enumerate() {
        let keys: Vec<String> = row
            .iter()
            .map(|&key| {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(letter), None) => {
                        colored_letter(key, key_feedback(keyboard.status(letter))).to_string()
                    }
                    _ => format!("[{key}]").bright_black().to_string(),
                }
            })
            .collect();
        println!("{}{}", " ".repeat(indent * 2), keys.join(""));
    }
    println!();
}

/// Print the board, keyboard and, once finished, the end message
pub fn print_game(state: &GameState) {
    print_grid(state);
    print_keyboard(state.keyboard());

    if let Some(message) = end_message(state) {
        let message = if state.is_win() {
            message.bright_green().bold()
        } else {
            message.bright_red().bold()
        };
        println!("{message}\n");
        println!("{}\n", share_text(state));
    }
}

/// Print the result of the score command
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Secret: {}  Guess: {}",
        result.secret.text().to_uppercase().bright_yellow().bold(),
        result.guess.text().to_uppercase().bright_white().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    let row: String = result
        .guess
        .text()
        .chars()
        .zip(result.score.cells())
        .map(|(letter, &feedback)| {
            colored_letter(&letter.to_string(), Some(feedback)).to_string()
        })
        .collect::<Vec<_>>()
        .join(" ");

    println!("\n  {row}");
    println!("  {}\n", result.score.to_emoji());

    for (letter, status) in result.keyboard.sorted() {
        println!("  {}  {}", letter.to_ascii_uppercase(), status.name());
    }

    println!();
    if result.score.is_win() {
        println!("{}", "Exact match!".green().bold());
    } else {
        println!(
            "{} correct, {} shifted",
            result.score.count(Feedback::Correct),
            result.score.count(Feedback::Shifted)
        );
    }
}

/// Print the statistics of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let win_rate = if result.games > 0 {
        result.won as f64 / result.games as f64 * 100.0
    } else {
        0.0
    };

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.games);
    println!(
        "   Won:              {}",
        format!("{} ({win_rate:.1}%)", result.won).green()
    );
    println!("   Lost:             {}", result.lost.to_string().red());
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (index, &count) in result.distribution.iter().enumerate() {
        let pct = if result.games > 0 {
            count as f64 / result.games as f64 * 100.0
        } else {
            0.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {}: {} {count:4} ({pct:5.1}%)", index + 1, bar.green());
    }

    if !result.lost_words.is_empty() {
        println!("\n❌ {}", "Missed words:".bright_red().bold());
        println!("   {}", result.lost_words.join(", "));
    }
}
