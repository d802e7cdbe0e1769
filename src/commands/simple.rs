//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: each line is typed into the session one
//! letter at a time and then submitted.

use crate::engine::{FetchOutcome, Outcome, Session};
use crate::output::print_game;
use crate::wordlists::WordSource;
use anyhow::{Context, Result, anyhow};
use colored::Colorize;
use std::io::{self, Write};

/// What a single line of input did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAction {
    Quit,
    NewGame,
    /// Empty line; nothing happened
    Blank,
    /// The row was not full, so the typed letters were erased again
    TooShort,
    /// More letters than the row holds; nothing was typed
    TooLong,
    /// The row was submitted
    Played(Outcome),
}

/// Apply one line of user input to the session
pub fn play_line(session: &mut Session, line: &str) -> LineAction {
    let input = line.trim().to_lowercase();

    match input.as_str() {
        "" => return LineAction::Blank,
        "quit" | "q" | "exit" => return LineAction::Quit,
        "new" | "n" => return LineAction::NewGame,
        _ => {}
    }

    let letters = input.chars().filter(char::is_ascii_alphabetic).count();
    if letters > session.config().word_length() {
        return LineAction::TooLong;
    }

    for ch in input.chars() {
        session.input_letter(ch);
    }

    match session.submit_guess() {
        Outcome::Ignored => {
            while session.delete_letter() == Outcome::Edited {}
            LineAction::TooShort
        }
        outcome => LineAction::Played(outcome),
    }
}

/// Load a new secret word, turning a failed fetch into an error
fn start_game(session: &mut Session, source: &dyn WordSource) -> Result<()> {
    if session.load(source) == FetchOutcome::Ready {
        return Ok(());
    }
    Err(session
        .last_error()
        .map_or_else(|| anyhow!("Could not load a secret word"), |e| anyhow!("{e}")))
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or no secret
/// word can be fetched.
pub fn run_simple(session: &mut Session, source: &dyn WordSource) -> Result<()> {
    let width = session.config().word_length();
    let guesses = session.config().max_guesses();

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                      Wordle - Simple Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Guess the {width}-letter word in {guesses} tries.");
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    start_game(session, source)?;

    loop {
        let Some(line) = get_user_input("Guess")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match play_line(session, &line) {
            LineAction::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            LineAction::NewGame => {
                start_game(session, source)?;
                println!("\n🔄 New game started!\n");
            }
            LineAction::Blank => {}
            LineAction::TooShort => {
                println!("{}", format!("Not enough letters, need {width}").yellow());
            }
            LineAction::TooLong => {
                println!("{}", format!("Too many letters, need {width}").yellow());
            }
            LineAction::Played(outcome) => {
                if let Some(state) = session.state() {
                    print_game(state);
                }
                if outcome.ends_game() && !play_again(session, source)? {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }
    }
}

fn play_again(session: &mut Session, source: &dyn WordSource) -> Result<bool> {
    let answer = get_user_input("Play again? (yes/no)")?.unwrap_or_default();
    if matches!(answer.to_lowercase().as_str(), "yes" | "y") {
        start_game(session, source)?;
        println!("\n🔄 New game started!\n");
        Ok(true)
    } else {
        Ok(false)
    }
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("failed to read from stdin")?;

    Ok((read > 0).then(|| input.trim().to_string()))
}
