//! Wordle Game
//!
//! A Wordle guess engine with a terminal UI, a line-based mode and batch
//! simulation.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::config::GameConfig;
//! use wordle_game::core::Word;
//! use wordle_game::engine::{GuessEngine, Outcome};
//!
//! let secret = Word::new("robot").unwrap();
//! let mut engine = GuessEngine::new(GameConfig::default(), secret).unwrap();
//!
//! for ch in "boors".chars() {
//!     engine.input_letter(ch);
//! }
//! assert_eq!(engine.submit_guess(), Outcome::Scored);
//! assert_eq!(engine.state().cursor(), (1, 0));
//! ```

// Game dimensions
pub mod config;

// Core domain types
pub mod core;

// Guess engine and session
pub mod engine;

// Word lists and secret word sources
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Log subscriber setup
pub mod logging;
