//! Terminal output formatting
//!
//! Display utilities for the board, keyboard and command results.

pub mod display;
pub mod formatters;

pub use display::{
    colored_row, print_game, print_grid, print_keyboard, print_score_result,
    print_simulation_result,
};
