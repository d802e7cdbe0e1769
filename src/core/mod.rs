//! Core domain types for the game
//!
//! Words, grid cells, keyboard state and the pure row-scoring algorithm.
//! Nothing here performs I/O.

mod feedback;
mod keyboard;
mod tile;
mod word;

pub use feedback::{Feedback, RowScore};
pub use keyboard::{KeyStatus, Keyboard, LAYOUT};
pub use tile::{Cell, Grid, Tag};
pub use word::{Word, WordError};
