//! Word lists and word sources
//!
//! Provides the embedded secret-word list, file loading, and the
//! [`WordSource`] implementations a session draws secret words from.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{WORDS, WORDS_COUNT};
pub use source::{FixedWord, ListSource, SourceError, WordSource};
