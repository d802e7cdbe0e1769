//! Game configuration
//!
//! Board dimensions and their defaults.

use thiserror::Error;

/// Default number of letters per word
pub const WORD_LENGTH: usize = 5;

/// Default number of guesses per game
pub const GUESSES: usize = 6;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Word length must be at least 1")]
    ZeroWordLength,
    #[error("At least one guess must be allowed")]
    ZeroGuesses,
}

/// Fixed parameters of a game: grid width and height
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    word_length: usize,
    max_guesses: usize,
}

impl GameConfig {
    /// Create a validated configuration
    ///
    /// # Errors
    /// Returns `ConfigError` if either dimension is zero.
    pub const fn new(word_length: usize, max_guesses: usize) -> Result<Self, ConfigError> {
        if word_length == 0 {
            return Err(ConfigError::ZeroWordLength);
        }
        if max_guesses == 0 {
            return Err(ConfigError::ZeroGuesses);
        }
        Ok(Self {
            word_length,
            max_guesses,
        })
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: WORD_LENGTH,
            max_guesses: GUESSES,
        }
    }
}
