//! Secret word sources
//!
//! Defines the `WordSource` trait and concrete implementations.

use super::{WORDS, loader};
use crate::core::{Word, WordError};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors a word source can report
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no {length}-letter words available")]
    NoWords { length: usize },
    #[error("unusable secret word {word:?}: {source}")]
    InvalidWord {
        word: String,
        #[source]
        source: WordError,
    },
}

/// Supplies the secret word for a new game
///
/// Implementations may block; the TUI calls `fetch` off the UI thread.
pub trait WordSource: Send + Sync {
    /// Produce one secret word
    ///
    /// # Errors
    /// Returns a `SourceError` when no word can be supplied.
    fn fetch(&self) -> Result<String, SourceError>;
}

/// Picks a random word from a fixed list
#[derive(Debug, Clone)]
pub struct ListSource {
    words: Vec<Word>,
    length: usize,
}

impl ListSource {
    /// Build from `words`, keeping only those with `length` letters
    ///
    /// # Errors
    /// Returns `SourceError::NoWords` if nothing of that length remains.
    pub fn new(words: Vec<Word>, length: usize) -> Result<Self, SourceError> {
        let words = loader::of_length(words, length);
        if words.is_empty() {
            return Err(SourceError::NoWords { length });
        }
        Ok(Self { words, length })
    }

    /// Source backed by the embedded word list
    ///
    /// # Errors
    /// Returns `SourceError::NoWords` for lengths the embedded list lacks.
    pub fn embedded(length: usize) -> Result<Self, SourceError> {
        Self::new(loader::words_from_slice(WORDS), length)
    }

    /// Source backed by a word-list file
    ///
    /// # Errors
    /// Returns `SourceError::Io` if the file cannot be read, or
    /// `SourceError::NoWords` if it holds no words of `length` letters.
    pub fn from_file(path: &Path, length: usize) -> Result<Self, SourceError> {
        let words = loader::load_from_file(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::new(words, length)
    }

    /// All candidate secret words
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

impl WordSource for ListSource {
    fn fetch(&self) -> Result<String, SourceError> {
        use rand::seq::IndexedRandom;

        self.words
            .choose(&mut rand::rng())
            .map(|word| word.text().to_string())
            .ok_or(SourceError::NoWords {
                length: self.length,
            })
    }
}

/// Always returns the same word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedWord(String);

impl FixedWord {
    #[must_use]
    pub fn new(word: impl Into<String>) -> Self {
        Self(word.into())
    }
}

impl WordSource for FixedWord {
    fn fetch(&self) -> Result<String, SourceError> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn embedded_source_returns_listed_words() {
        let source = ListSource::embedded(5).unwrap();
        for _ in 0..20 {
            let word = source.fetch().unwrap();
            assert!(WORDS.contains(&word.as_str()));
        }
    }

    #[test]
    fn embedded_source_has_no_three_letter_words() {
        assert!(matches!(
            ListSource::embedded(3),
            Err(SourceError::NoWords { length: 3 })
        ));
    }

    #[test]
    fn list_source_filters_by_length() {
        let source = ListSource::new(words_from_slice(&["cat", "dog", "crane"]), 3).unwrap();
        assert_eq!(source.words().len(), 2);
        let word = source.fetch().unwrap();
        assert!(word == "cat" || word == "dog");
    }

    #[test]
    fn file_source_missing_file() {
        let result = ListSource::from_file(Path::new("/no/such/list.txt"), 5);
        assert!(matches!(result, Err(SourceError::Io { .. })));
    }

    #[test]
    fn fixed_word_repeats() {
        let source = FixedWord::new("sappy");
        assert_eq!(source.fetch().unwrap(), "sappy");
        assert_eq!(source.fetch().unwrap(), "sappy");
    }

    #[test]
    fn error_messages() {
        let err = SourceError::NoWords { length: 7 };
        assert_eq!(err.to_string(), "no 7-letter words available");
    }
}
