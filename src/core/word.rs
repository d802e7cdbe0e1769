//! Word representation
//!
//! A Word stores a lowercase ASCII word along with per-letter occurrence counts
//! used by row scoring.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// A validated lowercase word of any non-zero length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letter_counts: FxHashMap<u8, usize>,
}

/// Error type for invalid words
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("Word must contain only ASCII letters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// ASCII letters are accepted in either case and stored lowercase.
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty or contains anything other
    /// than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("Sappy").unwrap();
    /// assert_eq!(word.text(), "sappy");
    /// assert_eq!(word.count_of(b'p'), 2);
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let mut text: String = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        // Checked before lowercasing: some non-ASCII letters lowercase to ASCII
        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }
        text.make_ascii_lowercase();

        let mut letter_counts: FxHashMap<u8, usize> = FxHashMap::default();
        for &letter in text.as_bytes() {
            *letter_counts.entry(letter).or_insert(0) += 1;
        }

        Ok(Self {
            text,
            letter_counts,
        })
    }

    /// Create a Word that must have exactly `length` letters
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` on a length mismatch, or any error
    /// from [`Word::new`].
    pub fn with_length(text: impl Into<String>, length: usize) -> Result<Self, WordError> {
        let word = Self::new(text)?;
        if word.len() != length {
            return Err(WordError::InvalidLength {
                expected: length,
                actual: word.len(),
            });
        }
        Ok(word)
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes (always ASCII lowercase)
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed Word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.as_bytes()[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letter_counts.contains_key(&letter)
    }

    /// How many times `letter` occurs in the word
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.letter_counts.get(&letter).copied().unwrap_or(0)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.as_bytes(), b"crane");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "crane");

        let word2 = Word::new("CrAnE").unwrap();
        assert_eq!(word2.text(), "crane");
    }

    #[test]
    fn word_creation_other_lengths() {
        assert_eq!(Word::new("cat").unwrap().len(), 3);
        assert_eq!(Word::new("elephant").unwrap().len(), 8);
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran "), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran!"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("crâne"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_rejects_letters_that_lowercase_to_ascii() {
        // Kelvin sign and dotted capital I
        assert_eq!(Word::new("\u{212A}nots"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("\u{0130}ndex"), Err(WordError::InvalidCharacters));
        assert_eq!(
            Word::with_length("\u{212A}nots", 5),
            Err(WordError::InvalidCharacters)
        );
    }

    #[test]
    fn word_with_length() {
        assert!(Word::with_length("sappy", 5).is_ok());
        assert_eq!(
            Word::with_length("sap", 5),
            Err(WordError::InvalidLength {
                expected: 5,
                actual: 3
            })
        );
        assert_eq!(Word::with_length("", 5), Err(WordError::Empty));
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.char_at(0), b'c');
        assert_eq!(word.char_at(4), b'e');
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("crane").unwrap();
        assert!(word.has_letter(b'c'));
        assert!(word.has_letter(b'a'));
        assert!(!word.has_letter(b'z'));
    }

    #[test]
    fn word_count_of_duplicates() {
        let word = Word::new("robot").unwrap();
        assert_eq!(word.count_of(b'o'), 2);
        assert_eq!(word.count_of(b'r'), 1);
        assert_eq!(word.count_of(b'z'), 0);

        let word = Word::new("aaaaa").unwrap();
        assert_eq!(word.count_of(b'a'), 5);
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("crane").unwrap();
        let word2 = Word::new("CRANE").unwrap();
        let word3 = Word::new("slate").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }
}
