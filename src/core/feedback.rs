//! Row scoring
//!
//! Scores a guess against the secret word in two passes:
//! 1. Exact matches are marked correct and counted per letter; letters that
//!    occur elsewhere in the secret have their columns recorded; letters not
//!    in the secret mark their key absent.
//! 2. For each recorded letter, the leftover occurrences in the secret
//!    (total minus exact matches) are handed out as shifted marks in column
//!    order. Repeats past that budget stay plain guessed.

use super::{KeyStatus, Word};
use rustc_hash::FxHashMap;

/// Colour of one scored cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Right letter, right position (green)
    Correct,
    /// Letter occurs elsewhere in the secret (yellow)
    Shifted,
    /// Letter absent, or a repeat beyond the secret's count (gray)
    Absent,
}

impl Feedback {
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Shifted => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Parse one feedback symbol: G/🟩, Y/🟨, or -/_/⬜
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Shifted),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Result of scoring one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowScore {
    cells: Vec<Feedback>,
    key_updates: Vec<(char, KeyStatus)>,
    exact_matches: usize,
}

impl RowScore {
    /// Score `guess` against `secret`
    ///
    /// Both words are expected to have the same length; extra letters of the
    /// longer one are ignored.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, RowScore, Word};
    ///
    /// let secret = Word::new("robot").unwrap();
    /// let guess = Word::new("boors").unwrap();
    /// let score = RowScore::calculate(&guess, &secret);
    ///
    /// // b(yellow) o(green) o(yellow) r(yellow) s(gray)
    /// assert_eq!(score.to_emoji(), "🟨🟩🟨🟨⬜");
    /// assert!(!score.is_win());
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        debug_assert_eq!(guess.len(), secret.len(), "guess and secret lengths differ");

        let width = guess.len().min(secret.len());
        let mut cells = vec![Feedback::Absent; width];
        let mut key_updates = Vec::with_capacity(width);
        let mut exact_matches = 0;

        let mut correct_counts: FxHashMap<u8, usize> = FxHashMap::default();
        let mut shifted_positions: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        // First-seen order of letters with shifted candidates
        let mut shifted_letters: Vec<u8> = Vec::new();

        // First pass: exact matches and absent letters
        for (i, (&letter, &target)) in guess.as_bytes().iter().zip(secret.as_bytes()).enumerate() {
            if letter == target {
                cells[i] = Feedback::Correct;
                *correct_counts.entry(letter).or_insert(0) += 1;
                exact_matches += 1;
                key_updates.push((char::from(letter), KeyStatus::Correct));
            } else if secret.has_letter(letter) {
                shifted_positions
                    .entry(letter)
                    .or_insert_with(|| {
                        shifted_letters.push(letter);
                        Vec::new()
                    })
                    .push(i);
            } else {
                key_updates.push((char::from(letter), KeyStatus::Absent));
            }
        }

        // Second pass: hand out shifted marks up to the leftover count
        for letter in shifted_letters {
            let matched = correct_counts.get(&letter).copied().unwrap_or(0);
            let budget = secret.count_of(letter).saturating_sub(matched);
            key_updates.push((char::from(letter), KeyStatus::Shifted));

            if let Some(positions) = shifted_positions.get(&letter) {
                for &i in positions.iter().take(budget) {
                    cells[i] = Feedback::Shifted;
                }
            }
        }

        Self {
            cells,
            key_updates,
            exact_matches,
        }
    }

    /// Per-cell feedback, left to right
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Feedback] {
        &self.cells
    }

    /// Keyboard updates in the order scoring produces them
    #[inline]
    #[must_use]
    pub fn key_updates(&self) -> &[(char, KeyStatus)] {
        &self.key_updates
    }

    /// Number of exact-position matches
    #[inline]
    #[must_use]
    pub const fn exact_matches(&self) -> usize {
        self.exact_matches
    }

    /// Every position matched exactly
    #[must_use]
    pub fn is_win(&self) -> bool {
        !self.cells.is_empty() && self.exact_matches == self.cells.len()
    }

    /// Count cells with the given feedback
    #[must_use]
    pub fn count(&self, feedback: Feedback) -> usize {
        self.cells.iter().filter(|&&f| f == feedback).count()
    }

    /// Row as an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.cells.iter().map(|f| f.emoji()).collect()
    }
}
