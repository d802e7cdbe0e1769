//! Score command
//!
//! Scores a single guess against a secret word.

use crate::core::{Keyboard, RowScore, Word};
use anyhow::{Context, Result, bail};

/// Result of scoring one guess
pub struct ScoreResult {
    pub secret: Word,
    pub guess: Word,
    pub score: RowScore,
    pub keyboard: Keyboard,
}

/// Score `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either word is invalid or the lengths differ.
pub fn score_guess(secret: &str, guess: &str) -> Result<ScoreResult> {
    let secret = Word::new(secret).context("Invalid secret word")?;
    let guess = Word::new(guess).context("Invalid guess")?;

    if secret.len() != guess.len() {
        bail!(
            "Guess has {} letters but the secret has {}",
            guess.len(),
            secret.len()
        );
    }

    let score = RowScore::calculate(&guess, &secret);
    let mut keyboard = Keyboard::new();
    for &(letter, status) in score.key_updates() {
        keyboard.promote(letter, status);
    }

    Ok(ScoreResult {
        secret,
        guess,
        score,
        keyboard,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, KeyStatus};

    #[test]
    fn scores_guess() {
        let result = score_guess("robot", "boors").unwrap();
        assert_eq!(result.score.to_emoji(), "🟨🟩🟨🟨⬜");
        assert_eq!(result.keyboard.status('o'), Some(KeyStatus::Correct));
        assert_eq!(result.keyboard.status('s'), Some(KeyStatus::Absent));
    }

    #[test]
    fn input_is_case_insensitive() {
        let result = score_guess("SAPPY", "Sappy").unwrap();
        assert!(result.score.is_win());
        assert_eq!(result.score.count(Feedback::Correct), 5);
    }

    #[test]
    fn length_mismatch_is_an_error() {
        assert!(score_guess("robot", "boo").is_err());
    }

    #[test]
    fn invalid_word_is_an_error() {
        assert!(score_guess("rob0t", "boors").is_err());
        assert!(score_guess("robot", "").is_err());
    }
}
