//! The guess engine: grid, cursor, keyboard and win/loss state of one game

use super::{Key, Outcome};
use crate::config::GameConfig;
use crate::core::{Cell, Feedback, Grid, Keyboard, RowScore, Tag, Word, WordError};
use tracing::{debug, info};

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Observable state of one game
///
/// Presenters get a shared reference to this; all mutation goes through
/// [`GuessEngine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    secret: Word,
    grid: Grid,
    keyboard: Keyboard,
    current_row: usize,
    current_col: usize,
    is_win: bool,
    is_game_over: bool,
}

impl GameState {
    fn new(secret: Word, config: &GameConfig) -> Self {
        Self {
            secret,
            grid: Grid::new(config.word_length(), config.max_guesses()),
            keyboard: Keyboard::new(),
            current_row: 0,
            current_col: 0,
            is_win: false,
            is_game_over: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    #[must_use]
    pub const fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    /// `(row, column)` where the next letter lands
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> (usize, usize) {
        (self.current_row, self.current_col)
    }

    #[inline]
    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    #[inline]
    #[must_use]
    pub const fn current_col(&self) -> usize {
        self.current_col
    }

    #[inline]
    #[must_use]
    pub const fn is_win(&self) -> bool {
        self.is_win
    }

    #[inline]
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        if self.is_win {
            GameStatus::Won
        } else if self.is_game_over {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        }
    }

    /// Number of rows submitted so far
    #[inline]
    #[must_use]
    pub const fn guesses_used(&self) -> usize {
        self.current_row
    }

    /// The secret word, available only once the game has ended
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&Word> {
        self.status().is_finished().then_some(&self.secret)
    }

    /// Scored feedback of a submitted row
    #[must_use]
    pub fn row_feedback(&self, row: usize) -> Option<Vec<Feedback>> {
        if row >= self.current_row {
            return None;
        }
        self.grid.row(row).iter().map(Cell::feedback).collect()
    }
}

/// Drives one game: applies letter, delete and submit input to a [`GameState`]
#[derive(Debug, Clone)]
pub struct GuessEngine {
    config: GameConfig,
    state: GameState,
}

impl GuessEngine {
    /// Start a game against `secret`
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` if the secret does not have
    /// `config.word_length()` letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::config::GameConfig;
    /// use wordle_game::core::Word;
    /// use wordle_game::engine::{GameStatus, GuessEngine, Outcome};
    ///
    /// let secret = Word::new("sappy").unwrap();
    /// let mut engine = GuessEngine::new(GameConfig::default(), secret).unwrap();
    /// for ch in "sappy".chars() {
    ///     engine.input_letter(ch);
    /// }
    /// assert_eq!(engine.submit_guess(), Outcome::Won);
    /// assert_eq!(engine.state().status(), GameStatus::Won);
    /// ```
    pub fn new(config: GameConfig, secret: Word) -> Result<Self, WordError> {
        check_length(&config, &secret)?;
        Ok(Self {
            state: GameState::new(secret, &config),
            config,
        })
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read-only view for presenters
    #[inline]
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Dispatch a key press to the matching operation
    pub fn press(&mut self, key: Key) -> Outcome {
        match key {
            Key::Letter(ch) => self.input_letter(ch),
            Key::Delete => self.delete_letter(),
            Key::Submit => self.submit_guess(),
        }
    }

    /// Type a letter at the cursor
    ///
    /// Ignored once the game has ended, when the row is full, or for anything
    /// other than an ASCII letter.
    pub fn input_letter(&mut self, ch: char) -> Outcome {
        if self.state.status().is_finished()
            || !ch.is_ascii_alphabetic()
            || self.state.current_col >= self.config.word_length()
        {
            return Outcome::Ignored;
        }

        let (row, col) = self.state.cursor();
        let Some(cell) = self.state.grid.cell_mut(row, col) else {
            return Outcome::Ignored;
        };
        cell.fill(ch.to_ascii_lowercase());
        self.state.current_col += 1;
        Outcome::Edited
    }

    /// Remove the letter left of the cursor
    pub fn delete_letter(&mut self) -> Outcome {
        if self.state.status().is_finished() || self.state.current_col == 0 {
            return Outcome::Ignored;
        }

        let (row, col) = self.state.cursor();
        let Some(cell) = self.state.grid.cell_mut(row, col - 1) else {
            return Outcome::Ignored;
        };
        cell.clear();
        self.state.current_col -= 1;
        Outcome::Edited
    }

    /// Score the current row once it is full
    pub fn submit_guess(&mut self) -> Outcome {
        if self.state.status().is_finished() || self.state.current_col != self.config.word_length()
        {
            return Outcome::Ignored;
        }

        let row = self.state.current_row;
        let Ok(guess) = Word::new(self.state.grid.row_text(row)) else {
            return Outcome::Ignored;
        };
        let score = RowScore::calculate(&guess, &self.state.secret);

        for (cell, feedback) in self.state.grid.row_mut(row).iter_mut().zip(score.cells()) {
            cell.push_tag(Tag::Guessed);
            match feedback {
                Feedback::Correct => cell.push_tag(Tag::Correct),
                Feedback::Shifted => cell.push_tag(Tag::Shifted),
                Feedback::Absent => {}
            }
        }

        for &(letter, status) in score.key_updates() {
            if self.state.keyboard.promote(letter, status) {
                debug!(%letter, status = status.name(), "key status changed");
            }
        }

        debug!(
            row,
            guess = guess.text(),
            exact = score.exact_matches(),
            emoji = %score.to_emoji(),
            "scored row"
        );

        let outcome = if score.exact_matches() == self.config.word_length() {
            self.state.is_win = true;
            info!(guesses = row + 1, "game won");
            Outcome::Won
        } else if row + 1 == self.config.max_guesses() {
            self.state.is_game_over = true;
            info!(secret = self.state.secret.text(), "game lost");
            Outcome::Lost
        } else {
            Outcome::Scored
        };

        self.state.current_row += 1;
        self.state.current_col = 0;
        outcome
    }

    /// Throw the current game away and start over against `secret`
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` on a secret of the wrong length;
    /// the current game is kept in that case.
    pub fn reset(&mut self, secret: Word) -> Result<(), WordError> {
        check_length(&self.config, &secret)?;
        self.state = GameState::new(secret, &self.config);
        info!("game reset");
        Ok(())
    }
}

fn check_length(config: &GameConfig, secret: &Word) -> Result<(), WordError> {
    if secret.len() == config.word_length() {
        Ok(())
    } else {
        Err(WordError::InvalidLength {
            expected: config.word_length(),
            actual: secret.len(),
        })
    }
}
