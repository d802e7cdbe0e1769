//! Game session: word loading around the engine
//!
//! A session has no engine until a secret word arrives. Every reset issues a
//! new [`FetchTicket`]; only the result for the newest ticket is applied, so a
//! slow fetch from an earlier reset can never overwrite a newer game.

use super::{GameState, GuessEngine, Key, Outcome};
use crate::config::GameConfig;
use crate::core::Word;
use crate::wordlists::{SourceError, WordSource};
use tracing::{debug, info, warn};

/// Identifies one word fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket(u64);

impl FetchTicket {
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Readiness of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionStatus {
    /// No fetch has been started yet
    Idle,
    /// Waiting for a secret word
    Loading,
    /// A game is in progress or finished
    Ready,
    /// The last fetch failed; a reset may retry
    Failed,
}

/// Result of handing a fetched word to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchOutcome {
    /// A new game started
    Ready,
    /// The ticket was superseded; the result was dropped
    Stale,
    /// The fetch failed or returned an unusable word
    Failed,
}

/// Owns at most one [`GuessEngine`] and the word-loading state around it
#[derive(Debug)]
pub struct Session {
    config: GameConfig,
    engine: Option<GuessEngine>,
    pending: Option<FetchTicket>,
    next_ticket: u64,
    last_error: Option<SourceError>,
}

impl Session {
    #[must_use]
    pub const fn new(config: GameConfig) -> Self {
        Self {
            config,
            engine: None,
            pending: None,
            next_ticket: 0,
            last_error: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        if self.engine.is_some() {
            SessionStatus::Ready
        } else if self.pending.is_some() {
            SessionStatus::Loading
        } else if self.last_error.is_some() {
            SessionStatus::Failed
        } else {
            SessionStatus::Idle
        }
    }

    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.engine.is_some()
    }

    /// Current game, if one is loaded
    #[must_use]
    pub fn state(&self) -> Option<&GameState> {
        self.engine.as_ref().map(GuessEngine::state)
    }

    /// Error from the most recent failed fetch
    #[must_use]
    pub const fn last_error(&self) -> Option<&SourceError> {
        self.last_error.as_ref()
    }

    /// Drop the current game and start waiting for a new secret word
    ///
    /// Any fetch still in flight is superseded by the returned ticket.
    pub fn begin_reset(&mut self) -> FetchTicket {
        let ticket = FetchTicket(self.next_ticket);
        self.next_ticket += 1;

        self.engine = None;
        self.last_error = None;
        if let Some(previous) = self.pending.replace(ticket) {
            debug!(previous = previous.id(), ticket = ticket.id(), "fetch superseded");
        }
        info!(ticket = ticket.id(), "waiting for secret word");
        ticket
    }

    /// Apply the result of the fetch identified by `ticket`
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<String, SourceError>,
    ) -> FetchOutcome {
        if self.pending != Some(ticket) {
            debug!(ticket = ticket.id(), "discarding stale word fetch");
            return FetchOutcome::Stale;
        }
        self.pending = None;

        let config = self.config;
        let engine = result.and_then(|text| {
            Word::new(text.as_str())
                .and_then(|secret| GuessEngine::new(config, secret))
                .map_err(|source| SourceError::InvalidWord { word: text, source })
        });

        match engine {
            Ok(engine) => {
                self.engine = Some(engine);
                info!(ticket = ticket.id(), "game ready");
                FetchOutcome::Ready
            }
            Err(error) => {
                warn!(ticket = ticket.id(), %error, "word fetch failed");
                self.last_error = Some(error);
                FetchOutcome::Failed
            }
        }
    }

    /// Reset and fetch synchronously from `source`
    pub fn load(&mut self, source: &dyn WordSource) -> FetchOutcome {
        let ticket = self.begin_reset();
        let result = source.fetch();
        self.complete_fetch(ticket, result)
    }

    /// Forward a key press; ignored while no game is loaded
    pub fn press(&mut self, key: Key) -> Outcome {
        self.engine
            .as_mut()
            .map_or(Outcome::Ignored, |engine| engine.press(key))
    }

    pub fn input_letter(&mut self, ch: char) -> Outcome {
        self.press(Key::Letter(ch))
    }

    pub fn delete_letter(&mut self) -> Outcome {
        self.press(Key::Delete)
    }

    pub fn submit_guess(&mut self) -> Outcome {
        self.press(Key::Submit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::FixedWord;

    struct BrokenSource;

    impl WordSource for BrokenSource {
        fn fetch(&self) -> Result<String, SourceError> {
            Err(SourceError::NoWords { length: 5 })
        }
    }

    fn session() -> Session {
        Session::new(GameConfig::default())
    }

    #[test]
    fn new_session_is_idle_and_ignores_input() {
        let mut session = session();
        assert_eq!(session.status(), SessionStatus::Idle);
        assert_eq!(session.input_letter('a'), Outcome::Ignored);
        assert_eq!(session.submit_guess(), Outcome::Ignored);
        assert!(session.state().is_none());
    }

    #[test]
    fn loading_session_ignores_input() {
        let mut session = session();
        let _ticket = session.begin_reset();
        assert_eq!(session.status(), SessionStatus::Loading);
        assert_eq!(session.input_letter('a'), Outcome::Ignored);
        assert_eq!(session.delete_letter(), Outcome::Ignored);
    }

    #[test]
    fn completed_fetch_starts_game() {
        let mut session = session();
        let ticket = session.begin_reset();
        assert_eq!(
            session.complete_fetch(ticket, Ok("sappy".to_string())),
            FetchOutcome::Ready
        );
        assert!(session.is_ready());

        for ch in "sappy".chars() {
            assert_eq!(session.input_letter(ch), Outcome::Edited);
        }
        assert_eq!(session.submit_guess(), Outcome::Won);
    }

    #[test]
    fn stale_fetch_is_discarded() {
        let mut session = session();
        let first = session.begin_reset();
        let second = session.begin_reset();
        assert_ne!(first, second);

        assert_eq!(
            session.complete_fetch(first, Ok("robot".to_string())),
            FetchOutcome::Stale
        );
        assert_eq!(session.status(), SessionStatus::Loading);

        assert_eq!(
            session.complete_fetch(second, Ok("sappy".to_string())),
            FetchOutcome::Ready
        );

        // A late duplicate of the old ticket must not replace the new game
        assert_eq!(
            session.complete_fetch(first, Ok("robot".to_string())),
            FetchOutcome::Stale
        );
        for ch in "sappy".chars() {
            session.input_letter(ch);
        }
        assert_eq!(session.submit_guess(), Outcome::Won);
    }

    #[test]
    fn failed_fetch_leaves_session_unplayable() {
        let mut session = session();
        assert_eq!(session.load(&BrokenSource), FetchOutcome::Failed);
        assert_eq!(session.status(), SessionStatus::Failed);
        assert!(matches!(
            session.last_error(),
            Some(SourceError::NoWords { length: 5 })
        ));
        assert_eq!(session.input_letter('a'), Outcome::Ignored);

        // Retry succeeds and clears the error
        assert_eq!(session.load(&FixedWord::new("sappy")), FetchOutcome::Ready);
        assert!(session.last_error().is_none());
    }

    #[test]
    fn wrong_length_word_fails() {
        let mut session = session();
        assert_eq!(session.load(&FixedWord::new("cat")), FetchOutcome::Failed);
        assert!(matches!(
            session.last_error(),
            Some(SourceError::InvalidWord { word, .. }) if word == "cat"
        ));
    }

    #[test]
    fn non_alphabetic_word_fails() {
        let mut session = session();
        assert_eq!(session.load(&FixedWord::new("s4ppy")), FetchOutcome::Failed);
        assert!(!session.is_ready());
    }

    #[test]
    fn uppercase_word_is_normalised() {
        let mut session = session();
        assert_eq!(session.load(&FixedWord::new("SAPPY")), FetchOutcome::Ready);
        for ch in "sappy".chars() {
            session.input_letter(ch);
        }
        assert_eq!(session.submit_guess(), Outcome::Won);
    }

    #[test]
    fn reset_discards_game_wholesale() {
        let mut session = session();
        session.load(&FixedWord::new("sappy"));
        session.input_letter('s');

        let ticket = session.begin_reset();
        assert!(session.state().is_none());
        assert_eq!(session.input_letter('s'), Outcome::Ignored);

        session.complete_fetch(ticket, Ok("robot".to_string()));
        let state = session.state().unwrap();
        assert_eq!(state.cursor(), (0, 0));
        assert!(state.keyboard().is_empty());
    }
}
