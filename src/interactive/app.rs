//! TUI application state and logic

use super::rendering::key_at;
use crate::config::GameConfig;
use crate::engine::{FetchOutcome, FetchTicket, Key, Outcome, Session, SessionStatus};
use crate::output::formatters::end_message;
use crate::wordlists::{SourceError, WordSource};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;
use tracing::debug;

type FetchResult = (FetchTicket, Result<String, SourceError>);

/// Application state
pub struct App {
    pub session: Session,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    source: Arc<dyn WordSource>,
    sender: Sender<FetchResult>,
    receiver: Receiver<FetchResult>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by number of guesses: index 0 holds wins in one guess
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games > 0 {
            self.games_won as f64 / self.total_games as f64 * 100.0
        } else {
            0.0
        }
    }
}

impl App {
    #[must_use]
    pub fn new(config: GameConfig, source: Arc<dyn WordSource>) -> Self {
        let (sender, receiver) = mpsc::channel();

        Self {
            session: Session::new(config),
            messages: vec![Message {
                text: "Welcome! Type a word and press Enter.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics {
                guess_distribution: vec![0; config.max_guesses()],
                ..Statistics::default()
            },
            should_quit: false,
            source,
            sender,
            receiver,
        }
    }

    /// Reset the session and fetch a secret word on a background thread
    pub fn start_new_game(&mut self) {
        let ticket = self.session.begin_reset();
        let source = Arc::clone(&self.source);
        let sender = self.sender.clone();

        thread::spawn(move || {
            let result = source.fetch();
            if sender.send((ticket, result)).is_err() {
                debug!(ticket = ticket.id(), "app gone before word arrived");
            }
        });
    }

    /// Apply every fetch result that has arrived so far
    pub fn poll_fetches(&mut self) {
        while let Ok((ticket, result)) = self.receiver.try_recv() {
            self.apply_fetch(ticket, result);
        }
    }

    fn apply_fetch(&mut self, ticket: FetchTicket, result: Result<String, SourceError>) {
        match self.session.complete_fetch(ticket, result) {
            FetchOutcome::Ready => {
                self.add_message("New game started!", MessageStyle::Info);
            }
            FetchOutcome::Stale => {}
            FetchOutcome::Failed => {
                let text = self.session.last_error().map_or_else(
                    || "Could not load a secret word".to_string(),
                    ToString::to_string,
                );
                self.add_message(&text, MessageStyle::Error);
                self.add_message("Press Enter to retry.", MessageStyle::Info);
            }
        }
    }

    /// React to one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.start_new_game(),
            KeyCode::Enter => self.apply_key(Key::Submit),
            KeyCode::Backspace => self.apply_key(Key::Delete),
            KeyCode::Char(c) if !ctrl => {
                if let Some(key) = Key::from_char(c) {
                    self.apply_key(key);
                }
            }
            _ => {}
        }
    }

    /// React to a mouse event; a left click on an on-screen key presses it
    ///
    /// `screen` is the terminal area the UI is drawn into.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, screen: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        if let Some(key) = key_at(self, screen, mouse.column, mouse.row).and_then(Key::parse) {
            debug!(?key, "on-screen key clicked");
            self.apply_key(key);
        }
    }

    /// Typed and clicked keys both end up here
    fn apply_key(&mut self, key: Key) {
        match key {
            Key::Submit if self.can_restart() => self.start_new_game(),
            Key::Submit => {
                let outcome = self.session.press(Key::Submit);
                self.after_submit(outcome);
            }
            key => {
                self.session.press(key);
            }
        }
    }

    /// Enter starts a new game once the current one is over or failed to load
    fn can_restart(&self) -> bool {
        match self.session.status() {
            SessionStatus::Ready => self
                .session
                .state()
                .is_some_and(|state| state.status().is_finished()),
            SessionStatus::Failed | SessionStatus::Idle => true,
            SessionStatus::Loading => false,
        }
    }

    fn after_submit(&mut self, outcome: Outcome) {
        let Some(state) = self.session.state() else {
            return;
        };

        match outcome {
            Outcome::Ignored if state.current_col() < state.grid().width() => {
                self.add_message("Not enough letters", MessageStyle::Error);
            }
            Outcome::Won | Outcome::Lost => {
                let guesses = state.guesses_used();
                let message = end_message(state).unwrap_or_default();

                self.stats.total_games += 1;
                if outcome == Outcome::Won {
                    self.stats.games_won += 1;
                    if let Some(slot) = self.stats.guess_distribution.get_mut(guesses - 1) {
                        *slot += 1;
                    }
                    self.add_message(&message, MessageStyle::Success);
                } else {
                    self.add_message(&message, MessageStyle::Error);
                }
                self.add_message("Press Enter or Ctrl+N for a new game.", MessageStyle::Info);
            }
            _ => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.start_new_game();

    loop {
        app.poll_fetches();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Poll with a timeout so fetched words show up without a key press
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    app.handle_mouse(mouse, Rect::new(0, 0, size.width, size.height));
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::FixedWord;

    fn app(secret: &str) -> App {
        App::new(GameConfig::default(), Arc::new(FixedWord::new(secret)))
    }

    fn wait_for_fetch(app: &mut App) {
        let (ticket, result) = app
            .receiver
            .recv_timeout(Duration::from_secs(5))
            .expect("fetch thread did not report");
        app.apply_fetch(ticket, result);
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn click(app: &mut App, kind: MouseEventKind, name: &str) {
        let screen = Rect::new(0, 0, 80, 24);
        let (column, row) = (0..screen.height)
            .flat_map(|y| (0..screen.width).map(move |x| (x, y)))
            .find(|&(x, y)| key_at(app, screen, x, y) == Some(name))
            .expect("key is on screen");
        let mouse = MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(mouse, screen);
    }

    fn click_key(app: &mut App, name: &str) {
        click(app, MouseEventKind::Down(MouseButton::Left), name);
    }

    fn type_word(app: &mut App, word: &str) {
        for ch in word.chars() {
            press(app, KeyCode::Char(ch));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn background_fetch_starts_game() {
        let mut app = app("sappy");
        app.start_new_game();
        assert_eq!(app.session.status(), SessionStatus::Loading);

        wait_for_fetch(&mut app);
        assert!(app.session.is_ready());
    }

    #[test]
    fn keys_drive_the_engine() {
        let mut app = app("sappy");
        app.start_new_game();
        wait_for_fetch(&mut app);

        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.session.state().unwrap().cursor(), (0, 1));

        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.messages.last().map(|m| m.text.as_str()),
            Some("Not enough letters")
        );
    }

    #[test]
    fn win_updates_statistics() {
        let mut app = app("sappy");
        app.start_new_game();
        wait_for_fetch(&mut app);

        type_word(&mut app, "crane");
        type_word(&mut app, "sappy");

        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);
        assert!(app.messages.iter().any(|m| m.text == "YOU GOT IT!"));
    }

    #[test]
    fn loss_reveals_secret() {
        let mut app = app("sappy");
        app.start_new_game();
        wait_for_fetch(&mut app);

        for _ in 0..6 {
            type_word(&mut app, "crane");
        }
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text == "Sorry, it was \"sappy\"")
        );
    }

    #[test]
    fn enter_after_game_starts_new_one() {
        let mut app = app("sappy");
        app.start_new_game();
        wait_for_fetch(&mut app);
        type_word(&mut app, "sappy");

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.status(), SessionStatus::Loading);
        wait_for_fetch(&mut app);
        assert_eq!(app.session.state().unwrap().cursor(), (0, 0));
    }

    #[test]
    fn stale_fetch_is_ignored() {
        let mut app = app("sappy");
        app.start_new_game();
        app.start_new_game();

        wait_for_fetch(&mut app);
        wait_for_fetch(&mut app);
        assert!(app.session.is_ready());
        assert_eq!(
            app.messages
                .iter()
                .filter(|m| m.text == "New game started!")
                .count(),
            1
        );
    }

    #[test]
    fn failed_fetch_reports_error() {
        let mut app = app("cat");
        app.start_new_game();
        wait_for_fetch(&mut app);

        assert_eq!(app.session.status(), SessionStatus::Failed);
        assert!(app.messages.iter().any(|m| m.style == MessageStyle::Error));
        assert!(app.can_restart());
    }

    #[test]
    fn clicked_keys_match_typed_keys() {
        let mut app = app("sappy");
        app.start_new_game();
        wait_for_fetch(&mut app);

        click_key(&mut app, "s");
        assert_eq!(app.session.state().unwrap().cursor(), (0, 1));

        click_key(&mut app, "Enter");
        assert_eq!(
            app.messages.last().map(|m| m.text.as_str()),
            Some("Not enough letters")
        );

        click_key(&mut app, "Backspace");
        assert_eq!(app.session.state().unwrap().cursor(), (0, 0));
    }

    #[test]
    fn clicking_a_word_wins_and_enter_restarts() {
        let mut app = app("sappy");
        app.start_new_game();
        wait_for_fetch(&mut app);

        for letter in ["s", "a", "p", "p", "y"] {
            click_key(&mut app, letter);
        }
        click_key(&mut app, "Enter");
        assert_eq!(app.stats.games_won, 1);

        click_key(&mut app, "Enter");
        assert_eq!(app.session.status(), SessionStatus::Loading);
    }

    #[test]
    fn other_mouse_events_are_ignored() {
        let mut app = app("sappy");
        app.start_new_game();
        wait_for_fetch(&mut app);

        click(&mut app, MouseEventKind::Down(MouseButton::Right), "s");
        click(&mut app, MouseEventKind::Up(MouseButton::Left), "s");
        click(&mut app, MouseEventKind::Moved, "s");
        assert_eq!(app.session.state().unwrap().cursor(), (0, 0));
    }

    #[test]
    fn quit_keys() {
        let mut first = app("sappy");
        let mut second = app("sappy");

        press(&mut first, KeyCode::Esc);
        assert!(first.should_quit);

        second.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(second.should_quit);
    }
}
