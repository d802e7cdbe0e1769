//! TUI rendering with ratatui
//!
//! Board, keyboard and statistics for the game interface.

use super::app::{App, MessageStyle};
use crate::core::{Cell, Feedback, KeyStatus, Keyboard, LAYOUT, Tag};
use crate::engine::{GameState, SessionStatus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Header, main-left, main-right and status bar regions of the screen
fn screen_chunks(area: Rect) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board and keyboard
            Constraint::Percentage(40), // Statistics and messages
        ])
        .split(chunks[1]);

    [chunks[0], main_chunks[0], main_chunks[1], chunks[2]]
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let [header, game, info, status_bar] = screen_chunks(f.area());

    render_header(f, header);

    match (app.session.status(), app.session.state()) {
        (SessionStatus::Ready, Some(state)) => render_game(f, state, game),
        (status, _) => render_waiting(f, app, status, game),
    }
    render_info_panel(f, app, info);

    render_status(f, app, status_bar);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_waiting(f: &mut Frame, app: &App, status: SessionStatus, area: Rect) {
    let (text, color) = match status {
        SessionStatus::Failed => (
            app.session.last_error().map_or_else(
                || "Could not load a secret word".to_string(),
                |error| format!("Could not load a secret word: {error}"),
            ),
            Color::Red,
        ),
        _ => ("Loading secret word...".to_string(), Color::Yellow),
    };

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Board ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

/// Board and keyboard regions inside the game panel
fn game_chunks(state: &GameState, area: Rect) -> (Rect, Rect) {
    let board_height = u16::try_from(state.grid().height()).unwrap_or(u16::MAX);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(board_height.saturating_add(2)),
            Constraint::Length(LAYOUT.len() as u16 + 2),
            Constraint::Min(0),
        ])
        .split(area);

    (chunks[0], chunks[1])
}

fn render_game(f: &mut Frame, state: &GameState, area: Rect) {
    let (board, keyboard) = game_chunks(state, area);
    render_board(f, state, board);
    render_keyboard(f, state.keyboard(), keyboard);
}

fn cell_style(cell: &Cell) -> Style {
    match cell.feedback() {
        Some(Feedback::Correct) => Style::default().fg(Color::Black).bg(Color::Green),
        Some(Feedback::Shifted) => Style::default().fg(Color::Black).bg(Color::Yellow),
        Some(Feedback::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None if cell.has_tag(Tag::Guessing) => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        None => Style::default().fg(Color::DarkGray),
    }
}

fn render_board(f: &mut Frame, state: &GameState, area: Rect) {
    let lines: Vec<Line> = state
        .grid()
        .rows()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .flat_map(|cell| {
                    let letter = cell
                        .value()
                        .map_or('·', |letter| letter.to_ascii_uppercase());
                    [
                        Span::styled(format!(" {letter} "), cell_style(cell)),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(
                " Guess {}/{} ",
                (state.guesses_used() + 1).min(state.grid().height()),
                state.grid().height()
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn key_style(status: Option<KeyStatus>) -> Style {
    match status {
        Some(KeyStatus::Correct) => Style::default().fg(Color::Black).bg(Color::Green),
        Some(KeyStatus::Shifted) => Style::default().fg(Color::Black).bg(Color::Yellow),
        Some(KeyStatus::Absent) => Style::default().fg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    }
}

fn keyboard_line(keys: &[&str], keyboard: &Keyboard) -> Line<'static> {
    let spans: Vec<Span> = keys
        .iter()
        .map(|&key| match key {
            "Enter" => Span::styled(" ⏎ ", Style::default().fg(Color::Cyan)),
            "Backspace" => Span::styled(" ⌫ ", Style::default().fg(Color::Cyan)),
            letter => {
                let status = letter.chars().next().and_then(|c| keyboard.status(c));
                Span::styled(format!(" {} ", letter.to_uppercase()), key_style(status))
            }
        })
        .collect();
    Line::from(spans)
}

fn keyboard_block() -> Block<'static> {
    Block::default().title(" Keyboard ").borders(Borders::ALL)
}

fn render_keyboard(f: &mut Frame, keyboard: &Keyboard, area: Rect) {
    let lines: Vec<Line> = LAYOUT
        .iter()
        .map(|keys| keyboard_line(keys, keyboard))
        .collect();

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(keyboard_block());
    f.render_widget(paragraph, area);
}

/// Name of the on-screen key drawn at (`column`, `row`), as listed in
/// [`LAYOUT`]
///
/// `screen` is the full terminal area the UI was drawn into. Keys exist only
/// while the game screen is shown.
#[must_use]
pub fn key_at(app: &App, screen: Rect, column: u16, row: u16) -> Option<&'static str> {
    let state = app.session.state()?;
    if app.session.status() != SessionStatus::Ready {
        return None;
    }
    let [_, game, _, _] = screen_chunks(screen);
    let (_, keyboard_area) = game_chunks(state, game);

    let inner = keyboard_block().inner(keyboard_area);
    if !inner.contains(Position::new(column, row)) {
        return None;
    }

    let keys = LAYOUT.get(usize::from(row - inner.y))?;
    let line = keyboard_line(keys, state.keyboard());
    let line_width = u16::try_from(line.width()).unwrap_or(u16::MAX);

    // Same offset the paragraph uses for centred lines
    let mut x = inner.x + (inner.width / 2).saturating_sub(line_width / 2);
    for (&key, span) in keys.iter().zip(&line.spans) {
        let width = u16::try_from(span.width()).unwrap_or(u16::MAX);
        if column >= x && column < x.saturating_add(width) {
            return Some(key);
        }
        x = x.saturating_add(width);
    }
    None
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Guess distribution
            Constraint::Percentage(50), // Messages
        ])
        .split(area);

    render_distribution(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_distribution(f: &mut Frame, app: &App, area: Rect) {
    let most = app
        .stats
        .guess_distribution
        .iter()
        .copied()
        .max()
        .unwrap_or(0);

    let lines: Vec<Line> = app
        .stats
        .guess_distribution
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let bar = crate::output::formatters::create_progress_bar(
                count as f64,
                most as f64,
                16,
            );
            Line::from(vec![
                Span::raw(format!("{}: ", i + 1)),
                Span::styled(bar, Style::default().fg(Color::Green)),
                Span::raw(format!(" {count}")),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Guess Distribution ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let mode_text = match app.session.status() {
        SessionStatus::Idle => "Idle",
        SessionStatus::Loading => "Loading",
        SessionStatus::Ready if app.session.state().is_some_and(|s| s.is_win()) => "Won",
        SessionStatus::Ready if app.session.state().is_some_and(|s| s.is_game_over()) => "Lost",
        SessionStatus::Ready => "Playing",
        SessionStatus::Failed => "Failed",
    };
    let mode = Paragraph::new(format!("Mode: {mode_text}")).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help = Paragraph::new("Esc: Quit | Enter: Submit | Ctrl+N: New Game")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::wordlists::FixedWord;
    use ratatui::{Terminal, backend::TestBackend};
    use std::sync::Arc;

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn loading_screen_before_word_arrives() {
        let mut app = App::new(GameConfig::default(), Arc::new(FixedWord::new("sappy")));
        app.session.begin_reset();
        assert!(screen(&app).contains("Loading secret word"));
    }

    #[test]
    fn board_shows_typed_letters() {
        let mut app = App::new(GameConfig::default(), Arc::new(FixedWord::new("sappy")));
        app.session.load(&FixedWord::new("sappy"));
        app.session.input_letter('c');
        app.session.input_letter('r');

        let text = screen(&app);
        assert!(text.contains(" C "));
        assert!(text.contains("Guess 1/6"));
        assert!(text.contains("Keyboard"));
    }

    #[test]
    fn every_key_is_clickable_where_drawn() {
        let mut app = App::new(GameConfig::default(), Arc::new(FixedWord::new("sappy")));
        app.session.load(&FixedWord::new("sappy"));
        let area = Rect::new(0, 0, 80, 24);

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
        let buffer = terminal.backend().buffer();

        for &key in LAYOUT.iter().flat_map(|keys| keys.iter()) {
            let hits: Vec<(u16, u16)> = (0..area.height)
                .flat_map(|y| (0..area.width).map(move |x| (x, y)))
                .filter(|&(x, y)| key_at(&app, area, x, y) == Some(key))
                .collect();
            assert_eq!(hits.len(), 3, "{key} should span one padded cell");

            let label = match key {
                "Enter" => "⏎".to_string(),
                "Backspace" => "⌫".to_string(),
                letter => letter.to_uppercase(),
            };
            assert_eq!(buffer[hits[1]].symbol(), label, "{key}");
        }
    }

    #[test]
    fn no_key_outside_keyboard_or_without_game() {
        let mut app = App::new(GameConfig::default(), Arc::new(FixedWord::new("sappy")));
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(key_at(&app, area, 10, 15), None);

        app.session.load(&FixedWord::new("sappy"));
        assert_eq!(key_at(&app, area, 0, 0), None);
        assert_eq!(key_at(&app, area, 79, 23), None);
    }
}
