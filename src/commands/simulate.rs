//! Simulate command
//!
//! Plays many automated games through the engine in parallel. Each game picks
//! its secret with a per-game seeded RNG, then keeps guessing random words
//! that are consistent with every row of feedback seen so far.

use crate::config::GameConfig;
use crate::core::{RowScore, Word};
use crate::engine::{GuessEngine, Outcome};
use anyhow::{Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Configuration for a simulation run
pub struct SimulationConfig {
    pub games: usize,
    pub seed: u64,
    pub game: GameConfig,
    pub show_progress: bool,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(games: usize, seed: u64, game: GameConfig) -> Self {
        Self {
            games,
            seed,
            game,
            show_progress: true,
        }
    }
}

/// Outcome of one simulated game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub secret: String,
    pub won: bool,
    pub guesses: usize,
}

/// Aggregate statistics of a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub games: usize,
    pub won: usize,
    pub lost: usize,
    /// Wins by number of guesses: index 0 holds wins in one guess
    pub distribution: Vec<usize>,
    pub average_guesses: f64,
    /// Up to ten secrets that were never found, sorted
    pub lost_words: Vec<String>,
    pub duration: Duration,
}

/// Run `config.games` games against secrets drawn from `words`
///
/// Words whose length differs from the configured word length are skipped.
///
/// # Errors
///
/// Returns an error if no word has the configured length or the progress bar
/// template is invalid.
pub fn run_simulation(config: &SimulationConfig, words: &[Word]) -> Result<SimulationResult> {
    let word_length = config.game.word_length();
    let pool: Vec<&Word> = words.iter().filter(|w| w.len() == word_length).collect();
    if pool.is_empty() {
        bail!("No {word_length}-letter words to simulate with");
    }

    let pb = if config.show_progress {
        ProgressBar::new(config.games as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let records = (0..config.games)
        .into_par_iter()
        .map(|index| {
            let record = play_one(config.game, &pool, config.seed.wrapping_add(index as u64));
            pb.inc(1);
            record
        })
        .collect::<Result<Vec<GameRecord>>>()?;

    pb.finish_with_message("Complete!");

    Ok(summarize(&records, config.game.max_guesses(), start.elapsed()))
}

/// Play a single game with a seeded RNG
///
/// # Errors
///
/// Returns an error if the engine rejects a full row or the candidate pool
/// runs dry; both indicate a scoring inconsistency.
pub fn play_one(config: GameConfig, pool: &[&Word], seed: u64) -> Result<GameRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    let Some(&secret) = pool.choose(&mut rng) else {
        bail!("Empty word pool");
    };

    let mut engine = GuessEngine::new(config, secret.clone())?;
    let mut candidates: Vec<&Word> = pool.to_vec();

    loop {
        let Some(&guess) = candidates.choose(&mut rng) else {
            bail!("No candidates consistent with the feedback for {secret}");
        };

        for ch in guess.text().chars() {
            engine.input_letter(ch);
        }
        let row = engine.state().current_row();

        match engine.submit_guess() {
            outcome @ (Outcome::Won | Outcome::Lost) => {
                return Ok(GameRecord {
                    secret: secret.text().to_string(),
                    won: outcome == Outcome::Won,
                    guesses: engine.state().guesses_used(),
                });
            }
            Outcome::Scored => {}
            Outcome::Ignored | Outcome::Edited => bail!("Engine rejected full row {guess}"),
        }

        let Some(observed) = engine.state().row_feedback(row) else {
            bail!("Row {row} was not scored");
        };
        candidates.retain(|&candidate| {
            RowScore::calculate(guess, candidate).cells() == observed.as_slice()
        });
    }
}

fn summarize(records: &[GameRecord], max_guesses: usize, duration: Duration) -> SimulationResult {
    let mut distribution = vec![0; max_guesses];
    let mut total_guesses = 0;
    let mut lost_words = Vec::new();

    for record in records {
        if record.won {
            if let Some(slot) = distribution.get_mut(record.guesses.saturating_sub(1)) {
                *slot += 1;
            }
            total_guesses += record.guesses;
        } else {
            lost_words.push(record.secret.clone());
        }
    }

    let won = records.len() - lost_words.len();
    let average_guesses = if won > 0 {
        total_guesses as f64 / won as f64
    } else {
        0.0
    };

    let lost = lost_words.len();
    lost_words.sort_unstable();
    lost_words.dedup();
    lost_words.truncate(10);

    SimulationResult {
        games: records.len(),
        won,
        lost,
        distribution,
        average_guesses,
        lost_words,
        duration,
    }
}
