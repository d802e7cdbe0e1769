//! Wordle Game - CLI
//!
//! Terminal Wordle with TUI and line-based modes, a one-shot scorer and a
//! parallel game simulator.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use wordle_game::{
    commands::{SimulationConfig, run_simple, run_simulation, score_guess},
    config::{GUESSES, GameConfig, WORD_LENGTH},
    engine::Session,
    logging,
    output::{print_score_result, print_simulation_result},
    wordlists::{FixedWord, ListSource, WordSource},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Play Wordle in the terminal, score guesses and simulate games",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Letters per word
    #[arg(short = 'l', long, global = true, default_value_t = WORD_LENGTH)]
    length: usize,

    /// Guesses allowed per game
    #[arg(short = 'g', long, global = true, default_value_t = GUESSES)]
    guesses: usize,

    /// Wordlist: 'embedded' (default) or path to file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Play against this secret word instead of a random one
    #[arg(long, global = true)]
    word: Option<String>,

    /// Write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, without TUI)
    Simple,

    /// Score one guess against a secret word
    Score {
        /// The secret word
        secret: String,

        /// The guess to score
        guess: String,
    },

    /// Play many automated games in parallel
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,

        /// Base seed; game i uses seed + i
        #[arg(long, default_value = "0")]
        seed: u64,
    },
}

/// Load the word list selected by the -w flag
fn load_wordlist(wordlist: &str, length: usize) -> Result<ListSource> {
    let source = match wordlist {
        "embedded" => ListSource::embedded(length),
        path => ListSource::from_file(Path::new(path), length),
    };
    source.with_context(|| format!("cannot use word list '{wordlist}'"))
}

/// Source of secret words: a fixed word if given, otherwise the word list
fn word_source(cli: &Cli) -> Result<Arc<dyn WordSource>> {
    if let Some(word) = &cli.word {
        return Ok(Arc::new(FixedWord::new(word.clone())));
    }
    Ok(Arc::new(load_wordlist(&cli.wordlist, cli.length)?))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    // The TUI owns the terminal, so it only logs when sent to a file
    let tui = matches!(command, Commands::Play);
    if !tui || cli.log_file.is_some() {
        logging::init(cli.verbose, cli.log_file.as_deref())?;
    }

    let config = GameConfig::new(cli.length, cli.guesses)?;
    info!(
        length = config.word_length(),
        guesses = config.max_guesses(),
        "starting"
    );

    match command {
        Commands::Play => run_play_command(config, word_source(&cli)?),
        Commands::Simple => run_simple_command(config, word_source(&cli)?.as_ref()),
        Commands::Score { secret, guess } => run_score_command(secret, guess),
        Commands::Simulate { count, seed } => run_simulate_command(&cli, config, *count, *seed),
    }
}

fn run_play_command(config: GameConfig, source: Arc<dyn WordSource>) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(config, source);
    run_tui(app)
}

fn run_simple_command(config: GameConfig, source: &dyn WordSource) -> Result<()> {
    let mut session = Session::new(config);
    run_simple(&mut session, source)
}

fn run_score_command(secret: &str, guess: &str) -> Result<()> {
    let result = score_guess(secret, guess)?;
    print_score_result(&result);
    Ok(())
}

fn run_simulate_command(cli: &Cli, config: GameConfig, count: usize, seed: u64) -> Result<()> {
    let words = load_wordlist(&cli.wordlist, config.word_length())?;

    println!(
        "Simulating {count} games over {} words (seed {seed})...",
        words.words().len()
    );

    let result = run_simulation(&SimulationConfig::new(count, seed, config), words.words())?;
    print_simulation_result(&result);
    Ok(())
}
