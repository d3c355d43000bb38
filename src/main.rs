//! Wordle - CLI
//!
//! Play Wordle in the terminal, line by line or in a full-screen TUI.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use tracing::{debug, warn};
use wordle_game::{
    commands::{PlayConfig, run_play},
    core::Word,
    error::GameError,
    logging::init_tracing,
    output::{RenderStyle, print_setup_error},
    wordlists::{
        IndexSource, WORDS, WordPool,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the secret five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'builtin' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Seed for reproducible secret selection
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// How guesses are drawn in line mode
    #[arg(long, global = true, value_enum, default_value_t = RenderStyle::Color)]
    style: RenderStyle,

    /// Keep playing rounds from the same pool until you stop
    #[arg(short, long, global = true)]
    continuous: bool,

    /// Debug logging on stderr (`RUST_LOG` overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Line-based game (default)
    Play,

    /// Full-screen terminal game
    Tui,
}

/// Load the word pool based on the -w flag
fn load_words(wordlist: &str) -> Result<Vec<Word>, GameError> {
    match wordlist {
        "builtin" => Ok(words_from_slice(WORDS)),
        path => load_from_file(path),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let words = match load_words(&cli.wordlist) {
        Ok(words) if words.is_empty() => Err(GameError::EmptyPool),
        other => other,
    };
    let pool = match words {
        Ok(words) => WordPool::new(words),
        Err(e) => return report_setup_failure(&e),
    };
    debug!(words = pool.len(), "word pool ready");

    let command = cli.command.unwrap_or(Commands::Play);

    let outcome = match cli.seed {
        Some(seed) => run_command(command, &cli, pool, StdRng::seed_from_u64(seed)),
        None => run_command(command, &cli, pool, rand::rng()),
    };

    match outcome {
        Err(e) => match e.downcast::<GameError>() {
            Ok(game_error) if game_error.is_setup_failure() => report_setup_failure(&game_error),
            Ok(game_error) => Err(game_error.into()),
            Err(other) => Err(other),
        },
        Ok(()) => Ok(()),
    }
}

fn run_command<S: IndexSource>(
    command: Commands,
    cli: &Cli,
    pool: WordPool,
    source: S,
) -> Result<()> {
    match command {
        Commands::Play => run_play_command(cli, pool, source),
        Commands::Tui => run_tui_command(pool, source),
    }
}

fn run_play_command<S: IndexSource>(cli: &Cli, mut pool: WordPool, mut source: S) -> Result<()> {
    let config = PlayConfig {
        style: cli.style,
        continuous: cli.continuous,
    };

    let stdin = io::stdin();
    run_play(&mut pool, &mut source, stdin.lock(), io::stdout(), config)?;
    Ok(())
}

fn run_tui_command<S: IndexSource>(pool: WordPool, source: S) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(pool, source)?;
    run_tui(app)
}

/// Print why no game could start and exit normally
#[allow(clippy::unnecessary_wraps)] // Returned straight out of main
fn report_setup_failure(err: &GameError) -> Result<()> {
    warn!(error = %err, "game not started");
    print_setup_error(err);
    Ok(())
}
