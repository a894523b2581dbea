//! Word Scramble - CLI
//!
//! Word game with TUI and line modes, plus a one-shot checker for scripting.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use word_scramble::{
    commands::{run_check, run_simple},
    config::GameConfig,
    core::DEFAULT_LOCALE,
    output::print_check_report,
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Make as many words as you can from the letters of a random root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Start word list, one root word per line (default: built-in list)
    #[arg(short, long, global = true, env = "WORD_SCRAMBLE_START_WORDS")]
    start_words: Option<PathBuf>,

    /// Dictionary word list, one word per line (default: built-in English list)
    #[arg(short, long, global = true, env = "WORD_SCRAMBLE_DICTIONARY")]
    dictionary: Option<PathBuf>,

    /// Language tag passed to the dictionary
    #[arg(short, long, global = true, default_value = DEFAULT_LOCALE)]
    locale: String,

    /// Seed for picking root words (reproducible rounds)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log game events at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Append logs to this file (play mode logs nowhere without it)
    #[arg(long, global = true, env = "WORD_SCRAMBLE_LOG_FILE")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode without TUI
    Simple,

    /// Submit words to a single round and report each result
    Check {
        /// Root word for the round
        #[arg(short, long)]
        root: String,

        /// Words to submit, in order
        #[arg(required = true)]
        words: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // The TUI owns the terminal, so stderr is off limits while it runs
    let on_terminal = !matches!(command, Commands::Play);
    init_tracing(cli.verbose, log_writer(cli.log_file.as_deref(), on_terminal)?);

    let config = GameConfig {
        start_words: cli.start_words,
        dictionary: cli.dictionary,
        locale: cli.locale,
        seed: cli.seed,
    };

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Check { root, words } => run_check_command(&config, &root, &words),
    }
}

/// Pick where log lines go: the log file if given, else stderr or nowhere
fn log_writer(log_file: Option<&Path>, on_terminal: bool) -> Result<BoxMakeWriter> {
    let writer = match log_file {
        Some(path) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file '{}'", path.display()))?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None if on_terminal => BoxMakeWriter::new(io::stderr),
        None => BoxMakeWriter::new(io::sink),
    };
    Ok(writer)
}

/// `RUST_LOG` wins over the `--verbose` default
fn init_tracing(verbose: bool, writer: BoxMakeWriter) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .init();
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let game = config.build_game()?;
    run_tui(App::new(game))
}

fn run_simple_command(config: &GameConfig) -> Result<()> {
    let mut game = config.build_game()?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_simple(&mut game, stdin.lock(), &mut stdout)
}

fn run_check_command(config: &GameConfig, root: &str, words: &[String]) -> Result<()> {
    let mut game = config.build_game_with_root(root)?;
    let report = run_check(&mut game, words);
    print_check_report(&report)?;
    Ok(())
}
