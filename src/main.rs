//! Słówko - CLI
//!
//! Play the Polish word-guessing game in the terminal, or check and score
//! single words.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use slowko::{
    commands::{check_word, evaluate_pair, run_play},
    config::{Config, DEFAULT_DICTIONARY_LOCATION, DEFAULT_VALIDATE_URL, InjectedData},
    core::{DEFAULT_WORD_LENGTH, Mode},
    output::{print_evaluation, print_validation},
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "slowko",
    about = "Polish word-guessing game with native and foreign word modes",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word mode: native (default) or foreign
    #[arg(short, long, global = true, default_value = "native")]
    mode: Mode,

    /// Word length (4-7, others fall back to 5)
    #[arg(short, long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Local .dic dictionary: file path or http(s) URL
    #[arg(long, global = true, default_value = DEFAULT_DICTIONARY_LOCATION)]
    dictionary: String,

    /// Remote validation endpoint
    #[arg(long, global = true, default_value = DEFAULT_VALIDATE_URL)]
    validate_url: String,

    /// HTTP timeout in seconds
    #[arg(long, global = true, default_value = "10")]
    timeout_secs: u64,

    /// JSON file replacing the built-in native pool (length -> words)
    #[arg(long, global = true)]
    native_pool: Option<PathBuf>,

    /// JSON file with the foreign pool and definitions
    #[arg(long, global = true)]
    foreign_dictionary: Option<PathBuf>,

    /// JSON file with a preloaded dictionary (length -> words)
    #[arg(long, global = true)]
    bundled_dictionary: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game (default)
    Play,

    /// Validate a single word
    Check {
        /// Word to validate
        word: String,
    },

    /// Score a guess against a target
    Evaluate {
        /// Guessed word
        guess: String,

        /// Secret word
        target: String,
    },
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            dictionary_location: self.dictionary.clone(),
            validate_url: self.validate_url.clone(),
            http_timeout: Duration::from_secs(self.timeout_secs),
            native_pool_path: self.native_pool.clone(),
            foreign_dictionary_path: self.foreign_dictionary.clone(),
            bundled_dictionary_path: self.bundled_dictionary.clone(),
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    match command {
        Commands::Evaluate { guess, target } => {
            let result = evaluate_pair(&guess, &target)?;
            print_evaluation(&result.guess, result.feedback.verdicts());
            Ok(())
        }
        Commands::Check { word } => {
            let validator = build_validator(&cli)?;
            let (word, validation) = check_word(&validator, &word, cli.mode).await?;
            print_validation(&word, &validation);
            Ok(())
        }
        Commands::Play => {
            let validator = build_validator(&cli)?;
            run_play(Arc::new(validator), cli.mode, cli.length)
                .await
                .context("Interactive game failed")
        }
    }
}

fn build_validator(cli: &Cli) -> Result<slowko::validator::GuessValidator> {
    let config = cli.config();
    let data = InjectedData::load(&config).context("Failed to load injected data")?;
    config
        .build_validator(&data)
        .context("Failed to set up word validation")
}
