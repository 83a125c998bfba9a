#![forbid(unsafe_code)]
//! Nutzwert Command Line Interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use nutzwert::commands::{
    execute_normalize, execute_run, execute_score, NormalizeOptions, RunOptions, ScoreOptions,
};
use nutzwert::Config;

#[derive(Parser)]
#[command(name = "nutzwert")]
#[command(about = "Weighted-criteria decision scoring (utility value analysis)")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = ".nutzwert.json")]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive utility value analysis
    Run {
        /// Number of variants (skips the prompt, 1 to 5)
        #[arg(long)]
        variants: Option<usize>,
    },

    /// Score an analysis from a JSON file or stdin
    Score {
        /// Analysis JSON file (reads from stdin if not provided)
        input: Option<PathBuf>,

        /// Output as JSON (default: human-readable table)
        #[arg(long)]
        json: bool,
    },

    /// Normalize a list of weights to percentages
    Normalize {
        /// Raw weights
        #[arg(required = true)]
        weights: Vec<f64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Load config
    let config = if cli.config.exists() {
        Config::load(&cli.config)?
    } else {
        Config::default()
    };

    match cli.command {
        Commands::Run { variants } => {
            let options = RunOptions { variants };
            execute_run(options, config)?;
        }

        Commands::Score { input, json } => {
            let options = ScoreOptions { input, json };
            execute_score(options, config)?;
        }

        Commands::Normalize { weights, json } => {
            let options = NormalizeOptions { weights, json };
            execute_normalize(options)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
