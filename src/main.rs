use clap::{Parser, Subcommand};
use colored::Colorize;
use eyre::{Result, eyre};
use fruitstore::{Config, FruitManager, Shell, example_fruits, report};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fruitstore")]
#[command(about = "FruitStore CLI - Manage an in-memory collection of fruits")]
#[command(version)]
struct Cli {
    /// Path to a YAML config file (default: <config dir>/fruitstore/config.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start with an empty collection instead of the example fruits
    #[arg(long)]
    no_seed: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu session (default)
    Shell,

    /// List all fruits
    List,

    /// Find the first fruit whose name contains NAME (case-insensitive)
    Search { name: String },

    /// Compare two fruits by exact name
    Compare { first: String, second: String },

    /// Show collection statistics
    Stats,
}

/// Level used before the config file says otherwise
const DEFAULT_LOG_LEVEL: &str = "warn";

fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Load config while a provisional subscriber honoring RUST_LOG is active
fn load_config(path: Option<&Path>) -> Result<Config> {
    let provisional = tracing_subscriber::fmt()
        .with_env_filter(env_filter(DEFAULT_LOG_LEVEL))
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::with_default(provisional, || Config::load(path))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    // Setup tracing; logs go to stderr so they never mix with command output
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config.log_level))
        .with_writer(io::stderr)
        .init();
    debug!(path = ?cli.config, ?config, "Using config");

    if let Some(enabled) = config.color_override() {
        colored::control::set_override(enabled);
    }

    let mut manager = FruitManager::new();
    if config.seed_examples && !cli.no_seed {
        for fruit in example_fruits() {
            manager.add(fruit);
        }
        info!(count = manager.len(), "Loaded example fruits");
    }

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let stdin = io::stdin();
            Shell::new(manager, stdin.lock(), io::stdout()).run()?;
        }
        Commands::List => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&manager.all())?);
            } else if manager.is_empty() {
                println!("No fruits registered.");
            } else {
                print!("{}", report::listing(&manager.all()));
            }
        }
        Commands::Search { name } => match manager.find_by_name_substring(&name) {
            Some(fruit) if cli.json => println!("{}", serde_json::to_string_pretty(fruit)?),
            Some(fruit) => println!("{}\n\n{}", "FRUIT FOUND".bold(), report::details(fruit)),
            None => return Err(eyre!("No fruit found with the name '{}'", name)),
        },
        Commands::Compare { first, second } => {
            let comparison = manager
                .compare(&first, &second)
                .ok_or_else(|| eyre!("Both fruits must exist to compare: '{}', '{}'", first, second))?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&comparison)?);
            } else {
                println!("{}", comparison);
            }
        }
        Commands::Stats => {
            let stats = manager.statistics();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                print!("{}", stats);
            }
        }
    }

    Ok(())
}
