use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pagereel_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "pagereel")]
#[command(author, version, about = "A terminal card deck with flick-to-page scrolling")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a config file (defaults to ~/.config/pagereel/config.toml)
    #[arg(short = 'c', long = "config")]
    config_path: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run {
        /// Number of cards in the deck (overrides config)
        #[arg(long)]
        cards: Option<usize>,
    },
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the config file path
    Path,
    /// Write a default config file
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = match &cli.config_path {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };

    // Initialize logging (RUST_LOG overrides the configured level)
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match &cli.config_path {
        Some(path) => tracing::debug!("using config from {}", path.display()),
        None => tracing::debug!("using config from {}", AppConfig::config_path().display()),
    }

    match cli.command {
        Some(Commands::Run { cards }) => {
            if let Some(count) = cards {
                config.deck.card_count = count;
            }
            commands::run::run(config)
        }
        None => commands::run::run(config),
        Some(Commands::Config { action }) => match action {
            ConfigAction::Path => commands::config::path(),
            ConfigAction::Init => commands::config::init(&config),
        },
    }
}
