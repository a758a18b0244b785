mod cli;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use semantle::config::SemantleConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "semantle", version, about = "Semantle word-guessing game server")]
struct Cli {
    /// Config file (defaults to ~/.semantle/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP game server
    Serve,
    /// Show the daily word for a date
    Daily {
        /// Date as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Compare two words through the embedding provider
    Similarity { word1: String, word2: String },
    /// Check configuration and probe the embedding provider
    Doctor,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SemantleConfig::load_from(path)?,
        None => SemantleConfig::load()?,
    };

    // Log to stderr so command output on stdout stays clean.
    let filter = EnvFilter::try_new(&config.server.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Serve => semantle::server::serve(config).await?,
        Command::Daily { date } => cli::daily(&config, date.as_deref())?,
        Command::Similarity { word1, word2 } => cli::similarity(&config, &word1, &word2).await?,
        Command::Doctor => cli::doctor(&config).await?,
    }

    Ok(())
}
