//! Command-line interface for tictac.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe against the computer
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Play tic-tac-toe against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (missing file means defaults)
    #[arg(short, long, default_value = "tictac.toml")]
    pub config: PathBuf,

    /// Seed for the computer's random moves (overrides config)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Tracing filter used when RUST_LOG is unset (overrides config)
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Go straight to the board, skipping the start screen
    #[arg(long)]
    pub skip_start: bool,
}
