//! tictac - play tic-tac-toe against the computer in a terminal.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod screen;
mod session;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::ConsoleConfig;
use tictac_engine::GameEngine;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = ConsoleConfig::load_or_default(&cli.config)?.with_cli(&cli);

    // Board goes to stdout, logs to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    run_console(&config)
}

/// Builds the engine from config and hands the terminal to the game loop.
#[instrument(skip(config), fields(seed = ?config.seed()))]
fn run_console(config: &ConsoleConfig) -> Result<()> {
    let mut engine = match config.seed() {
        Some(seed) => GameEngine::seeded(*seed),
        None => GameEngine::new(),
    };
    if *config.skip_start_screen() {
        engine.new_game();
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let finished = session::run(&mut engine, stdin.lock(), stdout.lock())?;
    info!(finished, "Session over");
    Ok(())
}
