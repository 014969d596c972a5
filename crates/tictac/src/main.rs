//! tictac - two-player tic-tac-toe in the terminal.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io;
use std::path::Path;
use tictac::{Session, SessionEnd, TerminalConfig};
use tracing::{debug, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, json } => {
            let config = load_config(config.as_deref())?;
            init_tracing(&config);
            run_play(config, json).map(|_| ())
        }
        Command::Replay {
            config,
            json,
            moves,
        } => {
            let config = load_config(config.as_deref())?;
            init_tracing(&config);
            run_replay(config, json, &moves).map(|_| ())
        }
        Command::Lines => tictac::write_lines(io::stdout().lock()),
    }
}

fn load_config(path: Option<&Path>) -> Result<TerminalConfig> {
    TerminalConfig::load(path).context("Failed to load configuration")
}

/// Logs go to stderr so the board on stdout stays readable.
fn init_tracing(config: &TerminalConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(io::stderr)
        .try_init();
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: TerminalConfig, json: bool) -> Result<SessionEnd> {
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut session = Session::new(config, json, stdin, stdout);
    let end = session.run()?;
    debug!(?end, "Play finished");
    Ok(end)
}

/// Play a move list given on the command line
#[instrument(skip(config))]
fn run_replay(config: TerminalConfig, json: bool, moves: &[String]) -> Result<SessionEnd> {
    tictac::validate_moves(moves)?;

    let stdout = io::stdout().lock();
    let mut session = Session::new(config, json, io::empty(), stdout);
    let end = session.run_moves(moves)?;
    debug!(?end, "Replay finished");
    Ok(end)
}
