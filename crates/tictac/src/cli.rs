//! Command-line interface for tictac.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// tictac - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on stdin/stdout
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Also print each move result as a JSON line
        #[arg(long)]
        json: bool,
    },

    /// Apply a list of moves and print the game as it unfolds
    Replay {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Also print each move result as a JSON line
        #[arg(long)]
        json: bool,

        /// Cells in play order, as numbers (0-8) or labels
        #[arg(required = true)]
        moves: Vec<String>,
    },

    /// Print the winning lines
    Lines,
}
