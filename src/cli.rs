//! Command-line interface for minimax_tictactoe.

use clap::{Parser, Subcommand};
use minimax_tictactoe::Mode;
use std::path::PathBuf;

/// Tic-tac-toe against a friend or a minimax computer opponent
#[derive(Parser, Debug)]
#[command(name = "minimax_tictactoe")]
#[command(about = "Tic-tac-toe with an unbeatable computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Game mode: "player" (two humans) or "computer" (you play X)
        #[arg(short, long)]
        mode: Option<Mode>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Pause before the computer moves, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Score every move for O on a board and print the best one
    Analyze {
        /// Board as nine cells of X, O or _ (separators like / and spaces are ignored)
        #[arg(short, long)]
        board: String,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },
}
