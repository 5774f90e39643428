//! Command-line interface for strictly_solver.

use clap::{Parser, Subcommand};

/// Strictly Solver - exact minimax for tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "strictly_solver")]
#[command(about = "Exact minimax solver for tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML search config (memoize, parallel_root, deadline_ms)
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the optimal move for the player to move
    BestMove {
        /// Board in row-major order, e.g. "XX./OO./..." (X, O, and . for empty)
        board: String,
    },

    /// Print every legal move with its exact value
    Analyze {
        /// Board in row-major order
        board: String,
    },

    /// Play minimax against itself until the game ends
    SelfPlay {
        /// Starting board (defaults to empty)
        #[arg(long, default_value = ".../.../...")]
        board: String,
    },
}
