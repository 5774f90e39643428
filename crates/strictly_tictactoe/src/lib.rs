//! Pure tic-tac-toe game logic with an exact minimax solver.
//!
//! # Architecture
//!
//! - **State**: immutable [`GameState`] snapshots; the player to move is
//!   derived from the board
//! - **Rules**: win, terminal and utility evaluation in [`rules`]
//! - **Search**: full-depth minimax via [`Solver`] and [`minimax`]
//! - **Play**: minimax self-play via [`self_play`]
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Action, GameState, minimax};
//!
//! let state: GameState = "XX./OO./...".parse().unwrap();
//! assert_eq!(minimax(&state).unwrap(), Action::new(0, 2).unwrap());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod error;
mod invariants;
mod play;
mod search;
mod state;
mod types;

pub mod rules;

// Crate-level exports - Domain types
pub use action::Action;
pub use types::{Board, Cell, Outcome, Player, Utility};

// Crate-level exports - State
pub use state::{GameState, initial_state};

// Crate-level exports - Rules
pub use rules::{is_terminal, utility, winner};

// Crate-level exports - Invariants
pub use invariants::{BoardBalanced, Invariant, SingleWinner};

// Crate-level exports - Search
pub use config::SearchConfig;
pub use search::{SearchReport, Solver, minimax};

// Crate-level exports - Self-play
pub use play::{GameRecord, Ply, self_play};

// Crate-level exports - Errors
pub use error::{BoardParseError, ConfigError, EngineError, InvalidActionError, SearchError};
