//! Error types for the tic-tac-toe engine.
//!
//! Every error here is a contract violation by the caller. None of them are
//! transient, so nothing is ever retried.

use crate::action::Action;
use derive_more::{Display, Error, From};
use tracing::instrument;

/// An action could not be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InvalidActionError {
    /// Coordinates outside the 3x3 grid.
    #[display("Action ({}, {}) is outside the board", row, col)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(#[error(not(source))] Action),
}

/// Search could not produce an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SearchError {
    /// Search was requested on a terminal state.
    #[display("No moves available: the game is already over")]
    NoMovesAvailable,

    /// The configured deadline elapsed before search completed.
    #[display("Search timed out after {}ms (budget {}ms)", elapsed_ms, budget_ms)]
    TimedOut {
        /// Wall time spent before aborting.
        elapsed_ms: u64,
        /// Configured budget.
        budget_ms: u64,
    },
}

/// A textual board could not be turned into a game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// Character is not a mark, an empty cell, or a separator.
    #[display("Invalid board character {:?}", _0)]
    InvalidCharacter(#[error(not(source))] char),

    /// Board text did not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongCellCount(#[error(not(source))] usize),

    /// Mark counts cannot arise from alternating play starting with X.
    #[display("Unreachable board: {} X marks and {} O marks", x, o)]
    Unbalanced {
        /// Number of X marks.
        x: usize,
        /// Number of O marks.
        o: usize,
    },
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    #[track_caller]
    fn from(err: toml::de::Error) -> Self {
        Self::new(format!("Failed to parse config: {}", err))
    }
}

impl From<std::io::Error> for ConfigError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("Failed to read config file: {}", err))
    }
}

/// Any error the engine can report.
#[derive(Debug, Clone, Display, Error, From)]
pub enum EngineError {
    /// See [`InvalidActionError`].
    #[display("{}", _0)]
    InvalidAction(InvalidActionError),
    /// See [`SearchError`].
    #[display("{}", _0)]
    Search(SearchError),
    /// See [`BoardParseError`].
    #[display("{}", _0)]
    BoardParse(BoardParseError),
    /// See [`ConfigError`].
    #[display("{}", _0)]
    Config(ConfigError),
}
