//! First-class invariants for game states.
//!
//! Invariants are logical properties that hold for every reachable state.
//! They are checked with `debug_assert!` on the apply path and can be
//! tested independently.

use crate::rules::has_line;
use crate::state::GameState;
use crate::types::Player;
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// X has either as many marks as O or exactly one more.
pub struct BoardBalanced;

impl Invariant<GameState> for BoardBalanced {
    fn holds(state: &GameState) -> bool {
        let x_count = state.board().count_marks(Player::X);
        let o_count = state.board().count_marks(Player::O);

        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Board balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X marks equal O marks or exceed them by one"
    }
}

/// At most one player owns a completed line.
pub struct SingleWinner;

impl Invariant<GameState> for SingleWinner {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        let valid = !(has_line(board, Player::X) && has_line(board, Player::O));
        if !valid {
            warn!("Both players own a completed line");
        }
        valid
    }

    fn description() -> &'static str {
        "Only one player can have three in a line"
    }
}
