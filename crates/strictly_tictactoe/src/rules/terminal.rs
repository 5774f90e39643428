//! Terminal detection and scoring.

use super::win::winner;
use crate::state::GameState;
use crate::types::{Board, Outcome, Player, Utility};

/// Checks if the board is full (all cells occupied).
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// True once the board is full or someone has three in a line.
pub fn is_terminal(state: &GameState) -> bool {
    is_full(state.board()) || winner(state).is_some()
}

/// Score from X's perspective: +1 X won, -1 O won, 0 otherwise.
///
/// Non-terminal states score 0; search only calls this on terminal states.
pub fn utility(state: &GameState) -> Utility {
    match winner(state) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}

/// Outcome of a finished game, or `None` while play continues.
pub fn outcome(state: &GameState) -> Option<Outcome> {
    match winner(state) {
        Some(player) => Some(Outcome::Winner(player)),
        None if is_full(state.board()) => Some(Outcome::Draw),
        None => None,
    }
}
