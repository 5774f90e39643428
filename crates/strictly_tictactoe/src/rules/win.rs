//! Win detection logic for tic-tac-toe.

use crate::action::Action;
use crate::state::GameState;
use crate::types::{Board, Cell, Player};

const fn at(row: usize, col: usize) -> Action {
    Action::ALL[row * 3 + col]
}

/// Every winning line, scanned rows first, then columns, then diagonals.
pub const LINES: [[Action; 3]; 8] = [
    // Rows
    [at(0, 0), at(0, 1), at(0, 2)],
    [at(1, 0), at(1, 1), at(1, 2)],
    [at(2, 0), at(2, 1), at(2, 2)],
    // Columns
    [at(0, 0), at(1, 0), at(2, 0)],
    [at(0, 1), at(1, 1), at(2, 1)],
    [at(0, 2), at(1, 2), at(2, 2)],
    // Diagonals
    [at(0, 0), at(1, 1), at(2, 2)],
    [at(0, 2), at(1, 1), at(2, 0)],
];

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first complete line in [`LINES`] order.
pub fn check_winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|&[a, b, c]| {
        let cell = board.get(a);
        if cell == board.get(b) && cell == board.get(c) {
            cell.player()
        } else {
            None
        }
    })
}

/// True if `player` owns at least one complete line.
pub fn has_line(board: &Board, player: Player) -> bool {
    let mark = Cell::Occupied(player);
    LINES
        .iter()
        .any(|line| line.iter().all(|&action| board.get(action) == mark))
}

/// Winner of a game state, if any.
pub fn winner(state: &GameState) -> Option<Player> {
    check_winner(state.board())
}
