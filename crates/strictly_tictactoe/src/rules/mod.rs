//! Game rules for tic-tac-toe.
//!
//! Pure functions over boards and states. Rules are separated from board
//! storage so search and invariants can compose them freely.

pub mod terminal;
pub mod win;

pub use terminal::{is_full, is_terminal, outcome, utility};
pub use win::{LINES, check_winner, has_line, winner};
