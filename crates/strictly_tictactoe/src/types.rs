//! Core domain types for tic-tac-toe.

use crate::action::Action;
use crate::error::BoardParseError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// Player X (moves on even plies).
    X,
    /// Player O (moves on odd plies).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Character used for this player's mark.
    pub fn mark(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns true if no mark has been placed here.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the owner of the cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(player) => player.mark(),
        }
    }
}

/// 3x3 tic-tac-toe board, stored row-major.
///
/// `Board` is `Copy`: applying a move always produces a fresh value and
/// never touches the board it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell addressed by an action.
    pub fn get(&self, action: Action) -> Cell {
        self.cells[action.row()][action.col()]
    }

    /// Returns a copy of this board with `cell` written at `action`.
    pub(crate) fn with(mut self, action: Action, cell: Cell) -> Self {
        self.cells[action.row()][action.col()] = cell;
        self
    }

    /// Checks if the cell at `action` is empty.
    pub fn is_empty(&self, action: Action) -> bool {
        self.get(action).is_empty()
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    /// Number of occupied cells.
    pub fn count_occupied(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Number of cells marked by `player`.
    pub fn count_marks(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.player() == Some(player))
            .count()
    }

    /// True when every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.count_occupied() == 9
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, row) in self.cells.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells in row-major order.
    ///
    /// `X`/`x` and `O`/`o` are marks; `.`, `-`, `_` and space are empty.
    /// Row separators (`/`, `|`, newlines) are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for ch in s.chars() {
            let cell = match ch {
                'X' | 'x' => Cell::Occupied(Player::X),
                'O' | 'o' => Cell::Occupied(Player::O),
                '.' | '-' | '_' | ' ' => Cell::Empty,
                '/' | '|' | '\n' | '\r' => continue,
                other => return Err(BoardParseError::InvalidCharacter(other)),
            };
            cells.push(cell);
        }

        if cells.len() != 9 {
            return Err(BoardParseError::WrongCellCount(cells.len()));
        }

        let mut board = Board::new();
        for (idx, cell) in cells.into_iter().enumerate() {
            board.cells[idx / 3][idx % 3] = cell;
        }
        Ok(board)
    }
}

/// Outcome value from X's perspective: +1 X wins, -1 O wins, 0 otherwise.
pub type Utility = i8;

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
