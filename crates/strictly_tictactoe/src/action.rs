//! First-class action type for tic-tac-toe.
//!
//! An action is a board coordinate. Range is validated at construction,
//! so any `Action` in hand always addresses a real cell; occupancy is
//! checked when the action is applied to a state.

use crate::error::InvalidActionError;
use serde::{Deserialize, Serialize};

/// A (row, column) coordinate on the board, both in `0..3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Action {
    row: usize,
    col: usize,
}

impl Action {
    /// Every cell in row-major order. Search enumerates actions in this order.
    pub const ALL: [Action; 9] = [
        Action { row: 0, col: 0 },
        Action { row: 0, col: 1 },
        Action { row: 0, col: 2 },
        Action { row: 1, col: 0 },
        Action { row: 1, col: 1 },
        Action { row: 1, col: 2 },
        Action { row: 2, col: 0 },
        Action { row: 2, col: 1 },
        Action { row: 2, col: 2 },
    ];

    /// Creates an action, rejecting coordinates outside `0..3`.
    pub fn new(row: usize, col: usize) -> Result<Self, InvalidActionError> {
        if row < 3 && col < 3 {
            Ok(Self { row, col })
        } else {
            Err(InvalidActionError::OutOfRange { row, col })
        }
    }

    /// Creates an action from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }

    /// Row coordinate.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column coordinate.
    pub fn col(self) -> usize {
        self.col
    }
}

impl TryFrom<(usize, usize)> for Action {
    type Error = InvalidActionError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Self::new(row, col)
    }
}

impl From<Action> for (usize, usize) {
    fn from(action: Action) -> Self {
        (action.row, action.col)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_range() {
        assert!(Action::new(2, 2).is_ok());
        assert_eq!(
            Action::new(3, 0),
            Err(InvalidActionError::OutOfRange { row: 3, col: 0 })
        );
        assert_eq!(
            Action::new(0, 7),
            Err(InvalidActionError::OutOfRange { row: 0, col: 7 })
        );
    }

    #[test]
    fn test_all_is_row_major() {
        for (idx, action) in Action::ALL.iter().enumerate() {
            assert_eq!(action.index(), idx);
            assert_eq!(Action::from_index(idx), Some(*action));
        }
        assert_eq!(Action::from_index(9), None);
    }

    #[test]
    fn test_ordering_matches_row_major() {
        let mut shuffled = vec![Action::ALL[5], Action::ALL[0], Action::ALL[8], Action::ALL[3]];
        shuffled.sort();
        assert_eq!(
            shuffled,
            vec![Action::ALL[0], Action::ALL[3], Action::ALL[5], Action::ALL[8]]
        );
    }
}
