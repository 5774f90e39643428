//! Immutable game state snapshots.

use crate::action::Action;
use crate::error::{BoardParseError, InvalidActionError};
use crate::invariants::{BoardBalanced, Invariant};
use crate::types::{Board, Cell, Player};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A snapshot of the game.
///
/// The player to move is derived from the number of occupied cells rather
/// than stored, so it can never drift out of sync with the board. States
/// are never mutated; [`GameState::apply`] returns a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Board", into = "Board")]
pub struct GameState {
    board: Board,
}

impl GameState {
    /// The empty starting position.
    pub fn initial() -> Self {
        Self::default()
    }

    /// Wraps an existing board, rejecting mark counts that alternating play
    /// starting with X cannot produce.
    pub fn from_board(board: Board) -> Result<Self, BoardParseError> {
        let x = board.count_marks(Player::X);
        let o = board.count_marks(Player::O);
        if x == o || x == o + 1 {
            Ok(Self { board })
        } else {
            Err(BoardParseError::Unbalanced { x, o })
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of plies played so far.
    pub fn ply(&self) -> usize {
        self.board.count_occupied()
    }

    /// X moves on even plies, O on odd plies.
    pub fn player_to_move(&self) -> Player {
        if self.ply() % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Empty cells in row-major order.
    pub fn legal_actions(&self) -> impl Iterator<Item = Action> + '_ {
        Action::ALL
            .into_iter()
            .filter(|action| self.board.is_empty(*action))
    }

    /// Places the mover's mark at `action`, returning the new state.
    #[instrument(skip(self), fields(ply = self.ply()))]
    pub fn apply(&self, action: Action) -> Result<Self, InvalidActionError> {
        if !self.board.is_empty(action) {
            return Err(InvalidActionError::Occupied(action));
        }
        Ok(self.place(action))
    }

    /// Like [`GameState::apply`] but takes raw coordinates.
    pub fn apply_at(&self, row: usize, col: usize) -> Result<Self, InvalidActionError> {
        self.apply(Action::new(row, col)?)
    }

    /// Places the mover's mark without the occupancy check.
    ///
    /// Only for actions drawn from [`GameState::legal_actions`].
    pub(crate) fn place(&self, action: Action) -> Self {
        debug_assert!(self.board.is_empty(action));
        let next = Self {
            board: self
                .board
                .with(action, Cell::Occupied(self.player_to_move())),
        };
        debug_assert!(
            BoardBalanced::holds(&next),
            "{}",
            BoardBalanced::description()
        );
        next
    }
}

impl TryFrom<Board> for GameState {
    type Error = BoardParseError;

    fn try_from(board: Board) -> Result<Self, Self::Error> {
        Self::from_board(board)
    }
}

impl From<GameState> for Board {
    fn from(state: GameState) -> Self {
        state.board
    }
}

impl FromStr for GameState {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_board(s.parse()?)
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.board)
    }
}

/// The empty board.
pub fn initial_state() -> GameState {
    GameState::initial()
}
