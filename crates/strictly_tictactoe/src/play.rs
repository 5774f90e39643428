//! Minimax against itself.

use crate::action::Action;
use crate::error::SearchError;
use crate::rules::outcome;
use crate::search::Solver;
use crate::state::GameState;
use crate::types::{Outcome, Player};
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, info, instrument};

/// One ply of a recorded game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ply {
    /// Who moved.
    pub player: Player,
    /// Where they moved.
    pub action: Action,
}

/// A finished game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct GameRecord {
    /// Plies in the order they were played.
    moves: Vec<Ply>,
    /// The terminal position.
    final_state: GameState,
    /// How the game ended.
    outcome: Outcome,
}

/// Plays `solver` against itself from `start` until the game ends.
///
/// A `start` that is already terminal yields a record with no moves.
#[instrument(skip(start, solver), fields(ply = start.ply()))]
pub fn self_play(start: GameState, solver: &Solver) -> Result<GameRecord, SearchError> {
    let mut state = start;
    let mut moves = Vec::with_capacity(9 - state.ply());

    loop {
        if let Some(outcome) = outcome(&state) {
            info!(%outcome, plies = moves.len(), "Self-play finished");
            return Ok(GameRecord {
                moves,
                final_state: state,
                outcome,
            });
        }

        let player = state.player_to_move();
        let report = solver.search(&state)?;
        let action = *report.action();
        debug!(%player, %action, value = *report.value(), "Self-play move");

        state = state.place(action);
        moves.push(Ply { player, action });
    }
}
