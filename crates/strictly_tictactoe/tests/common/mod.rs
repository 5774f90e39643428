//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::HashSet;
use strictly_tictactoe::{GameState, is_terminal};

/// Every state reachable from the empty board under legal play.
pub fn reachable_states() -> Vec<GameState> {
    let mut seen = HashSet::new();
    let mut stack = vec![GameState::initial()];
    let mut states = Vec::new();

    while let Some(state) = stack.pop() {
        if !seen.insert(state) {
            continue;
        }
        states.push(state);
        if is_terminal(&state) {
            continue;
        }
        for action in state.legal_actions() {
            stack.push(state.apply(action).expect("legal action applies"));
        }
    }

    states
}

/// Parses a board literal, panicking on malformed fixtures.
pub fn state(board: &str) -> GameState {
    board.parse().expect("valid board fixture")
}
