//! End-to-end minimax scenarios.

mod common;

use common::state;
use strictly_tictactoe::{
    Action, Outcome, SearchConfig, SearchError, Solver, initial_state, is_terminal, minimax,
    self_play, utility, winner,
};

fn action(row: usize, col: usize) -> Action {
    Action::new(row, col).unwrap()
}

#[test]
fn test_empty_board_picks_top_left() {
    assert_eq!(minimax(&initial_state()), Ok(action(0, 0)));
}

#[test]
fn test_reference_traversal_of_empty_board() {
    let report = Solver::new(SearchConfig::reference())
        .search(&initial_state())
        .unwrap();
    assert_eq!(*report.action(), action(0, 0));
    assert_eq!(*report.value(), 0);
    assert_eq!(*report.nodes(), 549_946);
    assert_eq!(*report.leaves(), 255_168);
}

#[test]
fn test_takes_immediate_win() {
    let state = state("XX./OO./...");
    assert_eq!(minimax(&state), Ok(action(0, 2)));
}

#[test]
fn test_blocks_column_threat() {
    // O threatens column 2; X has no win of its own and must block.
    let threatened = state("..O/XXO/...");
    assert_eq!(threatened.player_to_move(), strictly_tictactoe::Player::X);
    assert_eq!(minimax(&threatened), Ok(action(2, 2)));

    let threatened = state("X.O/..O/.X.");
    assert_eq!(minimax(&threatened), Ok(action(2, 2)));
}

#[test]
fn test_column_threat_without_x_marks_is_unreachable() {
    // Two O marks and no X marks cannot arise from alternating play.
    assert!("..O/..O/...".parse::<strictly_tictactoe::GameState>().is_err());
}

#[test]
fn test_o_takes_immediate_win() {
    let state = state("XX./OO./X..");
    assert_eq!(minimax(&state), Ok(action(1, 2)));
}

#[test]
fn test_o_blocks_row_threat() {
    let state = state("XX./.O./...");
    assert_eq!(minimax(&state), Ok(action(0, 2)));
}

#[test]
fn test_full_board_draw_has_no_moves() {
    let full = state("XOX/XOO/OXX");
    assert!(is_terminal(&full));
    assert_eq!(winner(&full), None);
    assert_eq!(utility(&full), 0);
    assert_eq!(minimax(&full), Err(SearchError::NoMovesAvailable));
}

#[test]
fn test_won_board_has_no_moves() {
    let won = state("XXX/OO./...");
    assert_eq!(
        Solver::default().search(&won).unwrap_err(),
        SearchError::NoMovesAvailable
    );
    assert_eq!(
        Solver::default().ranked_actions(&won).unwrap_err(),
        SearchError::NoMovesAvailable
    );
}

#[test]
fn test_self_play_from_empty_board_draws() {
    let record = self_play(initial_state(), &Solver::default()).unwrap();
    assert!(record.outcome().is_draw());
    assert_eq!(record.moves().len(), 9);
    assert_eq!(utility(record.final_state()), 0);
}

#[test]
fn test_self_play_is_deterministic() {
    let first = self_play(initial_state(), &Solver::default()).unwrap();
    let second = self_play(initial_state(), &Solver::default()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_self_play_draws_after_every_opening() {
    for opening in initial_state().legal_actions() {
        let start = initial_state().apply(opening).unwrap();
        let record = self_play(start, &Solver::default()).unwrap();
        assert_eq!(*record.outcome(), Outcome::Draw, "opening {}", opening);
    }
}

#[test]
fn test_self_play_punishes_blunder() {
    // X opens in the corner, O answers on an edge and loses by force.
    let start = state("X../.../...").apply_at(0, 1).unwrap();
    let record = self_play(start, &Solver::default()).unwrap();
    assert_eq!(
        *record.outcome(),
        Outcome::Winner(strictly_tictactoe::Player::X)
    );
}

#[test]
fn test_chosen_value_matches_state_value() {
    let solver = Solver::default();
    let state = state("X../.O./...");
    let report = solver.search(&state).unwrap();
    assert_eq!(solver.value(&state), Ok(*report.value()));
}
