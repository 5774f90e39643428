//! Optional search features never change the chosen action.

mod common;

use common::{reachable_states, state};
use std::io::Write;
use strictly_tictactoe::{
    SearchConfig, SearchError, Solver, initial_state, is_terminal,
};

#[test]
fn test_memoization_preserves_choice_everywhere() {
    let reference = Solver::new(SearchConfig::reference());
    let memoized = Solver::new(SearchConfig::reference().with_memoize(true));

    for state in reachable_states().iter().filter(|s| !is_terminal(s)) {
        let expected = reference.search(state).unwrap();
        let actual = memoized.search(state).unwrap();
        assert_eq!(actual.action(), expected.action(), "on\n{}", state);
        assert_eq!(actual.value(), expected.value(), "on\n{}", state);
        assert!(actual.nodes() <= expected.nodes());
    }
}

#[test]
fn test_parallel_root_preserves_choice_everywhere() {
    let sequential = Solver::default();
    let parallel = Solver::new(SearchConfig::default().with_parallel_root(true));

    for state in reachable_states().iter().filter(|s| !is_terminal(s)) {
        let expected = sequential.search(state).unwrap();
        let actual = parallel.search(state).unwrap();
        assert_eq!(actual.action(), expected.action(), "on\n{}", state);
        assert_eq!(actual.value(), expected.value(), "on\n{}", state);
    }
}

#[test]
fn test_parallel_reference_counts_match_sequential() {
    let config = SearchConfig::reference().with_parallel_root(true);
    let report = Solver::new(config).search(&initial_state()).unwrap();
    assert_eq!(*report.nodes(), 549_946);
    assert_eq!(*report.leaves(), 255_168);
}

#[test]
fn test_ranked_actions_agree_across_configs() {
    let board = state("X../.O./...");
    let reference = Solver::new(SearchConfig::reference())
        .ranked_actions(&board)
        .unwrap();
    let parallel = Solver::new(SearchConfig::default().with_parallel_root(true))
        .ranked_actions(&board)
        .unwrap();
    assert_eq!(reference, parallel);
    assert_eq!(reference.len(), 7);
}

#[test]
fn test_zero_deadline_reports_timeout() {
    for config in [
        SearchConfig::reference(),
        SearchConfig::default(),
        SearchConfig::default().with_parallel_root(true),
    ] {
        let solver = Solver::new(config.with_deadline_ms(Some(0)));
        assert!(matches!(
            solver.search(&initial_state()),
            Err(SearchError::TimedOut { budget_ms: 0, .. })
        ));
    }
}

#[test]
fn test_generous_deadline_completes() {
    let solver = Solver::new(SearchConfig::default().with_deadline_ms(Some(60_000)));
    let report = solver.search(&initial_state()).unwrap();
    assert_eq!(report.action().index(), 0);
}

#[test]
fn test_terminal_check_precedes_deadline() {
    let solver = Solver::new(SearchConfig::default().with_deadline_ms(Some(0)));
    assert_eq!(
        solver.search(&state("XOX/XOO/OXX")).unwrap_err(),
        SearchError::NoMovesAvailable
    );
}

#[test]
fn test_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "memoize = false").unwrap();
    writeln!(file, "parallel_root = true").unwrap();
    writeln!(file, "deadline_ms = 5000").unwrap();

    let config = SearchConfig::from_file(file.path()).unwrap();
    assert_eq!(
        config,
        SearchConfig::reference()
            .with_parallel_root(true)
            .with_deadline_ms(Some(5000))
    );
}

#[test]
fn test_missing_config_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = SearchConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_report_serializes() {
    let report = Solver::default()
        .search(&state("XX./OO./..."))
        .unwrap();
    let json = serde_json::to_value(report).unwrap();
    assert_eq!(json["action"], serde_json::json!([0, 2]));
    assert_eq!(json["value"], 1);
}
