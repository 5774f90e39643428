//! Exact minimax search.
//!
//! The solver walks the full game tree below a state with strict
//! alternation of maximizing (X) and minimizing (O) plies. Root actions are
//! tried in row-major order and a later action only replaces the current
//! best if it is strictly better for the mover, so the first action
//! reaching the best value wins ties.
//!
//! Memoization and root parallelism are optional. Both leave the chosen
//! action unchanged: memoized entries are exact subtree values, and
//! parallel root scores are merged in the same row-major order.

use crate::action::Action;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::rules::{is_terminal, utility};
use crate::state::GameState;
use crate::types::{Board, Player, Utility};
use derive_getters::Getters;
use serde::Serialize;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::{debug, instrument, warn};

/// Result of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize)]
pub struct SearchReport {
    /// Chosen action.
    action: Action,
    /// Exact game value after the chosen action, from X's perspective.
    value: Utility,
    /// States examined, the root included.
    nodes: u64,
    /// Terminal states reached.
    leaves: u64,
    /// Wall time spent.
    elapsed: Duration,
}

/// Node and leaf counters for one traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Tally {
    nodes: u64,
    leaves: u64,
}

impl std::ops::AddAssign for Tally {
    fn add_assign(&mut self, other: Self) {
        self.nodes += other.nodes;
        self.leaves += other.leaves;
    }
}

/// Wall-time budget shared by every walk in one search.
#[derive(Debug, Clone, Copy)]
struct Deadline {
    started: Instant,
    budget: Duration,
}

impl Deadline {
    fn check(&self) -> Result<(), SearchError> {
        let elapsed = self.started.elapsed();
        if elapsed >= self.budget {
            Err(SearchError::TimedOut {
                elapsed_ms: elapsed.as_millis() as u64,
                budget_ms: self.budget.as_millis() as u64,
            })
        } else {
            Ok(())
        }
    }
}

/// One recursive traversal with its own memo table and counters.
///
/// The memo key is the board alone: the player to move is a function of the
/// board, and subtree values do not depend on move order.
struct Walk {
    memo: Option<HashMap<Board, Utility>>,
    deadline: Option<Deadline>,
    tally: Tally,
}

impl Walk {
    fn new(memoize: bool, deadline: Option<Deadline>) -> Self {
        Self {
            memo: memoize.then(HashMap::new),
            deadline,
            tally: Tally::default(),
        }
    }

    /// Exact minimax value of `state`.
    fn value(&mut self, state: &GameState) -> Result<Utility, SearchError> {
        self.tally.nodes += 1;
        if let Some(deadline) = &self.deadline {
            deadline.check()?;
        }

        if is_terminal(state) {
            self.tally.leaves += 1;
            return Ok(utility(state));
        }

        if let Some(value) = self.memo.as_ref().and_then(|memo| memo.get(state.board())) {
            return Ok(*value);
        }

        let value = match state.player_to_move() {
            Player::X => self.max_value(state)?,
            Player::O => self.min_value(state)?,
        };

        if let Some(memo) = self.memo.as_mut() {
            memo.insert(*state.board(), value);
        }
        Ok(value)
    }

    fn max_value(&mut self, state: &GameState) -> Result<Utility, SearchError> {
        let mut best = Utility::MIN;
        for action in state.legal_actions() {
            best = best.max(self.value(&state.place(action))?);
        }
        Ok(best)
    }

    fn min_value(&mut self, state: &GameState) -> Result<Utility, SearchError> {
        let mut best = Utility::MAX;
        for action in state.legal_actions() {
            best = best.min(self.value(&state.place(action))?);
        }
        Ok(best)
    }
}

/// First action with the strictly best value for `mover`.
fn select(mover: Player, scored: &[(Action, Utility)]) -> Option<(Action, Utility)> {
    let mut best: Option<(Action, Utility)> = None;
    for &(action, value) in scored {
        let improves = match (best, mover) {
            (None, _) => true,
            (Some((_, current)), Player::X) => value > current,
            (Some((_, current)), Player::O) => value < current,
        };
        if improves {
            best = Some((action, value));
        }
    }
    best
}

/// Minimax solver.
#[derive(Debug, Clone, Default, Getters)]
pub struct Solver {
    config: SearchConfig,
}

impl Solver {
    /// Creates a solver with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Exact minimax value of any state. Terminal states return their utility.
    #[instrument(skip(self, state), fields(ply = state.ply()))]
    pub fn value(&self, state: &GameState) -> Result<Utility, SearchError> {
        let mut walk = Walk::new(*self.config.memoize(), self.deadline(Instant::now()));
        walk.value(state).inspect_err(|err| warn!(%err, "Value search aborted"))
    }

    /// Every legal action with the exact value it leads to, in row-major order.
    #[instrument(skip(self, state), fields(ply = state.ply()))]
    pub fn ranked_actions(&self, state: &GameState) -> Result<Vec<(Action, Utility)>, SearchError> {
        let (scored, _) = self.score_root(state, self.deadline(Instant::now()))?;
        Ok(scored)
    }

    /// Picks the optimal action for the player to move.
    ///
    /// Fails with [`SearchError::NoMovesAvailable`] on a terminal state and
    /// with [`SearchError::TimedOut`] if a configured deadline elapses.
    #[instrument(skip(self, state), fields(ply = state.ply(), mover = %state.player_to_move()))]
    pub fn search(&self, state: &GameState) -> Result<SearchReport, SearchError> {
        let started = Instant::now();
        let (scored, tally) = self
            .score_root(state, self.deadline(started))
            .inspect_err(|err| warn!(%err, "Search aborted"))?;

        let (action, value) =
            select(state.player_to_move(), &scored).ok_or(SearchError::NoMovesAvailable)?;

        let report = SearchReport {
            action,
            value,
            nodes: tally.nodes,
            leaves: tally.leaves,
            elapsed: started.elapsed(),
        };
        debug!(
            %action,
            value,
            nodes = report.nodes,
            leaves = report.leaves,
            elapsed_us = report.elapsed.as_micros() as u64,
            "Search complete"
        );
        Ok(report)
    }

    fn deadline(&self, started: Instant) -> Option<Deadline> {
        self.config
            .deadline()
            .map(|budget| Deadline { started, budget })
    }

    /// Scores each root action, counting the root itself as one node.
    fn score_root(
        &self,
        state: &GameState,
        deadline: Option<Deadline>,
    ) -> Result<(Vec<(Action, Utility)>, Tally), SearchError> {
        if is_terminal(state) {
            return Err(SearchError::NoMovesAvailable);
        }

        let mut tally = Tally {
            nodes: 1,
            leaves: 0,
        };

        let scored = if *self.config.parallel_root() {
            let branches = self.score_parallel(state, deadline)?;
            branches
                .into_iter()
                .map(|(action, value, branch)| {
                    tally += branch;
                    (action, value)
                })
                .collect()
        } else {
            let mut walk = Walk::new(*self.config.memoize(), deadline);
            let mut scored = Vec::with_capacity(9);
            for action in state.legal_actions() {
                scored.push((action, walk.value(&state.place(action))?));
            }
            tally += walk.tally;
            scored
        };

        Ok((scored, tally))
    }

    /// One scoped thread per root action, each with its own memo table.
    fn score_parallel(
        &self,
        state: &GameState,
        deadline: Option<Deadline>,
    ) -> Result<Vec<(Action, Utility, Tally)>, SearchError> {
        let memoize = *self.config.memoize();
        std::thread::scope(|scope| {
            let handles: Vec<_> = state
                .legal_actions()
                .map(|action| {
                    let child = state.place(action);
                    let handle = scope.spawn(move || {
                        let mut walk = Walk::new(memoize, deadline);
                        walk.value(&child).map(|value| (value, walk.tally))
                    });
                    (action, handle)
                })
                .collect();

            handles
                .into_iter()
                .map(|(action, handle)| {
                    let (value, tally) = handle
                        .join()
                        .unwrap_or_else(|payload| std::panic::resume_unwind(payload))?;
                    Ok::<_, SearchError>((action, value, tally))
                })
                .collect()
        })
    }
}

/// Optimal action for the player to move, using the default configuration.
pub fn minimax(state: &GameState) -> Result<Action, SearchError> {
    Solver::default()
        .search(state)
        .map(|report| *report.action())
}
