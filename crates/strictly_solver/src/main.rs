//! Strictly Solver - command-line driver for the tic-tac-toe minimax engine.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use strictly_tictactoe::{GameState, SearchConfig, Solver, self_play};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();
    let solver = Solver::new(load_config(cli.config.as_deref())?);

    match cli.command {
        Command::BestMove { board } => run_best_move(&solver, &board),
        Command::Analyze { board } => run_analyze(&solver, &board),
        Command::SelfPlay { board } => run_self_play(&solver, &board),
    }
}

#[instrument]
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,strictly_tictactoe=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[instrument]
fn load_config(path: Option<&Path>) -> Result<SearchConfig> {
    match path {
        Some(path) => SearchConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display())),
        None => {
            info!("No config given, using defaults");
            Ok(SearchConfig::default())
        }
    }
}

fn parse_state(board: &str) -> Result<GameState> {
    board
        .parse()
        .with_context(|| format!("invalid board {:?}", board))
}

/// Print the optimal move
#[instrument(skip(solver))]
fn run_best_move(solver: &Solver, board: &str) -> Result<()> {
    let state = parse_state(board)?;
    let report = solver.search(&state)?;

    println!("{}\n", state);
    println!(
        "{} plays {} (value {}, {} nodes, {:?})",
        state.player_to_move(),
        report.action(),
        report.value(),
        report.nodes(),
        report.elapsed()
    );
    Ok(())
}

/// Print every legal move with its value
#[instrument(skip(solver))]
fn run_analyze(solver: &Solver, board: &str) -> Result<()> {
    let state = parse_state(board)?;
    let ranked = solver.ranked_actions(&state)?;

    println!("{}\n", state);
    println!("{} to move", state.player_to_move());
    for (action, value) in ranked {
        let verdict = match value {
            1 => "X wins",
            -1 => "O wins",
            _ => "draw",
        };
        println!("  {} -> {:+} ({})", action, value, verdict);
    }
    Ok(())
}

/// Play the engine against itself
#[instrument(skip(solver))]
fn run_self_play(solver: &Solver, board: &str) -> Result<()> {
    let start = parse_state(board)?;
    let record = self_play(start, solver)?;

    let mut state = start;
    println!("{}\n", state);
    for ply in record.moves() {
        state = state.apply(ply.action)?;
        println!("{} plays {}\n{}\n", ply.player, ply.action, state);
    }
    println!("{}", record.outcome());
    Ok(())
}
