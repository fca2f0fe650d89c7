//! Strictly Boxes - Unified CLI
//!
//! Dots and boxes against a capture-aware computer opponent.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{BoardArgs, Cli, Command};
use std::io::{BufReader, stdin, stdout};
use std::time::Duration;
use strictly_boxes::{
    ComputerContestant, GameConfig, GameSession, HumanContestant, Orchestrator, TextBoard,
    TraceSink,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play {
            board,
            computer_first,
        } => run_play(board, computer_first),
        Command::Demo { board } => run_demo(board),
    }
}

/// Human at the keyboard against the computer.
#[instrument(skip(board))]
fn run_play(board: BoardArgs, computer_first: bool) -> Result<()> {
    let config = board.resolve(computer_first)?;
    info!(?config, "Starting interactive game");

    let session = new_session(&config)?;
    let human = HumanContestant::new("You", BufReader::new(stdin()), stdout());
    let computer = ComputerContestant::new("Computer", *config.seed());

    let mut orchestrator = Orchestrator::new(
        session,
        Box::new(human),
        Box::new(computer),
        TextBoard::new(*config.line_length()),
        stdout(),
    )
    .with_pace(Duration::from_millis(*config.pace_ms()));

    if orchestrator.run()?.is_none() {
        println!("Goodbye.");
    }
    Ok(())
}

/// Computer against itself.
#[instrument(skip(board))]
fn run_demo(board: BoardArgs) -> Result<()> {
    let config = board.resolve(false)?;
    info!(?config, "Starting demo game");

    let session = new_session(&config)?;
    // Distinct seeds keep the two sides from mirroring each other.
    let first = ComputerContestant::new("Computer H", *config.seed());
    let second = ComputerContestant::new("Computer C", config.seed().map(|s| s.wrapping_add(1)));

    let mut orchestrator = Orchestrator::new(
        session,
        Box::new(first),
        Box::new(second),
        TextBoard::new(*config.line_length()),
        stdout(),
    )
    .with_pace(Duration::from_millis(*config.pace_ms()));

    orchestrator.run()?;
    Ok(())
}

fn new_session(config: &GameConfig) -> Result<GameSession> {
    let dims = config.dimensions()?;
    let session = GameSession::new(dims.rows, dims.cols, *config.first_player())
        .context("Failed to start game")?
        .with_sink(TraceSink);
    Ok(session)
}
