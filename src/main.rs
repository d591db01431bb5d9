//! Strictly Gomoku - terminal host
//!
//! Wires a human on stdin/stdout and the built-in agent through the
//! turn coordinator.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use strictly_gomoku::{
    Board, GameConfig, HumanPlayer, Location, Participant, Player, SimpleAI, TurnCoordinator,
    TurnState,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            width,
            height,
            n_in_row,
            agent_first,
        } => run_play(config, width, height, n_in_row, agent_first),
    }
}

/// Run an interactive game against the built-in agent
#[instrument]
fn run_play(
    config_path: Option<PathBuf>,
    width: Option<usize>,
    height: Option<usize>,
    n_in_row: Option<usize>,
    agent_first: bool,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    if let Some(width) = width {
        config = config.with_width(width);
    }
    if let Some(height) = height {
        config = config.with_height(height);
    }
    if let Some(n_in_row) = n_in_row {
        config = config.with_n_in_row(n_in_row);
    }
    config.validate()?;

    let human: Box<dyn Participant> = Box::new(HumanPlayer::stdio("Human"));
    let agent: Box<dyn Participant> = Box::new(SimpleAI::new("Agent"));

    // Whoever moves first takes the configured start colour.
    let (first, second) = if agent_first {
        (agent, human)
    } else {
        (human, agent)
    };
    let (black, white) = match config.start_player() {
        Player::Black => (first, second),
        Player::White => (second, first),
    };

    let mut game = TurnCoordinator::new(&config, black, white)?;
    info!(?config, "Starting game");

    println!(
        "{}x{} board, {} in a row wins. Enter moves as row,col (zero-based).",
        config.width(),
        config.height(),
        config.n_in_row()
    );
    println!("{}", render(game.board()));

    loop {
        let moves_before = game.board().move_count();
        let state = game.play_turn()?;

        if game.board().move_count() > moves_before {
            if let Some(last) = game.board().last_move() {
                let mover = game.board().current_player().opponent();
                println!(
                    "{} ({}) played {}",
                    game.participant(mover).name(),
                    mover,
                    game.board().move_to_location(last).notation()
                );
            }
            println!("{}", render(game.board()));
        }

        if let TurnState::GameOver(outcome) = state {
            match outcome.winner() {
                Some(winner) => println!("Game over. {} wins!", game.participant(winner).name()),
                None => println!("Game over. Draw."),
            }
            return Ok(());
        }
    }
}

/// Text grid: `X` for Black, `O` for White, `.` for empty.
fn render(board: &Board) -> String {
    let mut out = String::from("   ");
    for col in 0..board.width() {
        out.push_str(&format!("{:>3}", col));
    }
    out.push('\n');

    for row in 0..board.height() {
        out.push_str(&format!("{:>3}", row));
        for col in 0..board.width() {
            let symbol = board
                .location_to_move(Location::new(row, col))
                .ok()
                .and_then(|index| board.owner_of(index))
                .map(|player| match player {
                    Player::Black => 'X',
                    Player::White => 'O',
                })
                .unwrap_or('.');
            out.push_str(&format!("{:>3}", symbol));
        }
        out.push('\n');
    }
    out
}
