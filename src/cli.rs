//! Command-line interface for the gomoku binary.

use clap::{Parser, Subcommand};

/// Strictly Gomoku - five-in-a-row against the built-in agent
#[derive(Parser, Debug)]
#[command(name = "gomoku")]
#[command(about = "Play five-in-a-row in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game against the built-in agent, moves typed as `row,col`
    Play {
        /// Path to a TOML game config
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Board width (overrides config)
        #[arg(long)]
        width: Option<usize>,

        /// Board height (overrides config)
        #[arg(long)]
        height: Option<usize>,

        /// Stones in a row needed to win (overrides config)
        #[arg(long)]
        n_in_row: Option<usize>,

        /// Let the agent place the first stone
        #[arg(long)]
        agent_first: bool,
    },
}
