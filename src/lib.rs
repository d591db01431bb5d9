//! Strictly Gomoku - authoritative game state for five-in-a-row
//!
//! This library tracks stones on a configurable grid, enforces move
//! legality, detects wins and draws, and encodes positions as feature
//! planes for an external search agent.
//!
//! # Architecture
//!
//! - **Games**: the board state machine, rules and feature encoding
//! - **Players**: the participant trait with human and agent implementations
//! - **Orchestrator**: the turn coordinator that alternates participants
//! - **Config**: board dimensions and win length, loadable from TOML
//!
//! # Example
//!
//! ```
//! use strictly_gomoku::{Board, GameStatus, Location, Player};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut board = Board::new(8, 8, 5)?;
//! let index = board.location_to_move(Location::new(3, 4))?;
//! board.apply_move(index)?;
//!
//! assert_eq!(board.owner_of(index), Some(Player::Black));
//! assert_eq!(board.status(), GameStatus::InProgress);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod orchestrator;
mod players;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Game types
pub use games::gomoku::{
    check_winner, encode, find_winning_run, is_draw, is_full, terminal_status,
    AlternatingTurnInvariant, Board, BoardView, CellIsAvailable, Contract, Direction, GameStatus,
    Geometry, GomokuInvariants, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, LegalMove, Location, Move, MoveContract, MoveError, Outcome,
    PartitionInvariant, Player, PlayersTurn, WinningRun, PLANES,
};

// Crate-level exports - Participants
pub use players::{HumanPlayer, Participant, ParticipantError, ParticipantKind, SimpleAI};

// Crate-level exports - Turn coordination
pub use orchestrator::{CoordinatorError, TurnCoordinator, TurnState};
