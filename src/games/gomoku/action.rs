//! First-class action types for five-in-a-row.
//!
//! A move is a linear cell index. `Move` pairs it with the player
//! proposing it so turn order can be validated before application.

use super::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player placing a stone at a linear cell index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The cell index, `row * width + col`.
    pub index: usize,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, index: usize) -> Self {
        Self { player, index }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the cell index of this move.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.index)
    }
}

/// Error that can occur when locating, validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The coordinate lies outside the grid.
    #[display("Location {},{} is outside the board", row, col)]
    InvalidLocation {
        /// Offending row.
        row: usize,
        /// Offending column.
        col: usize,
    },

    /// The move index is not currently available.
    #[display("Move {} is not available", _0)]
    IllegalMove(usize),

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// Text input was not two comma-separated non-negative integers.
    #[display("Cannot read '{}' as row,col", _0)]
    Unparseable(String),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

impl MoveError {
    /// Whether a human adapter should absorb this error and ask again.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            MoveError::InvalidLocation { .. }
                | MoveError::IllegalMove(_)
                | MoveError::Unparseable(_)
        )
    }
}
