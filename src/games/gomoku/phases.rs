//! Game status and outcome types.

use serde::{Deserialize, Serialize};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(super::Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns the outcome if the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(Outcome::Winner(*player)),
            GameStatus::Draw => Some(Outcome::Draw),
        }
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(super::Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<super::Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
