//! Core domain types for five-in-a-row.

use super::action::MoveError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    /// First entry of the player pair.
    Black,
    /// Second entry of the player pair.
    White,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

/// A (row, col) cell coordinate, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Row, counted from the top.
    pub row: usize,
    /// Column, counted from the left.
    pub col: usize,
}

impl Location {
    /// Creates a new location.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Letter+number label for echoing moves, e.g. `(1, 2)` is `B3`.
    ///
    /// Rows past `Z` continue through the following code points.
    #[instrument]
    pub fn notation(&self) -> String {
        let letter = u32::try_from(self.row)
            .ok()
            .and_then(|row| char::from_u32(u32::from(b'A') + row))
            .unwrap_or('?');
        format!("{}{}", letter, self.col + 1)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl FromStr for Location {
    type Err = MoveError;

    /// Parses `row,col`. Surrounding whitespace around either number is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unparseable = || MoveError::Unparseable(s.trim().to_string());

        let (row, col) = s.trim().split_once(',').ok_or_else(unparseable)?;
        let row = row.trim().parse::<usize>().map_err(|_| unparseable())?;
        let col = col.trim().parse::<usize>().map_err(|_| unparseable())?;

        Ok(Self { row, col })
    }
}
