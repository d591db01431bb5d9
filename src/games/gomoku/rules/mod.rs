//! Game rules for five-in-a-row.
//!
//! Pure functions over a [`Board`]; the board itself never asks
//! whether the game is over.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, find_winning_run, Direction, WinningRun};

use super::phases::GameStatus;
use super::Board;
use tracing::instrument;

/// Combines win and draw detection into a single status.
#[instrument(skip(board), fields(stones = board.move_count()))]
pub fn terminal_status(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
