//! Draw detection logic for five-in-a-row.

use super::super::Board;
use tracing::instrument;

/// Checks if the board is full (no legal moves remain).
///
/// A full board with no winner indicates a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.legal_moves().is_empty()
}

/// Checks if the game is drawn: board full and nobody has a run.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && super::win::check_winner(board).is_none()
}
