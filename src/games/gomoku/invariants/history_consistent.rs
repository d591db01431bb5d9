//! History consistency invariant: history, occupancy and last move agree.

use super::super::Board;
use super::Invariant;
use std::collections::HashSet;

/// Invariant: History length equals number of occupied cells.
///
/// Every move in history is unique and occupied, no cell is filled
/// without a move, and `last_move` is the final history entry.
pub struct HistoryConsistentInvariant;

impl Invariant<Board> for HistoryConsistentInvariant {
    fn holds(board: &Board) -> bool {
        let history = board.history();

        let unique: HashSet<_> = history.iter().collect();
        if unique.len() != history.len() {
            return false;
        }

        if history.iter().any(|&index| board.owner_of(index).is_none()) {
            return false;
        }

        let occupied_count = board.cells.iter().filter(|cell| cell.is_some()).count();

        occupied_count == history.len() && board.last_move() == history.last().copied()
    }

    fn description() -> &'static str {
        "History matches occupied cells and last move"
    }
}
