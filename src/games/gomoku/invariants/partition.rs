//! Partition invariant: every cell is either available or occupied, never both.

use super::super::Board;
use super::Invariant;

/// Invariant: `available` is exactly the complement of the occupied cells.
pub struct PartitionInvariant;

impl Invariant<Board> for PartitionInvariant {
    fn holds(board: &Board) -> bool {
        let geometry = board.geometry();
        if board.cells.len() != geometry.cell_count() {
            return false;
        }
        if board.available.iter().any(|&index| !geometry.contains(index)) {
            return false;
        }

        geometry
            .moves()
            .all(|index| board.is_available(index) != board.owner_of(index).is_some())
    }

    fn description() -> &'static str {
        "Available moves are the complement of occupied cells"
    }
}
