//! Alternating turn invariant: stones alternate owners from the starting player.

use super::super::Board;
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// The k-th stone belongs to the start player when k is even and to the
/// opponent otherwise, and the player to move follows the same rule.
pub struct AlternatingTurnInvariant;

impl Invariant<Board> for AlternatingTurnInvariant {
    fn holds(board: &Board) -> bool {
        let start = board.start_player();
        let owner_at = |ply: usize| if ply % 2 == 0 { start } else { start.opponent() };

        let stones_alternate = board
            .history()
            .iter()
            .enumerate()
            .all(|(ply, &index)| board.owner_of(index) == Some(owner_at(ply)));

        stones_alternate && board.current_player() == owner_at(board.move_count())
    }

    fn description() -> &'static str {
        "Players alternate turns starting from the start player"
    }
}
