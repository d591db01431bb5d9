//! Feature planes consumed by the external search agent.
//!
//! Four planes of shape `(height, width)`, in order:
//!
//! 0. stones of the player to move
//! 1. stones of the other player
//! 2. the last move (all zero before the first move)
//! 3. all ones when an even number of stones has been played, else all zero
//!
//! The row axis is reversed, so board row 0
//! lands on the last tensor row. Evaluators trained on this orientation
//! depend on the exact layout.

use super::{Board, Location};
use ndarray::{Array3, Axis};
use tracing::instrument;

/// Number of feature planes.
pub const PLANES: usize = 4;

/// Encodes the board from the perspective of the player to move.
///
/// The tensor is indexed `[plane, row, col]` with shape
/// `(PLANES, height, width)` in standard layout. Board row `r` is stored at
/// tensor row `height - 1 - r`.
#[instrument(skip(board), fields(stones = board.move_count(), to_move = %board.current_player()))]
pub fn encode(board: &Board) -> Array3<f64> {
    let height = board.height();
    let mut planes = Array3::<f64>::zeros((PLANES, height, board.width()));
    let to_move = board.current_player();
    let mirrored = |index: usize| {
        let Location { row, col } = board.move_to_location(index);
        (height - 1 - row, col)
    };

    for (index, owner) in board.occupied() {
        let (row, col) = mirrored(index);
        let plane = if owner == to_move { 0 } else { 1 };
        planes[[plane, row, col]] = 1.0;
    }

    if let Some(last) = board.last_move() {
        let (row, col) = mirrored(last);
        planes[[2, row, col]] = 1.0;
    }

    if board.move_count() % 2 == 0 {
        planes.index_axis_mut(Axis(0), 3).fill(1.0);
    }

    planes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::gomoku::Player;

    #[test]
    fn test_empty_board() {
        let board = Board::new(8, 8, 5).unwrap();
        let planes = encode(&board);

        assert_eq!(planes.shape(), &[4, 8, 8]);
        assert!(planes.index_axis(Axis(0), 0).iter().all(|&v| v == 0.0));
        assert!(planes.index_axis(Axis(0), 1).iter().all(|&v| v == 0.0));
        assert!(planes.index_axis(Axis(0), 2).iter().all(|&v| v == 0.0));
        assert!(planes.index_axis(Axis(0), 3).iter().all(|&v| v == 1.0));
    }

    #[test]
    fn test_first_move_parity_and_mirror() {
        let mut board = Board::new(6, 6, 4).unwrap();
        board.apply_move(0).unwrap();
        let planes = encode(&board);

        // Black played (0,0); White is to move, so the stone is an opponent stone.
        assert!(planes.index_axis(Axis(0), 0).iter().all(|&v| v == 0.0));
        assert_eq!(planes[[1, 5, 0]], 1.0);
        assert_eq!(planes.index_axis(Axis(0), 1).sum(), 1.0);
        assert_eq!(planes[[2, 5, 0]], 1.0);
        assert_eq!(planes.index_axis(Axis(0), 2).sum(), 1.0);
        // One stone played: odd count, colour plane is all zero.
        assert!(planes.index_axis(Axis(0), 3).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_perspective_follows_player_to_move() {
        let mut board = Board::new(6, 6, 4).unwrap();
        board.apply_move(7).unwrap(); // Black at (1,1)
        board.apply_move(14).unwrap(); // White at (2,2)
        assert_eq!(board.current_player(), Player::Black);

        let planes = encode(&board);
        assert_eq!(planes[[0, 4, 1]], 1.0);
        assert_eq!(planes[[1, 3, 2]], 1.0);
        assert_eq!(planes[[2, 3, 2]], 1.0);
        assert!(planes.index_axis(Axis(0), 3).iter().all(|&v| v == 1.0));
    }

    #[test]
    fn test_rectangular_board_uses_width_for_columns() {
        let mut board = Board::new(5, 3, 3).unwrap();
        board.apply_move(7).unwrap(); // (1,2)
        let planes = encode(&board);

        assert_eq!(planes.shape(), &[4, 3, 5]);
        assert_eq!(planes[[1, 1, 2]], 1.0);
        assert_eq!(planes.index_axis(Axis(0), 1).sum(), 1.0);
    }

    #[test]
    fn test_rows_mirrored_on_tall_board() {
        let mut board = Board::new(3, 5, 3).unwrap();
        board.apply_move(0).unwrap(); // Black at (0,0)
        board.apply_move(14).unwrap(); // White at (4,2)
        let planes = encode(&board);

        assert_eq!(planes.shape(), &[4, 5, 3]);
        assert!(planes.is_standard_layout());
        assert_eq!(planes[[0, 4, 0]], 1.0);
        assert_eq!(planes[[1, 0, 2]], 1.0);
        assert_eq!(planes[[2, 0, 2]], 1.0);
        assert_eq!(planes.index_axis(Axis(0), 0).sum(), 1.0);
        assert_eq!(planes.index_axis(Axis(0), 1).sum(), 1.0);
    }
}
