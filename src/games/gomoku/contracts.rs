//! Contract-based validation for five-in-a-row.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, MoveError};
use super::invariants::{GomokuInvariants, InvariantSet};
use super::Board;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The move must be in the board's available set.
pub struct CellIsAvailable;

impl CellIsAvailable {
    /// Checks that the target cell is on the board and empty.
    #[instrument(skip(board))]
    pub fn check(mov: &Move, board: &Board) -> Result<(), MoveError> {
        if board.is_available(mov.index()) {
            Ok(())
        } else {
            Err(MoveError::IllegalMove(mov.index()))
        }
    }
}

/// Precondition: It must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Checks that the mover is the player to move.
    #[instrument(skip(board))]
    pub fn check(mov: &Move, board: &Board) -> Result<(), MoveError> {
        if mov.player() != board.current_player() {
            Err(MoveError::WrongPlayer(mov.player()))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: the cell is available and it's the player's turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(board))]
    pub fn check(mov: &Move, board: &Board) -> Result<(), MoveError> {
        PlayersTurn::check(mov, board)?;
        CellIsAvailable::check(mov, board)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Cell must be available
/// - Must be player's turn
///
/// Postconditions:
/// - Exactly one stone was added
/// - Cells still partition into available and occupied
/// - Players still alternate
/// - History remains consistent with the board
pub struct MoveContract;

impl Contract<Board, Move> for MoveContract {
    fn pre(board: &Board, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, board)
    }

    fn post(before: &Board, after: &Board) -> Result<(), MoveError> {
        if after.move_count() != before.move_count() + 1 {
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: stone count went from {} to {}",
                before.move_count(),
                after.move_count()
            )));
        }

        GomokuInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

/// Asserts that all board invariants hold (panic on violation in debug builds).
#[instrument(skip(board))]
pub fn assert_invariants(board: &Board) {
    if let Err(violations) = GomokuInvariants::check_all(board) {
        warn!(?violations, "Board invariants violated");
        debug_assert!(false, "Board invariants violated: {:?}", violations);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::gomoku::Player;

    #[test]
    fn test_precondition_empty_cell() {
        let board = Board::new(8, 8, 5).unwrap();
        let action = Move::new(Player::Black, 27);
        assert!(MoveContract::pre(&board, &action).is_ok());
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let mut board = Board::new(8, 8, 5).unwrap();
        board.apply_move(27).unwrap();

        let action = Move::new(Player::White, 27);
        assert_eq!(
            MoveContract::pre(&board, &action),
            Err(MoveError::IllegalMove(27))
        );
    }

    #[test]
    fn test_precondition_off_board() {
        let board = Board::new(8, 8, 5).unwrap();
        let action = Move::new(Player::Black, 64);
        assert_eq!(
            MoveContract::pre(&board, &action),
            Err(MoveError::IllegalMove(64))
        );
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let board = Board::new(8, 8, 5).unwrap();
        let action = Move::new(Player::White, 27);
        assert_eq!(
            MoveContract::pre(&board, &action),
            Err(MoveError::WrongPlayer(Player::White))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = Board::new(8, 8, 5).unwrap();
        let mut after = before.clone();
        after.apply_move(27).unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_missing_move() {
        let before = Board::new(8, 8, 5).unwrap();
        assert!(MoveContract::post(&before, &before).is_err());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = Board::new(8, 8, 5).unwrap();
        let mut after = before.clone();
        after.apply_move(27).unwrap();

        // Hand Black's stone to White.
        after.cells[27] = Some(Player::White);

        assert!(MoveContract::post(&before, &after).is_err());
    }
}
