//! Read-only board view handed to participants.

use super::action::MoveError;
use super::{Board, Location, Player};
use ndarray::Array3;
use std::collections::BTreeSet;

/// Immutable window onto a board.
///
/// Exposes only queries; participants cannot change `occupied` or
/// `available` through it. Clone the board via [`BoardView::snapshot`]
/// to keep a copy beyond the current turn.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    board: &'a Board,
}

impl<'a> BoardView<'a> {
    /// Wraps a board.
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// Moves that may still be played.
    pub fn legal_moves(&self) -> &'a BTreeSet<usize> {
        self.board.legal_moves()
    }

    /// Player to move next.
    pub fn current_player(&self) -> Player {
        self.board.current_player()
    }

    /// Most recent move, `None` before the first.
    pub fn last_move(&self) -> Option<usize> {
        self.board.last_move()
    }

    /// Player owning the stone at `index`, if any.
    pub fn owner_of(&self, index: usize) -> Option<Player> {
        self.board.owner_of(index)
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.board.width()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.board.height()
    }

    /// Stones in a row needed to win.
    pub fn n_in_row(&self) -> usize {
        self.board.n_in_row()
    }

    /// Converts a move index to its location.
    pub fn move_to_location(&self, index: usize) -> Location {
        self.board.move_to_location(index)
    }

    /// Converts a location to its move index.
    pub fn location_to_move(&self, location: Location) -> Result<usize, MoveError> {
        self.board.location_to_move(location)
    }

    /// Feature planes from the perspective of the player to move.
    pub fn features(&self) -> Array3<f64> {
        self.board.features()
    }

    /// Owned copy of the underlying board.
    pub fn snapshot(&self) -> Board {
        self.board.clone()
    }
}
