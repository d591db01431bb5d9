//! Five-in-a-row on a configurable rectangular grid.
//!
//! The [`Board`] is the single mutable entity. Rules, feature encoding and
//! contracts are free functions and zero-sized types that read it.

mod action;
mod board;
mod contracts;
mod features;
mod geometry;
mod invariants;
mod phases;
mod rules;
mod types;
mod view;

pub use action::{Move, MoveError};
pub use board::Board;
pub use contracts::{CellIsAvailable, Contract, LegalMove, MoveContract, PlayersTurn};
pub use features::{encode, PLANES};
pub use geometry::Geometry;
pub use invariants::{
    AlternatingTurnInvariant, GomokuInvariants, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, PartitionInvariant,
};
pub use phases::{GameStatus, Outcome};
pub use rules::{
    check_winner, find_winning_run, is_draw, is_full, terminal_status, Direction, WinningRun,
};
pub use types::{Location, Player};
pub use view::BoardView;
