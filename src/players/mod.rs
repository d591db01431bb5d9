//! Participant trait and implementations.
//!
//! A participant is anything that can look at the board and propose a
//! move: a human typing coordinates or a search agent.

mod human;
mod simple_ai;

pub use human::HumanPlayer;
pub use simple_ai::SimpleAI;

use crate::games::gomoku::{BoardView, MoveError};
use derive_more::{Display, Error};
use tracing::instrument;

/// Kind of participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum ParticipantKind {
    /// Human typing moves; illegal proposals are re-prompted.
    Human,
    /// Search agent; an illegal proposal is a fatal integration error.
    Agent,
}

/// Trait for participants that can propose moves.
///
/// The call blocks until a move is available. The coordinator validates
/// the result; implementations may return any index.
pub trait Participant {
    /// Proposes a move index for the player to move.
    fn get_action(&mut self, board: &BoardView<'_>) -> Result<usize, ParticipantError>;

    /// Returns the participant's display name.
    fn name(&self) -> &str;

    /// Returns which kind of participant this is.
    fn kind(&self) -> ParticipantKind;

    /// Called when the coordinator rejected the last proposal and will ask again.
    fn move_rejected(&mut self, _error: &MoveError) {}
}

/// A participant could not produce a move at all.
#[derive(Debug, Clone, Display, Error)]
#[display("Participant error: {} at {}:{}", message, file, line)]
pub struct ParticipantError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ParticipantError {
    /// Creates a new participant error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for ParticipantError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}
