//! Simple agent for testing and offline play (no search).

use super::{Participant, ParticipantError, ParticipantKind};
use crate::games::gomoku::BoardView;
use tracing::debug;

/// Simple agent that picks the lowest available move index.
pub struct SimpleAI {
    name: String,
}

impl SimpleAI {
    /// Creates a new simple agent.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Participant for SimpleAI {
    fn get_action(&mut self, board: &BoardView<'_>) -> Result<usize, ParticipantError> {
        debug!(ai = %self.name, "AI making move");

        let index = board
            .legal_moves()
            .first()
            .copied()
            .ok_or_else(|| ParticipantError::new("No valid moves available"))?;

        debug!(ai = %self.name, index, "AI chose move");
        Ok(index)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ParticipantKind {
        ParticipantKind::Agent
    }
}
