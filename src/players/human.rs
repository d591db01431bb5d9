//! Human player reading `row,col` coordinates from a text stream.

use super::{Participant, ParticipantError, ParticipantKind};
use crate::games::gomoku::{BoardView, Location, MoveError};
use std::io::{BufRead, Stdin, Stdout, Write};
use tracing::{debug, instrument};

/// Human player using line-based text input.
///
/// Prompts with `Your move: ` and keeps asking until the reply names a
/// legal cell. Anything else prints `invalid move`.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a new human player over the given streams.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Consumes the player, returning its output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    #[instrument(skip(self, board), fields(player = %self.name))]
    fn read_move(&mut self, board: &BoardView<'_>) -> Result<usize, ParticipantError> {
        loop {
            write!(self.output, "Your move: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(ParticipantError::new("Input closed"));
            }

            match parse_move(&line, board) {
                Ok(index) => return Ok(index),
                Err(err) => {
                    debug!(%err, input = line.trim(), "Rejected input");
                    writeln!(self.output, "invalid move")?;
                }
            }
        }
    }
}

impl HumanPlayer<std::io::BufReader<Stdin>, Stdout> {
    /// Creates a human player on the process's stdin and stdout.
    pub fn stdio(name: impl Into<String>) -> Self {
        Self::new(
            name,
            std::io::BufReader::new(std::io::stdin()),
            std::io::stdout(),
        )
    }
}

/// Parses `row,col` and checks the cell is playable.
fn parse_move(line: &str, board: &BoardView<'_>) -> Result<usize, MoveError> {
    let location: Location = line.parse()?;
    let index = board.location_to_move(location)?;
    if !board.legal_moves().contains(&index) {
        return Err(MoveError::IllegalMove(index));
    }
    Ok(index)
}

impl<R: BufRead, W: Write> Participant for HumanPlayer<R, W> {
    fn get_action(&mut self, board: &BoardView<'_>) -> Result<usize, ParticipantError> {
        self.read_move(board)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ParticipantKind {
        ParticipantKind::Human
    }

    fn move_rejected(&mut self, error: &MoveError) {
        debug!(player = %self.name, %error, "Move rejected by coordinator");
        // Nothing useful to do if the terminal is gone; the next read fails anyway.
        let _ = writeln!(self.output, "invalid move");
    }
}
