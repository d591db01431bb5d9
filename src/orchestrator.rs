//! Turn coordination between two participants.
//!
//! The coordinator owns the board. It asks the participant whose turn it
//! is for a move, validates it, applies it and checks for a result.

use crate::config::{ConfigError, GameConfig};
use crate::games::gomoku::{Board, Contract, Move, MoveContract, MoveError, Outcome, Player};
use crate::players::{Participant, ParticipantError, ParticipantKind};
use tracing::{debug, info, instrument, warn};

/// Where the game stands between turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnState {
    /// Waiting for the participant playing this colour.
    AwaitingMoveFrom(Player),
    /// The game has a result.
    GameOver(Outcome),
}

/// Errors that stop the game loop.
#[derive(Debug, derive_more::Display, derive_more::From)]
pub enum CoordinatorError {
    /// A participant could not produce a move.
    #[display("{}", _0)]
    #[from]
    Participant(ParticipantError),

    /// The agent proposed a move that is not legal.
    #[display("Agent {} proposed an illegal move: {}", name, source)]
    AgentContractViolation {
        /// Agent's display name.
        name: String,
        /// Why the move was refused.
        source: MoveError,
    },

    /// A proposal failed for a reason re-prompting cannot fix.
    #[display("Move rejected: {}", _0)]
    Rejected(MoveError),

    /// Play was requested after the game ended.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for CoordinatorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CoordinatorError::Participant(err) => Some(err),
            CoordinatorError::AgentContractViolation { source, .. } => Some(source),
            CoordinatorError::Rejected(err) => Some(err),
            CoordinatorError::GameOver => None,
        }
    }
}

/// Orchestrates gameplay between two participants.
pub struct TurnCoordinator {
    board: Board,
    black: Box<dyn Participant>,
    white: Box<dyn Participant>,
    state: TurnState,
}

impl TurnCoordinator {
    /// Creates a coordinator with a fresh board.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the board cannot be built from `config`.
    #[instrument(skip(black, white), fields(black = black.name(), white = white.name()))]
    pub fn new(
        config: &GameConfig,
        black: Box<dyn Participant>,
        white: Box<dyn Participant>,
    ) -> Result<Self, ConfigError> {
        let board = Board::from_config(config)?;
        let state = TurnState::AwaitingMoveFrom(board.current_player());
        info!(start = %board.current_player(), "Game created");

        Ok(Self {
            board,
            black,
            white,
            state,
        })
    }

    /// Current state of the turn machine.
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// The board, read-only.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The participant playing `player`.
    pub fn participant(&self, player: Player) -> &dyn Participant {
        match player {
            Player::Black => self.black.as_ref(),
            Player::White => self.white.as_ref(),
        }
    }

    /// Validates and applies a move.
    ///
    /// On error the board and state are unchanged and the same player
    /// is still expected to move.
    #[instrument(skip(self), fields(player = %action.player(), index = action.index()))]
    pub fn submit(&mut self, action: Move) -> Result<TurnState, MoveError> {
        if let TurnState::GameOver(_) = self.state {
            return Err(MoveError::GameOver);
        }

        if let Err(err) = MoveContract::pre(&self.board, &action) {
            warn!(%err, "Move rejected");
            return Err(err);
        }

        #[cfg(debug_assertions)]
        let before = self.board.clone();

        self.board.apply_move(action.index())?;

        #[cfg(debug_assertions)]
        MoveContract::post(&before, &self.board)?;

        info!(
            notation = %self.board.move_to_location(action.index()).notation(),
            "Move played"
        );

        self.state = match self.board.status().outcome() {
            Some(outcome) => {
                info!(%outcome, moves = self.board.move_count(), "Game over");
                TurnState::GameOver(outcome)
            }
            None => TurnState::AwaitingMoveFrom(self.board.current_player()),
        };

        Ok(self.state)
    }

    /// Asks the participant to move for one proposal and applies it.
    ///
    /// A recoverable rejection of a human's proposal leaves the state
    /// unchanged so the next call asks the same human again. Any rejection
    /// of an agent's proposal is fatal.
    #[instrument(skip(self))]
    pub fn play_turn(&mut self) -> Result<TurnState, CoordinatorError> {
        let TurnState::AwaitingMoveFrom(player) = self.state else {
            return Err(CoordinatorError::GameOver);
        };

        let view = self.board.view();
        let participant = match player {
            Player::Black => &mut self.black,
            Player::White => &mut self.white,
        };
        let name = participant.name().to_string();
        let kind = participant.kind();

        debug!(player = %name, %kind, "Waiting for move");
        let index = participant.get_action(&view)?;

        match self.submit(Move::new(player, index)) {
            Ok(state) => Ok(state),
            Err(err) if kind == ParticipantKind::Human && err.is_recoverable() => {
                warn!(player = %name, %err, "Asking human again");
                let participant = match player {
                    Player::Black => &mut self.black,
                    Player::White => &mut self.white,
                };
                participant.move_rejected(&err);
                Ok(self.state)
            }
            Err(err) if kind == ParticipantKind::Agent => {
                warn!(agent = %name, %err, "Agent broke the move contract");
                Err(CoordinatorError::AgentContractViolation { name, source: err })
            }
            Err(err) => Err(CoordinatorError::Rejected(err)),
        }
    }

    /// Runs turns until the game ends.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Outcome, CoordinatorError> {
        info!("Starting game orchestration");

        loop {
            if let TurnState::GameOver(outcome) = self.play_turn()? {
                return Ok(outcome);
            }
        }
    }

    /// Clears the board and hands the first move to `start_player`.
    #[instrument(skip(self))]
    pub fn restart(&mut self, start_player: Player) {
        self.board.init_board(start_player);
        self.state = TurnState::AwaitingMoveFrom(start_player);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::gomoku::BoardView;
    use crate::players::SimpleAI;

    /// Plays a fixed list of indices, in order.
    struct Scripted {
        kind: ParticipantKind,
        moves: Vec<usize>,
    }

    impl Scripted {
        fn new(kind: ParticipantKind, moves: &[usize]) -> Self {
            Self {
                kind,
                moves: moves.iter().rev().copied().collect(),
            }
        }
    }

    impl Participant for Scripted {
        fn get_action(&mut self, _board: &BoardView<'_>) -> Result<usize, ParticipantError> {
            self.moves
                .pop()
                .ok_or_else(|| ParticipantError::new("Script exhausted"))
        }

        fn name(&self) -> &str {
            "scripted"
        }

        fn kind(&self) -> ParticipantKind {
            self.kind
        }
    }

    fn coordinator(black: Scripted, white: Scripted) -> TurnCoordinator {
        TurnCoordinator::new(&GameConfig::new(8, 8, 5), Box::new(black), Box::new(white))
            .expect("valid config")
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = coordinator(
            Scripted::new(ParticipantKind::Agent, &[0]),
            Scripted::new(ParticipantKind::Agent, &[8]),
        );
        assert_eq!(game.state(), TurnState::AwaitingMoveFrom(Player::Black));
        assert_eq!(game.play_turn().unwrap(), TurnState::AwaitingMoveFrom(Player::White));
        assert_eq!(game.play_turn().unwrap(), TurnState::AwaitingMoveFrom(Player::Black));
    }

    #[test]
    fn test_rejected_moves_keep_turn_and_board() {
        let mut game = coordinator(
            Scripted::new(ParticipantKind::Human, &[0, 99, 1]),
            Scripted::new(ParticipantKind::Agent, &[0, 8]),
        );
        game.play_turn().unwrap();
        // White agent proposes the occupied cell 0 first.
        assert!(matches!(
            game.play_turn(),
            Err(CoordinatorError::AgentContractViolation { source: MoveError::IllegalMove(0), .. })
        ));
        assert_eq!(game.board().move_count(), 1);
        assert_eq!(game.state(), TurnState::AwaitingMoveFrom(Player::White));

        game.play_turn().unwrap();
        let before = game.board().clone();
        assert_eq!(game.play_turn().unwrap(), TurnState::AwaitingMoveFrom(Player::Black));
        assert_eq!(game.board(), &before);
        assert_eq!(game.play_turn().unwrap(), TurnState::AwaitingMoveFrom(Player::White));
        assert_eq!(game.board().owner_of(1), Some(Player::Black));
    }

    #[test]
    fn test_submit_wrong_player() {
        let mut game = coordinator(
            Scripted::new(ParticipantKind::Agent, &[]),
            Scripted::new(ParticipantKind::Agent, &[]),
        );
        assert_eq!(
            game.submit(Move::new(Player::White, 0)),
            Err(MoveError::WrongPlayer(Player::White))
        );
        assert_eq!(game.board().move_count(), 0);
    }

    #[test]
    fn test_run_until_win_then_game_over() {
        let mut game = coordinator(
            Scripted::new(ParticipantKind::Agent, &[0, 1, 2, 3, 4]),
            Scripted::new(ParticipantKind::Agent, &[56, 57, 58, 59]),
        );
        assert_eq!(game.run().unwrap(), Outcome::Winner(Player::Black));
        assert_eq!(game.board().move_count(), 9);
        assert!(matches!(game.play_turn(), Err(CoordinatorError::GameOver)));
        assert_eq!(game.submit(Move::new(Player::White, 60)), Err(MoveError::GameOver));
    }

    #[test]
    fn test_restart() {
        let mut game = TurnCoordinator::new(
            &GameConfig::new(5, 5, 4),
            Box::new(SimpleAI::new("a")),
            Box::new(SimpleAI::new("b")),
        )
        .unwrap();
        game.play_turn().unwrap();

        game.restart(Player::White);
        assert_eq!(game.state(), TurnState::AwaitingMoveFrom(Player::White));
        assert_eq!(game.board().move_count(), 0);
        assert_eq!(game.board().current_player(), Player::White);
    }
}
