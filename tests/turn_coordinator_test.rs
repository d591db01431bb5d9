//! Tests for turn coordination between participants.

use std::io::Cursor;
use strictly_gomoku::{
    BoardView, CoordinatorError, GameConfig, HumanPlayer, MoveError, Outcome, Participant,
    ParticipantError, ParticipantKind, Player, SimpleAI, TurnCoordinator, TurnState,
};

/// Agent that always proposes the same cell.
struct Stubborn(usize);

impl Participant for Stubborn {
    fn get_action(&mut self, _board: &BoardView<'_>) -> Result<usize, ParticipantError> {
        Ok(self.0)
    }

    fn name(&self) -> &str {
        "stubborn"
    }

    fn kind(&self) -> ParticipantKind {
        ParticipantKind::Agent
    }
}

fn human(input: &str) -> Box<dyn Participant> {
    Box::new(HumanPlayer::new(
        "human",
        Cursor::new(input.as_bytes().to_vec()),
        Vec::new(),
    ))
}

#[test]
fn test_human_beats_simple_ai() {
    // SimpleAI fills row 0 from the left; the human builds row 2.
    let moves = "2,0\n2,1\n2,2\n2,3\n2,4\n";
    let mut game = TurnCoordinator::new(
        &GameConfig::default(),
        human(moves),
        Box::new(SimpleAI::new("bot")),
    )
    .unwrap();

    assert_eq!(game.run().unwrap(), Outcome::Winner(Player::Black));
    assert_eq!(game.board().move_count(), 9);
    assert_eq!(game.state(), TurnState::GameOver(Outcome::Winner(Player::Black)));
}

#[test]
fn test_simple_ai_beats_slow_human() {
    // With Black, SimpleAI wins along row 0 while the human plays row 7.
    let moves = "7,0\n7,2\n7,4\n7,6\n";
    let mut game = TurnCoordinator::new(
        &GameConfig::default(),
        Box::new(SimpleAI::new("bot")),
        human(moves),
    )
    .unwrap();

    assert_eq!(game.run().unwrap(), Outcome::Winner(Player::Black));
    assert_eq!(game.participant(Player::Black).name(), "bot");
}

#[test]
fn test_human_typos_are_absorbed() {
    let mut game = TurnCoordinator::new(
        &GameConfig::default(),
        human("nonsense\n0,9\n3,3\n"),
        Box::new(SimpleAI::new("bot")),
    )
    .unwrap();

    assert_eq!(game.play_turn().unwrap(), TurnState::AwaitingMoveFrom(Player::White));
    assert_eq!(game.board().owner_of(27), Some(Player::Black));
}

#[test]
fn test_human_out_of_input_stops_the_game() {
    let mut game = TurnCoordinator::new(
        &GameConfig::default(),
        human(""),
        Box::new(SimpleAI::new("bot")),
    )
    .unwrap();

    assert!(matches!(game.run(), Err(CoordinatorError::Participant(_))));
    assert_eq!(game.board().move_count(), 0);
}

#[test]
fn test_agent_illegal_move_is_fatal() {
    let mut game = TurnCoordinator::new(
        &GameConfig::new(5, 5, 4),
        Box::new(Stubborn(12)),
        Box::new(Stubborn(12)),
    )
    .unwrap();

    game.play_turn().unwrap();
    let err = game.play_turn().unwrap_err();
    assert!(matches!(
        err,
        CoordinatorError::AgentContractViolation {
            source: MoveError::IllegalMove(12),
            ..
        }
    ));
    assert_eq!(game.board().move_count(), 1);
    assert_eq!(game.state(), TurnState::AwaitingMoveFrom(Player::White));
}

#[test]
fn test_agent_off_board_move_is_fatal() {
    let mut game = TurnCoordinator::new(
        &GameConfig::new(5, 5, 4),
        Box::new(Stubborn(25)),
        Box::new(SimpleAI::new("bot")),
    )
    .unwrap();

    assert!(matches!(
        game.play_turn(),
        Err(CoordinatorError::AgentContractViolation { .. })
    ));
    assert_eq!(game.board().move_count(), 0);
}

#[test]
fn test_two_agents_fill_small_board() {
    let mut game = TurnCoordinator::new(
        &GameConfig::new(3, 3, 3),
        Box::new(SimpleAI::new("a")),
        Box::new(SimpleAI::new("b")),
    )
    .unwrap();

    // Lowest-index play fills 0..=6 in order; Black completes the 2-4-6 diagonal.
    assert_eq!(game.run().unwrap(), Outcome::Winner(Player::Black));
    assert_eq!(game.board().move_count(), 7);
}

#[test]
fn test_bad_config_refuses_to_start() {
    let result = TurnCoordinator::new(
        &GameConfig::new(4, 4, 5),
        Box::new(SimpleAI::new("a")),
        Box::new(SimpleAI::new("b")),
    );
    assert!(result.is_err());
}
