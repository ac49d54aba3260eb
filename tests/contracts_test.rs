//! Tests for move contracts and the composed invariant set, through the
//! public API.

use tictactoe_core::{
    Contract, Game, GameInvariants, GameStatus, InvariantSet, Move, MoveContract, MoveRejection,
    Player, Position,
};

#[test]
fn test_legal_move_passes_precondition() {
    let game = Game::new();
    let action = Move::new(Player::X, Position::Center);

    assert!(MoveContract::pre(&game, &action).is_ok());
}

#[test]
fn test_occupied_square_fails_precondition() {
    let game = Game::new().play(Position::Center);

    let action = Move::new(Player::O, Position::Center);
    let result = MoveContract::pre(&game, &action);
    assert_eq!(
        result,
        Err(MoveRejection::SquareOccupied(Position::Center))
    );
}

#[test]
fn test_finished_game_fails_precondition() {
    let game = Game::new()
        .play(Position::TopLeft)
        .play(Position::Center)
        .play(Position::TopCenter)
        .play(Position::BottomLeft)
        .play(Position::TopRight);
    assert_eq!(*game.status(), GameStatus::Won(Player::X));

    let action = Move::new(Player::O, Position::BottomRight);
    assert_eq!(MoveContract::pre(&game, &action), Err(MoveRejection::GameOver));
}

#[test]
fn test_rejection_reasons_display() {
    assert_eq!(
        MoveRejection::SquareOccupied(Position::Center).to_string(),
        "Square Center is already occupied"
    );
    assert_eq!(MoveRejection::GameOver.to_string(), "Game is already over");
    assert_eq!(
        MoveRejection::IndexOutOfRange(9).to_string(),
        "Index 9 is outside the grid"
    );
}

#[test]
fn test_invariants_hold_along_a_full_game() {
    let mut game = Game::new();
    assert!(GameInvariants::check_all(&game).is_ok());

    for index in [0, 4, 1, 5, 2] {
        game = game.select(index);
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    assert_eq!(*game.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_invariants_hold_through_rejections() {
    let game = Game::new().select(0).select(0).select(9).select(4);

    assert!(GameInvariants::check_all(&game).is_ok());
    assert_eq!(game.to_move(), Player::X);
}

#[test]
fn test_postcondition_accepts_real_transition() {
    let before = Game::new().play(Position::Center);
    let after = before.clone().play(Position::TopLeft);

    assert!(MoveContract::post(&before, &after).is_ok());
}
