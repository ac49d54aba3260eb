//! Derived status invariant: status is a function of the board.

use super::Invariant;
use crate::engine::Game;
use crate::rules;
use crate::types::GameStatus;
use tracing::warn;

/// Invariant: The stored status equals the status recomputed from the board.
///
/// The engine derives the status as part of every accepted move; this
/// invariant rescans the board independently and compares.
pub struct DerivedStatusInvariant;

impl Invariant<Game> for DerivedStatusInvariant {
    fn holds(game: &Game) -> bool {
        let derived = match rules::check_winner(game.board()) {
            Some(player) => GameStatus::Won(player),
            None if rules::is_full(game.board()) => GameStatus::Draw,
            None => GameStatus::InProgress,
        };

        let valid = *game.status() == derived;
        if !valid {
            warn!(status = ?game.status(), ?derived, "Status out of step with board");
        }
        valid
    }

    fn description() -> &'static str {
        "Status matches the outcome recomputed from the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::{Player, Square};

    #[test]
    fn test_fresh_game_holds() {
        let game = Game::new();
        assert!(DerivedStatusInvariant::holds(&game));
    }

    #[test]
    fn test_holds_after_win() {
        let game = Game::new()
            .play(Position::TopLeft)
            .play(Position::Center)
            .play(Position::TopCenter)
            .play(Position::BottomLeft)
            .play(Position::TopRight);

        assert_eq!(*game.status(), GameStatus::Won(Player::X));
        assert!(DerivedStatusInvariant::holds(&game));
    }

    #[test]
    fn test_stale_status_violates() {
        let mut game = Game::new().play(Position::Center);

        game.status = GameStatus::Draw;

        assert!(!DerivedStatusInvariant::holds(&game));
    }

    #[test]
    fn test_unnoticed_win_violates() {
        let mut game = Game::new();

        // A complete row the status never caught
        game.board
            .set(Position::TopLeft, Square::Occupied(Player::X));
        game.board
            .set(Position::TopCenter, Square::Occupied(Player::X));
        game.board
            .set(Position::TopRight, Square::Occupied(Player::X));

        assert!(!DerivedStatusInvariant::holds(&game));
    }
}
