//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold throughout game
//! execution. They are testable independently and serve as documentation
//! of system guarantees. Every invariant here is derived from the state
//! alone - the engine keeps no move history to replay.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// This trait enables composition of multiple invariants into a single
/// verification step. Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

// Implement InvariantSet for 3-tuples
impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

// Implement InvariantSet for 2-tuples
impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod derived_status;
pub mod mark_balance;
pub mod winning_line;

pub use derived_status::DerivedStatusInvariant;
pub use mark_balance::MarkBalanceInvariant;
pub use winning_line::WinningLineInvariant;

/// All game invariants as a composable set.
pub type GameInvariants = (
    MarkBalanceInvariant,
    DerivedStatusInvariant,
    WinningLineInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Game;
    use crate::position::Position;
    use crate::types::{Player, Square};

    #[test]
    fn test_invariant_set_holds_for_fresh_game() {
        let game = Game::new();
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let game = Game::new()
            .play(Position::TopLeft)
            .play(Position::Center)
            .play(Position::TopRight);

        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut game = Game::new().play(Position::Center);

        // Corrupt the board
        game.board
            .set(Position::TopLeft, Square::Occupied(Player::O));

        let result = GameInvariants::check_all(&game);
        assert!(result.is_err());

        let violations = result.unwrap_err();
        assert!(!violations.is_empty());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = Game::new();

        type TwoInvariants = (MarkBalanceInvariant, DerivedStatusInvariant);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }
}
