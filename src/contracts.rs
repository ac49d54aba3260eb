//! Contract-based validation for move transitions.
//!
//! Contracts define correctness through preconditions and postconditions.
//! The preconditions decide whether a move is accepted; a failure puts the
//! engine on its no-op path rather than raising an error. Postconditions
//! are checked in debug builds after every accepted move.

use crate::action::{Move, MoveRejection};
use crate::engine::Game;
use crate::invariants::{GameInvariants, InvariantSet};
use tracing::instrument;

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveRejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveRejection>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The game must still be in progress.
pub struct GameIsLive;

impl GameIsLive {
    /// Checks that the game has not ended.
    #[instrument(skip(game))]
    pub fn check(_mov: &Move, game: &Game) -> Result<(), MoveRejection> {
        if game.is_over() {
            Err(MoveRejection::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Checks that the target square holds no mark.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveRejection> {
        if !game.board().is_empty(mov.position) {
            Err(MoveRejection::SquareOccupied(mov.position))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: a move is legal if the game is live and the
/// square is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveRejection> {
        GameIsLive::check(mov, game)?;
        SquareIsEmpty::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move transitions.
///
/// Preconditions:
/// - Game must be in progress
/// - Square must be empty
///
/// Postconditions:
/// - Mark counts stay balanced and agree with the turn marker
/// - Status matches the outcome recomputed from the board
/// - The winning line is recorded exactly when the game is won
pub struct MoveContract;

impl Contract<Game, Move> for MoveContract {
    fn pre(game: &Game, action: &Move) -> Result<(), MoveRejection> {
        LegalMove::check(action, game)
    }

    fn post(_before: &Game, after: &Game) -> Result<(), MoveRejection> {
        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveRejection::InvariantViolation(descriptions)
        })
    }
}
