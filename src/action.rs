//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. The engine builds them from
//! its own turn marker, validates them against the contracts, and logs the
//! rejection reason when a move is ignored.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a move was ignored.
///
/// Rejected moves are no-ops at the engine surface; the reason is only
/// observable in logs and in contract checks.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejection {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The index does not name a cell on the grid.
    #[display("Index {} is outside the grid", _0)]
    IndexOutOfRange(usize),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveRejection {}
