//! Pure tic-tac-toe game logic.
//!
//! The engine owns the board, the turn marker, and the game status derived
//! from the board. A renderer feeds cell selections into [`Game::select`]
//! (or [`Game::play`] with a typed [`Position`]) and redraws from the
//! returned state. Rejected selections - an occupied square, a finished
//! game, an out-of-range index - return the state unchanged instead of
//! erroring, so the renderer never has to guard a click.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Game, GameStatus, Player};
//!
//! let game = Game::new()
//!     .select(0) // X
//!     .select(4) // O
//!     .select(1) // X
//!     .select(4) // ignored: already occupied
//!     .select(5) // O
//!     .select(2); // X completes the top row
//!
//! assert_eq!(*game.status(), GameStatus::Won(Player::X));
//! assert!(game.winning_line().is_some());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod engine;
mod invariants;
mod position;
mod rules;
mod types;

// Crate-level exports - Actions
pub use action::{Move, MoveRejection};

// Crate-level exports - Contracts
pub use contracts::{Contract, GameIsLive, LegalMove, MoveContract, SquareIsEmpty};

// Crate-level exports - Engine
pub use engine::Game;

// Crate-level exports - Invariants
pub use invariants::{
    DerivedStatusInvariant, GameInvariants, Invariant, InvariantSet, InvariantViolation,
    MarkBalanceInvariant, WinningLineInvariant,
};

// Crate-level exports - Positions and rules
pub use position::Position;
pub use rules::{LINES, WinningLine, check_winner, is_draw, is_full, winning_line};

// Crate-level exports - Domain types
pub use types::{Board, GameStatus, Player, Square};
