//! Game engine: the state tuple and its single transition.
//!
//! A renderer owns a [`Game`] value, feeds cell selections into it, and
//! replaces its copy wholesale with the returned state. Rejected selections
//! (occupied square, finished game, out-of-range index) return the state
//! unchanged - a click the renderer need not guard against - so the engine
//! surface has no error type.

use crate::action::{Move, MoveRejection};
use crate::contracts::{Contract, MoveContract};
use crate::position::Position;
use crate::rules;
use crate::rules::WinningLine;
use crate::types::{Board, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete game state: board, turn marker, and derived outcome.
///
/// The status and winning line are recomputed from the board as part of
/// every accepted move, never observable in an intermediate state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) status: GameStatus,
    pub(crate) winning_line: Option<WinningLine>,
}

// ─────────────────────────────────────────────────────────────
//  Construction and restart
// ─────────────────────────────────────────────────────────────

impl Game {
    /// Creates a fresh game: empty board, X to move, in progress.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            status: GameStatus::InProgress,
            winning_line: None,
        }
    }

    /// Resets to a fresh game, regardless of the current state.
    #[instrument(skip(self))]
    pub fn restart(self) -> Self {
        Self::new()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  The move transition
// ─────────────────────────────────────────────────────────────

impl Game {
    /// Handles "cell `index` selected" straight from a renderer.
    ///
    /// Indices outside 0-8 are ignored like any other rejected move.
    #[instrument(skip(self))]
    pub fn select(self, index: usize) -> Self {
        match Position::from_index(index) {
            Some(pos) => self.play(pos),
            None => {
                debug!(
                    rejection = %MoveRejection::IndexOutOfRange(index),
                    "move ignored"
                );
                self
            }
        }
    }

    /// Places the mark of the player to move at `pos`.
    ///
    /// When the move is accepted, the winning line and status are derived
    /// from the new board before the turn flips; the turn marker is left
    /// alone once the game ends. When the move is rejected the state comes
    /// back unchanged and the reason is logged at debug level.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play(mut self, pos: Position) -> Self {
        let action = Move::new(self.to_move, pos);
        if let Err(rejection) = MoveContract::pre(&self, &action) {
            debug!(%rejection, "move ignored");
            return self;
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board.set(pos, Square::Occupied(action.player));

        if let Some(line) = rules::winning_line(&self.board) {
            self.status = GameStatus::Won(line.player);
            self.winning_line = Some(line);
        } else if rules::is_full(&self.board) {
            self.status = GameStatus::Draw;
        } else {
            self.to_move = self.to_move.opponent();
        }

        // Postcondition: verify the invariant set in debug builds
        #[cfg(debug_assertions)]
        if let Err(violation) = MoveContract::post(&before, &self) {
            panic!("move postcondition violated: {violation}");
        }

        self
    }
}

// ─────────────────────────────────────────────────────────────
//  Accessors
// ─────────────────────────────────────────────────────────────

impl Game {
    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move. Stale once the game is over.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the completed line, when the game has been won.
    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.winning_line.as_ref()
    }

    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Positions still open for play. Empty once the game is over.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_over() {
            return Vec::new();
        }
        Position::valid_moves(&self.board)
    }

    /// Renderer message for the current status.
    pub fn status_message(&self) -> String {
        match &self.status {
            GameStatus::InProgress => format!("Current turn: {}", self.to_move),
            GameStatus::Won(player) => format!("Player {player} wins!"),
            GameStatus::Draw => "It's a draw!".to_string(),
        }
    }
}
