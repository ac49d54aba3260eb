//! Winning line invariant: the recorded line matches the win.

use super::Invariant;
use crate::engine::Game;
use crate::rules;
use crate::types::GameStatus;
use tracing::warn;

/// Invariant: A winning line is recorded exactly when the game is won.
///
/// When the status is `Won`, the stored line names the winner and matches
/// an independent rescan of the board; in any other status no line is
/// stored.
pub struct WinningLineInvariant;

impl Invariant<Game> for WinningLineInvariant {
    fn holds(game: &Game) -> bool {
        match (game.status(), game.winning_line()) {
            (GameStatus::Won(winner), Some(line)) => {
                let valid = line.player == *winner
                    && rules::winning_line(game.board()).as_ref() == Some(line);
                if !valid {
                    warn!(?line, ?winner, "Recorded winning line does not match the board");
                }
                valid
            }
            (GameStatus::Won(winner), None) => {
                warn!(?winner, "Won status without a recorded winning line");
                false
            }
            (status, Some(line)) => {
                warn!(?status, ?line, "Winning line recorded while the game is not won");
                false
            }
            (_, None) => true,
        }
    }

    fn description() -> &'static str {
        "A winning line is recorded exactly when the game is won, and matches the board"
    }
}
