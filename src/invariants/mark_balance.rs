//! Mark balance invariant: X leads O by at most one placement.

use super::Invariant;
use crate::engine::Game;
use crate::types::{GameStatus, Player, Square};
use tracing::warn;

/// Invariant: Mark counts stay balanced.
///
/// X moves first and the players alternate, so at any reachable state the
/// X count equals the O count or leads by exactly one. While the game is
/// in progress, the turn marker is forced by the counts: equal counts mean
/// X to move, an X lead means O to move. This subsumes turn alternation
/// without needing a move history.
pub struct MarkBalanceInvariant;

fn count(game: &Game, player: Player) -> usize {
    game.board()
        .squares()
        .iter()
        .filter(|s| **s == Square::Occupied(player))
        .count()
}

impl Invariant<Game> for MarkBalanceInvariant {
    fn holds(game: &Game) -> bool {
        let x_count = count(game, Player::X);
        let o_count = count(game, Player::O);

        if x_count != o_count && x_count != o_count + 1 {
            warn!(x_count, o_count, "Mark balance violated");
            return false;
        }

        if *game.status() == GameStatus::InProgress {
            let expected = if x_count == o_count {
                Player::X
            } else {
                Player::O
            };
            if game.to_move() != expected {
                warn!(
                    x_count,
                    o_count,
                    to_move = %game.to_move(),
                    "Turn marker out of step with mark counts"
                );
                return false;
            }
        }

        true
    }

    fn description() -> &'static str {
        "X count equals O count or leads by one, and the turn marker agrees"
    }
}
