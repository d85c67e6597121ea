//! Exhaustive minimax search for the computer opponent.
//!
//! The state space of a 3×3 board tops out at a few thousand nodes,
//! so the search runs to full depth with no pruning or memoization.

use super::board::Board;
use super::types::{BOARD_SIZE, Move, Player};
use tracing::{debug, instrument};

/// Score for a PlayerTwo win at the root; decays with depth so the
/// engine prefers faster wins and, when losing, slower losses.
const WIN_SCORE: i32 = 10;

/// Picks the optimal move for `player` on `board`.
///
/// PlayerTwo is the maximizer and PlayerOne the minimizer regardless
/// of which side is asked for a move, so the engine can play either
/// seat. Ties break toward the first candidate in row-major order.
///
/// Returns `None` only when the board has no legal move; the turn
/// controller never calls it in that state. The caller's board is
/// left untouched: the search works on a scratch copy, placing and
/// reverting marks as it descends.
#[instrument(skip(board))]
pub fn best_move(board: &Board, player: Player) -> Option<Move> {
    let mut scratch = board.clone();
    let (score, mv) = minimax(&mut scratch, player, 0);
    debug!(?mv, score, %player, "search complete");
    mv
}

/// Recursive minimax. Returns the position's score and, for
/// non-terminal positions, the chosen move.
fn minimax(board: &mut Board, to_move: Player, depth: i32) -> (i32, Option<Move>) {
    if board.has_won(Player::One) {
        return (-WIN_SCORE + depth, None);
    }
    if board.has_won(Player::Two) {
        return (WIN_SCORE - depth, None);
    }
    if board.is_full() {
        return (0, None);
    }

    let mut best: Option<(i32, Move)> = None;
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let mv = Move::new(row, col);
            if !board.is_legal(mv) {
                continue;
            }

            board.place_unchecked(mv, to_move);
            let (score, _) = minimax(board, to_move.opponent(), depth + 1);
            board.clear(mv);

            let improves = match best {
                None => true,
                Some((best_score, _)) => match to_move {
                    Player::Two => score > best_score,
                    Player::One => score < best_score,
                },
            };
            if improves {
                best = Some((score, mv));
            }
        }
    }

    match best {
        Some((score, mv)) => (score, Some(mv)),
        // Unreachable given the full-board check above; kept as the
        // defined neutral answer for a moveless position.
        None => (0, None),
    }
}
