//! Live game state owned by the turn controller.

use super::board::{Board, Outcome};
use super::types::{Move, MoveError, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Who sits opposite the first player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Two humans at the same terminal.
    PlayerVsPlayer,
    /// A human as PlayerOne against the search engine as PlayerTwo.
    PlayerVsComputer,
}

/// One game in flight: the board plus the player to move.
///
/// A session is an explicit value owned by the game loop; there is no
/// ambient board state anywhere in the crate. A new game means a new
/// session, always with an empty board and PlayerOne to move.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    to_move: Player,
    outcome: Outcome,
}

impl GameSession {
    /// Starts a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::One,
            outcome: Outcome::InProgress,
        }
    }

    /// The live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Outcome as of the last applied move.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// True iff `mv` would be accepted right now.
    pub fn is_legal(&self, mv: Move) -> bool {
        self.outcome == Outcome::InProgress && self.board.is_legal(mv)
    }

    /// Applies the current player's move, re-evaluates the outcome,
    /// and passes the turn if the game continues.
    ///
    /// # Errors
    ///
    /// Rejects moves on a finished game, out-of-range cells, and
    /// occupied cells. The session is unchanged on error.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn apply_move(&mut self, mv: Move) -> Result<Outcome, MoveError> {
        if self.outcome.is_final() {
            return Err(MoveError::GameOver);
        }
        if mv.row >= super::types::BOARD_SIZE || mv.col >= super::types::BOARD_SIZE {
            return Err(MoveError::OutOfBounds(mv));
        }
        if !self.board.is_legal(mv) {
            return Err(MoveError::CellOccupied(mv));
        }

        self.board.apply(mv, self.to_move);
        self.outcome = self.board.outcome();
        debug!(%mv, outcome = ?self.outcome, "move applied");

        if self.outcome == Outcome::InProgress {
            self.to_move = self.to_move.opponent();
        }
        Ok(self.outcome)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turns_alternate_strictly() {
        let mut session = GameSession::new();
        assert_eq!(session.to_move(), Player::One);
        session.apply_move(Move::new(0, 0)).unwrap();
        assert_eq!(session.to_move(), Player::Two);
        session.apply_move(Move::new(1, 1)).unwrap();
        assert_eq!(session.to_move(), Player::One);
    }

    #[test]
    fn invalid_moves_leave_session_unchanged() {
        let mut session = GameSession::new();
        session.apply_move(Move::new(0, 0)).unwrap();
        let before = session.clone();

        assert_eq!(
            session.apply_move(Move::new(0, 0)),
            Err(MoveError::CellOccupied(Move::new(0, 0)))
        );
        assert_eq!(
            session.apply_move(Move::new(9, 0)),
            Err(MoveError::OutOfBounds(Move::new(9, 0)))
        );
        assert_eq!(session.board(), before.board());
        assert_eq!(session.to_move(), before.to_move());
    }

    #[test]
    fn win_ends_the_game_and_freezes_the_turn() {
        let mut session = GameSession::new();
        // X takes the top row uncontested enough: X(0,0) O(1,0) X(0,1) O(1,1) X(0,2).
        session.apply_move(Move::new(0, 0)).unwrap();
        session.apply_move(Move::new(1, 0)).unwrap();
        session.apply_move(Move::new(0, 1)).unwrap();
        session.apply_move(Move::new(1, 1)).unwrap();
        let outcome = session.apply_move(Move::new(0, 2)).unwrap();

        assert_eq!(outcome, Outcome::Won(Player::One));
        assert_eq!(session.outcome(), Outcome::Won(Player::One));
        assert_eq!(session.to_move(), Player::One);
        assert_eq!(
            session.apply_move(Move::new(2, 2)),
            Err(MoveError::GameOver)
        );
    }
}
