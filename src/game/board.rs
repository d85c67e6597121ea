//! Board representation and win/draw detection.

use super::types::{BOARD_SIZE, Move, Player};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Line sum that marks a completed row, column, or diagonal.
const WINNING_SUM: i8 = 3;

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and at least one cell is empty.
    InProgress,
    /// No line is complete and the board is full.
    Draw,
    /// The given player owns a complete line.
    Won(Player),
}

impl Outcome {
    /// True once the game has ended.
    pub fn is_final(self) -> bool {
        self != Outcome::InProgress
    }
}

/// 3×3 board.
///
/// Cells hold signed marks: 0 for empty, +1 for PlayerOne, -1 for
/// PlayerTwo. Keeping the values in {-1, 0, 1} is what makes the
/// sum-of-line win test below sound; three cells of the same sign sum
/// to ±3 and no mixed line can reach magnitude 3.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[i8; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [[0; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Returns the raw mark at a cell: 0, +1, or -1.
    pub fn cell(&self, row: usize, col: usize) -> i8 {
        self.cells[row][col]
    }

    /// Returns the owner of a cell, if any.
    pub fn owner(&self, row: usize, col: usize) -> Option<Player> {
        match self.cells[row][col] {
            1 => Some(Player::One),
            -1 => Some(Player::Two),
            _ => None,
        }
    }

    /// True iff the move targets an in-range, empty cell. No side effects.
    pub fn is_legal(&self, mv: Move) -> bool {
        mv.row < BOARD_SIZE && mv.col < BOARD_SIZE && self.cells[mv.row][mv.col] == 0
    }

    /// Places the player's mark.
    ///
    /// Callers are expected to check [`Board::is_legal`] first. An
    /// illegal move is logged and ignored rather than panicking, so a
    /// caller error can never corrupt the board.
    pub fn apply(&mut self, mv: Move, player: Player) {
        if !self.is_legal(mv) {
            warn!(%mv, %player, "ignoring illegal move");
            return;
        }
        self.cells[mv.row][mv.col] = player.mark();
    }

    /// Clears a cell. Used by the search engine to revert hypothetical moves.
    pub(super) fn clear(&mut self, mv: Move) {
        self.cells[mv.row][mv.col] = 0;
    }

    /// Places a mark without the legality check. Search-internal; the
    /// engine only ever targets cells it has just seen empty.
    pub(super) fn place_unchecked(&mut self, mv: Move, player: Player) {
        self.cells[mv.row][mv.col] = player.mark();
    }

    /// True iff any of the 8 lines is fully owned by `player`.
    pub fn has_won(&self, player: Player) -> bool {
        let target = WINNING_SUM * player.mark();
        self.line_sums().into_iter().any(|sum| sum == target)
    }

    /// True iff no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&cell| cell != 0)
    }

    /// Classifies the board as in-progress, drawn, or won.
    ///
    /// Lines are scanned rows and columns first, then the two
    /// diagonals, and every winning line overwrites the recorded
    /// winner. A single move can in principle complete two lines at
    /// once; when that happens the later-scanned line decides, so
    /// diagonals take precedence. Deliberately kept that way.
    pub fn outcome(&self) -> Outcome {
        let mut winner = None;
        for sum in self.line_sums() {
            if sum == WINNING_SUM {
                winner = Some(Player::One);
            } else if sum == -WINNING_SUM {
                winner = Some(Player::Two);
            }
        }

        match winner {
            Some(player) => Outcome::Won(player),
            None if self.is_full() => Outcome::Draw,
            None => Outcome::InProgress,
        }
    }

    /// Sums of the 8 lines: rows and columns interleaved, then the
    /// main diagonal, then the anti-diagonal. The order matters to
    /// [`Board::outcome`].
    fn line_sums(&self) -> [i8; 8] {
        let mut sums = [0i8; 8];
        for i in 0..BOARD_SIZE {
            for j in 0..BOARD_SIZE {
                sums[2 * i] += self.cells[i][j];
                sums[2 * i + 1] += self.cells[j][i];
            }
        }
        for i in 0..BOARD_SIZE {
            sums[6] += self.cells[i][i];
            sums[7] += self.cells[i][BOARD_SIZE - 1 - i];
        }
        sums
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(rows: [[i8; 3]; 3]) -> Board {
        let mut board = Board::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, &mark) in row.iter().enumerate() {
                let player = match mark {
                    1 => Player::One,
                    -1 => Player::Two,
                    _ => continue,
                };
                board.apply(Move::new(r, c), player);
            }
        }
        board
    }

    #[test]
    fn empty_board_is_in_progress() {
        let board = Board::new();
        assert!(!board.is_full());
        assert!(!board.has_won(Player::One));
        assert!(!board.has_won(Player::Two));
        assert_eq!(board.outcome(), Outcome::InProgress);
    }

    #[test]
    fn top_row_wins_for_player_one() {
        let board = board_from([[1, 1, 1], [0, 0, 0], [0, 0, 0]]);
        assert!(board.has_won(Player::One));
        assert!(!board.has_won(Player::Two));
        assert_eq!(board.outcome(), Outcome::Won(Player::One));
    }

    #[test]
    fn column_and_diagonal_wins_detected() {
        let col = board_from([[-1, 0, 0], [-1, 1, 0], [-1, 0, 1]]);
        assert!(col.has_won(Player::Two));
        assert_eq!(col.outcome(), Outcome::Won(Player::Two));

        let diag = board_from([[1, 0, -1], [-1, 1, 0], [0, 0, 1]]);
        assert!(diag.has_won(Player::One));

        let anti = board_from([[1, 0, -1], [1, -1, 0], [-1, 0, 1]]);
        assert!(anti.has_won(Player::Two));
    }

    #[test]
    fn full_board_without_line_is_a_draw() {
        // X O X / X O O / O X X
        let board = board_from([[1, -1, 1], [1, -1, -1], [-1, 1, 1]]);
        assert!(board.is_full());
        assert!(!board.has_won(Player::One));
        assert!(!board.has_won(Player::Two));
        assert_eq!(board.outcome(), Outcome::Draw);
    }

    #[test]
    fn illegal_apply_is_ignored() {
        let mut board = Board::new();
        board.apply(Move::new(0, 0), Player::One);
        board.apply(Move::new(0, 0), Player::Two);
        assert_eq!(board.owner(0, 0), Some(Player::One));

        board.apply(Move::new(7, 7), Player::Two);
        assert_eq!(board.outcome(), Outcome::InProgress);
    }

    #[test]
    fn is_legal_checks_range_and_occupancy() {
        let mut board = Board::new();
        assert!(board.is_legal(Move::new(2, 2)));
        assert!(!board.is_legal(Move::new(3, 0)));
        assert!(!board.is_legal(Move::new(0, 3)));
        board.apply(Move::new(2, 2), Player::Two);
        assert!(!board.is_legal(Move::new(2, 2)));
    }
}
