//! Core domain types for the game.

use serde::{Deserialize, Serialize};

/// Length of one side of the board.
pub const BOARD_SIZE: usize = 3;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// First player (X, moves first).
    One,
    /// Second player (O, the computer seat in player-vs-computer mode).
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Signed cell value for this player's mark.
    ///
    /// PlayerOne is +1 and PlayerTwo is -1, so a completed line sums
    /// to +3 or -3 and mixed lines never reach magnitude 3.
    pub fn mark(self) -> i8 {
        match self {
            Player::One => 1,
            Player::Two => -1,
        }
    }

    /// One-based player number as shown to humans.
    pub fn number(self) -> usize {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// A move: a (row, column) cell on the board, zero-based.
///
/// Constructed once at the input boundary; the core never sees raw
/// text or one-based coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Zero-based row index.
    pub row: usize,
    /// Zero-based column index.
    pub col: usize,
}

impl Move {
    /// Creates a new move from zero-based coordinates.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Parses a move from one-based "row col" text, as typed at the prompt.
    ///
    /// Returns `None` on wrong arity, non-numeric input, or coordinates
    /// outside the board. Occupancy is not checked here.
    pub fn parse_one_based(input: &str) -> Option<Self> {
        let mut parts = input.split_whitespace();
        let row: usize = parts.next()?.parse().ok()?;
        let col: usize = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        if (1..=BOARD_SIZE).contains(&row) && (1..=BOARD_SIZE).contains(&col) {
            Some(Self::new(row - 1, col - 1))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // One-based for human eyes.
        write!(f, "({}, {})", self.row + 1, self.col + 1)
    }
}

/// Error raised when a move fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The target cell is outside the board.
    #[display("Move {} is outside the board", _0)]
    OutOfBounds(Move),

    /// The target cell is already occupied.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Move),

    /// The game has already finished.
    #[display("The game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
