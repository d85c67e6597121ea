//! Game core: board model, adversarial search, and session state.

mod board;
pub mod search;
mod session;
mod types;

pub use board::{Board, Outcome};
pub use session::{GameMode, GameSession};
pub use types::{BOARD_SIZE, Move, MoveError, Player};
