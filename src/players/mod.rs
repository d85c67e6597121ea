//! Move providers: the human prompt and the search engine.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use crate::console::Console;
use crate::game::{GameSession, Move};
use anyhow::Result;

/// A source of moves for one seat at the board.
#[async_trait::async_trait]
pub trait PlayerController: Send {
    /// Produces a legal move for the current position.
    ///
    /// Implementations may converse with the terminal; the returned
    /// move is already validated against the session.
    async fn next_move(&mut self, session: &GameSession, console: &mut Console) -> Result<Move>;
}
