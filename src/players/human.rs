//! Human player prompting at the terminal.

use super::PlayerController;
use crate::console::Console;
use crate::game::{GameSession, Move};
use crate::locale::Dictionary;
use anyhow::Result;
use tracing::debug;

/// Prompts for one-based "row column" input until a legal move arrives.
pub struct HumanPlayer {
    dictionary: &'static Dictionary,
}

impl HumanPlayer {
    /// Creates a human player using the given text dictionary.
    pub fn new(dictionary: &'static Dictionary) -> Self {
        Self { dictionary }
    }
}

#[async_trait::async_trait]
impl PlayerController for HumanPlayer {
    async fn next_move(&mut self, session: &GameSession, console: &mut Console) -> Result<Move> {
        // Malformed or illegal input is never an error, just another
        // trip through the prompt.
        loop {
            let raw = console.prompt(self.dictionary.place_mark).await?;
            match Move::parse_one_based(&raw) {
                Some(mv) if session.is_legal(mv) => return Ok(mv),
                Some(mv) => debug!(%mv, "cell occupied, re-prompting"),
                None => debug!(input = %raw.trim(), "unparseable move, re-prompting"),
            }
        }
    }
}
