//! Computer player backed by the minimax engine.

use super::PlayerController;
use crate::console::Console;
use crate::game::{GameSession, Move, search};
use crate::locale::Dictionary;
use anyhow::{Context, Result};
use std::time::Duration;
use tracing::debug;

/// Pause before the engine's move appears, so it reads as a turn
/// rather than an instant board change.
const THINKING_DELAY: Duration = Duration::from_millis(1000);

/// Plays optimally via [`search::best_move`].
pub struct ComputerPlayer {
    dictionary: &'static Dictionary,
}

impl ComputerPlayer {
    /// Creates a computer player using the given text dictionary.
    pub fn new(dictionary: &'static Dictionary) -> Self {
        Self { dictionary }
    }
}

#[async_trait::async_trait]
impl PlayerController for ComputerPlayer {
    async fn next_move(&mut self, session: &GameSession, console: &mut Console) -> Result<Move> {
        console.print_line(self.dictionary.computer_turn)?;
        tokio::time::sleep(THINKING_DELAY).await;

        let mv = search::best_move(session.board(), session.to_move())
            .context("search engine called with no legal moves")?;
        debug!(%mv, "computer chose");
        Ok(mv)
    }
}
