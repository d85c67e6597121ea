//! Terminal input and output collaborator.
//!
//! Input comes over a channel fed by a dedicated reader thread, so
//! awaiting a line is a genuine suspension point for the game loop
//! rather than a stalled runtime.

use anyhow::{Context, Result};
use crossterm::{
    cursor, execute,
    terminal::{self, Clear, ClearType},
};
use std::io::{BufRead, Write};
use tokio::sync::mpsc;
use tracing::debug;

/// Fallback width used when the terminal size is unavailable.
const DEFAULT_WIDTH: u16 = 80;

/// Line-oriented terminal handle.
pub struct Console {
    input_rx: mpsc::UnboundedReceiver<String>,
}

impl Console {
    /// Creates a console and starts the stdin reader thread.
    ///
    /// A plain OS thread rather than `spawn_blocking`: the read blocks
    /// until the next line, and a parked blocking task would stall
    /// runtime shutdown when the program exits.
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        std::thread::spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    break;
                }
            }
            debug!("stdin reader finished");
        });
        Self { input_rx: rx }
    }

    /// Waits for the next line of input.
    ///
    /// # Errors
    ///
    /// Fails only when stdin has been closed.
    pub async fn read_line(&mut self) -> Result<String> {
        self.input_rx
            .recv()
            .await
            .context("input stream closed")
    }

    /// Prints `text` without a newline, flushes, and waits for a reply.
    pub async fn prompt(&mut self, text: &str) -> Result<String> {
        let mut stdout = std::io::stdout();
        write!(stdout, "{text}")?;
        stdout.flush()?;
        self.read_line().await
    }

    /// Clears the screen and homes the cursor.
    pub fn clear_screen(&self) -> Result<()> {
        execute!(
            std::io::stdout(),
            Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        Ok(())
    }

    /// Prints a line of text.
    pub fn print_line(&self, text: &str) -> Result<()> {
        let mut stdout = std::io::stdout();
        writeln!(stdout, "{text}")?;
        Ok(())
    }

    /// Prints each line of `text` centered to the terminal width.
    ///
    /// Centering uses character counts, which is close enough for the
    /// ASCII art this is used on.
    pub fn print_centered(&self, text: &str) -> Result<()> {
        let width = terminal::size().map(|(w, _)| w).unwrap_or(DEFAULT_WIDTH) as usize;
        let mut stdout = std::io::stdout();
        for line in text.lines() {
            let padding = width.saturating_sub(line.chars().count()) / 2;
            writeln!(stdout, "{}{}", " ".repeat(padding), line)?;
        }
        Ok(())
    }
}
