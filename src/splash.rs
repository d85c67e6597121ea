//! Splash screen shown before the main menu.

use crate::console::Console;
use anyhow::Result;
use crossterm::style::Stylize;
use std::time::Duration;

/// How long the splash art stays on screen.
const SPLASH_DELAY: Duration = Duration::from_millis(2500);

const TIC: [&str; 4] = [
    " _____ ___ ___ ",
    "|_   _|_ _/ __|",
    "  | |  | | (__ ",
    "  |_| |___\\___|",
];

const TAC: [&str; 4] = [
    " _____ _   ___ ",
    "|_   _/ _\\ / _|",
    "  | |/ _ \\ (__ ",
    "  |_/_/ \\_\\___|",
];

const TOE: [&str; 4] = [
    " _____ ___  ___ ",
    "|_   _/ _ \\| __|",
    "  | || (_) | _| ",
    "  |_| \\___/|___|",
];

/// Builds the colored splash art.
pub fn art() -> String {
    let mut out = String::new();
    for i in 0..TIC.len() {
        out.push_str(&format!(
            "{}  {}  {}\n",
            TIC[i].red(),
            TAC[i].green(),
            TOE[i].blue()
        ));
    }
    out
}

/// Clears the screen, centers the art, and holds it briefly.
pub async fn show(console: &Console) -> Result<()> {
    console.clear_screen()?;
    console.print_centered(&art())?;
    tokio::time::sleep(SPLASH_DELAY).await;
    Ok(())
}
