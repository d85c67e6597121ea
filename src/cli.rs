//! Command-line interface.

use crate::locale::Language;
use clap::Parser;
use std::path::PathBuf;

/// Terminal tic-tac-toe with an unbeatable minimax opponent.
#[derive(Parser, Debug)]
#[command(name = "termtactoe")]
#[command(about = "Terminal tic-tac-toe with an unbeatable minimax opponent")]
#[command(version)]
pub struct Cli {
    /// Interface language, overriding the saved preference
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Skip the splash screen
    #[arg(long)]
    pub no_splash: bool,

    /// Path of the language preference file
    #[arg(long, default_value = crate::locale::PREFERENCE_FILE)]
    pub prefs_file: PathBuf,
}
