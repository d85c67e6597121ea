//! Menu layer: main menu, settings, mode selection, play-again.

use crate::console::Console;
use crate::game::GameMode;
use crate::locale::{self, Dictionary, Language};
use crate::orchestrator;
use anyhow::Result;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, warn};

// Transient settings notices, shown before the language can be known.
const LANGUAGE_CHANGED: &str = "Language changed successfully.";
const INVALID_LANGUAGE: &str = "Invalid language choice. Language remains unchanged.";
const ENTER_TO_CONTINUE: &str = "Press enter to continue...";

/// The interactive application: a console, the active language, and
/// the path its preference is saved to.
pub struct App {
    console: Console,
    language: Language,
    prefs_path: PathBuf,
}

impl App {
    /// Creates the app with the given language and preference file.
    pub fn new(console: Console, language: Language, prefs_path: PathBuf) -> Self {
        Self {
            console,
            language,
            prefs_path,
        }
    }

    fn dictionary(&self) -> &'static Dictionary {
        self.language.dictionary()
    }

    /// Runs the main menu until the player exits.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            let dict = self.dictionary();
            self.console.clear_screen()?;
            self.console.print_line(&crate::render::heading(dict.menu_title))?;
            self.console.print_line(dict.menu_play_game)?;
            self.console.print_line(dict.menu_settings)?;
            self.console.print_line(dict.menu_exit_game)?;

            match self.console.read_line().await?.trim() {
                "1" => self.play().await?,
                "2" => self.settings().await?,
                "3" => {
                    info!("exiting");
                    self.console.clear_screen()?;
                    return Ok(());
                }
                _ => {}
            }
        }
    }

    /// Game loop: pick a mode, play, offer another round.
    async fn play(&mut self) -> Result<()> {
        loop {
            let dict = self.dictionary();
            let mode = self.select_mode().await?;
            orchestrator::run_game(mode, &mut self.console, dict).await?;
            if !self.ask_play_again().await? {
                return Ok(());
            }
        }
    }

    /// Mode selection screen, re-prompting until a valid choice.
    async fn select_mode(&mut self) -> Result<GameMode> {
        loop {
            let dict = self.dictionary();
            self.console.clear_screen()?;
            self.console
                .print_line(&crate::render::heading(dict.game_mode_selection))?;
            self.console.print_line(dict.player_vs_player)?;
            self.console.print_line(dict.player_vs_computer)?;

            match self.console.read_line().await?.trim() {
                "1" => return Ok(GameMode::PlayerVsPlayer),
                "2" => return Ok(GameMode::PlayerVsComputer),
                _ => {}
            }
        }
    }

    /// Yes/no question after a game; an empty answer means yes.
    async fn ask_play_again(&mut self) -> Result<bool> {
        let dict = self.dictionary();
        let answer = self.console.prompt(dict.play_again_question).await?;
        let confirm = dict.confirm.chars().next();
        let again = match answer.trim().to_lowercase().chars().next() {
            Some(first) => Some(first) == confirm,
            None => true,
        };
        Ok(again)
    }

    /// Settings screen; currently just the language choice.
    async fn settings(&mut self) -> Result<()> {
        let dict = self.dictionary();
        self.console.clear_screen()?;
        self.console
            .print_line(&crate::render::heading(dict.settings_title))?;
        self.console.print_line(dict.settings_language)?;
        self.console.print_line(dict.settings_back)?;

        if self.console.read_line().await?.trim() == "1" {
            self.change_language().await?;
        }
        Ok(())
    }

    /// Prompts for a language code and persists a valid choice.
    async fn change_language(&mut self) -> Result<()> {
        let dict = self.dictionary();
        let choice = self.console.prompt(dict.language_choice).await?;

        match Language::from_str(choice.trim()) {
            Ok(language) => {
                self.language = language;
                info!(%language, "language changed");
                if let Err(err) = locale::save_preference(&self.prefs_path, language) {
                    // The new language still applies for this run.
                    warn!(%err, "could not save language preference");
                }
                self.console.print_line(LANGUAGE_CHANGED)?;
            }
            Err(_) => {
                self.console.print_line(INVALID_LANGUAGE)?;
            }
        }

        self.console.prompt(ENTER_TO_CONTINUE).await?;
        Ok(())
    }
}
