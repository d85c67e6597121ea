//! Localized user-facing text and the saved language preference.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Default location of the saved language preference.
pub const PREFERENCE_FILE: &str = "language_preference.json";

/// Supported interface languages.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Language {
    /// English.
    #[default]
    #[serde(rename = "en")]
    En,
    /// Norwegian.
    #[serde(rename = "no")]
    No,
}

impl Language {
    /// The text dictionary for this language.
    pub fn dictionary(self) -> &'static Dictionary {
        match self {
            Language::En => &ENGLISH,
            Language::No => &NORWEGIAN,
        }
    }
}

/// Every user-facing string in one place.
///
/// `player_turn` and `winner` contain a `{0}` placeholder for the
/// player number; substitute with [`Dictionary::format`].
#[derive(Debug, Clone)]
pub struct Dictionary {
    /// Main menu heading.
    pub menu_title: &'static str,
    /// Main menu: start a game.
    pub menu_play_game: &'static str,
    /// Main menu: open settings.
    pub menu_settings: &'static str,
    /// Main menu: quit.
    pub menu_exit_game: &'static str,
    /// Settings heading.
    pub settings_title: &'static str,
    /// Settings: change language.
    pub settings_language: &'static str,
    /// Settings: return to the main menu.
    pub settings_back: &'static str,
    /// Prompt for a language code.
    pub language_choice: &'static str,
    /// Game-mode selection heading.
    pub game_mode_selection: &'static str,
    /// Mode: two humans.
    pub player_vs_player: &'static str,
    /// Mode: human against the engine.
    pub player_vs_computer: &'static str,
    /// HUD line naming the player to move.
    pub player_turn: &'static str,
    /// Move prompt.
    pub place_mark: &'static str,
    /// Notice shown while the engine picks a move.
    pub computer_turn: &'static str,
    /// Winner announcement.
    pub winner: &'static str,
    /// Draw announcement.
    pub draw: &'static str,
    /// Play-again question.
    pub play_again_question: &'static str,
    /// First letter of an affirmative answer.
    pub confirm: &'static str,
}

impl Dictionary {
    /// Replaces the `{0}` placeholder in a template string.
    pub fn format(template: &str, value: impl std::fmt::Display) -> String {
        template.replace("{0}", &value.to_string())
    }
}

/// English dictionary.
pub static ENGLISH: Dictionary = Dictionary {
    menu_title: "MENU",
    menu_play_game: "1. Play Game",
    menu_settings: "2. Settings",
    menu_exit_game: "3. Exit Game",
    settings_title: "SETTINGS",
    settings_language: "1. Change Language",
    settings_back: "2. Back to Main Menu",
    language_choice: "Choose language (en/no): ",
    game_mode_selection: "SELECT GAME MODE",
    player_vs_player: "1. Player vs Player",
    player_vs_computer: "2. Player vs Computer",
    player_turn: "Player {0} it is your turn",
    place_mark: "Place your mark at (row column): ",
    computer_turn: "The computer is thinking...",
    winner: "Player {0} wins!",
    draw: "It's a draw!",
    play_again_question: "Play again (YES/no)? ",
    confirm: "y",
};

/// Norwegian dictionary.
pub static NORWEGIAN: Dictionary = Dictionary {
    menu_title: "MENY",
    menu_play_game: "1. Start Spill",
    menu_settings: "2. Instillinger",
    menu_exit_game: "3. Avslutt Spill",
    settings_title: "INSTILLINGER",
    settings_language: "1. Endre Språk",
    settings_back: "2. Tilbake til Hovedmeny",
    language_choice: "Velg Språk (en/no): ",
    game_mode_selection: "VELG SPILLMODUS",
    player_vs_player: "1. Spiller mot Spiller",
    player_vs_computer: "2. Spiller mot Datamaskin",
    player_turn: "Spiller {0} det er din tur",
    place_mark: "Plasser merket ditt på (rad kolonne): ",
    computer_turn: "Datamaskinen tenker...",
    winner: "Spiller {0} vinner!",
    draw: "Det ble uavgjort!",
    play_again_question: "Spille en gang til (Ja/nei)? ",
    confirm: "j",
};

/// On-disk shape of the preference file.
#[derive(Debug, Serialize, Deserialize)]
struct Preference {
    language: Language,
}

/// Loads the saved language preference.
///
/// Any failure (missing file, bad JSON, unknown code) falls back to
/// English; a broken preference file must never block the game.
pub fn load_preference(path: &Path) -> Language {
    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str::<Preference>(&contents) {
            Ok(pref) => {
                debug!(language = %pref.language, "loaded language preference");
                pref.language
            }
            Err(err) => {
                warn!(%err, "unreadable language preference, using default");
                Language::default()
            }
        },
        Err(err) => {
            debug!(%err, "no language preference file, using default");
            Language::default()
        }
    }
}

/// Saves the language preference for future runs.
pub fn save_preference(path: &Path, language: Language) -> anyhow::Result<()> {
    let pref = Preference { language };
    let contents = serde_json::to_string(&pref)?;
    std::fs::write(path, contents)?;
    debug!(%language, "saved language preference");
    Ok(())
}
