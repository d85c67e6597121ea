//! Terminal tic-tac-toe with an unbeatable minimax opponent.
//!
//! # Architecture
//!
//! - **game**: the core — board model, win/draw detection, exhaustive
//!   minimax search, and the per-game session state.
//! - **players**: the move-provider seam; a human prompting at the
//!   terminal or the search engine.
//! - **orchestrator**: the turn controller running one game.
//! - **app**: menus, settings, and the play-again loop.
//! - **console / render / splash**: terminal I/O and presentation.
//! - **locale**: English and Norwegian text with a persisted
//!   language preference.
//!
//! # Example
//!
//! ```
//! use termtactoe::game::{GameSession, Move, Outcome, Player, search};
//!
//! let mut session = GameSession::new();
//! session.apply_move(Move::new(0, 0)).unwrap();
//! let reply = search::best_move(session.board(), Player::Two).unwrap();
//! session.apply_move(reply).unwrap();
//! assert_eq!(session.outcome(), Outcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod console;
pub mod game;
pub mod locale;
pub mod orchestrator;
pub mod players;
pub mod render;
pub mod splash;

pub use app::App;
pub use cli::Cli;
pub use console::Console;
pub use game::{BOARD_SIZE, Board, GameMode, GameSession, Move, MoveError, Outcome, Player};
pub use locale::{Dictionary, Language};
