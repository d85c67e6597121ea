//! Turn controller: runs one game from empty board to outcome.

use crate::console::Console;
use crate::game::{GameMode, GameSession, Outcome, Player};
use crate::locale::Dictionary;
use crate::players::{ComputerPlayer, HumanPlayer, PlayerController};
use crate::render;
use anyhow::Result;
use tracing::{info, instrument, warn};

/// Plays a single game in the given mode and returns its outcome.
///
/// Owns the session for the duration of the game: request a move from
/// whichever controller holds the turn, apply it, evaluate, flip the
/// player while the game is in progress. The play-again question
/// belongs to the menu layer, not here.
#[instrument(skip(console, dictionary))]
pub async fn run_game(
    mode: GameMode,
    console: &mut Console,
    dictionary: &'static Dictionary,
) -> Result<Outcome> {
    info!(?mode, "starting game");
    let mut session = GameSession::new();

    let mut seat_one: Box<dyn PlayerController> = Box::new(HumanPlayer::new(dictionary));
    let mut seat_two: Box<dyn PlayerController> = match mode {
        GameMode::PlayerVsPlayer => Box::new(HumanPlayer::new(dictionary)),
        GameMode::PlayerVsComputer => Box::new(ComputerPlayer::new(dictionary)),
    };

    let outcome = loop {
        console.clear_screen()?;
        console.print_line(&render::board(session.board()))?;
        console.print_line(&render::hud(dictionary, session.to_move()))?;

        let controller = match session.to_move() {
            Player::One => &mut seat_one,
            Player::Two => &mut seat_two,
        };
        let mv = controller.next_move(&session, console).await?;

        match session.apply_move(mv) {
            Ok(Outcome::InProgress) => {}
            Ok(outcome) => break outcome,
            // Controllers only hand back validated moves, so this is
            // a controller bug; skip the move and re-prompt.
            Err(err) => warn!(%err, %mv, "controller produced an illegal move"),
        }
    };

    info!(?outcome, "game over");
    show_summary(console, dictionary, &session, outcome)?;
    Ok(outcome)
}

/// Final screen: winner or draw announcement over the finished board.
fn show_summary(
    console: &Console,
    dictionary: &'static Dictionary,
    session: &GameSession,
    outcome: Outcome,
) -> Result<()> {
    console.clear_screen()?;
    let message = match outcome {
        Outcome::Won(player) => Dictionary::format(dictionary.winner, player.number()),
        Outcome::Draw => dictionary.draw.to_string(),
        Outcome::InProgress => unreachable!("summary shown for unfinished game"),
    };
    console.print_line(&message)?;
    console.print_line(&render::board(session.board()))?;
    Ok(())
}
