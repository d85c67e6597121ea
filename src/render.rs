//! Board and HUD rendering.

use crate::game::{BOARD_SIZE, Board, Player};
use crate::locale::Dictionary;
use crossterm::style::Stylize;

const HORIZONTAL_RULE: &str = "  +---+---+---+";

/// Mark drawn for a player, with its color applied.
fn mark_for(player: Player) -> String {
    match player {
        Player::One => "X".red().to_string(),
        Player::Two => "O".blue().to_string(),
    }
}

/// Renders the board as an ASCII grid with one-based row and column
/// headers, X in red and O in blue.
pub fn board(board: &Board) -> String {
    let mut out = String::from("    1   2   3\n");
    for row in 0..BOARD_SIZE {
        out.push_str(HORIZONTAL_RULE);
        out.push('\n');
        out.push_str(&format!("{} |", row + 1));
        for col in 0..BOARD_SIZE {
            let cell = match board.owner(row, col) {
                Some(player) => mark_for(player),
                None => " ".to_string(),
            };
            out.push_str(&format!(" {cell} |"));
        }
        out.push('\n');
    }
    out.push_str(HORIZONTAL_RULE);
    out
}

/// HUD line naming the player to move.
pub fn hud(dictionary: &Dictionary, to_move: Player) -> String {
    Dictionary::format(dictionary.player_turn, to_move.number())
}

/// Heading text rendered in the menu accent color.
pub fn heading(text: &str) -> String {
    text.yellow().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Move;
    use crate::locale::ENGLISH;

    #[test]
    fn board_shows_headers_and_marks() {
        let mut b = Board::new();
        b.apply(Move::new(0, 0), Player::One);
        b.apply(Move::new(1, 1), Player::Two);

        let rendered = board(&b);
        assert!(rendered.starts_with("    1   2   3\n"));
        assert!(rendered.contains("X"));
        assert!(rendered.contains("O"));
        // 4 rules around 3 rows.
        assert_eq!(rendered.matches(HORIZONTAL_RULE).count(), 4);
    }

    #[test]
    fn hud_names_the_player() {
        assert_eq!(hud(&ENGLISH, Player::Two), "Player 2 it is your turn");
    }
}
