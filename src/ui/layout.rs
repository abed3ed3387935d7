/// Screen layout and palette.
///
/// Positions are 1-based `(row, col)` like ANSI `ESC[row;colH`. The
/// renderer converts them to crossterm's 0-based `MoveTo(col, row)`.

use crossterm::style::Color;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct At {
    pub row: u16,
    pub col: u16,
}

pub const fn at(row: u16, col: u16) -> At {
    At { row, col }
}

// ── Title marquee ──
pub const HI_COL: u16 = 38;
pub const LO_COL: u16 = 40;

// ── Instructions ──
pub const INSTRUCTIONS_TOP: u16 = 11;
pub const CONTINUE_PROMPT: At = at(18, 1);

// ── Play area below the title ──
pub const PLAY_TOP: u16 = 11;
pub const PLAY_BOTTOM: u16 = 19;
pub const PLAY_WIDTH: usize = 70;

// ── Difficulty menu ──
pub const MENU_COL: u16 = 20;
pub const MENU_PROMPT: At = at(14, 20);
pub const MENU_HINT: At = at(15, 20);
pub const MENU_WIDTH: usize = 40;

// ── Guess box ──
pub const BOX_TOP: u16 = 12;
pub const BOX_LEFT: u16 = 20;
pub const BOX_MIN_INNER: usize = 10;
pub const GUESS_PROMPT: At = at(13, 21);
pub const GUESS_LABEL: &str = "Guess: ";

// ── Status lines ──
pub const STATUS: At = at(15, 21);
pub const WINNINGS: At = at(16, 21);
pub const WINNINGS_AMOUNT: At = at(16, 32);
pub const PLAY_AGAIN: At = at(17, 21);
pub const GOODBYE: At = at(18, 1);
/// Every status write covers the row from `STATUS.col` to the play-area edge.
pub const STATUS_WIDTH: usize = PLAY_WIDTH - (STATUS.col as usize - 1);
pub const LINE_CLEAR: usize = 30;

/// The game's fixed palette. `Bold`/`Normal` are attributes rather than
/// colors, handled by the renderer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Ink {
    Green,
    Red,
    Purple,
    Blue,
    White,
}

impl Ink {
    pub fn color(self) -> Color {
        match self {
            Ink::Green => Color::Green,
            Ink::Red => Color::Red,
            Ink::Purple => Color::Magenta,
            Ink::Blue => Color::Blue,
            Ink::White => Color::White,
        }
    }
}

/// Inner width of the guess box: wide enough for the label plus the
/// longest guess.
pub fn box_inner_width(max_digits: usize) -> usize {
    BOX_MIN_INNER.max(GUESS_LABEL.len() + max_digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_box_is_ten_wide() {
        assert_eq!(box_inner_width(2), 10);
        assert_eq!(box_inner_width(3), 10);
    }

    #[test]
    fn box_grows_for_long_guesses() {
        assert_eq!(box_inner_width(4), 11);
        assert_eq!(box_inner_width(7), 14);
    }

    #[test]
    fn guess_echo_lands_inside_box() {
        let echo_col = GUESS_PROMPT.col as usize + GUESS_LABEL.len();
        assert_eq!(echo_col, 28);
        let right_border = BOX_LEFT as usize + 1 + box_inner_width(4);
        assert!(echo_col + 4 <= right_border);
    }
}
