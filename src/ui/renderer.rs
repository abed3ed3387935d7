/// Presentation layer: cursor-addressed terminal output.
///
/// Unlike a full-screen redraw loop, HiLo paints the screen piece by piece
/// the way an old BASIC game does: each call positions the cursor, sets the
/// ink, prints, and leaves everything else on screen untouched. Commands are
/// batched with `queue!` and flushed once per call.
///
/// The renderer is generic over `Write` so tests can capture the byte stream.

use std::io::{self, BufWriter, Write};

use crossterm::{
    cursor::{self, MoveTo},
    execute, queue,
    style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};

use crate::domain::difficulty::{Difficulty, MENU_CHOICES};
use crate::error::InputError;
use crate::sim::event::GameEvent;
use super::layout::{self, At, Ink};

pub struct Renderer<W: Write> {
    writer: W,
    box_inner: usize,
}

impl Renderer<BufWriter<io::Stdout>> {
    pub fn stdout() -> Self {
        Renderer::new(BufWriter::with_capacity(4096, io::stdout()))
    }
}

impl<W: Write> Renderer<W> {
    pub fn new(writer: W) -> Self {
        Renderer {
            writer,
            box_inner: layout::BOX_MIN_INNER,
        }
    }

    pub fn init(&mut self) -> io::Result<()> {
        execute!(self.writer, ResetColor, Clear(ClearType::All), MoveTo(0, 0))
    }

    /// Restore default colors and leave the cursor below the play area.
    pub fn cleanup(&mut self) -> io::Result<()> {
        execute!(
            self.writer,
            SetAttribute(Attribute::Reset),
            ResetColor,
            cursor::Show,
            MoveTo(0, layout::PLAY_BOTTOM),
            Print("\n")
        )
    }

    // ── Intro ──

    /// One frame of the marquee: "Hi" on `frame`, "Lo" one row lower.
    pub fn draw_intro_frame(&mut self, frame: u16) -> io::Result<()> {
        queue!(self.writer, Clear(ClearType::All))?;
        self.put(layout::at(frame, layout::HI_COL), Ink::Green, "Hi")?;
        self.put(layout::at(frame + 1, layout::LO_COL), Ink::Red, "Lo")?;
        self.writer.flush()
    }

    pub fn draw_instructions(&mut self, max_guesses: u32) -> io::Result<()> {
        let top = layout::INSTRUCTIONS_TOP;
        queue!(self.writer, SetAttribute(Attribute::Reset), ResetColor)?;
        queue!(self.writer, SetAttribute(Attribute::Bold))?;
        self.put(layout::at(top, 1), Ink::White, "This is the game of HiLo")?;
        queue!(self.writer, SetAttribute(Attribute::Reset))?;

        let tries = format!(
            "You will have {max_guesses} {} to guess the amount of money in the",
            if max_guesses == 1 { "try" } else { "tries" }
        );
        let lines = [
            tries.as_str(),
            "HiLo jackpot. If you guess the right amount, you win all",
            "the money in the jackpot. Run out of tries and the game",
            "is over!",
        ];
        for (i, line) in lines.iter().enumerate() {
            self.put(layout::at(top + 2 + i as u16, 1), Ink::White, line)?;
        }
        self.writer.flush()
    }

    pub fn prompt_continue(&mut self) -> io::Result<()> {
        self.put(layout::CONTINUE_PROMPT, Ink::White, "Press enter key to continue...")?;
        self.writer.flush()
    }

    // ── Difficulty menu ──

    /// Blank the play area, then list the standard choices.
    pub fn draw_difficulty_menu(&mut self) -> io::Result<()> {
        let blank = " ".repeat(layout::PLAY_WIDTH);
        for row in layout::PLAY_TOP..=layout::PLAY_BOTTOM {
            self.put(layout::at(row, 1), Ink::White, &blank)?;
        }
        for choice in 1..=MENU_CHOICES {
            let bound = 10u64.pow(choice);
            let row = layout::PLAY_TOP + choice as u16 - 1;
            self.put(
                layout::at(row, layout::MENU_COL),
                Ink::White,
                &format!("{choice}. Between 1 and {bound}"),
            )?;
        }
        self.writer.flush()
    }

    pub fn prompt_difficulty(&mut self) -> io::Result<()> {
        self.put(layout::MENU_PROMPT, Ink::White, &" ".repeat(layout::MENU_WIDTH))?;
        self.put(layout::MENU_PROMPT, Ink::White, "Difficulty? ")?;
        self.writer.flush()
    }

    pub fn show_menu_hint(&mut self, err: &InputError) -> io::Result<()> {
        let text = fit(&err.to_string(), layout::MENU_WIDTH);
        self.put(layout::MENU_HINT, Ink::Purple, &text)?;
        self.writer.flush()
    }

    pub fn clear_difficulty_menu(&mut self) -> io::Result<()> {
        let blank = " ".repeat(layout::MENU_WIDTH);
        for row in layout::PLAY_TOP..=layout::MENU_HINT.row {
            self.put(layout::at(row, layout::MENU_COL), Ink::White, &blank)?;
        }
        self.writer.flush()
    }

    // ── Guess box ──

    pub fn draw_guess_box(&mut self, difficulty: Difficulty) -> io::Result<()> {
        self.box_inner = layout::box_inner_width(difficulty.max_digits());
        let bar = "═".repeat(self.box_inner);
        let gap = " ".repeat(self.box_inner);
        let (top, left) = (layout::BOX_TOP, layout::BOX_LEFT);
        self.put(layout::at(top, left), Ink::Blue, &format!("╔{bar}╗"))?;
        self.put(layout::at(top + 1, left), Ink::Blue, &format!("║{gap}║"))?;
        self.put(layout::at(top + 2, left), Ink::Blue, &format!("╚{bar}╝"))?;
        self.writer.flush()
    }

    /// Blank the previous guess, then print the prompt inside the box.
    pub fn prompt_guess(&mut self) -> io::Result<()> {
        let label_len = layout::GUESS_LABEL.len();
        let echo = layout::at(
            layout::GUESS_PROMPT.row,
            layout::GUESS_PROMPT.col + label_len as u16,
        );
        let width = self.box_inner.saturating_sub(label_len);
        self.put(echo, Ink::White, &" ".repeat(width))?;
        self.put(layout::GUESS_PROMPT, Ink::White, layout::GUESS_LABEL)?;
        self.writer.flush()
    }

    pub fn show_input_hint(&mut self, err: &InputError) -> io::Result<()> {
        self.status(Ink::Purple, &err.to_string())
    }

    // ── Outcomes ──

    /// Status text for a transition. `RoundWon` is drawn by `show_win` so
    /// the caller can pause between the banner and the payout.
    pub fn show_event(&mut self, event: &GameEvent) -> io::Result<()> {
        match event {
            GameEvent::GuessTooHigh { guesses_left } => self.miss("Your guess was too high!", *guesses_left),
            GameEvent::GuessTooLow { guesses_left } => self.miss("Your guess was too low!", *guesses_left),
            GameEvent::RoundLost { secret } => {
                self.status(Ink::Red, "You took too many guesses!")?;
                let reveal = fit(&format!("The jackpot was ${secret}"), layout::LINE_CLEAR);
                self.put(layout::PLAY_AGAIN, Ink::White, &reveal)?;
                self.writer.flush()
            }
            GameEvent::RoundStarted => self.status(Ink::White, ""),
            GameEvent::RoundWon { .. } | GameEvent::SessionQuit => Ok(()),
        }
    }

    pub fn show_win(&mut self) -> io::Result<()> {
        queue!(self.writer, SetAttribute(Attribute::Bold))?;
        self.status(Ink::Green, "You won!")?;
        queue!(self.writer, SetAttribute(Attribute::Reset))?;
        self.writer.flush()
    }

    pub fn show_winnings(&mut self, winnings: u64) -> io::Result<()> {
        self.put(layout::WINNINGS, Ink::White, &fit("Winnings: ", layout::STATUS_WIDTH))?;
        self.put(layout::WINNINGS_AMOUNT, Ink::Green, &format!("${winnings}"))?;
        self.writer.flush()
    }

    pub fn prompt_play_again(&mut self) -> io::Result<()> {
        self.put(layout::PLAY_AGAIN, Ink::White, "Play again? (Y/n) ")?;
        self.writer.flush()
    }

    pub fn clear_play_again(&mut self) -> io::Result<()> {
        self.put(layout::PLAY_AGAIN, Ink::White, &" ".repeat(layout::LINE_CLEAR))?;
        self.writer.flush()
    }

    pub fn prompt_goodbye(&mut self) -> io::Result<()> {
        self.put(layout::GOODBYE, Ink::White, "Goodbye!")?;
        self.writer.flush()
    }

    #[cfg(test)]
    pub fn writer(&self) -> &W {
        &self.writer
    }

    // ── Internal ──

    fn miss(&mut self, text: &str, guesses_left: u32) -> io::Result<()> {
        match guesses_left {
            0 => self.status(Ink::Purple, text),
            1 => self.status(Ink::Purple, &format!("{text} 1 try left.")),
            n => self.status(Ink::Purple, &format!("{text} {n} tries left.")),
        }
    }

    fn status(&mut self, ink: Ink, text: &str) -> io::Result<()> {
        self.put(layout::STATUS, ink, &fit(text, layout::STATUS_WIDTH))?;
        self.writer.flush()
    }

    fn put(&mut self, pos: At, ink: Ink, text: &str) -> io::Result<()> {
        queue!(
            self.writer,
            MoveTo(pos.col.saturating_sub(1), pos.row.saturating_sub(1)),
            SetForegroundColor(ink.color()),
            Print(text)
        )
    }
}

/// Exactly `width` columns: cut long text, space-pad short text.
fn fit(text: &str, width: usize) -> String {
    let cut: String = text.chars().take(width).collect();
    format!("{cut:<width$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(r: &Renderer<Vec<u8>>) -> String {
        String::from_utf8_lossy(r.writer()).into_owned()
    }

    #[test]
    fn intro_frame_positions_hi_and_lo() {
        let mut r = Renderer::new(Vec::new());
        r.draw_intro_frame(3).unwrap();
        let out = output(&r);
        // 1-based (3, 38) becomes ESC[3;38H
        assert!(out.contains("\x1b[3;38H"));
        assert!(out.contains("\x1b[4;40H"));
        assert!(out.contains("Hi"));
        assert!(out.contains("Lo"));
    }

    #[test]
    fn instructions_mention_try_count() {
        let mut r = Renderer::new(Vec::new());
        r.draw_instructions(6).unwrap();
        assert!(output(&r).contains("You will have 6 tries"));

        let mut r = Renderer::new(Vec::new());
        r.draw_instructions(1).unwrap();
        assert!(output(&r).contains("You will have 1 try "));
    }

    #[test]
    fn menu_lists_three_choices() {
        let mut r = Renderer::new(Vec::new());
        r.draw_difficulty_menu().unwrap();
        let out = output(&r);
        assert!(out.contains("1. Between 1 and 10"));
        assert!(out.contains("2. Between 1 and 100"));
        assert!(out.contains("3. Between 1 and 1000"));
        assert!(!out.contains("4. Between"));
    }

    #[test]
    fn guess_box_widens_with_difficulty() {
        let mut r = Renderer::new(Vec::new());
        r.draw_guess_box(Difficulty::EASY).unwrap();
        assert!(output(&r).contains(&format!("╔{}╗", "═".repeat(10))));

        let mut r = Renderer::new(Vec::new());
        r.draw_guess_box(Difficulty::from_exponent(6, 6).unwrap()).unwrap();
        assert!(output(&r).contains(&format!("╔{}╗", "═".repeat(14))));
    }

    #[test]
    fn feedback_text() {
        let mut r = Renderer::new(Vec::new());
        r.show_event(&GameEvent::GuessTooHigh { guesses_left: 3 }).unwrap();
        r.show_event(&GameEvent::GuessTooLow { guesses_left: 1 }).unwrap();
        r.show_event(&GameEvent::GuessTooLow { guesses_left: 0 }).unwrap();
        let out = output(&r);
        assert!(out.contains("Your guess was too high! 3 tries left."));
        assert!(out.contains("Your guess was too low! 1 try left."));
        assert!(out.contains(&fit("Your guess was too low!", layout::STATUS_WIDTH)));
        assert!(out.contains("\x1b[15;21H"));
    }

    #[test]
    fn feedback_covers_a_long_hint() {
        let mut r = Renderer::new(Vec::new());
        let hint = InputError::not_a_number(&"x".repeat(30));
        r.show_input_hint(&hint).unwrap();
        r.show_event(&GameEvent::GuessTooLow { guesses_left: 4 }).unwrap();
        let out = output(&r);
        let first = fit(&hint.to_string(), layout::STATUS_WIDTH);
        let second = fit("Your guess was too low! 4 tries left.", layout::STATUS_WIDTH);
        assert!(out.contains(&first));
        assert!(out.contains(&second));
        assert!(hint.to_string().chars().count() <= layout::STATUS_WIDTH);
        assert_eq!(first.chars().count(), second.chars().count());
    }

    #[test]
    fn loss_reveals_jackpot() {
        let mut r = Renderer::new(Vec::new());
        r.show_event(&GameEvent::RoundLost { secret: 50 }).unwrap();
        let out = output(&r);
        assert!(out.contains("You took too many guesses!"));
        assert!(out.contains("The jackpot was $50"));
    }

    #[test]
    fn winnings_line() {
        let mut r = Renderer::new(Vec::new());
        r.show_win().unwrap();
        r.show_winnings(1234).unwrap();
        let out = output(&r);
        assert!(out.contains("You won!"));
        assert!(out.contains("Winnings: "));
        assert!(out.contains("\x1b[16;32H"));
        assert!(out.contains("$1234"));
    }

    #[test]
    fn fit_pads_and_cuts() {
        assert_eq!(fit("abc", 5), "abc  ");
        assert_eq!(fit("abcdef", 3), "abc");
        assert_eq!(fit("héllo", 3), "hél");
    }
}
