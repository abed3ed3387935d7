/// Guess parsing and comparison.

use std::cmp::Ordering;
use std::num::IntErrorKind;

use crate::error::InputError;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GuessInput {
    /// Empty line: leave the game.
    Quit,
    Number(u64),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Feedback {
    TooHigh,
    TooLow,
    Correct,
}

/// Parse one line typed at the guess prompt (terminator already stripped).
///
/// Only a truly empty line quits; whitespace alone is a typo to re-prompt.
/// `upper` is the round's bound, quoted when the number won't fit a `u64`.
pub fn parse_guess(line: &str, upper: u64) -> Result<GuessInput, InputError> {
    if line.is_empty() {
        return Ok(GuessInput::Quit);
    }
    let text = line.trim();
    if text.is_empty() {
        return Err(InputError::Empty);
    }
    text.parse::<u64>()
        .map(GuessInput::Number)
        .map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow => InputError::out_of_range(text, 1, upper),
            _ => InputError::not_a_number(text),
        })
}

pub fn compare(guess: u64, secret: u64) -> Feedback {
    match guess.cmp(&secret) {
        Ordering::Greater => Feedback::TooHigh,
        Ordering::Less => Feedback::TooLow,
        Ordering::Equal => Feedback::Correct,
    }
}
