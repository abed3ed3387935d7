/// Error types.
///
/// `InputError` is recoverable: the session shows it as a hint and asks
/// again. `GameError` ends the session.

use thiserror::Error;

/// Longest stretch of typed input echoed back in a hint.
const ECHO_LIMIT: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please type something.")]
    Empty,

    #[error("'{0}' is not a whole number.")]
    NotANumber(String),

    #[error("{value}? Pick a number from {min} to {max}.")]
    OutOfRange { value: String, min: u64, max: u64 },
}

impl InputError {
    pub fn not_a_number(text: &str) -> Self {
        InputError::NotANumber(clip(text))
    }

    pub fn out_of_range(text: &str, min: u64, max: u64) -> Self {
        InputError::OutOfRange { value: clip(text), min, max }
    }
}

fn clip(text: &str) -> String {
    if text.chars().count() <= ECHO_LIMIT {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(ECHO_LIMIT).collect();
    clipped.push('…');
    clipped
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type GameResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_are_short_enough_for_status_line() {
        let errs = [
            InputError::Empty,
            InputError::not_a_number("abc"),
            InputError::not_a_number(&"x".repeat(30)),
            InputError::out_of_range("9", 1, 3),
            InputError::out_of_range("99999999999999999999", 1, 1000),
        ];
        for e in errs {
            assert!(e.to_string().chars().count() <= 40, "{e}");
        }
    }

    #[test]
    fn long_input_is_clipped_in_hints() {
        let e = InputError::not_a_number(&"x".repeat(30));
        assert_eq!(e, InputError::NotANumber(format!("{}…", "x".repeat(12))));
        assert_eq!(InputError::not_a_number("abc"), InputError::NotANumber("abc".into()));
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone");
        let err: GameError = io.into();
        assert!(err.to_string().contains("gone"));
    }
}
