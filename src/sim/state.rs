/// GameState: everything a session tracks between prompts.
///
/// Created once the difficulty is known, then mutated only through the
/// transitions in `sim::step`:
///   - `secret` is always within `[1, difficulty.upper_bound()]`
///   - `guess_count` never passes `max_guesses` while a round is open
///   - `winnings` never decreases

use crate::domain::difficulty::Difficulty;
use crate::sim::secret::SecretSource;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RoundPhase {
    AwaitingGuess,
    Won,
    Lost,
    Quit,
}

/// How a finished session ended.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SessionEnd {
    Quit,
    Lost,
}

#[derive(Clone, Debug)]
pub struct GameState {
    pub winnings: u64,
    pub difficulty: Difficulty,
    pub secret: u64,
    pub guess_count: u32,
    pub max_guesses: u32,
    /// 1-based number of the current round.
    pub round: u32,
    pub rounds_won: u32,
    pub phase: RoundPhase,
}

impl GameState {
    pub fn new<S: SecretSource + ?Sized>(
        difficulty: Difficulty,
        max_guesses: u32,
        secrets: &mut S,
    ) -> Self {
        GameState {
            winnings: 0,
            difficulty,
            secret: draw_secret(secrets, difficulty),
            guess_count: 0,
            max_guesses: max_guesses.max(1),
            round: 1,
            rounds_won: 0,
            phase: RoundPhase::AwaitingGuess,
        }
    }

    /// Session over: no more rounds will be played.
    pub fn is_done(&self) -> bool {
        matches!(self.phase, RoundPhase::Lost | RoundPhase::Quit)
    }

    pub fn guesses_left(&self) -> u32 {
        self.max_guesses.saturating_sub(self.guess_count)
    }

    pub fn ending(&self) -> Option<SessionEnd> {
        match self.phase {
            RoundPhase::Lost => Some(SessionEnd::Lost),
            RoundPhase::Quit => Some(SessionEnd::Quit),
            _ => None,
        }
    }
}

/// Draw a secret for `difficulty`, pulled back into range if the source
/// misbehaves.
pub(crate) fn draw_secret<S: SecretSource + ?Sized>(secrets: &mut S, difficulty: Difficulty) -> u64 {
    let upper = difficulty.upper_bound();
    secrets.draw(upper).clamp(1, upper)
}
