/// Transitions of the guess loop.
///
/// ```text
///   AwaitingGuess ── ""            ──▶ Quit
///        │ ├────── wrong (< max)   ──▶ AwaitingGuess
///        │ └────── wrong (== max)  ──▶ Lost
///        └──────── correct         ──▶ Won ── "Y"  ──▶ AwaitingGuess (new secret)
///                                          └─ else ──▶ Quit
/// ```
///
/// Every function returns the events it produced. Calls made in a phase
/// where they don't apply are no-ops and return no events.

use crate::domain::guess::{compare, Feedback, GuessInput};
use super::event::GameEvent;
use super::secret::SecretSource;
use super::state::{draw_secret, GameState, RoundPhase};

// ══════════════════════════════════════════════════════════════
// Guessing
// ══════════════════════════════════════════════════════════════

pub fn submit_guess(state: &mut GameState, input: GuessInput) -> Vec<GameEvent> {
    if state.phase != RoundPhase::AwaitingGuess { return vec![]; }

    let guess = match input {
        GuessInput::Quit => return quit(state),
        GuessInput::Number(n) => n,
    };

    match compare(guess, state.secret) {
        Feedback::Correct => {
            state.winnings = state.winnings.saturating_add(state.secret);
            state.rounds_won += 1;
            state.phase = RoundPhase::Won;
            tracing::debug!(round = state.round, winnings = state.winnings, "round won");
            vec![GameEvent::RoundWon { winnings: state.winnings }]
        }
        miss => {
            state.guess_count += 1;
            let guesses_left = state.guesses_left();
            let mut events = vec![match miss {
                Feedback::TooHigh => GameEvent::GuessTooHigh { guesses_left },
                _ => GameEvent::GuessTooLow { guesses_left },
            }];
            if state.guess_count >= state.max_guesses {
                state.phase = RoundPhase::Lost;
                tracing::debug!(round = state.round, "out of guesses");
                events.push(GameEvent::RoundLost { secret: state.secret });
            }
            events
        }
    }
}

// ══════════════════════════════════════════════════════════════
// Between rounds
// ══════════════════════════════════════════════════════════════

/// Answer to "Play again?". Only an exact `Y` continues.
pub fn play_again<S: SecretSource + ?Sized>(
    state: &mut GameState,
    answer: &str,
    secrets: &mut S,
) -> Vec<GameEvent> {
    if state.phase != RoundPhase::Won { return vec![]; }

    if answer == "Y" {
        start_round(state, secrets)
    } else {
        quit(state)
    }
}

/// Re-roll the secret and reset the guess counter. Winnings carry over.
pub fn start_round<S: SecretSource + ?Sized>(state: &mut GameState, secrets: &mut S) -> Vec<GameEvent> {
    state.secret = draw_secret(secrets, state.difficulty);
    state.guess_count = 0;
    state.round += 1;
    state.phase = RoundPhase::AwaitingGuess;
    tracing::debug!(round = state.round, bound = state.difficulty.upper_bound(), "round started");
    tracing::trace!(secret = state.secret, "secret drawn");
    vec![GameEvent::RoundStarted]
}

/// End the session from any phase that is still open.
pub fn quit(state: &mut GameState) -> Vec<GameEvent> {
    if state.is_done() { return vec![]; }
    state.phase = RoundPhase::Quit;
    vec![GameEvent::SessionQuit]
}
