/// Events emitted by a state transition.
/// The presentation layer consumes these for status text and sound.

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    RoundStarted,
    GuessTooHigh { guesses_left: u32 },
    GuessTooLow { guesses_left: u32 },
    RoundWon { winnings: u64 },
    RoundLost { secret: u64 },
    SessionQuit,
}
