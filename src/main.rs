/// Entry point and session driver.

mod config;
mod domain;
mod error;
mod sim;
mod ui;

use std::io::Write;
use std::process::ExitCode;
use std::thread;

use tracing_subscriber::EnvFilter;

use config::GameConfig;
use domain::difficulty::Difficulty;
use domain::guess::parse_guess;
use error::GameResult;
use sim::event::GameEvent;
use sim::secret::{RandomSecret, SecretSource};
use sim::state::{GameState, RoundPhase, SessionEnd};
use sim::step;
use ui::input::{LineSource, StdinLines};
use ui::renderer::Renderer;
use ui::sound::SoundEngine;

/// Log filter variable, e.g. `HILO_LOG=debug hilo 2>hilo.log`.
const LOG_ENV: &str = "HILO_LOG";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SessionSummary {
    pub winnings: u64,
    pub rounds_won: u32,
    pub ending: SessionEnd,
}

impl SessionSummary {
    fn from_state(state: &GameState) -> Self {
        SessionSummary {
            winnings: state.winnings,
            rounds_won: state.rounds_won,
            ending: state.ending().unwrap_or(SessionEnd::Quit),
        }
    }

    /// Player left before a round began.
    fn walked_away() -> Self {
        SessionSummary { winnings: 0, rounds_won: 0, ending: SessionEnd::Quit }
    }
}

fn main() -> ExitCode {
    init_logging();
    let config = GameConfig::load();

    let mut renderer = Renderer::stdout();
    if let Err(e) = renderer.init() {
        eprintln!("Terminal init failed: {e}");
        return ExitCode::FAILURE;
    }

    let sound = if config.sound { SoundEngine::new() } else { None };
    let mut input = StdinLines::stdin();
    let mut secrets = RandomSecret::new(config.rules.seed);

    let result = run_session(&config, &mut renderer, &mut input, &mut secrets, sound.as_ref());

    if let Err(e) = renderer.cleanup() {
        eprintln!("Terminal cleanup failed: {e}");
    }

    match result {
        Ok(summary) => {
            println!("Thanks for playing HiLo!");
            println!("Final winnings: ${}", summary.winnings);
            println!("Rounds won: {}", summary.rounds_won);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("session aborted: {e}");
            eprintln!("Game error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Intro → instructions → difficulty → rounds → goodbye.
fn run_session<W, L, S>(
    config: &GameConfig,
    renderer: &mut Renderer<W>,
    input: &mut L,
    secrets: &mut S,
    sound: Option<&SoundEngine>,
) -> GameResult<SessionSummary>
where
    W: Write,
    L: LineSource + ?Sized,
    S: SecretSource + ?Sized,
{
    play_intro(config, renderer, sound)?;

    renderer.draw_instructions(config.rules.max_guesses)?;
    thread::sleep(config.timing.instructions_pause);
    renderer.prompt_continue()?;

    let summary = match input.read_line()? {
        None => SessionSummary::walked_away(),
        Some(_) => match choose_difficulty(config, renderer, input)? {
            None => SessionSummary::walked_away(),
            Some(difficulty) => {
                renderer.clear_difficulty_menu()?;
                renderer.draw_guess_box(difficulty)?;
                let mut state = GameState::new(difficulty, config.rules.max_guesses, secrets);
                tracing::debug!(bound = difficulty.upper_bound(), "session started");
                play_rounds(config, &mut state, renderer, input, secrets, sound)?;
                SessionSummary::from_state(&state)
            }
        },
    };

    renderer.prompt_goodbye()?;
    input.read_line()?;

    tracing::info!(
        winnings = summary.winnings,
        rounds_won = summary.rounds_won,
        ending = ?summary.ending,
        "session over"
    );
    Ok(summary)
}

fn play_intro<W: Write>(
    config: &GameConfig,
    renderer: &mut Renderer<W>,
    sound: Option<&SoundEngine>,
) -> GameResult<()> {
    let total = config.timing.intro_frames;
    for frame in 1..=total {
        renderer.draw_intro_frame(frame)?;
        if let Some(sfx) = sound {
            sfx.play_intro_blip(frame, total);
        }
        thread::sleep(config.timing.frame);
    }
    Ok(())
}

/// Ask until the answer is a valid difficulty. `None` on end of input.
fn choose_difficulty<W, L>(
    config: &GameConfig,
    renderer: &mut Renderer<W>,
    input: &mut L,
) -> GameResult<Option<Difficulty>>
where
    W: Write,
    L: LineSource + ?Sized,
{
    renderer.draw_difficulty_menu()?;
    loop {
        renderer.prompt_difficulty()?;
        let line = match input.read_line()? {
            Some(line) => line,
            None => return Ok(None),
        };
        match Difficulty::parse(&line, config.rules.max_exponent) {
            Ok(difficulty) => {
                if difficulty.is_insane() {
                    tracing::info!(exponent = difficulty.exponent(), "insane mode");
                }
                return Ok(Some(difficulty));
            }
            Err(e) => {
                tracing::debug!(input = %line, "rejected difficulty: {e}");
                renderer.show_menu_hint(&e)?;
            }
        }
    }
}

fn play_rounds<W, L, S>(
    config: &GameConfig,
    state: &mut GameState,
    renderer: &mut Renderer<W>,
    input: &mut L,
    secrets: &mut S,
    sound: Option<&SoundEngine>,
) -> GameResult<()>
where
    W: Write,
    L: LineSource + ?Sized,
    S: SecretSource + ?Sized,
{
    while !state.is_done() {
        renderer.prompt_guess()?;
        let line = match input.read_line()? {
            Some(line) => line,
            None => {
                step::quit(state);
                break;
            }
        };

        let guess = match parse_guess(&line, state.difficulty.upper_bound()) {
            Ok(guess) => guess,
            Err(e) => {
                renderer.show_input_hint(&e)?;
                continue;
            }
        };

        for event in step::submit_guess(state, guess) {
            present(config, renderer, sound, &event)?;
        }

        if state.phase == RoundPhase::Won {
            renderer.prompt_play_again()?;
            let answer = input.read_line()?.unwrap_or_default();
            renderer.clear_play_again()?;
            for event in step::play_again(state, &answer, secrets) {
                present(config, renderer, sound, &event)?;
            }
        }
    }
    Ok(())
}

fn present<W: Write>(
    config: &GameConfig,
    renderer: &mut Renderer<W>,
    sound: Option<&SoundEngine>,
    event: &GameEvent,
) -> GameResult<()> {
    play_sound(sound, event);
    match event {
        GameEvent::RoundWon { winnings } => {
            renderer.show_win()?;
            thread::sleep(config.timing.win_reveal);
            renderer.show_winnings(*winnings)?;
        }
        other => renderer.show_event(other)?,
    }
    Ok(())
}

fn play_sound(sound: Option<&SoundEngine>, event: &GameEvent) {
    let sfx = match sound {
        Some(s) => s,
        None => return,
    };
    match event {
        GameEvent::GuessTooHigh { .. } => sfx.play_too_high(),
        GameEvent::GuessTooLow { .. } => sfx.play_too_low(),
        GameEvent::RoundWon { .. } => sfx.play_win(),
        GameEvent::RoundLost { .. } => sfx.play_lose(),
        GameEvent::RoundStarted | GameEvent::SessionQuit => {}
    }
}
