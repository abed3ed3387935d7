/// External configuration loader.
///
/// Reads `config.toml` from the executable's directory, the CWD, or
/// `~/.config/hilo`. Falls back to the classic game settings if the file
/// is missing or incomplete. Out-of-range values are clamped.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::difficulty::HARD_MAX_EXPONENT;

const MAX_GUESS_LIMIT: u32 = 20;
/// "Lo" on the last frame must stay above the instructions.
const MAX_INTRO_FRAMES: u16 = 8;

// ── Public Config Struct ──

#[derive(Clone, Debug)]
pub struct GameConfig {
    pub timing: TimingConfig,
    pub rules: RulesConfig,
    pub sound: bool,
}

#[derive(Clone, Debug)]
pub struct TimingConfig {
    pub frame: Duration,
    pub intro_frames: u16,
    pub instructions_pause: Duration,
    pub win_reveal: Duration,
}

#[derive(Clone, Debug)]
pub struct RulesConfig {
    pub max_guesses: u32,
    pub max_exponent: u32,   // above 3 = insane mode
    pub seed: Option<u64>,
}

// ── TOML Schema (with serde defaults) ──

#[derive(Deserialize, Debug, Default)]
struct TomlConfig {
    #[serde(default)]
    timing: TomlTiming,
    #[serde(default)]
    rules: TomlRules,
    #[serde(default)]
    general: TomlGeneral,
}

#[derive(Deserialize, Debug)]
struct TomlTiming {
    #[serde(default = "default_frame_ms")]
    frame_ms: u64,
    #[serde(default = "default_intro_frames")]
    intro_frames: u16,
    #[serde(default = "default_instructions_pause")]
    instructions_pause_ms: u64,
    #[serde(default = "default_win_reveal")]
    win_reveal_ms: u64,
}

#[derive(Deserialize, Debug)]
struct TomlRules {
    #[serde(default = "default_max_guesses")]
    max_guesses: u32,
    #[serde(default = "default_max_exponent")]
    max_exponent: u32,
    #[serde(default)]
    seed: Option<u64>,
}

#[derive(Deserialize, Debug)]
struct TomlGeneral {
    #[serde(default = "default_sound")]
    sound: bool,
}

// ── Defaults ──

fn default_frame_ms() -> u64 { 500 }
fn default_intro_frames() -> u16 { 8 }
fn default_instructions_pause() -> u64 { 1500 }
fn default_win_reveal() -> u64 { 1000 }
fn default_max_guesses() -> u32 { 6 }
fn default_max_exponent() -> u32 { 6 }
fn default_sound() -> bool { true }

impl Default for TomlTiming {
    fn default() -> Self {
        TomlTiming {
            frame_ms: default_frame_ms(),
            intro_frames: default_intro_frames(),
            instructions_pause_ms: default_instructions_pause(),
            win_reveal_ms: default_win_reveal(),
        }
    }
}

impl Default for TomlRules {
    fn default() -> Self {
        TomlRules {
            max_guesses: default_max_guesses(),
            max_exponent: default_max_exponent(),
            seed: None,
        }
    }
}

impl Default for TomlGeneral {
    fn default() -> Self {
        TomlGeneral { sound: default_sound() }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig::from_toml(TomlConfig::default())
    }
}

// ── Loading ──

impl GameConfig {
    /// Load config from the first `config.toml` found in the candidate dirs.
    pub fn load() -> Self {
        GameConfig::from_toml(load_toml(&candidate_dirs()))
    }

    /// Strict parse: errors go to the caller instead of falling back.
    #[cfg(test)]
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<TomlConfig>(text).map(GameConfig::from_toml)
    }

    fn from_toml(cfg: TomlConfig) -> Self {
        GameConfig {
            timing: TimingConfig {
                frame: Duration::from_millis(cfg.timing.frame_ms),
                intro_frames: cfg.timing.intro_frames.clamp(1, MAX_INTRO_FRAMES),
                instructions_pause: Duration::from_millis(cfg.timing.instructions_pause_ms),
                win_reveal: Duration::from_millis(cfg.timing.win_reveal_ms),
            },
            rules: RulesConfig {
                max_guesses: cfg.rules.max_guesses.clamp(1, MAX_GUESS_LIMIT),
                max_exponent: cfg.rules.max_exponent.clamp(1, HARD_MAX_EXPONENT),
                seed: cfg.rules.seed,
            },
            sound: cfg.general.sound,
        }
    }

    /// No pauses at all. Used by tests and scripted runs.
    #[cfg(test)]
    pub fn instant() -> Self {
        let mut cfg = GameConfig::default();
        cfg.timing.frame = Duration::ZERO;
        cfg.timing.instructions_pause = Duration::ZERO;
        cfg.timing.win_reveal = Duration::ZERO;
        cfg.sound = false;
        cfg
    }
}

/// Candidate directories to search: exe dir + CWD + user config (deduplicated).
fn candidate_dirs() -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = vec![];

    // 1. Directory of the running executable
    if let Ok(exe) = std::env::current_exe() {
        let resolved = exe.canonicalize().unwrap_or(exe);
        if let Some(parent) = resolved.parent() {
            dirs.push(parent.to_path_buf());
        }
    }

    // 2. Current working directory
    if let Ok(cwd) = std::env::current_dir() {
        if !dirs.iter().any(|d| d == &cwd) {
            dirs.push(cwd);
        }
    }

    // 3. ~/.config/hilo
    if let Ok(home) = std::env::var("HOME") {
        let user = PathBuf::from(&home).join(".config/hilo");
        if user.is_dir() && !dirs.iter().any(|d| d == &user) {
            dirs.push(user);
        }
    }

    dirs
}

/// Search for config.toml in candidate directories.
fn load_toml(search_dirs: &[PathBuf]) -> TomlConfig {
    for dir in search_dirs {
        let path = dir.join("config.toml");
        if path.exists() {
            return read_toml(&path);
        }
    }
    tracing::debug!("no config.toml found, using defaults");
    TomlConfig::default()
}

fn read_toml(path: &Path) -> TomlConfig {
    match std::fs::read_to_string(path) {
        Ok(text) => match toml::from_str::<TomlConfig>(&text) {
            Ok(cfg) => {
                tracing::debug!(path = %path.display(), "loaded config");
                cfg
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "config parse error, using defaults: {e}");
                TomlConfig::default()
            }
        },
        Err(e) => {
            tracing::warn!(path = %path.display(), "could not read config: {e}");
            TomlConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_game() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.timing.frame, Duration::from_millis(500));
        assert_eq!(cfg.timing.intro_frames, 8);
        assert_eq!(cfg.timing.instructions_pause, Duration::from_millis(1500));
        assert_eq!(cfg.timing.win_reveal, Duration::from_secs(1));
        assert_eq!(cfg.rules.max_guesses, 6);
        assert_eq!(cfg.rules.max_exponent, 6);
        assert_eq!(cfg.rules.seed, None);
        assert!(cfg.sound);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let cfg = GameConfig::from_toml_str("[rules]\nseed = 42\n").unwrap();
        assert_eq!(cfg.rules.seed, Some(42));
        assert_eq!(cfg.rules.max_guesses, 6);
        assert_eq!(cfg.timing.intro_frames, 8);
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let cfg = GameConfig::from_toml_str("").unwrap();
        assert_eq!(cfg.rules.max_exponent, 6);
    }

    #[test]
    fn values_are_clamped() {
        let cfg = GameConfig::from_toml_str(
            "[rules]\nmax_guesses = 0\nmax_exponent = 99\n[timing]\nintro_frames = 0\n",
        )
        .unwrap();
        assert_eq!(cfg.rules.max_guesses, 1);
        assert_eq!(cfg.rules.max_exponent, HARD_MAX_EXPONENT);
        assert_eq!(cfg.timing.intro_frames, 1);

        let cfg = GameConfig::from_toml_str("[rules]\nmax_guesses = 500\n[timing]\nintro_frames = 40\n").unwrap();
        assert_eq!(cfg.rules.max_guesses, MAX_GUESS_LIMIT);
        assert_eq!(cfg.timing.intro_frames, MAX_INTRO_FRAMES);
    }

    #[test]
    fn malformed_text_is_an_error() {
        assert!(GameConfig::from_toml_str("[rules\nseed =").is_err());
        assert!(GameConfig::from_toml_str("[general]\nsound = \"loud\"").is_err());
    }

    #[test]
    fn unreadable_path_falls_back() {
        let cfg = read_toml(Path::new("/definitely/not/here/config.toml"));
        assert_eq!(cfg.rules.max_guesses, 6);
    }
}
