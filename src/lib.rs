//! Sports Medley - a multi-round, multi-minigame arena party game
//!
//! Core modules:
//! - `sim`: Session state machine, scoring, and pawn dispatch (no I/O)
//! - `platform`: Input layer contract (gamepads, controller setup)
//! - `ui`: Scoreboard / announcement sink
//! - `audio`: Sound sink and delayed cue scheduling
//! - `summary`: End-of-match results
//! - `settings`: Data-driven match configuration

pub mod audio;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod summary;
pub mod ui;

pub use settings::{MatchPreset, Settings};
pub use summary::MatchSummary;

/// Game configuration constants
pub mod consts {
    /// How long a minigame stays active before rotation (ms)
    pub const ATTENTION_SPAN_MS: f64 = 25_000.0;
    /// Rounds per match; the last one is always Bonus
    pub const TOTAL_ROUNDS: u32 = 11;
    /// Delay between the whistle and the minigame name cue (ms)
    pub const CUE_DELAY_MS: f64 = 1_000.0;

    /// Nominal physics step rate the flag point value is tuned for
    pub const NOMINAL_STEP_RATE_HZ: f64 = 30.0;

    /// Flag defaults
    pub const FLAG_POINTS_PER_SECOND: f64 = 1.0;
    pub const FLAG_PICKUP_COOLDOWN_MS: f64 = 300.0;

    /// Players needed before anything counts
    pub const MIN_SCORING_PLAYERS: usize = 2;

    /// Arena dimensions (pixels)
    pub const ARENA_WIDTH: f32 = 1366.0;
    pub const ARENA_HEIGHT: f32 = 768.0;
}

/// Strip spaces and lowercase, e.g. "Kill The Carrier" -> "killthecarrier"
pub fn cue_name(label: &str) -> String {
    label.replace(' ', "").to_lowercase()
}
