//! Word Siege - a lane-based typing defense arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (lanes, towers, collisions, scoring)
//! - `input`: Keystroke buffer with typing/command modes
//! - `command`: Command parsing and validation errors
//! - `words`: Word bank the board draws from
//! - `settings`: Difficulty presets and run configuration
//! - `export`: Run history export for the post-game chart

pub mod command;
pub mod export;
pub mod highscores;
pub mod input;
pub mod settings;
pub mod sim;
pub mod status;
pub mod words;

pub use highscores::HighScores;
pub use settings::{Difficulty, GameConfig};
pub use sim::{Game, RunOutcome};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (one tick per rendered frame)
    pub const TICK_RATE: u32 = 24;

    /// Board dimensions - lanes scroll left to right across the full width
    pub const LANE_COUNT: usize = 10;
    pub const LANE_GAP: f32 = 40.0;
    pub const BOARD_ORIGIN_X: f32 = 0.0;
    pub const BOARD_ORIGIN_Y: f32 = 10.0;
    pub const BOARD_WIDTH: f32 = 1000.0;

    /// Danger-zone color thresholds (word x position)
    pub const WARNING_X: f32 = 500.0;
    pub const DANGER_X: f32 = 800.0;

    /// Glyph cell used for word collision boxes
    pub const WORD_GLYPH_WIDTH: f32 = 12.0;
    pub const WORD_HEIGHT: f32 = 20.0;

    /// Word score tiers by text length
    pub const SHORT_WORD_LEN: usize = 7;
    pub const LONG_WORD_LEN: usize = 10;
    pub const SCORE_SHORT: i64 = 3;
    pub const SCORE_MEDIUM: i64 = 5;
    pub const SCORE_LONG: i64 = 10;

    /// Towers sit on the guard line near the right edge
    pub const GUARD_LINE_X: f32 = 950.0;
    pub const TOWER_Y_PADDING: f32 = 7.0;
    pub const BULLET_WIDTH: f32 = 15.0;
    pub const BULLET_HEIGHT: f32 = 30.0;

    /// Typed buffer capacity before the full warning
    pub const INPUT_CAPACITY: usize = 24;

    /// Status message display duration (5 seconds at 24 Hz)
    pub const STATUS_TICKS: u64 = 5 * 24;
    /// History sampling interval, wall clock (5 seconds at 24 Hz)
    pub const HISTORY_SAMPLE_TICKS: u64 = 5 * 24;
}

/// Convert a duration in seconds to whole simulation ticks
#[inline]
pub fn secs_to_ticks(secs: f32) -> u64 {
    (secs * consts::TICK_RATE as f32).round() as u64
}

/// Convert a tick count back to seconds
#[inline]
pub fn ticks_to_secs(ticks: u64) -> f32 {
    ticks as f32 / consts::TICK_RATE as f32
}
