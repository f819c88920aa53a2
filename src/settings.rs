//! Difficulty presets and run configuration
//!
//! A preset fixes the tunables once before a run; nothing here changes
//! while the run is live.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::secs_to_ticks;

/// Difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Score ceiling that wins the run
    pub fn max_score(&self) -> i64 {
        match self {
            Difficulty::Easy => 50,
            Difficulty::Medium => 100,
            Difficulty::Hard => 150,
        }
    }

    /// Word advance per tick, in position units
    pub fn word_speed(&self) -> f32 {
        match self {
            Difficulty::Easy => 2.0,
            Difficulty::Medium => 3.0,
            Difficulty::Hard => 4.0,
        }
    }

    /// Seconds between word spawns
    pub fn generation_secs(&self) -> f32 {
        match self {
            Difficulty::Easy => 2.0,
            Difficulty::Medium => 1.5,
            Difficulty::Hard => 1.5,
        }
    }

    /// Seconds between tower shots
    pub fn cooldown_secs(&self) -> f32 {
        match self {
            Difficulty::Easy => 2.0,
            Difficulty::Medium => 1.5,
            Difficulty::Hard => 1.0,
        }
    }
}

/// Tunable parameters for one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub difficulty: Difficulty,

    // === Board geometry ===
    /// Number of horizontal tracks
    pub lane_count: usize,
    /// Vertical spacing between lane origins
    pub lane_gap: f32,
    /// Top-left corner of the play area
    pub origin: Vec2,
    /// x past which the head word escapes
    pub line_boundary: f32,

    // === Words ===
    /// Word advance per tick
    pub word_speed: f32,
    /// Ticks between word spawns
    pub generation_ticks: u64,
    /// Length below which a word scores the short tier
    pub short_word_len: usize,
    /// Length at which a word scores the long tier
    pub long_word_len: usize,

    // === Towers ===
    /// Ledger points deducted per placement
    pub tower_cost: i64,
    /// Ticks a tower keeps firing after placement
    pub tower_lifespan_ticks: u64,
    /// Ticks between tower shots
    pub tower_cooldown_ticks: u64,
    /// Bullet advance per tick, toward the board origin
    pub bullet_speed: f32,

    // === Run bounds ===
    /// Score floor that loses the run
    pub min_score: i64,
    /// Score ceiling that wins the run
    pub max_score: i64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::preset(Difficulty::Medium)
    }
}

impl GameConfig {
    /// Create a config from a difficulty preset
    pub fn preset(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            lane_count: LANE_COUNT,
            lane_gap: LANE_GAP,
            origin: Vec2::new(BOARD_ORIGIN_X, BOARD_ORIGIN_Y),
            line_boundary: BOARD_WIDTH,
            word_speed: difficulty.word_speed(),
            generation_ticks: secs_to_ticks(difficulty.generation_secs()),
            short_word_len: SHORT_WORD_LEN,
            long_word_len: LONG_WORD_LEN,
            tower_cost: 10,
            tower_lifespan_ticks: secs_to_ticks(20.0),
            tower_cooldown_ticks: secs_to_ticks(difficulty.cooldown_secs()),
            bullet_speed: 3.0,
            min_score: -20,
            max_score: difficulty.max_score(),
        }
    }

    /// Score tier for a word of the given text length
    pub fn word_score(&self, len: usize) -> i64 {
        if len >= self.long_word_len {
            SCORE_LONG
        } else if len >= self.short_word_len {
            SCORE_MEDIUM
        } else {
            SCORE_SHORT
        }
    }

    /// y position of a lane's origin (0-based lane slot)
    #[inline]
    pub fn lane_y(&self, slot: usize) -> f32 {
        self.origin.y + slot as f32 * self.lane_gap
    }
}
