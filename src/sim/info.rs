//! Run bookkeeping: score, typing speed, sampled history
//!
//! WPM uses the standard 5-chars-per-word convention against simulated
//! run time, so pausing freezes the rate instead of bleeding it away.

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::settings::GameConfig;
use crate::sim::board::BoardReport;
use crate::sim::clock::GameClock;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    /// Score reached the difficulty ceiling
    Victory,
    /// Score fell to the floor
    Defeat,
}

/// Score/WPM series sampled at a fixed wall-tick cadence
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunHistory {
    pub score: Vec<i64>,
    pub wpm: Vec<f32>,
}

/// The live scoreboard for one run
#[derive(Debug, Clone, Default)]
pub struct InfoTable {
    pub score: i64,
    pub wpm: f32,
    /// Characters banked from destroyed words
    pub chars_typed: u64,
    pub history: RunHistory,
}

impl InfoTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one tick's board report in. Score deltas always land;
    /// the WPM figure only moves while the run clock does.
    pub fn apply(&mut self, report: &BoardReport, clock: &GameClock, paused: bool) {
        self.score += report.match_score - report.oob_score;
        self.chars_typed = report.chars_typed;

        if !paused {
            let secs = clock.run_secs();
            self.wpm = if secs > 0.0 {
                (self.chars_typed as f32 / 5.0) * 60.0 / secs
            } else {
                0.0
            };
        }

        if clock.wall_ticks > 0 && clock.wall_ticks % consts::HISTORY_SAMPLE_TICKS == 0 {
            self.history.score.push(self.score);
            self.history.wpm.push(self.wpm);
        }
    }

    /// Whether the score has crossed either run bound
    pub fn outcome(&self, cfg: &GameConfig) -> Option<RunOutcome> {
        if self.score <= cfg.min_score {
            Some(RunOutcome::Defeat)
        } else if self.score >= cfg.max_score {
            Some(RunOutcome::Victory)
        } else {
            None
        }
    }

    /// The info line as rendered, floats at two decimals
    pub fn summary(&self) -> String {
        format!("score: {}, wpm: {:.2}", self.score, self.wpm)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
