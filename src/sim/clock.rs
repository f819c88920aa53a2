//! Tick counters for the fixed-timestep loop
//!
//! Wall ticks always advance; run ticks freeze while the game is
//! paused, so anything measured against run time stops with the board.

use crate::consts;

#[derive(Debug, Clone, Copy, Default)]
pub struct GameClock {
    /// Ticks since the run started, pause included
    pub wall_ticks: u64,
    /// Ticks the board actually simulated
    pub run_ticks: u64,
}

impl GameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, paused: bool) {
        self.wall_ticks += 1;
        if !paused {
            self.run_ticks += 1;
        }
    }

    /// Simulated run time in seconds
    #[inline]
    pub fn run_secs(&self) -> f32 {
        self.run_ticks as f32 / consts::TICK_RATE as f32
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
