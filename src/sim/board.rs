//! The board: every lane plus the word generator
//!
//! Spawning runs on a fixed tick cadence and never reuses any of the
//! last three lanes, so one lane cannot be hammered back to back.

use std::collections::VecDeque;

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::settings::GameConfig;
use crate::sim::lane::Lane;
use crate::sim::tower::TowerManager;
use crate::sim::word::Word;
use crate::words::WordBank;

/// How many recent spawn lanes are off limits
const SPAWN_HISTORY: usize = 3;

/// Sum of every lane's tick report
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardReport {
    pub match_score: i64,
    pub oob_score: i64,
    /// Running total of characters banked across all lanes
    pub chars_typed: u64,
    /// True when any lane consumed the typed input
    pub matched: bool,
}

#[derive(Debug, Clone)]
pub struct Board {
    pub lanes: Vec<Lane>,
    bank: WordBank,
    rng: Pcg32,
    last_generated: u64,
    /// Most recent spawn lanes, newest first
    recent: VecDeque<usize>,
}

impl Board {
    pub fn new(cfg: &GameConfig, bank: WordBank, seed: u64) -> Self {
        let lanes = (0..cfg.lane_count)
            .map(|slot| {
                Lane::new(
                    slot + 1,
                    Vec2::new(cfg.origin.x, cfg.lane_y(slot)),
                    cfg.line_boundary,
                )
            })
            .collect();
        Self {
            lanes,
            bank,
            rng: Pcg32::seed_from_u64(seed),
            last_generated: 0,
            recent: VecDeque::new(),
        }
    }

    pub fn can_generate(&self, now: u64, cfg: &GameConfig) -> bool {
        now - self.last_generated >= cfg.generation_ticks
    }

    /// Spawn one word on a lane outside the recent-spawn window.
    /// Returns the 0-based lane slot used.
    pub fn generate(&mut self, now: u64, cfg: &GameConfig) -> usize {
        let candidates: Vec<usize> = (0..self.lanes.len())
            .filter(|slot| !self.recent.contains(slot))
            .collect();
        // boards narrower than the history window fall back to any lane
        let slot = if candidates.is_empty() {
            self.rng.random_range(0..self.lanes.len())
        } else {
            candidates[self.rng.random_range(0..candidates.len())]
        };

        let text = self.bank.draw(&mut self.rng).to_string();
        log::debug!("spawned '{}' on lane {}", text, slot + 1);
        let origin = self.lanes[slot].origin;
        self.lanes[slot].push_word(Word::new(text, origin, cfg));

        self.recent.push_front(slot);
        self.recent.truncate(SPAWN_HISTORY);
        self.last_generated = now;
        slot
    }

    /// One tick across the whole board
    pub fn update(
        &mut self,
        input: &str,
        paused: bool,
        now: u64,
        towers: &TowerManager,
        cfg: &GameConfig,
    ) -> BoardReport {
        if !paused && self.can_generate(now, cfg) {
            self.generate(now, cfg);
        }

        let mut report = BoardReport::default();
        for lane in &mut self.lanes {
            let lane_report = lane.advance(input, paused, now, towers, cfg);
            report.match_score += lane_report.matched_score;
            report.oob_score += lane_report.oob_score;
            report.matched |= lane_report.matched;
            report.chars_typed += lane.typed_chars;
        }
        report
    }

    /// Total words currently on the board
    pub fn word_count(&self) -> usize {
        self.lanes.iter().map(|l| l.word_count()).sum()
    }

    /// Wipe the board and restart the generator from a fresh seed
    pub fn reset(&mut self, seed: u64) {
        for lane in &mut self.lanes {
            lane.clear();
        }
        self.rng = Pcg32::seed_from_u64(seed);
        self.last_generated = 0;
        self.recent.clear();
    }
}
