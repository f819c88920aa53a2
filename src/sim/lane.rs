//! One horizontal lane of scrolling words
//!
//! Words queue oldest-first; with a uniform speed the head is always
//! the furthest right, so only the head can cross the boundary.

use std::collections::VecDeque;

use glam::Vec2;

use crate::settings::GameConfig;
use crate::sim::tower::TowerManager;
use crate::sim::word::Word;

/// What happened on this lane during one tick
#[derive(Debug, Clone, Copy, Default)]
pub struct LaneReport {
    /// Points awarded for a typed match
    pub matched_score: i64,
    /// Points charged for an escaped word
    pub oob_score: i64,
    pub matched: bool,
}

#[derive(Debug, Clone)]
pub struct Lane {
    /// 1-based slot shown to the player
    pub index: usize,
    /// Left end of the lane, where new words spawn
    pub origin: Vec2,
    /// Words crossing this x escape
    pub boundary: f32,
    /// Characters banked from words destroyed on this lane
    pub typed_chars: u64,
    words: VecDeque<Word>,
    /// Id of the tower guarding this lane, if any
    tower: Option<u32>,
}

impl Lane {
    pub fn new(index: usize, origin: Vec2, boundary: f32) -> Self {
        Self {
            index,
            origin,
            boundary,
            typed_chars: 0,
            words: VecDeque::new(),
            tower: None,
        }
    }

    pub fn push_word(&mut self, word: Word) {
        self.words.push_back(word);
    }

    pub fn head_word(&self) -> Option<&Word> {
        self.words.front()
    }

    pub fn pop_head_word(&mut self) -> Option<Word> {
        self.words.pop_front()
    }

    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn tower(&self) -> Option<u32> {
        self.tower
    }

    pub fn attach_tower(&mut self, id: u32) {
        self.tower = Some(id);
    }

    /// The `(n)` marker rendered at the lane origin while the slot is
    /// open for a tower
    pub fn slot_label(&self) -> Option<String> {
        match self.tower {
            None => Some(format!("({})", self.index)),
            Some(_) => None,
        }
    }

    /// One tick: resolve a typed match, pop an escaped head, then move
    /// the survivors. Movement is the only part pause suspends.
    pub fn advance(
        &mut self,
        input: &str,
        paused: bool,
        now: u64,
        towers: &TowerManager,
        cfg: &GameConfig,
    ) -> LaneReport {
        let mut report = LaneReport::default();

        if !input.is_empty() {
            if let Some(at) = self.words.iter().position(|w| w.text == input) {
                if let Some(word) = self.words.remove(at) {
                    report.matched_score = word.score;
                    report.matched = true;
                    self.typed_chars += input.len() as u64;
                }
            }
        }

        if self
            .head_word()
            .is_some_and(|w| w.pos.x >= self.boundary)
        {
            if let Some(escaped) = self.words.pop_front() {
                report.oob_score = escaped.score;
            }
        }

        if !paused {
            for word in &mut self.words {
                word.advance();
            }
        }

        if let Some(id) = self.tower {
            if !towers.is_live(id, now, cfg) {
                self.tower = None;
            }
        }

        report
    }

    pub fn clear(&mut self) {
        self.words.clear();
        self.tower = None;
        self.typed_chars = 0;
    }
}
