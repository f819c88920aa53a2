//! A scrolling word and its danger classification

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts;
use crate::settings::GameConfig;
use crate::sim::collision::Aabb;

/// How close a word is to the right edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DangerLevel {
    #[default]
    Safe,
    Warning,
    Danger,
}

impl DangerLevel {
    /// Classify by the word's left edge
    pub fn from_x(x: f32) -> Self {
        if x > consts::DANGER_X {
            DangerLevel::Danger
        } else if x >= consts::WARNING_X {
            DangerLevel::Warning
        } else {
            DangerLevel::Safe
        }
    }
}

/// One word scrolling left-to-right along a lane
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Word {
    pub text: String,
    /// Top-left corner
    pub pos: Vec2,
    /// Horizontal speed in units per tick
    pub speed: f32,
    /// Points awarded when destroyed, charged when it escapes
    pub score: i64,
    pub danger: DangerLevel,
}

impl Word {
    pub fn new(text: impl Into<String>, pos: Vec2, cfg: &GameConfig) -> Self {
        let text = text.into();
        let score = cfg.word_score(text.len());
        Self {
            text,
            pos,
            speed: cfg.word_speed,
            score,
            danger: DangerLevel::from_x(pos.x),
        }
    }

    /// Move one tick rightward and refresh the danger level
    pub fn advance(&mut self) {
        self.pos.x += self.speed;
        self.danger = DangerLevel::from_x(self.pos.x);
    }

    /// Bounding box used for bullet collision
    pub fn bounds(&self) -> Aabb {
        let size = Vec2::new(
            self.text.len() as f32 * consts::WORD_GLYPH_WIDTH,
            consts::WORD_HEIGHT,
        );
        Aabb::new(self.pos, self.pos + size)
    }
}
