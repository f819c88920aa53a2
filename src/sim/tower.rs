//! Towers and the bullets they fire
//!
//! - towers sit on the guard line and fire leftward on a cooldown
//! - a tower expires after its lifespan; bullets in flight keep going
//! - `TowerManager` owns every tower and hands out ids the lanes hold

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts;
use crate::settings::GameConfig;
use crate::sim::collision::Aabb;
use crate::sim::info::InfoTable;

/// One bullet in flight, moving right-to-left
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    /// Top-left corner
    pub pos: Vec2,
    /// Horizontal speed in units per tick
    pub speed: f32,
}

impl Bullet {
    pub fn advance(&mut self) {
        self.pos.x -= self.speed;
    }

    pub fn bounds(&self) -> Aabb {
        let size = Vec2::new(consts::BULLET_WIDTH, consts::BULLET_HEIGHT);
        Aabb::new(self.pos, self.pos + size)
    }
}

/// An auto-firing tower anchored to one lane
#[derive(Debug, Clone)]
pub struct Tower {
    pub id: u32,
    pub pos: Vec2,
    /// Run tick the tower was built at
    pub created_at: u64,
    pub last_fire_at: u64,
    /// Oldest bullet first
    pub bullets: VecDeque<Bullet>,
}

impl Tower {
    pub fn new(id: u32, pos: Vec2, now: u64) -> Self {
        Self {
            id,
            pos,
            created_at: now,
            // the first shot waits out a full cooldown
            last_fire_at: now,
            bullets: VecDeque::new(),
        }
    }

    pub fn is_expired(&self, now: u64, cfg: &GameConfig) -> bool {
        now - self.created_at >= cfg.tower_lifespan_ticks
    }

    pub fn can_fire(&self, now: u64, cfg: &GameConfig) -> bool {
        !self.is_expired(now, cfg) && now - self.last_fire_at >= cfg.tower_cooldown_ticks
    }

    fn fire(&mut self, now: u64, cfg: &GameConfig) {
        self.bullets.push_back(Bullet {
            pos: self.pos,
            speed: cfg.bullet_speed,
        });
        self.last_fire_at = now;
    }

    /// One tick: fire if due, move every bullet, drop bullets past the
    /// left edge. Expiry stops the firing only.
    pub fn advance(&mut self, paused: bool, now: u64, cfg: &GameConfig) {
        if !paused {
            if self.can_fire(now, cfg) {
                self.fire(now, cfg);
            }
            for bullet in &mut self.bullets {
                bullet.advance();
            }
        }
        while self.bullets.front().is_some_and(|b| b.pos.x < 0.0) {
            self.bullets.pop_front();
        }
    }

    /// Leftmost bullet, the only one eligible for collision
    pub fn head_bullet(&self) -> Option<&Bullet> {
        self.bullets.front()
    }

    pub fn pop_head_bullet(&mut self) -> Option<Bullet> {
        self.bullets.pop_front()
    }
}

/// Owns every tower on the board
#[derive(Debug, Clone)]
pub struct TowerManager {
    pub towers: Vec<Tower>,
    next_id: u32,
}

impl Default for TowerManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TowerManager {
    pub fn new() -> Self {
        Self {
            towers: Vec::new(),
            next_id: 1,
        }
    }

    /// Buy a tower on the given 1-based lane slot. Returns the new
    /// tower's id, or None when the score cannot cover the cost.
    pub fn add_tower(
        &mut self,
        lane: usize,
        info: &mut InfoTable,
        cfg: &GameConfig,
        now: u64,
    ) -> Option<u32> {
        if info.score < cfg.tower_cost {
            return None;
        }
        info.score -= cfg.tower_cost;

        let id = self.next_id;
        self.next_id += 1;
        let pos = Vec2::new(
            consts::GUARD_LINE_X,
            cfg.lane_y(lane - 1) + consts::TOWER_Y_PADDING,
        );
        self.towers.push(Tower::new(id, pos, now));
        log::info!("tower {id} placed on lane {lane}");
        Some(id)
    }

    /// Whether the tower still occupies its lane slot
    pub fn is_live(&self, id: u32, now: u64, cfg: &GameConfig) -> bool {
        self.towers
            .iter()
            .any(|t| t.id == id && !t.is_expired(now, cfg))
    }

    /// Advance every tower. Expired towers stay registered with their
    /// draining bullet queues; only a reset removes them.
    pub fn update(&mut self, paused: bool, now: u64, cfg: &GameConfig) {
        for tower in &mut self.towers {
            tower.advance(paused, now, cfg);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tower> {
        self.towers.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Tower> {
        self.towers.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.towers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.towers.is_empty()
    }

    pub fn reset(&mut self) {
        self.towers.clear();
        self.next_id = 1;
    }
}
