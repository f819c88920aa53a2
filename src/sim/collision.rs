//! Bullet-word collision
//!
//! Head-only rule: a tower's oldest bullet can hit the oldest word of
//! any lane it overlaps. Removal awards nothing and charges nothing.

use glam::Vec2;

use crate::sim::board::Board;
use crate::sim::tower::TowerManager;

/// Axis-aligned box with exclusive edges; touching rectangles do not
/// overlap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Resolve every head-bullet against every head-word once per tick.
/// Returns how many words were shot down.
pub fn resolve(towers: &mut TowerManager, board: &mut Board) -> u32 {
    let mut removed = 0;
    for tower in towers.iter_mut() {
        for lane in &mut board.lanes {
            let hit = match (tower.head_bullet(), lane.head_word()) {
                (Some(bullet), Some(word)) => bullet.bounds().intersects(&word.bounds()),
                _ => false,
            };
            if hit {
                tower.pop_head_bullet();
                lane.pop_head_word();
                removed += 1;
            }
        }
    }
    removed
}
