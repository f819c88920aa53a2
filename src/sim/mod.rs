//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Oldest-first queues per lane and per tower
//! - No rendering or platform dependencies

pub mod board;
pub mod clock;
pub mod collision;
pub mod info;
pub mod lane;
pub mod tick;
pub mod tower;
pub mod word;

pub use board::{Board, BoardReport};
pub use clock::GameClock;
pub use collision::{Aabb, resolve};
pub use info::{InfoTable, RunHistory, RunOutcome};
pub use lane::{Lane, LaneReport};
pub use tick::Game;
pub use tower::{Bullet, Tower, TowerManager};
pub use word::{DangerLevel, Word};
