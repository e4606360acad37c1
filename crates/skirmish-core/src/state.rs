//! Level counters and the status summary published to the host after each tick.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Per-level bookkeeping, reseeded every time a level starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelState {
    /// Level index, starting at 1.
    pub number: u32,
    /// Enemy destructions still required to clear the level.
    pub kills_needed: u32,
    /// Maximum number of enemies alive at once.
    pub enemy_cap: u32,
    /// Enemies currently in the population.
    pub enemies_alive: u32,
}

impl LevelState {
    /// Fresh counters for the given level. Level 0 is treated as level 1.
    pub fn for_level(number: u32) -> Self {
        let number = number.max(1);
        Self {
            number,
            kills_needed: KILLS_BASE + KILLS_PER_LEVEL * number,
            enemy_cap: (ENEMY_CAP_BASE + ENEMY_CAP_PER_LEVEL * number as f64) as u32,
            enemies_alive: 0,
        }
    }

    /// The lesser of the outstanding kills and the concurrency cap.
    pub fn spawn_ceiling(&self) -> u32 {
        self.kills_needed.min(self.enemy_cap)
    }

    pub fn is_cleared(&self) -> bool {
        self.kills_needed == 0
    }
}

impl Default for LevelState {
    fn default() -> Self {
        Self::for_level(STARTING_LEVEL)
    }
}

/// Status summary for the host's text line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusView {
    pub lives: u32,
    /// Hit points as a percentage of the maximum, rounded down.
    pub health_pct: i32,
    pub score: u64,
    pub level: u32,
    /// Cabbages as a percentage of capacity, rounded down.
    pub cabbage_pct: u32,
    pub torpedoes: u32,
}

impl StatusView {
    pub fn new(
        lives: u32,
        hit_points: i32,
        score: u64,
        level: u32,
        cabbages: u32,
        torpedoes: u32,
    ) -> Self {
        Self {
            lives,
            health_pct: (hit_points * 100).div_euclid(PLAYER_MAX_HIT_POINTS),
            score,
            level,
            cabbage_pct: cabbages * 100 / CABBAGE_CAPACITY,
            torpedoes,
        }
    }
}

/// Positional layout kept identical to the legacy status bar.
impl fmt::Display for StatusView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lives: {}  Health: {}%  Score: {}  Level: {}  Cabbages: {}%  Torpedoes: {}",
            self.lives, self.health_pct, self.score, self.level, self.cabbage_pct, self.torpedoes
        )
    }
}
