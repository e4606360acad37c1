//! Fundamental geometric and entity types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::{OVERLAP_FACTOR, RADIUS_PER_SIZE, VIEW_HEIGHT, VIEW_WIDTH};

/// Sprite state shared by every simulated entity, plus its liveness flag.
///
/// Position is in world units with the origin at the lower-left corner of the
/// viewport; `y` grows upward. Direction is in degrees and only matters for
/// rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub position: DVec2,
    pub direction: i32,
    pub size: f64,
    pub depth: u8,
    alive: bool,
}

impl Body {
    pub fn new(position: DVec2, direction: i32, size: f64, depth: u8) -> Self {
        Self {
            position,
            direction,
            size,
            depth,
            alive: true,
        }
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Mark the body dead. There is no way back.
    pub fn mark_dead(&mut self) {
        self.alive = false;
    }

    /// Collision radius derived from the visual size.
    pub fn radius(&self) -> f64 {
        RADIUS_PER_SIZE * self.size
    }

    /// True when the position lies outside the viewport.
    pub fn is_offscreen(&self) -> bool {
        is_offscreen(self.position)
    }

    pub fn move_by(&mut self, delta: DVec2) {
        self.position += delta;
    }

    /// Rotate the facing, wrapping into `0..360`.
    pub fn turn(&mut self, degrees: i32) {
        self.direction = (self.direction + degrees).rem_euclid(360);
    }
}

/// True when `position` lies outside the viewport.
pub fn is_offscreen(position: DVec2) -> bool {
    position.x < 0.0 || position.x >= VIEW_WIDTH || position.y < 0.0 || position.y >= VIEW_HEIGHT
}

/// Circle overlap test used for every collision.
///
/// Two circles overlap when the distance between their centres is strictly
/// less than `OVERLAP_FACTOR` times the sum of their radii.
pub fn overlaps(a: DVec2, ra: f64, b: DVec2, rb: f64) -> bool {
    a.distance(b) < OVERLAP_FACTOR * (ra + rb)
}
