//! Background star: drifts left and retires at the left edge.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use skirmish_core::constants::{DEPTH_STARS, STAR_SPEED};
use skirmish_core::types::Body;

use super::Behavior;
use crate::world::World;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub body: Body,
}

impl Star {
    pub fn new(position: DVec2, size: f64) -> Self {
        Self {
            body: Body::new(position, 0, size, DEPTH_STARS),
        }
    }
}

impl Behavior for Star {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn update(&mut self, _world: &mut World) {
        if !self.body.is_alive() {
            return;
        }
        if self.body.x() <= 0.0 {
            self.body.mark_dead();
            return;
        }
        self.body.move_by(DVec2::new(-STAR_SPEED, 0.0));
    }
}
