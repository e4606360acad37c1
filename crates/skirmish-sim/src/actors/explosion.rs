//! Short-lived explosion that grows for a few ticks and then vanishes.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use skirmish_core::constants::{DEPTH_SHIPS, EXPLOSION_GROWTH, EXPLOSION_SIZE, EXPLOSION_TICKS};
use skirmish_core::types::Body;

use super::Behavior;
use crate::world::World;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explosion {
    pub body: Body,
    /// Growth steps left before the explosion retires.
    pub ticks_left: u32,
}

impl Explosion {
    pub fn new(position: DVec2) -> Self {
        Self {
            body: Body::new(position, 0, EXPLOSION_SIZE, DEPTH_SHIPS),
            ticks_left: EXPLOSION_TICKS,
        }
    }
}

impl Behavior for Explosion {
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
        if self.ticks_left == 0 {
            self.body.mark_dead();
            return;
        }
        self.body.size *= EXPLOSION_GROWTH;
        self.ticks_left -= 1;
    }
}
