//! Collectible goodies dropped by destroyed enemies.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use skirmish_core::constants::{DEPTH_ACTORS, GOODIE_DRIFT, GOODIE_SIZE};
use skirmish_core::enums::{GoodieKind, ImpactCause};
use skirmish_core::types::Body;

use super::Behavior;
use crate::world::World;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goodie {
    pub body: Body,
    pub kind: GoodieKind,
}

impl Goodie {
    pub fn new(kind: GoodieKind, position: DVec2) -> Self {
        Self {
            body: Body::new(position, 0, GOODIE_SIZE, DEPTH_ACTORS),
            kind,
        }
    }

    /// Hand the reward over if the player ship is touching this goodie.
    /// A goodie that has drifted out of the viewport retires instead.
    fn try_collect(&mut self, world: &mut World) -> bool {
        if self.body.is_offscreen() {
            self.body.mark_dead();
            return false;
        }
        if !world.strike_player(self.body.position, self.body.radius(), 0, ImpactCause::Pickup) {
            return false;
        }
        self.body.mark_dead();
        world.collect(self.kind);
        true
    }
}

impl Behavior for Goodie {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn update(&mut self, world: &mut World) {
        if !self.body.is_alive() {
            return;
        }
        if self.try_collect(world) || !self.body.is_alive() {
            return;
        }
        self.body.move_by(DVec2::new(-GOODIE_DRIFT, -GOODIE_DRIFT));
        self.try_collect(world);
    }
}
