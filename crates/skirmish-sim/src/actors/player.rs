//! The player's ship.
//!
//! Lives outside the population for the whole level. Each tick it applies at
//! most one input action, then either dies (hit points exhausted) or
//! regenerates a cabbage.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use skirmish_core::commands::InputAction;
use skirmish_core::constants::*;
use skirmish_core::enums::{Faction, ProjectileKind};
use skirmish_core::types::{is_offscreen, Body};

use super::Projectile;
use crate::world::World;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerShip {
    pub body: Body,
    hit_points: i32,
    cabbages: u32,
    torpedoes: u32,
}

impl Default for PlayerShip {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerShip {
    pub fn new() -> Self {
        Self {
            body: Body::new(
                DVec2::new(PLAYER_START_X, PLAYER_START_Y),
                0,
                PLAYER_SIZE,
                DEPTH_SHIPS,
            ),
            hit_points: PLAYER_MAX_HIT_POINTS,
            cabbages: CABBAGE_CAPACITY,
            torpedoes: 0,
        }
    }

    pub fn hit_points(&self) -> i32 {
        self.hit_points
    }

    pub fn cabbages(&self) -> u32 {
        self.cabbages
    }

    pub fn torpedoes(&self) -> u32 {
        self.torpedoes
    }

    pub fn is_alive(&self) -> bool {
        self.body.is_alive()
    }

    /// Apply one tick of player logic.
    pub fn update(&mut self, action: Option<InputAction>, world: &mut World) {
        if !self.body.is_alive() {
            return;
        }
        if let Some(action) = action {
            self.apply(action, world);
        }
        if self.hit_points <= 0 {
            self.body.mark_dead();
            world.lose_life();
            return;
        }
        self.cabbages = (self.cabbages + CABBAGE_REGEN).min(CABBAGE_CAPACITY);
    }

    fn apply(&mut self, action: InputAction, world: &mut World) {
        match action {
            InputAction::MoveUp => self.step(DVec2::new(0.0, PLAYER_STEP)),
            InputAction::MoveDown => self.step(DVec2::new(0.0, -PLAYER_STEP)),
            InputAction::MoveLeft => self.step(DVec2::new(-PLAYER_STEP, 0.0)),
            InputAction::MoveRight => self.step(DVec2::new(PLAYER_STEP, 0.0)),
            InputAction::FirePrimary => {
                if self.cabbages >= CABBAGE_COST {
                    self.cabbages -= CABBAGE_COST;
                    world.launch(self.shot(ProjectileKind::Cabbage));
                }
            }
            InputAction::FireSecondary => {
                if self.torpedoes >= TORPEDO_COST {
                    self.torpedoes -= TORPEDO_COST;
                    world.launch(self.shot(ProjectileKind::Torpedo));
                }
            }
        }
    }

    /// Move unless the destination is outside the viewport.
    fn step(&mut self, delta: DVec2) {
        let target = self.body.position + delta;
        if !is_offscreen(target) {
            self.body.position = target;
        }
    }

    fn shot(&self, kind: ProjectileKind) -> Projectile {
        let muzzle = self.body.position + DVec2::new(PLAYER_MUZZLE_OFFSET, 0.0);
        Projectile::new(kind, Faction::Player, muzzle)
    }

    /// Subtract `damage`. Returns true when hit points are exhausted.
    pub(crate) fn take_damage(&mut self, damage: i32) -> bool {
        self.hit_points -= damage;
        self.hit_points <= 0
    }

    /// Repair goodie: a fixed amount while badly damaged, otherwise a top-up.
    pub(crate) fn repair(&mut self) {
        if self.hit_points <= REPAIR_TOP_UP_THRESHOLD {
            self.hit_points += REPAIR_AMOUNT;
        } else {
            self.hit_points = PLAYER_MAX_HIT_POINTS;
        }
    }

    pub(crate) fn restock_torpedoes(&mut self) {
        self.torpedoes += TORPEDO_REFILL;
    }

    #[cfg(test)]
    pub(crate) fn set_loadout(&mut self, hit_points: i32, cabbages: u32, torpedoes: u32) {
        self.hit_points = hit_points;
        self.cabbages = cabbages;
        self.torpedoes = torpedoes;
    }
}
