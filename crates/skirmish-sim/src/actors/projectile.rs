//! Projectiles fired by the player ship and by enemies.
//!
//! A projectile checks for a hit before and after moving and retires on the
//! first one. The firing side is recorded at spawn time and decides which
//! targets it can hit.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use skirmish_core::constants::*;
use skirmish_core::enums::{Faction, ImpactCause, ProjectileKind};
use skirmish_core::types::Body;

use super::Behavior;
use crate::world::World;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub body: Body,
    pub kind: ProjectileKind,
    pub faction: Faction,
}

impl Projectile {
    pub fn new(kind: ProjectileKind, faction: Faction, position: DVec2) -> Self {
        let direction = match faction {
            Faction::Enemy if kind == ProjectileKind::Torpedo => 180,
            _ => 0,
        };
        Self {
            body: Body::new(position, direction, PROJECTILE_SIZE, DEPTH_ACTORS),
            kind,
            faction,
        }
    }

    /// Damage dealt to whatever this projectile hits.
    pub fn damage(&self) -> i32 {
        match self.kind {
            ProjectileKind::Cabbage => CABBAGE_DAMAGE,
            ProjectileKind::TurretShot => TURRET_SHOT_DAMAGE,
            ProjectileKind::Torpedo => TORPEDO_DAMAGE,
        }
    }

    fn velocity(&self) -> DVec2 {
        let dx = match (self.kind, self.faction) {
            (ProjectileKind::Cabbage, _) => CABBAGE_SPEED,
            (ProjectileKind::TurretShot, _) => -TURRET_SHOT_SPEED,
            (ProjectileKind::Torpedo, Faction::Player) => TORPEDO_SPEED,
            (ProjectileKind::Torpedo, Faction::Enemy) => -TORPEDO_SPEED,
        };
        DVec2::new(dx, 0.0)
    }

    fn spins(&self) -> bool {
        self.kind != ProjectileKind::Torpedo
    }

    /// Try to hit the opposing side at the current position.
    fn strike(&self, world: &mut World) -> bool {
        let (position, radius, damage) = (self.body.position, self.body.radius(), self.damage());
        match self.faction {
            Faction::Player => world.strike_enemy(position, radius, damage),
            Faction::Enemy => world.strike_player(position, radius, damage, ImpactCause::Projectile),
        }
    }
}

impl Behavior for Projectile {
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
        if self.body.is_offscreen() {
            self.body.mark_dead();
            return;
        }
        if self.strike(world) {
            self.body.mark_dead();
            return;
        }
        self.body.move_by(self.velocity());
        if self.spins() {
            self.body.turn(PROJECTILE_SPIN);
        }
        if self.strike(world) {
            self.body.mark_dead();
        }
    }
}
