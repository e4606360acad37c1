//! Enemy ships.
//!
//! Per-variant numbers come from `skirmish_ai::profiles`; the flight-plan and
//! firing decisions from `skirmish_ai::fsm`. This module only sequences them
//! against the world.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use tracing::debug;

use skirmish_ai::fsm::{self, PlanContext};
use skirmish_ai::profiles::{get_profile, hit_points_for_level, EnemyProfile};
use skirmish_core::constants::{DEPTH_ACTORS, ENEMY_MUZZLE_OFFSET, ENEMY_SIZE};
use skirmish_core::enums::{EnemyKind, Faction, FlightPlan, Heading, ImpactCause};
use skirmish_core::types::Body;

use super::{Behavior, Projectile};
use crate::world::World;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub body: Body,
    pub kind: EnemyKind,
    pub hit_points: i32,
    pub heading: Heading,
    pub speed: f64,
    pub plan: FlightPlan,
}

impl Enemy {
    /// A fresh enemy of `kind` for the given level.
    pub fn new(kind: EnemyKind, position: DVec2, level: u32) -> Self {
        let profile = get_profile(kind);
        Self {
            body: Body::new(position, 0, ENEMY_SIZE, DEPTH_ACTORS),
            kind,
            hit_points: hit_points_for_level(kind, level),
            heading: profile.initial_heading,
            speed: profile.speed,
            plan: profile.initial_plan,
        }
    }

    pub fn profile(&self) -> EnemyProfile {
        get_profile(self.kind)
    }

    /// Subtract `damage`. Returns true when hit points are exhausted.
    pub(crate) fn take_damage(&mut self, damage: i32) -> bool {
        self.hit_points -= damage;
        self.hit_points <= 0
    }

    /// Collide with the player ship. On contact the enemy is destroyed.
    fn ram(&mut self, world: &mut World) -> bool {
        let profile = self.profile();
        let (position, radius) = (self.body.position, self.body.radius());
        if !world.strike_player(position, radius, profile.ram_damage, ImpactCause::Ram) {
            return false;
        }
        self.body.mark_dead();
        world.record_destruction(self.kind, position);
        true
    }

    fn plan_course(&mut self, world: &mut World) {
        let ctx = PlanContext {
            plan: self.plan,
            heading: self.heading,
            y: self.body.y(),
        };
        let update = fsm::update_plan(&ctx, world.rng());
        self.plan = update.plan;
        self.heading = update.heading;
    }

    /// Attempt a shot; a Striker that holds its fire may break into a rush.
    fn fire(&mut self, world: &mut World) -> bool {
        let profile = self.profile();
        let in_lane = world.in_firing_lane(self.body.position);
        let level = world.level_number();

        if fsm::wants_to_fire(&profile, in_lane, level, world.rng()) {
            let muzzle = self.body.position - DVec2::new(ENEMY_MUZZLE_OFFSET, 0.0);
            world.launch(Projectile::new(profile.weapon, Faction::Enemy, muzzle));
            return true;
        }

        if let Some(order) = fsm::try_rush(&profile, self.plan, in_lane, level, world.rng()) {
            debug!(kind = ?self.kind, x = self.body.x(), y = self.body.y(), "enemy rushing");
            self.plan = order.plan;
            self.heading = order.heading;
            self.speed = order.speed;
        }
        false
    }

    fn advance(&mut self) {
        self.body.move_by(fsm::displacement(self.heading, self.speed));
        self.plan = fsm::consume_step(self.plan);
    }
}

impl Behavior for Enemy {
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
        if self.body.x() < 0.0 {
            // Escaped past the player: no reward, kill count unchanged.
            debug!(kind = ?self.kind, y = self.body.y(), "enemy escaped");
            self.body.mark_dead();
            return;
        }
        if self.ram(world) {
            return;
        }
        self.plan_course(world);
        if self.fire(world) {
            return;
        }
        self.advance();
        self.ram(world);
    }

    fn is_alien(&self) -> bool {
        true
    }
}
