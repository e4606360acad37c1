//! Entity factories for setting up a level.

use glam::DVec2;

use skirmish_ai::dice::roll_inclusive;
use skirmish_core::constants::*;
use skirmish_core::enums::EnemyKind;
use skirmish_core::state::LevelState;

use crate::actors::{Enemy, PlayerShip, Star};
use crate::world::World;

/// Reset the level: a fresh player ship, a scattered star field, and
/// counters seeded from the current level index. Score and lives carry over.
pub fn setup_level(world: &mut World) {
    world.clear_level();
    world.level = LevelState::for_level(world.level.number);
    world.player = Some(PlayerShip::new());
    for _ in 0..INITIAL_STAR_COUNT {
        let x = roll_inclusive(&mut world.rng, 0, VIEW_WIDTH as i32 - 1) as f64;
        spawn_star(world, x);
    }
}

/// Spawn a star at column `x` with a random row and size.
pub fn spawn_star(world: &mut World, x: f64) {
    let y = roll_inclusive(&mut world.rng, 0, VIEW_HEIGHT as i32 - 1) as f64;
    let size = roll_inclusive(&mut world.rng, STAR_SIZE_MIN_PCT, STAR_SIZE_MAX_PCT) as f64 / 100.0;
    world.actors.push(Some(Star::new(DVec2::new(x, y), size).into()));
}

/// Spawn an enemy of `kind` at the right edge on row `y`.
pub fn spawn_enemy(world: &mut World, kind: EnemyKind, y: f64) {
    let position = DVec2::new(VIEW_WIDTH - 1.0, y);
    let enemy = Enemy::new(kind, position, world.level.number);
    world.actors.push(Some(enemy.into()));
    world.level.enemies_alive += 1;
}
