//! Ambient spawning at the start of each tick: stars and new enemies.

use skirmish_ai::dice::{one_in, roll_inclusive};
use skirmish_ai::profiles::{spawn_weight, ALL_KINDS};
use skirmish_core::constants::{STAR_SPAWN_ONE_IN, VIEW_HEIGHT, VIEW_WIDTH};
use skirmish_core::enums::EnemyKind;

use crate::world::World;
use crate::world_setup;

/// Run both spawn rolls, stars first.
pub fn run(world: &mut World) {
    spawn_star(world);
    spawn_enemy(world);
}

/// Occasionally bring a new star in from the right edge.
pub fn spawn_star(world: &mut World) {
    if one_in(&mut world.rng, STAR_SPAWN_ONE_IN) {
        world_setup::spawn_star(world, VIEW_WIDTH - 1.0);
    }
}

/// Spawn one enemy when fewer are alive than the level allows.
pub fn spawn_enemy(world: &mut World) {
    if world.level.enemies_alive >= world.level.spawn_ceiling() {
        return;
    }
    let kind = pick_kind(world);
    let y = roll_inclusive(&mut world.rng, 0, VIEW_HEIGHT as i32 - 1) as f64;
    world_setup::spawn_enemy(world, kind, y);
}

/// Weighted pick among the variants for the current level.
fn pick_kind(world: &mut World) -> EnemyKind {
    let level = world.level.number;
    let total: i32 = ALL_KINDS.iter().map(|kind| spawn_weight(*kind, level)).sum();
    let mut roll = roll_inclusive(&mut world.rng, 1, total);
    let (rest, last) = ALL_KINDS.split_at(ALL_KINDS.len() - 1);
    for &kind in rest {
        let weight = spawn_weight(kind, level);
        if roll <= weight {
            return kind;
        }
        roll -= weight;
    }
    // The remaining band belongs to the last variant.
    last[0]
}
