//! Cleanup system: compacts the population once every entity has updated.

use tracing::trace;

use crate::actors::{Actor, Behavior};
use crate::world::World;

/// Remove dead entities, keeping the survivors in order. Every purged enemy
/// frees a slot under the level's concurrency cap.
pub fn run(world: &mut World) {
    let before = world.actors.len();
    let mut purged_enemies = 0;
    world.actors.retain(|slot| match slot {
        Some(actor) if actor.is_alive() => true,
        Some(Actor::Enemy(_)) => {
            purged_enemies += 1;
            false
        }
        _ => false,
    });
    world.level.enemies_alive = world.level.enemies_alive.saturating_sub(purged_enemies);

    let removed = before - world.actors.len();
    if removed > 0 {
        trace!(removed, purged_enemies, "purged dead entities");
    }
}
