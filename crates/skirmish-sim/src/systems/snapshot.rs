//! Snapshot system: the status summary after a tick, and the serializable
//! image of a running level.
//!
//! A [`LevelSnapshot`] holds everything the next tick reads, including the
//! random source, so a restored level replays exactly like the live one.

use std::collections::VecDeque;

use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use skirmish_core::commands::InputAction;
use skirmish_core::error::SnapshotError;
use skirmish_core::events::SoundEffect;
use skirmish_core::state::{LevelState, StatusView};

use crate::actors::{Actor, PlayerShip};
use crate::world::World;

/// Build the status summary from the current world state.
pub fn build_status(world: &World) -> StatusView {
    let (hit_points, cabbages, torpedoes) = world
        .player()
        .map(|ship| (ship.hit_points(), ship.cabbages(), ship.torpedoes()))
        .unwrap_or_default();
    StatusView::new(
        world.lives,
        hit_points,
        world.score,
        world.level.number,
        cabbages,
        torpedoes,
    )
}

/// Serializable image of a level between ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelSnapshot {
    pub level: LevelState,
    pub score: u64,
    pub lives: u32,
    pub player: Option<PlayerShip>,
    pub actors: Vec<Actor>,
    pub rng: ChaCha8Rng,
    pub pending_input: VecDeque<InputAction>,
    pub pending_sounds: Vec<SoundEffect>,
}

impl LevelSnapshot {
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::Encode(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(|e| SnapshotError::Decode(e.to_string()))
    }
}

/// Capture the world and the pending input queue.
pub fn capture(world: &World, pending_input: &VecDeque<InputAction>) -> LevelSnapshot {
    LevelSnapshot {
        level: world.level,
        score: world.score,
        lives: world.lives,
        player: world.player.clone(),
        actors: world.actors().cloned().collect(),
        rng: world.rng.clone(),
        pending_input: pending_input.clone(),
        pending_sounds: world.sounds.clone(),
    }
}

/// Rebuild a world from a snapshot. Fails if no level was running.
pub fn restore(snapshot: LevelSnapshot) -> Result<(World, VecDeque<InputAction>), SnapshotError> {
    if snapshot.player.is_none() {
        return Err(SnapshotError::MissingPlayer);
    }
    let world = World {
        player: snapshot.player,
        actors: snapshot.actors.into_iter().map(Some).collect(),
        spawn_queue: Vec::new(),
        rng: snapshot.rng,
        level: snapshot.level,
        score: snapshot.score,
        lives: snapshot.lives,
        sounds: snapshot.pending_sounds,
    };
    Ok((world, snapshot.pending_input))
}
