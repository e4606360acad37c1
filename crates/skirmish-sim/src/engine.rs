//! Simulation engine: the per-tick driver of one level.
//!
//! `Simulation` owns the world and the pending input queue, runs the tick
//! algorithm in a fixed order and publishes a `StatusView` after every
//! completed tick. Completely headless; the host decides what to do with
//! `LevelCleared` and `PlayerDied`.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use skirmish_core::commands::InputAction;
use skirmish_core::constants::{STARTING_LEVEL, STARTING_LIVES};
use skirmish_core::enums::TickStatus;
use skirmish_core::error::SnapshotError;
use skirmish_core::events::SoundEffect;
use skirmish_core::state::{LevelState, StatusView};

use crate::systems;
use crate::systems::snapshot::LevelSnapshot;
use crate::world::World;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Level index the first `init` starts at.
    pub level: u32,
    /// Lives at the start of the game.
    pub lives: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            level: STARTING_LEVEL,
            lives: STARTING_LIVES,
        }
    }
}

/// The simulation engine. Owns the world and all level state.
#[derive(Debug, Clone)]
pub struct Simulation {
    world: World,
    input_queue: VecDeque<InputAction>,
    status: StatusView,
}

impl Simulation {
    /// Create a new simulation with the given config. No level is running
    /// until [`Simulation::init`] is called.
    pub fn new(config: SimConfig) -> Self {
        let world = World::new(config.seed, config.level, config.lives);
        let status = systems::snapshot::build_status(&world);
        Self {
            world,
            input_queue: VecDeque::new(),
            status,
        }
    }

    /// Start the current level: new player ship, star field, counters.
    pub fn init(&mut self) -> TickStatus {
        world_setup::setup_level(&mut self.world);
        self.input_queue.clear();
        self.status = systems::snapshot::build_status(&self.world);
        info!(
            level = self.world.level.number,
            lives = self.world.lives,
            kills_needed = self.world.level.kills_needed,
            "level started"
        );
        TickStatus::Continue
    }

    /// Advance the level by one tick.
    ///
    /// # Panics
    ///
    /// Panics if no level is running (`init` was never called, or the level
    /// was torn down).
    pub fn tick(&mut self) -> TickStatus {
        // 1-2. Ambient spawns
        systems::spawner::run(&mut self.world);

        // 3. Player ship, at most one input
        let action = if self.world.player_alive() {
            self.input_queue.pop_front()
        } else {
            None
        };
        self.world.update_player(action);
        if let Some(outcome) = self.outcome() {
            return outcome;
        }

        // 4. Population, including entities spawned earlier this tick
        let mut index = 0;
        while index < self.world.actors.len() {
            if self.world.update_actor(index) {
                if let Some(outcome) = self.outcome() {
                    return outcome;
                }
            }
            index += 1;
        }

        // 5. Purge and publish
        systems::cleanup::run(&mut self.world);
        self.status = systems::snapshot::build_status(&self.world);
        TickStatus::Continue
    }

    /// Release the player ship and the whole population.
    pub fn teardown(&mut self) {
        debug!(actors = self.world.actors.len(), "tearing down level");
        self.world.clear_level();
        self.input_queue.clear();
    }

    /// Move on to the next level index. Takes effect at the next `init`.
    pub fn advance_level(&mut self) {
        self.world.level = LevelState::for_level(self.world.level.number + 1);
    }

    /// Queue an input action. The player ship consumes one per tick.
    pub fn queue_input(&mut self, action: InputAction) {
        self.input_queue.push_back(action);
    }

    /// Queue multiple input actions.
    pub fn queue_inputs(&mut self, actions: impl IntoIterator<Item = InputAction>) {
        self.input_queue.extend(actions);
    }

    /// Status as of the last completed tick (or `init`).
    pub fn status(&self) -> StatusView {
        self.status
    }

    pub fn status_line(&self) -> String {
        self.status.to_string()
    }

    /// Take the sound events recorded since the last drain.
    pub fn drain_sounds(&mut self) -> Vec<SoundEffect> {
        std::mem::take(&mut self.world.sounds)
    }

    /// True once the last life is gone.
    pub fn is_game_over(&self) -> bool {
        self.world.lives == 0
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    #[cfg(test)]
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Capture the running level.
    pub fn snapshot(&self) -> LevelSnapshot {
        systems::snapshot::capture(&self.world, &self.input_queue)
    }

    /// Rebuild a simulation from a captured level.
    pub fn restore(snapshot: LevelSnapshot) -> Result<Self, SnapshotError> {
        let (world, input_queue) = systems::snapshot::restore(snapshot)?;
        let status = systems::snapshot::build_status(&world);
        Ok(Self {
            world,
            input_queue,
            status,
        })
    }

    /// Short-circuit checks run after the player ship and after every
    /// population update.
    fn outcome(&mut self) -> Option<TickStatus> {
        if !self.world.player_alive() {
            info!(
                level = self.world.level.number,
                lives = self.world.lives,
                score = self.world.score,
                "player died"
            );
            return Some(TickStatus::PlayerDied);
        }
        if self.world.level.is_cleared() {
            self.world.play(SoundEffect::FinishedLevel);
            info!(
                level = self.world.level.number,
                score = self.world.score,
                "level cleared"
            );
            return Some(TickStatus::LevelCleared);
        }
        None
    }
}
