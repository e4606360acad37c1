//! The level state and the command surface entities use to affect each other.
//!
//! Entities never reach into one another. Hits, rewards, spawns and sounds
//! all go through a `World` method, so the ordering of those effects inside
//! a tick is decided here.

use glam::DVec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use skirmish_ai::dice::{one_in, roll_inclusive};
use skirmish_ai::fsm;
use skirmish_ai::profiles::{get_profile, DropTable};
use skirmish_core::commands::InputAction;
use skirmish_core::constants::GOODIE_SCORE;
use skirmish_core::enums::{EnemyKind, Faction, GoodieKind, ImpactCause, ProjectileKind};
use skirmish_core::events::SoundEffect;
use skirmish_core::state::LevelState;
use skirmish_core::types::overlaps;

use crate::actors::{Actor, Behavior, Explosion, Goodie, PlayerShip, Projectile};

/// Everything a running level owns.
///
/// The population is ordered by insertion. During a tick the slot of the
/// entity being updated is empty, which is why slots are `Option`s; between
/// ticks every slot is filled.
#[derive(Debug, Clone)]
pub struct World {
    pub(crate) player: Option<PlayerShip>,
    pub(crate) actors: Vec<Option<Actor>>,
    pub(crate) spawn_queue: Vec<Actor>,
    pub(crate) rng: ChaCha8Rng,
    pub(crate) level: LevelState,
    pub(crate) score: u64,
    pub(crate) lives: u32,
    pub(crate) sounds: Vec<SoundEffect>,
}

impl World {
    pub fn new(seed: u64, level: u32, lives: u32) -> Self {
        Self {
            player: None,
            actors: Vec::new(),
            spawn_queue: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            level: LevelState::for_level(level),
            score: 0,
            lives,
            sounds: Vec::new(),
        }
    }

    // --- Queries ---

    pub fn player(&self) -> Option<&PlayerShip> {
        self.player.as_ref()
    }

    pub fn player_alive(&self) -> bool {
        self.player.as_ref().is_some_and(PlayerShip::is_alive)
    }

    /// Live and dead members of the population, in insertion order.
    pub fn actors(&self) -> impl Iterator<Item = &Actor> {
        self.actors.iter().flatten()
    }

    pub fn level(&self) -> &LevelState {
        &self.level
    }

    pub fn level_number(&self) -> u32 {
        self.level.number
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn rng(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    /// True when `position` is ahead of the player ship and inside its lane.
    pub fn in_firing_lane(&self, position: DVec2) -> bool {
        self.player
            .as_ref()
            .is_some_and(|ship| fsm::in_firing_lane(position, ship.body.position))
    }

    // --- Collisions ---

    /// Apply `damage` to the player ship if a circle at `position` touches it.
    ///
    /// Exhausting the ship's hit points kills it and costs a life. Otherwise
    /// the cause decides the feedback sound. Returns true on contact.
    pub fn strike_player(
        &mut self,
        position: DVec2,
        radius: f64,
        damage: i32,
        cause: ImpactCause,
    ) -> bool {
        let Some(ship) = self.player.as_mut().filter(|ship| ship.is_alive()) else {
            return false;
        };
        if !overlaps(position, radius, ship.body.position, ship.body.radius()) {
            return false;
        }
        if ship.take_damage(damage) {
            ship.body.mark_dead();
            self.lose_life();
            debug!(?cause, lives = self.lives, "player ship destroyed");
        } else {
            self.play(match cause {
                ImpactCause::Projectile => SoundEffect::Blast,
                ImpactCause::Ram => SoundEffect::Death,
                ImpactCause::Pickup => SoundEffect::Goodie,
            });
        }
        true
    }

    /// Apply `damage` to the first live enemy, in population order, that a
    /// circle at `position` touches. Returns true on contact.
    pub fn strike_enemy(&mut self, position: DVec2, radius: f64, damage: i32) -> bool {
        let target = self.actors.iter_mut().flatten().find_map(|actor| match actor {
            Actor::Enemy(enemy)
                if enemy.is_alive()
                    && overlaps(position, radius, enemy.body.position, enemy.body.radius()) =>
            {
                Some(enemy)
            }
            _ => None,
        });
        let Some(enemy) = target else {
            return false;
        };

        if enemy.take_damage(damage) {
            enemy.body.mark_dead();
            let (kind, at) = (enemy.kind, enemy.body.position);
            self.play(SoundEffect::Death);
            self.record_destruction(kind, at);
            self.roll_drop(kind, at);
        } else {
            self.play(SoundEffect::Blast);
        }
        true
    }

    // --- Rewards and bookkeeping ---

    /// Credit the destruction of an enemy: explosion, score and one fewer
    /// kill needed to clear the level.
    pub fn record_destruction(&mut self, kind: EnemyKind, at: DVec2) {
        self.level.kills_needed = self.level.kills_needed.saturating_sub(1);
        self.award(get_profile(kind).score);
        self.spawn(Explosion::new(at));
        debug!(
            ?kind,
            score = self.score,
            kills_needed = self.level.kills_needed,
            "enemy destroyed"
        );
    }

    /// Roll the variant's drop table once and spawn the goodie it yields.
    fn roll_drop(&mut self, kind: EnemyKind, at: DVec2) {
        let DropTable::OneOf { one_in: odds, kinds } = get_profile(kind).drops;
        if kinds.is_empty() || !one_in(&mut self.rng, odds) {
            return;
        }
        let pick = roll_inclusive(&mut self.rng, 1, kinds.len() as i32) as usize;
        self.spawn(Goodie::new(kinds[pick - 1], at));
    }

    /// Grant a collected goodie's reward.
    pub fn collect(&mut self, kind: GoodieKind) {
        self.award(GOODIE_SCORE);
        match kind {
            GoodieKind::ExtraLife => self.lives += 1,
            GoodieKind::Repair => {
                if let Some(ship) = self.player.as_mut() {
                    ship.repair();
                }
            }
            GoodieKind::TorpedoRefill => {
                if let Some(ship) = self.player.as_mut() {
                    ship.restock_torpedoes();
                }
            }
        }
    }

    pub fn award(&mut self, points: u64) {
        self.score += points;
    }

    pub fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }

    // --- Spawning and sound ---

    /// Queue an entity. It joins the population after the current update.
    pub fn spawn(&mut self, actor: impl Into<Actor>) {
        self.spawn_queue.push(actor.into());
    }

    /// Spawn a projectile with its firing sound.
    pub fn launch(&mut self, projectile: Projectile) {
        self.play(match (projectile.kind, projectile.faction) {
            (ProjectileKind::Torpedo, _) => SoundEffect::TorpedoLaunch,
            (_, Faction::Player) => SoundEffect::PlayerShoot,
            (_, Faction::Enemy) => SoundEffect::AlienShoot,
        });
        self.spawn(projectile);
    }

    pub fn play(&mut self, sound: SoundEffect) {
        self.sounds.push(sound);
    }

    // --- Driver hooks ---

    /// Append queued spawns to the end of the population.
    pub(crate) fn flush_spawns(&mut self) {
        self.actors.extend(self.spawn_queue.drain(..).map(Some));
    }

    /// Update the player ship with at most one input action.
    pub(crate) fn update_player(&mut self, action: Option<InputAction>) {
        let mut ship = self
            .player
            .take()
            .expect("player ship exists while a level is running");
        ship.update(action, self);
        self.player = Some(ship);
        self.flush_spawns();
    }

    /// Update the population member at `index` if it is alive. Returns
    /// whether an update ran.
    pub(crate) fn update_actor(&mut self, index: usize) -> bool {
        let Some(mut actor) = self.actors.get_mut(index).and_then(Option::take) else {
            return false;
        };
        let alive = actor.is_alive();
        if alive {
            actor.update(self);
        }
        self.actors[index] = Some(actor);
        self.flush_spawns();
        alive
    }

    /// Drop the level population and the player ship.
    pub(crate) fn clear_level(&mut self) {
        self.player = None;
        self.actors.clear();
        self.spawn_queue.clear();
        self.level.enemies_alive = 0;
    }
}
