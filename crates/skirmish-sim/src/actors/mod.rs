//! The closed set of entity variants that live in the level population.
//!
//! Every variant owns a [`Body`] and reacts once per tick through
//! [`Behavior::update`]. Cross-entity effects go through the [`World`]
//! command surface; no variant holds a reference to another.

pub mod enemy;
pub mod explosion;
pub mod goodie;
pub mod player;
pub mod projectile;
pub mod star;

use serde::{Deserialize, Serialize};

use skirmish_core::types::Body;

use crate::world::World;

pub use enemy::Enemy;
pub use explosion::Explosion;
pub use goodie::Goodie;
pub use player::PlayerShip;
pub use projectile::Projectile;
pub use star::Star;

/// Per-tick contract shared by every population member.
pub trait Behavior {
    fn body(&self) -> &Body;

    fn body_mut(&mut self) -> &mut Body;

    /// React to one tick. Must do nothing once the body is dead.
    fn update(&mut self, world: &mut World);

    /// True for enemy ships.
    fn is_alien(&self) -> bool {
        false
    }

    fn is_alive(&self) -> bool {
        self.body().is_alive()
    }
}

/// A member of the level population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Actor {
    Star(Star),
    Enemy(Enemy),
    Projectile(Projectile),
    Goodie(Goodie),
    Explosion(Explosion),
}

impl Actor {
    fn inner(&self) -> &dyn Behavior {
        match self {
            Actor::Star(a) => a,
            Actor::Enemy(a) => a,
            Actor::Projectile(a) => a,
            Actor::Goodie(a) => a,
            Actor::Explosion(a) => a,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Behavior {
        match self {
            Actor::Star(a) => a,
            Actor::Enemy(a) => a,
            Actor::Projectile(a) => a,
            Actor::Goodie(a) => a,
            Actor::Explosion(a) => a,
        }
    }

    pub fn as_enemy(&self) -> Option<&Enemy> {
        match self {
            Actor::Enemy(enemy) => Some(enemy),
            _ => None,
        }
    }
}

impl Behavior for Actor {
    fn body(&self) -> &Body {
        self.inner().body()
    }

    fn body_mut(&mut self) -> &mut Body {
        self.inner_mut().body_mut()
    }

    fn update(&mut self, world: &mut World) {
        self.inner_mut().update(world);
    }

    fn is_alien(&self) -> bool {
        self.inner().is_alien()
    }
}

impl From<Star> for Actor {
    fn from(star: Star) -> Self {
        Actor::Star(star)
    }
}

impl From<Enemy> for Actor {
    fn from(enemy: Enemy) -> Self {
        Actor::Enemy(enemy)
    }
}

impl From<Projectile> for Actor {
    fn from(projectile: Projectile) -> Self {
        Actor::Projectile(projectile)
    }
}

impl From<Goodie> for Actor {
    fn from(goodie: Goodie) -> Self {
        Actor::Goodie(goodie)
    }
}

impl From<Explosion> for Actor {
    fn from(explosion: Explosion) -> Self {
        Actor::Explosion(explosion)
    }
}
