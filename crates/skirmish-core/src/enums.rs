//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Weak flight-plan follower that fires turret shots.
    Skirmisher,
    /// Flight-plan follower that can break into a rush toward the player's side.
    Striker,
    /// Heavy gunship; bounces between the top and bottom edges and fires torpedoes.
    Gunship,
}

/// Projectile variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileKind {
    /// Player primary shot.
    Cabbage,
    /// Enemy turret shot.
    TurretShot,
    /// Heavy shot fired by either faction.
    Torpedo,
}

/// Goodie variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoodieKind {
    ExtraLife,
    Repair,
    TorpedoRefill,
}

/// Side a projectile was fired by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Faction {
    #[default]
    Player,
    Enemy,
}

/// Travel heading of an enemy. All headings move leftward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Heading {
    #[default]
    Left,
    UpLeft,
    DownLeft,
}

impl Heading {
    /// Sprite direction in degrees.
    pub fn degrees(self) -> i32 {
        match self {
            Heading::Left => 180,
            Heading::UpLeft => 135,
            Heading::DownLeft => 225,
        }
    }
}

/// Enemy flight plan state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightPlan {
    /// Heading is re-rolled when the countdown expires or an edge is touched.
    Following { remaining: u32 },
    /// Committed straight-left run; never reverts to `Following`.
    Rushing { remaining: u32 },
    /// No countdown; heading only reverses at the top and bottom edges.
    EdgeBounce,
}

/// What caused a collision with the player ship. Selects the feedback sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactCause {
    Projectile,
    Ram,
    Pickup,
}

/// Outcome of a tick, reported to the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickStatus {
    #[default]
    Continue,
    LevelCleared,
    PlayerDied,
}
