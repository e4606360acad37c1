//! Variant-specific behavioral profiles.
//!
//! Consolidates per-variant parameters for the flight-plan FSM, firing,
//! ramming and drop policies.

use skirmish_core::constants::ENEMY_HIT_POINT_GROWTH;
use skirmish_core::enums::{EnemyKind, FlightPlan, GoodieKind, Heading, ProjectileKind};

/// Level-scaled 1-in-N odds: `numerator / level + offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelOdds {
    pub numerator: i32,
    pub offset: i32,
}

/// What an enemy may leave behind when shot down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTable {
    /// 1-in-`one_in` chance, then a fair pick among `kinds`.
    OneOf {
        one_in: i32,
        kinds: &'static [GoodieKind],
    },
}

/// Behavioral profile for an enemy variant.
#[derive(Debug, Clone, Copy)]
pub struct EnemyProfile {
    /// Hit points at level 1.
    pub base_hit_points: f64,
    pub speed: f64,
    pub initial_heading: Heading,
    pub initial_plan: FlightPlan,
    /// Damage dealt to the player when ramming.
    pub ram_damage: i32,
    /// Score for destroying (or ramming) this enemy.
    pub score: u64,
    pub weapon: ProjectileKind,
    pub fire_odds: LevelOdds,
    /// Odds of breaking into a rush, for variants that can.
    pub rush_odds: Option<LevelOdds>,
    pub drops: DropTable,
}

const TURRET_ODDS: LevelOdds = LevelOdds {
    numerator: 20,
    offset: 5,
};

const LIGHT_DROPS: DropTable = DropTable::OneOf {
    one_in: 3,
    kinds: &[GoodieKind::Repair, GoodieKind::TorpedoRefill],
};

/// Get the behavioral profile for a given variant.
pub fn get_profile(kind: EnemyKind) -> EnemyProfile {
    match kind {
        EnemyKind::Skirmisher => EnemyProfile {
            base_hit_points: 5.0,
            speed: 2.0,
            initial_heading: Heading::Left,
            initial_plan: FlightPlan::Following { remaining: 0 },
            ram_damage: 5,
            score: 250,
            weapon: ProjectileKind::TurretShot,
            fire_odds: TURRET_ODDS,
            rush_odds: None,
            drops: LIGHT_DROPS,
        },
        EnemyKind::Striker => EnemyProfile {
            rush_odds: Some(TURRET_ODDS),
            ..get_profile(EnemyKind::Skirmisher)
        },
        EnemyKind::Gunship => EnemyProfile {
            base_hit_points: 10.0,
            speed: 1.75,
            initial_heading: Heading::DownLeft,
            initial_plan: FlightPlan::EdgeBounce,
            ram_damage: 15,
            score: 1000,
            weapon: ProjectileKind::Torpedo,
            fire_odds: LevelOdds {
                numerator: 15,
                offset: 10,
            },
            rush_odds: None,
            drops: DropTable::OneOf {
                one_in: 6,
                kinds: &[GoodieKind::ExtraLife],
            },
        },
    }
}

/// Hit points for a freshly spawned enemy on the given level.
pub fn hit_points_for_level(kind: EnemyKind, level: u32) -> i32 {
    let level = level.max(1);
    let scale = 1.0 + (level - 1) as f64 * ENEMY_HIT_POINT_GROWTH;
    (get_profile(kind).base_hit_points * scale) as i32
}

/// Spawn weight of a variant on the given level. Tougher variants gain
/// weight as the level rises.
pub fn spawn_weight(kind: EnemyKind, level: u32) -> i32 {
    let level = level.max(1) as i32;
    match kind {
        EnemyKind::Skirmisher => 60,
        EnemyKind::Striker => 20 + 5 * level,
        EnemyKind::Gunship => 5 + 10 * level,
    }
}

/// Every variant, in spawn-table order.
pub const ALL_KINDS: [EnemyKind; 3] = [EnemyKind::Skirmisher, EnemyKind::Striker, EnemyKind::Gunship];
