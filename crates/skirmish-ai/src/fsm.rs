//! Enemy flight-plan finite state machine.
//!
//! Pure functions that compute heading changes, rush transitions and firing
//! decisions for an enemy from its plan state and situation. No world
//! dependency; operates on plain data and an injected random source.

use glam::DVec2;
use rand::Rng;

use skirmish_core::constants::*;
use skirmish_core::enums::{FlightPlan, Heading};

use crate::dice::{level_odds, one_in, roll_inclusive};
use crate::profiles::{EnemyProfile, LevelOdds};

/// Input to the plan update for a single enemy.
pub struct PlanContext {
    pub plan: FlightPlan,
    pub heading: Heading,
    /// Current vertical position.
    pub y: f64,
}

/// Output of the plan update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanUpdate {
    pub plan: FlightPlan,
    pub heading: Heading,
    pub changed: bool,
}

/// Transition into the rush state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RushOrder {
    pub plan: FlightPlan,
    pub heading: Heading,
    pub speed: f64,
}

/// Evaluate the plan for one enemy. Returns the updated plan and heading.
pub fn update_plan<R: Rng + ?Sized>(ctx: &PlanContext, rng: &mut R) -> PlanUpdate {
    let no_change = PlanUpdate {
        plan: ctx.plan,
        heading: ctx.heading,
        changed: false,
    };

    match ctx.plan {
        // Committed; nothing overrides a rush.
        FlightPlan::Rushing { .. } => no_change,
        FlightPlan::EdgeBounce => match edge_heading(ctx.y) {
            Some(heading) => PlanUpdate {
                plan: ctx.plan,
                heading,
                changed: true,
            },
            None => no_change,
        },
        FlightPlan::Following { remaining } => {
            let edge = edge_heading(ctx.y);
            if remaining > 0 && edge.is_none() {
                return no_change;
            }
            let heading = match edge {
                Some(heading) => heading,
                None => random_heading(rng),
            };
            let remaining =
                roll_inclusive(rng, FLIGHT_PLAN_MIN as i32, FLIGHT_PLAN_MAX as i32) as u32;
            PlanUpdate {
                plan: FlightPlan::Following { remaining },
                heading,
                changed: true,
            }
        }
    }
}

/// Heading forced by touching the top or bottom edge, if any.
pub fn edge_heading(y: f64) -> Option<Heading> {
    if y >= VIEW_HEIGHT - 1.0 {
        Some(Heading::DownLeft)
    } else if y <= 0.0 {
        Some(Heading::UpLeft)
    } else {
        None
    }
}

/// Uniform pick among the three headings.
pub fn random_heading<R: Rng + ?Sized>(rng: &mut R) -> Heading {
    match roll_inclusive(rng, 1, 3) {
        1 => Heading::Left,
        2 => Heading::UpLeft,
        _ => Heading::DownLeft,
    }
}

/// Plan state after one movement step has been taken under it.
pub fn consume_step(plan: FlightPlan) -> FlightPlan {
    match plan {
        FlightPlan::Following { remaining } => FlightPlan::Following {
            remaining: remaining.saturating_sub(1),
        },
        FlightPlan::Rushing { remaining } => FlightPlan::Rushing {
            remaining: remaining.saturating_sub(1),
        },
        FlightPlan::EdgeBounce => FlightPlan::EdgeBounce,
    }
}

/// Position change for one step at `speed` along `heading`.
pub fn displacement(heading: Heading, speed: f64) -> DVec2 {
    match heading {
        Heading::Left => DVec2::new(-speed, 0.0),
        Heading::UpLeft => DVec2::new(-speed, speed),
        Heading::DownLeft => DVec2::new(-speed, -speed),
    }
}

/// True when `enemy` sits ahead of the player and within the vertical band
/// around the player's lane.
pub fn in_firing_lane(enemy: DVec2, player: DVec2) -> bool {
    player.x < enemy.x && (player.y - enemy.y).abs() <= FIRING_LANE_HALF_HEIGHT
}

/// Roll whether an enemy in the firing lane takes a shot this tick.
pub fn wants_to_fire<R: Rng + ?Sized>(
    profile: &EnemyProfile,
    in_lane: bool,
    level: u32,
    rng: &mut R,
) -> bool {
    in_lane && roll_odds(profile.fire_odds, level, rng)
}

/// Roll whether a plan-following enemy that can rush starts one now.
pub fn try_rush<R: Rng + ?Sized>(
    profile: &EnemyProfile,
    plan: FlightPlan,
    in_lane: bool,
    level: u32,
    rng: &mut R,
) -> Option<RushOrder> {
    let odds = profile.rush_odds?;
    if !in_lane || !matches!(plan, FlightPlan::Following { .. }) {
        return None;
    }
    roll_odds(odds, level, rng).then_some(RushOrder {
        plan: FlightPlan::Rushing {
            remaining: RUSH_PLAN_LENGTH,
        },
        heading: Heading::Left,
        speed: RUSH_SPEED,
    })
}

fn roll_odds<R: Rng + ?Sized>(odds: LevelOdds, level: u32, rng: &mut R) -> bool {
    one_in(rng, level_odds(odds.numerator, odds.offset, level))
}
