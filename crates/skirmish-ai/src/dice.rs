//! Uniform integer rolls with degenerate ranges clamped instead of panicking.

use rand::Rng;

/// Uniform integer in `low..=high`. An empty range yields `low` without
/// consuming randomness.
pub fn roll_inclusive<R: Rng + ?Sized>(rng: &mut R, low: i32, high: i32) -> i32 {
    if high <= low {
        return low;
    }
    rng.gen_range(low..=high)
}

/// True on a 1-in-`n` roll. `n` below 1 is treated as 1 (always true).
pub fn one_in<R: Rng + ?Sized>(rng: &mut R, n: i32) -> bool {
    roll_inclusive(rng, 1, n.max(1)) == 1
}

/// Denominator of a level-scaled 1-in-N chance: `numerator / level + offset`,
/// never below 1. Higher levels shrink it, making the event more likely.
pub fn level_odds(numerator: i32, offset: i32, level: u32) -> i32 {
    let level = level.clamp(1, i32::MAX as u32) as i32;
    (numerator / level + offset).max(1)
}
