//! Simulation constants and tuning parameters.

/// Host tick rate (Hz).
pub const TICK_RATE: u32 = 20;

// --- Viewport ---

/// Viewport width in world units.
pub const VIEW_WIDTH: f64 = 256.0;

/// Viewport height in world units.
pub const VIEW_HEIGHT: f64 = 256.0;

/// Collision radius per unit of visual size.
pub const RADIUS_PER_SIZE: f64 = 8.0;

/// Two bodies overlap when their distance is below this fraction of the radius sum.
pub const OVERLAP_FACTOR: f64 = 0.75;

// --- Player ship ---

pub const PLAYER_START_X: f64 = 0.0;
pub const PLAYER_START_Y: f64 = 128.0;
pub const PLAYER_SIZE: f64 = 1.0;
pub const PLAYER_MAX_HIT_POINTS: i32 = 50;

/// Distance covered by one movement input.
pub const PLAYER_STEP: f64 = 6.0;

/// Cabbage (primary) ammo cap and starting stock.
pub const CABBAGE_CAPACITY: u32 = 30;

/// Cabbages debited per primary shot.
pub const CABBAGE_COST: u32 = 5;

/// Cabbages regenerated per tick while alive.
pub const CABBAGE_REGEN: u32 = 1;

/// Torpedoes debited per secondary shot.
pub const TORPEDO_COST: u32 = 1;

/// Horizontal offset of the player's muzzle.
pub const PLAYER_MUZZLE_OFFSET: f64 = 12.0;

// --- Projectiles ---

pub const PROJECTILE_SIZE: f64 = 0.5;
pub const CABBAGE_SPEED: f64 = 8.0;
pub const CABBAGE_DAMAGE: i32 = 2;
pub const TURRET_SHOT_SPEED: f64 = 6.0;
pub const TURRET_SHOT_DAMAGE: i32 = 2;

/// Facing change per tick for spinning projectiles (degrees).
pub const PROJECTILE_SPIN: i32 = 20;

/// Torpedoes fly at cabbage speed; they differ in damage and sprite only.
pub const TORPEDO_SPEED: f64 = 8.0;
pub const TORPEDO_DAMAGE: i32 = 8;

// --- Enemies ---

pub const ENEMY_SIZE: f64 = 1.5;

/// Horizontal offset of an enemy's muzzle (fires leftward).
pub const ENEMY_MUZZLE_OFFSET: f64 = 14.0;

/// Half height of the band around the player's lane in which enemies may fire.
pub const FIRING_LANE_HALF_HEIGHT: f64 = 4.0;

/// Hit point growth per level above the first.
pub const ENEMY_HIT_POINT_GROWTH: f64 = 0.1;

/// Inclusive bounds of a freshly armed flight plan (ticks).
pub const FLIGHT_PLAN_MIN: u32 = 1;
pub const FLIGHT_PLAN_MAX: u32 = 32;

/// Speed of a Striker once it starts its rush.
pub const RUSH_SPEED: f64 = 5.0;

/// Countdown armed by a rush; long enough to cross the whole viewport.
pub const RUSH_PLAN_LENGTH: u32 = VIEW_WIDTH as u32;

// --- Goodies ---

pub const GOODIE_SIZE: f64 = 0.5;

/// Per-axis drift toward the lower left each tick.
pub const GOODIE_DRIFT: f64 = 0.75;

/// Score bonus for collecting any goodie.
pub const GOODIE_SCORE: u64 = 100;

/// Hit points restored by a repair goodie.
pub const REPAIR_AMOUNT: i32 = 10;

/// Above this hit point value a repair tops the ship up to full instead.
pub const REPAIR_TOP_UP_THRESHOLD: i32 = 40;

/// Torpedoes granted by a torpedo goodie.
pub const TORPEDO_REFILL: u32 = 5;

// --- Explosions ---

pub const EXPLOSION_SIZE: f64 = 1.0;
pub const EXPLOSION_TICKS: u32 = 4;
pub const EXPLOSION_GROWTH: f64 = 1.5;

// --- Stars ---

/// Stars scattered across the viewport at level start.
pub const INITIAL_STAR_COUNT: usize = 30;

/// One star enters from the right edge on a 1-in-N roll each tick.
pub const STAR_SPAWN_ONE_IN: i32 = 15;

/// Star size bounds, in hundredths.
pub const STAR_SIZE_MIN_PCT: i32 = 5;
pub const STAR_SIZE_MAX_PCT: i32 = 50;

pub const STAR_SPEED: f64 = 1.0;

// --- Level ---

pub const STARTING_LIVES: u32 = 3;
pub const STARTING_LEVEL: u32 = 1;

/// Kills needed to clear a level: `KILLS_BASE + KILLS_PER_LEVEL * level`.
pub const KILLS_BASE: u32 = 6;
pub const KILLS_PER_LEVEL: u32 = 4;

/// Concurrent enemy cap: `trunc(ENEMY_CAP_BASE + ENEMY_CAP_PER_LEVEL * level)`.
pub const ENEMY_CAP_BASE: f64 = 4.0;
pub const ENEMY_CAP_PER_LEVEL: f64 = 0.5;

// --- Depth layers (front to back) ---

pub const DEPTH_SHIPS: u8 = 0;
pub const DEPTH_ACTORS: u8 = 1;
pub const DEPTH_STARS: u8 = 3;
