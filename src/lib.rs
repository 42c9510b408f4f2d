//! Drops - an arcade survival game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entity pools, collisions, game session)
//!
//! The library owns nothing but the simulation: the host loop captures an
//! input snapshot each tick, hands it to [`sim::GameSession::update`], and
//! draws whatever [`sim::GameSession::render_view`] reports afterwards.
//! Rendering, audio and input polling live outside this crate.

pub mod sim;

pub use sim::{GameSession, RenderView, SessionPhase, SimulationState, TickInput};

/// Game configuration constants
pub mod consts {
    /// Target simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;

    /// Playfield width (pixels)
    pub const FIELD_WIDTH: i32 = 480;
    /// Playfield height (pixels)
    pub const FIELD_HEIGHT: i32 = 272;

    /// Drop pool capacity (fixed, no allocation after startup)
    pub const DROP_SLOTS: usize = 50;
    /// Enemy pool capacity
    pub const ENEMY_SLOTS: usize = 50;

    /// Player body radius
    pub const PLAYER_RADIUS: i32 = 10;
    /// Lives at the start of a run
    pub const PLAYER_START_LIVES: u32 = 5;
    /// Base movement speed (pixels per tick per axis)
    pub const BASE_SPEED: i32 = 2;
    /// Movement speed while turbo is engaged
    pub const TURBO_SPEED: i32 = 4;

    /// Enemy body radius
    pub const ENEMY_RADIUS: i32 = 2;
    /// Minimum time between enemy spawns
    pub const ENEMY_SPAWN_INTERVAL_MS: u64 = 500;
    /// Corner inset for freshly spawned enemies
    pub const ENEMY_SPAWN_INSET: i32 = 10;

    /// Radius at which a spawning drop starts and a dying one despawns
    pub const DROP_MIN_RADIUS: i32 = 1;
    /// A new drop grows toward `DROP_BASE_GROWN + random(0, DROP_GROWN_SPREAD - level)`
    pub const DROP_BASE_GROWN: i32 = 5;
    /// Level-dependent spread of grown drop radii
    pub const DROP_GROWN_SPREAD: i32 = 30;

    /// Force-field radius extension cap
    pub const FORCE_FIELD_MAX: i32 = 20;

    /// Bonus effects last this long after pickup
    pub const BONUS_DURATION_MS: u64 = 3000;
    /// Bomb blast radius grows by 1 pixel per this many milliseconds
    pub const BOMB_BLAST_DIVISOR: u64 = 10;

    /// Energy required before berzerk can be triggered
    pub const BERZERK_ENERGY_THRESHOLD: i32 = 100;
    /// Berzerk deactivates once this much clock time has elapsed
    pub const BERZERK_DURATION_MS: u64 = 1500;
    /// Berzerk field radius = elapsed ms / this divisor
    pub const BERZERK_FIELD_DIVISOR: u64 = 4;

    /// Hit flash shown for this long after losing a life (visual only)
    pub const HIT_FLASH_MS: u64 = 1000;

    /// First level
    pub const LEVEL_MIN: i32 = 1;
    /// Difficulty stops ramping here
    pub const LEVEL_MAX: i32 = 20;
    /// Next level once `points > level * POINTS_PER_LEVEL`
    pub const POINTS_PER_LEVEL: i64 = 1000;

    /// Analog axis rest position
    pub const AXIS_CENTER: u8 = 125;
    /// Deflection below this moves negative
    pub const AXIS_LOW: u8 = 120;
    /// Deflection above this moves positive
    pub const AXIS_HIGH: u8 = 130;
}
