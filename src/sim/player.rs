//! The player entity
//!
//! Position and vitality plus the three timed power states: the energy-fed
//! force field, the berzerk burst, and whichever bonus effect is currently
//! running. Timers are clock milliseconds so they freeze with the session.

use glam::IVec2;

use crate::consts::*;
use super::entities::BonusKind;

/// A bonus effect the player is carrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveBonus {
    pub kind: BonusKind,
    /// Clock stamp of the pickup
    pub since_ms: u64,
    /// Where the bonus was picked up; the Bomb blast expands from here
    pub origin: IVec2,
}

/// The player-controlled entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub pos: IVec2,
    /// Body radius, fixed for the whole run
    pub radius: i32,
    /// Remaining lives; 0 is terminal
    pub life: u32,
    /// Resource gained from drops, spent on turbo and the force field
    pub energy: i32,
    /// Force-field radius extension, clamped to [0, FORCE_FIELD_MAX]
    pub force_field: i32,
    /// Clock stamp of the last enemy hit, for the hit-flash visual
    pub last_hit_ms: Option<u64>,
    /// Clock stamp of berzerk activation while the mode is running
    pub berzerk_since_ms: Option<u64>,
    /// Berzerk field radius, derived from elapsed time each tick
    pub berzerk_field: i32,
    /// Bonus effect currently in force
    pub bonus: Option<ActiveBonus>,
    pub points: i64,
}

impl Player {
    /// Fresh player at the playfield center with starting vitals.
    pub fn new() -> Self {
        Self {
            pos: IVec2::new(FIELD_WIDTH / 2, FIELD_HEIGHT / 2),
            radius: PLAYER_RADIUS,
            life: PLAYER_START_LIVES,
            energy: 0,
            force_field: 0,
            last_hit_ms: None,
            berzerk_since_ms: None,
            berzerk_field: 0,
            bonus: None,
            points: 0,
        }
    }

    /// Whether berzerk is currently running.
    pub fn berzerk_active(&self) -> bool {
        self.berzerk_since_ms.is_some()
    }

    /// Whether the player has banked enough energy to trigger berzerk.
    pub fn berzerk_ready(&self) -> bool {
        self.energy > BERZERK_ENERGY_THRESHOLD && !self.berzerk_active()
    }

    /// The bonus kind in force, if any.
    pub fn bonus_kind(&self) -> Option<BonusKind> {
        self.bonus.map(|b| b.kind)
    }

    /// Radius at which enemies are repelled for free: the body plus the
    /// larger of the force field and the berzerk field. Zero extension means
    /// no shield.
    pub fn shield_extension(&self) -> i32 {
        self.force_field.max(self.berzerk_field)
    }

    /// Whether the hit flash is still showing at the given clock time.
    pub fn hit_flash_visible(&self, now_ms: u64) -> bool {
        self.last_hit_ms
            .is_some_and(|hit| now_ms.saturating_sub(hit) < HIT_FLASH_MS)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
