//! Read-only render view
//!
//! Snapshot of everything an external renderer needs after a tick: one entry
//! per visible entity with a state-derived palette key, plus the HUD
//! scalars. Capturing a view never mutates the simulation; the berzerk
//! jitter comes from a hash mix of the clock, not the gameplay RNG.

use glam::IVec2;
use serde::Serialize;

use crate::consts::*;
use super::entities::{BonusKind, Lifecycle};
use super::session::SessionPhase;
use super::state::SimulationState;

/// Palette key; the renderer owns the actual colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColorKey {
    DropGrowing,
    DropActive,
    DropDying,
    Enemy,
    Player,
    /// Player inside the post-hit flash window
    PlayerHit,
    Bonus(BonusKind),
    BonusDying,
}

/// One circle to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CircleView {
    pub state: Lifecycle,
    pub pos: IVec2,
    pub radius: i32,
    pub color: ColorKey,
}

/// The player's renderable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayerView {
    /// Body center; jittered a couple of pixels while berzerking
    pub pos: IVec2,
    pub radius: i32,
    pub color: ColorKey,
    /// Shield extension beyond the body radius; 0 means no shield ring
    pub shield_radius: i32,
}

/// HUD scalars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HudView {
    pub life: u32,
    pub points: i64,
    pub level: i32,
    /// Whether berzerk could be triggered right now
    pub berzerk_ready: bool,
    /// Game-visible elapsed milliseconds
    pub elapsed_ms: u64,
}

/// Complete per-tick snapshot handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderView {
    pub phase: SessionPhase,
    pub drops: Vec<CircleView>,
    pub enemies: Vec<CircleView>,
    pub bonus: Option<CircleView>,
    pub player: PlayerView,
    pub hud: HudView,
}

fn drop_color(state: Lifecycle) -> ColorKey {
    match state {
        Lifecycle::Growing => ColorKey::DropGrowing,
        Lifecycle::Active => ColorKey::DropActive,
        Lifecycle::Dying => ColorKey::DropDying,
        // Inactive drops are filtered out before capture
        Lifecycle::Inactive => unreachable!("inactive drop in render capture"),
    }
}

/// Deterministic +/-2 pixel wobble derived from the clock alone.
fn berzerk_jitter(now_ms: u64) -> IVec2 {
    let hash = (now_ms as u32).wrapping_mul(2654435761);
    IVec2::new((hash % 5) as i32 - 2, ((hash >> 8) % 5) as i32 - 2)
}

impl RenderView {
    /// Capture the visible world at the given wall time.
    pub fn capture(state: &SimulationState, phase: SessionPhase, wall_ms: u64) -> Self {
        let now = state.clock.now(wall_ms);

        let drops = state
            .drops
            .iter()
            .filter(|d| d.state != Lifecycle::Inactive)
            .map(|d| CircleView {
                state: d.state,
                pos: d.pos,
                radius: d.radius,
                color: drop_color(d.state),
            })
            .collect();

        let enemies = state
            .enemies
            .iter()
            .filter(|e| e.active)
            .map(|e| CircleView {
                state: Lifecycle::Active,
                pos: e.pos,
                radius: ENEMY_RADIUS,
                color: ColorKey::Enemy,
            })
            .collect();

        let bonus = (state.bonus.state != Lifecycle::Inactive).then(|| CircleView {
            state: state.bonus.state,
            pos: state.bonus.pos,
            radius: state.bonus.radius,
            color: if state.bonus.state == Lifecycle::Dying {
                ColorKey::BonusDying
            } else {
                ColorKey::Bonus(state.bonus.kind)
            },
        });

        let player_pos = if state.player.berzerk_active() {
            state.player.pos + berzerk_jitter(now)
        } else {
            state.player.pos
        };
        let player = PlayerView {
            pos: player_pos,
            radius: state.player.radius,
            color: if state.player.hit_flash_visible(now) {
                ColorKey::PlayerHit
            } else {
                ColorKey::Player
            },
            shield_radius: state.player.shield_extension(),
        };

        let hud = HudView {
            life: state.player.life,
            points: state.player.points,
            level: state.level,
            berzerk_ready: state.player.berzerk_ready(),
            elapsed_ms: now,
        };

        Self {
            phase,
            drops,
            enemies,
            bonus,
            player,
            hud,
        }
    }
}
