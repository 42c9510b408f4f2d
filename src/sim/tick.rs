//! Per-tick simulation step
//!
//! One call advances the world by exactly one tick, in a fixed order: timed
//! effects, pool aging and spawning, collision resolution, enemy behavior,
//! then player movement and resource spending. The order is load-bearing;
//! see the comments on each section.

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use super::entities::{Bonus, BonusKind, Droplet, Enemy, Lifecycle};
use super::geometry::{collides, keep_inside};
use super::player::ActiveBonus;
use super::state::SimulationState;

/// Digital and analog input captured once per tick by the host.
///
/// Buttons are level states; edge detection (act-on-release) happens in the
/// session layer. Axes are normalized to 0-255 with rest near
/// [`AXIS_CENTER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Start / confirm
    pub confirm: bool,
    pub pause: bool,
    /// Feed the force field
    pub force_field: bool,
    /// Turbo, either binding
    pub turbo: bool,
    pub turbo_alt: bool,
    /// Trigger berzerk
    pub berzerk: bool,
    /// Quit chord, both halves must be held
    pub quit_left: bool,
    pub quit_right: bool,
    /// Horizontal deflection, 0 = full left
    pub axis_x: u8,
    /// Vertical deflection, 0 = full up
    pub axis_y: u8,
}

impl Default for TickInput {
    fn default() -> Self {
        Self {
            confirm: false,
            pause: false,
            force_field: false,
            turbo: false,
            turbo_alt: false,
            berzerk: false,
            quit_left: false,
            quit_right: false,
            axis_x: AXIS_CENTER,
            axis_y: AXIS_CENTER,
        }
    }
}

/// What a single step did to the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Running,
    /// Life hit zero this tick; the session must stop the clock
    GameOver,
}

/// Advance the simulation by one tick. Only called while the session is
/// Playing; `wall_ms` is the host's wall-time sample for this tick.
pub fn step(state: &mut SimulationState, input: &TickInput, wall_ms: u64) -> StepOutcome {
    let now = state.clock.now(wall_ms);

    // Expire the running bonus effect
    if let Some(bonus) = state.player.bonus {
        if now.saturating_sub(bonus.since_ms) > BONUS_DURATION_MS {
            state.player.bonus = None;
        }
    }

    // Berzerk activation deliberately freezes the rest of this tick:
    // spawning, movement and collisions all resume next tick.
    if input.berzerk && state.player.berzerk_ready() {
        state.player.energy = 0;
        state.player.berzerk_since_ms = Some(now);
        state.player.berzerk_field = 0;
        log::debug!("berzerk engaged at {now}ms");
        return StepOutcome::Running;
    }

    // Berzerk field growth and timeout
    if let Some(since) = state.player.berzerk_since_ms {
        let elapsed = now.saturating_sub(since);
        if elapsed > BERZERK_DURATION_MS {
            state.player.berzerk_since_ms = None;
            state.player.berzerk_field = 0;
        } else {
            state.player.berzerk_field = (elapsed / BERZERK_FIELD_DIVISOR) as i32;
        }
    }
    let berzerk = state.player.berzerk_active();

    // Age the growing/dying pools
    for drop in state.drops.iter_mut() {
        drop.advance();
    }
    state.bonus.advance();

    // Top the drop population back up to the level cap
    let level = state.level;
    let mut shortfall = state.drop_cap().saturating_sub(state.active_drop_count());
    for i in 0..DROP_SLOTS {
        if shortfall == 0 {
            break;
        }
        if state.drops[i].state == Lifecycle::Inactive {
            state.drops[i] = Droplet::spawn(&mut state.rng, level);
            shortfall -= 1;
        }
    }

    // Absorb drops touching the player: their radius is the reward
    let player_pos = state.player.pos;
    let player_radius = state.player.radius;
    for drop in state.drops.iter_mut() {
        if drop.state.is_collidable()
            && collides(player_pos, player_radius, drop.pos, drop.radius)
        {
            state.player.points += i64::from(drop.radius);
            state.player.energy += drop.radius;
            drop.state = Lifecycle::Dying;
        }
    }

    // Bonus pickup grants its effect and starts its 3 second window
    if state.bonus.state.is_collidable()
        && collides(player_pos, player_radius, state.bonus.pos, state.bonus.radius)
    {
        state.player.bonus = Some(ActiveBonus {
            kind: state.bonus.kind,
            since_ms: now,
            origin: state.bonus.pos,
        });
        state.bonus.state = Lifecycle::Dying;
        log::info!("picked up {:?} bonus at {now}ms", state.bonus.kind);
    }

    // A running Bomb clears enemies inside its expanding blast
    if let Some(bonus) = state.player.bonus {
        if bonus.kind == BonusKind::Bomb {
            let blast = (now.saturating_sub(bonus.since_ms) / BOMB_BLAST_DIVISOR) as i32;
            for enemy in state.enemies.iter_mut() {
                if enemy.active && collides(bonus.origin, blast, enemy.pos, 0) {
                    enemy.active = false;
                }
            }
        }
    }

    // Enemy contact, body first: a body hit always costs a life, the shield
    // only repels enemies that miss the body
    let shield_extension = state.player.shield_extension();
    for i in 0..ENEMY_SLOTS {
        if !state.enemies[i].active {
            continue;
        }
        let enemy_pos = state.enemies[i].pos;
        if collides(player_pos, player_radius, enemy_pos, ENEMY_RADIUS) {
            state.enemies[i].active = false;
            state.player.last_hit_ms = Some(now);
            state.player.life = state.player.life.saturating_sub(1);
            if state.player.life == 0 {
                log::info!(
                    "game over: {} points, level {}",
                    state.player.points,
                    state.level
                );
                return StepOutcome::GameOver;
            }
        } else if shield_extension > 0
            && collides(
                player_pos,
                player_radius + shield_extension,
                enemy_pos,
                ENEMY_RADIUS,
            )
        {
            state.enemies[i].active = false;
        }
    }

    // Chase, unless frozen or the player is berzerking; Repel reverses the
    // pursuit at a jittered 1-2 pixels per axis
    let freeze = state.player.bonus_kind() == Some(BonusKind::Freeze);
    let repel = state.player.bonus_kind() == Some(BonusKind::Repel);
    if !berzerk && !freeze {
        for i in 0..ENEMY_SLOTS {
            if !state.enemies[i].active {
                continue;
            }
            if repel {
                let magnitude = state.rng.random_range(1..=2);
                state.enemies[i].flee(player_pos, magnitude);
            } else {
                state.enemies[i].chase(player_pos);
            }
        }
    }

    // Activate one enemy per spawn interval while below the cap
    if !berzerk
        && state.active_enemy_count() < state.enemy_cap()
        && now.saturating_sub(state.last_enemy_spawn_ms) >= ENEMY_SPAWN_INTERVAL_MS
    {
        if let Some(slot) = state.enemies.iter().position(|e| !e.active) {
            state.enemies[slot] = Enemy::spawn_at_corner(&mut state.rng);
            state.last_enemy_spawn_ms = now;
        }
    }

    // Turbo: free under the Turbo bonus or berzerk, otherwise 1 energy/tick
    let mut speed = BASE_SPEED;
    let turbo_held = input.turbo || input.turbo_alt;
    if state.player.bonus_kind() == Some(BonusKind::Turbo) {
        speed = TURBO_SPEED;
    } else if turbo_held && (berzerk || state.player.energy > 0) {
        if !berzerk {
            state.player.energy -= 1;
        }
        speed = TURBO_SPEED;
    }

    // Move, keeping the whole body on-screen; berzerk roots the player
    if !berzerk {
        let mut delta = IVec2::ZERO;
        if input.axis_x < AXIS_LOW {
            delta.x = -speed;
        }
        if input.axis_x > AXIS_HIGH {
            delta.x = speed;
        }
        if input.axis_y < AXIS_LOW {
            delta.y = -speed;
        }
        if input.axis_y > AXIS_HIGH {
            delta.y = speed;
        }
        let player = &mut state.player;
        player.pos += delta;
        player.pos.x = keep_inside(player.pos.x, player.radius, FIELD_WIDTH - player.radius);
        player.pos.y = keep_inside(player.pos.y, player.radius, FIELD_HEIGHT - player.radius);
    }

    // Force field grows while fed, decays otherwise
    let player = &mut state.player;
    if input.force_field && player.energy > 0 {
        player.energy -= 1;
        player.force_field += 1;
    } else {
        player.force_field -= 1;
    }
    player.force_field = keep_inside(player.force_field, 0, FORCE_FIELD_MAX);

    // Level-up pays out a bonus pickup (if the slot is free)
    if state.level < LEVEL_MAX
        && state.player.points > i64::from(state.level) * POINTS_PER_LEVEL
    {
        state.level += 1;
        log::info!("level up to {}", state.level);
        if state.bonus.state == Lifecycle::Inactive {
            state.bonus = Bonus::spawn(&mut state.rng, state.level);
        }
    }

    StepOutcome::Running
}
