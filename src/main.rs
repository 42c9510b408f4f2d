//! Headless demo driver
//!
//! Stands in for a real host: samples wall time, builds a per-tick input
//! snapshot from a small autopilot, updates the session at the fixed tick
//! rate, and logs the HUD once a second. Nothing is drawn; a renderer would
//! consume `render_view` the same way the logger does here.

use std::thread;
use std::time::{Duration, Instant};

use drops::consts::TICK_RATE;
use drops::sim::{GameSession, SessionPhase, TickInput};

fn main() {
    env_logger::init();

    let seed = 0xD805_5EED;
    let mut session = GameSession::new(seed);
    log::info!("drops demo, seed {seed:#x}");

    let epoch = Instant::now();
    let tick_len = Duration::from_micros(1_000_000 / u64::from(TICK_RATE));

    let mut tick: u64 = 0;
    loop {
        let wall_ms = epoch.elapsed().as_millis() as u64;
        let input = autopilot(&session, tick);

        if session.update(&input, wall_ms) {
            log::info!("quit chord, shutting down");
            break;
        }

        if session.phase() == SessionPhase::Over {
            let view = session.render_view(wall_ms);
            log::info!(
                "game over: {} points, level {}, survived {:.1}s",
                view.hud.points,
                view.hud.level,
                view.hud.elapsed_ms as f64 / 1000.0
            );
            break;
        }

        if tick % u64::from(TICK_RATE) == 0 {
            let view = session.render_view(wall_ms);
            log::info!(
                "t={:>6}ms life={} points={} level={} drops={} enemies={}",
                view.hud.elapsed_ms,
                view.hud.life,
                view.hud.points,
                view.hud.level,
                view.drops.len(),
                view.enemies.len()
            );
        }

        tick += 1;
        let next = epoch + tick_len * tick as u32;
        if let Some(remaining) = next.checked_duration_since(Instant::now()) {
            thread::sleep(remaining);
        }
    }
}

/// Minimal pilot: tap confirm until the run starts, then steer toward the
/// nearest collectible drop and spend spare energy on the force field.
fn autopilot(session: &GameSession, tick: u64) -> TickInput {
    let mut input = TickInput::default();

    if session.phase() != SessionPhase::Playing {
        // Commands fire on release, so alternate press and release
        input.confirm = tick % 2 == 0;
        return input;
    }

    let state = session.state();
    let player = state.player.pos;
    let target = state
        .drops
        .iter()
        .filter(|d| d.state.is_collidable())
        .min_by_key(|d| (d.pos - player).length_squared())
        .map(|d| d.pos);

    if let Some(target) = target {
        if target.x < player.x {
            input.axis_x = 0;
        } else if target.x > player.x {
            input.axis_x = 255;
        }
        if target.y < player.y {
            input.axis_y = 0;
        } else if target.y > player.y {
            input.axis_y = 255;
        }
    }

    input.force_field = state.player.energy > 40;
    input.turbo = state.player.energy > 150;
    input.berzerk = state.player.berzerk_ready();

    input
}
