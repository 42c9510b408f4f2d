//! Game session state machine
//!
//! Wraps the simulation step with the start screen, pause/resume and the
//! terminal Over state. Session commands are edge-triggered on button
//! release so a held button never repeat-fires; the quit chord is the one
//! level-triggered exception.
//!
//! The clock starts on every entry into Playing and stops on every exit, so
//! gameplay timers only ever see playing time.

use serde::{Deserialize, Serialize};

use super::state::SimulationState;
use super::tick::{StepOutcome, TickInput, step};
use super::view::RenderView;

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Waiting for the player to start a run
    StartScreen,
    /// Simulation stepping every tick
    Playing,
    /// Frozen mid-run; nothing mutates
    Paused,
    /// Run ended; confirm resets to a fresh start screen
    Over,
}

/// A full game session: phase, simulation state, and the previous input
/// snapshot for release-edge detection.
#[derive(Debug, Clone)]
pub struct GameSession {
    phase: SessionPhase,
    state: SimulationState,
    prev: TickInput,
}

impl GameSession {
    /// New session on the start screen.
    pub fn new(seed: u64) -> Self {
        Self {
            phase: SessionPhase::StartScreen,
            state: SimulationState::new(seed),
            prev: TickInput::default(),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Read-only access for hosts that want more than the render view.
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Advance the session by one host tick. The simulation only steps while
    /// Playing. Returns true when the quit chord is held.
    pub fn update(&mut self, input: &TickInput, wall_ms: u64) -> bool {
        let confirm_released = self.prev.confirm && !input.confirm;
        let pause_released = self.prev.pause && !input.pause;
        self.prev = *input;

        match self.phase {
            SessionPhase::StartScreen => {
                if confirm_released {
                    self.phase = SessionPhase::Playing;
                    self.state.clock.start(wall_ms);
                    log::info!("run started (seed {})", self.state.seed);
                }
            }
            SessionPhase::Playing => {
                if pause_released {
                    self.phase = SessionPhase::Paused;
                    self.state.clock.stop(wall_ms);
                } else if step(&mut self.state, input, wall_ms) == StepOutcome::GameOver {
                    self.phase = SessionPhase::Over;
                    self.state.clock.stop(wall_ms);
                }
            }
            SessionPhase::Paused => {
                // Confirm resumes; pause doubles as a toggle
                if confirm_released || pause_released {
                    self.phase = SessionPhase::Playing;
                    self.state.clock.start(wall_ms);
                }
            }
            SessionPhase::Over => {
                if confirm_released {
                    self.reset();
                }
            }
        }

        input.quit_left && input.quit_right
    }

    /// Reinitialize pools, player, clock and level for a fresh run.
    pub fn reset(&mut self) {
        self.state = SimulationState::new(self.state.seed);
        self.phase = SessionPhase::StartScreen;
    }

    /// Immutable snapshot for the renderer, valid until the next update.
    pub fn render_view(&self, wall_ms: u64) -> RenderView {
        RenderView::capture(&self.state, self.phase, wall_ms)
    }
}
