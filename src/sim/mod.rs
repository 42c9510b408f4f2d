//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only, owned by the state
//! - Wall time enters as a caller-supplied millisecond stamp
//! - No rendering or platform dependencies

pub mod clock;
pub mod entities;
pub mod geometry;
pub mod player;
pub mod session;
pub mod state;
pub mod tick;
pub mod view;

pub use clock::GameClock;
pub use entities::{Bonus, BonusKind, Droplet, Enemy, Lifecycle};
pub use geometry::{collides, keep_inside};
pub use player::{ActiveBonus, Player};
pub use session::{GameSession, SessionPhase};
pub use state::SimulationState;
pub use tick::{StepOutcome, TickInput, step};
pub use view::{CircleView, ColorKey, HudView, PlayerView, RenderView};
