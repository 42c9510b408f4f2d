//! Complete simulation state
//!
//! One owned value threaded through the step function: pools, player, clock,
//! level and the seeded RNG. No global state anywhere; determinism means the
//! same seed plus the same inputs replays the same run.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;
use super::clock::GameClock;
use super::entities::{Bonus, Droplet, Enemy, Lifecycle};
use super::geometry::keep_inside;
use super::player::Player;

/// Everything the simulation mutates during a tick.
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Run seed, kept for reset/reproduction
    pub seed: u64,
    /// The single generator behind every pseudo-random draw
    pub rng: Pcg32,
    /// Pausable clock all gameplay timers read
    pub clock: GameClock,
    /// Current level, in [LEVEL_MIN, LEVEL_MAX], never decreases
    pub level: i32,
    pub drops: [Droplet; DROP_SLOTS],
    pub enemies: [Enemy; ENEMY_SLOTS],
    /// The single bonus pickup slot
    pub bonus: Bonus,
    pub player: Player,
    /// Clock stamp of the last enemy activation, for the spawn cadence
    pub last_enemy_spawn_ms: u64,
}

impl SimulationState {
    /// Fresh state for a new run: empty pools, centered player, level 1,
    /// clock at zero.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            clock: GameClock::new(),
            level: LEVEL_MIN,
            drops: [Droplet::default(); DROP_SLOTS],
            enemies: [Enemy::default(); ENEMY_SLOTS],
            bonus: Bonus::default(),
            player: Player::new(),
            last_enemy_spawn_ms: 0,
        }
    }

    /// Occupied drop slots (any non-Inactive state counts toward the cap).
    pub fn active_drop_count(&self) -> usize {
        self.drops
            .iter()
            .filter(|d| d.state != Lifecycle::Inactive)
            .count()
    }

    /// Active enemies.
    pub fn active_enemy_count(&self) -> usize {
        self.enemies.iter().filter(|e| e.active).count()
    }

    /// Level-dependent drop population cap: fewer drops as levels climb.
    pub fn drop_cap(&self) -> usize {
        keep_inside(20 - self.level / 2, 5, DROP_SLOTS as i32) as usize
    }

    /// Level-dependent enemy population cap: more enemies as levels climb.
    pub fn enemy_cap(&self) -> usize {
        keep_inside(10 + 2 * self.level, 0, ENEMY_SLOTS as i32) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_empty() {
        let state = SimulationState::new(42);
        assert_eq!(state.level, LEVEL_MIN);
        assert_eq!(state.active_drop_count(), 0);
        assert_eq!(state.active_enemy_count(), 0);
        assert_eq!(state.bonus.state, Lifecycle::Inactive);
        assert_eq!(state.clock.now(0), 0);
    }

    #[test]
    fn test_population_caps_track_level() {
        let mut state = SimulationState::new(1);
        assert_eq!(state.drop_cap(), 20);
        assert_eq!(state.enemy_cap(), 12);

        state.level = 10;
        assert_eq!(state.drop_cap(), 15);
        assert_eq!(state.enemy_cap(), 30);

        state.level = 20;
        assert_eq!(state.drop_cap(), 10);
        assert_eq!(state.enemy_cap(), 50);
    }

    #[test]
    fn test_same_seed_same_initial_draws() {
        use rand::Rng;
        let mut a = SimulationState::new(99);
        let mut b = SimulationState::new(99);
        for _ in 0..32 {
            let x: u32 = a.rng.random();
            let y: u32 = b.rng.random();
            assert_eq!(x, y);
        }
    }
}
