//! Entity slot pools and their state machines
//!
//! Drops, enemies and the bonus live in fixed-capacity slots: spawning claims
//! an inactive slot, despawning marks it inactive again, and slot indices
//! carry no identity. Nothing here allocates after startup.
//!
//! Drops and the bonus share one lifecycle: grow by 1 radius per tick until
//! the grown size, sit active until consumed, then shrink by 1 per tick back
//! to nothing.

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Lifecycle of a growing/dying slot entity (drops and the bonus).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Lifecycle {
    /// Slot is free; position and radius are meaningless
    #[default]
    Inactive,
    /// Radius increasing toward the grown size
    Growing,
    /// Fully grown, waiting to be consumed
    Active,
    /// Radius shrinking back to nothing after consumption
    Dying,
}

impl Lifecycle {
    /// Growing and Active entities can touch the player; Dying ones are
    /// already being consumed and cannot be re-collected.
    pub fn is_collidable(self) -> bool {
        matches!(self, Lifecycle::Growing | Lifecycle::Active)
    }
}

/// Shared grow/shrink step for drops and the bonus.
fn advance_lifecycle(state: &mut Lifecycle, radius: &mut i32, grown_radius: i32) {
    match *state {
        Lifecycle::Growing => {
            *radius += 1;
            if *radius >= grown_radius {
                *state = Lifecycle::Active;
                *radius = grown_radius;
            }
        }
        Lifecycle::Dying => {
            *radius -= 1;
            if *radius <= DROP_MIN_RADIUS {
                *state = Lifecycle::Inactive;
            }
        }
        Lifecycle::Inactive | Lifecycle::Active => {}
    }
}

/// Pick a grown radius and an on-screen position for a fresh slot entity.
///
/// The position is inset by the grown radius so the fully grown circle stays
/// entirely inside the playfield. Higher levels shrink the size range.
fn roll_spawn_geometry(rng: &mut impl Rng, level: i32) -> (IVec2, i32) {
    debug_assert!((LEVEL_MIN..=LEVEL_MAX).contains(&level));
    let grown = DROP_BASE_GROWN + rng.random_range(0..DROP_GROWN_SPREAD - level);
    let pos = IVec2::new(
        rng.random_range(grown..FIELD_WIDTH - grown),
        rng.random_range(grown..FIELD_HEIGHT - grown),
    );
    (pos, grown)
}

/// A collectible drop. Absorbing it yields its current radius in both points
/// and energy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Droplet {
    pub state: Lifecycle,
    pub pos: IVec2,
    pub radius: i32,
    pub grown_radius: i32,
}

impl Droplet {
    /// Claim this slot: start growing at a random spot, radius 1.
    pub fn spawn(rng: &mut impl Rng, level: i32) -> Self {
        let (pos, grown_radius) = roll_spawn_geometry(rng, level);
        Self {
            state: Lifecycle::Growing,
            pos,
            radius: DROP_MIN_RADIUS,
            grown_radius,
        }
    }

    /// Advance one tick of growth or decay.
    pub fn advance(&mut self) {
        advance_lifecycle(&mut self.state, &mut self.radius, self.grown_radius);
    }
}

/// The four bonus pickup effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BonusKind {
    /// Free movement at turbo speed
    Turbo,
    /// Enemies stop chasing
    Freeze,
    /// Enemies flee at 1-2 pixels per axis per tick
    Repel,
    /// An expanding blast from the pickup point destroys enemies
    Bomb,
}

impl BonusKind {
    /// Uniform draw over the four kinds.
    pub fn roll(rng: &mut impl Rng) -> Self {
        match rng.random_range(0..4) {
            0 => BonusKind::Turbo,
            1 => BonusKind::Freeze,
            2 => BonusKind::Repel,
            _ => BonusKind::Bomb,
        }
    }
}

/// The single bonus pickup slot. At most one exists at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bonus {
    pub state: Lifecycle,
    pub kind: BonusKind,
    pub pos: IVec2,
    pub radius: i32,
    pub grown_radius: i32,
}

impl Default for Bonus {
    fn default() -> Self {
        Self {
            state: Lifecycle::Inactive,
            kind: BonusKind::Turbo,
            pos: IVec2::ZERO,
            radius: 0,
            grown_radius: 0,
        }
    }
}

impl Bonus {
    /// Claim the slot with a random kind, growing from radius 1.
    pub fn spawn(rng: &mut impl Rng, level: i32) -> Self {
        let kind = BonusKind::roll(rng);
        let (pos, grown_radius) = roll_spawn_geometry(rng, level);
        Self {
            state: Lifecycle::Growing,
            kind,
            pos,
            radius: DROP_MIN_RADIUS,
            grown_radius,
        }
    }

    /// Advance one tick of growth or decay.
    pub fn advance(&mut self) {
        advance_lifecycle(&mut self.state, &mut self.radius, self.grown_radius);
    }
}

/// A chaser. Fixed radius, no lifecycle beyond active/inactive: enemies only
/// leave the field by touching the player, a shield, or a bomb blast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Enemy {
    pub active: bool,
    pub pos: IVec2,
}

impl Enemy {
    /// Activate at one of the four playfield corners, picked per axis.
    pub fn spawn_at_corner(rng: &mut impl Rng) -> Self {
        let x = if rng.random_bool(0.5) {
            ENEMY_SPAWN_INSET
        } else {
            FIELD_WIDTH - ENEMY_SPAWN_INSET
        };
        let y = if rng.random_bool(0.5) {
            ENEMY_SPAWN_INSET
        } else {
            FIELD_HEIGHT - ENEMY_SPAWN_INSET
        };
        Self {
            active: true,
            pos: IVec2::new(x, y),
        }
    }

    /// Step one pixel per axis toward `target`.
    pub fn chase(&mut self, target: IVec2) {
        self.pos += (target - self.pos).signum();
    }

    /// Step away from `target` at the given per-axis magnitude.
    pub fn flee(&mut self, target: IVec2, step: i32) {
        debug_assert!(step > 0);
        self.pos -= (target - self.pos).signum() * step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(7)
    }

    #[test]
    fn test_droplet_grows_to_target_then_pins() {
        let mut rng = rng();
        let mut drop = Droplet::spawn(&mut rng, 1);
        assert_eq!(drop.state, Lifecycle::Growing);
        assert_eq!(drop.radius, DROP_MIN_RADIUS);

        // Growth is monotonic and bounded by the target
        for _ in 0..200 {
            let before = drop.radius;
            drop.advance();
            assert!(drop.radius >= before);
            assert!(drop.radius <= drop.grown_radius);
        }
        assert_eq!(drop.state, Lifecycle::Active);
        assert_eq!(drop.radius, drop.grown_radius);
    }

    #[test]
    fn test_dying_droplet_reaches_inactive() {
        let mut drop = Droplet {
            state: Lifecycle::Dying,
            pos: IVec2::new(100, 100),
            radius: 34,
            grown_radius: 34,
        };
        let mut steps = 0;
        while drop.state == Lifecycle::Dying {
            drop.advance();
            steps += 1;
            assert!(steps <= 34, "dying drop never despawned");
        }
        assert_eq!(drop.state, Lifecycle::Inactive);
    }

    #[test]
    fn test_spawn_keeps_grown_circle_on_screen() {
        let mut rng = rng();
        for level in [1, 10, 20] {
            for _ in 0..100 {
                let drop = Droplet::spawn(&mut rng, level);
                assert!(drop.pos.x - drop.grown_radius >= 0);
                assert!(drop.pos.x + drop.grown_radius <= FIELD_WIDTH);
                assert!(drop.pos.y - drop.grown_radius >= 0);
                assert!(drop.pos.y + drop.grown_radius <= FIELD_HEIGHT);
                assert!(drop.grown_radius >= DROP_BASE_GROWN);
                assert!(drop.grown_radius < DROP_BASE_GROWN + DROP_GROWN_SPREAD - level);
            }
        }
    }

    #[test]
    fn test_dying_entities_are_not_collidable() {
        assert!(Lifecycle::Growing.is_collidable());
        assert!(Lifecycle::Active.is_collidable());
        assert!(!Lifecycle::Dying.is_collidable());
        assert!(!Lifecycle::Inactive.is_collidable());
    }

    #[test]
    fn test_enemy_spawns_on_a_corner() {
        let mut rng = rng();
        for _ in 0..50 {
            let enemy = Enemy::spawn_at_corner(&mut rng);
            assert!(enemy.active);
            assert!(
                enemy.pos.x == ENEMY_SPAWN_INSET || enemy.pos.x == FIELD_WIDTH - ENEMY_SPAWN_INSET
            );
            assert!(
                enemy.pos.y == ENEMY_SPAWN_INSET || enemy.pos.y == FIELD_HEIGHT - ENEMY_SPAWN_INSET
            );
        }
    }

    #[test]
    fn test_enemy_chase_steps_one_per_axis() {
        let mut enemy = Enemy {
            active: true,
            pos: IVec2::new(10, 50),
        };
        enemy.chase(IVec2::new(20, 20));
        assert_eq!(enemy.pos, IVec2::new(11, 49));

        // Aligned axis stays put
        enemy.pos = IVec2::new(20, 30);
        enemy.chase(IVec2::new(20, 20));
        assert_eq!(enemy.pos, IVec2::new(20, 29));
    }

    #[test]
    fn test_enemy_flee_reverses_direction() {
        let mut enemy = Enemy {
            active: true,
            pos: IVec2::new(30, 30),
        };
        enemy.flee(IVec2::new(20, 40), 2);
        assert_eq!(enemy.pos, IVec2::new(32, 28));
    }
}
