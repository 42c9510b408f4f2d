//! Circle overlap and range clamping
//!
//! Everything in this game is a circle on an integer grid, so collision is a
//! single squared-distance comparison. Pure functions, no state.

use glam::IVec2;

/// Check whether two circles overlap.
///
/// True iff the squared distance between centers is strictly less than the
/// squared sum of radii: circles that exactly touch do NOT collide.
#[inline]
pub fn collides(a: IVec2, a_radius: i32, b: IVec2, b_radius: i32) -> bool {
    debug_assert!(a_radius >= 0 && b_radius >= 0, "negative collision radius");
    let d = a - b;
    let dist_sq = i64::from(d.x) * i64::from(d.x) + i64::from(d.y) * i64::from(d.y);
    let reach = i64::from(a_radius) + i64::from(b_radius);
    dist_sq < reach * reach
}

/// Clamp `v` into `[lo, hi]`.
///
/// Used for the gameplay-defined clamps only (player position, force-field
/// radius, level, population caps); anything else out of range is a bug.
#[inline]
pub fn keep_inside(v: i32, lo: i32, hi: i32) -> i32 {
    debug_assert!(lo <= hi, "inverted clamp range");
    v.clamp(lo, hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlapping_circles_collide() {
        assert!(collides(IVec2::new(0, 0), 10, IVec2::new(5, 5), 10));
        // Concentric circles always overlap
        assert!(collides(IVec2::new(3, 3), 1, IVec2::new(3, 3), 1));
    }

    #[test]
    fn test_distant_circles_miss() {
        assert!(!collides(IVec2::new(0, 0), 2, IVec2::new(100, 100), 2));
    }

    #[test]
    fn test_tangent_circles_do_not_collide() {
        // Centers 20 apart, radii 10 + 10: exact tangency is a miss
        assert!(!collides(IVec2::new(0, 0), 10, IVec2::new(20, 0), 10));
        // One pixel closer is a hit
        assert!(collides(IVec2::new(0, 0), 10, IVec2::new(19, 0), 10));
    }

    #[test]
    fn test_keep_inside() {
        assert_eq!(keep_inside(-5, 0, 20), 0);
        assert_eq!(keep_inside(25, 0, 20), 20);
        assert_eq!(keep_inside(7, 0, 20), 7);
        assert_eq!(keep_inside(1, 1, 1), 1);
    }

    proptest! {
        #[test]
        fn prop_collision_is_symmetric(
            ax in -1000i32..1000, ay in -1000i32..1000, ar in 0i32..100,
            bx in -1000i32..1000, by in -1000i32..1000, br in 0i32..100,
        ) {
            let a = IVec2::new(ax, ay);
            let b = IVec2::new(bx, by);
            prop_assert_eq!(collides(a, ar, b, br), collides(b, br, a, ar));
        }

        #[test]
        fn prop_tangency_never_collides(
            ax in -1000i32..1000, ay in -1000i32..1000,
            ar in 0i32..500, br in 0i32..500,
        ) {
            // Place b exactly ar + br to the right of a
            let a = IVec2::new(ax, ay);
            let b = IVec2::new(ax + ar + br, ay);
            prop_assert!(!collides(a, ar, b, br));
        }

        #[test]
        fn prop_keep_inside_lands_in_range(v in i32::MIN..i32::MAX, lo in -100i32..100, span in 0i32..100) {
            let hi = lo + span;
            let clamped = keep_inside(v, lo, hi);
            prop_assert!(clamped >= lo && clamped <= hi);
            if v >= lo && v <= hi {
                prop_assert_eq!(clamped, v);
            }
        }
    }
}
