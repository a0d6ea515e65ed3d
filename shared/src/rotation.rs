//! Target orientation for a spin.
//!
//! The wheel only ever turns forward (orientation increases). The target is
//! chosen so that, once the wheel stops, the pointer rests on a random point
//! well inside the winning segment.

use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::angle::{normalize, TAU};
use crate::config::SpinConfig;
use crate::segments::Segment;

/// Resolved geometry of one spin.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RotationPlan {
    pub start: f64,
    pub target: f64,
    /// Wheel-local angle that ends up under the pointer.
    pub landing_angle: f64,
    pub extra_turns: u32,
}

/// A point inside `segment`: the middle shifted by `(offset - 0.5) * size * spread`.
///
/// `offset` is in `[0, 1]`; with `spread < 1` the result stays clear of the edges.
pub fn landing_angle(segment: &Segment, offset: f64, spread: f64) -> f64 {
    let offset = offset.clamp(0.0, 1.0);
    segment.mid_angle + (offset - 0.5) * segment.size() * spread
}

/// Smallest forward rotation from `current` that brings `landing` under the
/// pointer, plus `extra_turns` full turns.
pub fn rotation_target(current: f64, landing: f64, pointer_angle: f64, extra_turns: u32) -> f64 {
    let delta = normalize(pointer_angle - landing - current);
    current + delta + f64::from(extra_turns) * TAU
}

pub fn plan_rotation<R: Rng + ?Sized>(
    segment: &Segment,
    current: f64,
    config: &SpinConfig,
    rng: &mut R,
) -> RotationPlan {
    let offset: f64 = rng.gen_range(0.0..=1.0);
    let extra_turns = rng.gen_range(config.min_turns..=config.max_turns);
    let landing = landing_angle(segment, offset, config.landing_spread);
    RotationPlan {
        start: current,
        target: rotation_target(current, landing, config.pointer_angle, extra_turns),
        landing_angle: landing,
        extra_turns,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::{PI, TWELVE_O_CLOCK};
    use crate::segments::{compute_segments, segment_under_pointer};
    use crate::wheel_option::WheelOption;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn segments(weights: &[f64]) -> Vec<Segment> {
        let options: Vec<WheelOption> = weights
            .iter()
            .map(|&w| WheelOption { label: "x".into(), weight: w, color: "#FF006E".into() })
            .collect();
        compute_segments(&options, TWELVE_O_CLOCK)
    }

    #[test]
    fn test_landing_stays_inside_segment() {
        let segs = segments(&[1.0, 3.0]);
        let seg = &segs[1];
        for offset in [0.0, 0.25, 0.5, 1.0] {
            let a = landing_angle(seg, offset, 0.6);
            assert!(a > seg.start_angle + 0.19 * seg.size());
            assert!(a < seg.end_angle - 0.19 * seg.size());
        }
        assert_eq!(landing_angle(seg, 0.5, 0.6), seg.mid_angle);
    }

    #[test]
    fn test_target_from_rest() {
        // landing on local 0 (3 o'clock) needs a quarter turn backwards, i.e. 3/4 forward
        let target = rotation_target(0.0, 0.0, TWELVE_O_CLOCK, 5);
        assert!((target - (5.0 * TAU + 1.5 * PI)).abs() < 1e-9);
    }

    #[test]
    fn test_already_aligned_still_turns() {
        let target = rotation_target(2.0, TWELVE_O_CLOCK - 2.0, TWELVE_O_CLOCK, 5);
        assert!(target - 2.0 >= 5.0 * TAU - 1e-9);
        assert!(target - 2.0 < 6.0 * TAU);
    }

    #[test]
    fn test_forward_and_consistent_over_many_spins() {
        let config = SpinConfig::default();
        let segs = segments(&[2.0, 1.0, 1.5, 0.3]);
        let mut rng = StdRng::seed_from_u64(42);
        let mut current = 0.37;
        for i in 0..20 {
            let winner = &segs[i % segs.len()];
            let plan = plan_rotation(winner, current, &config, &mut rng);
            assert!(plan.target - current >= f64::from(config.min_turns) * TAU);
            assert!(plan.target - current < f64::from(config.max_turns + 1) * TAU);
            assert!(plan.extra_turns >= config.min_turns && plan.extra_turns <= config.max_turns);

            let landed = segment_under_pointer(&segs, plan.target, config.pointer_angle).unwrap();
            assert_eq!(landed.index, winner.index);
            current = plan.target;
        }
    }
}
