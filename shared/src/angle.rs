//! Angle convention shared by the segment model, the renderer and the spin
//! engine.
//!
//! All angles are radians. 0 is "3 o'clock" and angles grow clockwise on
//! screen, which is what a 2d canvas with a downward y axis does natively.
//! A wheel-local angle `a` is drawn at screen angle `a + orientation`.

pub use std::f64::consts::{PI, TAU};

/// "12 o'clock" in canvas coordinates.
pub const TWELVE_O_CLOCK: f64 = -PI / 2.0;

/// Wraps `angle` into `[base, base + TAU)`.
pub fn normalize_from(angle: f64, base: f64) -> f64 {
    let wrapped = (angle - base).rem_euclid(TAU);
    // rem_euclid can round up to TAU for tiny negative inputs
    if wrapped >= TAU {
        base
    } else {
        base + wrapped
    }
}

/// Wraps `angle` into `[0, TAU)`.
pub fn normalize(angle: f64) -> f64 {
    normalize_from(angle, 0.0)
}

/// Wheel-local angle sitting under a fixed screen angle (the pointer) once
/// the wheel has been rotated by `orientation`.
pub fn local_angle_under(screen_angle: f64, orientation: f64, base: f64) -> f64 {
    normalize_from(screen_angle - orientation, base)
}

/// Degrees, for log output only.
pub fn to_degrees(angle: f64) -> f64 {
    angle.to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_normalize_into_range() {
        assert!((normalize(-PI / 2.0) - 3.0 * PI / 2.0).abs() < EPS);
        assert!((normalize(5.0 * TAU + 1.0) - 1.0).abs() < 1e-9);
        assert_eq!(normalize(0.0), 0.0);
        assert_eq!(normalize(TAU), 0.0);
    }

    #[test]
    fn test_normalize_from_custom_base() {
        let a = normalize_from(PI, TWELVE_O_CLOCK);
        assert!((a - PI).abs() < EPS);
        let b = normalize_from(3.0 * PI / 2.0 + 0.25, TWELVE_O_CLOCK);
        assert!((b - (TWELVE_O_CLOCK + 0.25)).abs() < 1e-9);
        let c = normalize_from(-1e-18, 0.0);
        assert!(c >= 0.0 && c < TAU);
    }

    #[test]
    fn test_local_angle_under_pointer() {
        // rotating a quarter turn clockwise brings local -PI (9 o'clock) under 12 o'clock
        let local = local_angle_under(TWELVE_O_CLOCK, PI / 2.0, TWELVE_O_CLOCK);
        assert!((normalize(local) - PI).abs() < EPS);
    }
}
