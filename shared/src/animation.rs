use serde::{Serialize, Deserialize};

/// Easing function for smooth deceleration: 1 - (1-t)^4
pub fn ease_out_quart(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(4)
}

pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    OutQuart,
    OutCubic,
    Linear,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::OutQuart => ease_out_quart(t),
            Easing::OutCubic => ease_out_cubic(t),
            Easing::Linear => t,
        }
    }
}

/// A single orientation tween, sampled against a caller-supplied clock in
/// milliseconds (`performance.now()` in the browser, anything monotonic in tests).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpinAnimation {
    pub from: f64,
    pub to: f64,
    pub started_at_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl SpinAnimation {
    pub fn new(from: f64, to: f64, started_at_ms: f64, duration_ms: u32, easing: Easing) -> Self {
        Self {
            from,
            to,
            started_at_ms,
            duration_ms: f64::from(duration_ms.max(1)),
            easing,
        }
    }

    /// Elapsed fraction in `[0, 1]`.
    pub fn progress(&self, now_ms: f64) -> f64 {
        ((now_ms - self.started_at_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Orientation at `now_ms`. Exactly `to` once finished.
    pub fn orientation_at(&self, now_ms: f64) -> f64 {
        let t = self.progress(now_ms);
        if t >= 1.0 {
            return self.to;
        }
        self.from + self.easing.apply(t) * (self.to - self.from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::OutQuart, Easing::OutCubic, Easing::Linear] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(-3.0), 0.0);
            assert_eq!(easing.apply(9.0), 1.0);
        }
        assert!((ease_out_quart(0.5) - 0.9375).abs() < 1e-12);
    }

    #[test]
    fn test_orientation_is_monotonic_and_snaps() {
        let anim = SpinAnimation::new(1.0, 40.123456789, 1000.0, 4500, Easing::OutQuart);
        let mut last = anim.orientation_at(1000.0);
        assert_eq!(last, 1.0);
        let mut now = 1000.0;
        while now < 5500.0 {
            now += 16.7;
            let o = anim.orientation_at(now);
            assert!(o >= last);
            last = o;
        }
        assert!(anim.is_finished(5500.0));
        assert_eq!(anim.orientation_at(5500.0), 40.123456789);
        assert_eq!(anim.orientation_at(99_999.0), 40.123456789);
    }

    #[test]
    fn test_progress_before_start_is_zero() {
        let anim = SpinAnimation::new(0.0, 10.0, 500.0, 1000, Easing::Linear);
        assert_eq!(anim.progress(0.0), 0.0);
        assert!((anim.orientation_at(1000.0) - 5.0).abs() < 1e-12);
    }
}
