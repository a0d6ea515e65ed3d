use serde::{Serialize, Deserialize};

use crate::angle::TWELVE_O_CLOCK;
use crate::animation::Easing;
use crate::error::{Result, WheelError};
use crate::wheel_option::MIN_OPTIONS;

// Defaults for the spin animation
pub const SPIN_DURATION_MS: u32 = 4500;  // Duration of spin animation in milliseconds
pub const MIN_TURNS: u32 = 5;            // Minimum number of extra full rotations
pub const MAX_TURNS: u32 = 9;            // Maximum number of extra full rotations
pub const LANDING_SPREAD: f64 = 0.6;     // Share of a segment the pointer may land in, centered on its middle

/// Tunables for segment layout and the spin animation.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SpinConfig {
    pub duration_ms: u32,
    pub min_turns: u32,
    pub max_turns: u32,
    pub landing_spread: f64,
    /// Where the first segment starts, in wheel-local radians.
    pub start_angle: f64,
    /// Fixed screen angle of the pointer.
    pub pointer_angle: f64,
    pub min_options: usize,
    pub easing: Easing,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            duration_ms: SPIN_DURATION_MS,
            min_turns: MIN_TURNS,
            max_turns: MAX_TURNS,
            landing_spread: LANDING_SPREAD,
            start_angle: TWELVE_O_CLOCK,
            pointer_angle: TWELVE_O_CLOCK,
            min_options: MIN_OPTIONS,
            easing: Easing::default(),
        }
    }
}

impl SpinConfig {
    pub fn validate(&self) -> Result<()> {
        if self.duration_ms == 0 {
            return Err(WheelError::Config("duration_ms must be positive".into()));
        }
        if self.min_turns < 1 {
            return Err(WheelError::Config("min_turns must be at least 1".into()));
        }
        if self.max_turns < self.min_turns {
            return Err(WheelError::Config(format!(
                "max_turns ({}) is below min_turns ({})",
                self.max_turns, self.min_turns
            )));
        }
        if !(self.landing_spread > 0.0 && self.landing_spread < 1.0) {
            return Err(WheelError::Config("landing_spread must be inside (0, 1)".into()));
        }
        if !self.start_angle.is_finite() || !self.pointer_angle.is_finite() {
            return Err(WheelError::Config("angles must be finite".into()));
        }
        if self.min_options < MIN_OPTIONS {
            return Err(WheelError::Config(format!("min_options must be at least {}", MIN_OPTIONS)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(SpinConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_values() {
        let bad = [
            SpinConfig { duration_ms: 0, ..Default::default() },
            SpinConfig { min_turns: 0, ..Default::default() },
            SpinConfig { min_turns: 6, max_turns: 5, ..Default::default() },
            SpinConfig { landing_spread: 1.0, ..Default::default() },
            SpinConfig { landing_spread: 0.0, ..Default::default() },
            SpinConfig { pointer_angle: f64::NAN, ..Default::default() },
            SpinConfig { min_options: 1, ..Default::default() },
        ];
        for config in bad {
            assert!(matches!(config.validate(), Err(WheelError::Config(_))), "{:?}", config);
        }
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SpinConfig = serde_json::from_str(r#"{"duration_ms": 3000}"#).unwrap();
        assert_eq!(config.duration_ms, 3000);
        assert_eq!(config.min_turns, MIN_TURNS);
        assert_eq!(config.landing_spread, LANDING_SPREAD);
        assert_eq!(config.easing, Easing::OutQuart);

        let config: SpinConfig = serde_json::from_str(r#"{"easing": "OutCubic"}"#).unwrap();
        assert_eq!(config.easing, Easing::OutCubic);
        assert_eq!(config.duration_ms, SPIN_DURATION_MS);
    }
}
