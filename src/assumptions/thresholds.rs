//! Threshold tables for affordability tiers

use serde::{Deserialize, Serialize};

use crate::error::{FeasibilityError, Result};

/// Upper bounds (inclusive, in percent of take-home) for payment ratio tiers.
/// Anything above `strained` is unsustainable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioThresholds {
    pub comfortable: f64,
    pub moderate: f64,
    pub strained: f64,
}

impl RatioThresholds {
    pub fn new(comfortable: f64, moderate: f64, strained: f64) -> Result<Self> {
        if !(comfortable < moderate && moderate < strained) {
            return Err(FeasibilityError::malformed(
                "ratio_thresholds",
                format!("expected comfortable < moderate < strained, got {} / {} / {}", comfortable, moderate, strained),
            ));
        }
        Ok(Self { comfortable, moderate, strained })
    }
}

impl Default for RatioThresholds {
    fn default() -> Self {
        Self {
            comfortable: 15.0,
            moderate: 33.333,
            strained: 50.0,
        }
    }
}

/// Exclusive upper bounds on residual monthly cash.
/// Below zero is always a deficit; at or above `low` is sustainable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResidualThresholds {
    pub very_low: f64,
    pub low: f64,
}

impl ResidualThresholds {
    pub fn new(very_low: f64, low: f64) -> Result<Self> {
        if !(0.0 <= very_low && very_low < low) {
            return Err(FeasibilityError::malformed(
                "residual_thresholds",
                format!("expected 0 <= very_low < low, got {} / {}", very_low, low),
            ));
        }
        Ok(Self { very_low, low })
    }

    /// Roughly $100 a week spare before the next paycheck
    pub fn current() -> Self {
        Self {
            very_low: 400.0,
            low: 750.0,
        }
    }

    pub fn legacy() -> Self {
        Self {
            very_low: 500.0,
            low: 1_000.0,
        }
    }
}

impl Default for ResidualThresholds {
    fn default() -> Self {
        Self::current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_thresholds_must_ascend() {
        assert!(RatioThresholds::new(15.0, 33.333, 50.0).is_ok());
        assert!(RatioThresholds::new(20.0, 20.0, 50.0).is_err());
    }

    #[test]
    fn test_residual_profiles() {
        assert_eq!(ResidualThresholds::default(), ResidualThresholds::current());
        assert_eq!(ResidualThresholds::legacy().low, 1_000.0);
        assert!(ResidualThresholds::new(750.0, 400.0).is_err());
        assert!(ResidualThresholds::new(-1.0, 400.0).is_err());
    }
}
