//! Threshold classification of payment ratios and residual cash
//!
//! Both tier enums are ordered from least to most severe.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::assumptions::{RatioThresholds, ResidualThresholds};

/// Severity of a loan payment relative to monthly take-home
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentTier {
    Comfortable,
    Moderate,
    Strained,
    Unsustainable,
}

impl PaymentTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentTier::Comfortable => "comfortable",
            PaymentTier::Moderate => "moderate",
            PaymentTier::Strained => "strained",
            PaymentTier::Unsustainable => "unsustainable",
        }
    }

    /// Row background color in rendered tables
    pub fn color(&self) -> &'static str {
        match self {
            PaymentTier::Comfortable => "green",
            PaymentTier::Moderate => "yellow",
            PaymentTier::Strained => "orange",
            PaymentTier::Unsustainable => "red",
        }
    }
}

impl fmt::Display for PaymentTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity of the cash left each month after the loan and living costs
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResidualTier {
    Sustainable,
    Low,
    VeryLow,
    Deficit,
}

/// How prominently a residual-cash message is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Success,
    Warning,
    Error,
}

impl AlertLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertLevel::Success => "SUCCESS",
            AlertLevel::Warning => "WARNING",
            AlertLevel::Error => "ERROR",
        }
    }
}

impl ResidualTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResidualTier::Sustainable => "sustainable",
            ResidualTier::Low => "low",
            ResidualTier::VeryLow => "very-low",
            ResidualTier::Deficit => "deficit",
        }
    }

    /// Banner text color; the low band renders as yellow like the table's moderate rows
    pub fn color(&self) -> &'static str {
        match self {
            ResidualTier::Sustainable => "green",
            ResidualTier::Low => "yellow",
            ResidualTier::VeryLow => "orange",
            ResidualTier::Deficit => "red",
        }
    }

    pub fn alert_level(&self) -> AlertLevel {
        match self {
            ResidualTier::Sustainable => AlertLevel::Success,
            ResidualTier::Low | ResidualTier::VeryLow => AlertLevel::Warning,
            ResidualTier::Deficit => AlertLevel::Error,
        }
    }

    /// Advisory banner text; cutoffs are quoted from the active thresholds
    pub fn message(&self, thresholds: &ResidualThresholds) -> String {
        match self {
            ResidualTier::Deficit => {
                "Warning: Your estimated expenses exceed your take-home pay!".to_string()
            }
            ResidualTier::VeryLow => format!(
                "Caution: Your remaining monthly income is very low! Less than ${:.0}/month.",
                thresholds.very_low
            ),
            ResidualTier::Low => format!(
                "Caution: Your remaining monthly income is low! Less than ${:.0}/month.",
                thresholds.low
            ),
            ResidualTier::Sustainable => format!(
                "Your financial plan appears sustainable! Minimum ${:.0}/month remaining.",
                thresholds.low
            ),
        }
    }
}

impl fmt::Display for ResidualTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment as a percentage of take-home; `None` when take-home is not positive
pub fn payment_ratio_pct(monthly_payment: f64, monthly_takehome: f64) -> Option<f64> {
    if monthly_takehome > 0.0 {
        Some(monthly_payment / monthly_takehome * 100.0)
    } else {
        None
    }
}

pub fn classify_payment_ratio(ratio_pct: f64, thresholds: &RatioThresholds) -> PaymentTier {
    if ratio_pct <= thresholds.comfortable {
        PaymentTier::Comfortable
    } else if ratio_pct <= thresholds.moderate {
        PaymentTier::Moderate
    } else if ratio_pct <= thresholds.strained {
        PaymentTier::Strained
    } else {
        PaymentTier::Unsustainable
    }
}

/// Tier for a possibly undefined ratio; no income means unsustainable
pub fn classify_payment(ratio_pct: Option<f64>, thresholds: &RatioThresholds) -> PaymentTier {
    match ratio_pct {
        Some(ratio) => classify_payment_ratio(ratio, thresholds),
        None => PaymentTier::Unsustainable,
    }
}

/// Ratio tier with the default cutoffs (15 / 33.333 / 50)
pub fn tier_for_payment_ratio(ratio_pct: f64) -> PaymentTier {
    classify_payment_ratio(ratio_pct, &RatioThresholds::default())
}

pub fn classify_residual_cash(residual: f64, thresholds: &ResidualThresholds) -> ResidualTier {
    if residual < 0.0 {
        ResidualTier::Deficit
    } else if residual < thresholds.very_low {
        ResidualTier::VeryLow
    } else if residual < thresholds.low {
        ResidualTier::Low
    } else {
        ResidualTier::Sustainable
    }
}

/// Residual tier with the current cutoffs (400 / 750)
pub fn tier_for_residual_cash(residual: f64) -> ResidualTier {
    classify_residual_cash(residual, &ResidualThresholds::current())
}
