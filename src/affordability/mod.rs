//! Affordability classification and the end-to-end analysis engine

pub mod classifier;
mod engine;
mod report;

pub use classifier::{
    classify_payment, classify_payment_ratio, classify_residual_cash, payment_ratio_pct,
    tier_for_payment_ratio, tier_for_residual_cash, AlertLevel, PaymentTier, ResidualTier,
};
pub use engine::{evaluate, FeasibilityEngine};
pub use report::{round_to_cents, AffordabilityRow, FeasibilityReport, FinancialSummary};
