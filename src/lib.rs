//! Degree Loan Feasibility - estimates whether expected income can carry the
//! student loans needed to pay for a degree
//!
//! This library provides:
//! - Tuition projection over a program with annual tuition inflation
//! - Fixed-rate loan amortization across a list of candidate terms
//! - A simplified take-home pay estimate (flat bracket rate plus payroll tax)
//! - Affordability tiers for payment ratios and residual monthly cash
//! - A parallel scenario runner for batches and salary sweeps

pub mod error;
pub mod inputs;
pub mod assumptions;
pub mod projection;
pub mod affordability;
pub mod scenario;

// Re-export commonly used types
pub use error::{FeasibilityError, Result};
pub use inputs::{FeasibilityInputs, Scenario, TuitionPeriod};
pub use assumptions::{monthly_takehome, Assumptions, Profile, TaxTable};
pub use projection::{monthly_payment, project_total, LoanQuote, TuitionInputs};
pub use affordability::{
    evaluate, tier_for_payment_ratio, tier_for_residual_cash, AffordabilityRow, FeasibilityEngine,
    FeasibilityReport, FinancialSummary, PaymentTier, ResidualTier,
};
pub use scenario::ScenarioRunner;
