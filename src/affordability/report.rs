//! Output structures for a feasibility analysis

use serde::{Deserialize, Serialize};

use super::classifier::{PaymentTier, ResidualTier};
use crate::assumptions::IncomeProfile;
use crate::inputs::FeasibilityInputs;
use crate::projection::TuitionYear;

/// Loan payment for one candidate term
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffordabilityRow {
    pub term_years: u32,
    pub monthly_payment: f64,
    /// Payment as a percent of take-home; absent when there is no take-home
    pub payment_ratio_pct: Option<f64>,
    pub tier: PaymentTier,
}

/// Month-level cash picture using the cheapest term
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    /// Lowest payment across all terms, rounded to the cent
    pub lowest_monthly_payment: f64,
    pub monthly_takehome: f64,
    pub monthly_cost_of_living: f64,
    /// Take-home minus the lowest payment minus cost of living
    pub residual_cash: f64,
    pub residual_tier: ResidualTier,
}

/// Complete analysis result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeasibilityReport {
    /// Inputs the analysis was run with
    pub inputs: FeasibilityInputs,

    /// Projected tuition over the program, borrowed in full
    pub total_projected_tuition: f64,

    pub tuition_schedule: Vec<TuitionYear>,

    pub income: IncomeProfile,

    /// One row per candidate term, in ascending term order
    pub rows: Vec<AffordabilityRow>,

    pub summary: FinancialSummary,
}

impl FeasibilityReport {
    pub fn monthly_takehome(&self) -> f64 {
        self.income.monthly_takehome
    }

    pub fn row(&self, term_years: u32) -> Option<&AffordabilityRow> {
        self.rows.iter().find(|r| r.term_years == term_years)
    }

    /// Shortest term whose payment is not worse than `tier`
    pub fn shortest_term_within(&self, tier: PaymentTier) -> Option<&AffordabilityRow> {
        self.rows.iter().find(|r| r.tier <= tier)
    }
}

/// Round a currency amount to whole cents
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
