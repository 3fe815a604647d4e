//! Runs the full analysis for one input record

use log::debug;

use super::classifier::{classify_payment, classify_residual_cash, payment_ratio_pct};
use super::report::{round_to_cents, AffordabilityRow, FeasibilityReport, FinancialSummary};
use crate::assumptions::Assumptions;
use crate::error::{ensure_non_negative, Result};
use crate::inputs::FeasibilityInputs;
use crate::projection::{amortization_schedule, project_schedule, AmortizationRow, LoanQuote};

/// Analysis engine bound to one set of assumptions
#[derive(Debug, Clone)]
pub struct FeasibilityEngine {
    assumptions: Assumptions,
}

impl FeasibilityEngine {
    pub fn new(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Project tuition, estimate take-home, price every term, and classify.
    ///
    /// Inputs are used as given; range clamping belongs to the caller.
    pub fn evaluate(&self, inputs: &FeasibilityInputs) -> Result<FeasibilityReport> {
        let salary = ensure_non_negative("expected_annual_salary", inputs.expected_annual_salary)?;
        let cost_of_living = ensure_non_negative("monthly_cost_of_living", inputs.monthly_cost_of_living)?;

        let tuition_schedule = project_schedule(&inputs.tuition_inputs())?;
        let total_projected_tuition = tuition_schedule.last().map(|y| y.cumulative).unwrap_or(0.0);

        let income = self.assumptions.tax.estimate(salary);
        let monthly_takehome = income.monthly_takehome;

        let rows = self.price_terms(total_projected_tuition, inputs.annual_interest_rate(), monthly_takehome)?;

        let lowest_monthly_payment = rows
            .iter()
            .map(|r| r.monthly_payment)
            .fold(f64::INFINITY, f64::min);
        let lowest_monthly_payment = if lowest_monthly_payment.is_finite() {
            round_to_cents(lowest_monthly_payment)
        } else {
            0.0
        };

        let residual_cash = monthly_takehome - lowest_monthly_payment - cost_of_living;
        let residual_tier = classify_residual_cash(residual_cash, &self.assumptions.residual);

        debug!(
            "Evaluated tuition={:.2} takehome={:.2} lowest_payment={:.2} residual={:.2} ({})",
            total_projected_tuition, monthly_takehome, lowest_monthly_payment, residual_cash, residual_tier
        );

        Ok(FeasibilityReport {
            inputs: *inputs,
            total_projected_tuition,
            tuition_schedule,
            income,
            rows,
            summary: FinancialSummary {
                lowest_monthly_payment,
                monthly_takehome,
                monthly_cost_of_living: cost_of_living,
                residual_cash,
                residual_tier,
            },
        })
    }

    /// One row per configured term, all sharing principal and rate
    fn price_terms(&self, principal: f64, annual_rate: f64, monthly_takehome: f64) -> Result<Vec<AffordabilityRow>> {
        self.assumptions
            .terms
            .terms()
            .iter()
            .map(|&term_years| -> Result<AffordabilityRow> {
                let quote = LoanQuote::new(principal, annual_rate, term_years)?;
                let ratio = payment_ratio_pct(quote.monthly_payment, monthly_takehome);
                Ok(AffordabilityRow {
                    term_years,
                    monthly_payment: quote.monthly_payment,
                    payment_ratio_pct: ratio,
                    tier: classify_payment(ratio, &self.assumptions.ratio),
                })
            })
            .collect()
    }

    /// Repayment schedule for the loan a report would take out over `term_years`
    pub fn repayment_schedule(&self, report: &FeasibilityReport, term_years: u32) -> Result<Vec<AmortizationRow>> {
        let quote = LoanQuote::new(
            report.total_projected_tuition,
            report.inputs.annual_interest_rate(),
            term_years,
        )?;
        amortization_schedule(&quote)
    }
}

impl Default for FeasibilityEngine {
    fn default() -> Self {
        Self::new(Assumptions::current())
    }
}

/// Evaluate with the current built-in assumptions
pub fn evaluate(inputs: &FeasibilityInputs) -> Result<FeasibilityReport> {
    FeasibilityEngine::default().evaluate(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::affordability::classifier::{PaymentTier, ResidualTier};
    use crate::error::FeasibilityError;
    use crate::inputs::TuitionPeriod;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_inputs() {
        let report = evaluate(&FeasibilityInputs::default()).unwrap();

        assert_relative_eq!(report.total_projected_tuition, 86_202.50, epsilon = 1e-6);
        assert_relative_eq!(report.monthly_takehome(), 3_185.1667, epsilon = 1e-4);
        assert_eq!(report.rows.len(), 6);

        let ten = report.row(10).unwrap();
        assert_relative_eq!(ten.monthly_payment, 1_091.98, epsilon = 0.005);
        assert_eq!(ten.tier, PaymentTier::Strained);

        let five = report.row(5).unwrap();
        assert_eq!(five.tier, PaymentTier::Unsustainable);

        let thirty = report.row(30).unwrap();
        assert_relative_eq!(thirty.payment_ratio_pct.unwrap(), 21.776, epsilon = 1e-3);
        assert_eq!(thirty.tier, PaymentTier::Moderate);

        // 3185.17 - 693.60 - 2500
        assert_eq!(report.summary.lowest_monthly_payment, 693.60);
        assert_relative_eq!(report.summary.residual_cash, -8.4333, epsilon = 1e-3);
        assert_eq!(report.summary.residual_tier, ResidualTier::Deficit);
    }

    #[test]
    fn test_legacy_profile_uses_extended_terms() {
        let engine = FeasibilityEngine::new(Assumptions::legacy());
        let inputs = FeasibilityInputs {
            monthly_cost_of_living: 1_800.0,
            ..Default::default()
        };
        let report = engine.evaluate(&inputs).unwrap();

        assert_eq!(report.rows.len(), 10);
        assert_eq!(report.summary.lowest_monthly_payment, 653.91);
        // 3185.17 - 653.91 - 1800 = 731.26, under the legacy 1000 cutoff
        assert_eq!(report.summary.residual_tier, ResidualTier::Low);
    }

    #[test]
    fn test_zero_salary_rows_unsustainable() {
        let inputs = FeasibilityInputs {
            expected_annual_salary: 0.0,
            ..Default::default()
        };
        let report = evaluate(&inputs).unwrap();
        assert_eq!(report.monthly_takehome(), 0.0);
        assert!(report.rows.iter().all(|r| r.payment_ratio_pct.is_none()));
        assert!(report.rows.iter().all(|r| r.tier == PaymentTier::Unsustainable));
        assert_eq!(report.summary.residual_tier, ResidualTier::Deficit);
    }

    #[test]
    fn test_free_tuition() {
        let inputs = FeasibilityInputs {
            current_tuition: 0.0,
            monthly_cost_of_living: 1_000.0,
            ..Default::default()
        };
        let report = evaluate(&inputs).unwrap();
        assert!(report.rows.iter().all(|r| r.monthly_payment == 0.0));
        assert!(report.rows.iter().all(|r| r.tier == PaymentTier::Comfortable));
        assert_eq!(report.summary.residual_tier, ResidualTier::Sustainable);
    }

    #[test]
    fn test_per_year_billing() {
        let inputs = FeasibilityInputs {
            tuition_period: TuitionPeriod::PerYear,
            annual_tuition_increase_pct: 0.0,
            ..Default::default()
        };
        let report = evaluate(&inputs).unwrap();
        assert_eq!(report.total_projected_tuition, 40_000.0);
    }

    #[test]
    fn test_idempotent() {
        let inputs = FeasibilityInputs {
            expected_annual_salary: 83_500.0,
            annual_interest_rate_pct: 6.8,
            ..Default::default()
        };
        let engine = FeasibilityEngine::default();
        assert_eq!(engine.evaluate(&inputs).unwrap(), engine.evaluate(&inputs).unwrap());
    }

    #[test]
    fn test_unclamped_inputs_rejected() {
        let zero_years = FeasibilityInputs {
            program_years: 0,
            ..Default::default()
        };
        assert!(matches!(
            evaluate(&zero_years),
            Err(FeasibilityError::DivisionByZero { field: "program_years" })
        ));

        let negative_salary = FeasibilityInputs {
            expected_annual_salary: -10.0,
            ..Default::default()
        };
        assert!(matches!(evaluate(&negative_salary), Err(FeasibilityError::InvalidInput { .. })));
    }

    #[test]
    fn test_repayment_schedule_for_report() {
        let engine = FeasibilityEngine::default();
        let report = engine.evaluate(&FeasibilityInputs::default()).unwrap();
        let schedule = engine.repayment_schedule(&report, 10).unwrap();
        assert_eq!(schedule.len(), 120);
        assert_relative_eq!(schedule[0].payment, report.row(10).unwrap().monthly_payment);
        assert_eq!(schedule.last().unwrap().closing_balance, 0.0);

        assert!(matches!(
            engine.repayment_schedule(&report, 400_000_000),
            Err(FeasibilityError::InvalidInput { field: "term_years", .. })
        ));
    }
}
