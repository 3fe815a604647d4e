//! Simplified income and payroll tax model for take-home estimation
//!
//! A single bracket rate is chosen from gross salary and applied flatly to all
//! taxable income. This is not a marginal calculation, so take-home drops at
//! each bracket edge where taxable income is positive (47,150 / 100,525 /
//! 191,950 with the default table).

use serde::{Deserialize, Serialize};

use crate::error::{FeasibilityError, Result};

/// Upper edge of a bracket and the rate selected by it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Inclusive upper bound on gross salary; `None` for the top bracket
    pub upper_bound: Option<f64>,
    pub rate: f64,
}

impl TaxBracket {
    fn contains(&self, gross_annual_salary: f64) -> bool {
        match self.upper_bound {
            Some(bound) => gross_annual_salary <= bound,
            None => true,
        }
    }
}

/// Bracket table plus the flat deduction and payroll rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxTable {
    brackets: Vec<TaxBracket>,

    /// Subtracted from gross salary before the bracket rate is applied
    pub standard_deduction: f64,

    /// Applied to all gross salary, no wage-base cap
    pub payroll_tax_rate: f64,
}

pub const DEFAULT_STANDARD_DEDUCTION: f64 = 13_850.0;
pub const DEFAULT_PAYROLL_TAX_RATE: f64 = 0.0765;

impl TaxTable {
    /// Bracket edges and rates used by the estimator by default
    pub fn default_table() -> Self {
        Self {
            brackets: vec![
                TaxBracket { upper_bound: Some(11_600.0), rate: 0.10 },
                TaxBracket { upper_bound: Some(47_150.0), rate: 0.12 },
                TaxBracket { upper_bound: Some(100_525.0), rate: 0.22 },
                TaxBracket { upper_bound: Some(191_950.0), rate: 0.24 },
                TaxBracket { upper_bound: None, rate: 0.32 },
            ],
            standard_deduction: DEFAULT_STANDARD_DEDUCTION,
            payroll_tax_rate: DEFAULT_PAYROLL_TAX_RATE,
        }
    }

    /// Build a table, checking that bounds ascend and the last bracket is open
    pub fn new(brackets: Vec<TaxBracket>, standard_deduction: f64, payroll_tax_rate: f64) -> Result<Self> {
        let Some((top, bounded)) = brackets.split_last() else {
            return Err(FeasibilityError::malformed("tax_brackets", "no brackets"));
        };
        if top.upper_bound.is_some() {
            return Err(FeasibilityError::malformed("tax_brackets", "last bracket must be open-ended"));
        }

        let mut previous = f64::NEG_INFINITY;
        for bracket in bounded {
            let bound = bracket.upper_bound.ok_or_else(|| {
                FeasibilityError::malformed("tax_brackets", "only the last bracket may be open-ended")
            })?;
            if !(bound > previous) || bound.is_infinite() {
                return Err(FeasibilityError::malformed(
                    "tax_brackets",
                    format!("upper bounds must ascend ({} after {})", bound, previous),
                ));
            }
            previous = bound;
        }

        if brackets.iter().any(|b| !(0.0..=1.0).contains(&b.rate)) {
            return Err(FeasibilityError::malformed("tax_brackets", "rates must be between 0 and 1"));
        }
        if !(standard_deduction >= 0.0 && standard_deduction.is_finite())
            || !(0.0..=1.0).contains(&payroll_tax_rate)
        {
            return Err(FeasibilityError::malformed(
                "tax_settings",
                "deduction must be non-negative and payroll rate between 0 and 1",
            ));
        }

        Ok(Self {
            brackets,
            standard_deduction,
            payroll_tax_rate,
        })
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// The single rate selected by gross salary
    pub fn bracket_rate(&self, gross_annual_salary: f64) -> f64 {
        self.brackets
            .iter()
            .find(|b| b.contains(gross_annual_salary))
            .or_else(|| self.brackets.last())
            .map(|b| b.rate)
            .unwrap_or(0.0)
    }

    /// Full breakdown of the estimate for one salary
    pub fn estimate(&self, gross_annual_salary: f64) -> IncomeProfile {
        let tax_rate = self.bracket_rate(gross_annual_salary);
        let taxable_income = (gross_annual_salary - self.standard_deduction).max(0.0);
        let income_tax = taxable_income * tax_rate;
        let payroll_tax = gross_annual_salary * self.payroll_tax_rate;
        let annual_takehome = gross_annual_salary - income_tax - payroll_tax;

        IncomeProfile {
            gross_annual_salary,
            tax_rate,
            taxable_income,
            income_tax,
            payroll_tax,
            annual_takehome,
            monthly_takehome: annual_takehome / 12.0,
        }
    }

    pub fn monthly_takehome(&self, gross_annual_salary: f64) -> f64 {
        self.estimate(gross_annual_salary).monthly_takehome
    }
}

impl Default for TaxTable {
    fn default() -> Self {
        Self::default_table()
    }
}

/// Gross salary and the take-home derived from it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncomeProfile {
    pub gross_annual_salary: f64,
    pub tax_rate: f64,
    pub taxable_income: f64,
    pub income_tax: f64,
    pub payroll_tax: f64,
    pub annual_takehome: f64,
    pub monthly_takehome: f64,
}

/// Estimated net monthly pay using the default tax table
pub fn monthly_takehome(gross_annual_salary: f64) -> f64 {
    TaxTable::default_table().monthly_takehome(gross_annual_salary)
}
