//! Tuition cost projection across the length of a degree program

use serde::{Deserialize, Serialize};

use crate::error::{ensure_non_negative, FeasibilityError, Result};

/// Inputs for a tuition projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TuitionInputs {
    /// Tuition charged per billing period
    pub base_tuition: f64,

    /// Billing periods per year (2 for two semesters, 1 for annual billing)
    pub charge_frequency: u32,

    /// Annual tuition inflation as a decimal (0.05 for 5%)
    pub annual_increase: f64,

    /// Program length in years
    pub years: u32,
}

impl TuitionInputs {
    pub fn new(base_tuition: f64, charge_frequency: u32, annual_increase: f64, years: u32) -> Self {
        Self {
            base_tuition,
            charge_frequency,
            annual_increase,
            years,
        }
    }

    /// Cost of the first (unescalated) year
    pub fn first_year_cost(&self) -> f64 {
        self.base_tuition * self.charge_frequency as f64
    }

    fn validate(&self) -> Result<()> {
        ensure_non_negative("base_tuition", self.base_tuition)?;
        ensure_non_negative("annual_increase", self.annual_increase)?;
        if self.charge_frequency == 0 {
            return Err(FeasibilityError::DivisionByZero { field: "charge_frequency" });
        }
        if self.years == 0 {
            return Err(FeasibilityError::DivisionByZero { field: "program_years" });
        }
        Ok(())
    }
}

/// One year of a tuition projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TuitionYear {
    /// Program year (1-indexed)
    pub year: u32,
    /// Tuition billed during this year
    pub cost: f64,
    /// Tuition billed through the end of this year
    pub cumulative: f64,
}

/// Project total tuition over the program.
///
/// Year 1 is billed at `base * charge_frequency`; every later year is the prior
/// year's cost grown by `1 + annual_increase`.
pub fn project_total(base: f64, charge_frequency: u32, annual_increase: f64, years: u32) -> Result<f64> {
    let inputs = TuitionInputs::new(base, charge_frequency, annual_increase, years);
    Ok(project_schedule(&inputs)?
        .last()
        .map(|y| y.cumulative)
        .unwrap_or(0.0))
}

/// Year-by-year tuition schedule; the last row's `cumulative` is the projected total
pub fn project_schedule(inputs: &TuitionInputs) -> Result<Vec<TuitionYear>> {
    inputs.validate()?;

    let mut schedule = Vec::with_capacity(inputs.years as usize);
    let mut yearly_cost = inputs.first_year_cost();
    let mut total = 0.0;

    for year in 1..=inputs.years {
        total += yearly_cost;
        schedule.push(TuitionYear {
            year,
            cost: yearly_cost,
            cumulative: total,
        });
        yearly_cost *= 1.0 + inputs.annual_increase;
    }

    Ok(schedule)
}
