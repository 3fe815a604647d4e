//! Input record collected by the front end for one feasibility analysis

use std::fmt;
use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::projection::TuitionInputs;

/// How the quoted tuition amount is billed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TuitionPeriod {
    #[default]
    PerSemester,
    PerYear,
}

impl TuitionPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            TuitionPeriod::PerSemester => "per-semester",
            TuitionPeriod::PerYear => "per-year",
        }
    }
}

impl fmt::Display for TuitionPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TuitionPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace([' ', '_'], "-");
        match normalized.as_str() {
            "per-semester" | "semester" => Ok(TuitionPeriod::PerSemester),
            "per-year" | "year" | "annual" => Ok(TuitionPeriod::PerYear),
            _ => Err(format!("Unknown tuition period: {}", s)),
        }
    }
}

// Form-layer ranges
pub const MAX_CHARGES_PER_YEAR: u32 = 8;
pub const MAX_PROGRAM_YEARS: u32 = 100;
pub const MAX_RATE_PCT: f64 = 50.0;

fn default_current_tuition() -> f64 { 10_000.0 }
fn default_charges_per_year() -> u32 { 2 }
fn default_program_years() -> u32 { 4 }
fn default_tuition_increase_pct() -> f64 { 5.0 }
fn default_interest_rate_pct() -> f64 { 9.0 }
fn default_expected_salary() -> f64 { 50_000.0 }
fn default_cost_of_living() -> f64 { 2_500.0 }

/// Inputs for one analysis. Rates are percentages (5.0 for 5%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeasibilityInputs {
    /// Tuition per billing period
    #[serde(default = "default_current_tuition")]
    pub current_tuition: f64,

    #[serde(default)]
    pub tuition_period: TuitionPeriod,

    /// Billing periods per year; ignored for per-year billing
    #[serde(default = "default_charges_per_year")]
    pub charges_per_year: u32,

    #[serde(default = "default_program_years")]
    pub program_years: u32,

    #[serde(default = "default_tuition_increase_pct")]
    pub annual_tuition_increase_pct: f64,

    #[serde(default = "default_interest_rate_pct")]
    pub annual_interest_rate_pct: f64,

    #[serde(default = "default_expected_salary")]
    pub expected_annual_salary: f64,

    #[serde(default = "default_cost_of_living")]
    pub monthly_cost_of_living: f64,
}

impl Default for FeasibilityInputs {
    fn default() -> Self {
        Self {
            current_tuition: default_current_tuition(),
            tuition_period: TuitionPeriod::default(),
            charges_per_year: default_charges_per_year(),
            program_years: default_program_years(),
            annual_tuition_increase_pct: default_tuition_increase_pct(),
            annual_interest_rate_pct: default_interest_rate_pct(),
            expected_annual_salary: default_expected_salary(),
            monthly_cost_of_living: default_cost_of_living(),
        }
    }
}

impl FeasibilityInputs {
    /// Billing periods actually charged per year
    pub fn charge_frequency(&self) -> u32 {
        match self.tuition_period {
            TuitionPeriod::PerSemester => self.charges_per_year,
            TuitionPeriod::PerYear => 1,
        }
    }

    pub fn tuition_inputs(&self) -> TuitionInputs {
        TuitionInputs::new(
            self.current_tuition,
            self.charge_frequency(),
            self.annual_tuition_increase_pct / 100.0,
            self.program_years,
        )
    }

    /// Annual interest rate as a decimal
    pub fn annual_interest_rate(&self) -> f64 {
        self.annual_interest_rate_pct / 100.0
    }

    /// Pull every field into the range the input form accepts.
    /// NaN amounts and rates become zero.
    pub fn clamped(&self) -> Self {
        let clamped = Self {
            current_tuition: self.current_tuition.max(0.0),
            tuition_period: self.tuition_period,
            charges_per_year: self.charges_per_year.clamp(1, MAX_CHARGES_PER_YEAR),
            program_years: self.program_years.clamp(1, MAX_PROGRAM_YEARS),
            annual_tuition_increase_pct: self.annual_tuition_increase_pct.max(0.0).min(MAX_RATE_PCT),
            annual_interest_rate_pct: self.annual_interest_rate_pct.max(0.0).min(MAX_RATE_PCT),
            expected_annual_salary: self.expected_annual_salary.max(0.0),
            monthly_cost_of_living: self.monthly_cost_of_living.max(0.0),
        };

        if clamped != *self {
            warn!("Inputs clamped into accepted ranges: {:?} -> {:?}", self, clamped);
        }
        clamped
    }
}

/// An input record with a label, as read from a scenarios file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub inputs: FeasibilityInputs,
}
