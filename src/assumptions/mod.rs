//! Analysis assumptions: tax model, loan terms and tier thresholds

mod tax;
mod terms;
mod thresholds;
pub mod loader;

pub use tax::{monthly_takehome, IncomeProfile, TaxBracket, TaxTable};
pub use terms::LoanTermSchedule;
pub use thresholds::{RatioThresholds, ResidualThresholds};
pub use loader::LoadedAssumptions;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Named built-in assumption sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Six terms (5-30 years), residual cutoffs 400 / 750
    #[default]
    Current,
    /// Ten terms (5-50 years), residual cutoffs 500 / 1000
    Legacy,
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Profile::Current => write!(f, "current"),
            Profile::Legacy => write!(f, "legacy"),
        }
    }
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "current" => Ok(Profile::Current),
            "legacy" => Ok(Profile::Legacy),
            other => Err(format!("Unknown profile: {}", other)),
        }
    }
}

/// Container for all analysis assumptions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assumptions {
    pub tax: TaxTable,
    pub terms: LoanTermSchedule,
    pub ratio: RatioThresholds,
    pub residual: ResidualThresholds,
}

impl Assumptions {
    pub fn current() -> Self {
        Self {
            tax: TaxTable::default_table(),
            terms: LoanTermSchedule::standard(),
            ratio: RatioThresholds::default(),
            residual: ResidualThresholds::current(),
        }
    }

    pub fn legacy() -> Self {
        Self {
            tax: TaxTable::default_table(),
            terms: LoanTermSchedule::extended(),
            ratio: RatioThresholds::default(),
            residual: ResidualThresholds::legacy(),
        }
    }

    pub fn for_profile(profile: Profile) -> Self {
        match profile {
            Profile::Current => Self::current(),
            Profile::Legacy => Self::legacy(),
        }
    }

    /// Load assumptions from CSV files in the default location (data/assumptions/)
    pub fn from_csv() -> Result<Self> {
        Self::from_csv_path(Path::new(loader::DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load assumptions from CSV files in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let loaded = LoadedAssumptions::load_from(path)?;
        let assumptions = Self::from_loaded(loaded)?;
        info!(
            "Loaded assumptions from {} ({} tax brackets, {} loan terms)",
            path.display(),
            assumptions.tax.brackets().len(),
            assumptions.terms.len()
        );
        Ok(assumptions)
    }

    pub fn from_loaded(loaded: LoadedAssumptions) -> Result<Self> {
        use loader::require;

        let tax = TaxTable::new(
            loaded.tax_brackets,
            require(&loaded.tax_settings, "tax_settings", "standard_deduction")?,
            require(&loaded.tax_settings, "tax_settings", "payroll_tax_rate")?,
        )?;
        let ratio = RatioThresholds::new(
            require(&loaded.ratio_thresholds, "ratio_thresholds", "comfortable")?,
            require(&loaded.ratio_thresholds, "ratio_thresholds", "moderate")?,
            require(&loaded.ratio_thresholds, "ratio_thresholds", "strained")?,
        )?;
        let residual = ResidualThresholds::new(
            require(&loaded.residual_thresholds, "residual_thresholds", "very_low")?,
            require(&loaded.residual_thresholds, "residual_thresholds", "low")?,
        )?;

        Ok(Self {
            tax,
            terms: LoanTermSchedule::new(loaded.loan_terms)?,
            ratio,
            residual,
        })
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::current()
    }
}
