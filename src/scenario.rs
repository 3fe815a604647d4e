//! Scenario runner for batch analyses
//!
//! Holds one set of assumptions and evaluates many input records against it,
//! in parallel. Each evaluation is independent.

use std::path::Path;

use log::info;
use rayon::prelude::*;

use crate::affordability::{FeasibilityEngine, FeasibilityReport};
use crate::assumptions::{Assumptions, Profile};
use crate::error::Result;
use crate::inputs::{FeasibilityInputs, Scenario};

/// Result of one named scenario
#[derive(Debug)]
pub struct ScenarioOutcome {
    pub name: String,
    pub report: Result<FeasibilityReport>,
}

/// Pre-loaded scenario runner
///
/// # Example
/// ```
/// use degree_loan_feasibility::{FeasibilityInputs, ScenarioRunner};
///
/// let runner = ScenarioRunner::new();
/// let base = FeasibilityInputs::default();
/// let reports = runner.salary_sweep(&base, &[40_000.0, 60_000.0, 80_000.0]).unwrap();
/// assert_eq!(reports.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    engine: FeasibilityEngine,
}

impl ScenarioRunner {
    /// Create runner with the current built-in assumptions
    pub fn new() -> Self {
        Self::with_assumptions(Assumptions::current())
    }

    pub fn for_profile(profile: Profile) -> Self {
        Self::with_assumptions(Assumptions::for_profile(profile))
    }

    /// Create runner by loading assumptions from CSV files
    pub fn from_csv() -> Result<Self> {
        Ok(Self::with_assumptions(Assumptions::from_csv()?))
    }

    /// Create runner from specific assumptions directory
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        Ok(Self::with_assumptions(Assumptions::from_csv_path(path)?))
    }

    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self {
            engine: FeasibilityEngine::new(assumptions),
        }
    }

    pub fn run(&self, inputs: &FeasibilityInputs) -> Result<FeasibilityReport> {
        self.engine.evaluate(inputs)
    }

    /// Evaluate every scenario; results keep the input order
    pub fn run_batch(&self, scenarios: &[Scenario]) -> Vec<ScenarioOutcome> {
        info!("Evaluating {} scenarios", scenarios.len());
        scenarios
            .par_iter()
            .map(|scenario| ScenarioOutcome {
                name: scenario.name.clone(),
                report: self.engine.evaluate(&scenario.inputs),
            })
            .collect()
    }

    /// Re-run one set of inputs at each salary
    pub fn salary_sweep(&self, base: &FeasibilityInputs, salaries: &[f64]) -> Result<Vec<FeasibilityReport>> {
        salaries
            .par_iter()
            .map(|&salary| {
                let inputs = FeasibilityInputs {
                    expected_annual_salary: salary,
                    ..*base
                };
                self.engine.evaluate(&inputs)
            })
            .collect()
    }

    pub fn engine(&self) -> &FeasibilityEngine {
        &self.engine
    }

    pub fn assumptions(&self) -> &Assumptions {
        self.engine.assumptions()
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}
