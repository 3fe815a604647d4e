//! Analysis inputs and scenario loading

mod data;
pub mod loader;

pub use data::{FeasibilityInputs, Scenario, TuitionPeriod, MAX_CHARGES_PER_YEAR, MAX_PROGRAM_YEARS, MAX_RATE_PCT};
pub use loader::{load_scenarios, load_scenarios_from_reader};
