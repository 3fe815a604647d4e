//! Load analysis scenarios from CSV

use std::io::Read;
use std::path::Path;

use csv::Reader;

use super::{FeasibilityInputs, Scenario, TuitionPeriod};
use crate::error::{FeasibilityError, Result};

/// Default location of the sample scenarios file
pub const DEFAULT_SCENARIOS_PATH: &str = "data/scenarios/sample_scenarios.csv";

/// Raw CSV row; column names match the input record's field names
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    name: String,
    current_tuition: f64,
    tuition_period: String,
    charges_per_year: u32,
    program_years: u32,
    annual_tuition_increase_pct: f64,
    annual_interest_rate_pct: f64,
    expected_annual_salary: f64,
    monthly_cost_of_living: f64,
}

impl CsvRow {
    fn to_scenario(self) -> Result<Scenario> {
        let tuition_period: TuitionPeriod = self
            .tuition_period
            .parse()
            .map_err(|e: String| FeasibilityError::malformed("scenarios", format!("{}: {}", self.name, e)))?;

        Ok(Scenario {
            name: self.name,
            inputs: FeasibilityInputs {
                current_tuition: self.current_tuition,
                tuition_period,
                charges_per_year: self.charges_per_year,
                program_years: self.program_years,
                annual_tuition_increase_pct: self.annual_tuition_increase_pct,
                annual_interest_rate_pct: self.annual_interest_rate_pct,
                expected_annual_salary: self.expected_annual_salary,
                monthly_cost_of_living: self.monthly_cost_of_living,
            },
        })
    }
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>> {
    let reader = Reader::from_path(path)?;
    collect_scenarios(reader)
}

/// Load scenarios from any reader (e.g., string buffer, stdin)
pub fn load_scenarios_from_reader<R: Read>(reader: R) -> Result<Vec<Scenario>> {
    collect_scenarios(Reader::from_reader(reader))
}

fn collect_scenarios<R: Read>(mut reader: Reader<R>) -> Result<Vec<Scenario>> {
    let mut scenarios = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.to_scenario()?);
    }

    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "name,current_tuition,tuition_period,charges_per_year,program_years,\
annual_tuition_increase_pct,annual_interest_rate_pct,expected_annual_salary,monthly_cost_of_living\n";

    #[test]
    fn test_load_from_reader() {
        let data = format!(
            "{}baseline,10000,Per Semester,2,4,5,9,50000,2500\nstate school,8000,per-year,1,4,3,6.5,62000,2100\n",
            HEADER
        );
        let scenarios = load_scenarios_from_reader(data.as_bytes()).unwrap();
        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[0].name, "baseline");
        assert_eq!(scenarios[0].inputs, FeasibilityInputs::default());
        assert_eq!(scenarios[1].inputs.tuition_period, TuitionPeriod::PerYear);
        assert_eq!(scenarios[1].inputs.annual_interest_rate_pct, 6.5);
    }

    #[test]
    fn test_unknown_period() {
        let data = format!("{}odd,10000,quarterly,4,4,5,9,50000,2500\n", HEADER);
        assert!(matches!(
            load_scenarios_from_reader(data.as_bytes()),
            Err(FeasibilityError::MalformedTable { table: "scenarios", .. })
        ));
    }

    #[test]
    fn test_load_sample_file() {
        let scenarios = load_scenarios(DEFAULT_SCENARIOS_PATH).expect("Failed to load scenarios");
        assert!(!scenarios.is_empty());
        assert_eq!(scenarios[0].inputs, FeasibilityInputs::default());
    }
}
