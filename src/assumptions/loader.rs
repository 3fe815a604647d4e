//! CSV-based assumption loader
//!
//! Loads tax, loan-term and threshold tables from CSV files in data/assumptions/

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use super::tax::TaxBracket;
use crate::error::{FeasibilityError, Result};

/// Default path to assumptions directory
pub const DEFAULT_ASSUMPTIONS_PATH: &str = "data/assumptions";

fn parse_f64(table: &'static str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse()
        .map_err(|e| FeasibilityError::malformed(table, format!("{:?}: {}", raw, e)))
}

fn column<'r>(table: &'static str, record: &'r csv::StringRecord, index: usize) -> Result<&'r str> {
    record
        .get(index)
        .ok_or_else(|| FeasibilityError::malformed(table, format!("row has no column {}", index + 1)))
}

fn open(path: &Path, file_name: &str) -> Result<File> {
    let full = path.join(file_name);
    debug!("Reading {}", full.display());
    Ok(File::open(full)?)
}

/// Load tax brackets (`upper_bound,rate`); an empty upper bound marks the open top bracket
pub fn load_tax_brackets(path: &Path) -> Result<Vec<TaxBracket>> {
    read_tax_brackets(open(path, "tax_brackets.csv")?)
}

pub fn read_tax_brackets<R: Read>(reader: R) -> Result<Vec<TaxBracket>> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut brackets = Vec::new();

    for result in reader.records() {
        let record = result?;
        let upper_bound = match column("tax_brackets", &record, 0)?.trim() {
            "" => None,
            raw => Some(parse_f64("tax_brackets", raw)?),
        };
        let rate = parse_f64("tax_brackets", column("tax_brackets", &record, 1)?)?;
        brackets.push(TaxBracket { upper_bound, rate });
    }

    Ok(brackets)
}

/// Load loan terms in years, one per row
pub fn load_loan_terms(path: &Path) -> Result<Vec<u32>> {
    read_loan_terms(open(path, "loan_terms.csv")?)
}

pub fn read_loan_terms<R: Read>(reader: R) -> Result<Vec<u32>> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut terms = Vec::new();

    for result in reader.records() {
        let record = result?;
        let raw = column("loan_terms", &record, 0)?;
        let term: u32 = raw
            .trim()
            .parse()
            .map_err(|e| FeasibilityError::malformed("loan_terms", format!("{:?}: {}", raw, e)))?;
        terms.push(term);
    }

    Ok(terms)
}

/// Load a two-column `key,value` settings file
pub fn load_settings(path: &Path, file_name: &str, table: &'static str) -> Result<HashMap<String, f64>> {
    read_settings(open(path, file_name)?, table)
}

pub fn read_settings<R: Read>(reader: R, table: &'static str) -> Result<HashMap<String, f64>> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut settings = HashMap::new();

    for result in reader.records() {
        let record = result?;
        let key = column(table, &record, 0)?.trim().to_string();
        let value = parse_f64(table, column(table, &record, 1)?)?;
        settings.insert(key, value);
    }

    Ok(settings)
}

/// Look up a required key in a settings table
pub fn require(settings: &HashMap<String, f64>, table: &'static str, key: &str) -> Result<f64> {
    settings
        .get(key)
        .copied()
        .ok_or_else(|| FeasibilityError::malformed(table, format!("missing key {}", key)))
}

/// Raw tables read from an assumptions directory
pub struct LoadedAssumptions {
    pub tax_brackets: Vec<TaxBracket>,
    pub tax_settings: HashMap<String, f64>,
    pub loan_terms: Vec<u32>,
    pub ratio_thresholds: HashMap<String, f64>,
    pub residual_thresholds: HashMap<String, f64>,
}

impl LoadedAssumptions {
    /// Load all assumptions from the default path
    pub fn load_default() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load all assumptions from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        Ok(Self {
            tax_brackets: load_tax_brackets(path)?,
            tax_settings: load_settings(path, "tax_settings.csv", "tax_settings")?,
            loan_terms: load_loan_terms(path)?,
            ratio_thresholds: load_settings(path, "ratio_thresholds.csv", "ratio_thresholds")?,
            residual_thresholds: load_settings(path, "residual_thresholds.csv", "residual_thresholds")?,
        })
    }
}
