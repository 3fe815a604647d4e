//! Error types for feasibility calculations and assumption loading

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, FeasibilityError>;

#[derive(Error, Debug)]
pub enum FeasibilityError {
    /// A period count that feeds a division was zero
    #[error("Division by zero: {field} must be at least 1")]
    DivisionByZero {
        field: &'static str,
    },

    /// A value outside its domain reached the core without being clamped
    #[error("Invalid input for {field}: {value} ({reason})")]
    InvalidInput {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// An assumptions table was readable but not usable
    #[error("Malformed assumptions table {table}: {reason}")]
    MalformedTable {
        table: &'static str,
        reason: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl FeasibilityError {
    pub(crate) fn malformed(table: &'static str, reason: impl Into<String>) -> Self {
        FeasibilityError::MalformedTable {
            table,
            reason: reason.into(),
        }
    }
}

/// Reject negative or non-finite amounts and rates
pub(crate) fn ensure_non_negative(field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(FeasibilityError::InvalidInput {
            field,
            value,
            reason: "must be finite",
        });
    }
    if value < 0.0 {
        return Err(FeasibilityError::InvalidInput {
            field,
            value,
            reason: "must not be negative",
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_non_negative() {
        assert_eq!(ensure_non_negative("principal", 0.0).unwrap(), 0.0);
        assert!(matches!(
            ensure_non_negative("principal", -1.0),
            Err(FeasibilityError::InvalidInput { field: "principal", .. })
        ));
        assert!(ensure_non_negative("rate", f64::NAN).is_err());
    }

    #[test]
    fn test_division_by_zero_message() {
        let err = FeasibilityError::DivisionByZero { field: "term_years" };
        assert_eq!(err.to_string(), "Division by zero: term_years must be at least 1");
    }
}
