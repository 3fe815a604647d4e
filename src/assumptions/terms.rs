//! Candidate loan terms quoted for every analysis

use serde::{Deserialize, Serialize};

use crate::error::{FeasibilityError, Result};
use crate::projection::check_term;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanTermSchedule {
    terms: Vec<u32>,
}

impl LoanTermSchedule {
    /// 5 through 30 years
    pub fn standard() -> Self {
        Self {
            terms: vec![5, 10, 15, 20, 25, 30],
        }
    }

    /// 5 through 50 years
    pub fn extended() -> Self {
        Self {
            terms: (5..=50).step_by(5).collect(),
        }
    }

    /// Terms must be between 1 and 100 years; duplicates are dropped and order is ascending
    pub fn new(mut terms: Vec<u32>) -> Result<Self> {
        if terms.is_empty() {
            return Err(FeasibilityError::malformed("loan_terms", "at least one term is required"));
        }
        for &term in &terms {
            check_term(term)?;
        }
        terms.sort_unstable();
        terms.dedup();
        Ok(Self { terms })
    }

    pub fn terms(&self) -> &[u32] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl Default for LoanTermSchedule {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_schedules() {
        assert_eq!(LoanTermSchedule::standard().terms(), &[5, 10, 15, 20, 25, 30]);
        assert_eq!(LoanTermSchedule::extended().len(), 10);
        assert_eq!(LoanTermSchedule::extended().terms().last(), Some(&50));
    }

    #[test]
    fn test_new_sorts_and_dedups() {
        let schedule = LoanTermSchedule::new(vec![20, 10, 20, 5]).unwrap();
        assert_eq!(schedule.terms(), &[5, 10, 20]);
    }

    #[test]
    fn test_new_rejects_zero_and_empty() {
        assert!(LoanTermSchedule::new(vec![10, 0]).is_err());
        assert!(LoanTermSchedule::new(Vec::new()).is_err());
    }

    #[test]
    fn test_new_rejects_overlong_term() {
        assert!(LoanTermSchedule::new(vec![10, 100]).is_ok());
        assert!(matches!(
            LoanTermSchedule::new(vec![10, 400_000_000]),
            Err(FeasibilityError::InvalidInput { field: "term_years", .. })
        ));
    }
}
