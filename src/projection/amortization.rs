//! Fixed-rate loan amortization

use serde::{Deserialize, Serialize};

use crate::error::{ensure_non_negative, FeasibilityError, Result};

/// Payments per year; loans are repaid monthly
pub const PAYMENTS_PER_YEAR: u32 = 12;

/// Longest loan term that will be priced
pub const MAX_TERM_YEARS: u32 = 100;

/// Reject zero and over-long terms
pub(crate) fn check_term(term_years: u32) -> Result<u32> {
    if term_years == 0 {
        return Err(FeasibilityError::DivisionByZero { field: "term_years" });
    }
    if term_years > MAX_TERM_YEARS {
        return Err(FeasibilityError::InvalidInput {
            field: "term_years",
            value: term_years as f64,
            reason: "must not exceed 100 years",
        });
    }
    Ok(term_years)
}

/// Fixed monthly payment that fully retires `principal` over `term_years`.
///
/// With monthly rate `r` and `n` payments:
/// `payment = principal * r * (1+r)^n / ((1+r)^n - 1)`, or `principal / n` when `r == 0`.
pub fn monthly_payment(principal: f64, annual_rate: f64, term_years: u32) -> Result<f64> {
    ensure_non_negative("principal", principal)?;
    ensure_non_negative("annual_rate", annual_rate)?;
    let n = check_term(term_years)? * PAYMENTS_PER_YEAR;
    let r = annual_rate / PAYMENTS_PER_YEAR as f64;

    if r == 0.0 {
        return Ok(principal / n as f64);
    }

    let growth = (1.0 + r).powi(n as i32);
    Ok(principal * (r * growth) / (growth - 1.0))
}

/// A priced loan for a single term
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanQuote {
    pub principal: f64,
    /// Annual interest rate as a decimal
    pub annual_rate: f64,
    pub term_years: u32,
    pub monthly_payment: f64,
}

impl LoanQuote {
    pub fn new(principal: f64, annual_rate: f64, term_years: u32) -> Result<Self> {
        let monthly_payment = monthly_payment(principal, annual_rate, term_years)?;
        Ok(Self {
            principal,
            annual_rate,
            term_years,
            monthly_payment,
        })
    }

    pub fn payment_count(&self) -> u32 {
        self.term_years.saturating_mul(PAYMENTS_PER_YEAR)
    }

    /// Sum of all scheduled payments
    pub fn total_paid(&self) -> f64 {
        self.monthly_payment * self.payment_count() as f64
    }

    pub fn total_interest(&self) -> f64 {
        self.total_paid() - self.principal
    }
}

/// One month of a repayment schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// Payment number (1-indexed)
    pub month: u32,
    pub opening_balance: f64,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    pub closing_balance: f64,
}

/// Month-by-month repayment schedule for a quote.
///
/// The final payment absorbs any floating-point residue so the loan closes at zero.
pub fn amortization_schedule(quote: &LoanQuote) -> Result<Vec<AmortizationRow>> {
    check_term(quote.term_years)?;
    let r = quote.annual_rate / PAYMENTS_PER_YEAR as f64;
    let n = quote.payment_count();

    let mut rows = Vec::with_capacity(n as usize);
    let mut balance = quote.principal;

    for month in 1..=n {
        let interest = balance * r;
        let mut principal = quote.monthly_payment - interest;
        let mut payment = quote.monthly_payment;

        if month == n {
            principal = balance;
            payment = principal + interest;
        }

        let closing_balance = balance - principal;
        rows.push(AmortizationRow {
            month,
            opening_balance: balance,
            payment,
            interest,
            principal,
            closing_balance,
        });
        balance = closing_balance;
    }

    Ok(rows)
}
