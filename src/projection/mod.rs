//! Tuition projection and loan amortization

mod tuition;
mod amortization;

pub(crate) use amortization::check_term;

pub use tuition::{project_schedule, project_total, TuitionInputs, TuitionYear};
pub use amortization::{
    amortization_schedule, monthly_payment, AmortizationRow, LoanQuote, MAX_TERM_YEARS,
    PAYMENTS_PER_YEAR,
};
