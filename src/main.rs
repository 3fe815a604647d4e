//! Degree Loan Feasibility CLI
//!
//! Collects analysis inputs from flags (or a JSON file), clamps them into the
//! accepted ranges, and prints the loan table and financial summary.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use degree_loan_feasibility::{
    assumptions::Assumptions,
    projection::AmortizationRow,
    FeasibilityEngine, FeasibilityInputs, FeasibilityReport, PaymentTier, Profile, ResidualTier,
    TuitionPeriod,
};

#[derive(Parser, Debug)]
#[command(name = "degree-loan-feasibility", version)]
#[command(about = "Analyze your ability to repay student loans based on future career prospects")]
struct Cli {
    /// Current tuition amount per billing period
    #[arg(long, default_value_t = 10_000.0)]
    current_tuition: f64,

    /// per-semester or per-year
    #[arg(long, default_value = "per-semester")]
    tuition_period: TuitionPeriod,

    /// Semesters per year (1-8); ignored for per-year billing
    #[arg(long, default_value_t = 2)]
    charges_per_year: u32,

    /// Number of years for the degree (1-100)
    #[arg(long, default_value_t = 4)]
    program_years: u32,

    /// Average annual tuition increase in percent (0-50)
    #[arg(long, default_value_t = 5.0)]
    tuition_increase: f64,

    /// Average loan interest rate in percent (0-50)
    #[arg(long, default_value_t = 9.0)]
    interest_rate: f64,

    /// Expected annual starting salary
    #[arg(long, default_value_t = 50_000.0)]
    salary: f64,

    /// Estimated monthly cost of living
    #[arg(long, default_value_t = 2_500.0)]
    cost_of_living: f64,

    /// Read inputs from a JSON file instead of the flags above
    #[arg(long, value_name = "FILE")]
    inputs: Option<PathBuf>,

    /// Built-in assumption profile: current or legacy
    #[arg(long, default_value = "current")]
    profile: Profile,

    /// Load assumption tables from a CSV directory (overrides --profile)
    #[arg(long, value_name = "DIR")]
    assumptions: Option<PathBuf>,

    /// Also print the month-by-month repayment schedule for this term
    #[arg(long, value_name = "YEARS")]
    schedule: Option<u32>,

    /// Emit JSON instead of tables
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn flag_inputs(&self) -> FeasibilityInputs {
        FeasibilityInputs {
            current_tuition: self.current_tuition,
            tuition_period: self.tuition_period,
            charges_per_year: self.charges_per_year,
            program_years: self.program_years,
            annual_tuition_increase_pct: self.tuition_increase,
            annual_interest_rate_pct: self.interest_rate,
            expected_annual_salary: self.salary,
            monthly_cost_of_living: self.cost_of_living,
        }
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    report: &'a FeasibilityReport,
    residual_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    repayment_schedule: Option<Vec<AmortizationRow>>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let raw_inputs: FeasibilityInputs = match &cli.inputs {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Unable to read inputs file {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("Invalid inputs JSON in {}", path.display()))?
        }
        None => cli.flag_inputs(),
    };
    let inputs = raw_inputs.clamped();

    let assumptions = match &cli.assumptions {
        Some(dir) => Assumptions::from_csv_path(dir)
            .with_context(|| format!("Failed to load assumptions from {}", dir.display()))?,
        None => Assumptions::for_profile(cli.profile),
    };

    let engine = FeasibilityEngine::new(assumptions);
    let report = engine.evaluate(&inputs).context("Analysis failed")?;

    let schedule = cli
        .schedule
        .map(|term| engine.repayment_schedule(&report, term))
        .transpose()
        .context("Unable to build repayment schedule")?;

    let residual_message = report
        .summary
        .residual_tier
        .message(&engine.assumptions().residual);

    if cli.json {
        let output = JsonOutput {
            report: &report,
            residual_message,
            repayment_schedule: schedule,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_analysis(&report);
    print_summary(&report, &residual_message, engine.assumptions().ratio.moderate);
    if let Some(rows) = &schedule {
        print_schedule(rows);
    }

    Ok(())
}

/// `1234567.891` -> `$1,234,567.89`
fn currency(amount: f64) -> String {
    let formatted = format!("{:.2}", amount.abs());
    let (whole, cents) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}

fn print_analysis(report: &FeasibilityReport) {
    println!("Analysis Results");
    println!("================\n");
    println!(
        "Estimated total {}-year tuition cost: {}",
        report.inputs.program_years,
        currency(report.total_projected_tuition)
    );
    println!("Estimated monthly take-home pay: {}", currency(report.monthly_takehome()));
    println!();

    println!("{:>10} {:>16} {:>15} {:>14} {:>7}", "Term (Yrs)", "Monthly Payment", "% of Take-Home", "Tier", "Color");
    println!("{}", "-".repeat(66));
    for row in &report.rows {
        let ratio = row
            .payment_ratio_pct
            .map(|r| format!("{:.1}%", r))
            .unwrap_or_else(|| "n/a".to_string());
        println!(
            "{:>10} {:>16} {:>15} {:>14} {:>7}",
            row.term_years,
            currency(row.monthly_payment),
            ratio,
            row.tier.as_str(),
            row.tier.color(),
        );
    }
    println!("\nNote: table color coding is based on loan payment % of monthly take-home");
}

fn print_summary(report: &FeasibilityReport, residual_message: &str, moderate_pct: f64) {
    let summary = &report.summary;
    println!("\nFinancial Summary");
    println!("=================\n");
    println!("  Monthly take-home pay (after taxes + payroll): {}", currency(summary.monthly_takehome));
    println!("  Estimated cost of living: {}", currency(summary.monthly_cost_of_living));
    println!("  Lowest monthly payment: {}", currency(summary.lowest_monthly_payment));
    println!(
        "  Remaining monthly income: {} [{}]",
        currency(summary.residual_cash),
        summary.residual_tier.color()
    );
    match report.shortest_term_within(PaymentTier::Moderate) {
        Some(row) => println!(
            "  Shortest term at or under {:.1}% of take-home: {} years ({}/month)",
            moderate_pct,
            row.term_years,
            currency(row.monthly_payment)
        ),
        None => println!("  No term keeps the payment at or under {:.1}% of take-home", moderate_pct),
    }
    println!("\n{}", residual_banner(summary.residual_tier, residual_message));
}

/// `[WARNING] Caution: ...`
fn residual_banner(tier: ResidualTier, message: &str) -> String {
    format!("[{}] {}", tier.alert_level().as_str(), message)
}

fn print_schedule(rows: &[AmortizationRow]) {
    println!("\nRepayment Schedule ({} payments)", rows.len());
    println!("{:>5} {:>14} {:>12} {:>12} {:>12} {:>14}", "Month", "Opening", "Payment", "Interest", "Principal", "Closing");
    println!("{}", "-".repeat(74));
    for row in rows {
        println!(
            "{:>5} {:>14.2} {:>12.2} {:>12.2} {:>12.2} {:>14.2}",
            row.month, row.opening_balance, row.payment, row.interest, row.principal, row.closing_balance
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency() {
        assert_eq!(currency(86_202.5), "$86,202.50");
        assert_eq!(currency(693.6048), "$693.60");
        assert_eq!(currency(-8.4333), "-$8.43");
        assert_eq!(currency(1_234_567.891), "$1,234,567.89");
        assert_eq!(currency(0.0), "$0.00");
    }

    #[test]
    fn test_residual_banner_carries_alert_level() {
        assert_eq!(
            residual_banner(ResidualTier::Deficit, "Warning: Your estimated expenses exceed your take-home pay!"),
            "[ERROR] Warning: Your estimated expenses exceed your take-home pay!"
        );
        assert!(residual_banner(ResidualTier::Low, "Caution").starts_with("[WARNING]"));
        assert!(residual_banner(ResidualTier::Sustainable, "ok").starts_with("[SUCCESS]"));
    }

    #[test]
    fn test_cli_defaults_match_input_defaults() {
        let cli = Cli::parse_from(["degree-loan-feasibility"]);
        assert_eq!(cli.flag_inputs(), FeasibilityInputs::default());
        assert_eq!(cli.profile, Profile::Current);
    }

    #[test]
    fn test_cli_parses_period_and_profile() {
        let cli = Cli::parse_from([
            "degree-loan-feasibility",
            "--tuition-period",
            "per-year",
            "--profile",
            "legacy",
            "--salary",
            "72000",
        ]);
        assert_eq!(cli.tuition_period, TuitionPeriod::PerYear);
        assert_eq!(cli.profile, Profile::Legacy);
        assert_eq!(cli.flag_inputs().expected_annual_salary, 72_000.0);
    }
}
