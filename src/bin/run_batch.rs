//! Run feasibility analyses for every scenario in a CSV file
//!
//! Writes one output line per scenario and loan term

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use serde::Serialize;

use degree_loan_feasibility::{
    inputs::{load_scenarios, loader::DEFAULT_SCENARIOS_PATH, Scenario},
    scenario::ScenarioRunner,
    Profile, ResidualTier,
};

#[derive(Parser, Debug)]
#[command(name = "run_batch", about = "Evaluate a file of loan feasibility scenarios")]
struct Args {
    /// Scenarios CSV
    #[arg(default_value = DEFAULT_SCENARIOS_PATH)]
    scenarios: PathBuf,

    /// Output CSV
    #[arg(short, long, default_value = "batch_feasibility_output.csv")]
    output: PathBuf,

    /// Built-in assumption profile: current or legacy
    #[arg(long, default_value = "current")]
    profile: Profile,

    /// Load assumption tables from a CSV directory (overrides --profile)
    #[arg(long, value_name = "DIR")]
    assumptions: Option<PathBuf>,
}

/// One scenario x term line of the output file
#[derive(Debug, Serialize)]
struct OutputRow<'a> {
    scenario: &'a str,
    total_tuition: f64,
    monthly_takehome: f64,
    term_years: u32,
    monthly_payment: f64,
    payment_ratio_pct: Option<f64>,
    payment_tier: &'static str,
    lowest_monthly_payment: f64,
    residual_cash: f64,
    residual_tier: &'static str,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    println!("Loading scenarios from {}...", args.scenarios.display());

    let scenarios: Vec<Scenario> = load_scenarios(&args.scenarios)
        .with_context(|| format!("Failed to load scenarios from {}", args.scenarios.display()))?
        .into_iter()
        .map(|s| Scenario {
            inputs: s.inputs.clamped(),
            ..s
        })
        .collect();
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let runner = match &args.assumptions {
        Some(dir) => ScenarioRunner::from_csv_path(dir)
            .with_context(|| format!("Failed to load assumptions from {}", dir.display()))?,
        None => ScenarioRunner::for_profile(args.profile),
    };

    let eval_start = Instant::now();
    let outcomes = runner.run_batch(&scenarios);
    info!("Evaluations complete in {:?}", eval_start.elapsed());

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;

    let mut failed = 0;
    let mut tier_counts = [0usize; 4];

    for outcome in &outcomes {
        let report = match &outcome.report {
            Ok(report) => report,
            Err(e) => {
                warn!("Scenario {} failed: {}", outcome.name, e);
                failed += 1;
                continue;
            }
        };

        let slot = match report.summary.residual_tier {
            ResidualTier::Sustainable => 0,
            ResidualTier::Low => 1,
            ResidualTier::VeryLow => 2,
            ResidualTier::Deficit => 3,
        };
        tier_counts[slot] += 1;

        for row in &report.rows {
            writer.serialize(OutputRow {
                scenario: &outcome.name,
                total_tuition: report.total_projected_tuition,
                monthly_takehome: report.monthly_takehome(),
                term_years: row.term_years,
                monthly_payment: row.monthly_payment,
                payment_ratio_pct: row.payment_ratio_pct,
                payment_tier: row.tier.as_str(),
                lowest_monthly_payment: report.summary.lowest_monthly_payment,
                residual_cash: report.summary.residual_cash,
                residual_tier: report.summary.residual_tier.as_str(),
            })?;
        }
    }
    writer.flush()?;

    println!("Output written to {}", args.output.display());

    println!("\nBatch Summary:");
    println!("  Scenarios:   {}", outcomes.len());
    println!("  Failed:      {}", failed);
    println!("  Sustainable: {}", tier_counts[0]);
    println!("  Low:         {}", tier_counts[1]);
    println!("  Very low:    {}", tier_counts[2]);
    println!("  Deficit:     {}", tier_counts[3]);

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
