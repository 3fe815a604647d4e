//! End-to-end checks against the public API

use approx::assert_relative_eq;

use degree_loan_feasibility::{
    evaluate, monthly_payment, monthly_takehome, project_total, tier_for_payment_ratio,
    tier_for_residual_cash, Assumptions, FeasibilityEngine, FeasibilityError, FeasibilityInputs,
    PaymentTier, Profile, ResidualTier, ScenarioRunner, TuitionPeriod,
};

#[test]
fn zero_rate_payment_is_exact() {
    for principal in [0.0, 1.0, 9_999.99, 86_202.5, 250_000.0] {
        for term in 1..=50 {
            let payment = monthly_payment(principal, 0.0, term).unwrap();
            assert_eq!(payment, principal / (term * 12) as f64);
        }
    }
}

#[test]
fn positive_rate_repays_at_least_principal() {
    for rate in [0.005, 0.03, 0.068, 0.09, 0.2, 0.5] {
        for term in [1, 5, 10, 30, 50] {
            let payment = monthly_payment(40_000.0, rate, term).unwrap();
            assert!(payment * (term * 12) as f64 >= 40_000.0);
        }
    }
}

#[test]
fn tuition_projection_properties() {
    for years in 1..=10 {
        assert_eq!(project_total(8_000.0, 2, 0.0, years).unwrap(), 8_000.0 * 2.0 * years as f64);
    }
    assert_eq!(project_total(8_000.0, 2, 0.07, 1).unwrap(), 16_000.0);
    assert_relative_eq!(project_total(10_000.0, 2, 0.05, 4).unwrap(), 86_202.50, epsilon = 1e-6);
}

#[test]
fn takehome_reference_points() {
    assert_eq!(monthly_takehome(0.0), 0.0);
    assert_relative_eq!(monthly_takehome(50_000.0), 3_185.17, epsilon = 0.005);
}

#[test]
fn reference_payment() {
    assert_relative_eq!(monthly_payment(86_152.50, 0.09, 10).unwrap(), 1_091.34, epsilon = 0.005);
}

#[test]
fn classifier_reference_points() {
    assert_eq!(tier_for_residual_cash(-50.0), ResidualTier::Deficit);
    assert_eq!(tier_for_residual_cash(399.99), ResidualTier::VeryLow);
    assert_eq!(tier_for_residual_cash(1_000.0), ResidualTier::Sustainable);
    assert_eq!(tier_for_payment_ratio(12.0), PaymentTier::Comfortable);
    assert_eq!(tier_for_payment_ratio(75.0), PaymentTier::Unsustainable);
}

#[test]
fn pipeline_is_idempotent() {
    let inputs = FeasibilityInputs {
        current_tuition: 14_250.0,
        tuition_period: TuitionPeriod::PerSemester,
        charges_per_year: 3,
        program_years: 5,
        annual_tuition_increase_pct: 3.25,
        annual_interest_rate_pct: 7.1,
        expected_annual_salary: 67_300.0,
        monthly_cost_of_living: 2_150.0,
    };
    let first = evaluate(&inputs).unwrap();
    let second = evaluate(&inputs).unwrap();
    assert_eq!(first, second);

    let a = serde_json::to_string(&first).unwrap();
    let b = serde_json::to_string(&second).unwrap();
    assert_eq!(a, b);
}

#[test]
fn rows_follow_configured_terms() {
    let report = FeasibilityEngine::new(Assumptions::for_profile(Profile::Legacy))
        .evaluate(&FeasibilityInputs::default())
        .unwrap();
    let terms: Vec<u32> = report.rows.iter().map(|r| r.term_years).collect();
    assert_eq!(terms, vec![5, 10, 15, 20, 25, 30, 35, 40, 45, 50]);

    // Payments fall as the term lengthens
    assert!(report.rows.windows(2).all(|w| w[1].monthly_payment < w[0].monthly_payment));
    assert_eq!(
        report.summary.lowest_monthly_payment,
        (report.rows.last().unwrap().monthly_payment * 100.0).round() / 100.0
    );
}

#[test]
fn csv_assumptions_match_builtin() {
    let runner = ScenarioRunner::from_csv().expect("Failed to load assumptions");
    let from_csv = runner.run(&FeasibilityInputs::default()).unwrap();
    let builtin = evaluate(&FeasibilityInputs::default()).unwrap();
    assert_eq!(from_csv, builtin);
}

#[test]
fn clamped_inputs_always_evaluate() {
    let wild = FeasibilityInputs {
        current_tuition: -100.0,
        charges_per_year: 0,
        program_years: 0,
        annual_tuition_increase_pct: -3.0,
        annual_interest_rate_pct: 99.0,
        expected_annual_salary: -1.0,
        monthly_cost_of_living: -1.0,
        ..Default::default()
    };
    assert!(matches!(evaluate(&wild), Err(FeasibilityError::InvalidInput { .. })));

    let report = evaluate(&wild.clamped()).unwrap();
    assert_eq!(report.total_projected_tuition, 0.0);
    assert_eq!(report.summary.residual_tier, ResidualTier::VeryLow);
}

#[test]
fn sample_scenarios_batch() {
    let scenarios = degree_loan_feasibility::inputs::load_scenarios(
        degree_loan_feasibility::inputs::loader::DEFAULT_SCENARIOS_PATH,
    )
    .unwrap();
    let outcomes = ScenarioRunner::new().run_batch(&scenarios);
    assert_eq!(outcomes.len(), scenarios.len());
    assert!(outcomes.iter().all(|o| o.report.is_ok()));

    let no_salary = outcomes.iter().find(|o| o.name == "no salary yet").unwrap();
    let report = no_salary.report.as_ref().unwrap();
    assert!(report.rows.iter().all(|r| r.tier == PaymentTier::Unsustainable));
}
