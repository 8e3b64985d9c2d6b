use budget_engine::core::services::DebtService;
use budget_engine::domain::calendar::add_months;
use budget_engine::domain::{Debt, DebtProjection};
use chrono::NaiveDate;

fn sample_date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn today() -> NaiveDate {
    sample_date(2026, 8, 1)
}

#[test]
fn projects_convergent_card_in_low_double_digit_months() {
    let debt = Debt::new("Credit card", 100_000, 100_000, 0.24, 10_000);
    let projection = DebtService::project(&debt, today()).expect("projects");

    let DebtProjection::Finite {
        months_to_payoff,
        total_interest,
        payoff_date,
        milestones,
    } = &projection
    else {
        panic!("expected finite projection, got {:?}", projection);
    };

    assert_eq!(*months_to_payoff, 12);
    assert_eq!(*payoff_date, add_months(today(), 12));
    assert!(*total_interest > 0);
    // Interest can never exceed what was paid beyond the principal.
    assert!(
        *total_interest
            < i64::from(*months_to_payoff) * debt.monthly_payment - debt.current_balance
    );

    // The full-payoff milestone lands on the payoff month.
    let last = milestones.last().expect("milestones recorded");
    assert_eq!(last.threshold, 100);
    assert_eq!(last.label, "Fully paid");
    assert_eq!(last.reached, *payoff_date);
}

#[test]
fn projected_months_actually_clear_the_balance() {
    let debt = Debt::new("Credit card", 100_000, 100_000, 0.24, 10_000);
    let months = DebtService::project(&debt, today())
        .expect("projects")
        .months_to_payoff()
        .expect("finite");

    let rate = debt.apr / 12.0;
    let mut balance = debt.current_balance as f64;
    for _ in 0..months {
        balance += balance * rate;
        balance -= debt.monthly_payment as f64;
    }
    assert!(balance <= 0.0, "balance {balance} not cleared after {months} months");
}

#[test]
fn milestones_are_ordered_and_deduplicated() {
    let debt = Debt::new("Credit card", 100_000, 100_000, 0.24, 10_000);
    let projection = DebtService::project(&debt, today()).expect("projects");
    let milestones = projection.milestones();

    assert_eq!(milestones.len(), 4);
    for pair in milestones.windows(2) {
        assert!(pair[0].threshold < pair[1].threshold);
        assert!(pair[0].reached < pair[1].reached);
    }
}

#[test]
fn partially_paid_debt_skips_no_reached_threshold() {
    // Already 60% paid: the 25% and 50% marks were crossed before today and
    // are recorded at the first projected month.
    let debt = Debt::new("Old loan", 40_000, 100_000, 0.12, 5_000);
    let projection = DebtService::project(&debt, today()).expect("projects");
    let milestones = projection.milestones();

    let thresholds: Vec<u8> = milestones.iter().map(|m| m.threshold).collect();
    assert_eq!(thresholds, vec![25, 50, 75, 100]);
    assert_eq!(milestones[0].reached, add_months(today(), 1));
    assert_eq!(milestones[1].reached, add_months(today(), 1));
}

#[test]
fn non_convergent_payment_returns_sentinel_variant() {
    // 1,500 < 100,000 * 0.02 monthly interest.
    let debt = Debt::new("Credit card", 100_000, 100_000, 0.24, 1_500);
    let projection = DebtService::project(&debt, today()).expect("projects");

    assert_eq!(projection, DebtProjection::NonConvergent);
    assert!(!projection.is_convergent());
    assert_eq!(projection.months_to_payoff(), None);
    assert_eq!(projection.total_interest(), None);
    assert_eq!(projection.payoff_label(), "never");
    assert!(projection.milestones().is_empty());
}

#[test]
fn payment_exactly_matching_interest_never_converges() {
    let debt = Debt::new("Credit card", 100_000, 100_000, 0.24, 2_000);
    let projection = DebtService::project(&debt, today()).expect("projects");
    assert_eq!(projection, DebtProjection::NonConvergent);
}

#[test]
fn barely_convergent_payment_stays_finite() {
    let debt = Debt::new("Credit card", 100_000, 100_000, 0.24, 2_001);
    let projection = DebtService::project(&debt, today()).expect("projects");
    let months = projection.months_to_payoff().expect("finite");
    assert!(months >= 1);
}

#[test]
fn settled_debt_reports_current_month() {
    let debt = Debt::new("Paid-off card", -250, 80_000, 0.24, 4_000);
    let projection = DebtService::project(&debt, today()).expect("projects");
    assert_eq!(projection, DebtProjection::Settled { as_of: today() });
    assert_eq!(projection.payoff_label(), "Aug 2026");
}

#[test]
fn simulating_the_current_payment_changes_nothing() {
    let debt = Debt::new("Credit card", 100_000, 100_000, 0.24, 10_000);
    let simulation = DebtService::simulate(&debt, 10_000, today()).expect("simulates");
    assert_eq!(simulation.months_saved, 0);
    assert_eq!(simulation.interest_saved, 0);
}

#[test]
fn larger_payment_saves_months_and_interest() {
    let debt = Debt::new("Credit card", 100_000, 100_000, 0.24, 10_000);
    let simulation = DebtService::simulate(&debt, 20_000, today()).expect("simulates");
    assert_eq!(simulation.months_saved, 6);
    assert!(simulation.interest_saved > 0);
    assert_eq!(simulation.candidate.months_to_payoff(), Some(6));
}

#[test]
fn non_convergent_baseline_reports_zero_deltas() {
    let debt = Debt::new("Credit card", 100_000, 100_000, 0.24, 1_500);
    let simulation = DebtService::simulate(&debt, 10_000, today()).expect("simulates");

    // The candidate itself converges, but there is no finite baseline to
    // compare against.
    assert!(simulation.candidate.is_convergent());
    assert_eq!(simulation.months_saved, 0);
    assert_eq!(simulation.interest_saved, 0);
}

#[test]
fn simulate_many_preserves_candidate_order() {
    let debt = Debt::new("Credit card", 100_000, 100_000, 0.24, 10_000);
    let simulations =
        DebtService::simulate_many(&debt, &[5_000, 10_000, 20_000], today()).expect("simulates");

    let candidates: Vec<i64> = simulations.iter().map(|s| s.candidate_payment).collect();
    assert_eq!(candidates, vec![5_000, 10_000, 20_000]);
    assert!(simulations[0].months_saved < 0);
    assert_eq!(simulations[1].months_saved, 0);
    assert!(simulations[2].months_saved > 0);
}

#[test]
fn projection_round_trips_through_serde() {
    let debt = Debt::new("Credit card", 100_000, 100_000, 0.24, 10_000);
    let projection = DebtService::project(&debt, today()).expect("projects");
    let json = serde_json::to_string(&projection).expect("serializes");
    let back: DebtProjection = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(back, projection);
}
