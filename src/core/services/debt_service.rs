//! Debt amortization projection and what-if payment simulation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::calendar::add_months;
use crate::domain::debt::{
    Debt, DebtProjection, Milestone, PaymentSimulation, MILESTONE_THRESHOLDS,
};
use crate::errors::{EngineError, EngineResult};

/// Aggregate view across every tracked debt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtOverview {
    pub total_balance: i64,
    pub total_original: i64,
    pub total_monthly_payment: i64,
    pub overall_percent_paid: f64,
    pub standings: Vec<DebtStanding>,
    /// Debts excluded from the report because their records failed
    /// validation.
    pub skipped: usize,
}

/// One debt's place in the overview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtStanding {
    pub debt_id: Uuid,
    pub name: String,
    pub percent_paid: f64,
    pub projection: DebtProjection,
}

pub struct DebtService;

impl DebtService {
    /// Projects the amortization schedule for `debt` as of `today`.
    pub fn project(debt: &Debt, today: NaiveDate) -> EngineResult<DebtProjection> {
        Self::project_with_payment(debt, debt.monthly_payment, today)
    }

    /// Projects with an explicit payment amount instead of the recorded one.
    pub fn project_with_payment(
        debt: &Debt,
        payment: i64,
        today: NaiveDate,
    ) -> EngineResult<DebtProjection> {
        if debt.original_balance <= 0 {
            return Err(EngineError::InvalidInput(format!(
                "debt `{}` has no positive original balance",
                debt.name
            )));
        }
        // Settled wins over the convergence test so a cleared debt with a
        // zero payment is not reported non-convergent.
        if debt.current_balance <= 0 {
            return Ok(DebtProjection::Settled { as_of: today });
        }
        let payment = if payment < 0 {
            warn!("negative payment clamped to zero for debt `{}`", debt.name);
            0
        } else {
            payment
        };

        let balance = debt.current_balance as f64;
        let monthly_rate = debt.apr / 12.0;
        if payment as f64 <= balance * monthly_rate {
            debug!(
                "debt `{}` payment {} does not cover monthly interest",
                debt.name, payment
            );
            return Ok(DebtProjection::NonConvergent);
        }

        // The annuity closed form is undefined at a zero rate; an
        // interest-free balance divides out directly.
        let months_to_payoff = if monthly_rate > 0.0 {
            let ratio = monthly_rate * balance / payment as f64;
            (-(1.0 - ratio).ln() / (1.0 + monthly_rate).ln()).ceil() as u32
        } else {
            (balance / payment as f64).ceil() as u32
        };

        let (total_interest, milestones) =
            Self::amortize(debt, payment as f64, monthly_rate, months_to_payoff, today);

        Ok(DebtProjection::Finite {
            months_to_payoff,
            total_interest,
            payoff_date: add_months(today, months_to_payoff as i32),
            milestones,
        })
    }

    /// What-if simulation against an alternate payment amount.
    ///
    /// Deltas are baseline minus candidate, so positive numbers mean the
    /// candidate pays off sooner and accrues less interest. When either side
    /// has no finite payoff the deltas are 0; there is no meaningful
    /// comparison against a non-convergent schedule.
    pub fn simulate(
        debt: &Debt,
        candidate_payment: i64,
        today: NaiveDate,
    ) -> EngineResult<PaymentSimulation> {
        let baseline = Self::project(debt, today)?;
        let candidate = Self::project_with_payment(debt, candidate_payment, today)?;

        let (months_saved, interest_saved) = match (&baseline, &candidate) {
            (
                DebtProjection::Finite {
                    months_to_payoff: base_months,
                    total_interest: base_interest,
                    ..
                },
                DebtProjection::Finite {
                    months_to_payoff: cand_months,
                    total_interest: cand_interest,
                    ..
                },
            ) => (
                i64::from(*base_months) - i64::from(*cand_months),
                base_interest - cand_interest,
            ),
            _ => (0, 0),
        };

        Ok(PaymentSimulation {
            candidate_payment,
            months_saved,
            interest_saved,
            candidate,
        })
    }

    /// Runs [`Self::simulate`] for each candidate, preserving order.
    pub fn simulate_many(
        debt: &Debt,
        candidates: &[i64],
        today: NaiveDate,
    ) -> EngineResult<Vec<PaymentSimulation>> {
        candidates
            .iter()
            .map(|&candidate| Self::simulate(debt, candidate, today))
            .collect()
    }

    /// Rolls every debt into one report. Records that fail validation are
    /// counted in `skipped` instead of failing the whole overview.
    pub fn overview(debts: &[Debt], today: NaiveDate) -> DebtOverview {
        let mut overview = DebtOverview {
            total_balance: 0,
            total_original: 0,
            total_monthly_payment: 0,
            overall_percent_paid: 0.0,
            standings: Vec::with_capacity(debts.len()),
            skipped: 0,
        };
        for debt in debts {
            match Self::project(debt, today) {
                Ok(projection) => {
                    overview.total_balance += debt.current_balance.max(0);
                    overview.total_original += debt.original_balance;
                    overview.total_monthly_payment += debt.monthly_payment.max(0);
                    overview.standings.push(DebtStanding {
                        debt_id: debt.id,
                        name: debt.name.clone(),
                        percent_paid: debt.percent_paid(),
                        projection,
                    });
                }
                Err(err) => {
                    warn!("debt `{}` excluded from overview: {}", debt.name, err);
                    overview.skipped += 1;
                }
            }
        }
        if overview.total_original > 0 {
            overview.overall_percent_paid = (overview.total_original - overview.total_balance)
                as f64
                / overview.total_original as f64
                * 100.0;
        }
        overview
    }

    fn amortize(
        debt: &Debt,
        payment: f64,
        monthly_rate: f64,
        months: u32,
        today: NaiveDate,
    ) -> (i64, Vec<Milestone>) {
        let original = debt.original_balance as f64;
        let mut balance = debt.current_balance as f64;
        let mut total_interest = 0.0;
        let mut milestones: Vec<Milestone> = Vec::new();

        for iteration in 0..months {
            if balance <= 0.0 {
                break;
            }
            let interest = balance * monthly_rate;
            let principal = (payment - interest).min(balance);
            total_interest += interest;
            balance -= principal;

            let percent_paid = (original - balance.max(0.0)) / original * 100.0;
            for threshold in MILESTONE_THRESHOLDS {
                if milestones.iter().any(|m| m.threshold == threshold) {
                    continue;
                }
                if percent_paid >= f64::from(threshold) {
                    milestones.push(Milestone::new(threshold, add_months(today, iteration as i32 + 1)));
                }
            }
        }

        // Intermediate balances stay fractional; only the accumulated
        // interest is rounded, once.
        (total_interest.round() as i64, milestones)
    }
}
