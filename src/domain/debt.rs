//! Domain types for tracked debts and their amortization projections.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::calendar::month_label;
use crate::domain::common::{Displayable, Identifiable, NamedEntity};

/// Percent-paid thresholds recorded as milestones, in reporting order.
pub const MILESTONE_THRESHOLDS: [u8; 4] = [25, 50, 75, 100];

/// Snapshot of a tracked debt handed to the projection engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debt {
    pub id: Uuid,
    pub name: String,
    pub current_balance: i64,
    /// Balance at origination; the 0%-paid baseline for milestones.
    pub original_balance: i64,
    /// Annual percentage rate as a decimal fraction (0.24 = 24%/yr).
    pub apr: f64,
    pub monthly_payment: i64,
}

impl Debt {
    pub fn new(
        name: impl Into<String>,
        current_balance: i64,
        original_balance: i64,
        apr: f64,
        monthly_payment: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            current_balance,
            original_balance,
            apr,
            monthly_payment,
        }
    }

    /// Fraction of the original balance already paid down, as a percentage.
    pub fn percent_paid(&self) -> f64 {
        if self.original_balance <= 0 {
            return 0.0;
        }
        let remaining = self.current_balance.max(0) as f64;
        (self.original_balance as f64 - remaining) / self.original_balance as f64 * 100.0
    }
}

impl Identifiable for Debt {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Debt {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Debt {
    fn display_label(&self) -> String {
        format!("{} ({:.0}% paid)", self.name, self.percent_paid())
    }
}

/// A percent-paid threshold with the projected month it is first reached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Milestone {
    pub threshold: u8,
    pub reached: NaiveDate,
    pub label: String,
}

impl Milestone {
    pub fn new(threshold: u8, reached: NaiveDate) -> Self {
        let label = if threshold >= 100 {
            "Fully paid".to_string()
        } else {
            format!("{}% paid", threshold)
        };
        Self {
            threshold,
            reached,
            label,
        }
    }
}

/// Outcome of projecting a debt's amortization schedule.
///
/// Non-payoff regimes are explicit variants rather than numeric sentinels so
/// they cannot leak into downstream arithmetic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DebtProjection {
    /// The balance is already cleared.
    Settled { as_of: NaiveDate },
    Finite {
        months_to_payoff: u32,
        total_interest: i64,
        payoff_date: NaiveDate,
        milestones: Vec<Milestone>,
    },
    /// The payment does not cover accruing interest; the balance never falls.
    NonConvergent,
}

impl DebtProjection {
    pub fn is_convergent(&self) -> bool {
        !matches!(self, DebtProjection::NonConvergent)
    }

    pub fn months_to_payoff(&self) -> Option<u32> {
        match self {
            DebtProjection::Settled { .. } => Some(0),
            DebtProjection::Finite {
                months_to_payoff, ..
            } => Some(*months_to_payoff),
            DebtProjection::NonConvergent => None,
        }
    }

    pub fn total_interest(&self) -> Option<i64> {
        match self {
            DebtProjection::Settled { .. } => Some(0),
            DebtProjection::Finite { total_interest, .. } => Some(*total_interest),
            DebtProjection::NonConvergent => None,
        }
    }

    pub fn payoff_date(&self) -> Option<NaiveDate> {
        match self {
            DebtProjection::Settled { as_of } => Some(*as_of),
            DebtProjection::Finite { payoff_date, .. } => Some(*payoff_date),
            DebtProjection::NonConvergent => None,
        }
    }

    pub fn milestones(&self) -> &[Milestone] {
        match self {
            DebtProjection::Finite { milestones, .. } => milestones,
            _ => &[],
        }
    }

    /// Month/year label for the payoff, or `"never"` for a non-convergent debt.
    pub fn payoff_label(&self) -> String {
        match self.payoff_date() {
            Some(date) => month_label(date),
            None => "never".to_string(),
        }
    }
}

/// Delta between the current payment plan and a candidate payment amount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentSimulation {
    pub candidate_payment: i64,
    /// Positive means the candidate pays off sooner.
    pub months_saved: i64,
    /// Positive means the candidate accrues less interest.
    pub interest_saved: i64,
    pub candidate: DebtProjection,
}
