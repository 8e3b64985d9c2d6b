//! Domain types for savings goals and their funding outlook.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable, NamedEntity};

/// Snapshot of a savings goal handed to the funding engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: Uuid,
    pub name: String,
    pub target_amount: i64,
    pub current_balance: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,
    #[serde(default)]
    pub recurrence: GoalRecurrence,
}

impl SavingsGoal {
    pub fn new(name: impl Into<String>, target_amount: i64, current_balance: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            target_amount,
            current_balance,
            target_date: None,
            recurrence: GoalRecurrence::OneOff,
        }
    }

    pub fn with_target_date(mut self, target_date: NaiveDate) -> Self {
        self.target_date = Some(target_date);
        self
    }

    pub fn with_recurrence(mut self, recurrence: GoalRecurrence) -> Self {
        self.recurrence = recurrence;
        self
    }

    /// Fraction funded, where `1.0` means fully funded.
    pub fn fraction_funded(&self) -> f64 {
        if self.target_amount <= 0 {
            return 0.0;
        }
        self.current_balance as f64 / self.target_amount as f64
    }

    /// Amount still missing; negative when overfunded.
    pub fn shortfall(&self) -> i64 {
        self.target_amount - self.current_balance
    }
}

impl Identifiable for SavingsGoal {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for SavingsGoal {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for SavingsGoal {
    fn display_label(&self) -> String {
        format!("{} ({:.0}%)", self.name, self.fraction_funded() * 100.0)
    }
}

/// How a goal repeats once reached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum GoalRecurrence {
    #[default]
    OneOff,
    Annual,
    CustomMonths(u32),
    /// Open-ended saving with no completion semantics.
    Ongoing,
}

impl GoalRecurrence {
    /// Cycle length in months, when the goal repeats on a fixed cadence.
    pub fn cycle_months(&self) -> Option<u32> {
        match self {
            GoalRecurrence::Annual => Some(12),
            GoalRecurrence::CustomMonths(months) => Some(*months),
            GoalRecurrence::OneOff | GoalRecurrence::Ongoing => None,
        }
    }
}

/// Funding-health classification, recomputed from the snapshot on every call.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GoalStatus {
    OnTrack,
    Behind,
    AtRisk,
    Complete,
    Ongoing,
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GoalStatus::OnTrack => "On track",
            GoalStatus::Behind => "Behind",
            GoalStatus::AtRisk => "At risk",
            GoalStatus::Complete => "Complete",
            GoalStatus::Ongoing => "Ongoing",
        };
        f.write_str(label)
    }
}

/// Combined per-goal record a dashboard renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalOutlook {
    pub goal_id: Uuid,
    pub name: String,
    pub status: GoalStatus,
    /// Contribution needed per month to land on the target date; `<= 0`
    /// means no further contribution is required.
    pub monthly_required: i64,
    /// Fraction funded, where `1.0` means fully funded.
    pub percent_funded: f64,
}
