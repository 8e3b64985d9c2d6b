//! Computed rollup results for categories, groups, and whole budget periods.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::category::{BudgetGroup, Category};

/// Percent of budget consumed; exactly 0 when nothing is budgeted.
///
/// Every percent-used figure in the crate goes through this helper so a zero
/// projected amount can never surface as NaN or infinity.
pub fn percent_used(actual: i64, projected: i64) -> f64 {
    if projected <= 0 {
        return 0.0;
    }
    actual as f64 / projected as f64 * 100.0
}

/// Raw actual/committed sums for one category.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryActivity {
    /// Sum of paid transactions (actual and future-paid).
    pub actual: i64,
    /// Sum of future, unpaid obligations.
    pub committed: i64,
}

/// Per-category rollup with derived budget figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryTotals {
    pub category_id: Uuid,
    pub name: String,
    pub group: BudgetGroup,
    pub projected: i64,
    pub actual: i64,
    pub committed: i64,
    /// `projected - actual`; positive means under budget.
    pub variance: i64,
    pub percent_used: f64,
    /// Only set when a positive budget was exceeded; a zero-budget category
    /// is never flagged over.
    pub over_budget: bool,
}

impl CategoryTotals {
    pub fn from_parts(category: &Category, activity: CategoryActivity) -> Self {
        let projected = category.projected;
        let actual = activity.actual;
        Self {
            category_id: category.id,
            name: category.name.clone(),
            group: category.group,
            projected,
            actual,
            committed: activity.committed,
            variance: projected - actual,
            percent_used: percent_used(actual, projected),
            over_budget: projected > 0 && actual > projected,
        }
    }
}

/// Per-group rollup within one budget period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupTotals {
    pub group: BudgetGroup,
    pub projected: i64,
    pub actual: i64,
    pub committed: i64,
    /// `projected - actual`.
    pub remaining: i64,
    pub percent_used: f64,
}

impl GroupTotals {
    pub fn from_parts(group: BudgetGroup, projected: i64, actual: i64, committed: i64) -> Self {
        Self {
            group,
            projected,
            actual,
            committed,
            remaining: projected - actual,
            percent_used: percent_used(actual, projected),
        }
    }
}

/// Month-level totals across every category in the period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthTotals {
    pub projected: i64,
    pub actual: i64,
    pub committed: i64,
    /// `projected - actual`.
    pub remaining: i64,
    pub percent_used: f64,
}

impl MonthTotals {
    pub fn from_parts(projected: i64, actual: i64, committed: i64) -> Self {
        Self {
            projected,
            actual,
            committed,
            remaining: projected - actual,
            percent_used: percent_used(actual, projected),
        }
    }
}

/// One budget period rolled up in a single pass: month totals, every group,
/// every category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthSummary {
    pub month_id: Uuid,
    pub totals: MonthTotals,
    pub per_group: Vec<GroupTotals>,
    pub per_category: Vec<CategoryTotals>,
}
