//! Dashboard composition over the three engines.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::services::{
    DebtOverview, DebtService, GoalOverview, GoalService, RollupService,
};
use crate::domain::category::Category;
use crate::domain::debt::Debt;
use crate::domain::goal::SavingsGoal;
use crate::domain::rollup::MonthSummary;
use crate::domain::transaction::Transaction;

/// Everything a dashboard screen renders for one budget period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardReport {
    pub month: MonthSummary,
    pub debts: DebtOverview,
    pub goals: GoalOverview,
}

pub struct ReportService;

impl ReportService {
    /// Composes the month rollup, debt overview, and goal overview that the
    /// dashboard renders together. Pure composition over one snapshot; the
    /// engines share no data between them.
    pub fn dashboard(
        categories: &[Category],
        transactions: &[Transaction],
        debts: &[Debt],
        goals: &[SavingsGoal],
        month_id: Uuid,
        today: NaiveDate,
    ) -> DashboardReport {
        DashboardReport {
            month: RollupService::month_summary(categories, transactions, month_id),
            debts: DebtService::overview(debts, today),
            goals: GoalService::overview(goals, today),
        }
    }
}
