//! Budget rollup aggregation: transactions summed into category, group, and
//! month totals.
//!
//! This is the single home for the actual/committed aggregation the app's
//! screens render; callers parameterize by category, group, or whole period
//! instead of re-deriving the sums per view.

use uuid::Uuid;

use crate::domain::category::{BudgetGroup, Category};
use crate::domain::rollup::{
    CategoryActivity, CategoryTotals, GroupTotals, MonthSummary, MonthTotals,
};
use crate::domain::transaction::Transaction;

pub struct RollupService;

impl RollupService {
    /// Sums one category's transactions into actual and committed buckets.
    ///
    /// No transaction counts toward both: paid kinds land in `actual`,
    /// pending ones in `committed`.
    pub fn category_activity(transactions: &[Transaction], category_id: Uuid) -> CategoryActivity {
        Self::bucket(transactions.iter().filter(|txn| txn.category_id == category_id))
    }

    /// Full per-category rollup restricted to the category's own period.
    pub fn category_totals(category: &Category, transactions: &[Transaction]) -> CategoryTotals {
        let activity = Self::bucket(transactions.iter().filter(|txn| {
            txn.category_id == category.id && txn.month_id == category.month_id
        }));
        CategoryTotals::from_parts(category, activity)
    }

    /// Sums projected and activity across all of a group's categories within
    /// one budget period.
    pub fn group_totals(
        categories: &[Category],
        transactions: &[Transaction],
        group: BudgetGroup,
        month_id: Uuid,
    ) -> GroupTotals {
        let mut projected = 0;
        let mut actual = 0;
        let mut committed = 0;
        for category in categories
            .iter()
            .filter(|cat| cat.group == group && cat.month_id == month_id)
        {
            let totals = Self::category_totals(category, transactions);
            projected += totals.projected;
            actual += totals.actual;
            committed += totals.committed;
        }
        GroupTotals::from_parts(group, projected, actual, committed)
    }

    /// Rolls a whole budget period up in one pass: month totals, a row for
    /// every budget group, and a row per category.
    pub fn month_summary(
        categories: &[Category],
        transactions: &[Transaction],
        month_id: Uuid,
    ) -> MonthSummary {
        let per_category: Vec<CategoryTotals> = categories
            .iter()
            .filter(|cat| cat.month_id == month_id)
            .map(|cat| Self::category_totals(cat, transactions))
            .collect();

        let per_group = BudgetGroup::ALL
            .iter()
            .map(|&group| {
                let mut projected = 0;
                let mut actual = 0;
                let mut committed = 0;
                for totals in per_category.iter().filter(|t| t.group == group) {
                    projected += totals.projected;
                    actual += totals.actual;
                    committed += totals.committed;
                }
                GroupTotals::from_parts(group, projected, actual, committed)
            })
            .collect();

        let mut projected = 0;
        let mut actual = 0;
        let mut committed = 0;
        for totals in &per_category {
            projected += totals.projected;
            actual += totals.actual;
            committed += totals.committed;
        }

        MonthSummary {
            month_id,
            totals: MonthTotals::from_parts(projected, actual, committed),
            per_group,
            per_category,
        }
    }

    fn bucket<'a>(transactions: impl Iterator<Item = &'a Transaction>) -> CategoryActivity {
        let mut activity = CategoryActivity::default();
        for txn in transactions {
            if txn.kind.is_paid() {
                activity.actual += txn.amount;
            } else {
                activity.committed += txn.amount;
            }
        }
        activity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transaction::TransactionKind;
    use chrono::NaiveDate;

    fn sample_date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, d).unwrap()
    }

    #[test]
    fn buckets_never_double_count() {
        let month = Uuid::new_v4();
        let category = Category::new("Groceries", month, BudgetGroup::Variable, 10_000);
        let transactions = vec![
            Transaction::new(category.id, month, 4_000, TransactionKind::Actual, sample_date(3)),
            Transaction::new(category.id, month, 1_500, TransactionKind::FuturePaid, sample_date(12)),
            Transaction::new(category.id, month, 3_000, TransactionKind::FuturePending, sample_date(20)),
        ];
        let activity = RollupService::category_activity(&transactions, category.id);
        assert_eq!(activity.actual, 5_500);
        assert_eq!(activity.committed, 3_000);
    }

    #[test]
    fn category_without_transactions_is_zeroed() {
        let month = Uuid::new_v4();
        let category = Category::new("Rent", month, BudgetGroup::Fixed, 50_000);
        let totals = RollupService::category_totals(&category, &[]);
        assert_eq!(totals.actual, 0);
        assert_eq!(totals.committed, 0);
        assert_eq!(totals.variance, 50_000);
        assert!(!totals.over_budget);
    }

    #[test]
    fn other_period_transactions_are_excluded() {
        let month = Uuid::new_v4();
        let other_month = Uuid::new_v4();
        let category = Category::new("Dining", month, BudgetGroup::Variable, 8_000);
        let transactions = vec![
            Transaction::new(category.id, month, 2_000, TransactionKind::Actual, sample_date(4)),
            Transaction::new(category.id, other_month, 9_999, TransactionKind::Actual, sample_date(4)),
        ];
        let totals = RollupService::category_totals(&category, &transactions);
        assert_eq!(totals.actual, 2_000);
    }
}
