//! Domain records consumed by the engines and the computed result types
//! they return.

pub mod calendar;
pub mod category;
pub mod common;
pub mod debt;
pub mod goal;
pub mod rollup;
pub mod transaction;

pub use category::{BudgetGroup, Category};
pub use debt::{Debt, DebtProjection, Milestone, PaymentSimulation, MILESTONE_THRESHOLDS};
pub use goal::{GoalOutlook, GoalRecurrence, GoalStatus, SavingsGoal};
pub use rollup::{
    percent_used, CategoryActivity, CategoryTotals, GroupTotals, MonthSummary, MonthTotals,
};
pub use transaction::{Transaction, TransactionKind};
