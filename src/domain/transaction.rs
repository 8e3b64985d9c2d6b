//! Domain types representing logged transactions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::Identifiable;

/// How a transaction counts against its category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransactionKind {
    /// Money already spent.
    Actual,
    /// Future-dated entry the user marked as paid.
    FuturePaid,
    /// Future, unpaid obligation.
    FuturePending,
}

impl TransactionKind {
    /// Paid kinds roll into the `actual` bucket; pending ones into `committed`.
    pub fn is_paid(&self) -> bool {
        matches!(self, TransactionKind::Actual | TransactionKind::FuturePaid)
    }
}

/// A logged transaction inside one budget period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub category_id: Uuid,
    /// Budget period this transaction was logged against.
    pub month_id: Uuid,
    pub amount: i64,
    pub kind: TransactionKind,
    pub date: NaiveDate,
}

impl Transaction {
    pub fn new(
        category_id: Uuid,
        month_id: Uuid,
        amount: i64,
        kind: TransactionKind,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            category_id,
            month_id,
            amount,
            kind,
            date,
        }
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> Uuid {
        self.id
    }
}
