//! Domain types representing budget categories and their groups.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable, NamedEntity};

/// Fixed enumeration of budget groups a category belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BudgetGroup {
    Income,
    Fixed,
    Variable,
    Savings,
    Debt,
}

impl BudgetGroup {
    pub const ALL: [BudgetGroup; 5] = [
        BudgetGroup::Income,
        BudgetGroup::Fixed,
        BudgetGroup::Variable,
        BudgetGroup::Savings,
        BudgetGroup::Debt,
    ];
}

impl fmt::Display for BudgetGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BudgetGroup::Income => "Income",
            BudgetGroup::Fixed => "Fixed",
            BudgetGroup::Variable => "Variable",
            BudgetGroup::Savings => "Savings",
            BudgetGroup::Debt => "Debt",
        };
        f.write_str(label)
    }
}

/// A budgeted category inside one monthly budget period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    /// Budget period this category belongs to.
    pub month_id: Uuid,
    pub name: String,
    pub group: BudgetGroup,
    /// Budgeted amount for the period.
    pub projected: i64,
}

impl Category {
    pub fn new(
        name: impl Into<String>,
        month_id: Uuid,
        group: BudgetGroup,
        projected: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            month_id,
            name: name.into(),
            group,
            projected,
        }
    }
}

impl Identifiable for Category {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Category {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Category {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.group)
    }
}
