pub mod debt_service;
pub mod goal_service;
pub mod report_service;
pub mod rollup_service;

pub use debt_service::{DebtOverview, DebtService, DebtStanding};
pub use goal_service::{GoalOverview, GoalService};
pub use report_service::{DashboardReport, ReportService};
pub use rollup_service::RollupService;
