//! Projection calculator: closed-form formulas, monthly schedule and entry points

mod engine;
mod formula;
mod schedule;

pub use engine::{FormattedResults, ProjectionCalculator, ProjectionResult};
pub use formula::{compute_monthly_income, compute_projected_net_worth};
pub use schedule::{build_schedule, ScheduleRow, ScheduleSummary};
