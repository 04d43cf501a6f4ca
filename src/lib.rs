//! Projection Calculator - compound growth projection for the investment landing page
//!
//! This library provides:
//! - Closed-form projected net worth with monthly contributions
//! - Estimated monthly income at a fixed withdrawal rate
//! - Raw form input sanitization and BRL currency formatting
//! - Versioned assumption sets loaded from CSV
//! - Month-by-month schedules and multi-version scenario comparison

pub mod assumptions;
pub mod error;
pub mod format;
pub mod input;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use assumptions::{AssumptionSet, CalculatorAssumptions, InputBounds};
pub use error::CalculatorError;
pub use format::format_currency;
pub use input::{sanitize_amount, RawInput};
pub use projection::{
    compute_monthly_income, compute_projected_net_worth, FormattedResults, ProjectionCalculator,
    ProjectionResult, ScheduleRow,
};
pub use scenario::ScenarioRunner;
