//! Calculator entry points used by the view layer

use crate::assumptions::CalculatorAssumptions;
use crate::format::{format_currency, zero_currency};
use crate::input::sanitize_amount;
use super::formula::{compute_monthly_income, compute_projected_net_worth};
use super::schedule::{build_schedule, ScheduleRow};
use serde::{Deserialize, Serialize};

/// Unformatted projection output
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub projected_net_worth: f64,
    pub estimated_monthly_income: f64,
}

impl ProjectionResult {
    pub fn is_finite(&self) -> bool {
        self.projected_net_worth.is_finite() && self.estimated_monthly_income.is_finite()
    }

    pub fn formatted(&self) -> FormattedResults {
        FormattedResults {
            projected_net_worth: format_currency(self.projected_net_worth),
            estimated_monthly_income: format_currency(self.estimated_monthly_income),
        }
    }
}

/// The two display strings written back to the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedResults {
    pub projected_net_worth: String,
    pub estimated_monthly_income: String,
}

impl FormattedResults {
    /// Both outputs showing the formatted zero amount
    pub fn zero() -> Self {
        Self {
            projected_net_worth: zero_currency(),
            estimated_monthly_income: zero_currency(),
        }
    }
}

/// Projection calculator bound to one assumption set.
///
/// Holds no state besides the constants; every call is independent.
#[derive(Debug, Clone, Default)]
pub struct ProjectionCalculator {
    assumptions: CalculatorAssumptions,
}

impl ProjectionCalculator {
    pub fn new(assumptions: CalculatorAssumptions) -> Self {
        Self { assumptions }
    }

    pub fn assumptions(&self) -> &CalculatorAssumptions {
        &self.assumptions
    }

    /// Projected net worth and monthly income for already-sanitized inputs
    pub fn project(&self, initial: f64, monthly: f64) -> ProjectionResult {
        let a = &self.assumptions;
        let projected_net_worth =
            compute_projected_net_worth(initial, monthly, a.monthly_interest_rate, a.horizon_months);
        let estimated_monthly_income = compute_monthly_income(projected_net_worth, a.monthly_withdrawal_rate);

        ProjectionResult {
            projected_net_worth,
            estimated_monthly_income,
        }
    }

    /// Month-by-month balances over the configured horizon
    pub fn schedule(&self, initial: f64, monthly: f64) -> Vec<ScheduleRow> {
        let a = &self.assumptions;
        build_schedule(initial, monthly, a.monthly_interest_rate, a.horizon_months)
    }

    /// Sanitized inputs, or `None` when they fall outside the accepted range
    pub fn accept(&self, initial_raw: &str, monthly_raw: &str) -> Option<(f64, f64)> {
        let initial = sanitize_amount(initial_raw);
        let monthly = sanitize_amount(monthly_raw);

        if self.assumptions.bounds.accepts(initial, monthly) {
            Some((initial, monthly))
        } else {
            log::debug!("rejecting input initial={} monthly={}", initial, monthly);
            None
        }
    }

    /// Recompute the display strings from raw field text.
    ///
    /// Rejected input, or a projection that overflows, shows zero in both
    /// outputs.
    pub fn update_results(&self, initial_raw: &str, monthly_raw: &str) -> FormattedResults {
        let Some((initial, monthly)) = self.accept(initial_raw, monthly_raw) else {
            return FormattedResults::zero();
        };

        let result = self.project(initial, monthly);
        if !result.is_finite() {
            log::warn!(
                "projection overflowed for initial={} monthly={} ({})",
                initial,
                monthly,
                self.assumptions.version
            );
            return FormattedResults::zero();
        }

        result.formatted()
    }
}
