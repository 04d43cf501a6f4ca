//! Month-by-month balance roll-forward
//!
//! Same projection as the closed form, expanded into one row per month so
//! the growth can be displayed or exported.

use serde::{Deserialize, Serialize};

/// Balance movement for a single projection month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Projection month (1-indexed)
    pub month: u32,
    pub opening_balance: f64,
    pub interest: f64,
    pub contribution: f64,
    pub closing_balance: f64,
}

/// Roll the balance forward one month at a time.
///
/// Interest accrues on the opening balance, then the monthly contribution is
/// added at month end.
pub fn build_schedule(initial: f64, monthly: f64, rate: f64, horizon_months: u32) -> Vec<ScheduleRow> {
    let mut rows = Vec::with_capacity(horizon_months as usize);
    let mut balance = initial;

    for month in 1..=horizon_months {
        let interest = balance * rate;
        let closing_balance = balance + interest + monthly;
        rows.push(ScheduleRow {
            month,
            opening_balance: balance,
            interest,
            contribution: monthly,
            closing_balance,
        });
        balance = closing_balance;
    }

    rows
}

/// Totals over a schedule
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub total_months: u32,
    pub total_contributions: f64,
    pub total_interest: f64,
    pub final_balance: f64,
}

impl ScheduleSummary {
    pub fn from_rows(initial: f64, rows: &[ScheduleRow]) -> Self {
        Self {
            total_months: rows.len() as u32,
            total_contributions: initial + rows.iter().map(|r| r.contribution).sum::<f64>(),
            total_interest: rows.iter().map(|r| r.interest).sum(),
            final_balance: rows.last().map(|r| r.closing_balance).unwrap_or(initial),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::formula::compute_projected_net_worth;
    use approx::assert_relative_eq;

    #[test]
    fn test_schedule_matches_closed_form() {
        for &(initial, monthly, rate, n) in &[
            (1000.0, 500.0, 0.009, 12),
            (0.0, 250.0, 0.009, 12),
            (50_000.0, 0.0, 0.0075, 360),
            (1000.0, 500.0, 0.0, 24),
        ] {
            let rows = build_schedule(initial, monthly, rate, n);
            assert_eq!(rows.len(), n as usize);
            let last = rows.last().unwrap().closing_balance;
            let closed = compute_projected_net_worth(initial, monthly, rate, n);
            assert_relative_eq!(last, closed, max_relative = 1e-10);
        }
    }

    #[test]
    fn test_rows_chain() {
        let rows = build_schedule(1000.0, 100.0, 0.01, 3);
        assert_eq!(rows[0].month, 1);
        assert_relative_eq!(rows[0].interest, 10.0);
        assert_relative_eq!(rows[0].closing_balance, 1110.0);
        for pair in rows.windows(2) {
            assert_eq!(pair[1].opening_balance, pair[0].closing_balance);
        }
    }

    #[test]
    fn test_summary_balances() {
        let rows = build_schedule(1000.0, 500.0, 0.009, 12);
        let summary = ScheduleSummary::from_rows(1000.0, &rows);
        assert_eq!(summary.total_months, 12);
        assert_relative_eq!(summary.total_contributions, 7000.0);
        assert_relative_eq!(
            summary.total_contributions + summary.total_interest,
            summary.final_balance,
            max_relative = 1e-12
        );
    }
}
