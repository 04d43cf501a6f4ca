//! Closed-form projection formulas
//!
//! Future value of a lump sum plus an ordinary annuity of monthly
//! contributions, and the income a fixed withdrawal rate draws from it.

/// Projected balance after `horizon_months` of compounding at `rate` per month.
///
/// `initial` compounds over the whole horizon; `monthly` is contributed at
/// the end of every month. At `rate == 0` the annuity factor uses its limit
/// `horizon_months` instead of evaluating `0 / 0`.
///
/// # Example
/// ```
/// use projection_calculator::compute_projected_net_worth;
///
/// let value = compute_projected_net_worth(1000.0, 500.0, 0.0, 12);
/// assert_eq!(value, 7000.0);
/// ```
pub fn compute_projected_net_worth(initial: f64, monthly: f64, rate: f64, horizon_months: u32) -> f64 {
    let n = f64::from(horizon_months);
    // (1 + rate)^n - 1 through ln_1p/exp_m1 so tiny rates are not absorbed by 1.0 + rate
    let growth_minus_one = (n * rate.ln_1p()).exp_m1();
    let growth_factor = 1.0 + growth_minus_one;

    let future_value_of_initial = initial * growth_factor;
    let future_value_of_contributions = monthly * annuity_factor(growth_minus_one, rate, n);

    future_value_of_initial + future_value_of_contributions
}

/// Monthly income from withdrawing `withdrawal_rate` of the projected balance
pub fn compute_monthly_income(projected_net_worth: f64, withdrawal_rate: f64) -> f64 {
    projected_net_worth * withdrawal_rate
}

/// Future value of 1 contributed at the end of each of `n` months
fn annuity_factor(growth_minus_one: f64, rate: f64, n: f64) -> f64 {
    if rate == 0.0 {
        n
    } else {
        growth_minus_one / rate
    }
}
