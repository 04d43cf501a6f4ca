//! Currency formatting for calculator output
//!
//! Output mirrors what a browser renders for `pt-BR` / `BRL`: `R$`, a
//! non-breaking space, `.` as the thousands separator and `,` before the
//! two cents digits.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

pub const CURRENCY_CODE: &str = "BRL";
pub const CURRENCY_SYMBOL: &str = "R$";
pub const LOCALE: &str = "pt-BR";

const GROUP_SEPARATOR: char = '.';
const DECIMAL_SEPARATOR: char = ',';
const SYMBOL_SPACING: char = '\u{a0}';

// Above this magnitude an f64 carries no cents and Decimal runs out of mantissa
const DECIMAL_ROUNDING_LIMIT: f64 = 1e26;

/// Format an amount as BRL with exactly two fractional digits.
///
/// Rounds half away from zero on the shortest decimal form of `value`, so
/// `1.005` becomes `1,01`. Non-finite values format as zero; callers are
/// expected to filter them out before this point.
pub fn format_currency(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };

    let mut digits = cents_digits(value.abs());
    let negative = value < 0.0 && digits.bytes().any(|b| b != b'0');

    while digits.len() < 3 {
        digits.insert(0, '0');
    }
    let (whole, fraction) = digits.split_at(digits.len() - 2);

    let mut out = String::with_capacity(digits.len() + whole.len() / 3 + 5);
    if negative {
        out.push('-');
    }
    out.push_str(CURRENCY_SYMBOL);
    out.push(SYMBOL_SPACING);
    out.push_str(&group_thousands(whole));
    out.push(DECIMAL_SEPARATOR);
    out.push_str(fraction);
    out
}

/// Rounded number of cents in `amount`, as decimal digits
fn cents_digits(amount: f64) -> String {
    if amount < DECIMAL_ROUNDING_LIMIT {
        if let Ok(decimal) = Decimal::from_str(&amount.to_string()) {
            let mut rounded = decimal.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(2);
            return rounded.mantissa().unsigned_abs().to_string();
        }
    }
    format!("{:.2}", amount).replace('.', "")
}

/// Formatted zero amount, shown whenever input is rejected
pub fn zero_currency() -> String {
    format_currency(0.0)
}

fn group_thousands(whole: &str) -> String {
    let len = whole.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(zero_currency(), "R$\u{a0}0,00");
        assert_eq!(format_currency(-0.0), "R$\u{a0}0,00");
        assert_eq!(format_currency(-0.001), "R$\u{a0}0,00");
    }

    #[test]
    fn test_grouping() {
        assert_eq!(format_currency(0.5), "R$\u{a0}0,50");
        assert_eq!(format_currency(999.99), "R$\u{a0}999,99");
        assert_eq!(format_currency(1000.0), "R$\u{a0}1.000,00");
        assert_eq!(format_currency(7419.602728104864), "R$\u{a0}7.419,60");
        assert_eq!(format_currency(1_234_567.891), "R$\u{a0}1.234.567,89");
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_eq!(format_currency(1.125), "R$\u{a0}1,13");
        assert_eq!(format_currency(29.678410912419455), "R$\u{a0}29,68");
        assert_eq!(format_currency(0.994), "R$\u{a0}0,99");
        assert_eq!(format_currency(2.5), "R$\u{a0}2,50");
    }

    #[test]
    fn test_decimal_half_cents_round_up() {
        assert_eq!(format_currency(1.005), "R$\u{a0}1,01");
        assert_eq!(format_currency(1.015), "R$\u{a0}1,02");
        assert_eq!(format_currency(0.285), "R$\u{a0}0,29");
        assert_eq!(format_currency(-1.005), "-R$\u{a0}1,01");
    }

    #[test]
    fn test_tiny_and_huge_amounts() {
        assert_eq!(format_currency(1e-7), "R$\u{a0}0,00");
        assert_eq!(format_currency(-0.004), "R$\u{a0}0,00");
        assert_eq!(
            format_currency(2f64.powi(90)),
            "R$\u{a0}1.237.940.039.285.380.274.899.124.224,00"
        );
    }

    #[test]
    fn test_negative() {
        assert_eq!(format_currency(-1500.5), "-R$\u{a0}1.500,50");
    }

    #[test]
    fn test_non_finite_formats_as_zero() {
        assert_eq!(format_currency(f64::NAN), zero_currency());
        assert_eq!(format_currency(f64::INFINITY), zero_currency());
    }
}
