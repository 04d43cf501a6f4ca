//! Sanitization of raw form input
//!
//! The form fields arrive as text. Anything that does not parse as a number
//! counts as zero; sign and range checks happen later against the bounds.

use serde::{Deserialize, Serialize};

/// Raw, unparsed values of the two calculator fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInput {
    #[serde(default)]
    pub initial: String,
    #[serde(default)]
    pub monthly: String,
}

impl RawInput {
    pub fn new(initial: impl Into<String>, monthly: impl Into<String>) -> Self {
        Self {
            initial: initial.into(),
            monthly: monthly.into(),
        }
    }

    /// Sanitized `(initial, monthly)` pair
    pub fn sanitized(&self) -> (f64, f64) {
        (sanitize_amount(&self.initial), sanitize_amount(&self.monthly))
    }
}

/// Convert raw field text to a number, mapping empty or malformed text to 0.
///
/// Accepts an optional sign, a decimal point and an exponent. `NaN` text also
/// maps to 0. Infinite values pass through so the caller can reject them.
pub fn sanitize_amount(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_nan() => 0.0,
        Ok(value) => value,
        Err(_) => {
            log::debug!("unparseable amount {:?}, using 0", trimmed);
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(sanitize_amount("1000"), 1000.0);
        assert_eq!(sanitize_amount("  250.75 "), 250.75);
        assert_eq!(sanitize_amount("-100"), -100.0);
        assert_eq!(sanitize_amount("1e3"), 1000.0);
    }

    #[test]
    fn test_empty_and_malformed_become_zero() {
        assert_eq!(sanitize_amount(""), 0.0);
        assert_eq!(sanitize_amount("   "), 0.0);
        assert_eq!(sanitize_amount("abc"), 0.0);
        assert_eq!(sanitize_amount("12abc"), 0.0);
        assert_eq!(sanitize_amount("1.2.3"), 0.0);
        assert_eq!(sanitize_amount("NaN"), 0.0);
    }

    #[test]
    fn test_infinity_passes_through() {
        assert!(sanitize_amount("inf").is_infinite());
    }

    #[test]
    fn test_raw_input_sanitized_pair() {
        let raw = RawInput::new("1000", "x");
        assert_eq!(raw.sanitized(), (1000.0, 0.0));
    }
}
