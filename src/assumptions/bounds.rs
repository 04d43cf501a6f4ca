//! Per-field limits on what the calculator form accepts

use serde::{Deserialize, Serialize};

/// Upper limits for the two form fields. Lower limit is always zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputBounds {
    pub max_initial: Option<f64>,
    pub max_monthly: Option<f64>,
}

impl InputBounds {
    /// No upper limits
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Check a sanitized input pair.
    ///
    /// Negative or infinite values are never accepted; the optional maxima
    /// are inclusive.
    pub fn accepts(&self, initial: f64, monthly: f64) -> bool {
        within(initial, self.max_initial) && within(monthly, self.max_monthly)
    }
}

fn within(value: f64, max: Option<f64>) -> bool {
    if !value.is_finite() || value < 0.0 {
        return false;
    }
    max.map_or(true, |m| value <= m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded_accepts_non_negative() {
        let bounds = InputBounds::unbounded();
        assert!(bounds.accepts(0.0, 0.0));
        assert!(bounds.accepts(1e12, 5e9));
        assert!(!bounds.accepts(-0.01, 10.0));
        assert!(!bounds.accepts(10.0, -1.0));
        assert!(!bounds.accepts(f64::INFINITY, 0.0));
    }

    #[test]
    fn test_maxima_are_inclusive() {
        let bounds = InputBounds {
            max_initial: Some(1_000_000.0),
            max_monthly: Some(50_000.0),
        };
        assert!(bounds.accepts(1_000_000.0, 50_000.0));
        assert!(!bounds.accepts(1_000_000.01, 0.0));
        assert!(!bounds.accepts(0.0, 50_001.0));
    }
}
