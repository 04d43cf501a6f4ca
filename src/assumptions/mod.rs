//! Projection assumptions: interest, horizon, withdrawal rate and input bounds
//!
//! Landing page revisions shipped with different constants, so each set
//! carries a version label and is passed explicitly to the calculator.

mod bounds;
pub mod loader;

pub use bounds::InputBounds;
pub use loader::load_assumption_set;

use crate::error::{CalculatorError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Version label of the canonical assumption set
pub const CANONICAL_VERSION: &str = "landing-v3";

/// Canonical monthly interest rate (0.9% per month)
pub const DEFAULT_MONTHLY_INTEREST_RATE: f64 = 0.009;

/// Canonical projection horizon in months
pub const DEFAULT_HORIZON_MONTHS: u32 = 12;

/// Canonical monthly withdrawal rate (0.4% per month)
pub const DEFAULT_MONTHLY_WITHDRAWAL_RATE: f64 = 0.004;

/// One named set of calculator constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorAssumptions {
    pub version: String,
    pub monthly_interest_rate: f64,
    pub horizon_months: u32,
    pub monthly_withdrawal_rate: f64,
    #[serde(default)]
    pub bounds: InputBounds,
}

impl CalculatorAssumptions {
    /// The constants the current landing page uses
    pub fn canonical() -> Self {
        Self {
            version: CANONICAL_VERSION.to_string(),
            monthly_interest_rate: DEFAULT_MONTHLY_INTEREST_RATE,
            horizon_months: DEFAULT_HORIZON_MONTHS,
            monthly_withdrawal_rate: DEFAULT_MONTHLY_WITHDRAWAL_RATE,
            bounds: InputBounds::unbounded(),
        }
    }

    /// Check that the constants keep the formulas finite and non-negative
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| CalculatorError::InvalidAssumption {
            version: self.version.clone(),
            reason: reason.to_string(),
        };

        if !self.monthly_interest_rate.is_finite() || self.monthly_interest_rate < -1.0 {
            return Err(invalid("monthly interest rate must be a finite number >= -1"));
        }
        if self.horizon_months == 0 {
            return Err(invalid("horizon must be at least one month"));
        }
        if !self.monthly_withdrawal_rate.is_finite() || self.monthly_withdrawal_rate < 0.0 {
            return Err(invalid("monthly withdrawal rate must be a finite number >= 0"));
        }
        for max in [self.bounds.max_initial, self.bounds.max_monthly].into_iter().flatten() {
            if max.is_nan() || max < 0.0 {
                return Err(invalid("input bounds must be non-negative"));
            }
        }
        Ok(())
    }
}

impl Default for CalculatorAssumptions {
    fn default() -> Self {
        Self::canonical()
    }
}

/// Ordered collection of assumption versions
#[derive(Debug, Clone)]
pub struct AssumptionSet {
    entries: Vec<CalculatorAssumptions>,
}

impl AssumptionSet {
    /// Build a set, validating every entry. Later duplicates of a version
    /// replace earlier ones in place.
    pub fn new(entries: Vec<CalculatorAssumptions>) -> Result<Self> {
        if entries.is_empty() {
            return Err(CalculatorError::EmptyAssumptionSet);
        }

        let mut deduped: Vec<CalculatorAssumptions> = Vec::with_capacity(entries.len());
        for entry in entries {
            entry.validate()?;
            match deduped.iter_mut().find(|e| e.version == entry.version) {
                Some(existing) => {
                    log::warn!("assumptions version '{}' defined twice, keeping the last", entry.version);
                    *existing = entry;
                }
                None => deduped.push(entry),
            }
        }

        Ok(Self { entries: deduped })
    }

    /// Set containing only the canonical constants
    pub fn canonical() -> Self {
        Self {
            entries: vec![CalculatorAssumptions::canonical()],
        }
    }

    /// Load from `calculator_assumptions.csv` in the default directory (data/assumptions/)
    pub fn from_csv() -> Result<Self> {
        Self::from_csv_path(Path::new(loader::DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load from `calculator_assumptions.csv` in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        load_assumption_set(path)
    }

    pub fn get(&self, version: &str) -> Result<&CalculatorAssumptions> {
        self.entries
            .iter()
            .find(|e| e.version == version)
            .ok_or_else(|| CalculatorError::UnknownVersion(version.to_string()))
    }

    /// The canonical version if present, otherwise the first entry
    pub fn preferred(&self) -> &CalculatorAssumptions {
        self.get(CANONICAL_VERSION).unwrap_or(&self.entries[0])
    }

    pub fn versions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.version.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CalculatorAssumptions> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for AssumptionSet {
    fn default() -> Self {
        Self::canonical()
    }
}
