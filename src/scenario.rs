//! Scenario runner for comparing assumption versions and batch evaluation
//!
//! Holds a loaded assumption set so many projections can run without
//! re-reading CSV files.

use crate::assumptions::AssumptionSet;
use crate::error::Result;
use crate::input::RawInput;
use crate::projection::{FormattedResults, ProjectionCalculator, ProjectionResult};
use rayon::prelude::*;
use serde::Serialize;

/// Projection under one assumption version
#[derive(Debug, Clone, Serialize)]
pub struct VersionResult {
    pub version: String,
    pub result: ProjectionResult,
}

/// Pre-loaded scenario runner
///
/// # Example
/// ```
/// use projection_calculator::{AssumptionSet, ScenarioRunner};
///
/// let runner = ScenarioRunner::new(AssumptionSet::canonical());
/// let results = runner.run_versions(1000.0, 500.0);
/// assert_eq!(results.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    assumptions: AssumptionSet,
}

impl ScenarioRunner {
    pub fn new(assumptions: AssumptionSet) -> Self {
        Self { assumptions }
    }

    /// Create runner by loading assumptions from the default CSV location
    pub fn from_csv() -> Result<Self> {
        Ok(Self::new(AssumptionSet::from_csv()?))
    }

    /// Create runner from a specific assumptions directory
    pub fn from_csv_path(path: &std::path::Path) -> Result<Self> {
        Ok(Self::new(AssumptionSet::from_csv_path(path)?))
    }

    /// Calculator for a named version
    pub fn calculator(&self, version: &str) -> Result<ProjectionCalculator> {
        Ok(ProjectionCalculator::new(self.assumptions.get(version)?.clone()))
    }

    /// Calculator for the canonical version, or the first loaded one
    pub fn preferred_calculator(&self) -> ProjectionCalculator {
        ProjectionCalculator::new(self.assumptions.preferred().clone())
    }

    /// Project one input pair under every loaded version, in load order
    pub fn run_versions(&self, initial: f64, monthly: f64) -> Vec<VersionResult> {
        self.assumptions
            .iter()
            .map(|a| VersionResult {
                version: a.version.clone(),
                result: ProjectionCalculator::new(a.clone()).project(initial, monthly),
            })
            .collect()
    }

    /// Evaluate many raw input pairs under one version.
    ///
    /// Runs in parallel; output order matches `inputs`.
    pub fn run_batch(&self, version: &str, inputs: &[RawInput]) -> Result<Vec<FormattedResults>> {
        let calculator = self.calculator(version)?;
        log::info!("running batch of {} input(s) under '{}'", inputs.len(), version);

        Ok(inputs
            .par_iter()
            .map(|raw| calculator.update_results(&raw.initial, &raw.monthly))
            .collect())
    }

    pub fn assumptions(&self) -> &AssumptionSet {
        &self.assumptions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::CalculatorAssumptions;
    use crate::error::CalculatorError;

    fn runner() -> ScenarioRunner {
        let flat = CalculatorAssumptions {
            version: "contributions-only".to_string(),
            monthly_interest_rate: 0.0,
            ..CalculatorAssumptions::canonical()
        };
        let rich = CalculatorAssumptions {
            version: "high-rate".to_string(),
            monthly_interest_rate: 0.015,
            ..CalculatorAssumptions::canonical()
        };
        ScenarioRunner::new(AssumptionSet::new(vec![CalculatorAssumptions::canonical(), flat, rich]).unwrap())
    }

    #[test]
    fn test_run_versions_in_load_order() {
        let results = runner().run_versions(1000.0, 500.0);
        let versions: Vec<_> = results.iter().map(|r| r.version.as_str()).collect();
        assert_eq!(versions, vec!["landing-v3", "contributions-only", "high-rate"]);

        // Higher interest should result in higher projected net worth
        assert!(results[2].result.projected_net_worth > results[0].result.projected_net_worth);
        assert!(results[0].result.projected_net_worth > results[1].result.projected_net_worth);
        assert_eq!(results[1].result.projected_net_worth, 7000.0);
    }

    #[test]
    fn test_run_batch_preserves_order() {
        let inputs: Vec<RawInput> = (0..200)
            .map(|i| RawInput::new(format!("{}", i * 100), "50"))
            .chain(std::iter::once(RawInput::new("-1", "50")))
            .collect();

        let runner = runner();
        let out = runner.run_batch("landing-v3", &inputs).unwrap();
        assert_eq!(out.len(), inputs.len());

        let calc = runner.calculator("landing-v3").unwrap();
        for (raw, formatted) in inputs.iter().zip(&out) {
            assert_eq!(*formatted, calc.update_results(&raw.initial, &raw.monthly));
        }
        assert_eq!(*out.last().unwrap(), FormattedResults::zero());
    }

    #[test]
    fn test_unknown_version() {
        let err = runner().run_batch("missing", &[]).unwrap_err();
        assert!(matches!(err, CalculatorError::UnknownVersion(_)));
    }

    #[test]
    fn test_preferred_calculator_is_canonical() {
        let calc = runner().preferred_calculator();
        assert_eq!(calc.assumptions().version, "landing-v3");
    }
}
