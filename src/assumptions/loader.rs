//! CSV-based assumption loader
//!
//! Loads calculator assumption versions from CSV files in data/assumptions/

use super::{AssumptionSet, CalculatorAssumptions, InputBounds};
use crate::error::Result;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Default path to assumptions directory
pub const DEFAULT_ASSUMPTIONS_PATH: &str = "data/assumptions";

/// File name inside the assumptions directory
pub const ASSUMPTIONS_FILE: &str = "calculator_assumptions.csv";

/// Raw CSV row matching calculator_assumptions.csv columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    version: String,
    monthly_interest_rate: f64,
    horizon_months: u32,
    monthly_withdrawal_rate: f64,
    #[serde(default)]
    max_initial: Option<f64>,
    #[serde(default)]
    max_monthly: Option<f64>,
}

impl From<CsvRow> for CalculatorAssumptions {
    fn from(row: CsvRow) -> Self {
        Self {
            version: row.version.trim().to_string(),
            monthly_interest_rate: row.monthly_interest_rate,
            horizon_months: row.horizon_months,
            monthly_withdrawal_rate: row.monthly_withdrawal_rate,
            bounds: InputBounds {
                max_initial: row.max_initial,
                max_monthly: row.max_monthly,
            },
        }
    }
}

/// Load all assumption versions from `calculator_assumptions.csv` in `path`
pub fn load_assumption_set(path: &Path) -> Result<AssumptionSet> {
    let file_path = path.join(ASSUMPTIONS_FILE);
    log::debug!("loading calculator assumptions from {}", file_path.display());
    let file = File::open(&file_path)?;
    read_assumption_set(file)
}

/// Parse assumption versions from any CSV reader
pub fn read_assumption_set<R: Read>(reader: R) -> Result<AssumptionSet> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut entries = Vec::new();
    for result in reader.deserialize::<CsvRow>() {
        entries.push(CalculatorAssumptions::from(result?));
    }

    let set = AssumptionSet::new(entries)?;
    log::info!("loaded {} assumption version(s)", set.len());
    Ok(set)
}
