//! Error types for assumption loading and validation
//!
//! The arithmetic core never fails; only configuration can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalculatorError {
    #[error("failed to read assumptions: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed assumptions CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid assumptions '{version}': {reason}")]
    InvalidAssumption { version: String, reason: String },

    #[error("unknown assumptions version '{0}'")]
    UnknownVersion(String),

    #[error("assumption set contains no versions")]
    EmptyAssumptionSet,
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
