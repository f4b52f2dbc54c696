//! Claims domain errors

use core_kernel::MoneyError;
use thiserror::Error;

/// Errors that can occur while evaluating a claim
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClaimError {
    /// A required input field is absent, or a phase read a derived fact
    /// before the phase that owns it had run
    #[error("Missing fact: {0}")]
    MissingFact(String),

    #[error("Invalid range for {field}: {value}")]
    InvalidRange { field: String, value: String },

    #[error("Fact already derived: {0}")]
    FactAlreadyDerived(String),

    #[error("Money error: {0}")]
    Money(#[from] MoneyError),
}

impl ClaimError {
    pub fn missing(fact: impl Into<String>) -> Self {
        ClaimError::MissingFact(fact.into())
    }

    pub fn invalid_range(field: impl Into<String>, value: impl ToString) -> Self {
        ClaimError::InvalidRange {
            field: field.into(),
            value: value.to_string(),
        }
    }
}
