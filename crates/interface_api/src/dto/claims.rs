//! Claims DTOs
//!
//! `ClaimRecord` is the loosely typed record accepted over HTTP: every field
//! is optional and the two flags accept booleans, numbers or free text.
//! Conversion to `ClaimInput` reports the first absent field as a missing
//! fact.

use chrono::NaiveDate;
use core_kernel::{Currency, Money};
use domain_claims::{
    ClaimDecision, ClaimError, ClaimInput, ClaimValidity, CoverageStatus, EvaluationResult,
    FraudRisk,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ErrorResponse;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClaimRecord {
    pub policy_type: Option<String>,
    pub policy_start_date: Option<NaiveDate>,
    pub policy_end_date: Option<NaiveDate>,
    pub loss_date: Option<NaiveDate>,
    pub loss_type: Option<String>,
    pub claim_amount: Option<Decimal>,
    pub sum_insured: Option<Decimal>,
    pub deductible: Option<Decimal>,
    /// Currency of all three amounts; the configured default when absent
    pub currency: Option<Currency>,
    #[serde(default, deserialize_with = "loose_bool")]
    pub fir_submitted: Option<bool>,
    #[serde(default, deserialize_with = "loose_bool")]
    pub documents_complete: Option<bool>,
    pub previous_claims: Option<i64>,
}

impl ClaimRecord {
    /// Converts the record into a claim input
    ///
    /// # Errors
    ///
    /// * `ClaimError::MissingFact` - a field is absent
    /// * `ClaimError::InvalidRange` - `previous_claims` is negative or too large
    pub fn into_claim_input(self, default_currency: Currency) -> Result<ClaimInput, ClaimError> {
        let currency = self.currency.unwrap_or(default_currency);
        let money = |amount: Decimal| Money::new(amount, currency);

        let mut builder = ClaimInput::builder();
        if let Some(policy_type) = self.policy_type.as_deref() {
            builder = builder.policy_type(policy_type);
        }
        if let Some(date) = self.policy_start_date {
            builder = builder.policy_start_date(date);
        }
        if let Some(date) = self.policy_end_date {
            builder = builder.policy_end_date(date);
        }
        if let Some(date) = self.loss_date {
            builder = builder.loss_date(date);
        }
        if let Some(loss_type) = self.loss_type.as_deref() {
            builder = builder.loss_type(loss_type);
        }
        if let Some(amount) = self.claim_amount {
            builder = builder.claim_amount(money(amount));
        }
        if let Some(amount) = self.sum_insured {
            builder = builder.sum_insured(money(amount));
        }
        if let Some(amount) = self.deductible {
            builder = builder.deductible(money(amount));
        }
        if let Some(submitted) = self.fir_submitted {
            builder = builder.fir_submitted(submitted);
        }
        if let Some(complete) = self.documents_complete {
            builder = builder.documents_complete(complete);
        }
        if let Some(count) = self.previous_claims {
            let count = u32::try_from(count)
                .map_err(|_| ClaimError::invalid_range("previous_claims", count))?;
            builder = builder.previous_claims(count);
        }

        builder.build()
    }
}

/// Accepts booleans, numbers (non-zero is true), or text where only
/// "yes", "y", "true" and "1" (any case) mean true
fn loose_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum LooseBool {
        Bool(bool),
        Number(f64),
        Text(String),
    }

    let value = Option::<LooseBool>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        LooseBool::Bool(b) => b,
        LooseBool::Number(n) => n != 0.0,
        LooseBool::Text(s) => matches!(s.trim().to_lowercase().as_str(), "yes" | "y" | "true" | "1"),
    }))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResponse {
    pub claim_validity: ClaimValidity,
    pub coverage_status: CoverageStatus,
    pub claim_decision: ClaimDecision,
    pub payable_amount: Decimal,
    pub currency: Currency,
    pub fraud_risk: FraudRisk,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    pub explanation: String,
    pub inference_trace: Vec<String>,
}

impl From<EvaluationResult> for EvaluationResponse {
    fn from(result: EvaluationResult) -> Self {
        Self {
            claim_validity: result.claim_validity,
            coverage_status: result.coverage_status,
            claim_decision: result.claim_decision,
            payable_amount: result.payable_amount.amount(),
            currency: result.payable_amount.currency(),
            fraud_risk: result.fraud_risk,
            rejection_reason: result.rejection_reason,
            explanation: result.explanation,
            inference_trace: result.inference_trace,
        }
    }
}

/// One entry of a batch response; exactly one of `result` and `error` is set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchEntry {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<EvaluationResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchResponse {
    pub results: Vec<BatchEntry>,
}
