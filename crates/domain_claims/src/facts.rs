//! Fact store
//!
//! The fact store holds the claim's input facts plus the facts derived by the
//! rule phases. Derived facts start out unset and each can be written exactly
//! once; a second write is reported as `ClaimError::FactAlreadyDerived`.

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::Money;
use crate::claim::ClaimInput;
use crate::error::ClaimError;

/// Whether the loss date falls inside the policy period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimValidity {
    Valid,
    Invalid,
}

/// Whether the loss type is covered by the policy type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageStatus {
    Covered,
    NotCovered,
}

/// Terminal decision for a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimDecision {
    Approved,
    Rejected,
    UnderInvestigation,
}

/// Fraud risk classified from claim history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FraudRisk {
    Low,
    Medium,
    High,
}

/// Why a claim was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    FirNotSubmitted,
    IncompleteDocumentation,
    OutsidePolicyPeriod,
    LossNotCovered,
}

impl RejectionReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectionReason::FirNotSubmitted => "FIR not submitted for theft/fire case",
            RejectionReason::IncompleteDocumentation => "Incomplete documentation",
            RejectionReason::OutsidePolicyPeriod => "Claim outside policy period",
            RejectionReason::LossNotCovered => "Loss type not covered under policy",
        }
    }
}

/// Trace-style upper-case labels, e.g. `NOT COVERED`
pub trait FactLabel {
    fn label(&self) -> &'static str;
}

impl FactLabel for ClaimValidity {
    fn label(&self) -> &'static str {
        match self {
            ClaimValidity::Valid => "VALID",
            ClaimValidity::Invalid => "INVALID",
        }
    }
}

impl FactLabel for CoverageStatus {
    fn label(&self) -> &'static str {
        match self {
            CoverageStatus::Covered => "COVERED",
            CoverageStatus::NotCovered => "NOT COVERED",
        }
    }
}

impl FactLabel for ClaimDecision {
    fn label(&self) -> &'static str {
        match self {
            ClaimDecision::Approved => "APPROVED",
            ClaimDecision::Rejected => "REJECTED",
            ClaimDecision::UnderInvestigation => "UNDER INVESTIGATION",
        }
    }
}

impl FactLabel for FraudRisk {
    fn label(&self) -> &'static str {
        match self {
            FraudRisk::Low => "LOW",
            FraudRisk::Medium => "MEDIUM",
            FraudRisk::High => "HIGH",
        }
    }
}

impl fmt::Display for ClaimDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ClaimDecision::Approved => "approved",
            ClaimDecision::Rejected => "rejected",
            ClaimDecision::UnderInvestigation => "under_investigation",
        };
        f.write_str(s)
    }
}

impl fmt::Display for FraudRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FraudRisk::Low => "low",
            FraudRisk::Medium => "medium",
            FraudRisk::High => "high",
        };
        f.write_str(s)
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input facts plus the facts derived during one evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactStore {
    claim: ClaimInput,
    claim_validity: Option<ClaimValidity>,
    coverage_status: Option<CoverageStatus>,
    claim_decision: Option<ClaimDecision>,
    rejection_reason: Option<RejectionReason>,
    fraud_risk: Option<FraudRisk>,
    payable_amount: Option<Money>,
}

fn write_once<T>(slot: &mut Option<T>, value: T, fact: &str) -> Result<(), ClaimError> {
    if slot.is_some() {
        return Err(ClaimError::FactAlreadyDerived(fact.to_string()));
    }
    *slot = Some(value);
    Ok(())
}

impl FactStore {
    /// Seeds a fresh store from the claim's input facts
    pub fn seed(claim: ClaimInput) -> Self {
        Self {
            claim,
            claim_validity: None,
            coverage_status: None,
            claim_decision: None,
            rejection_reason: None,
            fraud_risk: None,
            payable_amount: None,
        }
    }

    pub fn claim(&self) -> &ClaimInput {
        &self.claim
    }

    pub fn claim_validity(&self) -> Option<ClaimValidity> {
        self.claim_validity
    }

    pub fn coverage_status(&self) -> Option<CoverageStatus> {
        self.coverage_status
    }

    pub fn claim_decision(&self) -> Option<ClaimDecision> {
        self.claim_decision
    }

    pub fn rejection_reason(&self) -> Option<RejectionReason> {
        self.rejection_reason
    }

    pub fn fraud_risk(&self) -> Option<FraudRisk> {
        self.fraud_risk
    }

    pub fn payable_amount(&self) -> Option<Money> {
        self.payable_amount
    }

    pub fn require_claim_validity(&self) -> Result<ClaimValidity, ClaimError> {
        self.claim_validity
            .ok_or_else(|| ClaimError::missing("claim_validity"))
    }

    pub fn require_coverage_status(&self) -> Result<CoverageStatus, ClaimError> {
        self.coverage_status
            .ok_or_else(|| ClaimError::missing("coverage_status"))
    }

    pub fn require_claim_decision(&self) -> Result<ClaimDecision, ClaimError> {
        self.claim_decision
            .ok_or_else(|| ClaimError::missing("claim_decision"))
    }

    pub fn require_fraud_risk(&self) -> Result<FraudRisk, ClaimError> {
        self.fraud_risk.ok_or_else(|| ClaimError::missing("fraud_risk"))
    }

    pub fn require_payable_amount(&self) -> Result<Money, ClaimError> {
        self.payable_amount
            .ok_or_else(|| ClaimError::missing("payable_amount"))
    }

    /// True once any phase has rejected the claim
    pub fn is_rejected(&self) -> bool {
        self.claim_decision == Some(ClaimDecision::Rejected)
    }

    pub fn set_claim_validity(&mut self, validity: ClaimValidity) -> Result<(), ClaimError> {
        write_once(&mut self.claim_validity, validity, "claim_validity")
    }

    pub fn set_coverage_status(&mut self, status: CoverageStatus) -> Result<(), ClaimError> {
        write_once(&mut self.coverage_status, status, "coverage_status")
    }

    pub fn set_fraud_risk(&mut self, risk: FraudRisk) -> Result<(), ClaimError> {
        write_once(&mut self.fraud_risk, risk, "fraud_risk")
    }

    pub fn set_payable_amount(&mut self, amount: Money) -> Result<(), ClaimError> {
        write_once(&mut self.payable_amount, amount, "payable_amount")
    }

    /// Rejects the claim, recording the reason alongside the decision
    pub fn reject(&mut self, reason: RejectionReason) -> Result<(), ClaimError> {
        write_once(&mut self.claim_decision, ClaimDecision::Rejected, "claim_decision")?;
        self.rejection_reason = Some(reason);
        Ok(())
    }

    pub fn approve(&mut self) -> Result<(), ClaimError> {
        write_once(&mut self.claim_decision, ClaimDecision::Approved, "claim_decision")
    }

    pub fn refer_for_investigation(&mut self) -> Result<(), ClaimError> {
        write_once(
            &mut self.claim_decision,
            ClaimDecision::UnderInvestigation,
            "claim_decision",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core_kernel::Currency;
    use rust_decimal_macros::dec;

    fn store() -> FactStore {
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let claim = ClaimInput::builder()
            .policy_type("comprehensive")
            .policy_start_date(date)
            .policy_end_date(date)
            .loss_date(date)
            .loss_type("accident")
            .claim_amount(Money::new(dec!(100), Currency::INR))
            .sum_insured(Money::new(dec!(100), Currency::INR))
            .deductible(Money::zero(Currency::INR))
            .fir_submitted(true)
            .documents_complete(true)
            .previous_claims(0)
            .build()
            .unwrap();
        FactStore::seed(claim)
    }

    #[test]
    fn test_seeded_store_has_no_derived_facts() {
        let facts = store();
        assert!(facts.claim_validity().is_none());
        assert!(facts.claim_decision().is_none());
        assert_eq!(facts.require_fraud_risk(), Err(ClaimError::MissingFact("fraud_risk".to_string())));
    }

    #[test]
    fn test_derived_fact_cannot_be_overwritten() {
        let mut facts = store();
        facts.set_claim_validity(ClaimValidity::Valid).unwrap();

        let result = facts.set_claim_validity(ClaimValidity::Invalid);
        assert_eq!(result, Err(ClaimError::FactAlreadyDerived("claim_validity".to_string())));
        assert_eq!(facts.claim_validity(), Some(ClaimValidity::Valid));
    }

    #[test]
    fn test_reject_records_reason() {
        let mut facts = store();
        facts.reject(RejectionReason::IncompleteDocumentation).unwrap();

        assert!(facts.is_rejected());
        assert_eq!(facts.rejection_reason(), Some(RejectionReason::IncompleteDocumentation));
        assert!(facts.approve().is_err());
    }
}
