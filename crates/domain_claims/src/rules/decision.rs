//! Final decision: reconcile validity, coverage and fraud risk
//!
//! Skipped entirely when the document phase has already rejected the claim.
//! Otherwise the first matching rule wins, with fraud risk checked before
//! validity and coverage.

use crate::error::ClaimError;
use crate::facts::{
    ClaimDecision, ClaimValidity, CoverageStatus, FactLabel, FactStore, FraudRisk,
    RejectionReason,
};
use super::PhaseOutcome;

/// The decision rule that fired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionRule {
    HighFraudRisk,
    OutsidePolicyPeriod,
    NotCovered,
    AllCriteriaMet,
}

impl DecisionRule {
    /// Selects the rule for a claim that has not been rejected yet
    ///
    /// Validity and coverage are both two-valued, so once the invalid and
    /// not-covered rules have been tried only the approving rule is left.
    pub fn select(risk: FraudRisk, validity: ClaimValidity, coverage: CoverageStatus) -> Self {
        if risk == FraudRisk::High {
            return DecisionRule::HighFraudRisk;
        }
        match (validity, coverage) {
            (ClaimValidity::Invalid, _) => DecisionRule::OutsidePolicyPeriod,
            (ClaimValidity::Valid, CoverageStatus::NotCovered) => DecisionRule::NotCovered,
            (ClaimValidity::Valid, CoverageStatus::Covered) => DecisionRule::AllCriteriaMet,
        }
    }

    pub fn decision(&self) -> ClaimDecision {
        match self {
            DecisionRule::HighFraudRisk => ClaimDecision::UnderInvestigation,
            DecisionRule::OutsidePolicyPeriod | DecisionRule::NotCovered => ClaimDecision::Rejected,
            DecisionRule::AllCriteriaMet => ClaimDecision::Approved,
        }
    }

    fn premise(&self) -> &'static str {
        match self {
            DecisionRule::HighFraudRisk => "High fraud risk",
            DecisionRule::OutsidePolicyPeriod => "Invalid claim",
            DecisionRule::NotCovered => "Not covered",
            DecisionRule::AllCriteriaMet => "Valid claim + Covered loss + Documents OK",
        }
    }
}

pub fn apply(mut facts: FactStore) -> Result<PhaseOutcome, ClaimError> {
    if facts.is_rejected() {
        return Ok(PhaseOutcome::new(
            facts,
            "RULE: Claim already rejected, no further evaluation needed",
        ));
    }

    let rule = DecisionRule::select(
        facts.require_fraud_risk()?,
        facts.require_claim_validity()?,
        facts.require_coverage_status()?,
    );

    match rule {
        DecisionRule::HighFraudRisk => facts.refer_for_investigation()?,
        DecisionRule::OutsidePolicyPeriod => facts.reject(RejectionReason::OutsidePolicyPeriod)?,
        DecisionRule::NotCovered => facts.reject(RejectionReason::LossNotCovered)?,
        DecisionRule::AllCriteriaMet => facts.approve()?,
    }

    let line = format!(
        "RULE FIRED: {} → claim_decision = {}",
        rule.premise(),
        rule.decision().label()
    );
    Ok(PhaseOutcome::new(facts, line))
}
