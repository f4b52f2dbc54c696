//! Fraud risk assessment from the trailing-year claim count

use crate::error::ClaimError;
use crate::facts::{FactLabel, FactStore, FraudRisk};
use super::PhaseOutcome;

/// Claim count from which a claimant is treated as high risk
pub const HIGH_RISK_THRESHOLD: u32 = 3;
pub const MEDIUM_RISK_COUNT: u32 = 2;

pub fn classify(previous_claims: u32) -> FraudRisk {
    if previous_claims >= HIGH_RISK_THRESHOLD {
        FraudRisk::High
    } else if previous_claims == MEDIUM_RISK_COUNT {
        FraudRisk::Medium
    } else {
        FraudRisk::Low
    }
}

pub fn apply(mut facts: FactStore) -> Result<PhaseOutcome, ClaimError> {
    let previous_claims = facts.claim().previous_claims;
    let risk = classify(previous_claims);

    let premise = match risk {
        FraudRisk::High => format!("{} previous claims (≥{})", previous_claims, HIGH_RISK_THRESHOLD),
        FraudRisk::Medium => format!("{} previous claims (={})", previous_claims, MEDIUM_RISK_COUNT),
        FraudRisk::Low => format!("{} previous claim(s) (≤1)", previous_claims),
    };

    facts.set_fraud_risk(risk)?;
    let line = format!("RULE FIRED: {} → fraud_risk = {}", premise, risk.label());
    Ok(PhaseOutcome::new(facts, line))
}
