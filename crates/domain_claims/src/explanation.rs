//! Natural-language explanation of a decision
//!
//! `explain` reads the final fact store and never fails: facts that are
//! unexpectedly unset are rendered with neutral fallbacks.

use core_kernel::Money;

use crate::facts::{ClaimDecision, ClaimValidity, CoverageStatus, FactStore, FraudRisk};

const UNDETERMINED: &str = "Unable to determine claim status. Please review input data.";

pub fn explain(facts: &FactStore) -> String {
    match facts.claim_decision() {
        Some(ClaimDecision::Approved) => explain_approval(facts),
        Some(ClaimDecision::Rejected) => explain_rejection(facts),
        Some(ClaimDecision::UnderInvestigation) => explain_investigation(facts),
        None => UNDETERMINED.to_string(),
    }
}

fn explain_approval(facts: &FactStore) -> String {
    let claim = facts.claim();
    let payable = facts
        .payable_amount()
        .unwrap_or_else(|| Money::zero(claim.currency()));

    let mut text = format!(
        "CLAIM APPROVED: The claim is approved because the policy was active on the date of loss ({}), \
         the incident type ({}) is covered under the {} policy, and all mandatory documents were submitted. \
         The payable amount of {} was calculated after applying the deductible of {}.",
        claim.loss_date,
        claim.loss_type,
        claim.policy_type,
        payable.to_grouped_string(),
        claim.deductible.to_grouped_string(),
    );

    if facts.fraud_risk() == Some(FraudRisk::Medium) {
        text.push_str(" Note: Medium fraud risk detected due to previous claims history.");
    }
    text
}

fn explain_rejection(facts: &FactStore) -> String {
    let claim = facts.claim();
    let reason = facts
        .rejection_reason()
        .map(|r| r.as_str().to_lowercase())
        .unwrap_or_else(|| "of an unknown reason".to_string());

    let mut text = format!("CLAIM REJECTED: The claim is rejected because {}.", reason);

    if facts.claim_validity() == Some(ClaimValidity::Invalid) {
        text.push_str(&format!(
            " The loss date ({}) falls outside the policy period ({}).",
            claim.loss_date,
            claim.policy_period()
        ));
    } else if facts.coverage_status() == Some(CoverageStatus::NotCovered) {
        text.push_str(&format!(
            " The policy type ({}) does not cover {}.",
            claim.policy_type, claim.loss_type
        ));
    }
    text
}

fn explain_investigation(facts: &FactStore) -> String {
    format!(
        "UNDER INVESTIGATION: The claim is marked for investigation due to high fraud risk. \
         The claimant has {} previous claims in the last year, which exceeds the acceptable threshold. \
         A detailed investigation will be conducted before making a final decision.",
        facts.claim().previous_claims
    )
}
