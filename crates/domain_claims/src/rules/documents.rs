//! Document compliance: were the mandatory submissions made?
//!
//! A rejection here is final. The decision phase sees the rejected claim
//! and skips its own rules.

use crate::error::ClaimError;
use crate::facts::{ClaimDecision, FactLabel, FactStore, RejectionReason};
use super::PhaseOutcome;

pub fn apply(mut facts: FactStore) -> Result<PhaseOutcome, ClaimError> {
    let claim = facts.claim();
    let fir_missing = claim.loss_type.requires_fir() && !claim.fir_submitted;
    let documents_complete = claim.documents_complete;
    let loss_label = claim.loss_type.as_str().to_uppercase();
    let rejected = ClaimDecision::Rejected.label();

    let line = if fir_missing {
        facts.reject(RejectionReason::FirNotSubmitted)?;
        format!(
            "RULE FIRED: {} requires FIR, but not submitted → claim_decision = {}",
            loss_label, rejected
        )
    } else if !documents_complete {
        facts.reject(RejectionReason::IncompleteDocumentation)?;
        format!("RULE FIRED: Documents incomplete → claim_decision = {}", rejected)
    } else {
        "RULE PASSED: All mandatory documents submitted".to_string()
    };

    Ok(PhaseOutcome::new(facts, line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{approvable_claim, seeded};

    #[test]
    fn test_theft_without_fir_is_rejected() {
        let outcome = apply(seeded(approvable_claim().loss_type("theft").fir_submitted(false))).unwrap();

        assert_eq!(outcome.facts.claim_decision(), Some(ClaimDecision::Rejected));
        assert_eq!(outcome.facts.rejection_reason(), Some(RejectionReason::FirNotSubmitted));
        assert_eq!(
            outcome.lines,
            vec!["RULE FIRED: THEFT requires FIR, but not submitted → claim_decision = REJECTED"]
        );
    }

    #[test]
    fn test_fire_without_fir_beats_incomplete_documents() {
        let outcome = apply(seeded(
            approvable_claim()
                .loss_type("fire")
                .fir_submitted(false)
                .documents_complete(false),
        ))
        .unwrap();

        assert_eq!(outcome.facts.rejection_reason(), Some(RejectionReason::FirNotSubmitted));
    }

    #[test]
    fn test_accident_does_not_need_fir() {
        let outcome = apply(seeded(approvable_claim().loss_type("accident").fir_submitted(false))).unwrap();

        assert_eq!(outcome.facts.claim_decision(), None);
        assert_eq!(outcome.lines, vec!["RULE PASSED: All mandatory documents submitted"]);
    }

    #[test]
    fn test_incomplete_documents_rejected() {
        let outcome = apply(seeded(
            approvable_claim()
                .loss_type("theft")
                .fir_submitted(true)
                .documents_complete(false),
        ))
        .unwrap();

        assert_eq!(outcome.facts.claim_decision(), Some(ClaimDecision::Rejected));
        assert_eq!(
            outcome.facts.rejection_reason(),
            Some(RejectionReason::IncompleteDocumentation)
        );
    }
}
