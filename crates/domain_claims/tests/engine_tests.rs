//! End-to-end tests for the claim inference engine

use proptest::prelude::*;
use rust_decimal_macros::dec;

use domain_claims::{
    evaluate, ClaimDecision, ClaimError, ClaimValidity, CoverageStatus, FraudRisk, InferenceEngine,
    Phase,
};
use test_utils::{
    assert_decision, assert_payable, assert_rejected_with, assert_trace_contains,
    claim_input_strategy, MoneyFixtures, TemporalFixtures, TestClaimBuilder,
};

// ============================================================================
// Reference Scenarios
// ============================================================================

mod scenario_tests {
    use super::*;

    #[test]
    fn test_theft_without_fir_is_rejected() {
        let claim = TestClaimBuilder::new()
            .with_loss_type("theft")
            .with_fir_submitted(false)
            .build();

        let result = evaluate(&claim).unwrap();

        assert_rejected_with(&result, "FIR");
        assert_payable(&result, MoneyFixtures::zero());
        assert!(result.explanation.starts_with("CLAIM REJECTED:"));

        let reason = result.rejection_reason.as_deref().unwrap().to_lowercase();
        assert!(result.explanation.contains(&reason));
    }

    #[test]
    fn test_third_party_own_damage_is_not_covered() {
        let claim = TestClaimBuilder::new()
            .with_policy_type("third_party")
            .with_loss_type("own_damage")
            .with_previous_claims(0)
            .build();

        let result = evaluate(&claim).unwrap();

        assert_eq!(result.coverage_status, CoverageStatus::NotCovered);
        assert_rejected_with(&result, "not covered");
        assert_trace_contains(&result, "Third-party policy does not cover own damage");
    }

    #[test]
    fn test_comprehensive_accident_is_approved() {
        let result = evaluate(&TestClaimBuilder::new().build()).unwrap();

        assert_decision(&result, ClaimDecision::Approved);
        assert_eq!(result.claim_validity, ClaimValidity::Valid);
        assert_eq!(result.coverage_status, CoverageStatus::Covered);
        assert_eq!(result.fraud_risk, FraudRisk::Low);
        assert_payable(&result, MoneyFixtures::expected_payable());
        assert!(result.explanation.contains("₹145,000.00"));
    }

    #[test]
    fn test_three_previous_claims_go_to_investigation() {
        let claim = TestClaimBuilder::new().with_previous_claims(3).build();

        let result = evaluate(&claim).unwrap();

        assert_decision(&result, ClaimDecision::UnderInvestigation);
        assert_eq!(result.fraud_risk, FraudRisk::High);
        assert_payable(&result, MoneyFixtures::zero());
        assert!(result.explanation.contains("has 3 previous claims"));
    }
}

// ============================================================================
// Rule Interaction Tests
// ============================================================================

mod rule_interaction_tests {
    use super::*;

    #[test]
    fn test_policy_period_bounds_are_inclusive() {
        for loss_date in [TemporalFixtures::policy_start(), TemporalFixtures::policy_end()] {
            let claim = TestClaimBuilder::new().with_loss_date(loss_date).build();
            let result = evaluate(&claim).unwrap();

            assert_eq!(result.claim_validity, ClaimValidity::Valid);
            assert_decision(&result, ClaimDecision::Approved);
        }
    }

    #[test]
    fn test_loss_outside_period_is_rejected() {
        for loss_date in [TemporalFixtures::before_policy(), TemporalFixtures::after_policy()] {
            let claim = TestClaimBuilder::new().with_loss_date(loss_date).build();
            let result = evaluate(&claim).unwrap();

            assert_eq!(result.claim_validity, ClaimValidity::Invalid);
            assert_rejected_with(&result, "outside policy period");
            assert!(result.explanation.contains("2024-01-01 to 2025-01-01"));
        }
    }

    #[test]
    fn test_high_fraud_risk_outranks_invalid_period() {
        let claim = TestClaimBuilder::new()
            .with_loss_date(TemporalFixtures::after_policy())
            .with_previous_claims(5)
            .build();

        let result = evaluate(&claim).unwrap();

        assert_decision(&result, ClaimDecision::UnderInvestigation);
        assert_eq!(result.rejection_reason, None);
    }

    #[test]
    fn test_document_rejection_is_never_overridden() {
        let claim = TestClaimBuilder::new()
            .with_documents_complete(false)
            .with_previous_claims(4)
            .build();

        let run = InferenceEngine::new().run(&claim).unwrap();

        assert_eq!(run.facts.claim_decision(), Some(ClaimDecision::Rejected));
        assert_eq!(run.facts.fraud_risk(), Some(FraudRisk::High));
        assert_eq!(
            run.trace.firings(Phase::FinalDecision),
            vec!["RULE: Claim already rejected, no further evaluation needed"]
        );
    }

    #[test]
    fn test_medium_risk_approval_carries_caveat() {
        let result = evaluate(&TestClaimBuilder::new().with_previous_claims(2).build()).unwrap();

        assert_decision(&result, ClaimDecision::Approved);
        assert_eq!(result.fraud_risk, FraudRisk::Medium);
        assert!(result.explanation.contains("Medium fraud risk"));
    }

    #[test]
    fn test_unknown_types_fall_through_to_not_covered() {
        let claim = TestClaimBuilder::new()
            .with_policy_type("fleet")
            .with_loss_type("flood")
            .build();

        let result = evaluate(&claim).unwrap();

        assert_eq!(result.coverage_status, CoverageStatus::NotCovered);
        assert_rejected_with(&result, "not covered");
        assert_trace_contains(&result, "flood not covered under fleet");
    }

    #[test]
    fn test_claim_capped_at_sum_insured() {
        let claim = TestClaimBuilder::new()
            .with_amounts(
                MoneyFixtures::inr(dec!(800000)),
                MoneyFixtures::inr(dec!(500000)),
                MoneyFixtures::inr(dec!(10000)),
            )
            .build();

        let result = evaluate(&claim).unwrap();

        assert_payable(&result, MoneyFixtures::inr(dec!(490000)));
        assert_trace_contains(&result, "= 500000");
    }

    #[test]
    fn test_deductible_above_loss_pays_nothing() {
        let claim = TestClaimBuilder::new()
            .with_claim_amount(MoneyFixtures::inr(dec!(3000)))
            .build();

        let result = evaluate(&claim).unwrap();

        assert_decision(&result, ClaimDecision::Approved);
        assert_payable(&result, MoneyFixtures::zero());
    }
}

// ============================================================================
// Input Validation Tests
// ============================================================================

mod validation_tests {
    use super::*;

    #[test]
    fn test_negative_claim_amount_is_invalid_range() {
        let claim = TestClaimBuilder::new()
            .with_claim_amount(MoneyFixtures::inr(dec!(-10)))
            .build();

        assert!(matches!(
            evaluate(&claim),
            Err(ClaimError::InvalidRange { ref field, .. }) if field == "claim_amount"
        ));
    }

    #[test]
    fn test_zero_amounts_are_accepted() {
        let claim = TestClaimBuilder::new()
            .with_amounts(MoneyFixtures::zero(), MoneyFixtures::zero(), MoneyFixtures::zero())
            .build();

        let result = evaluate(&claim).unwrap();
        assert_payable(&result, MoneyFixtures::zero());
    }

    #[test]
    fn test_mixed_currencies_are_refused() {
        let claim = TestClaimBuilder::new()
            .with_deductible(MoneyFixtures::usd_100())
            .build();

        assert!(matches!(evaluate(&claim), Err(ClaimError::Money(_))));
    }
}

// ============================================================================
// Property Tests
// ============================================================================

mod property_tests {
    use super::*;

    proptest! {
        #[test]
        fn evaluation_is_deterministic(claim in claim_input_strategy()) {
            let first = evaluate(&claim).unwrap();
            let second = evaluate(&claim).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn only_approved_claims_pay(claim in claim_input_strategy()) {
            let result = evaluate(&claim).unwrap();
            if result.claim_decision == ClaimDecision::Approved {
                let admissible = claim.claim_amount.amount().min(claim.sum_insured.amount());
                let expected = (admissible - claim.deductible.amount()).max(dec!(0));
                prop_assert_eq!(result.payable_amount.amount(), expected);
            } else {
                prop_assert!(result.payable_amount.is_zero());
            }
        }

        #[test]
        fn high_risk_never_approved(claim in claim_input_strategy()) {
            let result = evaluate(&claim).unwrap();
            if result.fraud_risk == FraudRisk::High {
                prop_assert_ne!(result.claim_decision, ClaimDecision::Approved);
            }
        }

        #[test]
        fn approval_requires_valid_and_covered(claim in claim_input_strategy()) {
            let result = evaluate(&claim).unwrap();
            if result.claim_decision == ClaimDecision::Approved {
                prop_assert_eq!(result.claim_validity, ClaimValidity::Valid);
                prop_assert_eq!(result.coverage_status, CoverageStatus::Covered);
                prop_assert!(claim.documents_complete);
            }
        }

        #[test]
        fn trace_lists_every_phase_once(claim in claim_input_strategy()) {
            let run = InferenceEngine::new().run(&claim).unwrap();
            for phase in Phase::ALL {
                let headings = run.trace.lines().filter(|l| *l == phase.heading()).count();
                prop_assert_eq!(headings, 1);
                prop_assert!(!run.trace.firings(phase).is_empty());
            }
        }
    }
}
