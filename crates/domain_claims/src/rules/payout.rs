//! Payable amount calculation
//!
//! Only approved claims pay out. The admissible loss is capped at the sum
//! insured, the deductible comes off that, and the result never goes below
//! zero. Arithmetic is exact decimal arithmetic in the inputs' precision.

use core_kernel::Money;

use crate::error::ClaimError;
use crate::facts::{ClaimDecision, FactStore};
use super::PhaseOutcome;

/// Intermediate and final amounts of a payout calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payout {
    pub admissible_loss: Money,
    pub payable_amount: Money,
}

/// `max(0, min(claim_amount, sum_insured) - deductible)`
pub fn calculate(
    claim_amount: &Money,
    sum_insured: &Money,
    deductible: &Money,
) -> Result<Payout, ClaimError> {
    let admissible_loss = claim_amount.checked_min(sum_insured)?;
    let payable_amount = admissible_loss.checked_sub(deductible)?.floor_at_zero();
    Ok(Payout {
        admissible_loss,
        payable_amount,
    })
}

pub fn apply(mut facts: FactStore) -> Result<PhaseOutcome, ClaimError> {
    let decision = facts.require_claim_decision()?;
    let claim = facts.claim();

    if decision != ClaimDecision::Approved {
        let zero = Money::zero(claim.currency());
        facts.set_payable_amount(zero)?;
        return Ok(PhaseOutcome::new(facts, "Claim not approved → payable_amount = 0"));
    }

    let claim_amount = claim.claim_amount;
    let sum_insured = claim.sum_insured;
    let deductible = claim.deductible;
    let payout = calculate(&claim_amount, &sum_insured, &deductible)?;

    let lines = vec![
        format!(
            "Admissible Loss = MIN(claim_amount: {}, sum_insured: {}) = {}",
            claim_amount.amount(),
            sum_insured.amount(),
            payout.admissible_loss.amount()
        ),
        format!(
            "Payable Amount = {} - {} (deductible) = {}",
            payout.admissible_loss.amount(),
            deductible.amount(),
            payout.payable_amount.amount()
        ),
    ];

    facts.set_payable_amount(payout.payable_amount)?;
    Ok(PhaseOutcome { facts, lines })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::RejectionReason;
    use crate::test_support::{approvable_claim, inr, seeded};
    use rust_decimal_macros::dec;

    #[test]
    fn test_approved_claim_pays_net_of_deductible() {
        let mut facts = seeded(approvable_claim());
        facts.approve().unwrap();

        let outcome = apply(facts).unwrap();
        assert_eq!(outcome.facts.payable_amount(), Some(inr(dec!(145000))));
        assert_eq!(
            outcome.lines,
            vec![
                "Admissible Loss = MIN(claim_amount: 150000, sum_insured: 500000) = 150000",
                "Payable Amount = 150000 - 5000 (deductible) = 145000",
            ]
        );
    }

    #[test]
    fn test_claim_capped_at_sum_insured() {
        let payout = calculate(&inr(dec!(750000)), &inr(dec!(500000)), &inr(dec!(10000))).unwrap();
        assert_eq!(payout.admissible_loss, inr(dec!(500000)));
        assert_eq!(payout.payable_amount, inr(dec!(490000)));
    }

    #[test]
    fn test_deductible_larger_than_loss_pays_zero() {
        let payout = calculate(&inr(dec!(3000)), &inr(dec!(500000)), &inr(dec!(5000))).unwrap();
        assert!(payout.payable_amount.is_zero());
    }

    #[test]
    fn test_fractional_amounts_stay_exact() {
        let payout = calculate(&inr(dec!(1000.10)), &inr(dec!(5000)), &inr(dec!(0.20))).unwrap();
        assert_eq!(payout.payable_amount.amount(), dec!(999.90));
    }

    #[test]
    fn test_rejected_claim_pays_nothing() {
        let mut facts = seeded(approvable_claim());
        facts.reject(RejectionReason::LossNotCovered).unwrap();

        let outcome = apply(facts).unwrap();
        assert!(outcome.facts.payable_amount().unwrap().is_zero());
        assert_eq!(outcome.lines, vec!["Claim not approved → payable_amount = 0"]);
    }

    #[test]
    fn test_missing_decision_is_reported() {
        let result = apply(seeded(approvable_claim()));
        assert_eq!(result.unwrap_err(), ClaimError::MissingFact("claim_decision".to_string()));
    }
}
