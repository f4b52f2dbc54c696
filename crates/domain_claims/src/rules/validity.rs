//! Policy validity: was the policy in force on the loss date?

use core_kernel::DatePosition;

use crate::error::ClaimError;
use crate::facts::{ClaimValidity, FactLabel, FactStore};
use super::PhaseOutcome;

pub fn apply(mut facts: FactStore) -> Result<PhaseOutcome, ClaimError> {
    let claim = facts.claim();
    let period = claim.policy_period();
    let loss_date = claim.loss_date;

    let (validity, comparison) = match period.position(loss_date) {
        DatePosition::BeforeStart => (
            ClaimValidity::Invalid,
            format!("Loss date ({}) before policy start ({})", loss_date, period.start),
        ),
        DatePosition::AfterEnd => (
            ClaimValidity::Invalid,
            format!("Loss date ({}) after policy end ({})", loss_date, period.end),
        ),
        DatePosition::Within => (
            ClaimValidity::Valid,
            format!("Loss date ({}) within policy period ({})", loss_date, period),
        ),
    };

    facts.set_claim_validity(validity)?;
    let line = format!("RULE FIRED: {} → claim_validity = {}", comparison, validity.label());
    Ok(PhaseOutcome::new(facts, line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::test_support::{approvable_claim, date, seeded};

    fn run(loss_date: NaiveDate) -> PhaseOutcome {
        apply(seeded(approvable_claim().loss_date(loss_date))).unwrap()
    }

    #[test]
    fn test_loss_before_start_is_invalid() {
        let outcome = run(date(2023, 12, 31));
        assert_eq!(outcome.facts.claim_validity(), Some(ClaimValidity::Invalid));
        assert_eq!(
            outcome.lines,
            vec!["RULE FIRED: Loss date (2023-12-31) before policy start (2024-01-01) → claim_validity = INVALID"]
        );
    }

    #[test]
    fn test_loss_after_end_is_invalid() {
        let outcome = run(date(2025, 1, 2));
        assert_eq!(outcome.facts.claim_validity(), Some(ClaimValidity::Invalid));
        assert!(outcome.lines[0].contains("after policy end (2025-01-01)"));
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        for loss_date in [date(2024, 1, 1), date(2025, 1, 1)] {
            let outcome = run(loss_date);
            assert_eq!(outcome.facts.claim_validity(), Some(ClaimValidity::Valid));
        }
    }

    #[test]
    fn test_within_period_line_names_the_period() {
        let outcome = run(date(2024, 6, 15));
        assert_eq!(
            outcome.lines,
            vec!["RULE FIRED: Loss date (2024-06-15) within policy period (2024-01-01 to 2025-01-01) → claim_validity = VALID"]
        );
    }

    #[test]
    fn test_second_run_on_same_store_is_rejected() {
        let outcome = run(date(2024, 6, 15));
        assert!(matches!(apply(outcome.facts), Err(ClaimError::FactAlreadyDerived(_))));
    }
}
