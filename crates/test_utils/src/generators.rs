//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating claim inputs that satisfy
//! the input invariants: one currency (INR) and non-negative amounts.

use chrono::{Duration, NaiveDate};
use core_kernel::{Currency, Money};
use domain_claims::{ClaimInput, LossType, PolicyType};
use proptest::prelude::*;

/// Strategy for the recognised policy types
pub fn policy_type_strategy() -> impl Strategy<Value = PolicyType> {
    prop_oneof![Just(PolicyType::Comprehensive), Just(PolicyType::ThirdParty)]
}

/// Strategy for the recognised loss types
pub fn loss_type_strategy() -> impl Strategy<Value = LossType> {
    prop_oneof![
        Just(LossType::Accident),
        Just(LossType::Theft),
        Just(LossType::Fire),
        Just(LossType::OwnDamage),
        Just(LossType::ThirdPartyDamage),
    ]
}

/// Strategy for non-negative INR amounts up to one crore, in paise
pub fn inr_amount_strategy() -> impl Strategy<Value = Money> {
    (0i64..1_000_000_000i64).prop_map(|minor| Money::from_minor(minor, Currency::INR))
}

/// Strategy for dates between 2020 and the end of 2029
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..3652).prop_map(|offset| base_date() + Duration::days(offset))
}

/// Strategy for a policy period of one day to two years
pub fn policy_period_strategy() -> impl Strategy<Value = (NaiveDate, NaiveDate)> {
    (date_strategy(), 0i64..730).prop_map(|(start, length)| (start, start + Duration::days(length)))
}

/// Strategy for small prior-claim counts around the fraud thresholds
pub fn previous_claims_strategy() -> impl Strategy<Value = u32> {
    0u32..8
}

/// Strategy for fully populated, valid claim inputs
pub fn claim_input_strategy() -> impl Strategy<Value = ClaimInput> {
    (
        policy_type_strategy(),
        policy_period_strategy(),
        -30i64..760,
        loss_type_strategy(),
        (inr_amount_strategy(), inr_amount_strategy(), inr_amount_strategy()),
        any::<bool>(),
        any::<bool>(),
        previous_claims_strategy(),
    )
        .prop_map(
            |(
                policy_type,
                (start, end),
                loss_offset,
                loss_type,
                (claim_amount, sum_insured, deductible),
                fir_submitted,
                documents_complete,
                previous_claims,
            )| ClaimInput {
                policy_type,
                policy_start_date: start,
                policy_end_date: end,
                loss_date: start + Duration::days(loss_offset),
                loss_type,
                claim_amount,
                sum_insured,
                deductible,
                fir_submitted,
                documents_complete,
                previous_claims,
            },
        )
}

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid base date")
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn generated_claims_pass_validation(claim in claim_input_strategy()) {
            prop_assert!(claim.validate().is_ok());
        }

        #[test]
        fn policy_period_is_ordered((start, end) in policy_period_strategy()) {
            prop_assert!(start <= end);
        }
    }
}
