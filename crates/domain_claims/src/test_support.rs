//! Shared fixtures for unit tests inside this crate

use chrono::NaiveDate;
use core_kernel::{Currency, Money};
use rust_decimal_macros::dec;

use crate::claim::{ClaimInput, ClaimInputBuilder};
use crate::facts::FactStore;

pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub(crate) fn inr(amount: rust_decimal::Decimal) -> Money {
    Money::new(amount, Currency::INR)
}

/// Comprehensive accident claim inside a 2024 policy year; approvable as-is
pub(crate) fn approvable_claim() -> ClaimInputBuilder {
    ClaimInput::builder()
        .policy_type("comprehensive")
        .policy_start_date(date(2024, 1, 1))
        .policy_end_date(date(2025, 1, 1))
        .loss_date(date(2024, 6, 15))
        .loss_type("accident")
        .claim_amount(inr(dec!(150000)))
        .sum_insured(inr(dec!(500000)))
        .deductible(inr(dec!(5000)))
        .fir_submitted(false)
        .documents_complete(true)
        .previous_claims(1)
}

pub(crate) fn seeded(builder: ClaimInputBuilder) -> FactStore {
    FactStore::seed(builder.build().unwrap())
}
