//! Pre-built Test Fixtures
//!
//! Ready-to-use dates, amounts and JSON records for claim evaluation tests.
//! All amounts are in INR.

use chrono::NaiveDate;
use core_kernel::{Currency, Money};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Wraps an amount in INR
    pub fn inr(amount: Decimal) -> Money {
        Money::new(amount, Currency::INR)
    }

    /// Claimed amount of the reference approvable claim
    pub fn claim_amount() -> Money {
        Self::inr(dec!(150000))
    }

    pub fn sum_insured() -> Money {
        Self::inr(dec!(500000))
    }

    pub fn deductible() -> Money {
        Self::inr(dec!(5000))
    }

    /// Expected payout of the reference approvable claim
    pub fn expected_payable() -> Money {
        Self::inr(dec!(145000))
    }

    pub fn zero() -> Money {
        Money::zero(Currency::INR)
    }

    /// Creates a USD amount for currency mismatch tests
    pub fn usd_100() -> Money {
        Money::new(dec!(100.00), Currency::USD)
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
    }

    /// Standard policy start date (Jan 1, 2024)
    pub fn policy_start() -> NaiveDate {
        Self::date(2024, 1, 1)
    }

    /// Standard policy end date (Jan 1, 2025)
    pub fn policy_end() -> NaiveDate {
        Self::date(2025, 1, 1)
    }

    /// Loss date well inside the policy period
    pub fn loss_date() -> NaiveDate {
        Self::date(2024, 6, 15)
    }

    /// One day before the policy starts
    pub fn before_policy() -> NaiveDate {
        Self::date(2023, 12, 31)
    }

    /// One day after the policy ends
    pub fn after_policy() -> NaiveDate {
        Self::date(2025, 1, 2)
    }
}

/// Fixture for raw JSON claim records as posted to the API
pub struct RecordFixtures;

impl RecordFixtures {
    /// The reference approvable claim as a JSON record
    pub fn approvable() -> Value {
        json!({
            "policy_type": "comprehensive",
            "policy_start_date": "2024-01-01",
            "policy_end_date": "2025-01-01",
            "loss_date": "2024-06-15",
            "loss_type": "accident",
            "claim_amount": "150000",
            "sum_insured": "500000",
            "deductible": "5000",
            "fir_submitted": false,
            "documents_complete": true,
            "previous_claims": 1
        })
    }

    /// The approvable record with selected fields overridden
    pub fn approvable_with(overrides: Value) -> Value {
        let mut record = Self::approvable();
        if let (Some(target), Some(source)) = (record.as_object_mut(), overrides.as_object()) {
            for (key, value) in source {
                target.insert(key.clone(), value.clone());
            }
        }
        record
    }
}
