//! Test Data Builders
//!
//! `TestClaimBuilder` starts from a claim that the engine approves with a
//! payout of 145000 (comprehensive accident, one prior claim) so tests only
//! spell out the fields that matter to them.

use chrono::NaiveDate;
use core_kernel::Money;
use domain_claims::{ClaimInput, LossType, PolicyType};

use crate::fixtures::{MoneyFixtures, TemporalFixtures};

/// Builder for constructing test claim inputs
#[derive(Debug, Clone)]
pub struct TestClaimBuilder {
    policy_type: PolicyType,
    policy_start_date: NaiveDate,
    policy_end_date: NaiveDate,
    loss_date: NaiveDate,
    loss_type: LossType,
    claim_amount: Money,
    sum_insured: Money,
    deductible: Money,
    fir_submitted: bool,
    documents_complete: bool,
    previous_claims: u32,
}

impl Default for TestClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClaimBuilder {
    /// Creates a new builder with approvable defaults
    pub fn new() -> Self {
        Self {
            policy_type: PolicyType::Comprehensive,
            policy_start_date: TemporalFixtures::policy_start(),
            policy_end_date: TemporalFixtures::policy_end(),
            loss_date: TemporalFixtures::loss_date(),
            loss_type: LossType::Accident,
            claim_amount: MoneyFixtures::claim_amount(),
            sum_insured: MoneyFixtures::sum_insured(),
            deductible: MoneyFixtures::deductible(),
            fir_submitted: false,
            documents_complete: true,
            previous_claims: 1,
        }
    }

    pub fn with_policy_type(mut self, policy_type: impl Into<PolicyType>) -> Self {
        self.policy_type = policy_type.into();
        self
    }

    pub fn with_loss_type(mut self, loss_type: impl Into<LossType>) -> Self {
        self.loss_type = loss_type.into();
        self
    }

    /// Sets both ends of the policy period
    pub fn with_policy_period(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.policy_start_date = start;
        self.policy_end_date = end;
        self
    }

    pub fn with_loss_date(mut self, date: NaiveDate) -> Self {
        self.loss_date = date;
        self
    }

    /// Sets claim amount, sum insured and deductible together
    pub fn with_amounts(mut self, claim_amount: Money, sum_insured: Money, deductible: Money) -> Self {
        self.claim_amount = claim_amount;
        self.sum_insured = sum_insured;
        self.deductible = deductible;
        self
    }

    pub fn with_claim_amount(mut self, amount: Money) -> Self {
        self.claim_amount = amount;
        self
    }

    pub fn with_deductible(mut self, amount: Money) -> Self {
        self.deductible = amount;
        self
    }

    pub fn with_fir_submitted(mut self, submitted: bool) -> Self {
        self.fir_submitted = submitted;
        self
    }

    pub fn with_documents_complete(mut self, complete: bool) -> Self {
        self.documents_complete = complete;
        self
    }

    pub fn with_previous_claims(mut self, count: u32) -> Self {
        self.previous_claims = count;
        self
    }

    /// Builds the claim input
    pub fn build(self) -> ClaimInput {
        ClaimInput {
            policy_type: self.policy_type,
            policy_start_date: self.policy_start_date,
            policy_end_date: self.policy_end_date,
            loss_date: self.loss_date,
            loss_type: self.loss_type,
            claim_amount: self.claim_amount,
            sum_insured: self.sum_insured,
            deductible: self.deductible,
            fir_submitted: self.fir_submitted,
            documents_complete: self.documents_complete,
            previous_claims: self.previous_claims,
        }
    }
}
