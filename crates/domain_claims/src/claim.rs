//! Claim input record
//!
//! `ClaimInput` is the immutable set of facts supplied by the caller before
//! inference begins. Policy and loss types are parsed case-insensitively;
//! values outside the known vocabulary are kept verbatim and handled by the
//! rules' fallback branches rather than rejected.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use core_kernel::{Currency, DateRange, Money, MoneyError};
use crate::error::ClaimError;

/// Type of motor/property policy the claim is made against
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PolicyType {
    Comprehensive,
    ThirdParty,
    /// Unrecognised policy type, kept as supplied
    Other(String),
}

impl PolicyType {
    /// Parses a policy type, ignoring case and surrounding whitespace
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        match trimmed.to_lowercase().as_str() {
            "comprehensive" => PolicyType::Comprehensive,
            "third_party" => PolicyType::ThirdParty,
            _ => PolicyType::Other(trimmed.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PolicyType::Comprehensive => "comprehensive",
            PolicyType::ThirdParty => "third_party",
            PolicyType::Other(raw) => raw,
        }
    }
}

impl From<&str> for PolicyType {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl fmt::Display for PolicyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PolicyType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PolicyType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(PolicyType::parse(&s))
    }
}

/// Type of loss being claimed
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LossType {
    Accident,
    Theft,
    Fire,
    OwnDamage,
    ThirdPartyDamage,
    /// Unrecognised loss type, kept as supplied
    Other(String),
}

impl LossType {
    /// Parses a loss type, ignoring case and surrounding whitespace
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        match trimmed.to_lowercase().as_str() {
            "accident" => LossType::Accident,
            "theft" => LossType::Theft,
            "fire" => LossType::Fire,
            "own_damage" => LossType::OwnDamage,
            "third_party_damage" => LossType::ThirdPartyDamage,
            _ => LossType::Other(trimmed.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            LossType::Accident => "accident",
            LossType::Theft => "theft",
            LossType::Fire => "fire",
            LossType::OwnDamage => "own_damage",
            LossType::ThirdPartyDamage => "third_party_damage",
            LossType::Other(raw) => raw,
        }
    }

    /// Losses that must be backed by a First Information Report
    pub fn requires_fir(&self) -> bool {
        matches!(self, LossType::Theft | LossType::Fire)
    }
}

impl From<&str> for LossType {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl fmt::Display for LossType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for LossType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LossType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(LossType::parse(&s))
    }
}

/// The facts known about a claim before inference begins
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimInput {
    pub policy_type: PolicyType,
    pub policy_start_date: NaiveDate,
    pub policy_end_date: NaiveDate,
    pub loss_date: NaiveDate,
    pub loss_type: LossType,
    pub claim_amount: Money,
    pub sum_insured: Money,
    pub deductible: Money,
    /// First Information Report lodged with the police
    pub fir_submitted: bool,
    pub documents_complete: bool,
    /// Claims made in the trailing one-year window
    pub previous_claims: u32,
}

impl ClaimInput {
    /// Names of the input facts, in the order they seed the fact store
    pub const FACT_NAMES: [&'static str; 11] = [
        "policy_type",
        "policy_start_date",
        "policy_end_date",
        "loss_date",
        "loss_type",
        "claim_amount",
        "sum_insured",
        "deductible",
        "fir_submitted",
        "documents_complete",
        "previous_claims",
    ];

    pub fn builder() -> ClaimInputBuilder {
        ClaimInputBuilder::new()
    }

    pub fn policy_period(&self) -> DateRange {
        DateRange::new(self.policy_start_date, self.policy_end_date)
    }

    /// Currency of the claim, taken from the claimed amount
    pub fn currency(&self) -> Currency {
        self.claim_amount.currency()
    }

    /// Rejects negative amounts and mixed currencies
    ///
    /// Zero amounts are accepted. Policy dates are not checked for order.
    pub fn validate(&self) -> Result<(), ClaimError> {
        let amounts = [
            ("claim_amount", &self.claim_amount),
            ("sum_insured", &self.sum_insured),
            ("deductible", &self.deductible),
        ];

        for (field, amount) in amounts {
            if amount.currency() != self.currency() {
                return Err(MoneyError::CurrencyMismatch(
                    self.currency().to_string(),
                    amount.currency().to_string(),
                )
                .into());
            }
            if amount.is_negative() {
                return Err(ClaimError::invalid_range(field, amount.amount()));
            }
        }

        Ok(())
    }
}

/// Builder for [`ClaimInput`]
///
/// Every field is required; `build` reports the first absent one as a
/// missing fact.
#[derive(Debug, Clone, Default)]
pub struct ClaimInputBuilder {
    policy_type: Option<PolicyType>,
    policy_start_date: Option<NaiveDate>,
    policy_end_date: Option<NaiveDate>,
    loss_date: Option<NaiveDate>,
    loss_type: Option<LossType>,
    claim_amount: Option<Money>,
    sum_insured: Option<Money>,
    deductible: Option<Money>,
    fir_submitted: Option<bool>,
    documents_complete: Option<bool>,
    previous_claims: Option<u32>,
}

impl ClaimInputBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn policy_type(mut self, policy_type: impl Into<PolicyType>) -> Self {
        self.policy_type = Some(policy_type.into());
        self
    }

    pub fn policy_start_date(mut self, date: NaiveDate) -> Self {
        self.policy_start_date = Some(date);
        self
    }

    pub fn policy_end_date(mut self, date: NaiveDate) -> Self {
        self.policy_end_date = Some(date);
        self
    }

    pub fn loss_date(mut self, date: NaiveDate) -> Self {
        self.loss_date = Some(date);
        self
    }

    pub fn loss_type(mut self, loss_type: impl Into<LossType>) -> Self {
        self.loss_type = Some(loss_type.into());
        self
    }

    pub fn claim_amount(mut self, amount: Money) -> Self {
        self.claim_amount = Some(amount);
        self
    }

    pub fn sum_insured(mut self, amount: Money) -> Self {
        self.sum_insured = Some(amount);
        self
    }

    pub fn deductible(mut self, amount: Money) -> Self {
        self.deductible = Some(amount);
        self
    }

    pub fn fir_submitted(mut self, submitted: bool) -> Self {
        self.fir_submitted = Some(submitted);
        self
    }

    pub fn documents_complete(mut self, complete: bool) -> Self {
        self.documents_complete = Some(complete);
        self
    }

    pub fn previous_claims(mut self, count: u32) -> Self {
        self.previous_claims = Some(count);
        self
    }

    /// Builds the claim input
    ///
    /// # Errors
    ///
    /// Returns `ClaimError::MissingFact` naming the first unset field.
    pub fn build(self) -> Result<ClaimInput, ClaimError> {
        Ok(ClaimInput {
            policy_type: self.policy_type.ok_or_else(|| ClaimError::missing("policy_type"))?,
            policy_start_date: self
                .policy_start_date
                .ok_or_else(|| ClaimError::missing("policy_start_date"))?,
            policy_end_date: self
                .policy_end_date
                .ok_or_else(|| ClaimError::missing("policy_end_date"))?,
            loss_date: self.loss_date.ok_or_else(|| ClaimError::missing("loss_date"))?,
            loss_type: self.loss_type.ok_or_else(|| ClaimError::missing("loss_type"))?,
            claim_amount: self.claim_amount.ok_or_else(|| ClaimError::missing("claim_amount"))?,
            sum_insured: self.sum_insured.ok_or_else(|| ClaimError::missing("sum_insured"))?,
            deductible: self.deductible.ok_or_else(|| ClaimError::missing("deductible"))?,
            fir_submitted: self
                .fir_submitted
                .ok_or_else(|| ClaimError::missing("fir_submitted"))?,
            documents_complete: self
                .documents_complete
                .ok_or_else(|| ClaimError::missing("documents_complete"))?,
            previous_claims: self
                .previous_claims
                .ok_or_else(|| ClaimError::missing("previous_claims"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_type_parse_is_case_insensitive() {
        assert_eq!(PolicyType::parse("Comprehensive"), PolicyType::Comprehensive);
        assert_eq!(PolicyType::parse(" THIRD_PARTY "), PolicyType::ThirdParty);
    }

    #[test]
    fn test_unknown_loss_type_is_kept_verbatim() {
        let loss = LossType::parse("Flood");
        assert_eq!(loss, LossType::Other("Flood".to_string()));
        assert_eq!(loss.to_string(), "Flood");
        assert!(!loss.requires_fir());
    }

    #[test]
    fn test_builder_reports_first_missing_field() {
        let result = ClaimInput::builder().policy_type("comprehensive").build();
        assert_eq!(result, Err(ClaimError::MissingFact("policy_start_date".to_string())));
    }
}
