//! Coverage determination: is this loss type covered by this policy type?
//!
//! Rules are checked in priority order and the first match wins. The
//! third-party/own-damage exclusion is listed ahead of the comprehensive
//! perils rule and must stay there.

use crate::claim::{LossType, PolicyType};
use crate::error::ClaimError;
use crate::facts::{CoverageStatus, FactLabel, FactStore};
use super::PhaseOutcome;

/// The coverage rule that fired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverageRule {
    ThirdPartyExcludesOwnDamage,
    ComprehensiveCoversPeril,
    ThirdPartyDamageCovered,
    NotListed,
}

impl CoverageRule {
    pub fn select(policy_type: &PolicyType, loss_type: &LossType) -> Self {
        use LossType::*;

        match (policy_type, loss_type) {
            (PolicyType::ThirdParty, OwnDamage) => CoverageRule::ThirdPartyExcludesOwnDamage,
            (PolicyType::Comprehensive, Accident | Theft | Fire | OwnDamage) => {
                CoverageRule::ComprehensiveCoversPeril
            }
            (_, ThirdPartyDamage) => CoverageRule::ThirdPartyDamageCovered,
            _ => CoverageRule::NotListed,
        }
    }

    pub fn status(&self) -> CoverageStatus {
        match self {
            CoverageRule::ComprehensiveCoversPeril | CoverageRule::ThirdPartyDamageCovered => {
                CoverageStatus::Covered
            }
            CoverageRule::ThirdPartyExcludesOwnDamage | CoverageRule::NotListed => {
                CoverageStatus::NotCovered
            }
        }
    }
}

pub fn apply(mut facts: FactStore) -> Result<PhaseOutcome, ClaimError> {
    let claim = facts.claim();
    let rule = CoverageRule::select(&claim.policy_type, &claim.loss_type);
    let status = rule.status();

    let premise = match rule {
        CoverageRule::ThirdPartyExcludesOwnDamage => {
            "Third-party policy does not cover own damage".to_string()
        }
        CoverageRule::ComprehensiveCoversPeril => {
            format!("Comprehensive policy covers {}", claim.loss_type)
        }
        CoverageRule::ThirdPartyDamageCovered => "Third-party damage is covered".to_string(),
        CoverageRule::NotListed => {
            format!("{} not covered under {}", claim.loss_type, claim.policy_type)
        }
    };
    let line = format!("RULE FIRED: {} → coverage_status = {}", premise, status.label());

    facts.set_coverage_status(status)?;
    Ok(PhaseOutcome::new(facts, line))
}
