//! Rule phases
//!
//! Each phase is a plain function that takes the current fact store and
//! returns the updated store together with the trace lines it produced.
//! `PIPELINE` lists the phases in the fixed order the engine runs them.

pub mod validity;
pub mod coverage;
pub mod documents;
pub mod fraud;
pub mod decision;
pub mod payout;

use crate::error::ClaimError;
use crate::facts::FactStore;
use crate::trace::Phase;

/// Updated fact store plus the rule lines a phase recorded
#[derive(Debug, Clone)]
pub struct PhaseOutcome {
    pub facts: FactStore,
    pub lines: Vec<String>,
}

impl PhaseOutcome {
    pub fn new(facts: FactStore, line: impl Into<String>) -> Self {
        Self {
            facts,
            lines: vec![line.into()],
        }
    }
}

pub type PhaseFn = fn(FactStore) -> Result<PhaseOutcome, ClaimError>;

pub const PIPELINE: [(Phase, PhaseFn); 6] = [
    (Phase::PolicyValidity, validity::apply),
    (Phase::Coverage, coverage::apply),
    (Phase::Documents, documents::apply),
    (Phase::FraudRisk, fraud::apply),
    (Phase::FinalDecision, decision::apply),
    (Phase::PayableAmount, payout::apply),
];
