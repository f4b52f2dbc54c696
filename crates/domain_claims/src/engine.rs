//! Inference engine
//!
//! Runs the rule phases over a fresh fact store, in order and once each,
//! then renders the explanation. The engine holds no state: every call
//! builds its own fact store and trace, so one engine can serve any number
//! of concurrent evaluations.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use core_kernel::Money;
use crate::claim::ClaimInput;
use crate::error::ClaimError;
use crate::explanation::explain;
use crate::facts::{ClaimDecision, ClaimValidity, CoverageStatus, FactStore, FraudRisk};
use crate::rules::PIPELINE;
use crate::trace::InferenceTrace;

/// Outcome of evaluating one claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub claim_validity: ClaimValidity,
    pub coverage_status: CoverageStatus,
    pub claim_decision: ClaimDecision,
    pub payable_amount: Money,
    pub fraud_risk: FraudRisk,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    pub explanation: String,
    pub inference_trace: Vec<String>,
}

impl EvaluationResult {
    fn from_run(run: InferenceRun) -> Result<Self, ClaimError> {
        let facts = &run.facts;
        Ok(Self {
            claim_validity: facts.require_claim_validity()?,
            coverage_status: facts.require_coverage_status()?,
            claim_decision: facts.require_claim_decision()?,
            payable_amount: facts.require_payable_amount()?,
            fraud_risk: facts.require_fraud_risk()?,
            rejection_reason: facts.rejection_reason().map(|r| r.as_str().to_string()),
            explanation: explain(facts),
            inference_trace: run.trace.into_lines(),
        })
    }
}

/// Final fact store and trace of one evaluation, kept for auditing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceRun {
    pub facts: FactStore,
    pub trace: InferenceTrace,
}

/// Forward-chaining engine over the fixed claim rule set
#[derive(Debug, Clone, Copy, Default)]
pub struct InferenceEngine;

impl InferenceEngine {
    pub fn new() -> Self {
        Self
    }

    /// Evaluates a claim end to end
    ///
    /// # Errors
    ///
    /// * `ClaimError::InvalidRange` - a monetary amount is negative
    /// * `ClaimError::Money` - the amounts are in different currencies
    pub fn evaluate(&self, claim: &ClaimInput) -> Result<EvaluationResult, ClaimError> {
        let result = EvaluationResult::from_run(self.run(claim)?)?;

        info!(
            decision = %result.claim_decision,
            fraud_risk = %result.fraud_risk,
            payable_amount = %result.payable_amount,
            "Claim evaluated"
        );

        Ok(result)
    }

    /// Runs every phase and returns the final fact store with its trace
    pub fn run(&self, claim: &ClaimInput) -> Result<InferenceRun, ClaimError> {
        claim.validate()?;

        let mut facts = FactStore::seed(claim.clone());
        let mut trace = InferenceTrace::new();
        trace.record_initialization();

        for (phase, apply) in PIPELINE {
            let outcome = apply(facts)?;
            debug!(%phase, lines = outcome.lines.len(), "Phase applied");
            trace.record_phase(phase, outcome.lines);
            facts = outcome.facts;
        }

        Ok(InferenceRun { facts, trace })
    }
}

/// Evaluates a claim with a fresh engine
pub fn evaluate(claim: &ClaimInput) -> Result<EvaluationResult, ClaimError> {
    InferenceEngine::new().evaluate(claim)
}
