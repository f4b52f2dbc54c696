//! Custom Test Assertions
//!
//! Assertion helpers for evaluation results that print the explanation and
//! trace on failure, which is usually what is needed to see which rule fired.

use core_kernel::Money;
use domain_claims::{ClaimDecision, EvaluationResult};

/// Asserts the decision, dumping the trace when it differs
pub fn assert_decision(result: &EvaluationResult, expected: ClaimDecision) {
    assert_eq!(
        result.claim_decision,
        expected,
        "Unexpected decision.\nExplanation: {}\nTrace:\n{}",
        result.explanation,
        result.inference_trace.join("\n")
    );
}

/// Asserts a rejection whose reason contains `fragment`
pub fn assert_rejected_with(result: &EvaluationResult, fragment: &str) {
    assert_decision(result, ClaimDecision::Rejected);
    let reason = result.rejection_reason.as_deref().unwrap_or_default();
    assert!(
        reason.contains(fragment),
        "Expected rejection reason containing '{}', got '{}'",
        fragment,
        reason
    );
}

/// Asserts the payable amount exactly, currency included
pub fn assert_payable(result: &EvaluationResult, expected: Money) {
    assert_eq!(
        result.payable_amount, expected,
        "Payable amount mismatch: actual={}, expected={}",
        result.payable_amount, expected
    );
}

/// Asserts that the trace contains a line with `fragment`
pub fn assert_trace_contains(result: &EvaluationResult, fragment: &str) {
    assert!(
        result.inference_trace.iter().any(|line| line.contains(fragment)),
        "No trace line contains '{}'. Trace:\n{}",
        fragment,
        result.inference_trace.join("\n")
    );
}
