//! Inference trace
//!
//! An append-only log of what the engine did: the knowledge-base header,
//! one heading per phase, and the rule firings recorded by each phase.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::claim::ClaimInput;

/// The ordered evaluation phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    PolicyValidity,
    Coverage,
    Documents,
    FraudRisk,
    FinalDecision,
    PayableAmount,
}

impl Phase {
    /// Phases in evaluation order
    pub const ALL: [Phase; 6] = [
        Phase::PolicyValidity,
        Phase::Coverage,
        Phase::Documents,
        Phase::FraudRisk,
        Phase::FinalDecision,
        Phase::PayableAmount,
    ];

    pub fn heading(&self) -> &'static str {
        match self {
            Phase::PolicyValidity => "--- APPLYING POLICY VALIDITY RULES ---",
            Phase::Coverage => "--- APPLYING COVERAGE RULES ---",
            Phase::Documents => "--- APPLYING DOCUMENT RULES ---",
            Phase::FraudRisk => "--- APPLYING FRAUD RISK RULES ---",
            Phase::FinalDecision => "--- APPLYING FINAL DECISION RULES ---",
            Phase::PayableAmount => "--- CALCULATING PAYABLE AMOUNT ---",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::PolicyValidity => "policy_validity",
            Phase::Coverage => "coverage",
            Phase::Documents => "documents",
            Phase::FraudRisk => "fraud_risk",
            Phase::FinalDecision => "final_decision",
            Phase::PayableAmount => "payable_amount",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceEntryKind {
    Initialization,
    PhaseHeading,
    Firing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceEntry {
    pub phase: Option<Phase>,
    pub kind: TraceEntryKind,
    pub line: String,
}

/// Ordered record of one claim's evaluation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceTrace {
    entries: Vec<TraceEntry>,
}

impl InferenceTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the knowledge-base header listing the seeded input facts
    pub fn record_initialization(&mut self) {
        self.push(None, TraceEntryKind::Initialization, "=== KNOWLEDGE BASE INITIALIZED ===".to_string());
        self.push(
            None,
            TraceEntryKind::Initialization,
            format!("Input Facts: [{}]", ClaimInput::FACT_NAMES.join(", ")),
        );
    }

    /// Records a phase heading followed by the lines the phase produced
    pub fn record_phase(&mut self, phase: Phase, lines: Vec<String>) {
        self.push(Some(phase), TraceEntryKind::PhaseHeading, phase.heading().to_string());
        for line in lines {
            self.push(Some(phase), TraceEntryKind::Firing, line);
        }
    }

    fn push(&mut self, phase: Option<Phase>, kind: TraceEntryKind, line: String) {
        self.entries.push(TraceEntry { phase, kind, line });
    }

    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.line.as_str())
    }

    /// Rule lines recorded by a single phase, without its heading
    pub fn firings(&self, phase: Phase) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.phase == Some(phase) && e.kind == TraceEntryKind::Firing)
            .map(|e| e.line.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_lines(self) -> Vec<String> {
        self.entries.into_iter().map(|e| e.line).collect()
    }
}
