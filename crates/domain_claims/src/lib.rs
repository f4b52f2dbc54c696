//! Claim Evaluation Domain
//!
//! This crate implements a forward-chaining expert system that decides a
//! single motor/property insurance claim. A fact store seeded from the claim
//! is passed through six rule phases, each deriving new facts and recording
//! what fired, and the final store is rendered as a plain-language
//! explanation.
//!
//! # Evaluation Pipeline
//!
//! ```text
//! Policy Validity -> Coverage -> Documents -> Fraud Risk -> Final Decision -> Payable Amount
//!                                    |                            ^
//!                                    +--- rejection skips --------+
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_claims::{ClaimInput, InferenceEngine};
//!
//! let claim = ClaimInput::builder()
//!     .policy_type("comprehensive")
//!     .loss_type("accident")
//!     // ...remaining facts
//!     .build()?;
//!
//! let result = InferenceEngine::new().evaluate(&claim)?;
//! println!("{}: {}", result.claim_decision, result.explanation);
//! ```

pub mod claim;
pub mod facts;
pub mod trace;
pub mod rules;
pub mod explanation;
pub mod engine;
pub mod error;

#[cfg(test)]
mod test_support;

pub use claim::{ClaimInput, ClaimInputBuilder, LossType, PolicyType};
pub use facts::{
    ClaimDecision, ClaimValidity, CoverageStatus, FactStore, FraudRisk, RejectionReason,
};
pub use trace::{InferenceTrace, Phase};
pub use explanation::explain;
pub use engine::{evaluate, EvaluationResult, InferenceEngine, InferenceRun};
pub use error::ClaimError;
