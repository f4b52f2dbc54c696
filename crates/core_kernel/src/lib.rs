//! Core Kernel - Foundational types for the claim evaluation engine
//!
//! This crate provides the value objects shared by the domain and interface crates:
//! - Money types with precise decimal arithmetic
//! - Inclusive calendar date ranges for policy periods

pub mod money;
pub mod temporal;

pub use money::{Money, Currency, MoneyError};
pub use temporal::{DateRange, DatePosition};
