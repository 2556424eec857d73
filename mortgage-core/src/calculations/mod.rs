//! Mortgage-readiness calculation modules.
//!
//! This module provides the readiness worksheet plus the shared numeric
//! helpers it builds on. All arithmetic stays in [`rust_decimal::Decimal`].

pub mod common;
pub mod readiness;

pub use readiness::{
    LendingGuidelines, ReadinessCalculator, ReadinessError, ReadinessReport, ReadinessStatus,
};
