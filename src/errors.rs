// ABOUTME: Configuration error taxonomy for nutrition table validation
// ABOUTME: The calculators themselves never fail; only config loading can
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan

//! # Error Handling
//!
//! Errors in this crate are confined to configuration loading and
//! validation. The calculation API itself is infallible by contract:
//! unknown lookup keys fall back to documented defaults, incomplete
//! profiles yield a `None` sentinel, and out-of-domain numeric inputs
//! propagate arithmetically rather than being rejected.

use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A configured value is outside its valid range
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// A set of weights or percentages does not sum to the required total
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    /// Two table entries share the same lookup key
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// An environment variable override could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),
}
