//! # Unit Test Utilities
//!
//! Shared testing utilities for all crates:
//! - Narration capture through a `tracing` layer
//! - Fixture helpers for common unit states
//! - Property-based testing strategies

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod capture;
pub mod fixtures;
pub mod strategies;

/// Re-export proptest for convenience.
pub use proptest;
