//! # Unit Demonstrations
//!
//! Runs scripted unit scenarios:
//! - Built-in scenarios for each variant
//! - RON scenario files from disk

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builtin;
pub mod loader;
