//! Shared utilities for the lingo data tools.
//!
//! This crate provides cross-cutting concerns used by all other lingo crates:
//! error types, console reporting, and slice-bounds normalization.

pub mod console;
pub mod errors;
pub mod slice;
