//! Core data types for the lingo data tools.
//!
//! This crate defines the fundamental types shared by the lingo crates:
//! package entries and name splitting, data-directory configuration,
//! package metadata access, and affix pattern compilation.
//!
//! This crate is intentionally free of resolution logic; picking the best
//! version for a constraint lives in `lingo-resolver`.

pub mod affixes;
pub mod config;
pub mod meta;
pub mod package;
