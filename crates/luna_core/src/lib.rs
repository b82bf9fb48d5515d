//! Provide the canonical language vocabulary for the Luna syntax front end and its tooling.
//!
//! ## Notes
//!
//! - This is a “vocabulary core” crate: **no IO**, no global state, and no parser-specific types.
//! - Callers work with stable IDs (e.g. [`lang::keywords::KeywordId`]) and look spellings up in registry tables.

pub mod lang;
