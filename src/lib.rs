#![forbid(unsafe_code)]
//! Luna syntax checker
//!
//! Luna is a small indentation-sensitive scripting language. This crate wires the syntax front end
//! (`luna_syntax`) to a command-line tool that checks token listings against the grammar.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module
//!   enforces `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;

pub use luna_core::lang::keywords;
pub use luna_syntax::{diagnostics, parser, source, token_dump, tokens};
