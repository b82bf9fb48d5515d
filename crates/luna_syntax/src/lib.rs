//! Syntax front end for the Luna language: tokens, token sources, parser, diagnostics.
//!
//! The parser is a recognizer. It pulls tokens one at a time from a [`source::TokenSource`],
//! checks them against the statement/block/expression grammar and reports either acceptance or the
//! first [`diagnostics::ParseError`]. It builds no AST.
//!
//! ## Notes
//! - Character-level scanning is not part of this crate. Tokens come from whatever implements
//!   [`source::TokenSource`]; [`token_dump`] reads them from a textual listing for tooling and tests.
//! - Vocabulary identity (keywords) comes from `luna_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use luna_syntax::{parser, token_dump};
//!
//! let tokens = token_dump::read("IF ID:ready INDENT ID:go OUTDENT EOS").unwrap();
//! assert!(parser::parse_tokens(tokens).is_ok());
//! ```

pub mod diagnostics;
pub mod parser;
pub mod source;
pub mod token_dump;
pub mod token_helpers;
pub mod tokens;
