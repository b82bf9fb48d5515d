//! Parser for the Luna programming language
//!
//! Checks a token stream against the statement grammar:
//!
//! ```text
//! program    := ws (stmt ws)* EOS
//! stmt       := if_stmt | while_stmt | expr_stmt
//! if_stmt    := ('if' | 'unless') expr block ('else' 'if' expr block)* ('else' block)?
//! while_stmt := ('while' | 'until') expr block
//! block      := INDENT ws (stmt ws)+ OUTDENT
//! expr       := ID | STRING | INT | FLOAT
//! ws         := NEWLINE*
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use luna_syntax::{parser, token_dump};
//!
//! let tokens = token_dump::read("WHILE ID INDENT ID NEWLINE INT OUTDENT EOS").unwrap();
//! assert!(parser::parse_tokens(tokens).is_ok());
//!
//! let tokens = token_dump::read("IF INDENT ID OUTDENT EOS").unwrap();
//! let err = parser::parse_tokens(tokens).unwrap_err();
//! assert_eq!(err.to_string(), "if missing condition");
//! ```

use crate::diagnostics::{DiagnosticKind, ParseError};
use crate::source::{TokenSource, TokenStream};
use crate::tokens::{Token, TokenKind};
use luna_core::lang::keywords::KeywordId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
