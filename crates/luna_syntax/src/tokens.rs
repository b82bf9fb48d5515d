//! Token types consumed by the Luna parser.
//!
//! ## Notes
//! - [`TokenKind`] is a closed, payload-free tag; comparing kinds never looks at literal text.
//! - Keyword tokens carry stable IDs from `luna_core::lang::keywords`.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use std::fmt;

use luna_core::lang::keywords::{self, KeywordId};

// ============================================================================
// SPANS
// ============================================================================

/// Byte range into the text a token was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Zero-width span at `offset`.
    pub fn point(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by a token source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Identifiers and Literals ==========
    Ident,
    String,
    Int,
    Float,

    // ========== Keywords (ID-based) ==========
    Keyword(KeywordId),

    // ========== Layout ==========
    Newline,
    Indent,
    Outdent,

    // ========== Special ==========
    Eos, // end of stream
}

impl TokenKind {
    /// Upper-case name used in token listings and diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Ident => "ID",
            TokenKind::String => "STRING",
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::Keyword(id) => keywords::dump_name(*id),
            TokenKind::Newline => "NEWLINE",
            TokenKind::Indent => "INDENT",
            TokenKind::Outdent => "OUTDENT",
            TokenKind::Eos => "EOS",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token with its kind, literal text and source span.
///
/// The parser only ever inspects `kind`; `text` is carried for tooling.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Construct a token with no literal text (keywords, layout markers, end of stream).
    pub fn marker(kind: TokenKind, span: Span) -> Self {
        Self::new(kind, String::new(), span)
    }
}
