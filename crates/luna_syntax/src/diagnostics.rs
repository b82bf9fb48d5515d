//! Diagnostics for the Luna syntax front end.
//!
//! The parser reports exactly one kind of failure: an expected syntactic element is missing at the
//! current position. [`DiagnosticKind`] names which element; [`ParseError`] adds where.

use std::fmt;

use thiserror::Error;

use crate::tokens::{Span, Token, TokenKind};

/// The fixed set of parser diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    IfMissingCondition,
    IfMissingBlock,
    ElseIfMissingCondition,
    ElseIfMissingBlock,
    ElseMissingBlock,
    WhileMissingCondition,
    WhileMissingBlock,
    BlockMissingIndentation,
    /// A statement position held no expression.
    UnexpectedToken,
}

impl DiagnosticKind {
    /// The static diagnostic message.
    pub const fn message(self) -> &'static str {
        match self {
            DiagnosticKind::IfMissingCondition => "if missing condition",
            DiagnosticKind::IfMissingBlock => "if missing block",
            DiagnosticKind::ElseIfMissingCondition => "else if missing condition",
            DiagnosticKind::ElseIfMissingBlock => "else if missing block",
            DiagnosticKind::ElseMissingBlock => "else missing block",
            DiagnosticKind::WhileMissingCondition => "while missing condition",
            DiagnosticKind::WhileMissingBlock => "while missing block",
            DiagnosticKind::BlockMissingIndentation => "block missing indentation",
            DiagnosticKind::UnexpectedToken => "unexpected token",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for DiagnosticKind {}

/// The first grammatical failure of a parse.
///
/// `Display` is exactly the diagnostic message; the offending token is reported through the
/// `miette` label and help.
#[derive(Debug, Clone, PartialEq, Error, miette::Diagnostic)]
#[error("{kind}")]
#[diagnostic(code(luna::syntax))]
pub struct ParseError {
    kind: DiagnosticKind,
    found: TokenKind,
    span: Span,
    #[label("here")]
    label: miette::SourceSpan,
    #[source]
    refined_from: Option<DiagnosticKind>,
    #[help]
    help: Option<String>,
}

impl ParseError {
    /// Build an error reported at the lookahead token `found`.
    pub fn new(kind: DiagnosticKind, found: &Token) -> Self {
        Self {
            kind,
            found: found.kind,
            span: found.span,
            label: found.span.into(),
            refined_from: None,
            help: Some(format!("found {}", found.kind)),
        }
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    /// The static diagnostic message.
    pub fn message(&self) -> &'static str {
        self.kind.message()
    }

    /// Kind of the token the parser was looking at when it failed.
    pub fn found(&self) -> TokenKind {
        self.found
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// The diagnostic this error replaced, if a caller gave it more context.
    pub fn refined_from(&self) -> Option<DiagnosticKind> {
        self.refined_from
    }

    /// Re-label a missing-indentation failure with the caller's diagnostic.
    ///
    /// ## Notes
    /// - Only [`DiagnosticKind::BlockMissingIndentation`] is replaced. Errors raised inside the
    ///   block's statements are returned unchanged.
    pub(crate) fn within(self, context: DiagnosticKind) -> Self {
        if self.kind != DiagnosticKind::BlockMissingIndentation {
            return self;
        }
        Self {
            kind: context,
            refined_from: Some(self.kind),
            ..self
        }
    }
}

/// Render a diagnostic against the text it points into, `miette`-style.
pub fn format_error<E>(file_name: &str, source: &str, error: E) -> String
where
    E: miette::Diagnostic + Send + Sync + 'static,
{
    let report = miette::Report::new(error)
        .with_source_code(miette::NamedSource::new(file_name, source.to_string()));
    format!("{report:?}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(kind: TokenKind, start: usize, end: usize) -> Token {
        Token::marker(kind, Span::new(start, end))
    }

    #[test]
    fn display_is_the_bare_message() {
        let err = ParseError::new(DiagnosticKind::WhileMissingBlock, &at(TokenKind::Eos, 9, 9));
        assert_eq!(err.to_string(), "while missing block");
        assert_eq!(err.message(), "while missing block");
        assert_eq!(err.found(), TokenKind::Eos);
    }

    #[test]
    fn within_refines_only_missing_indentation() {
        let token = at(TokenKind::Ident, 4, 7);
        let missing = ParseError::new(DiagnosticKind::BlockMissingIndentation, &token)
            .within(DiagnosticKind::ElseMissingBlock);
        assert_eq!(missing.kind(), DiagnosticKind::ElseMissingBlock);
        assert_eq!(missing.refined_from(), Some(DiagnosticKind::BlockMissingIndentation));
        assert_eq!(missing.span(), Span::new(4, 7));

        let inner = ParseError::new(DiagnosticKind::WhileMissingCondition, &token)
            .within(DiagnosticKind::IfMissingBlock);
        assert_eq!(inner.kind(), DiagnosticKind::WhileMissingCondition);
        assert_eq!(inner.refined_from(), None);
    }

    #[test]
    fn refined_errors_expose_the_replaced_kind_as_source() {
        use std::error::Error as _;

        let err = ParseError::new(DiagnosticKind::BlockMissingIndentation, &at(TokenKind::Ident, 0, 1))
            .within(DiagnosticKind::IfMissingBlock);
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("block missing indentation"));
    }

    #[test]
    fn formatted_report_names_file_and_message() {
        let source = "IF INDENT ID OUTDENT";
        let err = ParseError::new(DiagnosticKind::IfMissingCondition, &at(TokenKind::Indent, 3, 9));
        let rendered = format_error("demo.tokens", source, err);
        assert!(rendered.contains("if missing condition"), "{rendered}");
        assert!(rendered.contains("demo.tokens"), "{rendered}");
    }
}
