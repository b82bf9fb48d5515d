//! Textual token listings.
//!
//! A dump is a whitespace-separated list of words, each `NAME` or `NAME:payload`:
//!
//! ```text
//! # comments run to the end of the line
//! IF ID:ready INDENT
//!   ID:go NEWLINE STRING:"two words"
//! OUTDENT EOS
//! ```
//!
//! ## Notes
//! - Names are case-insensitive. Keyword names come from `luna_core::lang::keywords`.
//! - Only `ID`, `STRING`, `INT` and `FLOAT` take a payload. A payload starting with `"` runs to the
//!   next `"` and may contain whitespace.
//! - Token spans point into the dump text, so parse diagnostics can be rendered against it.

use luna_core::lang::keywords;
use thiserror::Error;

use crate::tokens::{Span, Token, TokenKind};

/// Errors reading a token dump.
#[derive(Debug, Clone, PartialEq, Error, miette::Diagnostic)]
pub enum DumpError {
    #[error("unknown token name `{name}`")]
    #[diagnostic(code(luna::dump::unknown_token))]
    UnknownToken {
        name: String,
        #[label("not a token name")]
        span: miette::SourceSpan,
    },

    #[error("`{name}` tokens take no payload")]
    #[diagnostic(code(luna::dump::unexpected_payload), help("only ID, STRING, INT and FLOAT carry text"))]
    UnexpectedPayload {
        name: String,
        #[label("payload here")]
        span: miette::SourceSpan,
    },

    #[error("unterminated quoted payload")]
    #[diagnostic(code(luna::dump::unterminated_quote))]
    UnterminatedQuote {
        #[label("quote opened here")]
        span: miette::SourceSpan,
    },
}

/// Read every token in `text`.
///
/// ## Errors
/// Returns the first [`DumpError`]; nothing after it is read.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn read(text: &str) -> Result<Vec<Token>, DumpError> {
    let tokens = Reader::new(text).collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(token_count = tokens.len(), "read token dump");
    Ok(tokens)
}

/// Write `tokens` one per line in the syntax [`read`] accepts.
pub fn render(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(token.kind.name());
        if token.kind.has_payload() && !token.text.is_empty() {
            out.push(':');
            if token.text.chars().any(char::is_whitespace) {
                out.push('"');
                out.push_str(&token.text);
                out.push('"');
            } else {
                out.push_str(&token.text);
            }
        }
        out.push('\n');
    }
    out
}

/// Lazy word-by-word reader over a dump.
struct Reader<'a> {
    text: &'a str,
    pos: usize,
    failed: bool,
}

impl<'a> Reader<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            failed: false,
        }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    /// Skip whitespace and `#` comments.
    fn skip_trivia(&mut self) {
        loop {
            let rest = self.rest();
            let trimmed = rest.trim_start();
            self.pos += rest.len() - trimmed.len();
            if !trimmed.starts_with('#') {
                return;
            }
            self.pos += trimmed.find('\n').unwrap_or(trimmed.len());
        }
    }

    fn word(&mut self) -> Result<Token, DumpError> {
        let start = self.pos;
        let rest = self.rest();
        let name_len = rest
            .find(|c: char| c.is_whitespace() || c == ':')
            .unwrap_or(rest.len());
        let name = &rest[..name_len];
        self.pos += name_len;

        let kind = kind_from_name(name).ok_or_else(|| DumpError::UnknownToken {
            name: name.to_string(),
            span: (start, name_len).into(),
        })?;

        if !self.rest().starts_with(':') {
            return Ok(Token::marker(kind, Span::new(start, self.pos)));
        }

        let payload_start = self.pos;
        self.pos += 1;
        let text = self.payload()?;
        if !kind.has_payload() {
            return Err(DumpError::UnexpectedPayload {
                name: kind.name().to_string(),
                span: (payload_start, self.pos - payload_start).into(),
            });
        }
        Ok(Token::new(kind, text, Span::new(start, self.pos)))
    }

    fn payload(&mut self) -> Result<&'a str, DumpError> {
        let rest = self.rest();
        if let Some(quoted) = rest.strip_prefix('"') {
            let close = quoted.find('"').ok_or(DumpError::UnterminatedQuote {
                span: (self.pos, 1).into(),
            })?;
            self.pos += close + 2;
            return Ok(&quoted[..close]);
        }
        let len = rest.find(char::is_whitespace).unwrap_or(rest.len());
        self.pos += len;
        Ok(&rest[..len])
    }
}

impl Iterator for Reader<'_> {
    type Item = Result<Token, DumpError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        self.skip_trivia();
        if self.pos >= self.text.len() {
            return None;
        }
        let word = self.word();
        self.failed = word.is_err();
        Some(word)
    }
}

fn kind_from_name(name: &str) -> Option<TokenKind> {
    const FIXED: &[TokenKind] = &[
        TokenKind::Ident,
        TokenKind::String,
        TokenKind::Int,
        TokenKind::Float,
        TokenKind::Newline,
        TokenKind::Indent,
        TokenKind::Outdent,
        TokenKind::Eos,
    ];
    FIXED
        .iter()
        .copied()
        .find(|kind| kind.name().eq_ignore_ascii_case(name))
        .or_else(|| keywords::from_dump_name(name).map(TokenKind::Keyword))
}

#[cfg(test)]
mod tests {
    use super::*;
    use luna_core::lang::keywords::KeywordId;

    fn kinds(text: &str) -> Vec<TokenKind> {
        read(text).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn reads_names_case_insensitively() {
        assert_eq!(
            kinds("if Id INDENT until outdent eos"),
            vec![
                TokenKind::Keyword(KeywordId::If),
                TokenKind::Ident,
                TokenKind::Indent,
                TokenKind::Keyword(KeywordId::Until),
                TokenKind::Outdent,
                TokenKind::Eos,
            ]
        );
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let text = "# header\n\n  ID:a # trailing\n# only comment\nNEWLINE\n";
        assert_eq!(kinds(text), vec![TokenKind::Ident, TokenKind::Newline]);
    }

    #[test]
    fn payloads_and_spans_point_into_the_dump() {
        let text = "ID:count  STRING:\"a b\" INT:42";
        let tokens = read(text).unwrap();
        assert_eq!(tokens[0].text, "count");
        assert_eq!(tokens[0].span, Span::new(0, 8));
        assert_eq!(tokens[1].text, "a b");
        assert_eq!(&text[tokens[1].span.start..tokens[1].span.end], "STRING:\"a b\"");
        assert_eq!(tokens[2].text, "42");
        assert_eq!(tokens[2].span, Span::new(23, 29));
    }

    #[test]
    fn unknown_names_are_reported_with_their_span() {
        let err = read("ID ELIF ID").unwrap_err();
        assert_eq!(
            err,
            DumpError::UnknownToken {
                name: "ELIF".to_string(),
                span: (3, 4).into(),
            }
        );
    }

    #[test]
    fn markers_reject_payloads() {
        let err = read("INDENT:4").unwrap_err();
        assert_eq!(err.to_string(), "`INDENT` tokens take no payload");
    }

    #[test]
    fn unterminated_quotes_fail() {
        assert!(matches!(
            read("STRING:\"open ended"),
            Err(DumpError::UnterminatedQuote { .. })
        ));
    }

    #[test]
    fn render_round_trips_through_read() {
        let text = "while FLOAT:1.5 INDENT STRING:\"x y\" ID OUTDENT";
        let tokens = read(text).unwrap();
        let rendered = render(&tokens);
        insta::assert_snapshot!(rendered.trim_end(), @r#"
        WHILE
        FLOAT:1.5
        INDENT
        STRING:"x y"
        ID
        OUTDENT
        "#);
        let again = read(&rendered).unwrap();
        let pairs: Vec<_> = again.iter().map(|t| (t.kind, t.text.as_str())).collect();
        let expected: Vec<_> = tokens.iter().map(|t| (t.kind, t.text.as_str())).collect();
        assert_eq!(pairs, expected);
    }
}
