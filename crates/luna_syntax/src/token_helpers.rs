//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to make it easy
//! to work with ID-based keyword tokens.

use crate::tokens::{Token, TokenKind};
use luna_core::lang::keywords::KeywordId;

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return `true` if this kind may start a primitive expression.
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            TokenKind::Ident | TokenKind::String | TokenKind::Int | TokenKind::Float
        )
    }

    /// Return `true` if tokens of this kind carry literal text.
    pub fn has_payload(&self) -> bool {
        self.is_primitive()
    }

    /// Return `true` if this token is layout in the token stream.
    pub fn is_layout(&self) -> bool {
        matches!(self, TokenKind::Newline | TokenKind::Indent | TokenKind::Outdent)
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.keyword_id()`.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    /// Return `true` if this is the end-of-stream marker.
    pub fn is_eos(&self) -> bool {
        self.kind == TokenKind::Eos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::Span;

    #[test]
    fn keyword_helpers_only_match_their_id() {
        let kind = TokenKind::Keyword(KeywordId::Unless);
        assert!(kind.is_keyword(KeywordId::Unless));
        assert!(!kind.is_keyword(KeywordId::If));
        assert_eq!(kind.keyword_id(), Some(KeywordId::Unless));
        assert_eq!(TokenKind::Ident.keyword_id(), None);
    }

    #[test]
    fn primitive_and_layout_classes_are_disjoint() {
        let all = [
            TokenKind::Ident,
            TokenKind::String,
            TokenKind::Int,
            TokenKind::Float,
            TokenKind::Keyword(KeywordId::If),
            TokenKind::Newline,
            TokenKind::Indent,
            TokenKind::Outdent,
            TokenKind::Eos,
        ];
        for kind in all {
            assert!(!(kind.is_primitive() && kind.is_layout()), "{kind} is in both classes");
        }
        assert_eq!(all.iter().filter(|k| k.is_primitive()).count(), 4);
        assert_eq!(all.iter().filter(|k| k.is_layout()).count(), 3);
    }

    #[test]
    fn names_come_from_the_keyword_registry() {
        assert_eq!(TokenKind::Keyword(KeywordId::Until).to_string(), "UNTIL");
        assert_eq!(TokenKind::Outdent.to_string(), "OUTDENT");
        assert!(Token::marker(TokenKind::Eos, Span::point(3)).is_eos());
    }
}
