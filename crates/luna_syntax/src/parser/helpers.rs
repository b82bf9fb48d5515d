/// Lookahead primitives.
///
/// This chunk contains the only code that touches the token source:
/// - Peeking (`peek`, `is`, `is_keyword`) fills the one-token lookahead slot if it is empty
/// - Accepting (`accept`, `accept_keyword`) consumes the buffered token when its kind matches
/// - Layout handling (`whitespace`)
///
/// Most functions in this file are internal (`fn`) and are documented primarily
/// to aid maintenance and onboarding.
impl<S: TokenSource> Parser<S> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return the current token without consuming it.
    ///
    /// Repeated calls without an intervening accept return the same token and pull nothing
    /// further from the source.
    fn peek(&mut self) -> &Token {
        self.lookahead.get_or_insert_with(|| self.source.next_token())
    }

    /// Return `true` if the current token has the given kind.
    fn is(&mut self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// Return `true` if the current token is the given keyword.
    fn is_keyword(&mut self, id: KeywordId) -> bool {
        self.peek().kind.is_keyword(id)
    }

    /// If the current token has the given kind, consume and return it.
    ///
    /// On a mismatch nothing is consumed and the lookahead slot keeps its token.
    fn accept(&mut self, kind: TokenKind) -> Option<Token> {
        if self.is(kind) {
            self.lookahead.take()
        } else {
            None
        }
    }

    fn accept_keyword(&mut self, id: KeywordId) -> Option<Token> {
        self.accept(TokenKind::Keyword(id))
    }

    /// `NEWLINE*`
    fn whitespace(&mut self) {
        while self.accept(TokenKind::Newline).is_some() {}
    }

    /// Build an error positioned at the current token.
    fn error(&mut self, kind: DiagnosticKind) -> ParseError {
        ParseError::new(kind, self.peek())
    }

    /// Emit a rule-entry trace event without pulling from the source.
    fn trace_rule(&self, rule: &'static str) {
        tracing::trace!(
            rule,
            lookahead = self.lookahead.as_ref().map(|t| t.kind.name()),
            "enter"
        );
    }
}
