/// Expression parsing methods.
///
/// Expressions are primitives only. There is no operator grammar yet, so `expression` and
/// `primitive_expr` accept the same single token.
///
/// ## Notes
/// - These rules return `bool` and never build an error: the caller knows what was being parsed
///   and picks the diagnostic.
impl<S: TokenSource> Parser<S> {
    // ========================================================================
    // Expressions
    // ========================================================================

    fn expression(&mut self) -> bool {
        self.trace_rule("expression");
        self.primitive_expr()
    }

    /// `ID | STRING | INT | FLOAT`
    fn primitive_expr(&mut self) -> bool {
        self.accept(TokenKind::Ident).is_some()
            || self.accept(TokenKind::String).is_some()
            || self.accept(TokenKind::Int).is_some()
            || self.accept(TokenKind::Float).is_some()
    }
}
