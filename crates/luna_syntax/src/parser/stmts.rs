/// Statement parsing methods.
///
/// This chunk parses statement forms (`if`/`unless` chains, `while`/`until` loops, expression
/// statements) as well as indentation-based blocks.
///
/// ## Notes
/// - Block parsing relies on `Indent` / `Outdent` layout tokens produced by the token source.
/// - `unless` and `until` are accepted exactly where `if` and `while` are; the parser attaches no
///   meaning to the difference.
impl<S: TokenSource> Parser<S> {
    // ========================================================================
    // Statements
    // ========================================================================

    /// `if_stmt | while_stmt | expr_stmt`, chosen by peeking.
    fn statement(&mut self) -> ParseResult<()> {
        self.trace_rule("statement");
        if self.is_keyword(KeywordId::If) || self.is_keyword(KeywordId::Unless) {
            return self.if_stmt();
        }
        if self.is_keyword(KeywordId::While) || self.is_keyword(KeywordId::Until) {
            return self.while_stmt();
        }
        self.expr_stmt()
    }

    /// `('if' | 'unless') expr block ('else' 'if' expr block)* ('else' block)?`
    fn if_stmt(&mut self) -> ParseResult<()> {
        self.trace_rule("if_stmt");
        let _ = self
            .accept_keyword(KeywordId::If)
            .or_else(|| self.accept_keyword(KeywordId::Unless));

        self.condition(DiagnosticKind::IfMissingCondition)?;
        self.block_in(DiagnosticKind::IfMissingBlock)?;

        while self.accept_keyword(KeywordId::Else).is_some() {
            if self.accept_keyword(KeywordId::If).is_some() {
                self.condition(DiagnosticKind::ElseIfMissingCondition)?;
                self.block_in(DiagnosticKind::ElseIfMissingBlock)?;
                continue;
            }
            // A bare `else` ends the chain.
            self.block_in(DiagnosticKind::ElseMissingBlock)?;
            break;
        }
        Ok(())
    }

    /// `('while' | 'until') expr block`
    fn while_stmt(&mut self) -> ParseResult<()> {
        self.trace_rule("while_stmt");
        let _ = self
            .accept_keyword(KeywordId::While)
            .or_else(|| self.accept_keyword(KeywordId::Until));

        self.condition(DiagnosticKind::WhileMissingCondition)?;
        self.block_in(DiagnosticKind::WhileMissingBlock)
    }

    /// `expr`
    fn expr_stmt(&mut self) -> ParseResult<()> {
        self.trace_rule("expr_stmt");
        if self.expression() {
            Ok(())
        } else {
            Err(self.error(DiagnosticKind::UnexpectedToken))
        }
    }

    /// A required condition expression; `missing` names the enclosing construct.
    fn condition(&mut self, missing: DiagnosticKind) -> ParseResult<()> {
        if self.expression() {
            Ok(())
        } else {
            Err(self.error(missing))
        }
    }

    /// A required block; a missing `INDENT` is reported as `missing`.
    fn block_in(&mut self, missing: DiagnosticKind) -> ParseResult<()> {
        self.block().map_err(|err| err.within(missing))
    }

    /// `INDENT ws (stmt ws)+ OUTDENT`
    ///
    /// ## Notes
    /// - At least one statement is required: `INDENT OUTDENT` fails on the `OUTDENT`.
    /// - A failing statement ends the parse; there is no skipping ahead to the `OUTDENT`.
    fn block(&mut self) -> ParseResult<()> {
        self.trace_rule("block");
        if self.accept(TokenKind::Indent).is_none() {
            return Err(self.error(DiagnosticKind::BlockMissingIndentation));
        }
        self.whitespace();
        loop {
            self.statement()?;
            self.whitespace();
            if self.accept(TokenKind::Outdent).is_some() {
                return Ok(());
            }
        }
    }
}
