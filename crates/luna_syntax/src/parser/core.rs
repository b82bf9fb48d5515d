// Parser core types and entrypoint.
//
// This chunk defines the [`Parser`] type and its top-level `parse()` entrypoint.
// It is `include!`'d into `crate::parser` to keep all parser methods in a single module
// while avoiding a single “god file”.

/// Outcome of a grammar rule.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parser state.
///
/// ## Notes
/// - The parser is single-pass with one token of lookahead and no backtracking.
/// - There is no error recovery: the first failing rule ends the parse and every enclosing rule
///   returns its error unchanged (or, for a missing block, re-labelled with its own context).
pub struct Parser<S: TokenSource> {
    source: S,
    lookahead: Option<Token>,
}

impl<S: TokenSource> Parser<S> {
    /// Bind a fresh parser to a token source.
    pub fn new(source: S) -> Self {
        Self {
            source,
            lookahead: None,
        }
    }

    /// Check the entire token stream, through end-of-stream.
    ///
    /// ## Errors
    /// Returns the first [`ParseError`] encountered; nothing after it is examined.
    pub fn parse(mut self) -> ParseResult<()> {
        self.program()
    }

    /// `ws (stmt ws)* EOS`
    fn program(&mut self) -> ParseResult<()> {
        self.whitespace();
        self.trace_rule("program");
        while self.accept(TokenKind::Eos).is_none() {
            self.statement()?;
            self.whitespace();
        }
        Ok(())
    }
}
