/// Check a token source against the Luna grammar.
///
/// This is the main public entrypoint for parsing.
///
/// ## Errors
/// Returns the first [`ParseError`] if the stream does not match the grammar through to
/// end-of-stream.
#[tracing::instrument(skip_all)]
pub fn parse<S: TokenSource>(source: S) -> ParseResult<()> {
    let result = Parser::new(source).parse();
    match &result {
        Ok(()) => tracing::debug!("parse accepted"),
        Err(err) => tracing::debug!(diagnostic = err.message(), found = %err.found(), "parse rejected"),
    }
    result
}

/// Check an owned token list; end-of-stream is implied after the last token.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse_tokens(tokens: Vec<Token>) -> ParseResult<()> {
    parse(TokenStream::new(tokens))
}
