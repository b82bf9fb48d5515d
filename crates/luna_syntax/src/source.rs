//! Token sources: the pull interface the parser reads from.
//!
//! ## Notes
//! - A source hands out each token exactly once; the parser buffers at most one of them.
//! - Past the end of input a source keeps returning an end-of-stream token.

use std::iter::Fuse;

use crate::tokens::{Span, Token, TokenKind};

/// Produce tokens one at a time.
pub trait TokenSource {
    /// Advance by exactly one token and return it.
    fn next_token(&mut self) -> Token;
}

impl<T: TokenSource + ?Sized> TokenSource for &mut T {
    fn next_token(&mut self) -> Token {
        (**self).next_token()
    }
}

impl<T: TokenSource + ?Sized> TokenSource for Box<T> {
    fn next_token(&mut self) -> Token {
        (**self).next_token()
    }
}

/// A [`TokenSource`] over any token iterator.
///
/// Once the iterator runs dry, every further call yields [`TokenKind::Eos`] positioned where the
/// last token ended, so a list without an explicit `EOS` still terminates.
#[derive(Debug)]
pub struct TokenStream<I: Iterator<Item = Token>> {
    tokens: Fuse<I>,
    end: usize,
    produced: usize,
}

impl<I: Iterator<Item = Token>> TokenStream<I> {
    pub fn new(tokens: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            tokens: tokens.into_iter().fuse(),
            end: 0,
            produced: 0,
        }
    }

    /// Number of tokens handed out so far, synthesized end-of-stream tokens included.
    pub fn produced(&self) -> usize {
        self.produced
    }
}

impl<I: Iterator<Item = Token>> TokenSource for TokenStream<I> {
    fn next_token(&mut self) -> Token {
        self.produced += 1;
        match self.tokens.next() {
            Some(token) => {
                self.end = token.span.end;
                token
            }
            None => Token::marker(TokenKind::Eos, Span::point(self.end)),
        }
    }
}
