//! Token cursor for navigating the token stream.

use minipl_ir::{Span, Token, TokenKind};

use crate::ParseError;

/// Stand-in end-of-file token for an empty token slice.
static EOF: Token = Token {
    kind: TokenKind::EndOfFile,
    line: 1,
    text: String::new(),
    literal: None,
    span: Span::DUMMY,
};

/// Cursor over a token slice that ends with `EndOfFile`.
///
/// The cursor never moves past the final token, so `current()` is always
/// valid and parsing loops terminate at end of file.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        debug_assert!(
            tokens.last().map_or(true, Token::is_eof),
            "token stream must end with EndOfFile"
        );
        Cursor { tokens, pos: 0 }
    }

    #[inline]
    pub fn current(&self) -> &'a Token {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .unwrap_or(&EOF)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    /// The most recently consumed token.
    #[inline]
    pub fn previous(&self) -> Option<&'a Token> {
        self.pos.checked_sub(1).and_then(|i| self.tokens.get(i))
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current().is_eof()
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Consume and return the current token. At end of file the cursor
    /// stays put and keeps returning the `EndOfFile` token.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if !token.is_eof() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it has `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> Option<&'a Token> {
        if self.check(kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Consume a token of `kind`, or fail with `message` at the current token.
    pub fn expect(&mut self, kind: TokenKind, message: &str) -> Result<&'a Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error_here(message))
        }
    }

    /// Error located at the current token.
    #[cold]
    pub fn error_here(&self, message: &str) -> ParseError {
        ParseError::new(self.current().clone(), message)
    }
}
