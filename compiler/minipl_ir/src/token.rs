//! Tokens produced by the lexer.

mod kind;

pub use kind::TokenKind;

use std::fmt;

use crate::{Span, Value};

/// A lexical unit.
///
/// Immutable once created. `text` is the exact source slice (string literals
/// keep their quotes and escapes); `literal` carries the decoded value for
/// `IntValue` and `StringValue` tokens and is `None` otherwise.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    /// 1-based line on which the token starts.
    pub line: u32,
    pub text: String,
    pub literal: Option<Value>,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, line: u32, text: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            line,
            text: text.into(),
            literal: None,
            span,
        }
    }

    #[must_use]
    pub fn with_literal(mut self, literal: Value) -> Self {
        self.literal = Some(literal);
        self
    }

    /// The end-of-file marker that terminates every token list.
    pub fn eof(line: u32, offset: u32) -> Self {
        Token::new(TokenKind::EndOfFile, line, "", Span::point(offset))
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }
}

/// One-line dump form used by `minipl lex`: `<line> <Kind> '<text>'`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>4} {:?} '{}'", self.line, self.kind, self.text)?;
        if let Some(literal) = &self.literal {
            write!(f, " = {literal:?}")?;
        }
        Ok(())
    }
}
