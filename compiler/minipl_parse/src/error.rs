//! Parse error type.

use minipl_diagnostic::Diagnostic;
use minipl_ir::Token;

/// A grammar violation at `token`.
///
/// The parser records the error, synchronizes, and carries on with the
/// next statement.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    pub token: Token,
    pub message: String,
}

impl ParseError {
    pub fn new(token: Token, message: impl Into<String>) -> Self {
        ParseError {
            token,
            message: message.into(),
        }
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.token.line
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::syntax(&self.token, self.message.as_str())
    }
}
