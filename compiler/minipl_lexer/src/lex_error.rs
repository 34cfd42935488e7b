//! Lexical errors.

use minipl_diagnostic::Diagnostic;
use minipl_ir::Span;

/// A lexical error. Scanning continues after one is recorded.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    /// Line where the offending lexeme starts.
    pub line: u32,
    pub span: Span,
    pub kind: LexErrorKind,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    #[error("Unexpected character '{0}'.")]
    UnexpectedCharacter(char),
    #[error("Unterminated string.")]
    UnterminatedString,
    #[error("Unterminated block comment.")]
    UnterminatedComment,
    /// A `.` not followed by a second `.`.
    #[error("Expected '..' but found '.'.")]
    LoneDot,
    /// A digit run that does not fit in a 64-bit signed integer.
    #[error("Integer literal '{0}' is too large.")]
    IntegerOverflow(String),
}

impl LexError {
    pub fn new(line: u32, span: Span, kind: LexErrorKind) -> Self {
        LexError { line, span, kind }
    }

    /// Classify a lexeme logos could not produce a token for.
    ///
    /// Strings and block comments only fail when they run off the end of
    /// the input; digit runs only fail when they overflow.
    pub(crate) fn from_unmatched(line: u32, span: Span, slice: &str) -> Self {
        let kind = if slice.starts_with('"') {
            LexErrorKind::UnterminatedString
        } else if slice.starts_with("/*") {
            LexErrorKind::UnterminatedComment
        } else if !slice.is_empty() && slice.bytes().all(|b| b.is_ascii_digit()) {
            LexErrorKind::IntegerOverflow(slice.to_owned())
        } else {
            LexErrorKind::UnexpectedCharacter(slice.chars().next().unwrap_or('\0'))
        };
        LexError::new(line, span, kind)
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::lexical(self.line, self.kind.to_string())
    }
}
