//! The diagnostic value and its rendering.

use std::fmt;

use minipl_ir::Token;

/// Which stage produced a diagnostic. Decides the rendered format.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DiagnosticKind {
    Lexical,
    Syntax,
    Type,
    Runtime,
    /// A failed `assert`. Reported, but not an error: execution continues.
    AssertionFailed,
}

impl DiagnosticKind {
    /// Whether this kind counts towards the error total.
    #[inline]
    pub const fn is_error(self) -> bool {
        !matches!(self, DiagnosticKind::AssertionFailed)
    }

    /// Lexical and syntax diagnostics use the bracketed `[line n]` header.
    #[inline]
    const fn uses_line_header(self) -> bool {
        matches!(self, DiagnosticKind::Lexical | DiagnosticKind::Syntax)
    }
}

/// Where on the line a syntax diagnostic points.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Location {
    /// No lexeme (lexical errors).
    #[default]
    None,
    /// At the end-of-file token.
    AtEnd,
    /// At the named lexeme.
    At(String),
}

impl Location {
    /// Location of `token`: `AtEnd` for end of file, otherwise its text.
    pub fn of_token(token: &Token) -> Self {
        if token.is_eof() {
            Location::AtEnd
        } else {
            Location::At(token.text.clone())
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::None => Ok(()),
            Location::AtEnd => f.write_str(" at end"),
            Location::At(text) => write!(f, " at '{text}'"),
        }
    }
}

/// A reportable problem, with everything needed to render it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub line: u32,
    pub location: Location,
    /// Message text. For `AssertionFailed` this is the rendered expression.
    pub message: String,
}

impl Diagnostic {
    pub fn lexical(line: u32, message: impl Into<String>) -> Self {
        Diagnostic {
            kind: DiagnosticKind::Lexical,
            line,
            location: Location::None,
            message: message.into(),
        }
    }

    /// Syntax error pointing at `token`.
    pub fn syntax(token: &Token, message: impl Into<String>) -> Self {
        Diagnostic {
            kind: DiagnosticKind::Syntax,
            line: token.line,
            location: Location::of_token(token),
            message: message.into(),
        }
    }

    pub fn type_error(line: u32, message: impl Into<String>) -> Self {
        Diagnostic {
            kind: DiagnosticKind::Type,
            line,
            location: Location::None,
            message: message.into(),
        }
    }

    pub fn runtime(line: u32, message: impl Into<String>) -> Self {
        Diagnostic {
            kind: DiagnosticKind::Runtime,
            line,
            location: Location::None,
            message: message.into(),
        }
    }

    /// Report for a failed `assert`; `rendered` is the asserted expression.
    pub fn assertion_failed(line: u32, rendered: impl Into<String>) -> Self {
        Diagnostic {
            kind: DiagnosticKind::AssertionFailed,
            line,
            location: Location::None,
            message: rendered.into(),
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.kind.is_error()
    }

    /// The part the terminal emitter highlights: `Error` for bracketed
    /// diagnostics, `Assertion failed` for asserts, nothing otherwise.
    pub(crate) fn headline(&self) -> Option<&'static str> {
        match self.kind {
            DiagnosticKind::Lexical | DiagnosticKind::Syntax => Some("Error"),
            DiagnosticKind::AssertionFailed => Some("Assertion failed"),
            DiagnosticKind::Type | DiagnosticKind::Runtime => None,
        }
    }

    /// Write the diagnostic, passing the headline through `headline`.
    pub(crate) fn write_with(
        &self,
        out: &mut dyn fmt::Write,
        headline: &dyn Fn(&mut dyn fmt::Write, &str) -> fmt::Result,
    ) -> fmt::Result {
        if self.kind.uses_line_header() {
            write!(out, "[line {}] ", self.line)?;
            headline(out, "Error")?;
            return write!(out, "{}: {}", self.location, self.message);
        }
        if let Some(head) = self.headline() {
            headline(out, head)?;
            out.write_str(": ")?;
        }
        write!(out, "{}\n(line {}).", self.message, self.line)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_with(f, &|out, text| out.write_str(text))
    }
}
