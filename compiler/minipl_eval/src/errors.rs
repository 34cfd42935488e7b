//! Runtime errors.
//!
//! A [`RuntimeError`] is the one condition that aborts evaluation. Most
//! kinds can only arise at run time (uninitialized reads, bad input,
//! arithmetic faults); the type-related kinds guard against programs that
//! reach the interpreter without passing the type checker.

use minipl_diagnostic::Diagnostic;
use minipl_ir::{Token, ValueType};

/// Result type for evaluation.
pub type EvalResult<T> = Result<T, RuntimeError>;

#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind}")]
pub struct RuntimeError {
    /// Line of the token the error is attributed to.
    pub line: u32,
    /// Text of that token.
    pub lexeme: String,
    pub kind: RuntimeErrorKind,
}

impl RuntimeError {
    pub fn new(token: &Token, kind: RuntimeErrorKind) -> Self {
        RuntimeError {
            line: token.line,
            lexeme: token.text.clone(),
            kind,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::runtime(self.line, self.kind.to_string())
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum RuntimeErrorKind {
    // Variables
    #[error("Variable '{name}' is not initialized.")]
    NotInitialized { name: String },
    #[error("Variable '{name}' is not declared.")]
    Undeclared { name: String },
    #[error("Variable '{name}' already exists with a different type.")]
    Redeclared { name: String },
    #[error("Cannot store a value of type {found} in '{name}' of type {expected}.")]
    AssignMismatch {
        name: String,
        expected: ValueType,
        found: ValueType,
    },

    // Operators and statements
    #[error("Operands of '{op}' cannot be {left} and {right}.")]
    InvalidOperands {
        op: &'static str,
        left: ValueType,
        right: ValueType,
    },
    #[error("Operand of '{op}' cannot be {found}.")]
    InvalidOperand { op: &'static str, found: ValueType },
    #[error("Division by zero.")]
    DivisionByZero,
    #[error("Integer overflow in '{op}'.")]
    IntegerOverflow { op: &'static str },

    // Input and output
    #[error("Cannot read '{input}' as an integer.")]
    InvalidInteger { input: String },
    #[error("Cannot read into '{name}' of type bool.")]
    ReadBool { name: String },
    #[error("Unexpected end of input.")]
    EndOfInput,
    #[error("I/O error: {0}.")]
    Io(String),
}
