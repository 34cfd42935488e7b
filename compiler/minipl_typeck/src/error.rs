//! Type errors.

use minipl_diagnostic::Diagnostic;
use minipl_ir::{Token, ValueType};

/// A static typing violation, attributed to the token it was found at.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind}")]
pub struct TypeError {
    pub line: u32,
    /// Text of the offending token.
    pub lexeme: String,
    pub kind: TypeErrorKind,
}

impl TypeError {
    pub fn new(token: &Token, kind: TypeErrorKind) -> Self {
        TypeError {
            line: token.line,
            lexeme: token.text.clone(),
            kind,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::type_error(self.line, self.kind.to_string())
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum TypeErrorKind {
    // Declarations and names
    #[error("Cannot declare '{name}' more than once.")]
    Redeclared { name: String },
    #[error("'{name}' got referenced before it was declared.")]
    Undeclared { name: String },
    #[error("'{name}' is of type {expected}, but got {found} instead.")]
    InitializerMismatch {
        name: String,
        expected: ValueType,
        found: ValueType,
    },
    #[error("'{name}' has type {expected} but was assigned a value of type {found}.")]
    AssignMismatch {
        name: String,
        expected: ValueType,
        found: ValueType,
    },

    // Loops
    #[error("Cannot assign to '{name}' in a for loop where it is used as a loop counter.")]
    AssignToLoopCounter { name: String },
    #[error("Cannot use '{name}' as a loop counter since it is already in use as a loop counter.")]
    LoopCounterInUse { name: String },
    #[error("Loop counter '{name}' should be int, got {found} instead.")]
    LoopCounterNotInt { name: String, found: ValueType },
    #[error("Loop bounds should be int, got {found} instead.")]
    LoopBoundNotInt { found: ValueType },

    // Statements
    #[error("Can only print int or string, got {found} instead.")]
    PrintBool { found: ValueType },
    #[error("Asserts can only be done on bool, got {found} instead.")]
    AssertNotBool { found: ValueType },

    // Operators
    #[error("'{op}' arguments should have the same type, got {left} and {right} instead.")]
    ComparisonMismatch {
        op: &'static str,
        left: ValueType,
        right: ValueType,
    },
    #[error("'{op}' arguments should both be int, got {left} and {right} instead.")]
    ArithmeticNotInt {
        op: &'static str,
        left: ValueType,
        right: ValueType,
    },
    #[error("'+' arguments should both be either int or string, got {left} and {right} instead.")]
    AddMismatch { left: ValueType, right: ValueType },
    #[error("'&' arguments should both be bool, got {left} and {right} instead.")]
    LogicalNotBool { left: ValueType, right: ValueType },
    #[error("'!' expects a bool, got {found} instead.")]
    NotNotBool { found: ValueType },
}
