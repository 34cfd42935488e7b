//! Recursive descent parser for MiniPL.
//!
//! [`parse`] turns a token sequence into top-level statements. A malformed
//! statement is recorded as a [`ParseError`], the parser synchronizes to
//! the next safe token, and parsing resumes, so one run can report several
//! independent syntax errors. Failed statements are left out of the output.
//!
//! ```text
//! program    := (statement ';')*
//! statement  := print | vardecl | assign | for | read | assert
//! for        := 'for' IDENT 'in' expr '..' expr 'do' (statement ';')+ 'end' 'for'
//! expr       := '!' operand | operand [ (bin-op | '&') operand ]
//! operand    := INT | STRING | IDENT | '(' expr ')'
//! ```

mod cursor;
mod error;
mod grammar;
mod recovery;

pub use cursor::Cursor;
pub use error::ParseError;
pub use recovery::{synchronize, TokenSet, LOOP_BODY_BOUNDARY, STMT_BOUNDARY};

use minipl_ir::{Stmt, Token};
use tracing::debug;

/// Output of [`parse`].
#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct ParseOutput {
    pub statements: Vec<Stmt>,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    errors: Vec<ParseError>,
    /// Number of `for` bodies currently open. Selects the recovery set.
    loop_depth: u32,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            errors: Vec::new(),
            loop_depth: 0,
        }
    }

    /// Parse statements until end of file.
    pub fn parse_program(mut self) -> ParseOutput {
        let mut statements = Vec::new();
        while !self.cursor.is_at_end() {
            if let Some(stmt) = self.statement_or_recover() {
                statements.push(stmt);
            }
        }
        ParseOutput {
            statements,
            errors: self.errors,
        }
    }

    /// Record `error` and skip to a safe place to resume.
    fn recover(&mut self, error: ParseError) {
        tracing::trace!(line = error.line(), message = %error.message, "recovering");
        self.errors.push(error);
        let recovery = if self.loop_depth > 0 {
            LOOP_BODY_BOUNDARY
        } else {
            STMT_BOUNDARY
        };
        synchronize(&mut self.cursor, recovery);
    }
}

/// Parse a token sequence (as produced by the lexer) into statements.
#[tracing::instrument(level = "debug", skip_all)]
pub fn parse(tokens: &[Token]) -> ParseOutput {
    let output = Parser::new(tokens).parse_program();
    debug!(
        statements = output.statements.len(),
        errors = output.errors.len(),
        "parsed"
    );
    output
}
