//! Intermediate representation for MiniPL.
//!
//! Everything the pipeline stages hand to each other lives here: source
//! spans, tokens, runtime values, and the statement/expression tree. The
//! lexer produces [`Token`]s, the parser builds [`Stmt`]s, and both the type
//! checker and the interpreter consume them by exhaustive matching.

mod ast;
mod printer;
mod span;
mod token;
mod value;

pub use ast::{BinaryOp, Expr, Stmt};
pub use printer::{render_expr, ExprPrinter, NoBindings, ValueLookup};
pub use span::Span;
pub use token::{Token, TokenKind};
pub use value::{Value, ValueType};
