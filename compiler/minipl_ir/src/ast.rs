//! Syntax tree for MiniPL programs.
//!
//! Two closed families: [`Expr`] and [`Stmt`]. Every later stage matches on
//! them exhaustively, so adding a variant is a compile error everywhere it
//! needs handling.
//!
//! Expressions are owned by the statement that contains them (no sharing,
//! no cycles). Tokens are kept on nodes that can be the subject of a
//! diagnostic so errors can point at a line and a lexeme.

mod operators;

pub use operators::BinaryOp;

use std::fmt;

use crate::printer::{render_expr, NoBindings};
use crate::{Token, Value, ValueType};

/// Expression node.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Expr {
    /// Integer or string literal.
    Literal(Value),
    /// Parenthesized expression.
    Grouping(Box<Expr>),
    /// `! operand`; `op` is the `!` token.
    Unary { op: Token, operand: Box<Expr> },
    /// `left op right` for `+ - * / < =`.
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        token: Token,
        right: Box<Expr>,
    },
    /// `left & right`; `op` is the `&` token.
    Logical {
        left: Box<Expr>,
        op: Token,
        right: Box<Expr>,
    },
    /// Variable reference.
    Identifier(Token),
}

impl Expr {
    pub fn grouping(inner: Expr) -> Self {
        Expr::Grouping(Box::new(inner))
    }

    pub fn unary(op: Token, operand: Expr) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn binary(left: Expr, op: BinaryOp, token: Token, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            op,
            token,
            right: Box::new(right),
        }
    }

    pub fn logical(left: Expr, op: Token, right: Expr) -> Self {
        Expr::Logical {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_expr(self, &NoBindings))
    }
}

/// Statement node.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Stmt {
    /// `var name : ty [:= initializer]`
    VarDecl {
        name: Token,
        ty: ValueType,
        initializer: Option<Expr>,
    },
    /// `name := value`
    Assign { name: Token, value: Expr },
    /// `print expr`
    Print { keyword: Token, expr: Expr },
    /// `read name`
    Read { keyword: Token, name: Token },
    /// `assert ( expr )`
    Assert { keyword: Token, expr: Expr },
    /// `for var in start .. end do body end for`
    ///
    /// The parser never produces an empty `body`.
    For {
        keyword: Token,
        var: Token,
        start: Expr,
        end: Expr,
        body: Vec<Stmt>,
    },
}

impl Stmt {
    /// Line of the token that introduces the statement.
    pub fn line(&self) -> u32 {
        match self {
            Stmt::VarDecl { name, .. } | Stmt::Assign { name, .. } => name.line,
            Stmt::Print { keyword, .. }
            | Stmt::Read { keyword, .. }
            | Stmt::Assert { keyword, .. }
            | Stmt::For { keyword, .. } => keyword.line,
        }
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let pad = "    ".repeat(depth);
        match self {
            Stmt::VarDecl {
                name,
                ty,
                initializer,
            } => {
                write!(f, "{pad}var {} : {ty}", name.text)?;
                if let Some(init) = initializer {
                    write!(f, " := {init}")?;
                }
                f.write_str(";")
            }
            Stmt::Assign { name, value } => write!(f, "{pad}{} := {value};", name.text),
            Stmt::Print { expr, .. } => write!(f, "{pad}print {expr};"),
            Stmt::Read { name, .. } => write!(f, "{pad}read {};", name.text),
            Stmt::Assert { expr, .. } => write!(f, "{pad}assert ({expr});"),
            Stmt::For {
                var,
                start,
                end,
                body,
                ..
            } => {
                writeln!(f, "{pad}for {} in {start}..{end} do", var.text)?;
                for stmt in body {
                    stmt.fmt_indented(f, depth + 1)?;
                    writeln!(f)?;
                }
                write!(f, "{pad}end for;")
            }
        }
    }
}

/// Source-like rendering, used by `minipl parse`.
impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}

#[cfg(test)]
mod tests;
