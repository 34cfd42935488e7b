//! Expression printer for diagnostics.
//!
//! Renders an expression back to source-like text. Used when a failed
//! `assert` is reported, and by `Display for Expr`.
//!
//! - literals print as written (`1`, `"ab"`), with string escapes restored
//! - binary and logical expressions print `left op right`
//! - groupings keep their parentheses
//! - unary expressions are parenthesized with the operator first: `(! b)`
//! - identifiers print their name, annotated with the current value when a
//!   [`ValueLookup`] can supply one: `x(=5)`

use minipl_stack::ensure_sufficient_stack;

use crate::{Expr, Value};

/// Source of variable values for annotating identifiers.
pub trait ValueLookup {
    /// Current value of `name`, or `None` if unknown or uninitialized.
    fn lookup(&self, name: &str) -> Option<Value>;
}

/// Lookup that knows no variables; identifiers print bare.
pub struct NoBindings;

impl ValueLookup for NoBindings {
    fn lookup(&self, _name: &str) -> Option<Value> {
        None
    }
}

pub struct ExprPrinter<'a, L: ValueLookup + ?Sized> {
    bindings: &'a L,
}

impl<'a, L: ValueLookup + ?Sized> ExprPrinter<'a, L> {
    pub fn new(bindings: &'a L) -> Self {
        ExprPrinter { bindings }
    }

    pub fn print(&self, expr: &Expr) -> String {
        let mut out = String::new();
        self.write_expr(&mut out, expr);
        out
    }

    fn write_expr(&self, out: &mut String, expr: &Expr) {
        ensure_sufficient_stack(|| match expr {
            Expr::Literal(value) => write_literal(out, value),
            Expr::Grouping(inner) => {
                out.push('(');
                self.write_expr(out, inner);
                out.push(')');
            }
            Expr::Unary { op, operand } => {
                out.push('(');
                out.push_str(&op.text);
                out.push(' ');
                self.write_expr(out, operand);
                out.push(')');
            }
            Expr::Binary {
                left, token, right, ..
            }
            | Expr::Logical {
                left,
                op: token,
                right,
            } => {
                self.write_expr(out, left);
                out.push(' ');
                out.push_str(&token.text);
                out.push(' ');
                self.write_expr(out, right);
            }
            Expr::Identifier(name) => {
                out.push_str(&name.text);
                if let Some(value) = self.bindings.lookup(&name.text) {
                    out.push_str("(=");
                    write_literal(out, &value);
                    out.push(')');
                }
            }
        });
    }
}

fn write_literal(out: &mut String, value: &Value) {
    match value {
        Value::Str(s) => {
            out.push('"');
            write_escaped(out, s);
            out.push('"');
        }
        Value::Int(_) | Value::Bool(_) => out.push_str(&value.to_string()),
    }
}

/// Inverse of the lexer's escape decoding, so a rendered string stays on
/// one line and reads back as the same literal.
fn write_escaped(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ => out.push(c),
        }
    }
}

/// Render `expr`, annotating identifiers from `bindings`.
pub fn render_expr<L: ValueLookup + ?Sized>(expr: &Expr, bindings: &L) -> String {
    ExprPrinter::new(bindings).print(expr)
}

#[cfg(test)]
mod tests;
