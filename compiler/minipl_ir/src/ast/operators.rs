//! Binary operators.

use crate::TokenKind;

/// Operators accepted in `Binary` expressions.
///
/// `&` is not listed: conjunction is its own node (`Expr::Logical`) because
/// it short-circuits and only accepts booleans.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic (and concatenation for `+`)
    Add,
    Sub,
    Mul,
    Div,

    // Comparison
    Lt,
    Eq,
}

impl BinaryOp {
    /// Map an operator token to its binary operator.
    pub const fn from_token_kind(kind: TokenKind) -> Option<BinaryOp> {
        match kind {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            TokenKind::Less => Some(BinaryOp::Lt),
            TokenKind::Equal => Some(BinaryOp::Eq),
            _ => None,
        }
    }

    /// Source-level symbol, used in diagnostics.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Lt => "<",
            BinaryOp::Eq => "=",
        }
    }
}
