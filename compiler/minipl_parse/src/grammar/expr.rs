//! Expression parsing.
//!
//! Expressions are flat: at most one binary or logical operator, and `!`
//! applies to a single operand. `a + b + c` is a syntax error, not a
//! precedence question.

use minipl_ir::{BinaryOp, Expr, TokenKind};
use minipl_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// `'!' operand | operand [ (bin-op | '&') operand ]`
    pub(crate) fn expression(&mut self) -> Result<Expr, ParseError> {
        if self.cursor.check(TokenKind::Bang) {
            let op = self.cursor.advance().clone();
            let operand = self.operand()?;
            return Ok(Expr::unary(op, operand));
        }

        let left = self.operand()?;
        let kind = self.cursor.current_kind();
        if kind == TokenKind::Amp {
            let op = self.cursor.advance().clone();
            let right = self.operand()?;
            return Ok(Expr::logical(left, op, right));
        }
        if let Some(op) = BinaryOp::from_token_kind(kind) {
            let token = self.cursor.advance().clone();
            let right = self.operand()?;
            return Ok(Expr::binary(left, op, token, right));
        }
        Ok(left)
    }

    /// `INT | STRING | IDENT | '(' expr ')'`
    fn operand(&mut self) -> Result<Expr, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::IntValue | TokenKind::StringValue => {
                let token = self.cursor.advance();
                let value = token
                    .literal
                    .clone()
                    .ok_or_else(|| ParseError::new(token.clone(), "Malformed literal."))?;
                Ok(Expr::Literal(value))
            }
            TokenKind::Identifier => Ok(Expr::Identifier(self.cursor.advance().clone())),
            TokenKind::LeftParen => {
                self.cursor.advance();
                let inner = ensure_sufficient_stack(|| self.expression())?;
                self.cursor
                    .expect(TokenKind::RightParen, "Expect ')' after expression.")?;
                Ok(Expr::grouping(inner))
            }
            _ => Err(self.cursor.error_here("Expect expression.")),
        }
    }
}

#[cfg(test)]
mod tests;
