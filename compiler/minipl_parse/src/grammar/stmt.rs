//! Statement parsing.

use minipl_ir::{Stmt, TokenKind, ValueType};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse `statement ';'`, recovering on error.
    ///
    /// Returns `None` if the statement was malformed; the error has been
    /// recorded and the cursor moved to a safe place to resume.
    pub(crate) fn statement_or_recover(&mut self) -> Option<Stmt> {
        let result = self.statement().and_then(|stmt| {
            self.cursor
                .expect(TokenKind::Semicolon, "Expect ';' after statement.")?;
            Ok(stmt)
        });
        match result {
            Ok(stmt) => {
                tracing::trace!(line = stmt.line(), "statement");
                Some(stmt)
            }
            Err(error) => {
                self.recover(error);
                None
            }
        }
    }

    fn statement(&mut self) -> Result<Stmt, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Var => self.var_decl(),
            TokenKind::Identifier => self.assignment(),
            TokenKind::For => self.for_loop(),
            TokenKind::Print => {
                let keyword = self.cursor.advance().clone();
                let expr = self.expression()?;
                Ok(Stmt::Print { keyword, expr })
            }
            TokenKind::Read => {
                let keyword = self.cursor.advance().clone();
                let name = self
                    .cursor
                    .expect(TokenKind::Identifier, "Expect identifier after 'read'.")?
                    .clone();
                Ok(Stmt::Read { keyword, name })
            }
            TokenKind::Assert => self.assertion(),
            _ => Err(self.cursor.error_here("Expect statement.")),
        }
    }

    /// `var IDENT ':' type [':=' expr]`
    fn var_decl(&mut self) -> Result<Stmt, ParseError> {
        self.cursor.advance();
        let name = self
            .cursor
            .expect(TokenKind::Identifier, "Expect identifier after 'var'.")?
            .clone();
        self.cursor
            .expect(TokenKind::Colon, "Expect ':' after variable name.")?;
        let ty = self.type_name()?;
        let initializer = if self.cursor.eat(TokenKind::Assign).is_some() {
            Some(self.expression()?)
        } else {
            None
        };
        Ok(Stmt::VarDecl {
            name,
            ty,
            initializer,
        })
    }

    fn type_name(&mut self) -> Result<ValueType, ParseError> {
        let ty = match self.cursor.current_kind() {
            TokenKind::IntType => ValueType::Int,
            TokenKind::StringType => ValueType::Str,
            TokenKind::BoolType => ValueType::Bool,
            _ => return Err(self.cursor.error_here("Expect type after ':'.")),
        };
        self.cursor.advance();
        Ok(ty)
    }

    /// `IDENT ':=' expr`
    fn assignment(&mut self) -> Result<Stmt, ParseError> {
        let name = self.cursor.advance().clone();
        self.cursor
            .expect(TokenKind::Assign, "Expect ':=' after identifier.")?;
        let value = self.expression()?;
        Ok(Stmt::Assign { name, value })
    }

    /// `assert '(' expr ')'`
    fn assertion(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self.cursor.advance().clone();
        self.cursor
            .expect(TokenKind::LeftParen, "Expect '(' after 'assert'.")?;
        let expr = self.expression()?;
        self.cursor
            .expect(TokenKind::RightParen, "Expect ')' after assert expression.")?;
        Ok(Stmt::Assert { keyword, expr })
    }

    /// `for IDENT in expr '..' expr do (statement ';')+ end for`
    fn for_loop(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self.cursor.advance().clone();
        let var = self
            .cursor
            .expect(TokenKind::Identifier, "Expect identifier after 'for'.")?
            .clone();
        self.cursor
            .expect(TokenKind::In, "Expect 'in' after loop variable.")?;
        let start = self.expression()?;
        self.cursor
            .expect(TokenKind::DotDot, "Expect '..' between range bounds.")?;
        let end = self.expression()?;
        self.cursor.expect(TokenKind::Do, "Expect 'do' after range.")?;

        let errors_before = self.errors.len();
        self.loop_depth += 1;
        let mut body = Vec::new();
        while !self.cursor.check(TokenKind::End) && !self.cursor.is_at_end() {
            if let Some(stmt) = self.statement_or_recover() {
                body.push(stmt);
            }
        }
        self.loop_depth -= 1;

        let empty_body = body.is_empty() && self.errors.len() == errors_before;
        let end_keyword = self
            .cursor
            .expect(TokenKind::End, "Expect 'end' after loop body.")?
            .clone();
        self.cursor
            .expect(TokenKind::For, "Expect 'for' after 'end'.")?;
        if empty_body {
            return Err(ParseError::new(
                end_keyword,
                "Expect at least one statement in loop body.",
            ));
        }

        Ok(Stmt::For {
            keyword,
            var,
            start,
            end,
            body,
        })
    }
}
