use super::*;
use crate::{Span, TokenKind};
use pretty_assertions::assert_eq;

fn tok(kind: TokenKind, text: &str, line: u32) -> Token {
    Token::new(kind, line, text, Span::DUMMY)
}

#[test]
fn binary_op_from_token_kind() {
    assert_eq!(BinaryOp::from_token_kind(TokenKind::Plus), Some(BinaryOp::Add));
    assert_eq!(BinaryOp::from_token_kind(TokenKind::Equal), Some(BinaryOp::Eq));
    assert_eq!(BinaryOp::from_token_kind(TokenKind::Amp), None);
    assert_eq!(BinaryOp::from_token_kind(TokenKind::Bang), None);
}

#[test]
fn binary_op_symbols() {
    assert_eq!(BinaryOp::Eq.as_symbol(), "=");
    assert_eq!(BinaryOp::Div.as_symbol(), "/");
}

#[test]
fn stmt_line_comes_from_introducing_token() {
    let print = Stmt::Print {
        keyword: tok(TokenKind::Print, "print", 4),
        expr: Expr::Literal(Value::Int(1)),
    };
    assert_eq!(print.line(), 4);

    let assign = Stmt::Assign {
        name: tok(TokenKind::Identifier, "x", 9),
        value: Expr::Literal(Value::Int(1)),
    };
    assert_eq!(assign.line(), 9);
}

#[test]
fn for_statement_displays_as_source() {
    let stmt = Stmt::For {
        keyword: tok(TokenKind::For, "for", 1),
        var: tok(TokenKind::Identifier, "i", 1),
        start: Expr::Literal(Value::Int(1)),
        end: Expr::Literal(Value::Int(3)),
        body: vec![Stmt::Print {
            keyword: tok(TokenKind::Print, "print", 2),
            expr: Expr::Identifier(tok(TokenKind::Identifier, "i", 2)),
        }],
    };
    assert_eq!(stmt.to_string(), "for i in 1..3 do\n    print i;\nend for;");
}

#[test]
fn var_decl_displays_optional_initializer() {
    let bare = Stmt::VarDecl {
        name: tok(TokenKind::Identifier, "s", 1),
        ty: ValueType::Str,
        initializer: None,
    };
    assert_eq!(bare.to_string(), "var s : string;");

    let init = Stmt::VarDecl {
        name: tok(TokenKind::Identifier, "n", 1),
        ty: ValueType::Int,
        initializer: Some(Expr::Literal(Value::Int(2))),
    };
    assert_eq!(init.to_string(), "var n : int := 2;");
}
