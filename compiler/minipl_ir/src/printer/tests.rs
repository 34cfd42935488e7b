use super::*;
use crate::{BinaryOp, Span, Token, TokenKind};
use pretty_assertions::assert_eq;

fn tok(kind: TokenKind, text: &str) -> Token {
    Token::new(kind, 1, text, Span::DUMMY)
}

fn int(n: i64) -> Expr {
    Expr::Literal(Value::Int(n))
}

fn ident(name: &str) -> Expr {
    Expr::Identifier(tok(TokenKind::Identifier, name))
}

struct OneBinding;

impl ValueLookup for OneBinding {
    fn lookup(&self, name: &str) -> Option<Value> {
        (name == "x").then_some(Value::Int(5))
    }
}

#[test]
fn binary_prints_infix() {
    let expr = Expr::binary(int(1), BinaryOp::Lt, tok(TokenKind::Less, "<"), int(0));
    assert_eq!(render_expr(&expr, &NoBindings), "1 < 0");
}

#[test]
fn unary_is_parenthesized() {
    let expr = Expr::unary(tok(TokenKind::Bang, "!"), ident("done"));
    assert_eq!(render_expr(&expr, &NoBindings), "(! done)");
}

#[test]
fn grouping_keeps_parentheses() {
    let inner = Expr::binary(int(2), BinaryOp::Mul, tok(TokenKind::Star, "*"), int(3));
    let expr = Expr::binary(
        Expr::grouping(inner),
        BinaryOp::Eq,
        tok(TokenKind::Equal, "="),
        int(6),
    );
    assert_eq!(render_expr(&expr, &NoBindings), "(2 * 3) = 6");
}

#[test]
fn string_literals_are_quoted() {
    let expr = Expr::binary(
        Expr::Literal(Value::Str("a".into())),
        BinaryOp::Add,
        tok(TokenKind::Plus, "+"),
        Expr::Literal(Value::Str("b".into())),
    );
    assert_eq!(render_expr(&expr, &NoBindings), "\"a\" + \"b\"");
}

#[test]
fn identifiers_are_annotated_with_bound_values() {
    let expr = Expr::logical(
        Expr::binary(ident("x"), BinaryOp::Lt, tok(TokenKind::Less, "<"), int(3)),
        tok(TokenKind::Amp, "&"),
        ident("y"),
    );
    assert_eq!(render_expr(&expr, &OneBinding), "x(=5) < 3 & y");
}

#[test]
fn deep_grouping_does_not_overflow() {
    let mut expr = int(1);
    for _ in 0..2_000 {
        expr = Expr::grouping(expr);
    }
    let rendered = render_expr(&expr, &NoBindings);
    assert_eq!(rendered.len(), 4_001);
}

#[test]
fn string_values_are_re_escaped() {
    struct Multiline;
    impl ValueLookup for Multiline {
        fn lookup(&self, _name: &str) -> Option<Value> {
            Some(Value::Str("a\nb\t\"c\"\\".into()))
        }
    }

    let expr = Expr::binary(
        ident("s"),
        BinaryOp::Eq,
        tok(TokenKind::Equal, "="),
        Expr::Literal(Value::Str("x\r\n".into())),
    );
    let rendered = render_expr(&expr, &Multiline);
    assert_eq!(rendered, r#"s(="a\nb\t\"c\"\\") = "x\r\n""#);
    assert!(!rendered.contains('\n'));
}
