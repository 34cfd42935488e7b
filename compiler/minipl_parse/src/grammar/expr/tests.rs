use crate::parse;
use minipl_ir::{BinaryOp, Expr, Stmt, Value};
use minipl_lexer::lex;
use pretty_assertions::assert_eq;

/// Parse `print <source>;` and return the printed expression.
fn expr(source: &str) -> Expr {
    let tokens = lex(&format!("print {source};")).tokens;
    let output = parse(&tokens);
    assert!(output.errors.is_empty(), "errors: {:?}", output.errors);
    match output.statements.into_iter().next() {
        Some(Stmt::Print { expr, .. }) => expr,
        other => panic!("expected print, got {other:?}"),
    }
}

fn first_error(source: &str) -> String {
    let tokens = lex(&format!("print {source};")).tokens;
    let output = parse(&tokens);
    output
        .errors
        .first()
        .map(|e| e.to_diagnostic().to_string())
        .unwrap_or_default()
}

#[test]
fn literals() {
    assert_eq!(expr("7"), Expr::Literal(Value::Int(7)));
    assert_eq!(expr("\"hi\\n\""), Expr::Literal(Value::Str("hi\n".into())));
}

#[test]
fn binary_operators() {
    for (source, op) in [
        ("1 + 2", BinaryOp::Add),
        ("1 - 2", BinaryOp::Sub),
        ("1 * 2", BinaryOp::Mul),
        ("1 / 2", BinaryOp::Div),
        ("1 < 2", BinaryOp::Lt),
        ("1 = 2", BinaryOp::Eq),
    ] {
        match expr(source) {
            Expr::Binary { op: parsed, .. } => assert_eq!(parsed, op, "{source}"),
            other => panic!("{source}: expected binary, got {other:?}"),
        }
    }
}

#[test]
fn logical_and() {
    assert!(matches!(expr("a & b"), Expr::Logical { .. }));
}

#[test]
fn unary_not_takes_one_operand() {
    let parsed = expr("!(a & b)");
    assert_eq!(parsed.to_string(), "(! (a & b))");
}

#[test]
fn grouping_nests() {
    assert_eq!(expr("((1 + 2)) * 3").to_string(), "((1 + 2)) * 3");
}

#[test]
fn chained_operators_are_rejected() {
    assert_eq!(
        first_error("1 + 2 + 3"),
        "[line 1] Error at '+': Expect ';' after statement."
    );
}

#[test]
fn missing_operand() {
    assert_eq!(
        first_error("1 +"),
        "[line 1] Error at ';': Expect expression."
    );
}

#[test]
fn unclosed_group() {
    assert_eq!(
        first_error("(1 + 2"),
        "[line 1] Error at ';': Expect ')' after expression."
    );
}

#[test]
fn deep_nesting() {
    let depth = 2_000;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    let mut parsed = expr(&source);
    let mut levels = 0;
    while let Expr::Grouping(inner) = parsed {
        parsed = *inner;
        levels += 1;
    }
    assert_eq!(levels, depth);
    assert_eq!(parsed, Expr::Literal(Value::Int(1)));
}
