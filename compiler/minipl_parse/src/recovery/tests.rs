use super::*;
use minipl_lexer::lex;
use pretty_assertions::assert_eq;

#[test]
fn token_set_membership() {
    let set = TokenSet::new().with(TokenKind::Print).with(TokenKind::Semicolon);
    assert!(set.contains(TokenKind::Print));
    assert!(!set.contains(TokenKind::Var));
    let wider = set.union(TokenSet::new().with(TokenKind::Var));
    assert!(wider.contains(TokenKind::Var));
    assert!(wider.contains(TokenKind::Semicolon));
    assert_eq!(TokenSet::new(), TokenSet::default());
}

#[test]
fn boundary_sets() {
    assert!(STMT_BOUNDARY.contains(TokenKind::Var));
    assert!(STMT_BOUNDARY.contains(TokenKind::For));
    assert!(!STMT_BOUNDARY.contains(TokenKind::End));

    assert!(!LOOP_BODY_BOUNDARY.contains(TokenKind::Var));
    assert!(!LOOP_BODY_BOUNDARY.contains(TokenKind::For));
    assert!(LOOP_BODY_BOUNDARY.contains(TokenKind::Print));
    assert!(LOOP_BODY_BOUNDARY.contains(TokenKind::End));
    assert!(LOOP_BODY_BOUNDARY.contains(TokenKind::EndOfFile));
}

#[test]
fn stops_after_semicolon() {
    let tokens = lex("1 2 ; x := 3;").tokens;
    let mut cursor = Cursor::new(&tokens);
    synchronize(&mut cursor, STMT_BOUNDARY);
    assert_eq!(cursor.current().text, "x");
}

#[test]
fn stops_at_statement_keyword() {
    let tokens = lex("1 2 print 3;").tokens;
    let mut cursor = Cursor::new(&tokens);
    synchronize(&mut cursor, STMT_BOUNDARY);
    assert!(cursor.check(TokenKind::Print));
}

#[test]
fn loop_body_skips_var() {
    let tokens = lex("1 var x end for;").tokens;
    let mut cursor = Cursor::new(&tokens);
    synchronize(&mut cursor, LOOP_BODY_BOUNDARY);
    assert!(cursor.check(TokenKind::End));
}

#[test]
fn stays_on_recovery_token() {
    let tokens = lex("print 1;").tokens;
    let mut cursor = Cursor::new(&tokens);
    synchronize(&mut cursor, STMT_BOUNDARY);
    assert!(cursor.check(TokenKind::Print));
    assert!(cursor.previous().is_none());
}

#[test]
fn runs_to_eof() {
    let tokens = lex("1 2 3").tokens;
    let mut cursor = Cursor::new(&tokens);
    synchronize(&mut cursor, STMT_BOUNDARY);
    assert!(cursor.is_at_end());
}
