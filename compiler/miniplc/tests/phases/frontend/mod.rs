//! Static errors: what is reported, and that nothing runs.

use crate::common::run;
use miniplc::ExitStatus;
use pretty_assertions::assert_eq;

#[test]
fn lexical_error_exits_with_syntax_status() {
    let captured = run("print 1;\nprint $;");
    assert_eq!(captured.status(), ExitStatus::SyntaxError);
    assert_eq!(captured.output, "");
    assert_eq!(
        captured.diagnostic_lines()[0],
        "[line 2] Error: Unexpected character '$'."
    );
}

#[test]
fn unterminated_string_is_reported_on_its_starting_line() {
    let captured = run("print \"abc;\nprint 1;");
    assert_eq!(captured.status(), ExitStatus::SyntaxError);
    assert_eq!(
        captured.diagnostic_lines()[0],
        "[line 1] Error: Unterminated string."
    );
}

#[test]
fn lone_dot_is_a_lexical_error() {
    let captured = run("var i : int;\nfor i in 1.3 do print i; end for;");
    assert_eq!(captured.status(), ExitStatus::SyntaxError);
    assert_eq!(
        captured.diagnostic_lines()[0],
        "[line 2] Error: Expected '..' but found '.'."
    );
}

#[test]
fn parse_errors_are_all_reported() {
    let captured = run("print ;\nvar x int;\nprint 1;");
    assert_eq!(captured.status(), ExitStatus::SyntaxError);
    assert_eq!(
        captured.diagnostic_lines(),
        vec![
            "[line 1] Error at ';': Expect expression.",
            "[line 2] Error at 'int': Expect ':' after variable name.",
        ]
    );
    assert_eq!(captured.output, "");
}

#[test]
fn missing_semicolon_at_end_of_input() {
    let captured = run("print 1");
    assert_eq!(captured.status(), ExitStatus::SyntaxError);
    assert_eq!(
        captured.diagnostic_lines(),
        vec!["[line 1] Error at end: Expect ';' after statement."]
    );
}

#[test]
fn empty_loop_body_is_rejected_statically() {
    let captured = run("var i : int;\nfor i in 1..2 do\nend for;\nprint \"never\";");
    assert_eq!(captured.status(), ExitStatus::SyntaxError);
    assert_eq!(captured.output, "");
    assert_eq!(
        captured.diagnostic_lines(),
        vec!["[line 3] Error at 'end': Expect at least one statement in loop body."]
    );
}

#[test]
fn redeclaration_is_one_type_error_and_checking_continues() {
    let captured = run("var x : int;\nvar x : string;\nvar y : int := \"s\";");
    assert_eq!(captured.status(), ExitStatus::TypeError);
    assert_eq!(
        captured.diagnostics,
        "Cannot declare 'x' more than once.\n(line 2).\n\
         'y' is of type int, but got string instead.\n(line 3).\n"
    );
}

#[test]
fn assigning_the_loop_counter_is_a_type_error() {
    let source = r#"
        var i : int;
        var b : bool := 1;
        for i in 1..5 do
            i := 10;
        end for;
        var s : string := 2;
    "#;
    let captured = run(source);
    assert_eq!(captured.status(), ExitStatus::TypeError);
    assert_eq!(
        captured.diagnostic_lines(),
        vec![
            "'b' is of type bool, but got int instead.",
            "(line 3).",
            "Cannot assign to 'i' in a for loop where it is used as a loop counter.",
            "(line 5).",
            "'s' is of type string, but got int instead.",
            "(line 7).",
        ]
    );
    assert_eq!(captured.output, "");
}

#[test]
fn type_errors_prevent_execution() {
    let captured = run("print \"side effect\";\nprint 1 < 2;");
    assert_eq!(captured.status(), ExitStatus::TypeError);
    assert_eq!(captured.output, "");
    assert_eq!(
        captured.diagnostics,
        "Can only print int or string, got bool instead.\n(line 2).\n"
    );
}
