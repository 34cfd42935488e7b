//! Run-time behavior of complete programs.

use crate::common::{run, run_with_input};
use miniplc::ExitStatus;
use pretty_assertions::assert_eq;

#[test]
fn arithmetic_and_print() {
    let captured = run("var x : int := 1 + 2;\nprint x;");
    assert_eq!(captured.status(), ExitStatus::Success);
    assert_eq!(captured.output, "3");
    assert_eq!(captured.diagnostics, "");
}

#[test]
fn string_concatenation() {
    let captured = run("var s : string := \"a\" + \"b\";\nprint s;");
    assert_eq!(captured.output, "ab");
}

#[test]
fn for_loop_prints_without_separators_and_keeps_last_value() {
    let captured = run("var i : int;\nfor i in 1..3 do print i; end for;\nprint i;");
    assert_eq!(captured.status(), ExitStatus::Success);
    assert_eq!(captured.output, "1233");
}

#[test]
fn passing_assert_is_silent() {
    let captured = run("var b : bool := 1 < 2;\nassert (b);");
    assert_eq!(captured.status(), ExitStatus::Success);
    assert_eq!(captured.diagnostics, "");
    assert_eq!(captured.outcome.failed_assertions, 0);
}

#[test]
fn failed_assert_reports_and_continues() {
    let captured = run("assert (1 < 0);\nprint \"still here\";");
    assert_eq!(captured.status(), ExitStatus::Success);
    assert_eq!(captured.output, "still here");
    assert_eq!(captured.diagnostics, "Assertion failed: 1 < 0\n(line 1).\n");
    assert_eq!(captured.outcome.failed_assertions, 1);
}

#[test]
fn failed_assert_shows_current_values() {
    let source = r#"
        var x : int := 5;
        var b : bool := x = 5;
        assert ((x < 3) & b);
        assert (!b);
    "#;
    let captured = run(source);
    assert_eq!(
        captured.diagnostic_lines(),
        vec![
            "Assertion failed: (x(=5) < 3) & b(=true)",
            "(line 4).",
            "Assertion failed: (! b(=true))",
            "(line 5).",
        ]
    );
    assert_eq!(captured.outcome.failed_assertions, 2);
}

#[test]
fn uninitialized_variable_is_a_runtime_error() {
    let captured = run("var x : int;\nprint x;");
    assert_eq!(captured.status(), ExitStatus::RuntimeError);
    assert_eq!(captured.output, "");
    assert_eq!(
        captured.diagnostics,
        "Variable 'x' is not initialized.\n(line 2).\n"
    );
}

#[test]
fn division_by_zero_stops_execution() {
    let captured = run("var z : int := 0;\nprint \"a\";\nprint 1 / z;\nprint \"b\";");
    assert_eq!(captured.status(), ExitStatus::RuntimeError);
    assert_eq!(captured.output, "a");
    assert_eq!(captured.diagnostics, "Division by zero.\n(line 3).\n");
}

#[test]
fn read_and_echo() {
    let source = r#"
        var name : string;
        var n : int;
        print "Name? ";
        read name;
        print "Count? ";
        read n;
        var i : int;
        for i in 1..n do
            print ("Hi " + name) + "\n";
        end for;
    "#;
    let captured = run_with_input(source, &["Ada\n", " 2\n"]);
    assert_eq!(captured.status(), ExitStatus::Success);
    assert_eq!(captured.output, "Name? Count? Hi Ada\nHi Ada\n");
}

#[test]
fn malformed_integer_input_is_a_runtime_error() {
    let captured = run_with_input("var n : int;\nread n;", &["12x\n"]);
    assert_eq!(captured.status(), ExitStatus::RuntimeError);
    assert_eq!(
        captured.diagnostics,
        "Cannot read '12x' as an integer.\n(line 2).\n"
    );
}

#[test]
fn read_past_end_of_input_is_a_runtime_error() {
    let captured = run_with_input("var s : string;\nread s;\nread s;", &["only line"]);
    assert_eq!(captured.status(), ExitStatus::RuntimeError);
    assert_eq!(
        captured.diagnostics,
        "Unexpected end of input.\n(line 3).\n"
    );
}

#[test]
fn factorial() {
    let source = r#"
        var nTimes : int := 5;
        var x : int;
        var result : int := 1;
        for x in 1..nTimes do
            result := result * x;
        end for;
        print "The result is: ";
        print result;
        assert (result = 120);
    "#;
    let captured = run(source);
    assert_eq!(captured.status(), ExitStatus::Success);
    assert_eq!(captured.output, "The result is: 120");
    assert_eq!(captured.diagnostics, "");
}

#[test]
fn comments_are_ignored() {
    let source = "// line comment\nvar x : int := 1; /* block /* nested */ still */\nprint x;";
    let captured = run(source);
    assert_eq!(captured.status(), ExitStatus::Success);
    assert_eq!(captured.output, "1");
}

#[test]
fn failed_assert_on_multiline_string_stays_one_record() {
    let captured = run("var s : string := \"a\\nb\";\nassert (s = \"x\");");
    assert_eq!(captured.status(), ExitStatus::Success);
    assert_eq!(
        captured.diagnostics,
        "Assertion failed: s(=\"a\\nb\") = \"x\"\n(line 2).\n"
    );
}

#[test]
fn declaration_inside_loop_is_re_executed() {
    let captured = run("var i : int;\nfor i in 1..2 do\nvar y : int := i;\nprint y;\nend for;");
    assert_eq!(captured.status(), ExitStatus::Success);
    assert_eq!(captured.output, "12");
    assert_eq!(captured.diagnostics, "");
}
