//! Property tests over generated programs.

use crate::common::run;
use miniplc::ExitStatus;
use proptest::prelude::*;

/// One statement over the pre-declared `a` (int) and `s` (string).
fn statement() -> impl Strategy<Value = String> {
    let operand = prop_oneof![
        (0i64..50).prop_map(|n| n.to_string()),
        Just("a".to_owned()),
    ];
    let op = prop_oneof![Just("+"), Just("-"), Just("*"), Just("/")];
    prop_oneof![
        (operand.clone(), op, operand.clone())
            .prop_map(|(l, op, r)| format!("a := {l} {op} {r};")),
        operand
            .clone()
            .prop_map(|e| format!("print {e};")),
        "[a-z ]{0,8}".prop_map(|text| format!("s := s + \"{text}\";")),
        Just("print s;".to_owned()),
        (0i64..4, 0i64..4).prop_map(|(lo, hi)| {
            format!("for i in {lo}..{hi} do a := a + i; print a; end for;")
        }),
        operand.prop_map(|e| format!("assert ({e} < 10);")),
    ]
}

fn program() -> impl Strategy<Value = String> {
    proptest::collection::vec(statement(), 0..24).prop_map(|stmts| {
        let mut source = String::from("var a : int := 1;\nvar s : string := \"\";\nvar i : int;\n");
        for stmt in stmts {
            source.push_str(&stmt);
            source.push('\n');
        }
        source
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn interpretation_is_deterministic(source in program()) {
        let first = run(&source);
        let second = run(&source);
        prop_assert_eq!(first.status(), second.status());
        prop_assert_eq!(&first.output, &second.output);
        prop_assert_eq!(&first.diagnostics, &second.diagnostics);
    }

    #[test]
    fn generated_programs_pass_the_front_end(source in program()) {
        let status = run(&source).status();
        prop_assert!(
            status == ExitStatus::Success || status == ExitStatus::RuntimeError,
            "unexpected status {:?} for:\n{}",
            status,
            source
        );
    }
}
