use super::*;
use pretty_assertions::assert_eq;

#[test]
fn stage_codes_are_ordered() {
    assert_eq!(ExitStatus::Success.code(), 0);
    assert_eq!(ExitStatus::SyntaxError.code(), 1);
    assert_eq!(ExitStatus::TypeError.code(), 2);
    assert_eq!(ExitStatus::RuntimeError.code(), 3);
}

#[test]
fn cli_codes_follow_sysexits() {
    assert_eq!(ExitStatus::Usage.code(), 64);
    assert_eq!(ExitStatus::NoInput.code(), 66);
}
