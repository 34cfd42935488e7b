use super::*;
use pretty_assertions::assert_eq;

#[test]
fn plain_text_is_unchanged() {
    assert_eq!(unescape_string("hello world"), "hello world");
}

#[test]
fn known_escapes_are_decoded() {
    assert_eq!(unescape_string(r"a\nb"), "a\nb");
    assert_eq!(unescape_string(r"\t\r"), "\t\r");
    assert_eq!(unescape_string(r#"say \"hi\""#), "say \"hi\"");
    assert_eq!(unescape_string(r"back\\slash"), "back\\slash");
}

#[test]
fn unknown_escape_is_kept() {
    assert_eq!(unescape_string(r"\q"), "\\q");
}

#[test]
fn trailing_backslash_is_kept() {
    assert_eq!(unescape_string("end\\"), "end\\");
}

#[test]
fn resolve_escape_table() {
    assert_eq!(resolve_escape('n'), Some('\n'));
    assert_eq!(resolve_escape('"'), Some('"'));
    assert_eq!(resolve_escape('0'), None);
    assert_eq!(resolve_escape('\''), None);
}
