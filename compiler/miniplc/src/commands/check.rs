//! The `check` command: lex, parse, and type check without running.

use minipl_diagnostic::ColorMode;
use minipl_eval::stdout_handler;

use super::read_file;
use crate::{check_source, ExitStatus};

pub fn check_file(path: &str, color: ColorMode) -> ExitStatus {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(status) => return status,
    };
    check_source(&source, &stdout_handler(color))
}
