//! The `run` command.

use minipl_diagnostic::ColorMode;
use minipl_eval::{stdin_handler, stdout_handler};

use super::read_file;
use crate::{run_source, ExitStatus};

/// Run a MiniPL program against the terminal.
pub fn run_file(path: &str, color: ColorMode) -> ExitStatus {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(status) => return status,
    };
    run_source(&source, &stdout_handler(color), stdin_handler()).status
}
