//! Command handlers for the `minipl` CLI.
//!
//! Each handler takes a file path, does its work, and returns the
//! [`ExitStatus`] for `main` to exit with. Shared helpers live here.

use minipl_diagnostic::{ColorMode, TerminalEmitter};

use crate::ExitStatus;

mod check;
mod debug;
mod run;

pub use check::check_file;
pub use debug::{lex_file, parse_file};
pub use run::run_file;

/// Read a source file, reporting a readable message on failure.
pub(crate) fn read_file(path: &str) -> Result<String, ExitStatus> {
    std::fs::read_to_string(path).map_err(|e| {
        let msg = match e.kind() {
            std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
            std::io::ErrorKind::PermissionDenied => {
                format!("permission denied reading '{path}'")
            }
            std::io::ErrorKind::InvalidData => {
                format!("'{path}' contains invalid UTF-8 data")
            }
            _ => format!("error reading '{path}': {e}"),
        };
        eprintln!("{msg}");
        ExitStatus::NoInput
    })
}

/// Emitter for commands that report straight to stderr.
pub(crate) fn stderr_emitter(color: ColorMode) -> TerminalEmitter<std::io::Stderr> {
    let is_tty = std::io::IsTerminal::is_terminal(&std::io::stderr());
    TerminalEmitter::stderr(color, is_tty)
}
