//! Helpers for running programs with captured I/O.

use minipl_eval::{buffer_handler, scripted_handler};
use miniplc::{run_source, ExitStatus, RunOutcome};

/// Everything a run produced.
pub struct Captured {
    pub outcome: RunOutcome,
    pub output: String,
    pub diagnostics: String,
}

impl Captured {
    pub fn status(&self) -> ExitStatus {
        self.outcome.status
    }

    /// Diagnostics split into records (each ends with a newline).
    pub fn diagnostic_lines(&self) -> Vec<&str> {
        self.diagnostics.lines().collect()
    }
}

pub fn run_with_input(source: &str, input: &[&str]) -> Captured {
    let print = buffer_handler();
    let outcome = run_source(source, &print, scripted_handler(input.iter().copied()));
    Captured {
        outcome,
        output: print.get_output(),
        diagnostics: print.get_diagnostics(),
    }
}

pub fn run(source: &str) -> Captured {
    run_with_input(source, &[])
}
